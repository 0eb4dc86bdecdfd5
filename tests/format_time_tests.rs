use visitorlog::format_time;

#[test]
fn test_four_digits_become_hh_mm() {
    assert_eq!(format_time("0800"), "08:00");
    assert_eq!(format_time("1700"), "17:00");
}

#[test]
fn test_separators_and_noise_are_stripped() {
    assert_eq!(format_time("17.30"), "17:30");
    assert_eq!(format_time("08:15"), "08:15");
    assert_eq!(format_time(" 0945 "), "09:45");
}

#[test]
fn test_three_digits_keep_historical_quirk() {
    // "800" is not read as 08:00
    assert_eq!(format_time("800"), "0:80");
    assert_eq!(format_time("930"), "0:93");
}

#[test]
fn test_sentinel_and_empty() {
    assert_eq!(format_time("-"), "-");
    assert_eq!(format_time(""), "-");
}

#[test]
fn test_other_lengths_pass_through_unchanged() {
    assert_eq!(format_time("abc"), "abc");
    assert_eq!(format_time("12"), "12");
    assert_eq!(format_time("123456"), "123456");
}

#[test]
fn test_no_range_validation() {
    assert_eq!(format_time("9999"), "99:99");
}
