mod common;
use common::{row, sheet_with};
use visitorlog::config::Config;
use visitorlog::core::checkin::{CheckIn, CheckInLogic};
use visitorlog::core::checkout::CheckOutLogic;
use visitorlog::core::del::DeleteLogic;
use visitorlog::core::edit::{EditLogic, RecordPatch};
use visitorlog::core::query::{QueryLogic, RecordFilter};
use visitorlog::errors::AppError;
use visitorlog::store::MemorySheet;
use visitorlog::{VisitStatus, VisitorLedger};

fn cfg() -> Config {
    Config::default()
}

fn form(name: &str, ktp: &str) -> CheckIn {
    CheckIn {
        name: name.into(),
        id_number: ktp.into(),
        badge_id: "V-07".into(),
        time_in: "0830".into(),
        purpose: None,
        guests: None,
        date: Some("2025-09-01".into()),
    }
}

fn visitors() -> MemorySheet {
    sheet_with(vec![
        row("1", "01-09-2025", "Budi", "111", "08:00", "-", "IN"),
        row("2", "15-09-2025", "Siti", "222", "09:00", "10:00", "OUT"),
        row("3", "02-10-2025", "Budi", "111", "13:00", "-", "IN"),
        row("4", "03-10-2025", "Andi", "333", "14:00", "-", "IN"),
    ])
}

// ---------------------------
// check-in
// ---------------------------

#[test]
fn test_checkin_appends_numbered_in_record() {
    let mut store = visitors();
    let rec = CheckInLogic::apply(&mut store, &cfg(), &form("Rina", "555")).expect("checkin");

    assert_eq!(rec.sequence_number, 5);
    assert_eq!(rec.visit_date, "01-09-2025");
    assert_eq!(rec.time_in, "08:30");
    assert_eq!(rec.time_out, "-");
    assert_eq!(rec.purpose, "Kunjungan");
    assert_eq!(rec.guest_count, 1);
    assert_eq!(rec.status, VisitStatus::In);

    assert_eq!(store.rows.len(), 5);
    assert_eq!(store.rows[4][2], "Rina");
}

#[test]
fn test_checkin_keeps_purpose_and_guests() {
    let mut store = MemorySheet::new();
    let mut input = form("Rina", "555");
    input.purpose = Some("Delivery".into());
    input.guests = Some(3);

    let rec = CheckInLogic::apply(&mut store, &cfg(), &input).expect("checkin");
    assert_eq!(rec.purpose, "Delivery");
    assert_eq!(rec.guest_count, 3);
    assert_eq!(rec.sequence_number, 1);
}

#[test]
fn test_checkin_validation_leaves_store_untouched() {
    let mut store = visitors();

    let mut missing_badge = form("Rina", "555");
    missing_badge.badge_id = "  ".into();

    for bad in [form("", "555"), form("Rina", ""), missing_badge] {
        let res = CheckInLogic::apply(&mut store, &cfg(), &bad);
        assert!(matches!(res, Err(AppError::Validation(_))));
    }

    let mut zero_guests = form("Rina", "555");
    zero_guests.guests = Some(0);
    assert!(CheckInLogic::apply(&mut store, &cfg(), &zero_guests).is_err());

    let mut bad_date = form("Rina", "555");
    bad_date.date = Some("31-31-2025".into());
    assert!(matches!(
        CheckInLogic::apply(&mut store, &cfg(), &bad_date),
        Err(AppError::InvalidDate(_))
    ));

    assert_eq!(store.writes, 0);
    assert_eq!(store.rows.len(), 4);
}

#[test]
fn test_checkin_rejects_sentinel_name() {
    let mut store = visitors();
    let before = store.rows.clone();

    let res = CheckInLogic::apply(&mut store, &cfg(), &form("-", "999"));
    assert!(matches!(res, Err(AppError::Validation(_))));

    let res = CheckInLogic::apply(&mut store, &cfg(), &form(" - ", "999"));
    assert!(matches!(res, Err(AppError::Validation(_))));

    assert_eq!(store.writes, 0);
    assert_eq!(store.rows, before);
}

#[test]
fn test_checkin_does_not_persist_over_unreadable_store() {
    let mut store = visitors();
    store.fail_reads = true;

    let res = CheckInLogic::apply(&mut store, &cfg(), &form("Rina", "555"));
    assert!(matches!(res, Err(AppError::Storage(_))));
    assert_eq!(store.writes, 0);
    assert_eq!(store.rows.len(), 4);
}

// ---------------------------
// check-out
// ---------------------------

#[test]
fn test_checkout_marks_latest_in_record_of_name() {
    let mut store = visitors();
    let rec = CheckOutLogic::apply(&mut store, &cfg(), "budi", None, Some("1700")).expect("out");

    assert_eq!(rec.sequence_number, 3);
    assert_eq!(rec.status, VisitStatus::Out);
    assert_eq!(rec.time_out, "17:00");

    // the earlier Budi row is untouched
    assert_eq!(store.rows[0][8], "-");
    assert_eq!(store.rows[0][9], "IN");
    assert_eq!(store.rows[2][8], "17:00");
    assert_eq!(store.rows[2][9], "OUT");
}

#[test]
fn test_checkout_twice_reaches_older_visit() {
    let mut store = visitors();
    CheckOutLogic::apply(&mut store, &cfg(), "Budi", None, Some("1700")).expect("first");
    let rec = CheckOutLogic::apply(&mut store, &cfg(), "Budi", None, Some("1800")).expect("second");

    assert_eq!(rec.sequence_number, 1);
    assert!(matches!(
        CheckOutLogic::apply(&mut store, &cfg(), "Budi", None, None),
        Err(AppError::RecordNotFound(_))
    ));
}

#[test]
fn test_checkout_with_id_number_and_default_time() {
    let mut store = visitors();
    let rec = CheckOutLogic::apply(&mut store, &cfg(), "Andi", Some("333"), None).expect("out");

    assert_eq!(rec.status, VisitStatus::Out);
    assert_eq!(rec.time_out.len(), 5);
    assert_eq!(&rec.time_out[2..3], ":");

    assert!(matches!(
        CheckOutLogic::apply(&mut store, &cfg(), "Budi", Some("999"), None),
        Err(AppError::RecordNotFound(_))
    ));
}

// ---------------------------
// edit / delete
// ---------------------------

#[test]
fn test_edit_row_by_number() {
    let mut store = visitors();
    let patch = RecordPatch {
        purpose: Some("Meeting".into()),
        guests: Some(2),
        time_out: Some("1015".into()),
        status: Some("out".into()),
        ..RecordPatch::default()
    };

    let rec = EditLogic::apply(&mut store, &cfg(), 4, &patch).expect("edit");
    assert_eq!(rec.full_name, "Andi");
    assert_eq!(rec.purpose, "Meeting");
    assert_eq!(rec.guest_count, 2);
    assert_eq!(rec.time_out, "10:15");
    assert_eq!(rec.status, VisitStatus::Out);
    assert_eq!(store.rows[3][4], "Meeting");
}

#[test]
fn test_edit_rejects_bad_input_before_loading() {
    let mut store = visitors();
    store.fail_reads = true;

    let empty = RecordPatch::default();
    assert!(matches!(
        EditLogic::apply(&mut store, &cfg(), 1, &empty),
        Err(AppError::Validation(_))
    ));

    let bad_status = RecordPatch {
        status: Some("GONE".into()),
        ..RecordPatch::default()
    };
    assert!(matches!(
        EditLogic::apply(&mut store, &cfg(), 1, &bad_status),
        Err(AppError::InvalidStatus(_))
    ));

    let blank_name = RecordPatch {
        name: Some(" ".into()),
        ..RecordPatch::default()
    };
    assert!(matches!(
        EditLogic::apply(&mut store, &cfg(), 1, &blank_name),
        Err(AppError::Validation(_))
    ));
}

#[test]
fn test_edit_rejects_sentinel_name() {
    let mut store = visitors();
    let before = store.rows.clone();

    let patch = RecordPatch {
        name: Some("-".into()),
        ..RecordPatch::default()
    };
    assert!(matches!(
        EditLogic::apply(&mut store, &cfg(), 2, &patch),
        Err(AppError::Validation(_))
    ));

    // Siti is still row 2
    assert_eq!(store.writes, 0);
    assert_eq!(store.rows, before);
    assert_eq!(store.rows[1][2], "Siti");
}

#[test]
fn test_edit_unknown_row() {
    let mut store = visitors();
    let patch = RecordPatch {
        guests: Some(2),
        ..RecordPatch::default()
    };
    assert!(matches!(
        EditLogic::apply(&mut store, &cfg(), 9, &patch),
        Err(AppError::InvalidPosition(9))
    ));
    assert!(matches!(
        EditLogic::apply(&mut store, &cfg(), 0, &patch),
        Err(AppError::InvalidPosition(0))
    ));
    assert_eq!(store.writes, 0);
}

#[test]
fn test_delete_row_renumbers_the_rest() {
    let mut store = visitors();
    let removed = DeleteLogic::apply(&mut store, 2).expect("delete");

    assert_eq!(removed.full_name, "Siti");
    let numbers: Vec<&str> = store.rows.iter().map(|r| r[0].as_str()).collect();
    let names: Vec<&str> = store.rows.iter().map(|r| r[2].as_str()).collect();
    assert_eq!(numbers, vec!["1", "2", "3"]);
    assert_eq!(names, vec!["Budi", "Budi", "Andi"]);
}

// ---------------------------
// queries
// ---------------------------

#[test]
fn test_filter_by_range_status_and_name() {
    let ledger = VisitorLedger::load(&visitors());
    let cfg = cfg();

    let sept = QueryLogic::filter(
        ledger.records(),
        &cfg,
        &RecordFilter {
            range: Some("2025-09".into()),
            ..RecordFilter::default()
        },
    )
    .expect("filter");
    assert_eq!(sept.len(), 2);

    let day = QueryLogic::filter(
        ledger.records(),
        &cfg,
        &RecordFilter {
            range: Some("2025-10-02".into()),
            ..RecordFilter::default()
        },
    )
    .expect("filter");
    assert_eq!(day.len(), 1);
    assert_eq!(day[0].time_in, "13:00");

    let span = QueryLogic::filter(
        ledger.records(),
        &cfg,
        &RecordFilter {
            range: Some("2025-09-10:2025-10-02".into()),
            status: Some(VisitStatus::In),
            ..RecordFilter::default()
        },
    )
    .expect("filter");
    assert_eq!(span.len(), 1);
    assert_eq!(span[0].full_name, "Budi");

    let by_name = QueryLogic::filter(
        ledger.records(),
        &cfg,
        &RecordFilter {
            name: Some("ud".into()),
            range: Some("all".into()),
            ..RecordFilter::default()
        },
    )
    .expect("filter");
    assert_eq!(by_name.len(), 2);
}

#[test]
fn test_filter_rejects_malformed_range() {
    let ledger = VisitorLedger::load(&visitors());
    let res = QueryLogic::filter(
        ledger.records(),
        &cfg(),
        &RecordFilter {
            range: Some("2025-9".into()),
            ..RecordFilter::default()
        },
    );
    assert!(matches!(res, Err(AppError::InvalidDate(_))));
}

#[test]
fn test_filter_skips_unparseable_dates_in_ranges() {
    let store = sheet_with(vec![
        row("1", "kemarin", "Budi", "111", "08:00", "-", "IN"),
        row("2", "01-09-2025", "Siti", "222", "09:00", "-", "IN"),
    ]);
    let ledger = VisitorLedger::load(&store);

    let res = QueryLogic::filter(
        ledger.records(),
        &cfg(),
        &RecordFilter {
            range: Some("2025".into()),
            ..RecordFilter::default()
        },
    )
    .expect("filter");
    assert_eq!(res.len(), 1);
    assert_eq!(res[0].full_name, "Siti");
}

#[test]
fn test_history_by_id_number() {
    let ledger = VisitorLedger::load(&visitors());

    let visits = QueryLogic::history(ledger.records(), "111", None);
    assert_eq!(visits.len(), 2);
    assert!(visits.iter().all(|r| r.full_name == "Budi"));

    assert!(QueryLogic::history(ledger.records(), "111", Some("Siti")).is_empty());
    assert!(QueryLogic::history(ledger.records(), "000", None).is_empty());
}
