//! visitorlog main entrypoint.

use visitorlog::run;
use visitorlog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
