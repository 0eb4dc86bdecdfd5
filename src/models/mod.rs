pub mod columns;
pub mod record;
pub mod status;

pub use record::VisitorRecord;
pub use status::VisitStatus;
