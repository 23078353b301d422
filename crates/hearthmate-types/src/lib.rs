pub mod event;
pub mod report;

pub use event::DiagnosticEvent;
pub use report::{CrashReport, ReportAttachment};
