use hearthmate_types::CrashReport;

/// External crash-reporting collaborator.
///
/// Submission is fire and forget: the sink handles transmission (and any
/// retries) internally and reports no outcome back to the buffer. A
/// report handed to the sink is never re-queued.
pub trait ReportingSink: Send + Sync {
    fn submit_report(&self, report: CrashReport);
}
