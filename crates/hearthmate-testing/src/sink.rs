use std::sync::Mutex;

use hearthmate_diagnostics::ReportingSink;
use hearthmate_types::CrashReport;

/// Sink double that records every submitted report for assertions.
#[derive(Default)]
pub struct RecordingSink {
    reports: Mutex<Vec<CrashReport>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything submitted so far, in submission order.
    pub fn reports(&self) -> Vec<CrashReport> {
        self.reports.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.reports.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ReportingSink for RecordingSink {
    fn submit_report(&self, report: CrashReport) {
        self.reports.lock().unwrap().push(report);
    }
}
