use std::collections::HashMap;
use std::sync::Arc;

use hearthmate_diagnostics::{DiagnosticEventBuffer, ReportingSink};
use hearthmate_types::DiagnosticEvent;

use crate::config::Config;

/// Diagnostics entry points for the rest of the companion app.
///
/// Owns the event buffer; producers (the simulator) and the drain
/// trigger (match-end handling) share clones of this handle instead of
/// reaching for a process-wide global.
#[derive(Clone)]
pub struct Diagnostics {
    buffer: Arc<DiagnosticEventBuffer>,
}

impl Diagnostics {
    pub fn new(config: &Config, sink: Arc<dyn ReportingSink>) -> Self {
        Self {
            buffer: Arc::new(DiagnosticEventBuffer::with_max_sent(
                config.diagnostics.max_reports,
                sink,
            )),
        }
    }

    /// Producer entry point: capture a terminal case detected by the
    /// combat simulator. Fire and forget.
    pub fn report_terminal_case(
        &self,
        kind: impl Into<String>,
        message: impl Into<String>,
        properties: HashMap<String, String>,
        input: impl Into<String>,
        log: impl Into<String>,
    ) {
        self.buffer
            .enqueue(DiagnosticEvent::new(kind, message, properties, input, log));
    }

    /// Drain trigger: called once the match has concluded. `short_id` is
    /// the shareable replay id when the upload succeeded, `None` when it
    /// did not; queued events are forwarded either way.
    pub fn send_queued_reports(&self, short_id: Option<&str>) {
        self.buffer.drain_and_send(short_id);
    }

    /// Discard pending events on session reset. The lifetime send count
    /// is unaffected.
    pub fn reset(&self) {
        self.buffer.clear();
    }

    pub fn buffer(&self) -> &DiagnosticEventBuffer {
        &self.buffer
    }
}
