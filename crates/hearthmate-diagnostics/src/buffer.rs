use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use hearthmate_types::{CrashReport, DiagnosticEvent, ReportAttachment};

use crate::queue::ConcurrentQueue;
use crate::sink::ReportingSink;

/// Lifetime cap on submissions per buffer instance, protecting the
/// reporting backend from a flood out of a misbehaving simulator.
pub const DEFAULT_MAX_SENT: usize = 10;

const INPUT_ATTACHMENT: &str = "input.cs";
const LOG_ATTACHMENT: &str = "log.txt";

/// Bounded buffer of simulator diagnostic events.
///
/// Producers enqueue from any thread; a later drain call enriches each
/// event with the replay short id (known only after the match concludes)
/// and forwards it to the injected sink. At most `max_sent` events are
/// ever submitted over the buffer's lifetime; once the cap is reached,
/// new events are dropped silently and anything still queued is purged
/// on the next drain.
pub struct DiagnosticEventBuffer {
    queue: ConcurrentQueue<DiagnosticEvent>,
    sent: AtomicUsize,
    max_sent: usize,
    sink: Arc<dyn ReportingSink>,
}

impl DiagnosticEventBuffer {
    pub fn new(sink: Arc<dyn ReportingSink>) -> Self {
        Self::with_max_sent(DEFAULT_MAX_SENT, sink)
    }

    pub fn with_max_sent(max_sent: usize, sink: Arc<dyn ReportingSink>) -> Self {
        Self {
            queue: ConcurrentQueue::new(),
            sent: AtomicUsize::new(0),
            max_sent,
            sink,
        }
    }

    /// Queue an event for a later drain.
    ///
    /// Fire and forget: no error is ever signaled to the producer. Once
    /// the lifetime cap is exhausted this returns without buffering, so
    /// a producer stuck in a failure loop cannot grow the queue
    /// unbounded.
    pub fn enqueue(&self, event: DiagnosticEvent) {
        if self.sent.load(Ordering::SeqCst) >= self.max_sent {
            return;
        }
        self.queue.append(event);
    }

    /// Drain queued events to the sink, oldest first.
    ///
    /// When `correlation_id` is present, each event's properties gain
    /// `shortId` and a `replay` debug URL before submission; when absent
    /// the event is forwarded exactly as captured. The loop stops at the
    /// lifetime cap and discards whatever is still queued — capped
    /// events are never retried by a later call. Safe to call
    /// redundantly: once the queue is empty or the cap is reached this
    /// degrades to a no-op.
    pub fn drain_and_send(&self, correlation_id: Option<&str>) {
        loop {
            if !self.reserve_send_slot() {
                self.queue.clear();
                break;
            }
            let Some(mut event) = self.queue.remove_first() else {
                self.release_send_slot();
                break;
            };

            if let Some(short_id) = correlation_id {
                let replay = replay_debug_url(short_id, event.turn());
                event
                    .properties
                    .insert("shortId".to_string(), short_id.to_string());
                event.properties.insert("replay".to_string(), replay);
            }

            self.sink.submit_report(CrashReport {
                kind: event.kind,
                message: event.message,
                properties: event.properties,
                attachments: vec![
                    ReportAttachment::new(INPUT_ATTACHMENT, event.input),
                    ReportAttachment::new(LOG_ATTACHMENT, event.log),
                ],
            });
        }
    }

    /// Discard all pending events. The lifetime send count is untouched.
    pub fn clear(&self) {
        self.queue.clear();
    }

    pub fn sent_count(&self) -> usize {
        self.sent.load(Ordering::SeqCst)
    }

    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// Atomically claim one of the remaining send slots. Reserving
    /// before taking an event keeps `sent` at or below `max_sent` even
    /// when drains run concurrently.
    fn reserve_send_slot(&self) -> bool {
        self.sent
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |sent| {
                (sent < self.max_sent).then_some(sent + 1)
            })
            .is_ok()
    }

    /// Give back a slot reserved for an event that turned out not to
    /// exist (the queue emptied between the reservation and the take).
    fn release_send_slot(&self) {
        self.sent.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Debug-replay URL anchored at the board state for the turn the event
/// was captured on.
fn replay_debug_url(short_id: &str, turn: &str) -> String {
    format!("https://hsreplay.net/replay_debug/{short_id}#turn={turn}b")
}
