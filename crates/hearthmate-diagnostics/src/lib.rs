//! Bounded, concurrency-safe buffering of combat-simulator diagnostic
//! events.
//!
//! The simulator enqueues events as anomalies are detected; once the
//! match concludes and a replay short id is known, a single drain call
//! enriches each queued event with the id and forwards it to the
//! crash-reporting sink, up to a lifetime submission cap.

pub mod buffer;
pub mod queue;
pub mod sink;

pub use buffer::{DEFAULT_MAX_SENT, DiagnosticEventBuffer};
pub use queue::ConcurrentQueue;
pub use sink::ReportingSink;
