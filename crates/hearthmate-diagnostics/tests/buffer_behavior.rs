use std::sync::Arc;

use hearthmate_diagnostics::DiagnosticEventBuffer;
use hearthmate_testing::RecordingSink;
use hearthmate_testing::fixtures::{terminal_case, terminal_case_on_turn};

#[test]
fn test_drain_preserves_enqueue_order() {
    let sink = Arc::new(RecordingSink::new());
    let buffer = DiagnosticEventBuffer::new(sink.clone());

    buffer.enqueue(terminal_case("First"));
    buffer.enqueue(terminal_case("Second"));
    buffer.enqueue(terminal_case("Third"));
    assert_eq!(buffer.pending_count(), 3);

    buffer.drain_and_send(None);

    let reports = sink.reports();
    let kinds: Vec<&str> = reports.iter().map(|r| r.kind.as_str()).collect();
    assert_eq!(kinds, vec!["First", "Second", "Third"]);
    assert_eq!(buffer.sent_count(), 3);
    assert_eq!(buffer.pending_count(), 0);
}

#[test]
fn test_enqueue_after_cap_is_dropped() {
    let sink = Arc::new(RecordingSink::new());
    let buffer = DiagnosticEventBuffer::with_max_sent(2, sink.clone());

    buffer.enqueue(terminal_case("A"));
    buffer.enqueue(terminal_case("B"));
    buffer.drain_and_send(None);
    assert_eq!(buffer.sent_count(), 2);

    buffer.enqueue(terminal_case("C"));
    assert_eq!(buffer.pending_count(), 0);
}

#[test]
fn test_drain_at_cap_makes_zero_sink_calls() {
    let sink = Arc::new(RecordingSink::new());
    let buffer = DiagnosticEventBuffer::with_max_sent(1, sink.clone());

    buffer.enqueue(terminal_case("A"));
    buffer.drain_and_send(None);
    assert_eq!(sink.len(), 1);

    buffer.enqueue(terminal_case("B"));
    buffer.enqueue(terminal_case("C"));
    buffer.drain_and_send(None);

    assert_eq!(sink.len(), 1);
    assert_eq!(buffer.sent_count(), 1);
    assert_eq!(buffer.pending_count(), 0);
}

#[test]
fn test_cap_mid_drain_discards_remainder() {
    let sink = Arc::new(RecordingSink::new());
    let buffer = DiagnosticEventBuffer::with_max_sent(2, sink.clone());

    buffer.enqueue(terminal_case("A"));
    buffer.enqueue(terminal_case("B"));
    buffer.enqueue(terminal_case("C"));

    buffer.drain_and_send(None);

    let reports = sink.reports();
    let kinds: Vec<&str> = reports.iter().map(|r| r.kind.as_str()).collect();
    assert_eq!(kinds, vec!["A", "B"]);
    assert_eq!(buffer.sent_count(), 2);
    assert_eq!(buffer.pending_count(), 0);
}

#[test]
fn test_enrichment_with_turn_property() {
    let sink = Arc::new(RecordingSink::new());
    let buffer = DiagnosticEventBuffer::new(sink.clone());

    buffer.enqueue(terminal_case_on_turn("SimulationCrash", 5));
    buffer.drain_and_send(Some("abc123"));

    let reports = sink.reports();
    assert_eq!(reports.len(), 1);
    let properties = &reports[0].properties;
    assert_eq!(properties.get("shortId").map(String::as_str), Some("abc123"));
    assert_eq!(
        properties.get("replay").map(String::as_str),
        Some("https://hsreplay.net/replay_debug/abc123#turn=5b")
    );
    // The producer's own property survives enrichment.
    assert_eq!(properties.get("turn").map(String::as_str), Some("5"));
}

#[test]
fn test_enrichment_defaults_missing_turn_to_zero() {
    let sink = Arc::new(RecordingSink::new());
    let buffer = DiagnosticEventBuffer::new(sink.clone());

    buffer.enqueue(terminal_case("SimulationCrash"));
    buffer.drain_and_send(Some("abc123"));

    let reports = sink.reports();
    assert_eq!(
        reports[0].properties.get("replay").map(String::as_str),
        Some("https://hsreplay.net/replay_debug/abc123#turn=0b")
    );
}

#[test]
fn test_no_enrichment_without_correlation_id() {
    let sink = Arc::new(RecordingSink::new());
    let buffer = DiagnosticEventBuffer::new(sink.clone());

    buffer.enqueue(terminal_case_on_turn("SimulationCrash", 3));
    buffer.drain_and_send(None);

    let reports = sink.reports();
    let properties = &reports[0].properties;
    assert!(!properties.contains_key("shortId"));
    assert!(!properties.contains_key("replay"));
    assert_eq!(properties.get("turn").map(String::as_str), Some("3"));
}

#[test]
fn test_attachments_carry_input_and_log() {
    let sink = Arc::new(RecordingSink::new());
    let buffer = DiagnosticEventBuffer::new(sink.clone());

    let mut event = terminal_case("SimulationCrash");
    event.input = "{\"board\":[]}".to_string();
    event.log = "turn 4: minion attack out of range".to_string();
    buffer.enqueue(event);

    buffer.drain_and_send(None);

    let reports = sink.reports();
    let attachments = &reports[0].attachments;
    assert_eq!(attachments.len(), 2);
    assert_eq!(attachments[0].filename, "input.cs");
    assert_eq!(attachments[0].text, "{\"board\":[]}");
    assert_eq!(attachments[1].filename, "log.txt");
    assert_eq!(attachments[1].text, "turn 4: minion attack out of range");
}

#[test]
fn test_clear_keeps_sent_count() {
    let sink = Arc::new(RecordingSink::new());
    let buffer = DiagnosticEventBuffer::with_max_sent(3, sink.clone());

    buffer.enqueue(terminal_case("A"));
    buffer.drain_and_send(None);
    assert_eq!(buffer.sent_count(), 1);

    buffer.enqueue(terminal_case("B"));
    buffer.enqueue(terminal_case("C"));
    buffer.clear();
    assert_eq!(buffer.pending_count(), 0);
    assert_eq!(buffer.sent_count(), 1);

    // Cap arithmetic is unaffected by the clear: two slots remain.
    buffer.enqueue(terminal_case("D"));
    buffer.enqueue(terminal_case("E"));
    buffer.enqueue(terminal_case("F"));
    buffer.drain_and_send(None);

    assert_eq!(buffer.sent_count(), 3);
    assert_eq!(sink.len(), 3);
    let reports = sink.reports();
    assert_eq!(reports[1].kind, "D");
    assert_eq!(reports[2].kind, "E");
}

#[test]
fn test_drain_on_empty_queue_is_noop() {
    let sink = Arc::new(RecordingSink::new());
    let buffer = DiagnosticEventBuffer::new(sink.clone());

    buffer.drain_and_send(Some("abc123"));

    assert!(sink.is_empty());
    assert_eq!(buffer.sent_count(), 0);
}

#[test]
fn test_redundant_drain_degrades_to_noop() {
    let sink = Arc::new(RecordingSink::new());
    let buffer = DiagnosticEventBuffer::new(sink.clone());

    buffer.enqueue(terminal_case("A"));
    buffer.drain_and_send(None);
    buffer.drain_and_send(None);
    buffer.drain_and_send(None);

    assert_eq!(sink.len(), 1);
    assert_eq!(buffer.sent_count(), 1);
}
