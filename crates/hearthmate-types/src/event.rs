use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Diagnostic event captured when the combat simulator hits an anomalous
/// or terminal condition.
///
/// Immutable once created, except for `properties`, which the buffer
/// extends at drain time with the replay correlation id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticEvent {
    /// Classification of the terminal condition
    #[serde(rename = "type")]
    pub kind: String,

    /// Human-readable summary
    pub message: String,

    /// String key/value context attached to the eventual report
    #[serde(default)]
    pub properties: HashMap<String, String>,

    /// Raw serialized simulator state, opaque to this subsystem
    pub input: String,

    /// Free-text execution trace from the simulator run
    pub log: String,
}

impl DiagnosticEvent {
    pub fn new(
        kind: impl Into<String>,
        message: impl Into<String>,
        properties: HashMap<String, String>,
        input: impl Into<String>,
        log: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            properties,
            input: input.into(),
            log: log.into(),
        }
    }

    /// The simulator turn this event was captured on, as recorded by the
    /// producer in the `turn` property. `"0"` when the producer did not
    /// set one.
    pub fn turn(&self) -> &str {
        self.properties
            .get("turn")
            .map(String::as_str)
            .unwrap_or("0")
    }
}
