use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single text attachment carried alongside a crash report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportAttachment {
    pub filename: String,
    pub text: String,
}

impl ReportAttachment {
    pub fn new(filename: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            text: text.into(),
        }
    }
}

/// Finalized payload handed to the reporting sink.
///
/// Mirrors the backend's exception-report shape: a classification, a
/// summary, string properties, and a list of text attachments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrashReport {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub properties: HashMap<String, String>,
    pub attachments: Vec<ReportAttachment>,
}
