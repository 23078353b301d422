use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use hearthmate_types::DiagnosticEvent;

/// Minimal terminal-case event with the given classification.
pub fn terminal_case(kind: &str) -> DiagnosticEvent {
    DiagnosticEvent::new(
        kind,
        format!("{kind} in combat simulation"),
        HashMap::new(),
        "{}",
        "",
    )
}

/// Terminal-case event carrying a `turn` property.
pub fn terminal_case_on_turn(kind: &str, turn: u32) -> DiagnosticEvent {
    let mut properties = HashMap::new();
    properties.insert("turn".to_string(), turn.to_string());
    DiagnosticEvent::new(
        kind,
        format!("{kind} in combat simulation"),
        properties,
        "{}",
        "",
    )
}

/// Write a diagnostics config file into `dir` and return its path.
pub fn write_config(dir: &Path, max_reports: usize) -> Result<PathBuf> {
    let path = dir.join("config.toml");
    let content = format!("[diagnostics]\nmax_reports = {max_reports}\n");
    std::fs::write(&path, content)?;
    Ok(path)
}
