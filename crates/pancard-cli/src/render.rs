//! # Output Rendering
//!
//! Text and JSON views over core results. Nothing here decides validity.

use serde::Serialize;

use pancard_core::{Report, ValidationError};

const RULE_WIDE: usize = 50;
const RULE_NARROW: usize = 30;

/// JSON document for validate mode.
#[derive(Debug, Serialize)]
pub struct ValidationDoc<'a> {
    pub pan: &'a str,
    pub valid: bool,
    pub error: Option<String>,
    /// Zero-based offending position for character-class failures.
    pub position: Option<usize>,
}

pub fn validation_json<'a>(pan: &'a str, error: Option<&ValidationError>) -> ValidationDoc<'a> {
    ValidationDoc {
        pan,
        valid: error.is_none(),
        error: error.map(ToString::to_string),
        position: error.and_then(ValidationError::position),
    }
}

pub fn validation_text(pan: &str, error: Option<&ValidationError>) -> String {
    match error {
        None => format!("✓ {pan} is a valid PAN"),
        Some(e) => format!("✗ {pan} is not a valid PAN: {e}"),
    }
}

/// Human-readable decode report, one trailing newline.
pub fn report_text(pan: &str, report: &Report) -> String {
    let mut lines = vec![
        format!("PAN Card Analysis: {pan}"),
        "=".repeat(RULE_WIDE),
        format!("Valid: {}", report.is_valid),
        format!("Holder Type: {}", report.holder_type.type_name),
        format!("Description: {}", report.holder_type.description),
        format!(
            "Structure: {} ({} characters, {} letters, {} digits)",
            report.structure.format,
            report.structure.total_length,
            report.structure.alphabets_count,
            report.structure.digits_count
        ),
        String::new(),
        "Component Breakdown:".to_string(),
        "-".repeat(RULE_NARROW),
    ];
    lines.extend(report.breakdown.iter().cloned());

    if !report.characters.is_empty() {
        lines.push(String::new());
        lines.push("Character Breakdown:".to_string());
        lines.push("-".repeat(RULE_NARROW));
        for c in &report.characters {
            let mut line = format!("Position {}: '{}' - {}", c.position, c.character, c.purpose);
            if !c.matches {
                line.push_str(&format!(" [expected {}]", c.expected));
            }
            lines.push(line);
        }
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}
