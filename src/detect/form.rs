//! Form-validation detector.
//!
//! The only stateful detector: a two-state machine over the line
//! sequence (no open form / inside a form). A `<form ...>` line opens a
//! record, lines inside append validation observations, and the
//! matching `</form>` line finalizes the record with its full source
//! span. A `<form>` seen while one is already open does not start a
//! second record, and a form still open at end of input is dropped
//! without error; both are accepted heuristic limits.

use crate::models::{
    FormRecord, FormValidationResult, ValidationElement, ValidationElementKind, ValidationType,
};
use regex::Regex;

struct OpenForm {
    line_number: usize,
    first_line_idx: usize,
    element: String,
    has_custom_validation: bool,
    validation_elements: Vec<ValidationElement>,
}

/// Scan the lines and return every finalized form record in order.
pub fn detect_form_validation(lines: &[&str]) -> FormValidationResult {
    let open_re = Regex::new(r"(?i)<form\b").unwrap();
    let close_re = Regex::new(r"(?i)</\s*form\s*>").unwrap();
    let onsubmit_re = Regex::new(r"(?i)<form[^>]*\bonsubmit\s*=").unwrap();
    let oninvalid_re = Regex::new(r#"(?i)\boninvalid\s*=\s*["']"#).unwrap();
    // The five declarative HTML5 constraint shapes.
    let constraint_res: Vec<Regex> = [
        r"(?i)\brequired\b",
        r#"(?i)\bpattern\s*=\s*["']"#,
        r#"(?i)\bminlength\s*=\s*["']"#,
        r#"(?i)\bmaxlength\s*=\s*["']"#,
        r#"(?i)\b(?:min|max)\s*=\s*["']"#,
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect();

    let mut forms: Vec<FormRecord> = Vec::new();
    let mut open: Option<OpenForm> = None;

    for (idx, line) in lines.iter().enumerate() {
        if open.is_none() {
            if open_re.is_match(line) {
                open = Some(OpenForm {
                    line_number: idx + 1,
                    first_line_idx: idx,
                    element: line.to_string(),
                    has_custom_validation: line.to_lowercase().contains("novalidate"),
                    validation_elements: Vec::new(),
                });
            } else {
                continue;
            }
        }
        // The opening line itself is also inspected, so constraints and
        // onsubmit on a one-line form still register.
        let form = open.as_mut().unwrap();
        let custom_js = oninvalid_re.is_match(line);
        if custom_js || constraint_res.iter().any(|re| re.is_match(line)) {
            form.validation_elements.push(ValidationElement {
                element: line.to_string(),
                line_number: idx + 1,
                kind: if custom_js {
                    ValidationElementKind::CustomJs
                } else {
                    ValidationElementKind::Standard
                },
            });
        }
        if onsubmit_re.is_match(line) {
            form.has_custom_validation = true;
        }
        if close_re.is_match(line) {
            let form = open.take().unwrap();
            let full_element = lines[form.first_line_idx..=idx].join("\n");
            let validation_type = if form.has_custom_validation {
                ValidationType::Custom
            } else if !form.validation_elements.is_empty() {
                ValidationType::Html5
            } else {
                ValidationType::None
            };
            let label = match validation_type {
                ValidationType::Html5 => "HTML5 validation",
                ValidationType::Custom => "custom validation",
                ValidationType::None => "no validation",
            };
            forms.push(FormRecord {
                id: forms.len(),
                name: format!("Form #{} ({})", forms.len() + 1, label),
                has_custom_validation: form.has_custom_validation,
                validation_elements: form.validation_elements,
                element: form.element,
                full_element,
                line_number: form.line_number,
                validation_type,
            });
        }
    }
    // A form still open here was never closed; it is dropped on purpose.
    FormValidationResult { forms }
}
