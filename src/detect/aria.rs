//! ARIA attribute detector.

use crate::detect::leading_tag_name;
use crate::models::AriaFinding;
use regex::Regex;

/// The recognized attribute names, tested in this order per line.
pub const ARIA_ATTRIBUTES: &[&str] = &[
    "aria-label",
    "aria-labelledby",
    "aria-describedby",
    "aria-description",
    "aria-hidden",
    "aria-live",
    "aria-expanded",
    "aria-controls",
    "aria-selected",
    "aria-required",
    "aria-checked",
    "aria-pressed",
    "aria-current",
    "aria-disabled",
    "aria-invalid",
    "aria-haspopup",
    "role",
];

/// Line-by-line scan for the fixed attribute set. Each attribute must be
/// preceded by whitespace and followed by `="value"` or `='value'`
/// (attribute name case-insensitive, value captured verbatim, empty
/// allowed). One finding per (line, attribute) pair; a line with two
/// recognized attributes yields two findings against the same raw line.
pub fn detect_aria(lines: &[&str]) -> Vec<AriaFinding> {
    let patterns: Vec<(&str, Regex)> = ARIA_ATTRIBUTES
        .iter()
        .map(|attr| {
            let re = Regex::new(&format!(
                r#"(?i)\s{}=(?:"([^"]*)"|'([^']*)')"#,
                regex::escape(attr)
            ))
            .unwrap();
            (*attr, re)
        })
        .collect();

    let mut findings = Vec::new();
    for (idx, line) in lines.iter().enumerate() {
        for (attr, re) in &patterns {
            if let Some(caps) = re.captures(line) {
                let value = caps
                    .get(1)
                    .or_else(|| caps.get(2))
                    .map(|m| m.as_str())
                    .unwrap_or("")
                    .to_string();
                let element_type =
                    leading_tag_name(line).unwrap_or_else(|| "unknown".to_string());
                findings.push(AriaFinding {
                    id: findings.len(),
                    attribute: attr.to_string(),
                    value,
                    element: line.to_string(),
                    name: format!("{} on <{}>", attr, element_type),
                    element_type,
                    line_number: idx + 1,
                });
            }
        }
    }
    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::split_lines;

    #[test]
    fn test_single_attribute_on_button() {
        let lines = split_lines(r#"<button aria-pressed="true">X</button>"#);
        let out = detect_aria(&lines);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].attribute, "aria-pressed");
        assert_eq!(out[0].value, "true");
        assert_eq!(out[0].element_type, "button");
        assert_eq!(out[0].line_number, 1);
    }

    #[test]
    fn test_two_attributes_same_line_yield_two_findings() {
        let line = r#"<div role="dialog" aria-hidden="false">"#;
        let out = detect_aria(&split_lines(line));
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].attribute, "aria-hidden");
        assert_eq!(out[1].attribute, "role");
        assert_eq!(out[0].element, line);
        assert_eq!(out[1].element, line);
        assert_eq!(out[0].id, 0);
        assert_eq!(out[1].id, 1);
    }

    #[test]
    fn test_labelledby_does_not_also_match_label() {
        let out = detect_aria(&split_lines(r#"<span aria-labelledby="hdr">"#));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].attribute, "aria-labelledby");
    }

    #[test]
    fn test_continuation_line_reports_unknown_element() {
        let html = "<input type=\"text\"\n  aria-required='yes'>";
        let out = detect_aria(&split_lines(html));
        assert_eq!(out.len(), 1);
        // The attribute's own line opens no tag; heuristic limitation
        assert_eq!(out[0].element_type, "unknown");
        assert_eq!(out[0].line_number, 2);
        assert_eq!(out[0].value, "yes");
    }

    #[test]
    fn test_empty_value_and_case_insensitive_name() {
        let out = detect_aria(&split_lines(r#"<nav ARIA-LABEL="">"#));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].attribute, "aria-label");
        assert_eq!(out[0].value, "");
    }

    #[test]
    fn test_unquoted_value_is_not_matched() {
        assert!(detect_aria(&split_lines("<div aria-hidden=true>")).is_empty());
    }
}
