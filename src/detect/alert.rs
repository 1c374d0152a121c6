//! Inline `alert(...)` detector.

use crate::models::AlertFinding;
use regex::Regex;

/// Scan the whole document (not line-by-line; alert calls are not
/// assumed to fit on one line) for `alert` followed by optional
/// whitespace and a parenthesized argument list with no nested parens.
/// Non-overlapping matches are numbered from 0 in text order.
pub fn detect_alerts(html: &str) -> Vec<AlertFinding> {
    let re = Regex::new(r"alert\s*\([^)]*\)").unwrap();
    re.find_iter(html)
        .enumerate()
        .map(|(id, m)| AlertFinding {
            id,
            name: format!("JavaScript Alert #{}", id + 1),
            code: m.as_str().to_string(),
            count: 1,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_alert_in_markup() {
        let out = detect_alerts("<div>alert('hi')</div>");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 0);
        assert_eq!(out[0].name, "JavaScript Alert #1");
        assert_eq!(out[0].code, "alert('hi')");
        assert_eq!(out[0].count, 1);
    }

    #[test]
    fn test_multiline_call_and_numbering() {
        let html = "alert(\n  'first'\n)\nsome text\nalert ('second')";
        let out = detect_alerts(html);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].code, "alert(\n  'first'\n)");
        // Whitespace between the token and the paren is allowed
        assert_eq!(out[1].code, "alert ('second')");
        assert_eq!(out[1].name, "JavaScript Alert #2");
    }

    #[test]
    fn test_no_alerts_is_empty_not_error() {
        assert!(detect_alerts("<p>quiet page</p>").is_empty());
    }

    #[test]
    fn test_empty_argument_list() {
        let out = detect_alerts("onclick=\"alert()\"");
        assert_eq!(out[0].code, "alert()");
    }
}
