//! Analysis aggregator: one synchronous pass of every detector over a
//! single document.
//!
//! `run_analysis` is pure and total: identical inputs yield identical
//! results, no detector depends on another's output, and a "nothing
//! found" outcome is an empty collection, never an error. The only
//! failure surface is rule-shape validation at entry.

use crate::detect;
use crate::models::rules::{validate_rules, Rule, RuleError};
use crate::models::AnalysisResult;

/// Analyze raw HTML text with the given rule list.
///
/// Rules are validated once up front; a malformed rule (empty keyword
/// list) rejects the whole call before any detector runs, so no partial
/// result is ever produced. An empty rule list is valid and only leaves
/// `detected_libraries` empty.
pub fn run_analysis(html: &str, rules: &[Rule]) -> Result<AnalysisResult, RuleError> {
    validate_rules(rules)?;
    let lines = detect::split_lines(html);

    let detected_semantic_elements = detect::semantic::detect_semantic_elements(&lines);
    let semantic_score = detect::semantic::semantic_score(&detected_semantic_elements);

    Ok(AnalysisResult {
        detected_libraries: detect::signature::detect_libraries(&lines, rules),
        detected_alerts: detect::alert::detect_alerts(html),
        detected_aria_labels: detect::aria::detect_aria(&lines),
        detected_lazy_loading: detect::lazy::detect_lazy_loading(html),
        detected_favicon: detect::favicon::detect_favicon(&lines),
        detected_form_validation: detect::form::detect_form_validation(&lines),
        detected_meta_tags: detect::meta::detect_meta_tags(&lines),
        detected_semantic_elements,
        semantic_score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SyntaxKind;

    fn jquery_rule() -> Rule {
        Rule {
            display_name: "jQuery".into(),
            keywords: vec!["jquery.min.js".into()],
            syntax_highlight_type: SyntaxKind::Javascript,
        }
    }

    const PAGE: &str = r#"<html>
<head>
<meta charset="utf-8">
<link rel="icon" href="/favicon.ico">
<script src="jquery.min.js"></script>
</head>
<body>
<nav aria-label="Main">menu</nav>
<img src="a.png" loading="lazy">
<form>
  <input type="text" required>
</form>
<script>alert('hello')</script>
</body>
</html>"#;

    #[test]
    fn test_full_document_populates_every_field() {
        let result = run_analysis(PAGE, &[jquery_rule()]).unwrap();
        assert_eq!(result.detected_libraries.len(), 1);
        assert_eq!(result.detected_libraries[0].name, "jQuery");
        assert_eq!(result.detected_alerts.len(), 1);
        assert_eq!(result.detected_aria_labels.len(), 1);
        assert_eq!(result.detected_aria_labels[0].line_number, 8);
        assert_eq!(result.detected_lazy_loading.len(), 1);
        assert_eq!(result.detected_lazy_loading[0].line_number, 9);
        assert!(result.detected_favicon.exists);
        assert_eq!(result.detected_form_validation.forms.len(), 1);
        assert_eq!(result.detected_form_validation.forms[0].line_number, 10);
        assert_eq!(result.detected_meta_tags.len(), 1);
        assert_eq!(result.detected_semantic_elements.len(), 1);
        assert_eq!(result.semantic_score, Some(20));
    }

    #[test]
    fn test_deterministic_output() {
        let rules = vec![jquery_rule()];
        let a = serde_json::to_string(&run_analysis(PAGE, &rules).unwrap()).unwrap();
        let b = serde_json::to_string(&run_analysis(PAGE, &rules).unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_rule_list_only_affects_libraries() {
        let with = run_analysis(PAGE, &[jquery_rule()]).unwrap();
        let without = run_analysis(PAGE, &[]).unwrap();
        assert!(without.detected_libraries.is_empty());
        assert_eq!(
            with.detected_alerts.len(),
            without.detected_alerts.len()
        );
        assert_eq!(
            with.detected_aria_labels.len(),
            without.detected_aria_labels.len()
        );
        assert_eq!(
            serde_json::to_value(&with.detected_favicon).unwrap(),
            serde_json::to_value(&without.detected_favicon).unwrap()
        );
    }

    #[test]
    fn test_malformed_rule_rejected_before_scan() {
        let rules = vec![Rule {
            display_name: "Broken".into(),
            keywords: vec![],
            syntax_highlight_type: SyntaxKind::Html,
        }];
        let err = run_analysis(PAGE, &rules).unwrap_err();
        assert!(matches!(err, RuleError::EmptyKeywords { .. }));
    }

    #[test]
    fn test_empty_document_yields_empty_result() {
        let result = run_analysis("", &[]).unwrap();
        assert!(result.detected_libraries.is_empty());
        assert!(result.detected_alerts.is_empty());
        assert!(result.detected_aria_labels.is_empty());
        assert!(result.detected_lazy_loading.is_empty());
        assert!(!result.detected_favicon.exists);
        assert!(result.detected_form_validation.forms.is_empty());
        assert!(result.detected_meta_tags.is_empty());
        assert!(result.detected_semantic_elements.is_empty());
        assert_eq!(result.semantic_score, None);
    }
}
