//! Library-signature detector: keyword containment per line, per rule.

use crate::models::rules::Rule;
use crate::models::LibraryMatch;
use rayon::prelude::*;

/// Match every rule against the line sequence. A rule contributes one
/// `LibraryMatch` when at least one line contains any of its keywords
/// (case-insensitive substring); matching lines are kept verbatim,
/// leading whitespace included. Output order follows the rule list.
///
/// Rules are independent, so the per-rule pass runs in parallel;
/// `collect` keeps rule order regardless of scheduling.
pub fn detect_libraries(lines: &[&str], rules: &[Rule]) -> Vec<LibraryMatch> {
    // Lowercase each line once; every rule probes the same text.
    let lowered: Vec<String> = lines.iter().map(|l| l.to_lowercase()).collect();
    rules
        .par_iter()
        .filter_map(|rule| {
            let keywords: Vec<String> =
                rule.keywords.iter().map(|k| k.to_lowercase()).collect();
            let matched: Vec<String> = lines
                .iter()
                .zip(lowered.iter())
                .filter(|(_, low)| keywords.iter().any(|k| low.contains(k)))
                .map(|(raw, _)| (*raw).to_string())
                .collect();
            if matched.is_empty() {
                None
            } else {
                Some(LibraryMatch {
                    name: rule.display_name.clone(),
                    count: matched.len(),
                    lines: matched,
                    syntax_highlight_type: rule.syntax_highlight_type,
                })
            }
        })
        .collect()
}
