//! Semantic HTML detector and score.

use crate::models::SemanticFinding;
use regex::Regex;

/// Opening tags recognized as semantic structure.
pub const SEMANTIC_TAGS: &[&str] = &[
    "header",
    "nav",
    "main",
    "section",
    "article",
    "aside",
    "footer",
    "figure",
    "figcaption",
    "time",
    "details",
    "summary",
    "mark",
];

/// Line-by-line scan for semantic opening tags. When the element closes
/// on the same line its inner text is captured as `content`; otherwise
/// content is empty. The raw line is kept as the element snippet.
pub fn detect_semantic_elements(lines: &[&str]) -> Vec<SemanticFinding> {
    let tag_re = Regex::new(&format!(
        r"(?i)<({})\b[^>]*>",
        SEMANTIC_TAGS.join("|")
    ))
    .unwrap();

    let mut findings = Vec::new();
    for (idx, line) in lines.iter().enumerate() {
        for caps in tag_re.captures_iter(line) {
            let whole = caps.get(0).unwrap();
            let tag_name = caps.get(1).unwrap().as_str().to_lowercase();
            let rest = &line[whole.end()..];
            let closing = Regex::new(&format!(r"(?i)</{}\b", tag_name)).unwrap();
            let content = closing
                .find(rest)
                .map(|m| rest[..m.start()].trim().to_string())
                .unwrap_or_default();
            findings.push(SemanticFinding {
                id: findings.len(),
                tag_name,
                content,
                element: line.to_string(),
                line_number: idx + 1,
            });
        }
    }
    findings
}

/// Structural score: the share (0–100) of the five landmark slots
/// (`header`, `nav`, `main`, `footer`, and `article`-or-`section`)
/// present at least once. `None` when the document has no semantic
/// elements at all.
pub fn semantic_score(findings: &[SemanticFinding]) -> Option<u32> {
    if findings.is_empty() {
        return None;
    }
    let has = |tag: &str| findings.iter().any(|f| f.tag_name == tag);
    let mut present = 0u32;
    for landmark in ["header", "nav", "main", "footer"] {
        if has(landmark) {
            present += 1;
        }
    }
    if has("article") || has("section") {
        present += 1;
    }
    Some(present * 100 / 5)
}
