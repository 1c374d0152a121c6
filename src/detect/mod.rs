//! Detector passes over a raw HTML document.
//!
//! Every detector scans the same input independently; none consumes
//! another's output. All but two are stateless line-by-line reducers:
//! `alert` and the tag pass of `lazy` scan the whole text (their targets
//! are not line-bounded), and `form` keeps explicit open-form state
//! across lines.

pub mod alert;
pub mod aria;
pub mod favicon;
pub mod form;
pub mod lazy;
pub mod meta;
pub mod semantic;
pub mod signature;

/// Split raw text into lines on `\n` only. No carriage-return
/// normalization beyond what the split yields; line numbers reported by
/// detectors are 1-based offsets into this sequence and must stay
/// reproducible. An empty input yields a single empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// First tag-name token after `<` at the start of the trimmed line,
/// lowercased. `None` when the line does not itself open a tag; callers
/// fall back to `"unknown"`. A heuristic, not a parse: attributes that
/// sit on a continuation line report no element type.
pub fn leading_tag_name(line: &str) -> Option<String> {
    let rest = line.trim_start().strip_prefix('<')?;
    let name: String = rest
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();
    match name.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => Some(name.to_ascii_lowercase()),
        _ => None,
    }
}
