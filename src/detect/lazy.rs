//! Lazy-loading detector: native `loading="lazy"`, deferred `data-src`,
//! and `IntersectionObserver` scripts.

use crate::models::{LazyKind, LazyLoadFinding};
use regex::Regex;

/// Line number of a byte offset: preceding `\n` count plus one.
fn line_at(html: &str, offset: usize) -> usize {
    html.as_bytes()[..offset].iter().filter(|b| **b == b'\n').count() + 1
}

/// Two passes over the full text (tags and scripts are not assumed
/// line-bounded). Tag pass: every `<img|iframe|video ...>` opening tag,
/// tested independently for `loading="lazy"` and `data-src="..."` — a
/// single tag can yield both findings. Script pass: every
/// `<script>...</script>` block mentioning `IntersectionObserver`, with
/// the element truncated to a 100-character preview. Ids ascend across
/// both passes, tag findings first.
pub fn detect_lazy_loading(html: &str) -> Vec<LazyLoadFinding> {
    let tag_re = Regex::new(r"(?is)<(img|iframe|video)\b([^>]*?)>").unwrap();
    let native_re = Regex::new(r#"(?i)loading\s*=\s*["']lazy["']"#).unwrap();
    let data_src_re = Regex::new(r#"(?i)data-src\s*=\s*["'][^"']*["']"#).unwrap();
    let script_re = Regex::new(r"(?is)<script\b[^>]*>(.*?)</script>").unwrap();

    let mut findings = Vec::new();
    for caps in tag_re.captures_iter(html) {
        let whole = caps.get(0).unwrap();
        let element_type = caps.get(1).unwrap().as_str().to_lowercase();
        let attrs = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        let line_number = line_at(html, whole.start());
        if native_re.is_match(attrs) {
            findings.push(LazyLoadFinding {
                id: findings.len(),
                kind: LazyKind::Native,
                element: whole.as_str().to_string(),
                name: format!("Native lazy loading (<{}>)", element_type),
                element_type: element_type.clone(),
                line_number,
            });
        }
        if data_src_re.is_match(attrs) {
            findings.push(LazyLoadFinding {
                id: findings.len(),
                kind: LazyKind::DataSrc,
                element: whole.as_str().to_string(),
                name: format!("Deferred src (<{}>)", element_type),
                element_type,
                line_number,
            });
        }
    }
    for caps in script_re.captures_iter(html) {
        let whole = caps.get(0).unwrap();
        let body = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        if body.contains("IntersectionObserver") {
            let preview: String = whole.as_str().chars().take(100).collect();
            findings.push(LazyLoadFinding {
                id: findings.len(),
                kind: LazyKind::IntersectionObserver,
                element: format!("{}...", preview),
                element_type: "script".to_string(),
                line_number: line_at(html, whole.start()),
                name: "IntersectionObserver script".to_string(),
            });
        }
    }
    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_img() {
        let out = detect_lazy_loading(r#"<img src="a.png" loading="lazy">"#);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, LazyKind::Native);
        assert_eq!(out[0].element_type, "img");
        assert_eq!(out[0].line_number, 1);
    }

    #[test]
    fn test_one_tag_both_techniques() {
        let out = detect_lazy_loading(r#"<img loading="lazy" data-src="b.png">"#);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].kind, LazyKind::Native);
        assert_eq!(out[1].kind, LazyKind::DataSrc);
        assert_eq!(out[0].id, 0);
        assert_eq!(out[1].id, 1);
    }

    #[test]
    fn test_tag_spanning_lines_gets_opening_line_number() {
        let html = "<p>x</p>\n<iframe src=\"f.html\"\n  loading='lazy'>";
        let out = detect_lazy_loading(html);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].element_type, "iframe");
        assert_eq!(out[0].line_number, 2);
    }

    #[test]
    fn test_intersection_observer_script_truncated() {
        let body = "const io = new IntersectionObserver(cb); ".repeat(5);
        let html = format!("line1\n<script>{}</script>", body);
        let out = detect_lazy_loading(&html);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, LazyKind::IntersectionObserver);
        assert_eq!(out[0].element_type, "script");
        assert_eq!(out[0].line_number, 2);
        // 100-char preview plus ellipsis
        assert_eq!(out[0].element.chars().count(), 103);
        assert!(out[0].element.ends_with("..."));
    }

    #[test]
    fn test_script_findings_follow_tag_findings() {
        let html = concat!(
            "<script>new IntersectionObserver(cb)</script>\n",
            "<video data-src=\"v.mp4\"></video>",
        );
        let out = detect_lazy_loading(html);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].kind, LazyKind::DataSrc);
        assert_eq!(out[0].id, 0);
        assert_eq!(out[1].kind, LazyKind::IntersectionObserver);
        assert_eq!(out[1].id, 1);
    }

    #[test]
    fn test_plain_script_and_eager_img_ignored() {
        let out = detect_lazy_loading("<script>var x=1;</script>\n<img src=\"a.png\">");
        assert!(out.is_empty());
    }
}
