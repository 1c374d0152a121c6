//! Meta tag detector.

use crate::models::MetaTagFinding;
use regex::Regex;

/// Line-by-line scan for `<meta ...>` tags. Each tag's identifying
/// attribute (`name`, `property`, `http-equiv`, or `charset`) and its
/// `content` are captured, and the tag is classified: `og` for
/// OpenGraph properties, `twitter` for Twitter card names, `http-equiv`
/// and `charset` for those attributes, else `standard`.
pub fn detect_meta_tags(lines: &[&str]) -> Vec<MetaTagFinding> {
    let tag_re = Regex::new(r"(?i)<meta\b[^>]*>").unwrap();
    let name_re = Regex::new(r#"(?i)\bname\s*=\s*["']([^"']*)["']"#).unwrap();
    let property_re = Regex::new(r#"(?i)\bproperty\s*=\s*["']([^"']*)["']"#).unwrap();
    let http_equiv_re = Regex::new(r#"(?i)\bhttp-equiv\s*=\s*["']([^"']*)["']"#).unwrap();
    let charset_re = Regex::new(r#"(?i)\bcharset\s*=\s*["']([^"']*)["']"#).unwrap();
    let content_re = Regex::new(r#"(?i)\bcontent\s*=\s*["']([^"']*)["']"#).unwrap();

    let capture = |re: &Regex, tag: &str| -> Option<String> {
        re.captures(tag).map(|c| c[1].to_string())
    };

    let mut findings = Vec::new();
    for (idx, line) in lines.iter().enumerate() {
        for m in tag_re.find_iter(line) {
            let tag = m.as_str();
            let name_attr = capture(&name_re, tag);
            let property = capture(&property_re, tag);
            let http_equiv = capture(&http_equiv_re, tag);
            let charset = capture(&charset_re, tag);

            let kind = if property.as_deref().is_some_and(|p| p.starts_with("og:")) {
                "og"
            } else if name_attr.as_deref().is_some_and(|n| n.starts_with("twitter:")) {
                "twitter"
            } else if http_equiv.is_some() {
                "http-equiv"
            } else if charset.is_some() {
                "charset"
            } else {
                "standard"
            };
            let name = name_attr
                .or(property)
                .or(http_equiv)
                .unwrap_or_default();
            // Charset tags carry their value in the attribute itself.
            let content = capture(&content_re, tag).or(charset).unwrap_or_default();

            findings.push(MetaTagFinding {
                id: findings.len(),
                name,
                kind: kind.to_string(),
                content,
                element: tag.to_string(),
                line_number: idx + 1,
            });
        }
    }
    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::split_lines;

    #[test]
    fn test_standard_description_tag() {
        let out = detect_meta_tags(&split_lines(
            r#"<meta name="description" content="A page">"#,
        ));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "description");
        assert_eq!(out[0].kind, "standard");
        assert_eq!(out[0].content, "A page");
        assert_eq!(out[0].line_number, 1);
    }

    #[test]
    fn test_og_twitter_and_charset_classification() {
        let html = "<meta charset=\"utf-8\">\n<meta property=\"og:title\" content=\"T\">\n<meta name=\"twitter:card\" content=\"summary\">";
        let out = detect_meta_tags(&split_lines(html));
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].kind, "charset");
        assert_eq!(out[0].content, "utf-8");
        assert_eq!(out[1].kind, "og");
        assert_eq!(out[1].name, "og:title");
        assert_eq!(out[2].kind, "twitter");
        assert_eq!(out[2].line_number, 3);
    }

    #[test]
    fn test_http_equiv() {
        let out = detect_meta_tags(&split_lines(
            r#"<meta http-equiv="refresh" content="30">"#,
        ));
        assert_eq!(out[0].kind, "http-equiv");
        assert_eq!(out[0].name, "refresh");
        assert_eq!(out[0].content, "30");
    }

    #[test]
    fn test_two_tags_on_one_line() {
        let out = detect_meta_tags(&split_lines(
            r#"<meta name="a" content="1"><meta name="b" content="2">"#,
        ));
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].name, "b");
        assert_eq!(out[1].id, 1);
    }
}
