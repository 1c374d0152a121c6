//! Favicon declaration detector.

use crate::models::{FaviconIcon, FaviconResult};
use regex::Regex;

/// Line-by-line scan for `<link ... rel="icon">`-style declarations.
/// The rel value may carry a `shortcut ` prefix; attribute order inside
/// the tag is not assumed, so `href` is captured as the next
/// `href="..."` occurrence on the same line. One icon per matching line.
pub fn detect_favicon(lines: &[&str]) -> FaviconResult {
    let rel_re =
        Regex::new(r#"(?i)<link[^>]*rel\s*=\s*["'](?:shortcut\s+)?icon["']"#).unwrap();
    let href_re = Regex::new(r#"(?i)href\s*=\s*["']([^"']*)["']"#).unwrap();

    let mut icons = Vec::new();
    for (idx, line) in lines.iter().enumerate() {
        if !rel_re.is_match(line) {
            continue;
        }
        let Some(caps) = href_re.captures(line) else {
            continue;
        };
        let href = caps.get(1).map(|m| m.as_str()).unwrap_or("").to_string();
        icons.push(FaviconIcon {
            id: icons.len(),
            kind: "favicon".to_string(),
            name: format!("Favicon: {}", href),
            href,
            element: line.to_string(),
            line_number: idx + 1,
        });
    }
    FaviconResult {
        exists: !icons.is_empty(),
        icons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::split_lines;

    #[test]
    fn test_plain_icon() {
        let out = detect_favicon(&split_lines(
            r#"<link rel="icon" href="/favicon.ico">"#,
        ));
        assert!(out.exists);
        assert_eq!(out.icons.len(), 1);
        assert_eq!(out.icons[0].href, "/favicon.ico");
        assert_eq!(out.icons[0].kind, "favicon");
        assert_eq!(out.icons[0].line_number, 1);
    }

    #[test]
    fn test_shortcut_icon_and_reversed_attribute_order() {
        let html = "head\n<link href=\"fav.png\" rel='shortcut icon' type=\"image/png\">";
        let out = detect_favicon(&split_lines(html));
        assert!(out.exists);
        assert_eq!(out.icons[0].href, "fav.png");
        assert_eq!(out.icons[0].line_number, 2);
    }

    #[test]
    fn test_absent_favicon() {
        let out = detect_favicon(&split_lines("<link rel=\"stylesheet\" href=\"a.css\">"));
        assert!(!out.exists);
        assert!(out.icons.is_empty());
    }

    #[test]
    fn test_two_declarations_two_icons() {
        let html = "<link rel=\"icon\" href=\"a.ico\">\n<link rel=\"icon\" href=\"b.svg\">";
        let out = detect_favicon(&split_lines(html));
        assert_eq!(out.icons.len(), 2);
        assert_eq!(out.icons[1].id, 1);
        assert_eq!(out.icons[1].href, "b.svg");
    }
}
