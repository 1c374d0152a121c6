//! Shared data models for analysis output and the rules schema.

pub mod rules;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Syntax-highlight hint carried by a rule into its matches.
pub enum SyntaxKind {
    Html,
    Javascript,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// All matching lines for one library rule. Present only when at least
/// one line matched; ordering follows the rule list, not discovery.
pub struct LibraryMatch {
    pub name: String,
    pub lines: Vec<String>,
    pub syntax_highlight_type: SyntaxKind,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One inline `alert(...)` occurrence, numbered in order of appearance.
/// Carries no line number; alert calls are not assumed line-bounded.
pub struct AlertFinding {
    pub id: usize,
    pub name: String,
    pub code: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One (line, attribute) ARIA occurrence. A line carrying two recognized
/// attributes yields two findings referencing the same raw line.
pub struct AriaFinding {
    pub id: usize,
    pub attribute: String,
    pub value: String,
    pub element: String,
    pub element_type: String,
    pub line_number: usize,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Lazy-loading technique evidenced by a finding.
pub enum LazyKind {
    Native,
    DataSrc,
    IntersectionObserver,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LazyLoadFinding {
    pub id: usize,
    #[serde(rename = "type")]
    pub kind: LazyKind,
    pub element: String,
    pub element_type: String,
    pub line_number: usize,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaviconIcon {
    pub id: usize,
    #[serde(rename = "type")]
    pub kind: String,
    pub href: String,
    pub element: String,
    pub line_number: usize,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Favicon evidence; `exists` is true iff `icons` is non-empty.
pub struct FaviconResult {
    pub exists: bool,
    pub icons: Vec<FaviconIcon>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Origin of a single validation observation inside a form.
pub enum ValidationElementKind {
    Standard,
    CustomJs,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationElement {
    pub element: String,
    pub line_number: usize,
    #[serde(rename = "type")]
    pub kind: ValidationElementKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Classification of a finalized form's validation style.
pub enum ValidationType {
    Html5,
    Custom,
    None,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// A finalized `<form>...</form>` span. Only forms whose closing tag was
/// seen are reported; an unterminated form is dropped.
pub struct FormRecord {
    pub id: usize,
    pub has_custom_validation: bool,
    pub validation_elements: Vec<ValidationElement>,
    pub element: String,
    pub full_element: String,
    pub line_number: usize,
    pub validation_type: ValidationType,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValidationResult {
    pub forms: Vec<FormRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One `<meta ...>` tag with its classified origin (standard, og,
/// twitter, http-equiv, charset).
pub struct MetaTagFinding {
    pub id: usize,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
    pub element: String,
    pub line_number: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticFinding {
    pub id: usize,
    pub tag_name: String,
    pub content: String,
    pub element: String,
    pub line_number: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Composite analysis output. Every field is always present; empty
/// collections mean "nothing found", never an error.
pub struct AnalysisResult {
    pub detected_libraries: Vec<LibraryMatch>,
    pub detected_alerts: Vec<AlertFinding>,
    pub detected_aria_labels: Vec<AriaFinding>,
    pub detected_lazy_loading: Vec<LazyLoadFinding>,
    pub detected_favicon: FaviconResult,
    pub detected_form_validation: FormValidationResult,
    pub detected_meta_tags: Vec<MetaTagFinding>,
    pub detected_semantic_elements: Vec<SemanticFinding>,
    pub semantic_score: Option<u32>,
}
