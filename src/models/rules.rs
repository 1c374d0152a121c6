//! Library-signature rule schema and validation.
//!
//! Rules are loaded from a TOML or YAML file as a list of `[[library]]`
//! entries. Matching is case-insensitive substring containment, so
//! `keywords` must be non-empty for a rule to be meaningful; validation
//! rejects empty keyword lists before any scan runs.

use crate::models::SyntaxKind;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
/// A configured library signature: display name, case-insensitive
/// substring keywords, and a syntax-highlight hint.
pub struct Rule {
    pub display_name: String,
    pub keywords: Vec<String>,
    pub syntax_highlight_type: SyntaxKind,
}

#[derive(Debug, Default, Deserialize)]
/// Root of the rules file: zero or more `[[library]]` entries.
/// An empty list is valid and yields no library matches.
pub struct RuleFile {
    #[serde(default)]
    pub library: Vec<Rule>,
}

#[derive(Debug, PartialEq, Eq)]
/// Rule-shape rejection raised at the analysis boundary, before any
/// detector runs. Distinct from a "nothing found" result.
pub enum RuleError {
    /// A rule declared no keywords; it could never match anything.
    EmptyKeywords { display_name: String },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleError::EmptyKeywords { display_name } => write!(
                f,
                "rule '{}' has an empty keywords list; add at least one keyword or remove the rule",
                display_name
            ),
        }
    }
}

impl std::error::Error for RuleError {}

/// Validate the shape of every rule. Called once at `run_analysis` entry
/// so a malformed list fails fast instead of mid-scan.
pub fn validate_rules(rules: &[Rule]) -> Result<(), RuleError> {
    for rule in rules {
        if rule.keywords.is_empty() {
            return Err(RuleError::EmptyKeywords {
                display_name: rule.display_name.clone(),
            });
        }
    }
    Ok(())
}

#[derive(Debug)]
/// Failure to read or parse the rules file itself.
pub enum RuleLoadError {
    Io(std::io::Error),
    Parse(String),
}

impl fmt::Display for RuleLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleLoadError::Io(e) => write!(f, "cannot read rules file: {}", e),
            RuleLoadError::Parse(msg) => write!(f, "rules file is not valid: {}", msg),
        }
    }
}

impl std::error::Error for RuleLoadError {}

/// Load rules from a TOML or YAML file, picking the parser by extension
/// (`.yaml`/`.yml` ⇒ YAML, anything else ⇒ TOML).
pub fn load_rules(path: &Path) -> Result<Vec<Rule>, RuleLoadError> {
    let raw = fs::read_to_string(path).map_err(RuleLoadError::Io)?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    let file: RuleFile = if is_yaml {
        serde_yaml::from_str(&raw).map_err(|e| RuleLoadError::Parse(e.to_string()))?
    } else {
        toml::from_str(&raw).map_err(|e| RuleLoadError::Parse(e.to_string()))?
    };
    Ok(file.library)
}
