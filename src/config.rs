//! Configuration discovery and effective settings resolution.
//!
//! sigscan reads `sigscan.toml|yaml|yml` from the chosen root (or the
//! closest ancestor) and merges it with CLI flags into an `Effective`
//! config. Defaults:
//! - `rules`: unset (the analyze command requires a rules file)
//! - `output`: `human`
//! - `save`: false
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `sigscan.toml|yaml|yml`.
pub struct SigscanConfig {
    /// Path to the rules file, relative to the root.
    pub rules: Option<String>,
    /// Default output mode: human|json.
    pub output: Option<String>,
    /// Persist every analysis to the report store by default.
    pub save: Option<bool>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub root: PathBuf,
    pub rules: String,
    pub rules_configured: bool,
    pub output: String,
    pub save: bool,
}

/// Walk upward from `start` until a sigscan config file or a `.git`
/// directory is found; fall back to `start` itself.
pub fn detect_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("sigscan.toml").exists()
            || cur.join("sigscan.yaml").exists()
            || cur.join("sigscan.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `SigscanConfig` from `sigscan.toml` or `sigscan.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<SigscanConfig> {
    let toml_path = root.join("sigscan.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: SigscanConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["sigscan.yaml", "sigscan.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: SigscanConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_root: Option<&str>,
    cli_rules: Option<&str>,
    cli_output: Option<&str>,
    cli_save: Option<bool>,
) -> Effective {
    let start = PathBuf::from(cli_root.unwrap_or("."));
    let root = detect_root(&start);
    let cfg = load_config(&root).unwrap_or_default();

    let rules_src = cli_rules.map(|s| s.to_string()).or(cfg.rules);
    let (rules, rules_configured) = match rules_src {
        Some(s) => (s, true),
        None => (String::new(), false),
    };

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let save = cli_save.or(cfg.save).unwrap_or(false);

    Effective {
        root,
        rules,
        rules_configured,
        output,
        save,
    }
}
