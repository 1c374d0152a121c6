//! File-backed report store.
//!
//! Saved analyses live as JSON files under `.sigscan/reports/` at the
//! chosen root, one file per report, named by a derived share id. The
//! record is a flat, snake_case shape (`detected_libraries`, `os_name`,
//! ...) so stored reports stay independent of the in-memory result
//! layout.

use crate::models::{
    AlertFinding, AnalysisResult, AriaFinding, FormRecord, LazyLoadFinding, LibraryMatch,
    MetaTagFinding, SemanticFinding,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, Serialize, Deserialize)]
/// One persisted analysis. Field names follow the storage schema, not
/// the analysis output shape.
pub struct ReportRecord {
    pub id: String,
    pub url: String,
    pub os_name: String,
    /// Unix timestamp (seconds) at save time.
    pub created_at: u64,
    pub detected_libraries: Vec<LibraryMatch>,
    pub detected_alerts: Vec<AlertFinding>,
    pub detected_aria_attributes: Vec<AriaFinding>,
    pub detected_lazy_loading: Vec<LazyLoadFinding>,
    pub detected_form_validation: Vec<FormRecord>,
    pub detected_meta_tags: Vec<MetaTagFinding>,
    pub detected_semantic_elements: Vec<SemanticFinding>,
}

impl ReportRecord {
    /// Build a record from an analysis result plus its request context.
    /// The share id is a hex digest over url + timestamp.
    pub fn new(url: &str, os_name: &str, result: &AnalysisResult) -> Self {
        let created_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let mut hasher = DefaultHasher::new();
        url.hash(&mut hasher);
        created_at.hash(&mut hasher);
        ReportRecord {
            id: format!("{:016x}", hasher.finish()),
            url: url.to_string(),
            os_name: os_name.to_string(),
            created_at,
            detected_libraries: result.detected_libraries.clone(),
            detected_alerts: result.detected_alerts.clone(),
            detected_aria_attributes: result.detected_aria_labels.clone(),
            detected_lazy_loading: result.detected_lazy_loading.clone(),
            detected_form_validation: result.detected_form_validation.forms.clone(),
            detected_meta_tags: result.detected_meta_tags.clone(),
            detected_semantic_elements: result.detected_semantic_elements.clone(),
        }
    }
}

#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Parse(String),
    NotFound(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "report store I/O error: {}", e),
            StoreError::Parse(msg) => write!(f, "stored report is not valid JSON: {}", msg),
            StoreError::NotFound(id) => write!(f, "no stored report with id '{}'", id),
        }
    }
}

impl std::error::Error for StoreError {}

/// Directory holding stored reports for the given root.
pub fn report_dir(root: &Path) -> PathBuf {
    root.join(".sigscan").join("reports")
}

/// Persist a record and return its share id.
pub fn save_report(root: &Path, record: &ReportRecord) -> Result<String, StoreError> {
    let dir = report_dir(root);
    fs::create_dir_all(&dir).map_err(StoreError::Io)?;
    let body = serde_json::to_string_pretty(record)
        .map_err(|e| StoreError::Parse(e.to_string()))?;
    fs::write(dir.join(format!("{}.json", record.id)), body).map_err(StoreError::Io)?;
    Ok(record.id.clone())
}

/// Load a stored report by share id. Ids are plain hex tokens; anything
/// containing a path separator is treated as unknown.
pub fn load_report(root: &Path, id: &str) -> Result<ReportRecord, StoreError> {
    if id.is_empty() || id.contains('/') || id.contains('\\') || id.contains("..") {
        return Err(StoreError::NotFound(id.to_string()));
    }
    let path = report_dir(root).join(format!("{}.json", id));
    if !path.is_file() {
        return Err(StoreError::NotFound(id.to_string()));
    }
    let raw = fs::read_to_string(&path).map_err(StoreError::Io)?;
    serde_json::from_str(&raw).map_err(|e| StoreError::Parse(e.to_string()))
}

/// List stored report ids, oldest-first by file name.
pub fn list_reports(root: &Path) -> Vec<String> {
    let mut ids: Vec<String> = fs::read_dir(report_dir(root))
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .filter_map(|e| {
                    let name = e.file_name().to_string_lossy().to_string();
                    name.strip_suffix(".json").map(|s| s.to_string())
                })
                .collect()
        })
        .unwrap_or_default();
    ids.sort();
    ids
}

#[derive(Debug, Serialize)]
/// Aggregate over all stored reports: total count and how often each
/// library showed up, most frequent first.
pub struct StoreStats {
    pub reports: usize,
    pub libraries: Vec<LibraryTally>,
}

#[derive(Debug, Serialize)]
pub struct LibraryTally {
    pub name: String,
    pub reports: usize,
}

/// Tally library detections across every readable stored report.
/// Unreadable files are skipped rather than failing the whole pass.
pub fn stats(root: &Path) -> StoreStats {
    let mut reports = 0usize;
    let mut tally: BTreeMap<String, usize> = BTreeMap::new();
    for id in list_reports(root) {
        let Ok(record) = load_report(root, &id) else {
            continue;
        };
        reports += 1;
        for lib in &record.detected_libraries {
            *tally.entry(lib.name.clone()).or_insert(0) += 1;
        }
    }
    let mut libraries: Vec<LibraryTally> = tally
        .into_iter()
        .map(|(name, reports)| LibraryTally { name, reports })
        .collect();
    libraries.sort_by(|a, b| b.reports.cmp(&a.reports).then(a.name.cmp(&b.name)));
    StoreStats { reports, libraries }
}
