//! Output rendering for analyze, rules, report, and stats commands.
//!
//! Supports `human` (default) and `json` outputs. The JSON form for an
//! analysis is the full result shape consumed by downstream tooling,
//! plus a top-level `summary` of per-detector counts.

use crate::models::rules::Rule;
use crate::models::AnalysisResult;
use crate::store::{ReportRecord, StoreStats};
use owo_colors::OwoColorize;
use serde_json::{json, Value as JsonVal};

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

fn section(title: &str, count: usize, color: bool) -> String {
    let head = format!("— {} ({})", title, count);
    if color {
        head.bold().to_string()
    } else {
        head
    }
}

/// Print an analysis in the requested format.
pub fn print_analysis(result: &AnalysisResult, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_analysis_json(result)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            println!(
                "{}",
                section("Libraries", result.detected_libraries.len(), color)
            );
            for lib in &result.detected_libraries {
                let name = if color {
                    lib.name.clone().green().bold().to_string()
                } else {
                    lib.name.clone()
                };
                println!("  ✔ {} ({} line{})", name, lib.count, plural(lib.count));
                for line in &lib.lines {
                    println!("      {}", line.trim());
                }
            }

            println!("{}", section("Alerts", result.detected_alerts.len(), color));
            for alert in &result.detected_alerts {
                let mark = if color {
                    "▲".yellow().to_string()
                } else {
                    "▲".to_string()
                };
                println!("  {} {}: {}", mark, alert.name, alert.code);
            }

            println!(
                "{}",
                section("ARIA attributes", result.detected_aria_labels.len(), color)
            );
            for aria in &result.detected_aria_labels {
                println!(
                    "  ◆ line {}: {}=\"{}\" on <{}>",
                    aria.line_number, aria.attribute, aria.value, aria.element_type
                );
            }

            println!(
                "{}",
                section("Lazy loading", result.detected_lazy_loading.len(), color)
            );
            for lazy in &result.detected_lazy_loading {
                println!("  ◆ line {}: {}", lazy.line_number, lazy.name);
            }

            println!(
                "{}",
                section("Favicon", result.detected_favicon.icons.len(), color)
            );
            if result.detected_favicon.exists {
                for icon in &result.detected_favicon.icons {
                    println!("  ✔ line {}: {}", icon.line_number, icon.href);
                }
            } else {
                println!("  ✖ no favicon declaration found");
            }

            println!(
                "{}",
                section("Forms", result.detected_form_validation.forms.len(), color)
            );
            for form in &result.detected_form_validation.forms {
                println!(
                    "  ◆ line {}: {} ({} validation element{})",
                    form.line_number,
                    form.name,
                    form.validation_elements.len(),
                    plural(form.validation_elements.len())
                );
            }

            println!(
                "{}",
                section("Meta tags", result.detected_meta_tags.len(), color)
            );
            for tag in &result.detected_meta_tags {
                println!(
                    "  ◆ line {}: {} [{}] {}",
                    tag.line_number, tag.name, tag.kind, tag.content
                );
            }

            println!(
                "{}",
                section(
                    "Semantic elements",
                    result.detected_semantic_elements.len(),
                    color
                )
            );
            for sem in &result.detected_semantic_elements {
                println!("  ◆ line {}: <{}>", sem.line_number, sem.tag_name);
            }
            if let Some(score) = result.semantic_score {
                let line = format!("  structural score: {}%", score);
                if color {
                    println!("{}", line.bold());
                } else {
                    println!("{}", line);
                }
            }
        }
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

/// Compose the analysis JSON object (pure) for testing/snapshot purposes.
/// The result's own fields stay at the top level; a `summary` of counts
/// is appended.
pub fn compose_analysis_json(result: &AnalysisResult) -> JsonVal {
    let mut out = serde_json::to_value(result).unwrap();
    let summary = json!({
        "libraries": result.detected_libraries.len(),
        "alerts": result.detected_alerts.len(),
        "ariaAttributes": result.detected_aria_labels.len(),
        "lazyLoading": result.detected_lazy_loading.len(),
        "favicons": result.detected_favicon.icons.len(),
        "formValidation": result.detected_form_validation.forms.len(),
        "metaTags": result.detected_meta_tags.len(),
        "semanticElements": result.detected_semantic_elements.len(),
    });
    if let Some(obj) = out.as_object_mut() {
        obj.insert("summary".to_string(), summary);
    }
    out
}

/// Print the configured rule list.
pub fn print_rules(rules: &[Rule], output: &str) {
    match output {
        "json" => {
            let items: Vec<_> = rules
                .iter()
                .map(|r| {
                    json!({
                        "displayName": r.display_name,
                        "keywords": r.keywords,
                        "syntaxHighlightType": r.syntax_highlight_type,
                    })
                })
                .collect();
            let out = json!({"rules": items, "total": rules.len()});
            println!("{}", serde_json::to_string_pretty(&out).unwrap());
        }
        _ => {
            let color = use_colors(output);
            for r in rules {
                let name = if color {
                    r.display_name.clone().bold().to_string()
                } else {
                    r.display_name.clone()
                };
                println!("{} — keywords: [{}]", name, r.keywords.join(", "));
            }
            println!("{} rule{}", rules.len(), plural(rules.len()));
        }
    }
}

/// Print a stored report.
pub fn print_report(record: &ReportRecord, output: &str) {
    match output {
        "json" => println!("{}", serde_json::to_string_pretty(record).unwrap()),
        _ => {
            let color = use_colors(output);
            let header = format!("report {} — {}", record.id, record.url);
            if color {
                println!("{}", header.bold());
            } else {
                println!("{}", header);
            }
            println!(
                "  os={} created_at={} libraries={} alerts={} aria={} lazy={} forms={} meta={} semantic={}",
                record.os_name,
                record.created_at,
                record.detected_libraries.len(),
                record.detected_alerts.len(),
                record.detected_aria_attributes.len(),
                record.detected_lazy_loading.len(),
                record.detected_form_validation.len(),
                record.detected_meta_tags.len(),
                record.detected_semantic_elements.len(),
            );
            for lib in &record.detected_libraries {
                println!("  ✔ {} ({})", lib.name, lib.count);
            }
        }
    }
}

/// Print store-wide stats.
pub fn print_stats(stats: &StoreStats, output: &str) {
    match output {
        "json" => println!("{}", serde_json::to_string_pretty(stats).unwrap()),
        _ => {
            let color = use_colors(output);
            let head = format!("— Stats — reports={}", stats.reports);
            if color {
                println!("{}", head.bold());
            } else {
                println!("{}", head);
            }
            for lib in &stats.libraries {
                println!(
                    "  {} seen in {} report{}",
                    lib.name,
                    lib.reports,
                    plural(lib.reports)
                );
            }
        }
    }
}
