//! sigscan core library.
//!
//! This crate exposes programmatic APIs for analyzing a raw HTML
//! document against configurable library-signature rules, plus the
//! report store the CLI persists results into.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `models`: Data models for rules and analysis output structs.
//! - `detect`: The individual detector passes over the document text.
//! - `analyze`: The aggregator running every detector once.
//! - `output`: Human/JSON printers for analyze/rules/report/stats.
//! - `store`: File-backed report persistence with share ids.
//! - `utils`: Supporting helpers.

pub mod analyze;
pub mod cli;
pub mod config;
pub mod detect;
pub mod models;
pub mod output;
pub mod store;
pub mod utils;
