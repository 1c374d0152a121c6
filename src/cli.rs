//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sigscan",
    version,
    about = "HTML signature analyzer",
    long_about = "sigscan — analyze a saved HTML document for front-end library signatures, inline alerts, ARIA attributes, lazy loading, favicons, form validation, meta tags, and semantic structure.\n\nConfiguration precedence: CLI > sigscan.toml > defaults.",
    after_help = "Examples:\n  sigscan analyze page.html --rules rules.toml\n  sigscan analyze - --rules rules.toml --output json < page.html\n  sigscan analyze page.html --rules rules.toml --save --url https://example.com\n  sigscan report 1f3a5c7e9b2d4f60\n  sigscan stats --output json",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands for analyzing documents and reading reports.
pub enum Commands {
    /// Show version
    #[command(
        about = "Show version",
        long_about = "Print the current sigscan version."
    )]
    Version,
    /// Analyze an HTML document
    #[command(
        about = "Analyze an HTML document",
        long_about = "Run every detector over the given document using the configured rules file. The input is a file path, or '-' to read stdin.",
        after_help = "Examples:\n  sigscan analyze page.html --rules rules.toml\n  sigscan analyze page.html --rules rules.toml --output json --save"
    )]
    Analyze {
        #[arg(help = "HTML file to analyze, or '-' for stdin")]
        input: String,
        #[arg(long, help = "Root directory for config and reports (default: current dir)")]
        root: Option<String>,
        #[arg(long, help = "Path to the rules file (TOML or YAML)")]
        rules: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Persist the result to the report store and print its share id")]
        save: bool,
        #[arg(long, help = "URL label stored with a saved report (defaults to the input path)")]
        url: Option<String>,
    },
    /// List the configured rules
    #[command(
        about = "List rules",
        long_about = "Load, validate, and list the configured library-signature rules."
    )]
    Rules {
        #[arg(long, help = "Root directory for config (default: current dir)")]
        root: Option<String>,
        #[arg(long, help = "Path to the rules file (TOML or YAML)")]
        rules: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// Show a stored report
    #[command(
        about = "Show a stored report",
        long_about = "Print a previously saved analysis by its share id."
    )]
    Report {
        #[arg(help = "Share id returned by 'analyze --save'")]
        id: String,
        #[arg(long, help = "Root directory for the report store (default: current dir)")]
        root: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// Aggregate stats over stored reports
    #[command(
        about = "Show store stats",
        long_about = "Count stored reports and tally which libraries were detected across them."
    )]
    Stats {
        #[arg(long, help = "Root directory for the report store (default: current dir)")]
        root: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
}
