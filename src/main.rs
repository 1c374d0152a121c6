//! sigscan CLI binary entry point.
//! Delegates to the library for analysis/persistence and prints results.

use clap::Parser;
use sigscan::cli::{Cli, Commands};
use sigscan::models::rules;
use sigscan::store::ReportRecord;
use sigscan::{analyze, config, output, store, utils};
use std::fs;
use std::io::Read;
use std::path::Path;

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Analyze {
            input,
            root,
            rules: rules_flag,
            output: output_flag,
            save,
            url,
        } => {
            let eff = config::resolve_effective(
                root.as_deref(),
                rules_flag.as_deref(),
                output_flag.as_deref(),
                if save { Some(true) } else { None },
            );
            let loaded = load_rules_or_exit(&eff);
            let html = read_input_or_exit(&input);

            let result = match analyze::run_analysis(&html, &loaded) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("{} {}", utils::error_prefix(), e);
                    std::process::exit(2);
                }
            };
            output::print_analysis(&result, &eff.output);

            if eff.save {
                let label = url.as_deref().unwrap_or(&input);
                let record = ReportRecord::new(label, std::env::consts::OS, &result);
                match store::save_report(&eff.root, &record) {
                    // Share id goes to stderr so json output stays parseable
                    Ok(id) => eprintln!("{} saved report {}", utils::info_prefix(), id),
                    Err(e) => {
                        eprintln!("{} {}", utils::error_prefix(), e);
                        std::process::exit(2);
                    }
                }
            }
        }
        Commands::Rules {
            root,
            rules: rules_flag,
            output: output_flag,
        } => {
            let eff = config::resolve_effective(
                root.as_deref(),
                rules_flag.as_deref(),
                output_flag.as_deref(),
                None,
            );
            let loaded = load_rules_or_exit(&eff);
            output::print_rules(&loaded, &eff.output);
        }
        Commands::Report {
            id,
            root,
            output: output_flag,
        } => {
            let eff =
                config::resolve_effective(root.as_deref(), None, output_flag.as_deref(), None);
            match store::load_report(&eff.root, &id) {
                Ok(record) => output::print_report(&record, &eff.output),
                Err(e) => {
                    eprintln!("{} {}", utils::error_prefix(), e);
                    std::process::exit(2);
                }
            }
        }
        Commands::Stats {
            root,
            output: output_flag,
        } => {
            let eff =
                config::resolve_effective(root.as_deref(), None, output_flag.as_deref(), None);
            output::print_stats(&store::stats(&eff.root), &eff.output);
        }
    }
}

/// Resolve and load the rules file, exiting with a boundary error when
/// it is unconfigured, missing, or invalid.
fn load_rules_or_exit(eff: &config::Effective) -> Vec<rules::Rule> {
    if !eff.rules_configured {
        eprintln!(
            "{} {}",
            utils::error_prefix(),
            "Rules file is not configured. Pass --rules or add sigscan.toml."
        );
        std::process::exit(2);
    }
    if config::load_config(&eff.root).is_none() {
        eprintln!(
            "{} {}",
            utils::note_prefix(),
            "No sigscan.toml found; using defaults."
        );
    }
    let rules_path = eff.root.join(&eff.rules);
    if !rules_path.is_file() {
        eprintln!(
            "{} {}",
            utils::error_prefix(),
            format!(
                "Rules file not found: {} (pass --rules or configure sigscan.toml)",
                rules_path.to_string_lossy()
            )
        );
        std::process::exit(2);
    }
    match rules::load_rules(&rules_path) {
        Ok(loaded) => match rules::validate_rules(&loaded) {
            Ok(()) => loaded,
            Err(e) => {
                eprintln!("{} {}", utils::error_prefix(), e);
                std::process::exit(2);
            }
        },
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            std::process::exit(2);
        }
    }
}

/// Read the document text from a file path, or stdin when `-`.
fn read_input_or_exit(input: &str) -> String {
    if input == "-" {
        let mut buf = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
            eprintln!(
                "{} {}",
                utils::error_prefix(),
                format!("cannot read stdin: {}", e)
            );
            std::process::exit(2);
        }
        return buf;
    }
    match fs::read_to_string(Path::new(input)) {
        Ok(s) => s,
        Err(e) => {
            eprintln!(
                "{} {}",
                utils::error_prefix(),
                format!("cannot read input file '{}': {}", input, e)
            );
            std::process::exit(2);
        }
    }
}
