//! configdiff: compare two configuration files
//!
//! Loads two YAML, JSON or TOML documents, classifies their top-level keys
//! and prints a report with a migration script.

use anyhow::{bail, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use configdiff::{
    cli::{self, Invocation},
    config::{DiffConfig, Validatable},
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nSupported Config Formats:",
        "\n  YAML: .yaml, .yml",
        "\n  JSON: .json",
        "\n  TOML: .toml",
        "\n  other extensions: YAML, then JSON",
        "\n\nOutput Formats:",
        "\n  summary, json"
    )
}

#[derive(Parser)]
#[command(name = "configdiff")]
#[command(version, long_version = build_long_version())]
#[command(about = "Compare two configuration files and summarize their differences", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Report produced (with or without changes)
    1  Usage error, or a config could not be read or decoded
    2  Changes detected (only with --fail-on-change)

EXAMPLES:
    # Compare two YAML configs
    configdiff staging.yaml production.yaml

    # Mixed formats are fine; only top-level keys are compared
    configdiff app.json app.toml

    # CI/CD gate on drift
    configdiff expected.yaml live.yaml --no-color --fail-on-change

    # Export JSON for processing
    configdiff old.yaml new.yaml -o json > diff.json")]
struct Cli {
    /// Baseline config (config1) followed by the config to compare (config2)
    #[arg(value_name = "CONFIG")]
    configs: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    output: ReportFormat,

    /// Write the report to a file instead of stdout
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long)]
    no_color: bool,

    /// Exit with code 2 if any key differs
    #[arg(long)]
    fail_on_change: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    quiet: bool,

    /// Print shell completions for SHELL and exit
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn main() {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        generate(shell, &mut Cli::command(), "configdiff", &mut std::io::stdout());
        return;
    }

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", cli::error_line(&err));
            exit_codes::ERROR
        }
    };
    if exit_code != exit_codes::SUCCESS {
        std::process::exit(exit_code);
    }
}

fn run(cli: Cli) -> Result<i32> {
    let (left, right, extra) = match cli::resolve_configs(cli.configs) {
        Invocation::Usage => {
            println!("{}", cli::USAGE);
            return Ok(exit_codes::ERROR);
        }
        Invocation::Compare { left, right, extra } => (left, right, extra),
    };
    if !extra.is_empty() {
        tracing::warn!(
            "Ignoring {} extra argument(s): {}",
            extra.len(),
            extra
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(" ")
        );
    }

    let config = DiffConfig::builder()
        .left_path(left)
        .right_path(right)
        .output_format(cli.output)
        .output_file(cli.output_file)
        .no_color(cli.no_color)
        .fail_on_change(cli.fail_on_change)
        .quiet(cli.quiet)
        .build()?;

    let errors = config.validate();
    if !errors.is_empty() {
        for error in &errors {
            tracing::error!("{error}");
        }
        bail!("invalid configuration ({} error(s))", errors.len());
    }

    cli::run_diff(config)
}
