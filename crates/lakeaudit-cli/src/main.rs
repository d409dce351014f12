//! CLI entry point for lakeaudit.
//!
//! This module is intentionally thin: it handles argument parsing, logging setup, stdout
//! output and exit codes. All business logic lives in the `lakeaudit-app` crate.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use lakeaudit_app::{parse_formats, run_audit, save};
use lakeaudit_settings::AuditorConfig;
use lakeaudit_types::AuditReport;
use tracing_subscriber::EnvFilter;

const RULE_WIDTH: usize = 60;

#[derive(Parser, Debug)]
#[command(
    name = "lakeaudit",
    version,
    about = "Databricks compliance auditor with dry-run support"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the compliance audit and write reports.
    ///
    /// Without DATABRICKS_HOST and DATABRICKS_TOKEN the audit replays fixture data.
    Audit {
        /// Output directory for reports.
        #[arg(long, default_value = "reports")]
        out: Utf8PathBuf,

        /// Report formats (comma-separated: html,md,json).
        #[arg(long, default_value = "html,md,json")]
        format: String,
    },
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    init_logging();

    let Some(cmd) = cli.cmd else {
        eprintln!("{}", Cli::command().render_help());
        std::process::exit(1);
    };

    let result = match cmd {
        Commands::Audit { out, format } => cmd_audit(out, &format),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("lakeaudit error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// Logs go to stderr so stdout carries only the saved paths and the summary block.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_audit(out: Utf8PathBuf, format: &str) -> anyhow::Result<i32> {
    // Validate formats before any network call or file write.
    let formats = parse_formats(format).context("parse --format")?;
    let config = AuditorConfig::from_env().context("load configuration")?;

    let report = run_audit(&config)?;
    let written = save(&report, &out, &formats).context("save reports")?;
    for path in &written {
        println!("Report saved: {path}");
    }

    print_summary(&report);
    Ok(report.exit_code())
}

fn print_summary(report: &AuditReport) {
    let rule = "=".repeat(RULE_WIDTH);
    let summary = report.summary();

    println!();
    println!("{rule}");
    println!("AUDIT SUMMARY");
    println!("{rule}");
    println!("Total checks: {}", summary.total);
    println!("[OK]   {}", summary.ok);
    println!("[WARN] {}", summary.warn);
    println!("[FAIL] {}", summary.fail);
    println!("{rule}");

    let verdict = match report.exit_code() {
        0 => "[PASS] All checks passed!",
        2 => "[WARN] Some checks returned warnings",
        _ => "[FAIL] Some checks failed!",
    };
    println!("{verdict}");
}
