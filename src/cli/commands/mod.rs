//! Command implementations

pub mod baas;
pub mod scan;
pub mod secrets;

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use colored::Colorize;

use crate::cli::output::OutputFormat;
use crate::config::Config;
use crate::error::{ScanError, SecGuardError};
use crate::rules::{RuleRepository, Severity};
use crate::scanner::WalkOptions;

/// Arguments shared by every scan command.
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// File or directory to scan
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Hide findings below this severity in terminal output
    #[arg(long, value_name = "SEVERITY")]
    pub min_severity: Option<Severity>,

    /// Also scan build output and bundle artifacts
    #[arg(long)]
    pub include_bundles: bool,
}

#[derive(Args, Debug)]
pub struct ScanArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Directory of additional rule sources (*.json)
    #[arg(long, value_name = "DIR")]
    pub rules_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct SecretsArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Entropy threshold in bits per character
    #[arg(long, value_name = "BITS")]
    pub entropy_threshold: Option<f64>,

    /// Disable entropy analysis entirely
    #[arg(long)]
    pub no_entropy: bool,
}

#[derive(Args, Debug)]
pub struct BaasArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Audit only this provider (supabase, firebase, amplify, pocketbase)
    #[arg(long, value_name = "NAME")]
    pub provider: Option<crate::providers::BaasProvider>,
}

/// Resolve the effective configuration for a command invocation.
fn load_config(explicit: Option<&Path>, target: &Path) -> Result<Config, SecGuardError> {
    Ok(Config::resolve(explicit, target)?)
}

/// Rule repository for a run: builtin sources plus any custom directory.
fn load_rules(config: &Config, rules_dir: Option<&Path>) -> RuleRepository {
    let mut repo = RuleRepository::builtin();
    if let Some(dir) = rules_dir.or(config.rules_dir.as_deref()) {
        repo.load_dir(dir);
    }
    repo
}

/// Traversal options from configuration and command flags.
fn walk_options(config: &Config, common: &CommonArgs) -> WalkOptions {
    WalkOptions {
        include_bundles: common.include_bundles || config.include_bundles,
        ignore: config.ignore.clone(),
    }
}

/// Emit a rendered report to stdout or the requested file.
fn emit_report(report: &str, output: Option<&Path>) -> Result<(), SecGuardError> {
    match output {
        Some(path) => {
            fs::write(path, report).map_err(|source| ScanError::OutputWrite {
                path: path.display().to_string(),
                source,
            })?;
            println!(
                "{} Report written to: {}",
                "Success:".green().bold(),
                path.display().to_string().cyan()
            );
        }
        None => println!("{report}"),
    }
    Ok(())
}
