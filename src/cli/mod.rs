//! # CLI Module
//!
//! Command-line interface for secguard, built with `clap`.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `scan` | Full rule sweep: injection, XSS, crypto, configuration, secrets |
//! | `secrets` | Credential detection with entropy analysis and redaction |
//! | `baas` | Backend-service misconfiguration audit (Supabase, Firebase, Amplify, PocketBase) |
//!
//! ## Submodules
//!
//! - [`commands`] - Command implementations
//! - [`exit_codes`] - Standardized exit codes for gate integration
//! - [`output`] - Report formatters (Terminal, JSON, SARIF)
//!
//! ## Global Options
//!
//! - `-v, --verbose` - Increase verbosity level (use multiple times: -v, -vv, -vvv)
//! - `-c, --config <FILE>` - Path to configuration file
//!
//! ## Examples
//!
//! ```bash
//! # Scan the current directory
//! secguard scan
//!
//! # Secret detection with SARIF output for code scanning
//! secguard secrets --format sarif -o findings.sarif
//!
//! # Audit backend-service configuration
//! secguard baas ./app
//! ```

pub mod commands;
pub mod exit_codes;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{BaasArgs, ScanArgs, SecretsArgs};

/// secguard - Pattern-based security scanner for AI-generated and human code
#[derive(Parser, Debug)]
#[command(name = "secguard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan for all rule categories
    Scan(ScanArgs),

    /// Detect hardcoded credentials and high-entropy strings
    Secrets(SecretsArgs),

    /// Audit backend-service configuration for the detected providers
    Baas(BaasArgs),
}
