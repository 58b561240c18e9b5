//! secguard - Pattern-based security scanner for AI-generated and human code
//!
//! This is the main entry point for the CLI application.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use secguard::cli::{commands, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Scan(args) => commands::scan::execute(args, config),
        Commands::Secrets(args) => commands::secrets::execute(args, config),
        Commands::Baas(args) => commands::baas::execute(args, config),
    };

    // Exit codes are the gate contract: 0 clean, 1 findings, 2 blocking
    match result {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}
