//! Secrets command - credential detection with entropy analysis

use std::path::Path;

use tracing::info;

use super::{emit_report, load_config, load_rules, walk_options, SecretsArgs};
use crate::cli::exit_codes;
use crate::cli::output::renderer_for;
use crate::error::SecGuardError;
use crate::scanner::{EngineOptions, ScanEngine};

pub fn execute(args: SecretsArgs, config_path: Option<&Path>) -> Result<i32, SecGuardError> {
    let config = load_config(config_path, &args.common.path)?;
    let repo = load_rules(&config, None);

    let threshold = (!args.no_entropy)
        .then(|| args.entropy_threshold.unwrap_or(config.entropy_threshold));
    info!(
        target = %args.common.path.display(),
        entropy = threshold.is_some(),
        "Starting secret detection"
    );

    let engine = ScanEngine::new(
        repo.rules_for_source("secrets"),
        EngineOptions::secrets(threshold),
    );
    let result = engine.scan(&args.common.path, &walk_options(&config, &args.common))?;

    let min_severity = args.common.min_severity.or(config.min_severity);
    let report = renderer_for(args.common.format, min_severity).render(&result)?;
    emit_report(&report, args.common.output.as_deref())?;

    Ok(exit_codes::for_result(&result))
}
