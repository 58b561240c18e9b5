//! Scan command - full rule sweep over a file or directory

use std::path::Path;

use tracing::info;

use super::{emit_report, load_config, load_rules, walk_options, ScanArgs};
use crate::cli::exit_codes;
use crate::cli::output::renderer_for;
use crate::error::SecGuardError;
use crate::scanner::{EngineOptions, ScanEngine};

pub fn execute(args: ScanArgs, config_path: Option<&Path>) -> Result<i32, SecGuardError> {
    let config = load_config(config_path, &args.common.path)?;
    let repo = load_rules(&config, args.rules_dir.as_deref());
    info!(rules = repo.len(), target = %args.common.path.display(), "Starting scan");

    let engine = ScanEngine::new(repo.all_rules().to_vec(), EngineOptions::default());
    let result = engine.scan(&args.common.path, &walk_options(&config, &args.common))?;

    let min_severity = args.common.min_severity.or(config.min_severity);
    let report = renderer_for(args.common.format, min_severity).render(&result)?;
    emit_report(&report, args.common.output.as_deref())?;

    Ok(exit_codes::for_result(&result))
}
