//! Baas command - backend-service misconfiguration audit

use std::collections::HashSet;
use std::path::Path;

use colored::Colorize;
use tracing::info;

use super::{emit_report, load_config, load_rules, walk_options, BaasArgs};
use crate::cli::exit_codes;
use crate::cli::output::{renderer_for, OutputFormat};
use crate::error::SecGuardError;
use crate::providers::{self, ProviderEvidence};
use crate::rules::{CheckType, Rule};
use crate::scanner::{aggregate, filesystem, EngineOptions, ScanEngine};

pub fn execute(args: BaasArgs, config_path: Option<&Path>) -> Result<i32, SecGuardError> {
    let config = load_config(config_path, &args.common.path)?;
    let repo = load_rules(&config, None);
    let options = walk_options(&config, &args.common);

    let mut evidence = providers::detect(&args.common.path, &options)?;
    if let Some(only) = args.provider {
        evidence.retain(|record| record.provider == only);
    }
    info!(providers = evidence.len(), target = %args.common.path.display(), "Starting audit");

    if args.common.format == OutputFormat::Text {
        print_provider_summary(&evidence);
    }

    let baas_rules = repo.rules_for_source("baas-misconfig");
    let mut findings = Vec::new();
    let mut examined: HashSet<&Path> = HashSet::new();

    for record in &evidence {
        let provider_rules: Vec<Rule> = baas_rules
            .iter()
            .filter(|r| {
                r.category == record.provider.category() || r.category == "general_baas"
            })
            .cloned()
            .collect();

        // Configuration and access-rule documents
        let config_engine = ScanEngine::new(
            provider_rules.clone(),
            EngineOptions {
                check_types: Some(vec![CheckType::Config, CheckType::Rules]),
                ..Default::default()
            },
        );
        for path in &record.config_files {
            findings.extend(config_engine.scan_file(path));
            examined.insert(path);
        }

        // Application source using the provider SDK
        let usage_engine = ScanEngine::new(
            provider_rules,
            EngineOptions {
                check_types: Some(vec![CheckType::Code]),
                ..Default::default()
            },
        );
        for path in &record.usage_files {
            findings.extend(usage_engine.scan_file(path));
            examined.insert(path);
        }

        // Env files: server keys under public build prefixes
        for path in &record.env_files {
            if let Ok(text) = filesystem::read_lossy(path) {
                findings.extend(providers::env_exposure_findings(
                    &path.to_string_lossy(),
                    &text,
                ));
            }
            examined.insert(path);
        }
    }

    let result = aggregate::collect(findings, examined.len());

    let min_severity = args.common.min_severity.or(config.min_severity);
    let report = renderer_for(args.common.format, min_severity).render(&result)?;
    emit_report(&report, args.common.output.as_deref())?;

    Ok(exit_codes::for_result(&result))
}

fn print_provider_summary(evidence: &[ProviderEvidence]) {
    if evidence.is_empty() {
        println!(
            "{}",
            "No backend-service providers detected. Nothing to audit.".dimmed()
        );
        return;
    }

    println!("{}", "Detected providers:".bold());
    for record in evidence {
        println!(
            "  {} {} ({} config, {} usage, {} env files)",
            "•".dimmed(),
            record.provider.display_name().cyan(),
            record.config_files.len(),
            record.usage_files.len(),
            record.env_files.len()
        );
    }
}
