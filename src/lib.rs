//! # secguard
//!
//! Pattern-based static security scanner aimed at the failure modes of
//! AI-generated code: hardcoded credentials, injection sinks, weak crypto,
//! and backend-as-a-service misconfiguration.
//!
//! ## Architecture
//!
//! - [`rules`] - Rule repository, typed schema, findings and scan results
//! - [`scanner`] - The detection engine: matching, filtering, context
//!   escalation, entropy analysis, traversal, aggregation
//! - [`providers`] - Backend-service provider detection
//! - [`config`] - `.secguard.toml` settings
//! - [`cli`] - Command-line surface and report formatters
//!
//! ## Library use
//!
//! The engine is usable without the CLI:
//!
//! ```
//! use secguard::rules::RuleRepository;
//! use secguard::scanner::{EngineOptions, ScanEngine};
//!
//! let repo = RuleRepository::builtin();
//! let engine = ScanEngine::new(repo.all_rules().to_vec(), EngineOptions::default());
//! let findings = engine.scan_content("os.system(cmd)", "script.py");
//! assert!(!findings.is_empty());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod providers;
pub mod rules;
pub mod scanner;

pub use error::SecGuardError;
pub use rules::{Finding, RuleRepository, ScanResult, Severity};
pub use scanner::{EngineOptions, ScanEngine};
