//! Output formatting module for CLI

mod json;
mod sarif;
mod terminal;

pub use json::JsonOutput;
pub use sarif::SarifOutput;
pub use terminal::TerminalOutput;

use clap::ValueEnum;

use crate::error::SecGuardError;
use crate::rules::results::ScanResult;
use crate::rules::Severity;

/// Supported report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored human-readable terminal report
    #[default]
    Text,
    /// Full scan result as pretty-printed JSON
    Json,
    /// SARIF 2.1.0 for code-scanning integration
    Sarif,
}

/// Trait for rendering a scan result into a report string.
pub trait ReportRenderer {
    fn render(&self, result: &ScanResult) -> Result<String, SecGuardError>;
}

/// Renderer for a format selection.
///
/// `min_severity` only affects the terminal report; machine formats always
/// carry every finding.
pub fn renderer_for(
    format: OutputFormat,
    min_severity: Option<Severity>,
) -> Box<dyn ReportRenderer> {
    match format {
        OutputFormat::Text => Box::new(TerminalOutput::new(min_severity)),
        OutputFormat::Json => Box::new(JsonOutput::new()),
        OutputFormat::Sarif => Box::new(SarifOutput::new()),
    }
}
