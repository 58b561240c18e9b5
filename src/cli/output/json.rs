//! JSON output formatting

use super::ReportRenderer;
use crate::error::SecGuardError;
use crate::rules::results::ScanResult;

/// Full scan result as pretty-printed JSON, every finding included.
pub struct JsonOutput;

impl JsonOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for JsonOutput {
    fn render(&self, result: &ScanResult) -> Result<String, SecGuardError> {
        Ok(serde_json::to_string_pretty(result)?)
    }
}
