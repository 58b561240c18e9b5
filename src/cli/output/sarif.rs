//! SARIF output formatting for GitHub Code Scanning integration

use std::collections::HashSet;

use serde::Serialize;

use super::ReportRenderer;
use crate::error::SecGuardError;
use crate::rules::results::{Finding, ScanResult, Severity};

pub struct SarifOutput;

impl SarifOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SarifOutput {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct SarifReport {
    #[serde(rename = "$schema")]
    schema: &'static str,
    version: &'static str,
    runs: Vec<SarifRun>,
}

#[derive(Serialize)]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

#[derive(Serialize)]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Serialize)]
struct SarifDriver {
    name: &'static str,
    version: &'static str,
    #[serde(rename = "informationUri")]
    information_uri: &'static str,
    rules: Vec<SarifRule>,
}

#[derive(Serialize)]
struct SarifRule {
    id: String,
    name: String,
    #[serde(rename = "shortDescription")]
    short_description: SarifMessage,
    #[serde(rename = "fullDescription", skip_serializing_if = "Option::is_none")]
    full_description: Option<SarifMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<SarifMessage>,
    #[serde(rename = "defaultConfiguration")]
    default_configuration: SarifDefaultConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    properties: Option<SarifRuleProperties>,
}

#[derive(Serialize)]
struct SarifRuleProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    cwe: Option<String>,
}

#[derive(Serialize)]
struct SarifDefaultConfig {
    level: String,
}

#[derive(Serialize)]
struct SarifResult {
    #[serde(rename = "ruleId")]
    rule_id: String,
    level: String,
    message: SarifMessage,
    locations: Vec<SarifLocation>,
}

#[derive(Serialize)]
struct SarifMessage {
    text: String,
}

#[derive(Serialize)]
struct SarifLocation {
    #[serde(rename = "physicalLocation")]
    physical_location: SarifPhysicalLocation,
}

#[derive(Serialize)]
struct SarifPhysicalLocation {
    #[serde(rename = "artifactLocation")]
    artifact_location: SarifArtifactLocation,
    region: SarifRegion,
}

#[derive(Serialize)]
struct SarifArtifactLocation {
    uri: String,
}

#[derive(Serialize)]
struct SarifRegion {
    #[serde(rename = "startLine")]
    start_line: usize,
    #[serde(rename = "startColumn")]
    start_column: usize,
}

impl SarifOutput {
    fn severity_to_level(severity: Severity) -> &'static str {
        match severity {
            Severity::Critical | Severity::High => "error",
            Severity::Medium => "warning",
            Severity::Low | Severity::Info => "note",
        }
    }

    fn finding_to_result(finding: &Finding) -> SarifResult {
        let text = if finding.description.is_empty() {
            finding.name.clone()
        } else {
            finding.description.clone()
        };

        SarifResult {
            rule_id: finding.rule_id.clone(),
            level: Self::severity_to_level(finding.severity).to_string(),
            message: SarifMessage { text },
            locations: vec![SarifLocation {
                physical_location: SarifPhysicalLocation {
                    artifact_location: SarifArtifactLocation {
                        uri: finding.file_path.clone(),
                    },
                    region: SarifRegion {
                        start_line: finding.line_number,
                        start_column: finding.column,
                    },
                },
            }],
        }
    }

    /// Rule catalog with one entry per distinct rule id, in first-appearance
    /// order over the findings.
    fn rule_catalog(findings: &[Finding]) -> Vec<SarifRule> {
        let mut seen = HashSet::new();
        let mut rules = Vec::new();

        for finding in findings {
            if !seen.insert(finding.rule_id.as_str()) {
                continue;
            }
            rules.push(SarifRule {
                id: finding.rule_id.clone(),
                name: finding.name.clone(),
                short_description: SarifMessage {
                    text: finding.name.clone(),
                },
                full_description: (!finding.description.is_empty()).then(|| SarifMessage {
                    text: finding.description.clone(),
                }),
                help: (!finding.remediation.is_empty()).then(|| SarifMessage {
                    text: finding.remediation.clone(),
                }),
                default_configuration: SarifDefaultConfig {
                    level: Self::severity_to_level(finding.severity).to_string(),
                },
                properties: finding.cwe.as_ref().map(|cwe| SarifRuleProperties {
                    cwe: Some(cwe.clone()),
                }),
            });
        }

        rules
    }
}

impl ReportRenderer for SarifOutput {
    fn render(&self, result: &ScanResult) -> Result<String, SecGuardError> {
        let report = SarifReport {
            schema: "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json",
            version: "2.1.0",
            runs: vec![SarifRun {
                tool: SarifTool {
                    driver: SarifDriver {
                        name: "secguard",
                        version: env!("CARGO_PKG_VERSION"),
                        information_uri: "https://github.com/secguard/secguard",
                        rules: Self::rule_catalog(&result.findings),
                    },
                },
                results: result.findings.iter().map(Self::finding_to_result).collect(),
            }],
        };

        Ok(serde_json::to_string_pretty(&report)?)
    }
}
