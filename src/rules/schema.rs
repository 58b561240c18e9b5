//! Typed rule schema
//!
//! Rule sources are loosely-typed JSON documents mapping category names to
//! objects carrying a `patterns` array. This module replaces that nested shape
//! with a validated [`Rule`] at load time. Malformed entries are rejected
//! individually, never the whole source.

use regex::{Regex, RegexBuilder};
use serde::Deserialize;

use super::results::Severity;

/// Discriminator for where a backend-service rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum CheckType {
    /// Application source code
    #[serde(rename = "code_pattern")]
    Code,
    /// Provider configuration files
    #[serde(rename = "config_pattern")]
    Config,
    /// Access-rule documents (e.g. Firestore rules)
    #[serde(rename = "rules_pattern")]
    Rules,
}

/// Raw rule record as it appears in a JSON source, before validation.
#[derive(Debug, Deserialize)]
pub struct RawRule {
    pub id: String,
    pub name: String,
    #[serde(default = "default_severity")]
    pub severity: Severity,
    pub pattern: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub remediation: String,
    #[serde(default)]
    pub cwe: Option<String>,
    #[serde(default)]
    pub ai_specific: bool,
    #[serde(default)]
    pub real_world_case: Option<String>,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub requires_context: Option<String>,
    #[serde(default)]
    pub check_type: Option<CheckType>,
}

fn default_severity() -> Severity {
    Severity::Medium
}

/// A validated, compiled detection rule.
///
/// The regex is compiled exactly once, case-insensitive and multi-line, and
/// the rule is read-only thereafter. `Regex` is cheaply cloneable, so rules
/// can be handed to any number of engines.
#[derive(Debug, Clone)]
pub struct Rule {
    pub id: String,
    pub name: String,
    pub severity: Severity,
    pub regex: Regex,
    pub description: String,
    pub remediation: String,
    pub cwe: Option<String>,
    pub ai_specific: bool,
    pub real_world_case: Option<String>,
    pub provider: Option<String>,
    /// Substring that must occur anywhere in the scanned content for this
    /// rule to apply at all.
    pub requires_context: Option<String>,
    pub check_type: Option<CheckType>,
    /// Name of the rule source this rule was loaded from.
    pub source: String,
    /// Category key within the source document.
    pub category: String,
}

impl Rule {
    /// Compile a raw record into a rule. Fails when the pattern is not a
    /// valid regular expression.
    pub fn compile(raw: RawRule, source: &str, category: &str) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(&raw.pattern)
            .case_insensitive(true)
            .multi_line(true)
            .build()?;

        Ok(Rule {
            id: raw.id,
            name: raw.name,
            severity: raw.severity,
            regex,
            description: raw.description,
            remediation: raw.remediation,
            cwe: raw.cwe,
            ai_specific: raw.ai_specific,
            real_world_case: raw.real_world_case,
            provider: raw.provider,
            requires_context: raw.requires_context,
            check_type: raw.check_type,
            source: source.to_string(),
            category: category.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pattern: &str) -> RawRule {
        serde_json::from_value(serde_json::json!({
            "id": "TEST-001",
            "name": "Test Rule",
            "severity": "HIGH",
            "pattern": pattern,
        }))
        .unwrap()
    }

    #[test]
    fn test_compile_valid_pattern() {
        let rule = Rule::compile(raw(r"os\.system\s*\("), "owasp", "injection").unwrap();
        assert_eq!(rule.id, "TEST-001");
        assert_eq!(rule.severity, Severity::High);
        assert_eq!(rule.source, "owasp");
        assert_eq!(rule.category, "injection");
        assert!(rule.regex.is_match("os.system(\"ls\")"));
    }

    #[test]
    fn test_compile_is_case_insensitive_and_multiline() {
        let rule = Rule::compile(raw(r"^password\s*="), "s", "c").unwrap();
        assert!(rule.regex.is_match("x = 1\nPASSWORD = 'hunter2'"));
    }

    #[test]
    fn test_compile_invalid_pattern_fails() {
        assert!(Rule::compile(raw(r"(unclosed"), "s", "c").is_err());
    }

    #[test]
    fn test_raw_rule_defaults() {
        let r: RawRule = serde_json::from_value(serde_json::json!({
            "id": "X", "name": "X", "pattern": "x",
        }))
        .unwrap();
        assert_eq!(r.severity, Severity::Medium);
        assert!(!r.ai_specific);
        assert!(r.check_type.is_none());
    }

    #[test]
    fn test_check_type_wire_names() {
        let r: RawRule = serde_json::from_value(serde_json::json!({
            "id": "X", "name": "X", "pattern": "x", "check_type": "rules_pattern",
        }))
        .unwrap();
        assert_eq!(r.check_type, Some(CheckType::Rules));
    }
}
