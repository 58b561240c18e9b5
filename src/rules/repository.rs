//! Rule repository
//!
//! Loads N named rule sources, flattens them into one ordered, validated rule
//! list, and compiles every pattern exactly once. Loading is resilient by
//! design: an unparseable source is skipped with a diagnostic, a single
//! invalid pattern is dropped without aborting the rest, and duplicate rule
//! ids keep the first occurrence.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use super::schema::{RawRule, Rule};

/// Top-level keys in a rule document that are metadata, not categories.
const METADATA_KEYS: [&str; 3] = ["version", "last_updated", "description"];

/// Embedded default rule sources.
const BUILTIN_SOURCES: [(&str, &str); 3] = [
    ("owasp-top-10", include_str!("data/owasp-top-10.json")),
    ("secrets", include_str!("data/secrets.json")),
    ("baas-misconfig", include_str!("data/baas-misconfig.json")),
];

/// Validated, compiled rule list shared by all scan specializations.
///
/// Rules are loaded once per process and read-only thereafter.
#[derive(Debug, Default)]
pub struct RuleRepository {
    rules: Vec<Rule>,
    seen_ids: HashSet<String>,
}

impl RuleRepository {
    /// Load the embedded default rule sources.
    pub fn builtin() -> Self {
        let mut repo = Self::default();
        for (name, json) in BUILTIN_SOURCES {
            repo.load_source(name, json);
        }
        repo
    }

    /// Load every `*.json` file from a directory as a rule source.
    ///
    /// A missing directory or an unreadable file is a scoped failure: it is
    /// logged and skipped, and whatever else loads stays active.
    pub fn from_dir(dir: &Path) -> Self {
        let mut repo = Self::default();
        repo.load_dir(dir);
        repo
    }

    /// Append every `*.json` file from a directory to this repository.
    ///
    /// Duplicate ids against already-loaded rules keep the first occurrence,
    /// so builtin rules win over same-id custom rules.
    pub fn load_dir(&mut self, dir: &Path) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "Rules directory not readable");
                return;
            }
        };

        let mut paths: Vec<_> = entries
            .flatten()
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();

        for path in paths {
            let name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("unnamed")
                .to_string();
            match fs::read_to_string(&path) {
                Ok(json) => self.load_source(&name, &json),
                Err(e) => {
                    warn!(source = %path.display(), error = %e, "Skipping unreadable rule source");
                }
            }
        }
    }

    /// Parse one JSON rule source and append its rules.
    ///
    /// The document maps category name to an object carrying a `patterns`
    /// array; metadata keys are ignored. Entries that fail validation or
    /// whose pattern does not compile are dropped individually.
    pub fn load_source(&mut self, source: &str, json: &str) {
        let document: Value = match serde_json::from_str(json) {
            Ok(v) => v,
            Err(e) => {
                warn!(source, error = %e, "Skipping unparseable rule source");
                return;
            }
        };

        let Value::Object(categories) = document else {
            warn!(source, "Skipping rule source: top level is not an object");
            return;
        };

        let mut loaded = 0usize;
        for (category, category_data) in categories {
            if METADATA_KEYS.contains(&category.as_str()) {
                continue;
            }
            let Some(patterns) = category_data.get("patterns").and_then(Value::as_array) else {
                continue;
            };

            for entry in patterns {
                let raw: RawRule = match serde_json::from_value(entry.clone()) {
                    Ok(raw) => raw,
                    Err(e) => {
                        warn!(source, category, error = %e, "Dropping malformed rule entry");
                        continue;
                    }
                };
                self.add_rule(raw, source, &category);
                loaded += 1;
            }
        }

        debug!(source, rules = loaded, "Loaded rule source");
    }

    fn add_rule(&mut self, raw: RawRule, source: &str, category: &str) {
        if self.seen_ids.contains(&raw.id) {
            warn!(source, rule_id = %raw.id, "Dropping duplicate rule id");
            return;
        }
        match Rule::compile(raw, source, category) {
            Ok(rule) => {
                self.seen_ids.insert(rule.id.clone());
                self.rules.push(rule);
            }
            Err(e) => {
                warn!(source, error = %e, "Dropping rule with invalid pattern");
            }
        }
    }

    /// All compiled rules, in load order.
    pub fn all_rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rules belonging to a single source, in load order.
    pub fn rules_for_source(&self, source: &str) -> Vec<Rule> {
        self.rules
            .iter()
            .filter(|r| r.source == source)
            .cloned()
            .collect()
    }

    /// Number of compiled rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules are loaded.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
