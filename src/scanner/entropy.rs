//! Entropy-based unlabeled secret detection
//!
//! Independent heuristic that flags high-randomness string literals the rule
//! databases do not know about. Candidates are quoted strings (or quoted
//! assignment right-hand sides) of at least 20 characters; a candidate is
//! flagged when its Shannon entropy exceeds the threshold and it does not
//! match a benign shape (URL, path, email, UUID, data URI).

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::rules::results::{redact, Finding, Severity};

use super::{content, filters};

/// Default entropy threshold in bits per character.
pub const DEFAULT_THRESHOLD: f64 = 4.5;

lazy_static! {
    static ref CANDIDATE: Regex =
        Regex::new(r#"(?:['"]([^'"]{20,})['"]|=\s*['"]([^'"]{20,})['"])"#).unwrap();
    static ref UUID_SHAPE: Regex = Regex::new(
        r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$"
    )
    .unwrap();
}

/// Shannon entropy H = −Σ pᵢ·log2(pᵢ) over the character frequency
/// distribution, in bits per character.
pub fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    let mut len = 0usize;
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
        len += 1;
    }

    let len = len as f64;
    freq.values()
        .map(|&count| {
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Benign shapes that are high-entropy-looking but almost never secrets.
fn is_benign_shape(s: &str) -> bool {
    if s.starts_with("http://")
        || s.starts_with("https://")
        || s.starts_with("ftp://")
        || s.starts_with("file://")
    {
        return true;
    }
    // Deep paths
    if s.matches('/').count() > 2 {
        return true;
    }
    // Email shape
    if s.contains('@') && s.contains('.') {
        return true;
    }
    if UUID_SHAPE.is_match(s) {
        return true;
    }
    if s.starts_with("data:image") {
        return true;
    }
    false
}

/// Scan content for unlabeled high-entropy string literals.
///
/// Runs independently of the rule repository and produces MEDIUM findings
/// with the measured entropy attached and the matched text redacted.
/// Placeholder-looking candidates are discarded like any other secret match.
pub fn scan_entropy(content: &str, file_path: &str, threshold: f64) -> Vec<Finding> {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut findings = Vec::new();

    for caps in CANDIDATE.captures_iter(content) {
        let Some(group) = caps.get(1).or_else(|| caps.get(2)) else {
            continue;
        };
        let candidate = group.as_str();

        let entropy = shannon_entropy(candidate);
        if entropy <= threshold || is_benign_shape(candidate) {
            continue;
        }

        let (line_number, column) = content::line_and_column(content, group.start());
        let line = lines.get(line_number - 1).copied().unwrap_or("");
        if filters::is_placeholder(candidate, line) {
            continue;
        }

        // Keep the raw candidate out of the snippet as well
        let redacted = redact(candidate, 4);
        let code_snippet =
            content::code_snippet(&lines, line_number).replace(candidate, &redacted);

        findings.push(Finding {
            rule_id: "ENTROPY-001".to_string(),
            name: "High Entropy String".to_string(),
            severity: Severity::Medium,
            description: format!(
                "High entropy string detected (entropy: {entropy:.2}). May be an unlabeled secret."
            ),
            file_path: file_path.to_string(),
            line_number,
            column,
            code_snippet,
            cwe: Some("CWE-798".to_string()),
            remediation: "Review this string. If it is a secret, move it to an environment variable and rotate it.".to_string(),
            category: "entropy".to_string(),
            ai_specific: false,
            real_world_case: None,
            provider: None,
            matched_text: Some(redacted),
            is_in_bundle: false,
            entropy: Some(entropy),
        });
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    // 32 distinct characters: entropy is exactly log2(32) = 5.0
    const RANDOM32: &str = "kY9mQ2xW7zR4tN8vB5cJ3fH6gD1sL0pA";

    #[test]
    fn test_entropy_of_repeated_char_is_zero() {
        assert_eq!(shannon_entropy("aaaaaaaaaaaaaaaaaaaaaaaa"), 0.0);
        assert_eq!(shannon_entropy(""), 0.0);
    }

    #[test]
    fn test_entropy_of_random_string_exceeds_threshold() {
        assert!(shannon_entropy(RANDOM32) > DEFAULT_THRESHOLD);
    }

    #[test]
    fn test_entropy_two_symbols_is_one_bit() {
        let e = shannon_entropy("abababababababababab");
        assert!((e - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_flags_high_entropy_literal() {
        let content = format!("const token = \"{RANDOM32}\";\n");
        let findings = scan_entropy(&content, "src/config.ts", DEFAULT_THRESHOLD);
        assert_eq!(findings.len(), 1);
        let f = &findings[0];
        assert_eq!(f.rule_id, "ENTROPY-001");
        assert_eq!(f.severity, Severity::Medium);
        assert_eq!(f.line_number, 1);
        assert!(f.entropy.unwrap() > DEFAULT_THRESHOLD);
        // matched text and snippet are redacted, never the raw literal
        assert!(!f.matched_text.as_deref().unwrap().contains("Q2xW7zR4"));
        assert!(!f.code_snippet.contains("Q2xW7zR4"));
    }

    #[test]
    fn test_short_literals_not_candidates() {
        let findings = scan_entropy("x = \"kY9mQ2xW7zR4tN8v\"", "a.ts", DEFAULT_THRESHOLD);
        assert!(findings.is_empty());
    }

    #[test]
    fn test_benign_shapes_excluded() {
        for benign in [
            "https://cdn.example.net/assets/fonts/Inter-roman.var.woff2",
            "usr/share/lib/node/modules/internal/deep/path",
            "first.last+tag@example-mail.org",
            "7f9c2ba4-e88f-11e9-a3f0-0242ac130003",
            "data:image/png;base64,iVBORw0KGgoAAAANSUhEUg",
        ] {
            let content = format!("v = \"{benign}\"");
            assert!(
                scan_entropy(&content, "a.ts", 0.5).is_empty(),
                "{benign} was flagged"
            );
        }
    }
}
