//! Finding aggregation
//!
//! Merges finding streams into one immutable [`ScanResult`] with the severity
//! histogram and the canonical display ordering used by every formatter:
//! severity descending, then file path ascending, then line ascending.

use chrono::Utc;

use crate::rules::results::{Finding, ScanResult, SeverityCounts};

/// Canonical ordering for stable output across formatters.
pub fn canonical_sort(findings: &mut [Finding]) {
    findings.sort_by(|a, b| {
        b.severity
            .cmp(&a.severity)
            .then_with(|| a.file_path.cmp(&b.file_path))
            .then_with(|| a.line_number.cmp(&b.line_number))
    });
}

/// Produce the terminal scan snapshot from merged finding streams.
pub fn collect(mut findings: Vec<Finding>, files_scanned: usize) -> ScanResult {
    canonical_sort(&mut findings);

    let mut counts = SeverityCounts::default();
    for finding in &findings {
        counts.increment(finding.severity);
    }

    ScanResult {
        scan_time: Utc::now().to_rfc3339(),
        files_scanned,
        total_findings: findings.len(),
        findings_by_severity: counts,
        findings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Severity;

    fn finding(id: &str, severity: Severity, path: &str, line: usize) -> Finding {
        Finding {
            rule_id: id.to_string(),
            name: id.to_string(),
            severity,
            description: String::new(),
            file_path: path.to_string(),
            line_number: line,
            column: 1,
            code_snippet: String::new(),
            cwe: None,
            remediation: String::new(),
            category: "test".to_string(),
            ai_specific: false,
            real_world_case: None,
            provider: None,
            matched_text: None,
            is_in_bundle: false,
            entropy: None,
        }
    }

    #[test]
    fn test_canonical_ordering() {
        let findings = vec![
            finding("A", Severity::Low, "b.js", 5),
            finding("B", Severity::Critical, "z.js", 9),
            finding("C", Severity::Critical, "a.js", 3),
            finding("D", Severity::Critical, "a.js", 1),
            finding("E", Severity::High, "a.js", 2),
        ];

        let result = collect(findings, 3);
        let order: Vec<&str> = result.findings.iter().map(|f| f.rule_id.as_str()).collect();
        assert_eq!(order, vec!["D", "C", "B", "E", "A"]);
    }

    #[test]
    fn test_histogram_buckets() {
        let findings = vec![
            finding("A", Severity::Critical, "a.js", 1),
            finding("B", Severity::Critical, "a.js", 2),
            finding("C", Severity::Medium, "a.js", 3),
        ];

        let result = collect(findings, 1);
        assert_eq!(result.total_findings, 3);
        assert_eq!(result.findings_by_severity.critical, 2);
        assert_eq!(result.findings_by_severity.medium, 1);
        assert_eq!(result.findings_by_severity.high, 0);
        assert!(result.has_blocking());
    }

    #[test]
    fn test_empty_result_is_clean() {
        let result = collect(Vec::new(), 7);
        assert!(result.is_clean());
        assert!(!result.has_blocking());
        assert_eq!(result.files_scanned, 7);
    }
}
