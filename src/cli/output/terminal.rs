//! Terminal output formatting with colors

use colored::Colorize;

use super::ReportRenderer;
use crate::error::SecGuardError;
use crate::rules::results::{Finding, ScanResult, Severity};

/// Colored human-readable report.
///
/// Findings below `min_severity` are hidden from the listing but stay in the
/// summary counts, with a note saying how many were hidden.
pub struct TerminalOutput {
    min_severity: Option<Severity>,
}

impl TerminalOutput {
    pub fn new(min_severity: Option<Severity>) -> Self {
        Self { min_severity }
    }

    fn severity_icon(severity: Severity) -> &'static str {
        match severity {
            Severity::Critical => "🔴",
            Severity::High => "🟠",
            Severity::Medium => "🟡",
            Severity::Low => "🟢",
            Severity::Info => "ℹ️",
        }
    }

    fn severity_label(severity: Severity) -> colored::ColoredString {
        match severity {
            Severity::Critical => severity.as_str().red().bold(),
            Severity::High => severity.as_str().red(),
            Severity::Medium => severity.as_str().yellow(),
            Severity::Low => severity.as_str().green(),
            Severity::Info => severity.as_str().blue(),
        }
    }

    fn format_finding(&self, finding: &Finding) -> String {
        let bundle_tag = if finding.is_in_bundle {
            format!(" {}", "[IN CLIENT BUNDLE!]".red().bold())
        } else {
            String::new()
        };
        let mut output = format!(
            "{} {} [{}] {}{}\n   {} {}\n",
            Self::severity_icon(finding.severity),
            Self::severity_label(finding.severity),
            finding.rule_id.cyan(),
            finding.name.bold(),
            bundle_tag,
            "└─".dimmed(),
            finding.location().dimmed(),
        );

        if !finding.description.is_empty() {
            output.push_str(&format!("   {}\n", finding.description));
        }
        if let Some(matched) = &finding.matched_text {
            output.push_str(&format!("   {} {}\n", "Match:".dimmed(), matched));
        }
        if let Some(entropy) = finding.entropy {
            output.push_str(&format!("   {} {entropy:.2}\n", "Entropy:".dimmed()));
        }
        if !finding.code_snippet.is_empty() {
            for line in finding.code_snippet.lines() {
                output.push_str(&format!("   {}\n", line.dimmed()));
            }
        }
        if !finding.remediation.is_empty() {
            output.push_str(&format!("   {} {}\n", "Fix:".green(), finding.remediation));
        }
        if finding.ai_specific {
            output.push_str(&format!(
                "   {}\n",
                "Commonly introduced by AI code generation.".magenta()
            ));
        }
        if let Some(provider) = &finding.provider {
            output.push_str(&format!("   {} {}\n", "Provider:".dimmed(), provider));
        }
        if let Some(case) = &finding.real_world_case {
            output.push_str(&format!("   {} {}\n", "Seen in the wild:".dimmed(), case));
        }
        output.push('\n');
        output
    }

    fn format_summary(&self, result: &ScanResult) -> String {
        let mut output = format!(
            "{}\n{}\n",
            "━".repeat(50).dimmed(),
            "  SCAN SUMMARY".bold()
        );

        output.push_str(&format!(
            "  Files scanned: {}\n  Total findings: {}\n",
            result.files_scanned, result.total_findings
        ));
        for severity in Severity::ALL {
            let count = result.findings_by_severity.get(severity);
            if count > 0 {
                output.push_str(&format!(
                    "  {} {}: {}\n",
                    Self::severity_icon(severity),
                    Self::severity_label(severity),
                    count
                ));
            }
        }

        if result.is_clean() {
            output.push_str(&format!("\n  {}\n", "No security issues found.".green().bold()));
        } else if result.has_blocking() {
            output.push_str(&format!(
                "\n  {}\n",
                "Blocking issues found. Fix CRITICAL/HIGH findings before shipping."
                    .red()
                    .bold()
            ));
        }

        output
    }
}

impl ReportRenderer for TerminalOutput {
    fn render(&self, result: &ScanResult) -> Result<String, SecGuardError> {
        let mut output = format!(
            "\n{} v{}\n\n",
            "secguard".cyan().bold(),
            env!("CARGO_PKG_VERSION")
        );

        let threshold = self.min_severity.unwrap_or(Severity::Info);
        let shown: Vec<&Finding> = result.findings_at_or_above(threshold).collect();
        let hidden = result.total_findings - shown.len();

        if result.findings.iter().any(|f| f.is_in_bundle) {
            output.push_str(&format!(
                "{}\n\n",
                "⚠ Findings in bundled build output: secrets there are already shipped to clients and must be rotated."
                    .yellow()
                    .bold()
            ));
        }

        for finding in shown {
            output.push_str(&self.format_finding(finding));
        }
        if hidden > 0 {
            output.push_str(&format!(
                "{}\n\n",
                format!("({hidden} findings below {threshold} hidden)").dimmed()
            ));
        }

        output.push_str(&self.format_summary(result));
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::aggregate;

    fn finding(id: &str, severity: Severity) -> Finding {
        Finding {
            rule_id: id.to_string(),
            name: format!("{id} name"),
            severity,
            description: String::new(),
            file_path: "src/a.js".to_string(),
            line_number: 1,
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
    fn test_min_severity_hides_but_keeps_counts() {
        colored::control::set_override(false);
        let result = aggregate::collect(
            vec![finding("A", Severity::Critical), finding("B", Severity::Low)],
            1,
        );
        let report = TerminalOutput::new(Some(Severity::High)).render(&result).unwrap();

        assert!(report.contains("A name"));
        assert!(!report.contains("B name"));
        assert!(report.contains("1 findings below HIGH hidden"));
        assert!(report.contains("Total findings: 2"));
    }

    #[test]
    fn test_clean_result_message() {
        colored::control::set_override(false);
        let result = aggregate::collect(Vec::new(), 9);
        let report = TerminalOutput::new(None).render(&result).unwrap();

        assert!(report.contains("No security issues found."));
        assert!(report.contains("Files scanned: 9"));
    }

    #[test]
    fn test_bundle_banner() {
        colored::control::set_override(false);
        let mut f = finding("A", Severity::Critical);
        f.is_in_bundle = true;
        let result = aggregate::collect(vec![f], 1);
        let report = TerminalOutput::new(None).render(&result).unwrap();

        assert!(report.contains("bundled build output"));
        assert!(report.contains("must be rotated"));
        assert!(report.contains("[IN CLIENT BUNDLE!]"));
    }
}
