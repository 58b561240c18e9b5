//! Context-driven severity escalation
//!
//! Classifies a file path into deployment contexts and escalates HIGH
//! findings to CRITICAL when the file is client-reachable: bundled build
//! output, or client-exposed UI source. The policy is monotone (never
//! downgrades) and idempotent.

use crate::rules::Severity;

/// Path markers for bundled/distributed build output.
const BUNDLE_MARKERS: [&str; 12] = [
    "dist/",
    "build/",
    "public/",
    "out/",
    ".next/",
    "bundle.js",
    "main.js",
    "app.js",
    "vendor.js",
    ".min.js",
    ".bundle.js",
    ".chunk.js",
];

/// Markers for client-exposed source: UI-layer extensions and directories.
const CLIENT_MARKERS: [&str; 11] = [
    ".jsx",
    ".tsx",
    ".vue",
    ".svelte",
    "components/",
    "pages/",
    "views/",
    "screens/",
    "public/",
    "static/",
    "assets/",
];

/// Deployment contexts a file path falls into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileContext {
    /// Path contains a build/distribution marker.
    pub in_bundle: bool,
    /// Path matches a UI-layer extension or directory.
    pub client_exposed: bool,
}

impl FileContext {
    /// Whether either context applies.
    pub fn is_exposed(self) -> bool {
        self.in_bundle || self.client_exposed
    }
}

/// Classify a file path into zero or more deployment contexts.
pub fn classify(file_path: &str) -> FileContext {
    let path_lower = file_path.to_lowercase();
    FileContext {
        in_bundle: BUNDLE_MARKERS.iter().any(|m| path_lower.contains(m)),
        client_exposed: CLIENT_MARKERS.iter().any(|m| path_lower.contains(m)),
    }
}

/// Escalate HIGH to CRITICAL for exposed files; all other severities pass
/// through unchanged.
pub fn escalate(severity: Severity, context: FileContext) -> Severity {
    if severity == Severity::High && context.is_exposed() {
        Severity::Critical
    } else {
        severity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_bundle_paths() {
        assert!(classify("dist/main.js").in_bundle);
        assert!(classify("frontend/build/app.abc123.chunk.js").in_bundle);
        assert!(classify(".next/server/page.js").in_bundle);
        assert!(!classify("src/server/db.ts").in_bundle);
    }

    #[test]
    fn test_classify_client_paths() {
        assert!(classify("src/components/Login.tsx").client_exposed);
        assert!(classify("app/pages/index.jsx").client_exposed);
        assert!(classify("src/App.vue").client_exposed);
        assert!(!classify("src/server/auth.ts").client_exposed);
    }

    #[test]
    fn test_escalation_high_to_critical_only() {
        let exposed = classify("src/components/Login.tsx");
        assert_eq!(escalate(Severity::High, exposed), Severity::Critical);
        // Other severities pass through even in exposed files
        assert_eq!(escalate(Severity::Medium, exposed), Severity::Medium);
        assert_eq!(escalate(Severity::Low, exposed), Severity::Low);
        assert_eq!(escalate(Severity::Critical, exposed), Severity::Critical);
    }

    #[test]
    fn test_escalation_server_side_unchanged() {
        let server = classify("src/server/auth.ts");
        assert_eq!(escalate(Severity::High, server), Severity::High);
    }

    #[test]
    fn test_escalation_idempotent_and_monotone() {
        let exposed = classify("dist/bundle.js");
        for severity in Severity::ALL {
            let once = escalate(severity, exposed);
            let twice = escalate(once, exposed);
            assert_eq!(once, twice, "not idempotent for {severity}");
            assert!(once >= severity, "downgraded {severity}");
        }
    }
}
