//! Standardized exit codes
//!
//! `2` is the blocking signal for commit hooks and CI gates: it means at
//! least one CRITICAL or HIGH finding. `1` means findings worth reviewing
//! but nothing blocking.

use crate::rules::results::ScanResult;

/// Scan completed with no findings.
pub const SUCCESS: i32 = 0;

/// Scan completed with non-blocking findings.
pub const WARNINGS: i32 = 1;

/// Scan completed with CRITICAL or HIGH findings.
pub const BLOCKED: i32 = 2;

/// Exit code for a completed scan.
pub fn for_result(result: &ScanResult) -> i32 {
    if result.has_blocking() {
        BLOCKED
    } else if result.is_clean() {
        SUCCESS
    } else {
        WARNINGS
    }
}
