//! Verification report types.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::VerifyError;

/// One query whose hits differed from the expectation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MismatchInfo {
    /// Query string as sent to the index.
    pub query: String,
    /// Identifiers that should have been returned.
    pub expected_ids: Vec<String>,
    /// Identifiers on the returned page.
    pub actual_ids: Vec<String>,
    /// Total matches reported by the index.
    pub actual_total: u64,
}

/// Verification report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerificationReport {
    /// Number of queries checked.
    pub checks: u64,
    /// Number of queries with exactly the expected hits.
    pub passed: u64,
    /// Number of queries with wrong hits.
    pub failed: u64,
    /// Details of failed queries.
    pub mismatches: Vec<MismatchInfo>,
    /// Total verification time.
    pub total_duration: Duration,
    /// Time spent inside index searches.
    pub query_duration: Duration,
}

impl VerificationReport {
    /// Check if verification passed.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Turn a failed report into an error.
    pub fn into_result(self) -> Result<VerificationReport, VerifyError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(VerifyError::VerificationFailed(Box::new(self)))
        }
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.is_success() {
            format!(
                "Verification PASSED: {}/{} queries matched in {:?}",
                self.passed, self.checks, self.total_duration
            )
        } else {
            let mut summary = format!(
                "Verification FAILED: {} of {} queries mismatched",
                self.failed, self.checks
            );
            for mismatch in &self.mismatches {
                summary.push_str(&format!(
                    "\n  query {}: expected {} hit(s) {:?}, got {} hit(s) {:?}",
                    mismatch.query,
                    mismatch.expected_ids.len(),
                    mismatch.expected_ids,
                    mismatch.actual_total,
                    mismatch.actual_ids
                ));
            }
            summary
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed_report() -> VerificationReport {
        VerificationReport {
            checks: 2,
            passed: 1,
            failed: 1,
            mismatches: vec![MismatchInfo {
                query: "+city:Reno".to_string(),
                expected_ids: vec!["person50".to_string()],
                actual_ids: vec![],
                actual_total: 0,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_report_success() {
        let report = VerificationReport {
            checks: 2,
            passed: 2,
            ..Default::default()
        };
        assert!(report.is_success());
        assert!(report.into_result().is_ok());
    }

    #[test]
    fn test_report_failure() {
        let report = failed_report();
        assert!(!report.is_success());
        match report.clone().into_result() {
            Err(VerifyError::VerificationFailed(carried)) => assert_eq!(*carried, report),
            other => panic!("expected VerificationFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_report_summary() {
        let passed = VerificationReport {
            checks: 2,
            passed: 2,
            total_duration: Duration::from_millis(5),
            ..Default::default()
        };
        assert!(passed.summary().contains("PASSED"));
        assert!(passed.summary().contains("2/2"));

        let failed = failed_report().summary();
        assert!(failed.contains("FAILED"));
        assert!(failed.contains("+city:Reno"));
        assert!(failed.contains("person50"));
    }
}
