//! Commit-message scanner
//!
//! A parallel but distinct pattern table from the staged-file scanner:
//! text-oriented rather than token-oriented, with no allowlist. Private IP
//! addresses and password/credential pairs block outright; long base64 runs
//! are entropy-gated (stopping at the first hit); email addresses only warn
//! and never block the commit.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use super::entropy::{exceeds_threshold, MESSAGE_ENTROPY_THRESHOLD};
use super::types::truncate;

lazy_static! {
    static ref PRIVATE_IP: Regex = Regex::new(
        r"\b(?:10\.\d{1,3}\.\d{1,3}\.\d{1,3}|172\.(?:1[6-9]|2\d|3[01])\.\d{1,3}\.\d{1,3}|192\.168\.\d{1,3}\.\d{1,3})\b"
    )
    .expect("invalid message pattern");
    static ref PASSWORD_PAIR: Regex =
        Regex::new(r"(?i)\b(?:password|passwd|pwd|secret|credential|token|key)\s*[:=]\s*\S{8,}")
            .expect("invalid message pattern");
    static ref CREDENTIAL_PAIR: Regex =
        Regex::new(r"(?i)\b(?:api[-_]?key|access[-_]?token|secret[-_]?key|auth[-_]?token)\s*[:=]\s*\S{16,}")
            .expect("invalid message pattern");
    static ref BASE64_RUN: Regex =
        Regex::new(r"\b[A-Za-z0-9+/=]{32,}\b").expect("invalid message pattern");
    static ref EMAIL: Regex =
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
            .expect("invalid message pattern");
}

/// One detected problem in a commit message.
#[derive(Debug, Clone, Serialize)]
pub struct MessageIssue {
    pub category: &'static str,
    pub detail: String,
}

/// Outcome of scanning one commit message. Blocking issues drive the exit
/// code; warnings are printed but never fail the check.
#[derive(Debug, Default, Serialize)]
pub struct MessageReport {
    pub issues: Vec<MessageIssue>,
    pub warnings: Vec<MessageIssue>,
}

impl MessageReport {
    pub fn is_blocking(&self) -> bool {
        !self.issues.is_empty()
    }
}

/// Scan a commit message blob. Deterministic and stateless; safe to re-run.
pub fn scan_message(message: &str) -> MessageReport {
    let mut report = MessageReport::default();

    for m in PRIVATE_IP.find_iter(message) {
        report.issues.push(MessageIssue {
            category: "private IP address",
            detail: m.as_str().to_string(),
        });
    }

    for m in PASSWORD_PAIR.find_iter(message) {
        report.issues.push(MessageIssue {
            category: "password pattern",
            detail: truncate(m.as_str(), 50),
        });
    }

    for m in CREDENTIAL_PAIR.find_iter(message) {
        report.issues.push(MessageIssue {
            category: "credential pattern",
            detail: truncate(m.as_str(), 50),
        });
    }

    // Entropy scanning stops at the first hit
    for m in BASE64_RUN.find_iter(message) {
        if exceeds_threshold(m.as_str(), MESSAGE_ENTROPY_THRESHOLD) {
            report.issues.push(MessageIssue {
                category: "high-entropy token",
                detail: truncate(m.as_str(), 50),
            });
            break;
        }
    }

    for m in EMAIL.find_iter(message) {
        report.warnings.push(MessageIssue {
            category: "email address",
            detail: m.as_str().to_string(),
        });
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_private_ip_blocks() {
        let report = scan_message("point the deploy at 192.168.1.50 for now");
        assert!(report.is_blocking());
        assert_eq!(report.issues[0].category, "private IP address");
        assert_eq!(report.issues[0].detail, "192.168.1.50");
    }

    #[test]
    fn test_private_ip_ranges() {
        assert!(scan_message("db lives on 10.0.4.7").is_blocking());
        assert!(scan_message("proxy 172.16.0.1 updated").is_blocking());
        assert!(scan_message("proxy 172.31.255.1 updated").is_blocking());
        // 172.32.x.x is public space
        assert!(!scan_message("proxy 172.32.0.1 updated").is_blocking());
        assert!(!scan_message("see RFC 1918 for details").is_blocking());
    }

    #[test]
    fn test_password_pair_blocks() {
        let report = scan_message("set password: hunter2hunter2");
        assert!(report.is_blocking());
        assert_eq!(report.issues[0].category, "password pattern");
        // Short values do not trip the pattern
        assert!(!scan_message("set password: abc").is_blocking());
    }

    #[test]
    fn test_credential_pair_blocks() {
        let report = scan_message("api_key=abcdef0123456789abcdef");
        assert!(report.issues.iter().any(|i| i.category == "credential pattern"));
    }

    #[test]
    fn test_high_entropy_stops_at_first_hit() {
        let msg = "blobs: QmFzZTY0RW5jb2RlZFNlY3JldFZhbHVlMTIz and TmV4dFJhbmRvbVNlY3JldEJsb2JWYWx1ZTQ1Ng==";
        let report = scan_message(msg);
        let entropy_hits: Vec<_> = report
            .issues
            .iter()
            .filter(|i| i.category == "high-entropy token")
            .collect();
        assert_eq!(entropy_hits.len(), 1);
    }

    #[test]
    fn test_low_entropy_run_does_not_block() {
        assert!(!scan_message("padding aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa here").is_blocking());
    }

    #[test]
    fn test_email_warns_but_never_blocks() {
        let report = scan_message("reviewed by dev@example.org");
        assert!(!report.is_blocking());
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].category, "email address");
    }

    #[test]
    fn test_clean_message() {
        let report = scan_message("fix retry backoff in the sync loop");
        assert!(!report.is_blocking());
        assert!(report.warnings.is_empty());
    }
}
