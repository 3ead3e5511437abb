//! Shared types for the scanners
//!
//! Every value here is transient and single-invocation: candidates are
//! extracted, classified exactly once, and the flagged ones become findings in
//! a terminal report that drives the exit code.

use serde::Serialize;

/// A substring extracted from source text that matched a secret-shaped pattern.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// The matched text itself.
    pub text: String,
    /// Originating line number, 1-based (file mode only; 0 in message mode).
    pub line_number: usize,
    /// File path or "commit message".
    pub source: String,
    /// Which pattern family produced the match.
    pub family: &'static str,
}

/// Terminal classification of a candidate. Each candidate reaches exactly one
/// of these; `HighConfidence` and `EntropyFlagged` are the only two that are
/// reported and counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Classification {
    /// The whole source was excluded (file mode only). Exclusion is decided
    /// per file before any line is read, so an excluded source never yields
    /// candidates; no line-level path constructs this state.
    Excluded,
    /// The line matched the allowlist (file mode only).
    Allowlisted,
    /// The match contains a high-confidence marker; entropy is skipped.
    HighConfidence,
    /// Entropy score above the threshold.
    EntropyFlagged,
    /// Entropy score at or below the threshold; silently dropped.
    EntropyClear,
}

impl Classification {
    /// Whether this classification is reported and counts toward failure.
    pub fn is_flagged(self) -> bool {
        matches!(self, Classification::HighConfidence | Classification::EntropyFlagged)
    }
}

/// Matched text is truncated to this many characters in reports.
pub const MATCH_TRUNCATE: usize = 50;
/// Line context is truncated to this many characters in reports.
pub const CONTEXT_TRUNCATE: usize = 100;

/// A reported finding: a flagged candidate with its context, truncated for
/// display. Presentation-free - rendering is the command layer's job.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub source: String,
    pub line_number: usize,
    pub family: &'static str,
    pub classification: Classification,
    /// First 50 chars of the matched text.
    pub matched: String,
    /// First 100 chars of the originating line.
    pub context: String,
}

impl Finding {
    pub fn new(candidate: &Candidate, classification: Classification, line: &str) -> Self {
        Self {
            source: candidate.source.clone(),
            line_number: candidate.line_number,
            family: candidate.family,
            classification,
            matched: truncate(&candidate.text, MATCH_TRUNCATE),
            context: truncate(line.trim_end(), CONTEXT_TRUNCATE),
        }
    }
}

/// Statistics for one scanner invocation.
#[derive(Debug, Default, Serialize)]
pub struct ScanStats {
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub candidates_seen: usize,
    pub scan_duration_ms: u64,
}

/// Aggregate result of one invocation. Produced once, never mutated after the
/// scan completes; the findings count drives the exit code.
#[derive(Debug, Default, Serialize)]
pub struct ScanReport {
    pub findings: Vec<Finding>,
    pub stats: ScanStats,
}

impl ScanReport {
    pub fn flagged_count(&self) -> usize {
        self.findings.len()
    }
}

/// Truncate a string to at most `max` characters on a char boundary.
pub fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_two_classifications_flag() {
        assert!(Classification::HighConfidence.is_flagged());
        assert!(Classification::EntropyFlagged.is_flagged());
        assert!(!Classification::EntropyClear.is_flagged());
        assert!(!Classification::Allowlisted.is_flagged());
        assert!(!Classification::Excluded.is_flagged());
    }

    #[test]
    fn test_finding_truncation() {
        let candidate = Candidate {
            text: "x".repeat(80),
            line_number: 7,
            source: "config.yml".to_string(),
            family: "Base64 Blob",
        };
        let long_line = "y".repeat(200);
        let finding = Finding::new(&candidate, Classification::EntropyFlagged, &long_line);
        assert_eq!(finding.matched.len(), MATCH_TRUNCATE);
        assert_eq!(finding.context.len(), CONTEXT_TRUNCATE);
        assert_eq!(finding.line_number, 7);
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("héllo", 2), "hé");
        assert_eq!(truncate("short", 50), "short");
    }
}
