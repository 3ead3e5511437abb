//! Distinct-character entropy estimation
//!
//! A cheap proxy for randomness: the score of a candidate string is the number
//! of distinct characters it contains. Real tokens draw from a wide alphabet and
//! score high; repeated filler and structural text score low. This is not
//! Shannon entropy on purpose - the decision thresholds used by the scanners
//! are calibrated against this exact metric.

use std::collections::HashSet;

/// Strings shorter than this are too short to judge and always score 0.
pub const MIN_SCORABLE_LENGTH: usize = 16;

/// Entropy threshold for the staged-file scanner (flag when score is above).
pub const FILE_ENTROPY_THRESHOLD: usize = 8;

/// Entropy threshold for the commit-message scanner.
///
/// Deliberately different from [`FILE_ENTROPY_THRESHOLD`]; the two scanners
/// were tuned independently and must keep their documented behavior.
pub const MESSAGE_ENTROPY_THRESHOLD: usize = 10;

/// Compute the entropy score of a candidate string.
///
/// Returns 0 for anything shorter than [`MIN_SCORABLE_LENGTH`], otherwise the
/// count of distinct characters. Bounded above by `min(length, alphabet size)`.
pub fn entropy_score(candidate: &str) -> usize {
    if candidate.len() < MIN_SCORABLE_LENGTH {
        return 0;
    }
    let distinct: HashSet<char> = candidate.chars().collect();
    distinct.len()
}

/// Check whether a candidate scores above the given threshold.
pub fn exceeds_threshold(candidate: &str, threshold: usize) -> bool {
    entropy_score(candidate) > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_strings_score_zero() {
        assert_eq!(entropy_score(""), 0);
        assert_eq!(entropy_score("abc123"), 0);
        // 15 chars, all distinct, still below the scorable length
        assert_eq!(entropy_score("abcdefghijklmno"), 0);
    }

    #[test]
    fn test_score_is_distinct_character_count() {
        assert_eq!(entropy_score("abcdefghijklmnop"), 16);
        assert_eq!(entropy_score("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"), 1);
        assert_eq!(entropy_score("abababababababab"), 2);
    }

    #[test]
    fn test_score_bounded_by_length_and_alphabet() {
        let s = "sk_test_4eC39HqLyjWDarjtT1zdp7dc";
        let score = entropy_score(s);
        assert!(score <= s.len());
        assert!(score > FILE_ENTROPY_THRESHOLD);
    }

    #[test]
    fn test_low_entropy_blob_not_flagged_for_files() {
        // 40 base64-shaped chars but only 5 distinct values
        let blob = "aabbccddeeaabbccddeeaabbccddeeaabbccddee";
        assert!(!exceeds_threshold(blob, FILE_ENTROPY_THRESHOLD));
    }

    #[test]
    fn test_divergent_thresholds() {
        // Scores 9: flagged in file mode, clear in message mode
        let s = "abcdefghiabcdefghi";
        assert_eq!(entropy_score(s), 9);
        assert!(exceeds_threshold(s, FILE_ENTROPY_THRESHOLD));
        assert!(!exceeds_threshold(s, MESSAGE_ENTROPY_THRESHOLD));
    }
}
