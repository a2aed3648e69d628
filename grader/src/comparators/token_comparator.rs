//! The default comparator: whitespace-tokenized, line-order-sensitive,
//! all-or-nothing.
//!
//! Two lines match iff their whitespace-delimited tokens are equal in
//! sequence, so `"4  5"` matches `"4 5"` but `"4 5"` never matches
//! `"4 50"`. Token content is case-sensitive. Lines are compared strictly
//! in order; full points are awarded only when every line pair matches.

use crate::traits::comparator::OutputComparator;
use crate::types::CompareResult;

pub struct TokenComparator;

fn tokens(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

impl OutputComparator for TokenComparator {
    fn compare(
        &self,
        points: i64,
        oracle_lines: &[String],
        answer_lines: &[String],
    ) -> CompareResult {
        // Different line counts: the submission is malformed and no
        // line-by-line comparison happens. Record the oracle lines the
        // submission never reached.
        if oracle_lines.len() != answer_lines.len() {
            let missed_lines = oracle_lines
                .iter()
                .skip(answer_lines.len())
                .cloned()
                .collect();
            return CompareResult {
                awarded: 0,
                possible: points,
                matched_lines: Vec::new(),
                missed_lines,
                malformed: true,
            };
        }

        let mut matched_lines = Vec::new();
        let mut missed_lines = Vec::new();
        for (oracle, answer) in oracle_lines.iter().zip(answer_lines) {
            if tokens(oracle) == tokens(answer) {
                matched_lines.push(oracle.clone());
            } else {
                missed_lines.push(oracle.clone());
            }
        }

        let awarded = if missed_lines.is_empty() { points } else { 0 };

        CompareResult {
            awarded,
            possible: points,
            matched_lines,
            missed_lines,
            malformed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_string_vec(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn exact_match_awards_full_points() {
        let oracle = to_string_vec(&["4 5", "9"]);
        let answer = to_string_vec(&["4 5", "9"]);
        let result = TokenComparator.compare(10, &oracle, &answer);
        assert_eq!(result.awarded, 10);
        assert!(result.missed_lines.is_empty());
        assert!(!result.malformed);
    }

    #[test]
    fn internal_whitespace_is_insignificant() {
        let oracle = to_string_vec(&["4 5", "9"]);
        let answer = to_string_vec(&["4  5", "\t9 "]);
        let result = TokenComparator.compare(10, &oracle, &answer);
        assert_eq!(result.awarded, 10);
        assert!(result.missed_lines.is_empty());
    }

    #[test]
    fn token_content_is_case_sensitive() {
        let oracle = to_string_vec(&["YES"]);
        let answer = to_string_vec(&["yes"]);
        let result = TokenComparator.compare(10, &oracle, &answer);
        assert_eq!(result.awarded, 0);
        assert_eq!(result.missed_lines, vec!["YES"]);
    }

    #[test]
    fn any_mismatch_zeroes_the_award() {
        let oracle = to_string_vec(&["4 5", "9"]);
        let answer = to_string_vec(&["4 5", "10"]);
        let result = TokenComparator.compare(10, &oracle, &answer);
        assert_eq!(result.awarded, 0);
        assert_eq!(result.matched_lines, vec!["4 5"]);
        assert_eq!(result.missed_lines, vec!["9"]);
        assert!(!result.malformed);
    }

    #[test]
    fn short_submission_is_malformed() {
        let oracle = to_string_vec(&["4 5", "9"]);
        let answer = to_string_vec(&["4 5"]);
        let result = TokenComparator.compare(10, &oracle, &answer);
        assert_eq!(result.awarded, 0);
        assert!(result.malformed);
        assert_eq!(result.missed_lines, vec!["9"]);
    }

    #[test]
    fn long_submission_is_malformed() {
        let oracle = to_string_vec(&["4 5"]);
        let answer = to_string_vec(&["4 5", "extra"]);
        let result = TokenComparator.compare(10, &oracle, &answer);
        assert_eq!(result.awarded, 0);
        assert!(result.malformed);
        assert!(result.missed_lines.is_empty());
    }

    #[test]
    fn token_order_within_a_line_matters() {
        let oracle = to_string_vec(&["5 4"]);
        let answer = to_string_vec(&["4 5"]);
        let result = TokenComparator.compare(10, &oracle, &answer);
        assert_eq!(result.awarded, 0);
    }

    #[test]
    fn empty_inputs_match() {
        let result = TokenComparator.compare(5, &[], &[]);
        assert_eq!(result.awarded, 5);
        assert!(result.matched_lines.is_empty());
        assert!(result.missed_lines.is_empty());
        assert!(!result.malformed);
    }
}
