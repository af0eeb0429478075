use super::iupac;
use crate::utils::{Error, Result};
use itertools::Itertools;
use regex::bytes::Regex;

/// A degenerate motif compiled into an alternation of literal bases,
/// e.g. `ar` becomes `(?:a)(?:a|g)`
#[derive(Debug, Clone)]
pub struct MotifMatcher {
    regex: Regex,
    len: usize,
}

impl MotifMatcher {
    pub fn new(pattern: &str) -> Result<Self> {
        if pattern.is_empty() {
            return Err(Error::InvalidMotif("motif is empty".to_string()));
        }

        let mut expr = String::new();
        let mut len = 0;
        for symbol in pattern.chars().flat_map(char::to_lowercase) {
            let bases = iupac::lookup(symbol)?;
            expr += &format!("(?:{})", bases.iter().join("|"));
            len += 1;
        }

        let regex = Regex::new(&expr).map_err(|e| Error::InvalidMotif(e.to_string()))?;
        Ok(Self { regex, len })
    }

    /// Number of bases covered by every match
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Start offsets of every match, overlapping ones included, in ascending order
    pub fn find_all(&self, sequence: &str) -> Vec<usize> {
        let haystack = sequence.to_ascii_lowercase();
        let haystack = haystack.as_bytes();

        let mut offsets = Vec::new();
        let mut pos = 0;
        while pos < haystack.len() {
            match self.regex.find_at(haystack, pos) {
                Some(hit) => {
                    offsets.push(hit.start());
                    pos = hit.start() + 1;
                }
                None => break,
            }
        }
        offsets
    }
}

pub fn find_occurrences(pattern: &str, sequence: &str) -> Result<Vec<usize>> {
    Ok(MotifMatcher::new(pattern)?.find_all(sequence))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_matches_are_reported() {
        assert_eq!(find_occurrences("aa", "aaaa"), Ok(vec![0, 1, 2]));
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(find_occurrences("AC", "acgtACGTacgt"), Ok(vec![0, 4, 8]));
        assert_eq!(find_occurrences("ac", "ACGTACGTACGT"), Ok(vec![0, 4, 8]));
    }

    #[test]
    fn degenerate_symbol_matches_any_represented_base() {
        // r = a or g
        assert_eq!(find_occurrences("ar", "AAAGAT"), Ok(vec![0, 1, 2]));
        assert_eq!(find_occurrences("ygcy", "tgcatgcucgcc"), Ok(vec![4, 8]));
    }

    #[test]
    fn plain_motif_agrees_with_sliding_window() {
        let sequence = "gattacaTTACAgattaca";
        let pattern = "ta";
        let expected = (0..=sequence.len() - pattern.len())
            .filter(|&p| sequence[p..p + pattern.len()].eq_ignore_ascii_case(pattern))
            .collect_vec();
        assert_eq!(find_occurrences(pattern, sequence), Ok(expected));
    }

    #[test]
    fn thymine_matches_uracil() {
        assert_eq!(find_occurrences("ut", "atuga"), Ok(vec![1]));
        assert_eq!(find_occurrences("t", "aua"), Ok(vec![1]));
    }

    #[test]
    fn motif_longer_than_sequence_yields_nothing() {
        assert_eq!(find_occurrences("acgtacgt", "acgt"), Ok(Vec::new()));
    }

    #[test]
    fn matches_never_run_past_the_end() {
        assert_eq!(find_occurrences("nn", "acg"), Ok(vec![0, 1]));
    }

    #[test]
    fn empty_sequence_yields_nothing() {
        assert_eq!(find_occurrences("ygcy", ""), Ok(Vec::new()));
    }

    #[test]
    fn empty_motif_err() {
        assert!(matches!(
            find_occurrences("", "acgt"),
            Err(Error::InvalidMotif(_))
        ));
    }

    #[test]
    fn non_iupac_motif_err() {
        assert_eq!(
            find_occurrences("acx", "acgt"),
            Err(Error::UnknownSymbol('x'))
        );
    }

    #[test]
    fn matcher_reports_motif_length() {
        let matcher = MotifMatcher::new("YGCY").unwrap();
        assert_eq!(matcher.len(), 4);
        assert!(!matcher.is_empty());
    }
}
