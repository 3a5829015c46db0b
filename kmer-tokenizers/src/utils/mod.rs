//!
//! This module contains utility functions for tokenizers. Basic things
//! like k-mer window splitting and special token handling are done here.
//!
use crate::vocab::ALPHABET;

pub mod special_tokens;

///
/// Split a sequence into candidate k-mer windows and drop every window that
/// contains a character outside the alphabet. Dropping is a filtering step,
/// not a substitution step: an invalid window shrinks the output, it is never
/// mapped to the unknown token.
///
/// With `overlapping` set, windows start at every offset (stride 1); otherwise
/// they start at offsets 0, k, 2k, ... (stride k). A sequence shorter than
/// `kmerlen` yields no windows at all.
///
/// The returned iterator is lazy and can be rebuilt from the same inputs at
/// any time. `kmerlen` must be at least 1.
///
/// # Arguments:
/// - `seq`: the raw sequence to split
/// - `kmerlen`: the window length
/// - `overlapping`: sliding-window vs block splitting
///
pub fn split_kmers(seq: &str, kmerlen: usize, overlapping: bool) -> impl Iterator<Item = &str> {
    let bytes = seq.as_bytes();
    let stride = if overlapping { 1 } else { kmerlen };
    let n_starts = (bytes.len() + 1).saturating_sub(kmerlen);

    (0..n_starts).step_by(stride).filter_map(move |start| {
        let window = &bytes[start..start + kmerlen];
        if window.iter().all(|base| ALPHABET.contains(base)) {
            // every byte is ASCII, so the slice sits on char boundaries
            Some(&seq[start..start + kmerlen])
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_split_overlapping() {
        let kmers: Vec<&str> = split_kmers("ACTGA", 2, true).collect();
        assert_eq!(kmers, vec!["AC", "CT", "TG", "GA"]);
    }

    #[rstest]
    fn test_split_non_overlapping() {
        let kmers: Vec<&str> = split_kmers("ACTGAC", 2, false).collect();
        assert_eq!(kmers, vec!["AC", "TG", "AC"]);
    }

    #[rstest]
    #[case("ACTGACTG", 3, 6)]
    #[case("ACTG", 4, 1)]
    #[case("ACT", 4, 0)]
    #[case("", 2, 0)]
    fn test_overlapping_window_count(
        #[case] seq: &str,
        #[case] kmerlen: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(split_kmers(seq, kmerlen, true).count(), expected);
    }

    #[rstest]
    #[case("ACTGA", 3, 1)]
    #[case("ACTGAC", 3, 2)]
    #[case("ACTGACT", 3, 2)]
    #[case("AC", 3, 0)]
    fn test_block_window_count(#[case] seq: &str, #[case] kmerlen: usize, #[case] expected: usize) {
        assert_eq!(split_kmers(seq, kmerlen, false).count(), expected);
    }

    #[rstest]
    fn test_windows_with_foreign_characters_are_dropped() {
        let kmers: Vec<&str> = split_kmers("ACTGN", 2, true).collect();
        assert_eq!(kmers, vec!["AC", "CT", "TG"]);

        // lowercase is outside the alphabet too
        let kmers: Vec<&str> = split_kmers("ACtG", 2, true).collect();
        assert_eq!(kmers, vec!["AC"]);
    }

    #[rstest]
    fn test_non_ascii_input_does_not_panic() {
        let kmers: Vec<&str> = split_kmers("AC¢TG", 2, true).collect();
        assert_eq!(kmers, vec!["AC", "TG"]);
    }

    #[rstest]
    fn test_iterator_is_restartable() {
        let first: Vec<&str> = split_kmers("ACTGACTG", 4, true).collect();
        let second: Vec<&str> = split_kmers("ACTGACTG", 4, true).collect();
        assert_eq!(first, second);
    }
}
