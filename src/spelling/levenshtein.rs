//! Reference Levenshtein distance over byte strings.
//!
//! These functions compute the distance between two whole strings without
//! any trie. They serve as the baseline the trie lookup is checked and
//! benchmarked against.

use std::cmp::min;

use crate::trie::config::SearchBound;
use crate::trie::fuzzy::FuzzyMatch;

/// Calculate the Levenshtein distance between two byte strings.
/// This is the minimum number of single-symbol edits (insertions, deletions, or substitutions)
/// required to change one into the other.
#[allow(clippy::needless_range_loop)]
pub fn levenshtein_distance<A: AsRef<[u8]>, B: AsRef<[u8]>>(s1: A, s2: B) -> usize {
    let s1 = s1.as_ref();
    let s2 = s2.as_ref();
    let len1 = s1.len();
    let len2 = s2.len();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    // Create a matrix to store distances
    let mut matrix = vec![vec![0; len2 + 1]; len1 + 1];

    // Initialize first row and column
    for i in 0..=len1 {
        matrix[i][0] = i;
    }
    for j in 0..=len2 {
        matrix[0][j] = j;
    }

    for i in 1..=len1 {
        for j in 1..=len2 {
            let cost = usize::from(s1[i - 1] != s2[j - 1]);

            matrix[i][j] = min(
                min(
                    matrix[i - 1][j] + 1, // deletion
                    matrix[i][j - 1] + 1, // insertion
                ),
                matrix[i - 1][j - 1] + cost, // substitution
            );
        }
    }

    matrix[len1][len2]
}

/// Calculate Levenshtein distance with a maximum threshold for early termination.
/// Returns None if the distance exceeds the threshold.
#[allow(clippy::needless_range_loop)]
pub fn levenshtein_distance_threshold<A: AsRef<[u8]>, B: AsRef<[u8]>>(
    s1: A,
    s2: B,
    threshold: usize,
) -> Option<usize> {
    let s1 = s1.as_ref();
    let s2 = s2.as_ref();
    let len1 = s1.len();
    let len2 = s2.len();

    if len1.abs_diff(len2) > threshold {
        return None;
    }

    // Use only two rows
    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for i in 1..=len1 {
        curr_row[0] = i;
        let mut min_in_row = i;

        for j in 1..=len2 {
            let cost = usize::from(s1[i - 1] != s2[j - 1]);

            curr_row[j] = min(
                min(
                    prev_row[j] + 1,     // deletion
                    curr_row[j - 1] + 1, // insertion
                ),
                prev_row[j - 1] + cost, // substitution
            );

            min_in_row = min(min_in_row, curr_row[j]);
        }

        if min_in_row > threshold {
            return None;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[len2];
    (distance <= threshold).then_some(distance)
}

/// Find the closest word by computing the distance to every candidate.
///
/// Candidates are sorted and deduplicated first, then scanned in ascending
/// byte order with the same strict-improvement rule and initial bound as
/// [`Trie::nearest_with`](crate::trie::Trie::nearest_with), so both return the
/// same word for the same dictionary. Each distance is computed with a
/// threshold one below the best so far, which drops a candidate as soon as
/// it can no longer win.
pub fn nearest_by_scan<W, Q>(words: &[W], query: Q, bound: SearchBound) -> Option<FuzzyMatch>
where
    W: AsRef<[u8]>,
    Q: AsRef<[u8]>,
{
    let query = query.as_ref();
    let mut candidates: Vec<&[u8]> = words.iter().map(|w| w.as_ref()).collect();
    candidates.sort_unstable();
    candidates.dedup();

    let mut best_distance = bound.seed(query.len());
    let mut best_word = None;
    for candidate in candidates {
        let Some(threshold) = best_distance.checked_sub(1) else {
            break;
        };
        if let Some(distance) = levenshtein_distance_threshold(query, candidate, threshold) {
            best_distance = distance;
            best_word = Some(candidate);
        }
    }

    best_word.map(|word| FuzzyMatch {
        word: word.to_vec(),
        distance: best_distance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("", "a"), 1);
        assert_eq!(levenshtein_distance("a", ""), 1);
        assert_eq!(levenshtein_distance("a", "a"), 0);
        assert_eq!(levenshtein_distance("ab", "ac"), 1);
        assert_eq!(levenshtein_distance("abc", "def"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("search", "serach"), 2); // transposition
    }

    #[test]
    fn test_levenshtein_distance_threshold() {
        assert_eq!(
            levenshtein_distance_threshold("kitten", "sitting", 3),
            Some(3)
        );
        assert_eq!(levenshtein_distance_threshold("kitten", "sitting", 2), None);
        assert_eq!(
            levenshtein_distance_threshold("search", "search", 0),
            Some(0)
        );
        assert_eq!(levenshtein_distance_threshold("a", "abc", 1), None);
        assert_eq!(levenshtein_distance_threshold("a", "ab", 1), Some(1));
        assert_eq!(levenshtein_distance_threshold("", "ab", 2), Some(2));
    }

    #[test]
    fn test_distance_is_symmetric() {
        let pairs = [("flaw", "lawn"), ("gumbo", "gambol"), ("", "abc"), ("book", "back")];
        for (a, b) in pairs {
            assert_eq!(levenshtein_distance(a, b), levenshtein_distance(b, a));
        }
    }

    #[test]
    fn test_nearest_by_scan() {
        let words = ["dog", "cot", "cats", "cat", "cat"];
        let found = nearest_by_scan(&words, "cab", SearchBound::QueryLength).unwrap();
        assert_eq!(found.word, b"cat");
        assert_eq!(found.distance, 1);

        assert!(nearest_by_scan(&words, "", SearchBound::QueryLength).is_none());
        let empty: [&str; 0] = [];
        assert!(nearest_by_scan(&empty, "cab", SearchBound::Unbounded).is_none());
    }

    #[test]
    fn test_nearest_by_scan_bounds() {
        let words = ["hello", "help", "yellow"];

        let found = nearest_by_scan(&words, "helo", SearchBound::MaxDistance(1)).unwrap();
        assert_eq!((found.word.as_slice(), found.distance), (&b"hello"[..], 1));
        assert!(nearest_by_scan(&words, "hxxxo", SearchBound::MaxDistance(1)).is_none());
        assert!(nearest_by_scan(&words, "helps", SearchBound::MaxDistance(0)).is_none());

        // An exact match stops the scan; nothing can beat distance zero.
        let found = nearest_by_scan(&words, "help", SearchBound::MaxDistance(0)).unwrap();
        assert_eq!(found.word, b"help");

        // Every word is ten edits away; the first in byte order is kept.
        let found = nearest_by_scan(&words, "zzzzzzzzzz", SearchBound::Unbounded).unwrap();
        assert_eq!(found.word, b"hello");
        assert_eq!(found.distance, 10);
    }

    #[test]
    fn test_nearest_by_scan_keeps_bytes() {
        let latin1: &[u8] = &[b'c', 0xE9, b't'];
        let found = nearest_by_scan(&[latin1], b"cet", SearchBound::QueryLength).unwrap();
        assert_eq!(found.word, latin1);
    }
}
