use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Scores how alike two words are, from 0.0 (nothing in common) to 1.0 (identical).
///
/// Implementations do not normalize case; callers pass words that are already
/// in the form they want compared.
pub trait Similarity {
    fn score(&self, a: &str, b: &str) -> f64;
}

/// Block-matching ratio: `2M / (len(a) + len(b))`, where `M` is the number of
/// characters covered by the longest common runs found recursively on either
/// side of each match.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockRatio;

/// Edit distance turned into a similarity: `1 - d / max(len(a), len(b))`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Levenshtein;

/// Greedy in-order embedding of each word into the other.
#[derive(Debug, Clone, Copy, Default)]
pub struct Subsequence;

impl Similarity for BlockRatio {
    fn score(&self, a: &str, b: &str) -> f64 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();

        let total = a.len() + b.len();
        if total == 0 {
            return 1.0;
        }

        2.0 * matched_chars(&a, &b) as f64 / total as f64
    }
}

impl Similarity for Levenshtein {
    fn score(&self, a: &str, b: &str) -> f64 {
        let longest = a.chars().count().max(b.chars().count());
        if longest == 0 {
            return 1.0;
        }

        1.0 - edit_distance(a, b) as f64 / longest as f64
    }
}

impl Similarity for Subsequence {
    fn score(&self, a: &str, b: &str) -> f64 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();

        let total = a.len() + b.len();
        if total == 0 {
            return 1.0;
        }

        (embedded_chars(&a, &b) + embedded_chars(&b, &a)) as f64 / total as f64
    }
}

/// The scorer used for ranking candidates, selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Ratio,
    Levenshtein,
    Subsequence,
}

impl Similarity for Metric {
    fn score(&self, a: &str, b: &str) -> f64 {
        match self {
            Metric::Ratio => BlockRatio.score(a, b),
            Metric::Levenshtein => Levenshtein.score(a, b),
            Metric::Subsequence => Subsequence.score(a, b),
        }
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ratio" => Ok(Metric::Ratio),
            "levenshtein" => Ok(Metric::Levenshtein),
            "subsequence" => Ok(Metric::Subsequence),
            _ => Err(format!("Unknown metric: {}", s)),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Ratio => write!(f, "ratio"),
            Metric::Levenshtein => write!(f, "levenshtein"),
            Metric::Subsequence => write!(f, "subsequence"),
        }
    }
}

/// Total length of the matching blocks between `a` and `b`.
fn matched_chars(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_match(a, b, alo, ahi, blo, bhi);
        if size == 0 {
            continue;
        }

        matched += size;

        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            pending.push((i + size, ahi, j + size, bhi));
        }
    }

    matched
}

/// Longest common run of `a[alo..ahi]` and `b[blo..bhi]` as `(i, j, size)`.
/// Ties go to the run that ends first in `a`, then first in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let mut best = (alo, blo, 0);
    if alo >= ahi || blo >= bhi {
        return best;
    }

    // run lengths ending at (i, j) live at index j - blo + 1
    let mut prev = vec![0usize; bhi - blo + 1];
    let mut curr = vec![0usize; bhi - blo + 1];

    for i in alo..ahi {
        for j in blo..bhi {
            let run = if a[i] == b[j] { prev[j - blo] + 1 } else { 0 };
            curr[j - blo + 1] = run;

            if run > best.2 {
                best = (i + 1 - run, j + 1 - run, run);
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    best
}

/// Calculate Levenshtein distance between two strings
fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, a_char) in a_chars.iter().enumerate() {
        curr[0] = i + 1;

        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = if a_char == b_char { 0 } else { 1 };

            curr[j + 1] = std::cmp::min(
                std::cmp::min(
                    prev[j + 1] + 1, // deletion
                    curr[j] + 1,     // insertion
                ),
                prev[j] + cost, // substitution
            );
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

/// Number of characters of `a` that can be found, in order, in `b`.
fn embedded_chars(a: &[char], b: &[char]) -> usize {
    let mut rest = b.iter();
    a.iter()
        .filter(|ch| rest.by_ref().any(|candidate| candidate == *ch))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    const METRICS: [Metric; 3] = [Metric::Ratio, Metric::Levenshtein, Metric::Subsequence];

    #[test]
    fn test_identical_words_score_one() {
        for metric in METRICS {
            for word in ["a", "cat", "misspelled", "naïve"] {
                assert_eq!(metric.score(word, word), 1.0, "{} on {}", metric, word);
            }
        }
    }

    #[test]
    fn test_scores_stay_in_unit_range() {
        let words = ["", "a", "cat", "cst", "sat", "abcd", "dcba", "xyz", "catalogue"];
        for metric in METRICS {
            for a in words {
                for b in words {
                    let score = metric.score(a, b);
                    assert!((0.0..=1.0).contains(&score), "{} {} {} = {}", metric, a, b, score);
                }
            }
        }
    }

    #[test]
    fn test_block_ratio_values() {
        assert_eq!(BlockRatio.score("", ""), 1.0);
        assert_eq!(BlockRatio.score("abc", "xyz"), 0.0);
        assert_eq!(BlockRatio.score("abc", ""), 0.0);
        // "c" + "t" matched out of 6 chars
        assert!((BlockRatio.score("cst", "cat") - 4.0 / 6.0).abs() < 1e-12);
        assert!((BlockRatio.score("cst", "the") - 2.0 / 6.0).abs() < 1e-12);
        // "abcd" then nothing to the sides of it
        assert!((BlockRatio.score("abcd", "xabcdy") - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_block_ratio_prefers_contiguous_runs() {
        // same multiset of characters, but only one shares a run
        let contiguous = BlockRatio.score("listen", "listne");
        let scrambled = BlockRatio.score("listen", "nestil");
        assert!(contiguous > scrambled);
    }

    #[test]
    fn test_block_ratio_is_symmetric_in_matched_count() {
        for (a, b) in [("kitten", "sitting"), ("flaw", "lawn"), ("abcab", "bcabc")] {
            let forward = BlockRatio.score(a, b);
            let backward = BlockRatio.score(b, a);
            assert!((forward - backward).abs() < 0.2, "{} {}", a, b);
        }
    }

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("hello", "hello"), 0);
        assert_eq!(edit_distance("hello", "hallo"), 1);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("", "abc"), 3);
        assert!((Levenshtein.score("kitten", "sitting") - (1.0 - 3.0 / 7.0)).abs() < 1e-12);
    }

    #[test]
    fn test_subsequence_embedding() {
        assert_eq!(embedded_chars(&['a', 'c'], &['a', 'b', 'c']), 2);
        assert_eq!(embedded_chars(&['c', 'a'], &['a', 'b', 'c']), 1);
        // "ac" embeds fully, "abc" only up to its "a"
        assert!((Subsequence.score("ac", "abc") - 3.0 / 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_metric_parsing() {
        assert_eq!("ratio".parse::<Metric>().unwrap(), Metric::Ratio);
        assert_eq!("Levenshtein".parse::<Metric>().unwrap(), Metric::Levenshtein);
        assert!("cosine".parse::<Metric>().is_err());
        assert_eq!(Metric::Subsequence.to_string(), "subsequence");
    }
}
