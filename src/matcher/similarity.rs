// WHY: Partial-similarity scoring for fuzzy recovery of near-spellings
// Matching blocks come from the longest-common-block recursion, so scores are
// stable across platforms and independent of hashing order

use std::collections::HashMap;

/// Sequences at least this long drop "popular" elements from the block index
const AUTOJUNK_MIN_LEN: usize = 200;

/// Block score above which a partial alignment counts as a perfect hit
const PERFECT_BLOCK_RATIO: f64 = 0.995;

/// Contiguous run where `a[a_start..a_start + size] == b[b_start..b_start + size]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Block {
    a_start: usize,
    b_start: usize,
    size: usize,
}

/// Longest-common-block matcher over two char sequences
struct SequenceMatcher<'a> {
    a: &'a [char],
    b: &'a [char],
    /// Positions of each element of `b`, ascending
    b2j: HashMap<char, Vec<usize>>,
}

impl<'a> SequenceMatcher<'a> {
    fn new(a: &'a [char], b: &'a [char]) -> Self {
        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &ch) in b.iter().enumerate() {
            b2j.entry(ch).or_default().push(j);
        }

        if b.len() >= AUTOJUNK_MIN_LEN {
            let max_occurrences = b.len() / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= max_occurrences);
        }

        Self { a, b, b2j }
    }

    /// Longest matching block in `a[alo..ahi]` x `b[blo..bhi]`
    ///
    /// Ties resolve to the earliest start in `a`, then the earliest in `b`.
    fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> Block {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);

        // j2len[j] = length of the longest match ending at a[i - 1] and b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut next_j2len = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next_j2len.insert(j, k);
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            j2len = next_j2len;
        }

        // Popular elements were left out of the index; grow the block over them
        while best_i > alo && best_j > blo && self.a[best_i - 1] == self.b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && self.a[best_i + best_size] == self.b[best_j + best_size]
        {
            best_size += 1;
        }

        Block {
            a_start: best_i,
            b_start: best_j,
            size: best_size,
        }
    }

    /// Non-adjacent matching blocks in ascending order, terminated by a
    /// zero-size sentinel at `(len(a), len(b))`
    fn matching_blocks(&self) -> Vec<Block> {
        let mut pending = vec![(0, self.a.len(), 0, self.b.len())];
        let mut blocks = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = pending.pop() {
            let block = self.find_longest_match(alo, ahi, blo, bhi);
            if block.size == 0 {
                continue;
            }
            blocks.push(block);
            if alo < block.a_start && blo < block.b_start {
                pending.push((alo, block.a_start, blo, block.b_start));
            }
            if block.a_start + block.size < ahi && block.b_start + block.size < bhi {
                pending.push((block.a_start + block.size, ahi, block.b_start + block.size, bhi));
            }
        }
        blocks.sort_unstable();

        let mut merged: Vec<Block> = Vec::with_capacity(blocks.len() + 1);
        for block in blocks {
            if let Some(last) = merged.last_mut() {
                if last.a_start + last.size == block.a_start
                    && last.b_start + last.size == block.b_start
                {
                    last.size += block.size;
                    continue;
                }
            }
            merged.push(block);
        }
        merged.push(Block {
            a_start: self.a.len(),
            b_start: self.b.len(),
            size: 0,
        });
        merged
    }

    fn ratio(&self) -> f64 {
        let total = self.a.len() + self.b.len();
        if total == 0 {
            return 1.0;
        }
        let matches: usize = self.matching_blocks().iter().map(|block| block.size).sum();
        2.0 * matches as f64 / total as f64
    }
}

/// Similarity of two strings in `[0, 1]`: `2 * matched / (len(a) + len(b))`
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    SequenceMatcher::new(&a, &b).ratio()
}

/// Best-alignment similarity of the shorter string inside the longer one, 0-100
///
/// Every matching block anchors a slice of the longer string as wide as the
/// shorter one; the best-scoring slice wins. Comparison is case-sensitive,
/// so callers lowercase both sides first.
pub fn partial_ratio(s1: &str, s2: &str) -> u8 {
    if s1 == s2 {
        return 100;
    }

    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let (shorter, longer) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

    let mut best = 0.0_f64;
    for block in SequenceMatcher::new(shorter, longer).matching_blocks() {
        let long_start = block.b_start.saturating_sub(block.a_start);
        let long_end = (long_start + shorter.len()).min(longer.len());
        let window = &longer[long_start..long_end];

        let score = SequenceMatcher::new(shorter, window).ratio();
        if score > PERFECT_BLOCK_RATIO {
            return 100;
        }
        best = best.max(score);
    }

    (100.0 * best).round_ties_even() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_ratio_known_values() {
        assert!((ratio("kitten", "sitting") - 8.0 / 13.0).abs() < 1e-12);
        assert!((ratio("abcd", "bcde") - 0.75).abs() < 1e-12);
        assert_eq!(ratio("", ""), 1.0);
        assert_eq!(ratio("abc", ""), 0.0);
    }

    #[test]
    fn test_matching_blocks_sentinel_and_merge() {
        let a = chars("abxcd");
        let b = chars("abcd");
        let blocks = SequenceMatcher::new(&a, &b).matching_blocks();
        assert_eq!(
            blocks,
            vec![
                Block { a_start: 0, b_start: 0, size: 2 },
                Block { a_start: 3, b_start: 2, size: 2 },
                Block { a_start: 5, b_start: 4, size: 0 },
            ]
        );
    }

    #[test]
    fn test_longest_match_prefers_earliest() {
        let a = chars("ab");
        let b = chars("xabab");
        let block = SequenceMatcher::new(&a, &b).find_longest_match(0, 2, 0, 5);
        assert_eq!(block, Block { a_start: 0, b_start: 1, size: 2 });
    }

    #[test]
    fn test_partial_ratio_identity_and_empty() {
        assert_eq!(partial_ratio("x", "x"), 100);
        assert_eq!(partial_ratio("", ""), 100);
        assert_eq!(partial_ratio("", "x"), 0);
        assert_eq!(partial_ratio("x", ""), 0);
    }

    #[test]
    fn test_partial_ratio_substring_is_perfect() {
        assert_eq!(partial_ratio("bathroom", "bathrooms"), 100);
        assert_eq!(partial_ratio("toilet", "the toilettes"), 100);
    }

    #[test]
    fn test_partial_ratio_near_spellings() {
        assert_eq!(partial_ratio("parking", "parkng "), 86);
        assert_eq!(partial_ratio("parking", "parkinn"), 86);
        assert_eq!(partial_ratio("playground", "play groun"), 90);
        assert_eq!(partial_ratio("playground", "playgrund "), 90);
        assert_eq!(partial_ratio("bicycle", "bicycel"), 86);
        assert_eq!(partial_ratio("kitten", "sitting"), 67);
        assert_eq!(partial_ratio("abc", "abd"), 67);
    }

    #[test]
    fn test_partial_ratio_is_symmetric_in_length_order() {
        assert_eq!(partial_ratio("bathrooms", "bathroom"), partial_ratio("bathroom", "bathrooms"));
    }

    #[test]
    fn test_partial_ratio_case_sensitive() {
        assert!(partial_ratio("parking", "PARKING") < 85);
    }

    #[test]
    fn test_autojunk_long_sequence() {
        // 'a' occurs far more than len/100 + 1 times and is dropped from the index,
        // but block extension still recovers the full match
        let long = "a".repeat(250);
        let short = "a".repeat(10);
        assert_eq!(partial_ratio(&short, &long), 100);
    }
}
