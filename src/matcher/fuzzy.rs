// WHY: Fallback recovery of a single near-spelling when exact matching finds nothing
// SlidingWindowMatcher is the default; callers can plug in an indexed matcher instead

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{similarity::partial_ratio, MatchSpan};

/// Best approximate occurrence of a term, with its 0-100 score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuzzyMatch {
    pub span: MatchSpan,
    pub score: u8,
}

/// Strategy for recovering at most one approximate occurrence of a term
pub trait FuzzyMatcher: Send + Sync {
    /// Best occurrence scoring at least `threshold`; ties go to the earliest start
    fn best_match(&self, term: &str, text: &str, threshold: u8) -> Option<FuzzyMatch>;
}

/// Slides a term-wide window one char at a time and keeps the strictly best score
///
/// Windows are compared lowercased with [`partial_ratio`]. The running best
/// starts at 0, so a window must score above 0 as well as reach the threshold.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlidingWindowMatcher;

impl FuzzyMatcher for SlidingWindowMatcher {
    fn best_match(&self, term: &str, text: &str, threshold: u8) -> Option<FuzzyMatch> {
        let width = term.chars().count();
        if width == 0 {
            return None;
        }

        // Byte offset of every char start, plus the end of the text
        let boundaries: Vec<usize> = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();
        let char_count = boundaries.len() - 1;
        if char_count < width {
            return None;
        }

        let needle = term.to_lowercase();
        let mut best: Option<FuzzyMatch> = None;
        let mut best_score = 0u8;

        for first in 0..=char_count - width {
            let (start, end) = (boundaries[first], boundaries[first + width]);
            let score = partial_ratio(&needle, &text[start..end].to_lowercase());

            if score >= threshold && score > best_score {
                best_score = score;
                best = MatchSpan::new(start, end).map(|span| FuzzyMatch { span, score });
                // Nothing can beat a perfect score under a strict comparison
                if score == 100 {
                    break;
                }
            }
        }

        if let Some(found) = &best {
            debug!(
                "Fuzzy match for {:?} at {}..{} (score {})",
                term, found.span.start, found.span.end, found.score
            );
        }
        best
    }
}
