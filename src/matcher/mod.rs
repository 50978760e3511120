// WHY: Term matching front-end shared by the exact and fuzzy strategies
// Both produce byte spans so alignment never needs to know which one fired

use serde::{Deserialize, Serialize};

pub mod exact;
pub mod fuzzy;
pub mod similarity;

pub use exact::ExactMatcher;
pub use fuzzy::{FuzzyMatch, FuzzyMatcher, SlidingWindowMatcher};
pub use similarity::{partial_ratio, ratio};

/// Half-open byte interval `[start, end)` into the source text
///
/// Both offsets lie on `char` boundaries, so a span can slice the text directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

impl MatchSpan {
    /// Returns `None` unless `start < end`
    pub fn new(start: usize, end: usize) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Matched text, or `None` if the span does not fit `text`
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.start..self.end)
    }
}

/// How a span was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchKind {
    Exact,
    Fuzzy { score: u8 },
}
