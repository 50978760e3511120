pub mod alignment;
pub mod config;
pub mod error;
pub mod extractor;
pub mod matcher;
pub mod tokenizer;

// Re-export main types for convenient access
pub use extractor::{
    extract, render_json,
    ExtractionResult, Mention, MentionExtractor, TermMatches
};

pub use config::{
    ExtractionConfig, ExtractorSettings, DEFAULT_AMENITIES,
    DEFAULT_FUZZY_THRESHOLD, DEFAULT_MIN_TERM_LENGTH, DEFAULT_TOKEN_WINDOW
};

pub use error::{AlignmentError, ExtractError, Result};

// Re-export matching and alignment building blocks for custom pipelines
pub use matcher::{
    ExactMatcher, FuzzyMatch, FuzzyMatcher, MatchKind, MatchSpan,
    SlidingWindowMatcher
};
pub use alignment::{Token, TokenAlignment};
pub use tokenizer::{Tokenizer, WhitespaceTokenizer};
