// Engine options plus the TOML file form for vocabulary and thresholds
// WHY: validation runs at construction, before any text is matched

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::error::{ExtractError, Result};
use crate::extractor::MentionExtractor;
use crate::tokenizer::{Tokenizer, WhitespaceTokenizer};

/// Minimum partial-similarity score (0-100) for a fuzzy candidate
pub const DEFAULT_FUZZY_THRESHOLD: u8 = 85;

/// Terms with fewer chars than this never fall back to fuzzy matching
pub const DEFAULT_MIN_TERM_LENGTH: usize = 5;

/// Tokens kept on each side of a match
pub const DEFAULT_TOKEN_WINDOW: usize = 10;

/// Built-in amenity vocabulary, in reporting order
pub const DEFAULT_AMENITIES: &[&str] = &[
    "toilet", "restroom", "bathroom",
    "parking", "car park",
    "dog", "pet",
    "playground", "family", "kid",
    "cafe",
    "cycling", "bike", "bicycle",
    "picnic area", "camping area",
    "gift shop", "convenience store",
];

/// Options for a single extraction engine
#[derive(Clone)]
pub struct ExtractionConfig {
    pub fuzzy_threshold: u8,
    pub min_term_length: usize,
    pub token_window: usize,
    pub tokenizer: Arc<dyn Tokenizer>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            min_term_length: DEFAULT_MIN_TERM_LENGTH,
            token_window: DEFAULT_TOKEN_WINDOW,
            tokenizer: Arc::new(WhitespaceTokenizer),
        }
    }
}

impl fmt::Debug for ExtractionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractionConfig")
            .field("fuzzy_threshold", &self.fuzzy_threshold)
            .field("min_term_length", &self.min_term_length)
            .field("token_window", &self.token_window)
            .finish_non_exhaustive()
    }
}

impl ExtractionConfig {
    pub fn with_fuzzy_threshold(mut self, threshold: u8) -> Self {
        self.fuzzy_threshold = threshold;
        self
    }

    pub fn with_min_term_length(mut self, length: usize) -> Self {
        self.min_term_length = length;
        self
    }

    pub fn with_token_window(mut self, window: usize) -> Self {
        self.token_window = window;
        self
    }

    pub fn with_tokenizer<T: Tokenizer + 'static>(mut self, tokenizer: T) -> Self {
        self.tokenizer = Arc::new(tokenizer);
        self
    }

    /// Reject option values the engine cannot honor
    pub fn validate(&self) -> Result<()> {
        if self.token_window == 0 {
            return Err(ExtractError::InvalidConfiguration(
                "token_window must be positive".to_string(),
            ));
        }
        if self.fuzzy_threshold > 100 {
            return Err(ExtractError::InvalidConfiguration(format!(
                "fuzzy_threshold must be within 0..=100, got {}",
                self.fuzzy_threshold
            )));
        }
        Ok(())
    }
}

/// File form of the extractor settings
///
/// ```toml
/// vocabulary = ["parking", "dog", "gift shop"]
/// fuzzy_threshold = 90
/// token_window = 5
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractorSettings {
    pub vocabulary: Vec<String>,
    pub fuzzy_threshold: u8,
    pub min_term_length: usize,
    pub token_window: usize,
}

impl Default for ExtractorSettings {
    fn default() -> Self {
        Self {
            vocabulary: DEFAULT_AMENITIES.iter().map(|s| s.to_string()).collect(),
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            min_term_length: DEFAULT_MIN_TERM_LENGTH,
            token_window: DEFAULT_TOKEN_WINDOW,
        }
    }
}

impl ExtractorSettings {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ExtractError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&content)?;
        info!(
            "Loaded extractor settings from {} ({} terms)",
            path.display(),
            settings.vocabulary.len()
        );
        Ok(settings)
    }

    /// Engine options with the default whitespace tokenizer
    pub fn config(&self) -> ExtractionConfig {
        ExtractionConfig {
            fuzzy_threshold: self.fuzzy_threshold,
            min_term_length: self.min_term_length,
            token_window: self.token_window,
            ..ExtractionConfig::default()
        }
    }

    pub fn into_extractor(self) -> Result<MentionExtractor> {
        let config = self.config();
        MentionExtractor::new(self.vocabulary, config)
    }
}
