// Error types for extraction: alignment failures are engine inconsistencies,
// configuration errors are rejected input

use std::path::PathBuf;
use thiserror::Error;

/// A match span that cannot be expressed in whole tokens
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignmentError {
    /// Forward reconstruction could not locate a token produced by the tokenizer
    #[error("token {index} ({token:?}) not found in text at or after byte {offset}")]
    TokenNotFound {
        index: usize,
        token: String,
        offset: usize,
    },

    /// The span start or its last character falls outside every token interval
    #[error("match positions {start}..{end} do not align with any token offsets")]
    Unaligned { start: usize, end: usize },
}

/// Error type for all extraction operations
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("alignment error: {0}")]
    Alignment(#[from] AlignmentError),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Literal term pattern failed to compile (only reachable through regex size limits)
    #[error("failed to compile matcher for term {term:?}: {message}")]
    Pattern { term: String, message: String },

    #[error("failed to read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to serialize extraction result: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_error_converts() {
        let err: ExtractError = AlignmentError::Unaligned { start: 3, end: 5 }.into();
        assert!(matches!(err, ExtractError::Alignment(AlignmentError::Unaligned { start: 3, end: 5 })));
        assert_eq!(
            err.to_string(),
            "alignment error: match positions 3..5 do not align with any token offsets"
        );
    }

    #[test]
    fn test_token_not_found_message() {
        let err = AlignmentError::TokenNotFound {
            index: 2,
            token: "foo".to_string(),
            offset: 7,
        };
        assert_eq!(err.to_string(), "token 2 (\"foo\") not found in text at or after byte 7");
    }
}
