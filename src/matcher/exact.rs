// WHY: Whole-word literal matching compiled once per vocabulary term
// Uses regex-automata meta regex so Unicode word boundaries and case folding come for free

use regex_automata::{meta::Regex, util::syntax};
use tracing::debug;

use super::MatchSpan;
use crate::error::{ExtractError, Result};

/// Case-insensitive, word-bounded literal matcher for a single term
#[derive(Debug, Clone)]
pub struct ExactMatcher {
    term: String,
    regex: Regex,
}

impl ExactMatcher {
    /// Compile `\b<term>\b` with the term escaped, so metacharacters match literally
    pub fn new(term: &str) -> Result<Self> {
        if term.is_empty() {
            return Err(ExtractError::InvalidConfiguration(
                "vocabulary term must not be empty".to_string(),
            ));
        }

        let pattern = format!(r"\b{}\b", regex_syntax::escape(term));
        let regex = Regex::builder()
            .syntax(syntax::Config::new().case_insensitive(true))
            .build(&pattern)
            .map_err(|e| ExtractError::Pattern {
                term: term.to_string(),
                message: e.to_string(),
            })?;

        debug!("Compiled exact matcher for {:?} with pattern {}", term, pattern);

        Ok(Self {
            term: term.to_string(),
            regex,
        })
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// All non-overlapping occurrences, left to right
    pub fn find_all(&self, text: &str) -> Vec<MatchSpan> {
        self.regex
            .find_iter(text)
            .filter_map(|m| MatchSpan::new(m.start(), m.end()))
            .collect()
    }
}
