// WHY: Converts byte spans from the matchers into whole-token context windows
// Token offsets are rebuilt by scanning forward from the previous token's end

use std::borrow::Cow;
use tracing::debug;

use crate::error::AlignmentError;
use crate::matcher::MatchSpan;
use crate::tokenizer::Tokenizer;

/// Token text paired with its half-open byte interval in the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: Cow<'a, str>,
    pub start: usize,
    pub end: usize,
}

/// Tokenized source text with reconstructed byte offsets
///
/// Intervals are non-overlapping and ordered: each token starts at or after
/// the end of the one before it.
#[derive(Debug, Clone)]
pub struct TokenAlignment<'a> {
    tokens: Vec<Token<'a>>,
}

impl<'a> TokenAlignment<'a> {
    /// Tokenize `text` once and locate every token by forward search
    ///
    /// A token is searched for strictly from the previous token's end, so a
    /// token whose text also occurs earlier but after that point binds to the
    /// earlier occurrence.
    pub fn new(text: &'a str, tokenizer: &dyn Tokenizer) -> Result<Self, AlignmentError> {
        let raw_tokens = tokenizer.tokenize(text);
        let mut tokens = Vec::with_capacity(raw_tokens.len());
        let mut offset = 0;

        for (index, token) in raw_tokens.into_iter().enumerate() {
            let start = text
                .get(offset..)
                .and_then(|rest| rest.find(&*token))
                .map(|relative| offset + relative)
                .ok_or_else(|| AlignmentError::TokenNotFound {
                    index,
                    token: token.to_string(),
                    offset,
                })?;
            let end = start + token.len();
            tokens.push(Token { text: token, start, end });
            offset = end;
        }

        debug!("Aligned {} tokens over {} bytes", tokens.len(), text.len());
        Ok(Self { tokens })
    }

    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Index of the token with `start <= pos < end`
    pub fn token_containing_start(&self, pos: usize) -> Option<usize> {
        // Only the last token starting at or before `pos` can contain it
        let candidates = self.tokens.partition_point(|t| t.start <= pos);
        let index = candidates.checked_sub(1)?;
        let token = &self.tokens[index];
        (pos < token.end).then_some(index)
    }

    /// Index of the token with `start < pos <= end`, i.e. the token holding the byte before `pos`
    pub fn token_containing_end(&self, pos: usize) -> Option<usize> {
        let candidates = self.tokens.partition_point(|t| t.start < pos);
        let index = candidates.checked_sub(1)?;
        let token = &self.tokens[index];
        (pos <= token.end).then_some(index)
    }

    /// Tokens covering `span`, widened by `radius` tokens per side and joined by single spaces
    pub fn context(&self, span: MatchSpan, radius: usize) -> Result<String, AlignmentError> {
        let unaligned = || AlignmentError::Unaligned {
            start: span.start,
            end: span.end,
        };
        let first = self.token_containing_start(span.start).ok_or_else(unaligned)?;
        let last = self.token_containing_end(span.end).ok_or_else(unaligned)?;

        let from = first.saturating_sub(radius);
        let to = last.saturating_add(radius).saturating_add(1).min(self.tokens.len());

        Ok(self.tokens[from..to]
            .iter()
            .map(|t| &*t.text)
            .collect::<Vec<&str>>()
            .join(" "))
    }
}
