// WHY: tokenization is injected so alignment follows the word splitting the
// downstream classifier uses

use std::borrow::Cow;

/// Splits a text into tokens in left-to-right order
///
/// Tokens must appear in the text in the order they are returned. They may
/// be borrowed slices or owned strings, but each one has to be findable in
/// the source text at or after the end of the previous token.
pub trait Tokenizer: Send + Sync {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Cow<'a, str>>;
}

/// Default tokenizer: splits on runs of Unicode whitespace
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Cow<'a, str>> {
        text.split_whitespace().map(Cow::Borrowed).collect()
    }
}

/// Any thread-safe closure producing owned tokens is a tokenizer
impl<F> Tokenizer for F
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Cow<'a, str>> {
        self(text).into_iter().map(Cow::Owned).collect()
    }
}
