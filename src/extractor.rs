// WHY: Drives exact then fuzzy matching over the vocabulary and aligns every span
// Matching and alignment are independent per term/span, so both phases map in
// parallel and the results are reassembled in vocabulary and discovery order

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::alignment::TokenAlignment;
use crate::config::ExtractionConfig;
use crate::error::{AlignmentError, Result};
use crate::matcher::{ExactMatcher, FuzzyMatcher, MatchKind, MatchSpan, SlidingWindowMatcher};

/// Matched term -> one context window per span, in vocabulary order
pub type ExtractionResult = IndexMap<String, Vec<String>>;

/// Spans found for one vocabulary term, before alignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermMatches {
    pub term: String,
    pub kind: MatchKind,
    pub spans: Vec<MatchSpan>,
}

/// A single located mention with its token-aligned context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mention {
    pub term: String,
    pub span: MatchSpan,
    pub kind: MatchKind,
    pub context: String,
}

/// Reusable extraction engine over a fixed vocabulary
///
/// Exact matchers are compiled once at construction; each call to
/// [`MentionExtractor::extract`] is a pure function of the text.
pub struct MentionExtractor {
    matchers: Vec<ExactMatcher>,
    fuzzy: Arc<dyn FuzzyMatcher>,
    config: ExtractionConfig,
}

impl fmt::Debug for MentionExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MentionExtractor")
            .field("terms", &self.terms().collect::<Vec<_>>())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl MentionExtractor {
    /// Validate options and compile one exact matcher per term
    pub fn new<I, S>(vocabulary: I, config: ExtractionConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        config.validate()?;
        let matchers = vocabulary
            .into_iter()
            .map(|term| ExactMatcher::new(term.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        info!(
            "Built mention extractor: {} terms, fuzzy threshold {}, token window {}",
            matchers.len(),
            config.fuzzy_threshold,
            config.token_window
        );

        Ok(Self {
            matchers,
            fuzzy: Arc::new(SlidingWindowMatcher),
            config,
        })
    }

    /// Replace the fuzzy fallback strategy
    pub fn with_fuzzy_matcher<F: FuzzyMatcher + 'static>(mut self, fuzzy: F) -> Self {
        self.fuzzy = Arc::new(fuzzy);
        self
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.matchers.iter().map(ExactMatcher::term)
    }

    /// Exact spans, or a single fuzzy span when there are none and the term is long enough
    fn match_term(&self, matcher: &ExactMatcher, text: &str) -> Option<TermMatches> {
        let term = matcher.term();
        let spans = matcher.find_all(text);
        if !spans.is_empty() {
            debug!("Exact matches for {:?}: {}", term, spans.len());
            return Some(TermMatches {
                term: term.to_string(),
                kind: MatchKind::Exact,
                spans,
            });
        }

        if term.chars().count() < self.config.min_term_length {
            return None;
        }

        self.fuzzy
            .best_match(term, text, self.config.fuzzy_threshold)
            .map(|found| TermMatches {
                term: term.to_string(),
                kind: MatchKind::Fuzzy { score: found.score },
                spans: vec![found.span],
            })
    }

    /// Spans per matched term, in vocabulary order; unmatched terms are omitted
    pub fn find_term_matches(&self, text: &str) -> Vec<TermMatches> {
        ordered_map(&self.matchers, |matcher| self.match_term(matcher, text))
            .into_iter()
            .flatten()
            .collect()
    }

    /// Context windows grouped like `term_matches`; the first failure in output order wins
    fn align(&self, text: &str, term_matches: &[TermMatches]) -> Result<Vec<Vec<String>>> {
        if term_matches.is_empty() {
            return Ok(Vec::new());
        }

        let alignment = TokenAlignment::new(text, self.config.tokenizer.as_ref()).map_err(|e| {
            warn!("Tokenization does not align with source text: {}", e);
            e
        })?;

        let pending: Vec<(usize, MatchSpan)> = term_matches
            .iter()
            .enumerate()
            .flat_map(|(group, matches)| matches.spans.iter().map(move |&span| (group, span)))
            .collect();

        let window = self.config.token_window;
        let contexts: Vec<std::result::Result<String, AlignmentError>> =
            ordered_map(&pending, |&(_, span)| alignment.context(span, window));

        let mut grouped = vec![Vec::new(); term_matches.len()];
        for ((group, _), context) in pending.into_iter().zip(contexts) {
            let context = context.map_err(|e| {
                warn!("Match for {:?} failed alignment: {}", term_matches[group].term, e);
                e
            })?;
            grouped[group].push(context);
        }
        Ok(grouped)
    }

    /// Every mention with its span, match kind and context
    pub fn extract_mentions(&self, text: &str) -> Result<Vec<Mention>> {
        let term_matches = self.find_term_matches(text);
        let contexts = self.align(text, &term_matches)?;

        Ok(term_matches
            .into_iter()
            .zip(contexts)
            .flat_map(|(matches, contexts)| {
                let TermMatches { term, kind, spans } = matches;
                spans.into_iter().zip(contexts).map(move |(span, context)| Mention {
                    term: term.clone(),
                    span,
                    kind,
                    context,
                })
            })
            .collect())
    }

    /// Matched term -> context windows; terms with no match are absent
    pub fn extract(&self, text: &str) -> Result<ExtractionResult> {
        let term_matches = self.find_term_matches(text);
        let contexts = self.align(text, &term_matches)?;

        let mut result = ExtractionResult::with_capacity(term_matches.len());
        for (matches, contexts) in term_matches.into_iter().zip(contexts) {
            // A repeated vocabulary term keeps its first position
            result.insert(matches.term, contexts);
        }
        debug!("Extracted {} matched terms", result.len());
        Ok(result)
    }
}

/// One-shot extraction over `vocabulary` with the given options
pub fn extract<I, S>(text: &str, vocabulary: I, config: &ExtractionConfig) -> Result<ExtractionResult>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    MentionExtractor::new(vocabulary, config.clone())?.extract(text)
}

/// Compact JSON object preserving term order, for handing contexts downstream
pub fn render_json(result: &ExtractionResult) -> Result<String> {
    Ok(serde_json::to_string(result)?)
}

#[cfg(feature = "parallel")]
fn ordered_map<T, R, F>(items: &[T], f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    items.par_iter().map(f).collect()
}

#[cfg(not(feature = "parallel"))]
fn ordered_map<T, R, F>(items: &[T], f: F) -> Vec<R>
where
    F: Fn(&T) -> R,
{
    items.iter().map(f).collect()
}
