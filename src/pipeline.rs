//! Pipeline driver
//!
//! One classification request: normalize, tokenize, run both matchers over
//! the shared compiled patterns, aggregate. The patterns sit behind an `Arc`
//! and are never mutated, so a `Pipeline` can be cloned into threads freely.

use std::sync::Arc;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use crate::engine::{
    compile, match_phrases, match_tokens, CategoryCounts, Classification, CompiledPatterns,
    ConfigError, EngineConfig, Lexicon, Match,
};
use crate::reading::{normalize, TokenStream, Tokenizer};

/// Outcome for one input, paired with the original text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub input: String,
    pub normalized: String,
    pub tokens: TokenStream,
    pub matches: Vec<Match>,
    pub counts: CategoryCounts,
    pub classification: Classification,
}

#[derive(Clone)]
pub struct Pipeline {
    patterns: Arc<CompiledPatterns>,
    tokenizer: Arc<dyn Tokenizer>,
}

impl Pipeline {
    pub fn new(patterns: CompiledPatterns) -> Self {
        let tokenizer: Arc<dyn Tokenizer> = Arc::from(patterns.tokenizer().build());
        Self {
            patterns: Arc::new(patterns),
            tokenizer,
        }
    }

    pub fn from_lexicon(lexicon: &Lexicon, config: &EngineConfig) -> Result<Self, ConfigError> {
        compile(lexicon, config).map(Self::new)
    }

    pub fn classify(&self, raw: &str) -> Report {
        let normalized = normalize(raw);
        let tokens = self.tokenizer.tokenize(&normalized);

        let mut matches = match_tokens(&tokens, self.patterns.token_patterns());
        matches.extend(match_phrases(&tokens, self.patterns.phrase_patterns()));
        matches.sort();

        let counts = CategoryCounts::from_matches(&matches);
        let classification = Classification::decide(counts);

        debug!(
            tokens = tokens.len(),
            matches = counts.total(),
            positive = counts.positive,
            negative = counts.negative,
            %classification,
            "classified input"
        );

        Report {
            input: raw.to_string(),
            normalized,
            tokens,
            matches,
            counts,
            classification,
        }
    }

    /// Classifies every input in parallel; reports keep input order.
    pub fn classify_batch<S>(&self, inputs: &[S]) -> Vec<Report>
    where
        S: AsRef<str> + Sync,
    {
        info!(inputs = inputs.len(), "classifying batch");
        inputs
            .par_iter()
            .map(|input| self.classify(input.as_ref()))
            .collect()
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("patterns", &self.patterns)
            .finish_non_exhaustive()
    }
}
