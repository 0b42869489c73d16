//! Pattern compiler
//!
//! Turns a [`Lexicon`] into the two pattern sets consumed by the matchers:
//! single-token predicates and exact multi-token phrases. Terms are run
//! through the same normalizer and tokenizer used for inputs, so both sides
//! of every comparison share one representation.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use super::config::{EngineConfig, Registration};
use super::error::ConfigError;
use super::label::Label;
use super::lexicon::Lexicon;
use crate::reading::{normalize, Token, TokenizerKind};

/// Attribute test applied to a single token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenPredicate {
    /// Lowercased text equals the literal.
    Lower(String),
    /// Surface text equals the literal exactly.
    Orth(String),
}

impl TokenPredicate {
    pub fn matches(&self, token: &Token) -> bool {
        match self {
            TokenPredicate::Lower(literal) => token.lower == *literal,
            TokenPredicate::Orth(literal) => token.text == *literal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPattern {
    pub label: Label,
    pub predicate: TokenPredicate,
}

/// Exact, contiguous, ordered run of lowercase words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhrasePattern {
    label: Label,
    words: Vec<String>,
}

impl PhrasePattern {
    /// Returns `None` for an empty word list; a phrase always spans at least
    /// one token.
    pub fn new(label: Label, words: Vec<String>) -> Option<Self> {
        if words.is_empty() {
            None
        } else {
            Some(Self { label, words })
        }
    }

    pub fn label(&self) -> Label {
        self.label
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// A labeled span `[start, end)` of a token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Match {
    pub start: usize,
    pub end: usize,
    pub label: Label,
}

impl Match {
    pub fn new(label: Label, start: usize, end: usize) -> Self {
        debug_assert!(end > start, "match must span at least one token");
        Self { start, end, label }
    }
}

/// Read-only output of [`compile`], shared by every classification call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPatterns {
    token_patterns: Vec<TokenPattern>,
    phrase_patterns: Vec<PhrasePattern>,
    tokenizer: TokenizerKind,
}

impl CompiledPatterns {
    pub fn token_patterns(&self) -> &[TokenPattern] {
        &self.token_patterns
    }

    pub fn phrase_patterns(&self) -> &[PhrasePattern] {
        &self.phrase_patterns
    }

    pub fn tokenizer(&self) -> TokenizerKind {
        self.tokenizer
    }
}

/// Compiles `lexicon` into matcher patterns.
///
/// Fails on an empty lexicon, a label without terms, a term that normalizes
/// to nothing, or a term that (after normalization) sits under two labels.
/// Terms that collapse to the same words under one label are compiled once.
pub fn compile(lexicon: &Lexicon, config: &EngineConfig) -> Result<CompiledPatterns, ConfigError> {
    if lexicon.is_empty() {
        return Err(ConfigError::EmptyLexicon);
    }
    if let Some(label) = Label::ALL.into_iter().find(|&l| lexicon.term_count(l) == 0) {
        return Err(ConfigError::EmptyEntry(label));
    }

    let tokenizer = config.tokenizer.build();
    let mut seen: BTreeMap<Vec<String>, Label> = BTreeMap::new();
    let mut token_patterns = Vec::new();
    let mut phrase_patterns = Vec::new();

    for label in Label::ALL {
        for raw in lexicon.terms(label) {
            let words: Vec<String> = tokenizer
                .tokenize(&normalize(raw))
                .iter()
                .map(|token| token.lower.clone())
                .collect();

            if words.is_empty() {
                return Err(ConfigError::EmptyPhrase {
                    label,
                    raw: raw.to_string(),
                });
            }

            if let Some(&first) = seen.get(&words) {
                if first != label {
                    return Err(ConfigError::ConflictingPhrase {
                        phrase: words.join(" "),
                        first,
                        second: label,
                    });
                }
                continue;
            }
            seen.insert(words.clone(), label);

            let single = words.len() == 1;
            if single {
                token_patterns.push(TokenPattern {
                    label,
                    predicate: TokenPredicate::Lower(words[0].clone()),
                });
            }
            if !single || config.registration == Registration::Dual {
                if let Some(pattern) = PhrasePattern::new(label, words) {
                    phrase_patterns.push(pattern);
                }
            }
        }
    }

    debug!(
        token_patterns = token_patterns.len(),
        phrase_patterns = phrase_patterns.len(),
        registration = ?config.registration,
        "compiled lexicon"
    );

    Ok(CompiledPatterns {
        token_patterns,
        phrase_patterns,
        tokenizer: config.tokenizer,
    })
}
