use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use super::token::{Token, TokenStream};

/// Splits normalized text into a token stream.
///
/// Implementations must keep source order; they are handed text that has
/// already gone through [`normalize`](super::normalize::normalize).
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, normalized: &str) -> TokenStream;
}

/// Splits on Unicode word boundaries (UAX #29), dropping whitespace segments.
#[derive(Debug, Default, Clone, Copy)]
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, normalized: &str) -> TokenStream {
        normalized
            .split_word_bounds()
            .filter(|segment| !segment.trim().is_empty())
            .map(Token::new)
            .collect()
    }
}

/// Splits on runs of whitespace only.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, normalized: &str) -> TokenStream {
        normalized.split_whitespace().map(Token::new).collect()
    }
}

/// Tokenizer selection carried in configuration.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerKind {
    #[default]
    Word,
    Whitespace,
}

impl TokenizerKind {
    pub fn build(self) -> Box<dyn Tokenizer> {
        match self {
            TokenizerKind::Word => Box::new(WordTokenizer),
            TokenizerKind::Whitespace => Box::new(WhitespaceTokenizer),
        }
    }
}

/// Convenience wrapper using the default tokenizer.
pub fn tokenize_text(normalized: &str) -> TokenStream {
    WordTokenizer.tokenize(normalized)
}
