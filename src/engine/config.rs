// Configuration for the lexmood engine
// Everything here is fixed once patterns are compiled

use serde::{Deserialize, Serialize};

use crate::reading::TokenizerKind;

/// How lexicon terms are distributed between the two matchers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Registration {
    /// One-word terms go to the token matcher, multi-word terms to the phrase
    /// matcher. Every occurrence of a term yields exactly one match.
    #[default]
    Exclusive,

    /// Every term goes to both matchers. A one-word term also becomes a
    /// length-1 phrase pattern and is counted twice per occurrence.
    Dual,
}

/// Engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Term distribution between matchers (default Exclusive)
    pub registration: Registration,

    /// Tokenizer used for inputs and lexicon terms (default Word)
    pub tokenizer: TokenizerKind,
}

impl EngineConfig {
    pub fn with_registration(mut self, registration: Registration) -> Self {
        self.registration = registration;
        self
    }

    pub fn with_tokenizer(mut self, tokenizer: TokenizerKind) -> Self {
        self.tokenizer = tokenizer;
        self
    }
}
