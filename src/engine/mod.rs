pub mod aggregate;
pub mod config;
pub mod error;
pub mod label;
pub mod lexicon;
pub mod pattern;
pub mod phrase_matcher;
pub mod token_matcher;

pub use aggregate::{classify, CategoryCounts};
pub use config::{EngineConfig, Registration};
pub use error::ConfigError;
pub use label::{Classification, Label};
pub use lexicon::Lexicon;
pub use pattern::{compile, CompiledPatterns, Match, PhrasePattern, TokenPattern, TokenPredicate};
pub use phrase_matcher::match_phrases;
pub use token_matcher::match_tokens;
