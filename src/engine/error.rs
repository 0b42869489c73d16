use thiserror::Error;

use super::label::Label;

/// Lexicon problems detected while compiling patterns.
///
/// All of these are raised before any input is classified; there is no
/// partial pattern set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("lexicon has no terms")]
    EmptyLexicon,

    #[error("lexicon entry {0} has no terms")]
    EmptyEntry(Label),

    #[error("empty phrase under {label}: {raw:?}")]
    EmptyPhrase { label: Label, raw: String },

    #[error("phrase {phrase:?} is listed under both {first} and {second}")]
    ConflictingPhrase {
        phrase: String,
        first: Label,
        second: Label,
    },
}
