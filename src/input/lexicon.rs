use super::LoadError;
use crate::engine::{Label, Lexicon};
use serde::Deserialize;
use std::path::Path;

/// On-disk lexicon layout: `{"positive": [...], "negative": [...]}`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LexiconFile {
    #[serde(default)]
    positive: Vec<String>,
    #[serde(default)]
    negative: Vec<String>,
}

impl LexiconFile {
    fn into_lexicon(self) -> Lexicon {
        Lexicon::from_terms(self.positive, self.negative)
    }
}

/// Parse a lexicon from JSON text.
///
/// Only the shape is checked here; empty or conflicting terms are reported
/// by the pattern compiler.
pub fn parse(json: &str) -> Result<Lexicon, LoadError> {
    let file: LexiconFile = serde_json::from_str(json)?;
    Ok(file.into_lexicon())
}

/// Load a lexicon from a JSON file.
pub fn load(path: &str) -> Result<Lexicon, LoadError> {
    let path = Path::new(path);

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let lexicon = parse(&content)?;
    tracing::debug!(
        path = %path.display(),
        positive = lexicon.term_count(Label::Positive),
        negative = lexicon.term_count(Label::Negative),
        "loaded lexicon"
    );
    Ok(lexicon)
}
