use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_WORD: Regex = Regex::new(r"[^\w\s]").expect("static pattern");
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").expect("static pattern");
}

/// Cleans raw text before tokenization.
///
/// Lowercases, deletes every character that is neither a word character
/// (Unicode letters, digits, marks, underscore) nor whitespace, collapses
/// whitespace runs to a single space and trims both ends.
///
/// Lexicon terms go through the same function when patterns are compiled, so
/// `obra-prima` in the lexicon and `Obra-prima!` in a sentence both end up as
/// `obraprima`.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let stripped = NON_WORD.replace_all(&lowered, "");
    WHITESPACE_RUN.replace_all(&stripped, " ").trim().to_string()
}
