use super::pattern::{Match, TokenPattern};
use crate::reading::TokenStream;

/// Finds every token satisfying a single-token pattern.
///
/// Each satisfied `(token, pattern)` pair yields exactly one one-token match.
/// Results come out in token order, then pattern order.
pub fn match_tokens(stream: &TokenStream, patterns: &[TokenPattern]) -> Vec<Match> {
    stream
        .iter()
        .enumerate()
        .flat_map(move |(index, token)| {
            patterns
                .iter()
                .filter(move |pattern| pattern.predicate.matches(token))
                .map(move |pattern| Match::new(pattern.label, index, index + 1))
        })
        .collect()
}
