use super::pattern::{Match, PhrasePattern};
use crate::reading::TokenStream;

/// Finds every contiguous occurrence of every phrase pattern.
///
/// Each start index is tried independently, so overlapping and nested
/// occurrences are all reported. Comparison is on `Token::lower`, exact and
/// element by element.
pub fn match_phrases(stream: &TokenStream, patterns: &[PhrasePattern]) -> Vec<Match> {
    let tokens = stream.as_slice();
    let mut matches = Vec::new();

    for pattern in patterns {
        let len = pattern.len();
        if len == 0 || len > tokens.len() {
            continue;
        }

        for (start, window) in tokens.windows(len).enumerate() {
            let hit = window
                .iter()
                .zip(pattern.words())
                .all(|(token, word)| token.lower == *word);
            if hit {
                matches.push(Match::new(pattern.label(), start, start + len));
            }
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::label::Label;
    use crate::reading::Token;

    fn stream(words: &[&str]) -> TokenStream {
        words.iter().copied().map(Token::new).collect()
    }

    fn phrase(label: Label, words: &[&str]) -> PhrasePattern {
        PhrasePattern::new(label, words.iter().map(|w| w.to_string()).collect()).unwrap()
    }

    #[test]
    fn test_match_phrases_adjacent_in_order() {
        let patterns = vec![phrase(Label::Negative, &["sem", "graça"])];
        let matches = match_phrases(&stream(&["filme", "sem", "graça"]), &patterns);
        assert_eq!(matches, vec![Match::new(Label::Negative, 1, 3)]);
    }

    #[test]
    fn test_match_phrases_rejects_reordered() {
        let patterns = vec![phrase(Label::Negative, &["sem", "graça"])];
        assert!(match_phrases(&stream(&["graça", "sem"]), &patterns).is_empty());
    }

    #[test]
    fn test_match_phrases_rejects_gap() {
        let patterns = vec![phrase(Label::Negative, &["sem", "graça"])];
        assert!(match_phrases(&stream(&["sem", "muita", "graça"]), &patterns).is_empty());
    }

    #[test]
    fn test_match_phrases_case_normalized() {
        let patterns = vec![phrase(Label::Negative, &["sem", "graça"])];
        let matches = match_phrases(&stream(&["SEM", "Graça"]), &patterns);
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_match_phrases_overlapping_occurrences() {
        let patterns = vec![phrase(Label::Positive, &["muito", "muito"])];
        let matches = match_phrases(&stream(&["muito", "muito", "muito"]), &patterns);
        assert_eq!(
            matches,
            vec![
                Match::new(Label::Positive, 0, 2),
                Match::new(Label::Positive, 1, 3),
            ]
        );
    }

    #[test]
    fn test_match_phrases_nested_patterns_all_kept() {
        let patterns = vec![
            phrase(Label::Negative, &["mal", "feito", "demais"]),
            phrase(Label::Negative, &["feito"]),
        ];
        let matches = match_phrases(&stream(&["mal", "feito", "demais"]), &patterns);
        assert_eq!(
            matches,
            vec![
                Match::new(Label::Negative, 0, 3),
                Match::new(Label::Negative, 1, 2),
            ]
        );
    }

    #[test]
    fn test_match_phrases_pattern_longer_than_stream() {
        let patterns = vec![phrase(Label::Negative, &["sem", "sentido"])];
        assert!(match_phrases(&stream(&["sem"]), &patterns).is_empty());
        assert!(match_phrases(&TokenStream::default(), &patterns).is_empty());
    }

    #[test]
    fn test_match_phrases_at_stream_end() {
        let patterns = vec![phrase(Label::Negative, &["mal", "feito"])];
        let matches = match_phrases(&stream(&["muito", "mal", "feito"]), &patterns);
        assert_eq!(matches, vec![Match::new(Label::Negative, 1, 3)]);
    }
}
