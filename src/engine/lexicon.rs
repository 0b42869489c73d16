use std::collections::{BTreeMap, BTreeSet};

use super::label::Label;

const POSITIVE_PT: &[&str] = &[
    "incrível",
    "amei",
    "divertido",
    "adorei",
    "maravilhosa",
    "obra-prima",
    "bom",
    "superou",
    "gostei",
    "linda",
    "recomendo",
];

const NEGATIVE_PT: &[&str] = &[
    "péssimo",
    "cansativo",
    "sem graça",
    "ruim",
    "chato",
    "decepcionante",
    "horrível",
    "sono",
    "mal feito",
    "sem sentido",
];

/// Raw trigger phrases per label, as configured.
///
/// Terms are stored as written; validation and normalization happen in
/// [`compile`](super::pattern::compile).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    entries: BTreeMap<Label, BTreeSet<String>>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in Portuguese movie-review lexicon.
    pub fn portuguese() -> Self {
        Self::from_terms(POSITIVE_PT.iter().copied(), NEGATIVE_PT.iter().copied())
    }

    pub fn from_terms<P, N>(positive: P, negative: N) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        N: IntoIterator,
        N::Item: Into<String>,
    {
        let mut lexicon = Self::new();
        lexicon.extend(Label::Positive, positive);
        lexicon.extend(Label::Negative, negative);
        lexicon
    }

    pub fn insert(&mut self, label: Label, phrase: impl Into<String>) {
        self.entries.entry(label).or_default().insert(phrase.into());
    }

    pub fn extend<I>(&mut self, label: Label, phrases: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let entry = self.entries.entry(label).or_default();
        entry.extend(phrases.into_iter().map(Into::into));
    }

    /// Terms under `label`, in sorted order.
    pub fn terms(&self, label: Label) -> impl Iterator<Item = &str> {
        self.entries
            .get(&label)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    pub fn term_count(&self, label: Label) -> usize {
        self.entries.get(&label).map_or(0, BTreeSet::len)
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portuguese_lexicon_sizes() {
        let lexicon = Lexicon::portuguese();
        assert_eq!(lexicon.term_count(Label::Positive), 11);
        assert_eq!(lexicon.term_count(Label::Negative), 10);
        assert_eq!(lexicon.len(), 21);
    }

    #[test]
    fn test_portuguese_lexicon_contains_phrases() {
        let lexicon = Lexicon::portuguese();
        let negative: Vec<&str> = lexicon.terms(Label::Negative).collect();
        assert!(negative.contains(&"sem graça"));
        assert!(negative.contains(&"mal feito"));
    }

    #[test]
    fn test_insert_deduplicates_within_label() {
        let mut lexicon = Lexicon::new();
        lexicon.insert(Label::Positive, "bom");
        lexicon.insert(Label::Positive, "bom");
        assert_eq!(lexicon.term_count(Label::Positive), 1);
    }

    #[test]
    fn test_missing_label_has_no_terms() {
        let lexicon = Lexicon::from_terms(["bom"], Vec::<String>::new());
        assert_eq!(lexicon.term_count(Label::Negative), 0);
        assert_eq!(lexicon.terms(Label::Negative).count(), 0);
    }

    #[test]
    fn test_new_lexicon_is_empty() {
        assert!(Lexicon::new().is_empty());
    }
}
