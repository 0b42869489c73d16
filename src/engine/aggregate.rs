use serde::Serialize;

use super::label::{Classification, Label};
use super::pattern::Match;

/// Match counts per label. Every match counts once; nothing is deduplicated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub positive: usize,
    pub negative: usize,
}

impl CategoryCounts {
    pub fn from_matches<'a, I>(matches: I) -> Self
    where
        I: IntoIterator<Item = &'a Match>,
    {
        matches
            .into_iter()
            .fold(Self::default(), |mut counts, m| {
                match m.label {
                    Label::Positive => counts.positive += 1,
                    Label::Negative => counts.negative += 1,
                }
                counts
            })
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative
    }
}

impl Classification {
    /// Decision rule, checked in order:
    /// more positive wins, more negative wins, otherwise neutral (a tie with
    /// evidence on both sides and no evidence at all both land here).
    pub fn decide(counts: CategoryCounts) -> Self {
        if counts.positive > counts.negative {
            Classification::Positive
        } else if counts.negative > counts.positive {
            Classification::Negative
        } else {
            Classification::Neutral
        }
    }
}

/// Counts `matches` by label and applies [`Classification::decide`].
pub fn classify(matches: &[Match]) -> Classification {
    Classification::decide(CategoryCounts::from_matches(matches))
}
