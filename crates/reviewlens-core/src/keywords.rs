//! Positive/negative keyword sets used by the sentiment scorer.
//!
//! Keywords are case-insensitive: they are trimmed and lowercased on
//! construction, so scoring only has to lowercase the text. Sets are
//! validated once, here, so scoring itself can never fail.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::error::ConfigError;

/// Built-in positive keywords.
pub const DEFAULT_POSITIVE: &[&str] = &[
    "love",
    "amazing",
    "incredible",
    "perfect",
    "smoothly",
    "great",
    "excellent",
];

/// Built-in negative keywords.
pub const DEFAULT_NEGATIVE: &[&str] = &[
    "disappointing",
    "slow",
    "overpriced",
    "unhappy",
    "bad",
    "poor",
];

/// Which side of the keyword set a word belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Two disjoint, non-empty sets of lowercase keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    positive: BTreeSet<String>,
    negative: BTreeSet<String>,
}

impl KeywordSet {
    /// Build a validated keyword set.
    ///
    /// Rejects an empty polarity, a blank keyword, and any keyword that
    /// appears (after lowercasing) on both sides.
    pub fn new<P, N, S>(positive: P, negative: N) -> Result<Self, ConfigError>
    where
        P: IntoIterator<Item = S>,
        N: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let positive = normalize_side(positive, Polarity::Positive)?;
        let negative = normalize_side(negative, Polarity::Negative)?;

        if let Some(shared) = positive.intersection(&negative).next() {
            return Err(ConfigError::OverlappingKeyword(shared.clone()));
        }

        Ok(Self { positive, negative })
    }

    /// Build from a label → keywords mapping, e.g. the `keywords` object of a
    /// config file. Keys are matched case-insensitively; both must be present
    /// and each may appear only once after case folding.
    pub fn from_map(map: &BTreeMap<String, Vec<String>>) -> Result<Self, ConfigError> {
        let mut positive: Option<&Vec<String>> = None;
        let mut negative: Option<&Vec<String>> = None;

        for (key, words) in map {
            let slot = match key.trim().to_lowercase().as_str() {
                "positive" => &mut positive,
                "negative" => &mut negative,
                _ => return Err(ConfigError::UnknownPolarity(key.clone())),
            };
            if slot.replace(words).is_some() {
                return Err(ConfigError::DuplicatePolarity(key.clone()));
            }
        }

        let positive = positive.ok_or(ConfigError::EmptyKeywordSet {
            polarity: Polarity::Positive,
        })?;
        let negative = negative.ok_or(ConfigError::EmptyKeywordSet {
            polarity: Polarity::Negative,
        })?;
        Self::new(positive, negative)
    }

    pub fn positive(&self) -> &BTreeSet<String> {
        &self.positive
    }

    pub fn negative(&self) -> &BTreeSet<String> {
        &self.negative
    }

    pub fn side(&self, polarity: Polarity) -> &BTreeSet<String> {
        match polarity {
            Polarity::Positive => &self.positive,
            Polarity::Negative => &self.negative,
        }
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self {
            positive: DEFAULT_POSITIVE.iter().map(|s| s.to_string()).collect(),
            negative: DEFAULT_NEGATIVE.iter().map(|s| s.to_string()).collect(),
        }
    }
}

fn normalize_side<I, S>(words: I, polarity: Polarity) -> Result<BTreeSet<String>, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut set = BTreeSet::new();
    for word in words {
        let word = word.as_ref().trim();
        if word.is_empty() {
            return Err(ConfigError::BlankKeyword { polarity });
        }
        set.insert(word.to_lowercase());
    }
    if set.is_empty() {
        return Err(ConfigError::EmptyKeywordSet { polarity });
    }
    Ok(set)
}
