//! Sentiment labels produced by the keyword scorer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Sentiment of a piece of text. The label is the only output of scoring;
/// no numeric confidence is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Positive,
    Negative,
    Neutral,
}

impl Label {
    pub const ALL: [Label; 3] = [Label::Positive, Label::Negative, Label::Neutral];

    /// Decide the label from keyword hit counts. Ties, including 0/0, are neutral.
    pub fn from_counts(positive: usize, negative: usize) -> Self {
        match positive.cmp(&negative) {
            std::cmp::Ordering::Greater => Self::Positive,
            std::cmp::Ordering::Less => Self::Negative,
            std::cmp::Ordering::Equal => Self::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Label {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Self::Positive),
            "negative" => Ok(Self::Negative),
            "neutral" => Ok(Self::Neutral),
            other => Err(format!("unknown sentiment label: {other:?}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_counts_majority_wins() {
        assert_eq!(Label::from_counts(2, 0), Label::Positive);
        assert_eq!(Label::from_counts(0, 2), Label::Negative);
        assert_eq!(Label::from_counts(3, 2), Label::Positive);
        assert_eq!(Label::from_counts(1, 4), Label::Negative);
    }

    #[test]
    fn from_counts_tie_is_neutral() {
        assert_eq!(Label::from_counts(0, 0), Label::Neutral);
        assert_eq!(Label::from_counts(2, 2), Label::Neutral);
    }

    #[test]
    fn parses_its_own_string_form() {
        for label in Label::ALL {
            assert_eq!(label.as_str().parse::<Label>().unwrap(), label);
        }
        assert_eq!("  NEGATIVE ".parse::<Label>().unwrap(), Label::Negative);
        assert!("mixed".parse::<Label>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Label::Neutral).unwrap(), "\"neutral\"");
        let parsed: Label = serde_json::from_str("\"positive\"").unwrap();
        assert_eq!(parsed, Label::Positive);
    }
}
