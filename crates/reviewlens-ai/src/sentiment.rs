//! Rule-based sentiment scoring.
//!
//! Lowercases the text, counts which positive and which negative keywords
//! occur in it as substrings, and picks the majority. Matching is plain
//! substring containment: `"price"` matches inside `"overpriced"`. Each
//! keyword counts at most once regardless of how often it occurs.

use std::collections::BTreeSet;

use reviewlens_core::{KeywordSet, Label};

/// Score `text` against `keywords`. Total and deterministic.
pub fn score(text: &str, keywords: &KeywordSet) -> Label {
    let lower = text.to_lowercase();
    Label::from_counts(
        matched(&lower, keywords.positive()).count(),
        matched(&lower, keywords.negative()).count(),
    )
}

/// Keywords of `set` contained in the already-lowercased text.
fn matched<'a>(lower: &'a str, set: &'a BTreeSet<String>) -> impl Iterator<Item = &'a String> {
    set.iter().filter(move |k| lower.contains(k.as_str()))
}

/// The label together with the keywords that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub label: Label,
    pub positive_hits: Vec<String>,
    pub negative_hits: Vec<String>,
}

impl ScoreBreakdown {
    pub fn positive_count(&self) -> usize {
        self.positive_hits.len()
    }

    pub fn negative_count(&self) -> usize {
        self.negative_hits.len()
    }
}

/// Label counts over a batch of texts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentimentSummary {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentSummary {
    pub fn record(&mut self, label: Label) {
        self.total += 1;
        match label {
            Label::Positive => self.positive += 1,
            Label::Negative => self.negative += 1,
            Label::Neutral => self.neutral += 1,
        }
    }

    pub fn count(&self, label: Label) -> usize {
        match label {
            Label::Positive => self.positive,
            Label::Negative => self.negative,
            Label::Neutral => self.neutral,
        }
    }
}

impl FromIterator<Label> for SentimentSummary {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        let mut summary = Self::default();
        for label in iter {
            summary.record(label);
        }
        summary
    }
}

/// Keyword scorer bound to one immutable [`KeywordSet`].
///
/// Holds no mutable state, so a single scorer can be shared freely
/// between threads.
#[derive(Debug, Clone)]
pub struct SentimentScorer {
    keywords: KeywordSet,
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new(KeywordSet::default())
    }
}

impl SentimentScorer {
    pub fn new(keywords: KeywordSet) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    pub fn score(&self, text: &str) -> Label {
        score(text, &self.keywords)
    }

    /// Score and report which keywords matched, in keyword order.
    pub fn breakdown(&self, text: &str) -> ScoreBreakdown {
        let lower = text.to_lowercase();
        let positive_hits: Vec<String> = matched(&lower, self.keywords.positive())
            .cloned()
            .collect();
        let negative_hits: Vec<String> = matched(&lower, self.keywords.negative())
            .cloned()
            .collect();

        ScoreBreakdown {
            label: Label::from_counts(positive_hits.len(), negative_hits.len()),
            positive_hits,
            negative_hits,
        }
    }

    pub fn score_batch<S: AsRef<str>>(&self, texts: &[S]) -> Vec<Label> {
        texts.iter().map(|t| self.score(t.as_ref())).collect()
    }

    pub fn summarize<S: AsRef<str>>(&self, texts: &[S]) -> SentimentSummary {
        texts.iter().map(|t| self.score(t.as_ref())).collect()
    }
}
