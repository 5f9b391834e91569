//! Review analysis: entity recognition plus keyword sentiment.
//!
//! The recognizer is injected at construction time; there is no global model
//! cache. Build one analyzer at startup and reuse it for every review.

use reviewlens_core::AnalyzerConfig;
use thiserror::Error;
use tracing::{debug, warn};

use crate::entities::{Entity, EntityRecognizer, Gazetteer};
use crate::sentiment::{ScoreBreakdown, SentimentScorer, SentimentSummary};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error("review text is empty")]
    EmptyReview,
}

/// Everything the analyzer found in one review.
#[derive(Debug, Clone)]
pub struct ReviewReport {
    pub text: String,
    pub entities: Vec<Entity>,
    pub sentiment: ScoreBreakdown,
}

pub struct ReviewAnalyzer {
    scorer: SentimentScorer,
    recognizer: Box<dyn EntityRecognizer>,
}

impl ReviewAnalyzer {
    pub fn new(scorer: SentimentScorer, recognizer: Box<dyn EntityRecognizer>) -> Self {
        Self { scorer, recognizer }
    }

    /// Analyzer backed by the config's keyword set and gazetteer.
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        let gazetteer = Gazetteer::new(&config.entities);
        debug!(names = gazetteer.len(), "built entity gazetteer");
        Self::new(
            SentimentScorer::new(config.keywords.clone()),
            Box::new(gazetteer),
        )
    }

    pub fn scorer(&self) -> &SentimentScorer {
        &self.scorer
    }

    /// Analyze one review. Blank input is rejected; the scorer alone would
    /// call it neutral, but there is nothing to report on.
    pub fn analyze(&self, text: &str) -> Result<ReviewReport, AnalyzeError> {
        if text.trim().is_empty() {
            return Err(AnalyzeError::EmptyReview);
        }

        let entities = self.recognizer.recognize(text);
        let sentiment = self.scorer.breakdown(text);
        debug!(
            entities = entities.len(),
            positive = sentiment.positive_count(),
            negative = sentiment.negative_count(),
            label = %sentiment.label,
            "analyzed review"
        );

        Ok(ReviewReport {
            text: text.to_string(),
            entities,
            sentiment,
        })
    }

    /// Analyze every non-blank review, skipping blank ones.
    pub fn analyze_all<S: AsRef<str>>(&self, texts: &[S]) -> Vec<ReviewReport> {
        texts
            .iter()
            .enumerate()
            .filter_map(|(i, t)| match self.analyze(t.as_ref()) {
                Ok(report) => Some(report),
                Err(e) => {
                    warn!(index = i, error = %e, "skipping review");
                    None
                }
            })
            .collect()
    }
}

/// Label counts over a set of reports.
pub fn summarize_reports(reports: &[ReviewReport]) -> SentimentSummary {
    reports.iter().map(|r| r.sentiment.label).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reviewlens_core::{KeywordSet, Label};

    /// Recognizer that never finds anything.
    struct NoEntities;

    impl EntityRecognizer for NoEntities {
        fn recognize(&self, _text: &str) -> Vec<Entity> {
            Vec::new()
        }
    }

    #[test]
    fn rejects_blank_review() {
        let analyzer = ReviewAnalyzer::from_config(&AnalyzerConfig::default());
        assert_eq!(analyzer.analyze("").unwrap_err(), AnalyzeError::EmptyReview);
        assert_eq!(
            analyzer.analyze("  \n\t ").unwrap_err(),
            AnalyzeError::EmptyReview
        );
    }

    #[test]
    fn default_config_analyzes_samsung_review() {
        let analyzer = ReviewAnalyzer::from_config(&AnalyzerConfig::default());
        let report = analyzer
            .analyze("I love my new Samsung Galaxy phone. The camera quality is amazing!")
            .unwrap();

        assert_eq!(report.sentiment.label, Label::Positive);
        assert_eq!(report.sentiment.positive_count(), 2);

        // "Samsung Galaxy" is a PRODUCT and outranks the shorter ORG match.
        assert_eq!(report.entities.len(), 1);
        assert_eq!(report.entities[0].text, "Samsung Galaxy");
        assert_eq!(report.entities[0].label, "PRODUCT");
    }

    #[test]
    fn from_config_scores_with_config_keywords() {
        let config = AnalyzerConfig::from_json(
            r#"{ "keywords": { "positive": ["Stellar"], "negative": ["meh"] } }"#,
        )
        .unwrap();
        let analyzer = ReviewAnalyzer::from_config(&config);
        assert_eq!(analyzer.scorer().keywords(), &config.keywords);

        let report = analyzer.analyze("A stellar Sony").unwrap();
        assert_eq!(report.sentiment.positive_hits, vec!["stellar".to_string()]);
        assert_eq!(report.sentiment.label, Label::Positive);
    }

    #[test]
    fn injected_recognizer_is_used() {
        let keywords = KeywordSet::new(["good"], ["bad"]).unwrap();
        let analyzer = ReviewAnalyzer::new(SentimentScorer::new(keywords), Box::new(NoEntities));
        let report = analyzer.analyze("Samsung is good").unwrap();
        assert!(report.entities.is_empty());
        assert_eq!(report.sentiment.label, Label::Positive);
    }

    #[test]
    fn analyze_all_skips_blank_and_summarizes() {
        let config = AnalyzerConfig::default();
        let analyzer = ReviewAnalyzer::from_config(&config);

        let mut texts = config.samples.clone();
        texts.push("   ".to_string());

        let reports = analyzer.analyze_all(&texts);
        assert_eq!(reports.len(), config.samples.len());

        let summary = summarize_reports(&reports);
        assert_eq!(summary.total, 5);
        assert_eq!(summary.positive, 3);
        assert_eq!(summary.negative, 2);
        assert_eq!(summary.neutral, 0);
    }

    #[test]
    fn analyzer_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReviewAnalyzer>();
    }
}
