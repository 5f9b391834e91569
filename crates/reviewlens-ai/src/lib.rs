//! Inference layer: keyword sentiment, entity recognition, and digit classification.

pub mod analyzer;
pub mod digit;
pub mod entities;
pub mod sentiment;

pub use analyzer::{AnalyzeError, ReviewAnalyzer, ReviewReport, summarize_reports};
pub use digit::{DigitError, DigitPrediction, preprocess};
pub use entities::{Entity, EntityRecognizer, Gazetteer, mark_entities};
pub use sentiment::{ScoreBreakdown, SentimentScorer, SentimentSummary, score};

#[cfg(feature = "onnx")]
mod digit_model;
#[cfg(feature = "onnx")]
pub use digit_model::DigitClassifier;
