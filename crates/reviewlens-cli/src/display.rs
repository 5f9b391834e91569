//! Terminal rendering for analysis results.

use reviewlens_ai::{ReviewReport, SentimentSummary, mark_entities};
use reviewlens_core::{KeywordSet, Label, Polarity};

const MAX_REVIEW_CHARS: usize = 72;

/// Print one review as a card: text, entities, inline markup, sentiment.
pub fn print_report(report: &ReviewReport) {
    println!("=== {} ===", truncate(&report.text, MAX_REVIEW_CHARS));
    println!();

    println!("Entities");
    if report.entities.is_empty() {
        println!("  (none detected)");
    } else {
        for e in &report.entities {
            println!("  {:<26} {}", e.text, e.label);
        }
        println!();
        println!("  {}", mark_entities(&report.text, &report.entities));
    }
    println!();

    let s = &report.sentiment;
    println!("Sentiment");
    println!("  {:<26} {}", "label", label_text(s.label));
    println!(
        "  {:<26} {} ({})",
        "positive hits",
        s.positive_count(),
        join_or_dash(&s.positive_hits)
    );
    println!(
        "  {:<26} {} ({})",
        "negative hits",
        s.negative_count(),
        join_or_dash(&s.negative_hits)
    );
    println!();
}

pub fn print_summary(summary: &SentimentSummary) {
    println!("Summary");
    println!("  {:<26} {}", "reviews", summary.total);
    for label in Label::ALL {
        println!("  {:<26} {}", label_text(label), summary.count(label));
    }
}

pub fn print_keywords(keywords: &KeywordSet) {
    for polarity in [Polarity::Positive, Polarity::Negative] {
        let words: Vec<&str> = keywords.side(polarity).iter().map(|s| s.as_str()).collect();
        println!("  {:<26} {}", polarity, words.join(", "));
    }
}

#[cfg(feature = "onnx")]
pub fn print_digit(image: &std::path::Path, prediction: &reviewlens_ai::DigitPrediction) {
    println!("=== {} ===", image.display());
    println!("  {:<26} {}", "digit", prediction.digit);
    println!("  {:<26} {:.2}%", "confidence", prediction.confidence * 100.0);
}

fn label_text(label: Label) -> &'static str {
    match label {
        Label::Positive => "Positive",
        Label::Negative => "Negative",
        Label::Neutral => "Neutral",
    }
}

fn join_or_dash(words: &[String]) -> String {
    if words.is_empty() {
        "-".to_string()
    } else {
        words.join(", ")
    }
}

/// Shorten to at most `max` characters, ending in "..." when cut.
fn truncate(text: &str, max: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_text_unchanged() {
        assert_eq!(truncate("  short  ", 10), "short");
    }

    #[test]
    fn truncate_long_text_on_char_boundary() {
        let t = truncate("ééééééééééé", 6);
        assert_eq!(t, "ééé...");
    }

    #[test]
    fn join_or_dash_empty() {
        assert_eq!(join_or_dash(&[]), "-");
        assert_eq!(
            join_or_dash(&["love".to_string(), "great".to_string()]),
            "love, great"
        );
    }
}
