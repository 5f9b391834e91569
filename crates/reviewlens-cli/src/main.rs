//! reviewlens CLI
//!
//! - `analyze [TEXT]`: entities and sentiment for one review (stdin if omitted)
//! - `samples [--index N]`: analyze the configured sample reviews, or just one
//! - `keywords`: print the active keyword sets
//! - `digit <IMAGE> --model <PATH>`: classify a handwritten digit (`onnx` feature)

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use reviewlens_ai::{ReviewAnalyzer, summarize_reports};
use reviewlens_core::AnalyzerConfig;
use tracing::level_filters::LevelFilter;

mod display;

#[derive(Parser)]
#[command(name = "reviewlens", version, about = "Keyword sentiment and entity analysis for product reviews")]
struct Cli {
    /// JSON config with keyword sets, entity names, and sample reviews
    #[arg(long, global = true, env = "REVIEWLENS_CONFIG")]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze one review
    Analyze {
        /// Review text; read from stdin when omitted
        text: Option<String>,
    },
    /// Analyze every sample review and print a summary
    Samples {
        /// Analyze only the sample at this zero-based position
        #[arg(long)]
        index: Option<usize>,
    },
    /// Print the active keyword sets
    Keywords,
    /// Classify a handwritten digit image
    #[cfg(feature = "onnx")]
    Digit {
        /// PNG or JPEG image
        image: PathBuf,
        /// ONNX model file
        #[arg(long, env = "REVIEWLENS_DIGIT_MODEL")]
        model: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    tracing::info!("reviewlens v{}", env!("CARGO_PKG_VERSION"));

    let config = AnalyzerConfig::load_or_default(cli.config.as_deref())
        .context("loading analyzer config")?;

    match cli.command {
        Command::Analyze { text } => {
            let text = match text {
                Some(t) => t,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("reading review from stdin")?;
                    buf
                }
            };
            let analyzer = ReviewAnalyzer::from_config(&config);
            let report = analyzer.analyze(&text)?;
            display::print_report(&report);
        }
        Command::Samples { index: Some(i) } => {
            let Some(text) = config.sample(i) else {
                anyhow::bail!(
                    "sample index {i} out of range (0..{})",
                    config.samples.len()
                );
            };
            let analyzer = ReviewAnalyzer::from_config(&config);
            display::print_report(&analyzer.analyze(text)?);
        }
        Command::Samples { index: None } => {
            let analyzer = ReviewAnalyzer::from_config(&config);
            let reports = analyzer.analyze_all(&config.samples);
            for report in &reports {
                display::print_report(report);
            }
            display::print_summary(&summarize_reports(&reports));
        }
        Command::Keywords => {
            let analyzer = ReviewAnalyzer::from_config(&config);
            display::print_keywords(analyzer.scorer().keywords());
        }
        #[cfg(feature = "onnx")]
        Command::Digit {
            image: image_path,
            model,
        } => {
            let img = image::open(&image_path)
                .with_context(|| format!("opening image {}", image_path.display()))?;
            let mut classifier = reviewlens_ai::DigitClassifier::load(&model)
                .with_context(|| format!("loading digit model {}", model.display()))?;
            let prediction = classifier.predict(&img)?;
            display::print_digit(&image_path, &prediction);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_accepts_index() {
        let cli = Cli::try_parse_from(["reviewlens", "samples", "--index", "2"]).unwrap();
        assert!(matches!(cli.command, Command::Samples { index: Some(2) }));

        let cli = Cli::try_parse_from(["reviewlens", "samples"]).unwrap();
        assert!(matches!(cli.command, Command::Samples { index: None }));
    }

    #[test]
    fn samples_rejects_negative_index() {
        assert!(Cli::try_parse_from(["reviewlens", "samples", "--index", "-1"]).is_err());
    }
}
