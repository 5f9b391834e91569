pub mod config;
pub mod error;
pub mod keywords;
pub mod label;

pub use config::AnalyzerConfig;
pub use error::ConfigError;
pub use keywords::{KeywordSet, Polarity};
pub use label::Label;
