//! Analyzer configuration: keyword sets, entity gazetteer, and sample reviews.
//!
//! Loaded once at process start from a JSON document and read-only
//! thereafter. Every field is optional in the file; missing fields fall back
//! to the built-in lists.
//!
//! ```json
//! {
//!   "keywords": { "positive": ["love"], "negative": ["slow"] },
//!   "entities": { "ORG": ["Samsung"], "PRODUCT": ["Galaxy"] },
//!   "samples":  ["I love my new Samsung Galaxy phone."]
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::ConfigError;
use crate::keywords::KeywordSet;

/// Product reviews shipped as ready-made input.
pub const DEFAULT_SAMPLES: &[&str] = &[
    "I love my new Samsung Galaxy phone. The camera quality is amazing!",
    "This Apple MacBook Pro is overpriced and the battery life is disappointing.",
    "Sony headphones deliver incredible sound for the price.",
    "The Dell laptop runs smoothly and is perfect for work.",
    "I'm unhappy with this Lenovo tablet — it's very slow.",
];

/// Built-in gazetteer: entity label → known names.
pub const DEFAULT_ENTITIES: &[(&str, &[&str])] = &[
    (
        "ORG",
        &["Samsung", "Apple", "Sony", "Dell", "Lenovo", "Google", "Microsoft"],
    ),
    (
        "PRODUCT",
        &[
            "Galaxy",
            "Samsung Galaxy",
            "MacBook",
            "MacBook Pro",
            "iPhone",
            "Pixel",
            "ThinkPad",
        ],
    ),
];

/// On-disk shape of the config file, before validation.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    keywords: Option<BTreeMap<String, Vec<String>>>,
    entities: Option<BTreeMap<String, Vec<String>>>,
    samples: Option<Vec<String>>,
}

/// Validated analyzer configuration.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub keywords: KeywordSet,
    /// Entity label → names, e.g. `ORG` → `["Samsung", "Sony"]`.
    pub entities: BTreeMap<String, Vec<String>>,
    pub samples: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            keywords: KeywordSet::default(),
            entities: default_entities(),
            samples: DEFAULT_SAMPLES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl AnalyzerConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            positive = config.keywords.positive().len(),
            negative = config.keywords.negative().len(),
            entity_labels = config.entities.len(),
            samples = config.samples.len(),
            "loaded analyzer config"
        );
        Ok(config)
    }

    /// Parse and validate a JSON config document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(json)?;

        let keywords = match raw.keywords {
            Some(map) => KeywordSet::from_map(&map)?,
            None => KeywordSet::default(),
        };

        let entities = match raw.entities {
            Some(map) => validate_entities(map)?,
            None => default_entities(),
        };

        let samples = match raw.samples {
            Some(samples) if samples.is_empty() => return Err(ConfigError::EmptySamples),
            Some(samples) => samples,
            None => DEFAULT_SAMPLES.iter().map(|s| s.to_string()).collect(),
        };

        Ok(Self {
            keywords,
            entities,
            samples,
        })
    }

    /// The sample review at `index`, if there is one.
    pub fn sample(&self, index: usize) -> Option<&str> {
        self.samples.get(index).map(String::as_str)
    }

    /// Load from `path` when given, otherwise use the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => {
                info!("using built-in analyzer config");
                Ok(Self::default())
            }
        }
    }
}

fn default_entities() -> BTreeMap<String, Vec<String>> {
    DEFAULT_ENTITIES
        .iter()
        .map(|(label, names)| {
            (
                label.to_string(),
                names.iter().map(|n| n.to_string()).collect(),
            )
        })
        .collect()
}

fn validate_entities(
    map: BTreeMap<String, Vec<String>>,
) -> Result<BTreeMap<String, Vec<String>>, ConfigError> {
    let mut out = BTreeMap::new();
    for (label, names) in map {
        let label = label.trim().to_string();
        if label.is_empty() {
            return Err(ConfigError::EmptyEntityLabel);
        }
        let mut cleaned = Vec::with_capacity(names.len());
        for name in names {
            let name = name.trim();
            if name.is_empty() {
                return Err(ConfigError::EmptyEntityName { label });
            }
            cleaned.push(name.to_string());
        }
        out.entry(label).or_insert_with(Vec::new).extend(cleaned);
    }
    Ok(out)
}
