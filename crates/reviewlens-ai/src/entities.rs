//! Named-entity recognition over review text.
//!
//! [`EntityRecognizer`] is the seam where a statistical NER model plugs in.
//! [`Gazetteer`] is the dictionary-backed implementation shipped here: it
//! finds known names (brands, products) listed per entity label.

use std::collections::BTreeMap;

/// A recognized entity: a byte span of the source text plus its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub text: String,
    pub label: String,
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
}

/// Anything that can find entities in a piece of text.
pub trait EntityRecognizer: Send + Sync {
    /// Non-overlapping entities, ordered by `start`.
    fn recognize(&self, text: &str) -> Vec<Entity>;
}

/// Dictionary lookup of known names, case-sensitive, on word boundaries.
///
/// When two names overlap the longer one wins, so `"MacBook Pro"` is
/// preferred over `"MacBook"`.
#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    /// (name, label), longest name first.
    entries: Vec<(String, String)>,
}

impl Gazetteer {
    /// Build from a label → names mapping. Blank names are skipped.
    pub fn new(entities: &BTreeMap<String, Vec<String>>) -> Self {
        let mut entries: Vec<(String, String)> = entities
            .iter()
            .flat_map(|(label, names)| {
                names
                    .iter()
                    .map(|n| n.trim())
                    .filter(|n| !n.is_empty())
                    .map(move |n| (n.to_string(), label.clone()))
            })
            .collect();

        // Longest first; ties broken by name then label for a stable order.
        entries.sort_by(|a, b| {
            b.0.len()
                .cmp(&a.0.len())
                .then_with(|| a.0.cmp(&b.0))
                .then_with(|| a.1.cmp(&b.1))
        });
        entries.dedup_by(|a, b| a.0 == b.0);

        Self { entries }
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl EntityRecognizer for Gazetteer {
    fn recognize(&self, text: &str) -> Vec<Entity> {
        let mut found: Vec<Entity> = Vec::new();

        for (name, label) in &self.entries {
            for (start, _) in text.match_indices(name.as_str()) {
                let end = start + name.len();
                if !on_word_boundary(text, start, end) {
                    continue;
                }
                if found.iter().any(|e| start < e.end && e.start < end) {
                    continue;
                }
                found.push(Entity {
                    text: name.clone(),
                    label: label.clone(),
                    start,
                    end,
                });
            }
        }

        found.sort_by_key(|e| e.start);
        found
    }
}

/// True when the span is not glued to an alphanumeric character on either side.
fn on_word_boundary(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}

/// Render `text` with each entity wrapped inline as `[text LABEL]`.
pub fn mark_entities(text: &str, entities: &[Entity]) -> String {
    let mut out = String::with_capacity(text.len() + entities.len() * 12);
    let mut cursor = 0;
    for e in entities {
        if e.start < cursor || e.end > text.len() {
            continue;
        }
        out.push_str(&text[cursor..e.start]);
        out.push('[');
        out.push_str(&text[e.start..e.end]);
        out.push(' ');
        out.push_str(&e.label);
        out.push(']');
        cursor = e.end;
    }
    out.push_str(&text[cursor..]);
    out
}
