//! Concept lexicon store
//!
//! An immutable map from concept keys to affective records. Multi-word
//! concepts are stored with underscores (`buen_servicio`); lookups turn
//! internal spaces into underscores before probing the map.

use crate::errors::{Result, SenticError};
use crate::types::{ConceptRecord, Sentics};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use serde_json::Value;
use std::borrow::Cow;
use std::io::Read;
use std::path::Path;

/// Normalize a concept for lookup.
///
/// When the first space is not at position 0, every space becomes an
/// underscore. Applying it twice yields the same key.
pub fn normalize_key(concept: &str) -> Cow<'_, str> {
    match concept.find(' ') {
        Some(idx) if idx > 0 => Cow::Owned(concept.replace(' ', "_")),
        _ => Cow::Borrowed(concept),
    }
}

/// A lexicon entry as found in JSON: either the SenticNet positional
/// array or a record with named fields.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Positional(Vec<Value>),
    Record(ConceptRecord),
}

/// Number of leading positional fields before the semantics list
const POSITIONAL_FIELDS: usize = 8;

fn number_at(concept: &str, values: &[Value], idx: usize) -> Result<f64> {
    let parsed = match &values[idx] {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| {
        SenticError::malformed_entry(concept, format!("field {} is not numeric", idx))
    })
}

fn text_at(concept: &str, values: &[Value], idx: usize) -> Result<String> {
    match &values[idx] {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(SenticError::malformed_entry(
            concept,
            format!("field {} is not a string", idx),
        )),
    }
}

fn positional_record(concept: &str, values: &[Value]) -> Result<ConceptRecord> {
    if values.len() < POSITIONAL_FIELDS {
        return Err(SenticError::malformed_entry(
            concept,
            format!(
                "expected at least {} fields, got {}",
                POSITIONAL_FIELDS,
                values.len()
            ),
        ));
    }

    let semantics = (POSITIONAL_FIELDS..values.len())
        .map(|idx| text_at(concept, values, idx))
        .collect::<Result<Vec<_>>>()?;

    Ok(ConceptRecord {
        sentics: Sentics {
            pleasantness: number_at(concept, values, 0)?,
            attention: number_at(concept, values, 1)?,
            sensitivity: number_at(concept, values, 2)?,
            aptitude: number_at(concept, values, 3)?,
        },
        mood_tags: (text_at(concept, values, 4)?, text_at(concept, values, 5)?),
        polarity_value: number_at(concept, values, 6)?,
        polarity_intensity: text_at(concept, values, 7)?,
        semantics,
    })
}

/// Immutable concept → record store
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    concepts: FxHashMap<String, ConceptRecord>,
}

impl Lexicon {
    /// Create an empty lexicon
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a lexicon from `(concept, record)` pairs
    pub fn from_records<K: AsRef<str>>(records: impl IntoIterator<Item = (K, ConceptRecord)>) -> Self {
        let mut lexicon = Self::new();
        for (concept, record) in records {
            lexicon.insert(concept.as_ref(), record);
        }
        lexicon
    }

    /// Parse a JSON object of concept entries
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: FxHashMap<String, RawEntry> = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// Parse a JSON object of concept entries from a reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: FxHashMap<String, RawEntry> = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    /// Load a JSON lexicon file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|e| SenticError::io(format!("{}: {}", path.display(), e)))?;
        let lexicon = Self::from_reader(std::io::BufReader::new(file))?;
        tracing::info!(
            path = %path.display(),
            concepts = lexicon.len(),
            "lexicon loaded"
        );
        Ok(lexicon)
    }

    fn from_raw(raw: FxHashMap<String, RawEntry>) -> Result<Self> {
        let mut lexicon = Self::new();
        lexicon.concepts.reserve(raw.len());
        for (concept, entry) in raw {
            let record = match entry {
                RawEntry::Positional(values) => positional_record(&concept, &values)?,
                RawEntry::Record(record) => record,
            };
            lexicon.insert(&concept, record);
        }
        Ok(lexicon)
    }

    /// Insert or replace a concept
    pub fn insert(&mut self, concept: &str, record: ConceptRecord) {
        self.concepts.insert(normalize_key(concept).into_owned(), record);
    }

    /// Number of concepts
    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    /// Check if the lexicon has no concepts
    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    /// Look up a concept (spaces are normalized to underscores)
    pub fn get(&self, concept: &str) -> Option<&ConceptRecord> {
        self.concepts.get(normalize_key(concept).as_ref())
    }

    /// Check if a concept is present
    pub fn contains(&self, concept: &str) -> bool {
        self.get(concept).is_some()
    }

    /// Signed polarity value, 0.0 when absent
    pub fn polarity_value(&self, concept: &str) -> f64 {
        self.get(concept).map_or(0.0, |r| r.polarity_value)
    }

    /// Polarity intensity label
    pub fn polarity_intensity(&self, concept: &str) -> Option<&str> {
        self.get(concept).map(|r| r.polarity_intensity.as_str())
    }

    /// The pair of mood tags
    pub fn mood_tags(&self, concept: &str) -> Option<&(String, String)> {
        self.get(concept).map(|r| &r.mood_tags)
    }

    /// The four sentic dimensions
    pub fn sentics(&self, concept: &str) -> Option<Sentics> {
        self.get(concept).map(|r| r.sentics)
    }

    /// Related concepts
    pub fn semantics(&self, concept: &str) -> Option<&[String]> {
        self.get(concept).map(|r| r.semantics.as_slice())
    }

    /// Pleasantness dimension, 0.0 when absent
    pub fn pleasantness(&self, concept: &str) -> f64 {
        self.sentics(concept).map_or(0.0, |s| s.pleasantness)
    }

    /// Attention dimension, 0.0 when absent
    pub fn attention(&self, concept: &str) -> f64 {
        self.sentics(concept).map_or(0.0, |s| s.attention)
    }

    /// Sensitivity dimension, 0.0 when absent
    pub fn sensitivity(&self, concept: &str) -> f64 {
        self.sentics(concept).map_or(0.0, |s| s.sensitivity)
    }

    /// Aptitude dimension, 0.0 when absent
    pub fn aptitude(&self, concept: &str) -> f64 {
        self.sentics(concept).map_or(0.0, |s| s.aptitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r##"{
        "buen_servicio": ["0.8", "0", "0.1", "0.7", "#joy", "#admiration", "0.76", "positive", "atencion", "calidad"],
        "malo": [-0.6, 0, 0, -0.5, "#sadness", "#disgust", -0.6, "negative"],
        "excelente": {
            "sentics": { "pleasantness": 0.9, "attention": 0.2, "sensitivity": 0.0, "aptitude": 0.8 },
            "mood_tags": ["#joy", "#admiration"],
            "polarity_value": 0.9,
            "polarity_intensity": "positive"
        }
    }"##;

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("buen servicio"), "buen_servicio");
        assert_eq!(normalize_key("a b c"), "a_b_c");
        assert_eq!(normalize_key("malo"), "malo");
        // a leading space does not trigger normalization
        assert_eq!(normalize_key(" malo x"), " malo x");
        let once = normalize_key("muy buen trato").into_owned();
        assert_eq!(normalize_key(&once), once);
    }

    #[test]
    fn test_from_json_mixed_formats() {
        let lexicon = Lexicon::from_json_str(SAMPLE).unwrap();
        assert_eq!(lexicon.len(), 3);

        let record = lexicon.get("buen servicio").unwrap();
        assert_eq!(record.polarity_value, 0.76);
        assert_eq!(record.sentics.pleasantness, 0.8);
        assert_eq!(record.mood_tags, ("#joy".to_string(), "#admiration".to_string()));
        assert_eq!(record.semantics, vec!["atencion", "calidad"]);

        assert_eq!(lexicon.polarity_value("malo"), -0.6);
        assert!(lexicon.semantics("malo").unwrap().is_empty());
        assert_eq!(lexicon.polarity_intensity("excelente"), Some("positive"));
        assert!(lexicon.semantics("excelente").unwrap().is_empty());
    }

    #[test]
    fn test_accessors_on_miss() {
        let lexicon = Lexicon::from_json_str(SAMPLE).unwrap();
        assert!(lexicon.get("inexistente").is_none());
        assert_eq!(lexicon.polarity_value("inexistente"), 0.0);
        assert_eq!(lexicon.pleasantness("inexistente"), 0.0);
        assert!(lexicon.mood_tags("inexistente").is_none());
        assert!(lexicon.sentics("inexistente").is_none());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let lexicon = Lexicon::from_json_str(SAMPLE).unwrap();
        assert!(lexicon.contains("malo"));
        assert!(!lexicon.contains("Malo"));
    }

    #[test]
    fn test_malformed_positional_entry() {
        let err = Lexicon::from_json_str(r##"{ "corto": [0.1, 0.2, "#joy"] }"##).unwrap_err();
        assert!(matches!(err, SenticError::MalformedEntry { ref concept, .. } if concept == "corto"));

        let err = Lexicon::from_json_str(
            r##"{ "raro": ["x", 0, 0, 0, "#joy", "#joy", 0.1, "positive"] }"##,
        )
        .unwrap_err();
        assert!(err.to_string().contains("field 0"));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let lexicon = Lexicon::from_path(file.path()).unwrap();
        assert_eq!(lexicon.len(), 3);

        let err = Lexicon::from_path("/nonexistent/lexicon.json").unwrap_err();
        assert!(matches!(err, SenticError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/lexicon.json"));
    }
}
