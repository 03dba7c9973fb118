//! Engine configuration
//!
//! Category weights, label thresholds and normalization constants used by
//! the polarity aggregator, plus the language that selects default
//! trigger tables and stopwords.

use crate::errors::{Result, SenticError};
use serde::{Deserialize, Serialize};

/// Languages with built-in trigger tables and stopword lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[serde(alias = "spanish")]
    Es,
    #[serde(alias = "english")]
    En,
}

impl Language {
    /// Two-letter language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }
}

impl std::str::FromStr for Language {
    type Err = SenticError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "es" | "spanish" => Ok(Language::Es),
            "en" | "english" => Ok(Language::En),
            other => Err(SenticError::invalid_config(format!(
                "unsupported language '{}'",
                other
            ))),
        }
    }
}

/// Configuration for polarity scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SenticConfig {
    /// Language of the scored messages
    pub language: Language,
    /// Values strictly above this are POSITIVE
    pub positive_threshold: f64,
    /// Values strictly below this are NEGATIVE
    pub negative_threshold: f64,
    /// Weight of resolved NOUN chunks
    pub noun_weight: f64,
    /// Weight of resolved VERB chunks
    pub verb_weight: f64,
    /// Weight of resolved ADV chunks; negated when the chunk carries a negation trigger
    pub adv_weight: f64,
    /// Weight of resolved ADJ chunks (they still count towards normalization)
    pub adj_weight: f64,
    /// Starting value of the resolved-chunk counter used as divisor
    pub initial_count: usize,
    /// Decimal places the final value is rounded to
    pub precision: u32,
}

impl Default for SenticConfig {
    fn default() -> Self {
        Self {
            language: Language::Es,
            positive_threshold: 0.10,
            negative_threshold: -0.10,
            noun_weight: 1.0,
            verb_weight: 1.0,
            adv_weight: 2.0,
            adj_weight: 0.0,
            initial_count: 1,
            precision: 3,
        }
    }
}

impl SenticConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.positive_threshold.is_finite() || !self.negative_threshold.is_finite() {
            return Err(SenticError::invalid_config("thresholds must be finite"));
        }

        if self.negative_threshold > 0.0 || self.positive_threshold < 0.0 {
            return Err(SenticError::invalid_config(format!(
                "thresholds must satisfy negative <= 0 <= positive, got {} and {}",
                self.negative_threshold, self.positive_threshold
            )));
        }

        let weights = [
            self.noun_weight,
            self.verb_weight,
            self.adv_weight,
            self.adj_weight,
        ];
        if weights.iter().any(|w| !w.is_finite()) {
            return Err(SenticError::invalid_config("category weights must be finite"));
        }

        if self.initial_count == 0 {
            return Err(SenticError::invalid_config("initial_count must be >= 1"));
        }

        if self.precision > 10 {
            return Err(SenticError::invalid_config("precision must be <= 10"));
        }

        Ok(())
    }

    /// Weight applied to a resolved chunk of `category`
    pub fn weight(&self, category: crate::types::ChunkCategory) -> f64 {
        use crate::types::ChunkCategory;
        match category {
            ChunkCategory::Noun => self.noun_weight,
            ChunkCategory::Verb => self.verb_weight,
            ChunkCategory::Adv => self.adv_weight,
            ChunkCategory::Adj => self.adj_weight,
        }
    }

    /// Round `value` to the configured number of decimal places, exact
    /// halves to the even digit
    pub fn round(&self, value: f64) -> f64 {
        let factor = 10f64.powi(self.precision as i32);
        (value * factor).round_ties_even() / factor
    }

    /// Builder method: set language
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Builder method: set both label thresholds
    pub fn with_thresholds(mut self, positive: f64, negative: f64) -> Self {
        self.positive_threshold = positive;
        self.negative_threshold = negative;
        self
    }

    /// Builder method: set the ADV weight
    pub fn with_adv_weight(mut self, weight: f64) -> Self {
        self.adv_weight = weight;
        self
    }

    /// Builder method: set the ADJ weight
    pub fn with_adj_weight(mut self, weight: f64) -> Self {
        self.adj_weight = weight;
        self
    }

    /// Builder method: set the initial counter
    pub fn with_initial_count(mut self, count: usize) -> Self {
        self.initial_count = count;
        self
    }

    /// Builder method: set rounding precision
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }
}
