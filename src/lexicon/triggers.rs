//! Discourse connectors and negation markers
//!
//! Both tables are ordered: the discourse scan stops at the first connector
//! (in table order) that occurs in the text, so earlier entries win.

use crate::config::Language;
use crate::errors::Result;
use serde::{Deserialize, Serialize};

const DISCOURSE_ES: &[&str] = &[
    "pero",
    "sin embargo",
    "no obstante",
    "aunque",
    "mientras que",
    "a pesar de",
    "sino",
];

const NEGATIVE_ES: &[&str] = &[
    "no ", "nunca", "jamás", "jamas", "tampoco", "ningún", "ninguna", "nada", "ni ", "sin ",
];

const DISCOURSE_EN: &[&str] = &[
    "but",
    "however",
    "nevertheless",
    "nonetheless",
    "although",
    "whereas",
    "even though",
];

const NEGATIVE_EN: &[&str] = &[
    "not", "n't", "never", "no ", "nothing", "nobody", "neither", "nor ", "without",
];

/// Static trigger word lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerTables {
    /// Discourse connectors, in priority order
    #[serde(default)]
    pub discourse: Vec<String>,
    /// Negation markers
    #[serde(default, alias = "negation")]
    pub negative: Vec<String>,
}

impl TriggerTables {
    /// Build tables from explicit lists
    pub fn new<S: Into<String>>(
        discourse: impl IntoIterator<Item = S>,
        negative: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            discourse: discourse.into_iter().map(Into::into).collect(),
            negative: negative.into_iter().map(Into::into).collect(),
        }
    }

    /// Built-in tables for a language
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::Es => Self::new(DISCOURSE_ES.iter().copied(), NEGATIVE_ES.iter().copied()),
            Language::En => Self::new(DISCOURSE_EN.iter().copied(), NEGATIVE_EN.iter().copied()),
        }
    }

    /// Parse `{"discourse": [...], "negative": [...]}`
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// First connector in table order that occurs in `text`, with its byte offset
    pub fn find_discourse<'a>(&'a self, text: &str) -> Option<(&'a str, usize)> {
        self.discourse
            .iter()
            .filter(|trigger| !trigger.is_empty())
            .find_map(|trigger| text.find(trigger.as_str()).map(|idx| (trigger.as_str(), idx)))
    }

    /// Whether `text` contains any negation marker (substring match)
    pub fn has_negation(&self, text: &str) -> bool {
        self.negative
            .iter()
            .any(|trigger| !trigger.is_empty() && text.contains(trigger.as_str()))
    }
}

impl Default for TriggerTables {
    fn default() -> Self {
        Self::for_language(Language::default())
    }
}
