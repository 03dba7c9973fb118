//! JSON interface for externally produced parses
//!
//! A spaCy (or any UD) pipeline can run upstream and hand its dependency
//! trees over as JSON. Head indices are relative to the sentence.
//!
//! ```json
//! [
//!   {
//!     "tokens": [
//!       {"text": "buen", "pos": "ADJ", "dep": "amod", "head": 1},
//!       {"text": "servicio", "pos": "NOUN", "dep": "ROOT", "head": 1}
//!     ],
//!     "noun_chunks": [{"start": 0, "end": 2, "root": 1}]
//!   }
//! ]
//! ```

use crate::errors::{Result, SenticError};
use crate::nlp::pipeline::NlpPipeline;
use crate::types::{NounSpan, ParsedSentence, PosTag, Token};
use rustc_hash::FxHashMap;
use serde::Deserialize;

/// Input token from JSON
#[derive(Debug, Clone, Deserialize)]
pub struct JsonToken {
    pub text: String,
    #[serde(default)]
    pub lemma: Option<String>,
    #[serde(default)]
    pub stem: Option<String>,
    pub pos: String,
    #[serde(default)]
    pub dep: String,
    pub head: usize,
    #[serde(default, alias = "is_stop")]
    pub is_stopword: bool,
    #[serde(default)]
    pub is_punct: bool,
}

impl From<JsonToken> for Token {
    fn from(jt: JsonToken) -> Self {
        let mut token = Token::new(jt.text, PosTag::from_spacy(&jt.pos), jt.head).with_dep(jt.dep);
        if let Some(lemma) = jt.lemma {
            token.lemma = lemma;
        }
        if let Some(stem) = jt.stem {
            token.stem = stem;
        }
        token.is_stopword = jt.is_stopword;
        token.is_punct = jt.is_punct || token.pos == PosTag::Punctuation;
        token
    }
}

/// Input sentence from JSON
#[derive(Debug, Clone, Deserialize)]
pub struct JsonSentence {
    pub tokens: Vec<JsonToken>,
    /// Noun chunks as produced by the parser; derived when absent
    #[serde(default)]
    pub noun_chunks: Option<Vec<NounSpan>>,
}

impl From<JsonSentence> for ParsedSentence {
    fn from(js: JsonSentence) -> Self {
        let sentence = ParsedSentence::new(js.tokens.into_iter().map(Token::from).collect());
        match js.noun_chunks {
            Some(spans) => sentence.with_noun_chunks(spans),
            None => sentence,
        }
    }
}

/// Parse a JSON array of sentences
pub fn sentences_from_json(json: &str) -> Result<Vec<ParsedSentence>> {
    let sentences: Vec<JsonSentence> = serde_json::from_str(json)?;
    Ok(sentences.into_iter().map(ParsedSentence::from).collect())
}

/// A pipeline answering from parses computed ahead of time.
///
/// Texts are matched after trimming surrounding whitespace; a text with no
/// stored parse yields [`SenticError::ParseUnavailable`].
#[derive(Debug, Clone, Default)]
pub struct PrecomputedPipeline {
    parses: FxHashMap<String, Vec<ParsedSentence>>,
}

impl PrecomputedPipeline {
    /// Create an empty pipeline
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the parse of `text`
    pub fn insert(&mut self, text: &str, sentences: Vec<ParsedSentence>) {
        self.parses.insert(text.trim().to_string(), sentences);
    }

    /// Builder form of [`PrecomputedPipeline::insert`]
    pub fn with_parse(mut self, text: &str, sentences: Vec<ParsedSentence>) -> Self {
        self.insert(text, sentences);
        self
    }

    /// Store the parse of `text` given as a JSON array of sentences
    pub fn insert_json(&mut self, text: &str, json: &str) -> Result<()> {
        let sentences = sentences_from_json(json)?;
        self.insert(text, sentences);
        Ok(())
    }

    /// Build from a JSON object mapping texts to arrays of sentences
    pub fn from_json_map(json: &str) -> Result<Self> {
        let raw: FxHashMap<String, Vec<JsonSentence>> = serde_json::from_str(json)?;
        let mut pipeline = Self::new();
        for (text, sentences) in raw {
            pipeline.insert(&text, sentences.into_iter().map(ParsedSentence::from).collect());
        }
        Ok(pipeline)
    }

    /// Number of stored texts
    pub fn len(&self) -> usize {
        self.parses.len()
    }

    /// Check if no parse is stored
    pub fn is_empty(&self) -> bool {
        self.parses.is_empty()
    }
}

impl NlpPipeline for PrecomputedPipeline {
    fn parse(&self, text: &str) -> Result<Vec<ParsedSentence>> {
        self.parses.get(text.trim()).cloned().ok_or_else(|| {
            SenticError::parse_unavailable(format!("no parse stored for '{}'", text.trim()))
        })
    }
}
