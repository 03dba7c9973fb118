//! Core types for sentic_polarity
//!
//! This module defines the data structures shared across the engine:
//! dependency-annotated tokens and sentences handed over by the NLP
//! collaborator, lexicon concept records, extracted chunks, and the
//! polarity result returned to callers.

use serde::{Deserialize, Serialize};

// ============================================================================
// Part of speech
// ============================================================================

/// Part-of-speech tags (Universal Dependencies tag set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    Noun,
    Verb,
    Auxiliary,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Preposition,
    Conjunction,
    Interjection,
    Numeral,
    Particle,
    Punctuation,
    Symbol,
    ProperNoun,
    Other,
}

impl PosTag {
    /// Check if this tag represents a noun (common or proper)
    pub fn is_noun(&self) -> bool {
        matches!(self, PosTag::Noun | PosTag::ProperNoun)
    }

    /// Check if this tag can head a noun chunk
    pub fn can_root_noun_chunk(&self) -> bool {
        matches!(self, PosTag::Noun | PosTag::ProperNoun | PosTag::Pronoun)
    }

    /// Parse from spaCy-style POS tag
    pub fn from_spacy(tag: &str) -> Self {
        match tag.to_uppercase().as_str() {
            "NOUN" => PosTag::Noun,
            "VERB" => PosTag::Verb,
            "AUX" => PosTag::Auxiliary,
            "ADJ" => PosTag::Adjective,
            "ADV" => PosTag::Adverb,
            "PRON" => PosTag::Pronoun,
            "DET" => PosTag::Determiner,
            "ADP" => PosTag::Preposition,
            "CCONJ" | "SCONJ" | "CONJ" => PosTag::Conjunction,
            "INTJ" => PosTag::Interjection,
            "NUM" => PosTag::Numeral,
            "PART" => PosTag::Particle,
            "PUNCT" => PosTag::Punctuation,
            "SYM" => PosTag::Symbol,
            "PROPN" => PosTag::ProperNoun,
            _ => PosTag::Other,
        }
    }

    /// Get the spaCy-style POS tag string for this enum.
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Noun => "NOUN",
            PosTag::Verb => "VERB",
            PosTag::Auxiliary => "AUX",
            PosTag::Adjective => "ADJ",
            PosTag::Adverb => "ADV",
            PosTag::Pronoun => "PRON",
            PosTag::Determiner => "DET",
            PosTag::Preposition => "ADP",
            PosTag::Conjunction => "CCONJ",
            PosTag::Interjection => "INTJ",
            PosTag::Numeral => "NUM",
            PosTag::Particle => "PART",
            PosTag::Punctuation => "PUNCT",
            PosTag::Symbol => "SYM",
            PosTag::ProperNoun => "PROPN",
            PosTag::Other => "X",
        }
    }
}

// ============================================================================
// Token & parsed sentence
// ============================================================================

/// A dependency-annotated token.
///
/// `head` and `children` are indices into the owning [`ParsedSentence`].
/// The sentence root is its own head.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The surface form
    pub text: String,
    /// The lemmatized form
    pub lemma: String,
    /// The stemmed form
    pub stem: String,
    /// Part-of-speech tag
    pub pos: PosTag,
    /// Dependency label (e.g. `nsubj`, `amod`, `ROOT`)
    pub dep: String,
    /// Index of the syntactic head
    pub head: usize,
    /// Indices of the syntactic children, in sentence order
    #[serde(default)]
    pub children: Vec<usize>,
    /// Whether this token is a stopword
    pub is_stopword: bool,
    /// Whether this token is punctuation
    pub is_punct: bool,
}

impl Token {
    /// Create a new token attached to `head`
    pub fn new(text: impl Into<String>, pos: PosTag, head: usize) -> Self {
        let text = text.into();
        let lower = text.to_lowercase();
        Self {
            lemma: lower.clone(),
            stem: lower,
            text,
            pos,
            dep: String::new(),
            head,
            children: Vec::new(),
            is_stopword: false,
            is_punct: pos == PosTag::Punctuation,
        }
    }

    /// Builder method: set the lemma
    pub fn with_lemma(mut self, lemma: impl Into<String>) -> Self {
        self.lemma = lemma.into();
        self
    }

    /// Builder method: set the dependency label
    pub fn with_dep(mut self, dep: impl Into<String>) -> Self {
        self.dep = dep.into();
        self
    }

    /// Builder method: mark as stopword
    pub fn stopword(mut self) -> Self {
        self.is_stopword = true;
        self
    }

}

/// A noun-phrase-rooted span of a sentence (token indices, `end` exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NounSpan {
    /// Start token index (inclusive)
    pub start: usize,
    /// End token index (exclusive)
    pub end: usize,
    /// Index of the span's syntactic root
    pub root: usize,
}

impl NounSpan {
    /// Create a new span
    pub fn new(start: usize, end: usize, root: usize) -> Self {
        Self { start, end, root }
    }

    /// Check the span is well-formed for a sentence of `len` tokens
    pub fn is_valid_for(&self, len: usize) -> bool {
        self.start <= self.root && self.root < self.end && self.end <= len
    }
}

/// One dependency-parsed sentence.
///
/// Deserialization goes through [`ParsedSentence::new`], so heads and
/// spans read from JSON are repaired the same way as built ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SentenceRepr")]
pub struct ParsedSentence {
    tokens: Vec<Token>,
    noun_chunks: Vec<NounSpan>,
}

#[derive(Deserialize)]
struct SentenceRepr {
    tokens: Vec<Token>,
    #[serde(default)]
    noun_chunks: Option<Vec<NounSpan>>,
}

impl From<SentenceRepr> for ParsedSentence {
    fn from(repr: SentenceRepr) -> Self {
        let sentence = ParsedSentence::new(repr.tokens);
        match repr.noun_chunks {
            Some(spans) => sentence.with_noun_chunks(spans),
            None => sentence,
        }
    }
}

impl ParsedSentence {
    /// Build a sentence from tokens.
    ///
    /// Heads pointing outside the sentence are re-attached to the token
    /// itself, children are rebuilt from the heads, and noun chunks are
    /// derived (see [`ParsedSentence::with_noun_chunks`] to supply them).
    pub fn new(mut tokens: Vec<Token>) -> Self {
        let len = tokens.len();
        for (idx, token) in tokens.iter_mut().enumerate() {
            if token.head >= len {
                token.head = idx;
            }
            token.children.clear();
        }
        for idx in 0..len {
            let head = tokens[idx].head;
            if head != idx {
                tokens[head].children.push(idx);
            }
        }

        let noun_chunks = derive_noun_chunks(&tokens);
        Self {
            tokens,
            noun_chunks,
        }
    }

    /// Replace the derived noun chunks; malformed spans are dropped.
    pub fn with_noun_chunks(mut self, spans: Vec<NounSpan>) -> Self {
        let len = self.tokens.len();
        self.noun_chunks = spans.into_iter().filter(|s| s.is_valid_for(len)).collect();
        self
    }

    /// The tokens of this sentence
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The noun-phrase-rooted spans of this sentence
    pub fn noun_chunks(&self) -> &[NounSpan] {
        &self.noun_chunks
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the sentence has no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The syntactic head of the token at `idx`
    pub fn head_of(&self, idx: usize) -> &Token {
        &self.tokens[self.tokens[idx].head]
    }

    /// The first token that is its own head
    pub fn root(&self) -> Option<usize> {
        self.tokens
            .iter()
            .enumerate()
            .find(|(idx, t)| t.head == *idx)
            .map(|(idx, _)| idx)
    }

    /// Lowercased, space-joined surface text of a span
    pub fn span_text(&self, span: &NounSpan) -> String {
        self.tokens[span.start..span.end]
            .iter()
            .map(|t| t.text.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Noun chunks: every NOUN/PROPN/PRON token, extended left over adjacent
/// non-stopword ADJ/NUM tokens that depend on it.
fn derive_noun_chunks(tokens: &[Token]) -> Vec<NounSpan> {
    let mut spans = Vec::new();
    for (idx, token) in tokens.iter().enumerate() {
        if !token.pos.can_root_noun_chunk() {
            continue;
        }
        let mut start = idx;
        while start > 0 {
            let prev = &tokens[start - 1];
            let modifier = matches!(prev.pos, PosTag::Adjective | PosTag::Numeral);
            if prev.head == idx && modifier && !prev.is_stopword && !prev.is_punct {
                start -= 1;
            } else {
                break;
            }
        }
        spans.push(NounSpan::new(start, idx + 1, idx));
    }
    spans
}

// ============================================================================
// Chunks
// ============================================================================

/// The category a chunk is registered under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChunkCategory {
    Noun,
    Verb,
    Adv,
    Adj,
}

impl ChunkCategory {
    /// All categories in scoring order
    pub const ALL: [ChunkCategory; 4] = [
        ChunkCategory::Noun,
        ChunkCategory::Verb,
        ChunkCategory::Adv,
        ChunkCategory::Adj,
    ];

    /// Upper-case label
    pub fn as_str(&self) -> &'static str {
        match self {
            ChunkCategory::Noun => "NOUN",
            ChunkCategory::Verb => "VERB",
            ChunkCategory::Adv => "ADV",
            ChunkCategory::Adj => "ADJ",
        }
    }
}

/// A candidate sentiment-bearing phrase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// Lowercased, space-joined surface text
    pub text: String,
    /// The category this chunk was registered under
    pub category: ChunkCategory,
    /// The (token text, POS) pairs composing the chunk
    pub parts: Vec<(String, PosTag)>,
}

impl Chunk {
    /// Build a chunk from its parts; the text is the lowercased parts joined by spaces
    pub fn from_parts(category: ChunkCategory, parts: Vec<(String, PosTag)>) -> Self {
        let parts: Vec<(String, PosTag)> = parts
            .into_iter()
            .map(|(text, pos)| (text.to_lowercase(), pos))
            .collect();
        let text = parts
            .iter()
            .map(|(t, _)| t.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            text,
            category,
            parts,
        }
    }
}

// ============================================================================
// Concept records
// ============================================================================

/// The four sentic dimensions of a concept
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Sentics {
    pub pleasantness: f64,
    pub attention: f64,
    pub sensitivity: f64,
    pub aptitude: f64,
}

/// The affective record a lexicon stores for a concept
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptRecord {
    pub sentics: Sentics,
    pub mood_tags: (String, String),
    pub polarity_value: f64,
    pub polarity_intensity: String,
    #[serde(default)]
    pub semantics: Vec<String>,
}

// ============================================================================
// Results
// ============================================================================

/// One uniquely resolved concept that contributed to a scoring call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEntry {
    /// The chunk text as it was resolved (after fallback cleaning, if any)
    pub text: String,
    pub polarity_value: f64,
    pub polarity_intensity: String,
    pub mood_tags: (String, String),
    pub sentics: Sentics,
    pub semantics: Vec<String>,
}

impl TraceEntry {
    /// Build a trace entry for `text` resolved to `record`
    pub fn new(text: impl Into<String>, record: &ConceptRecord) -> Self {
        Self {
            text: text.into(),
            polarity_value: record.polarity_value,
            polarity_intensity: record.polarity_intensity.clone(),
            mood_tags: record.mood_tags.clone(),
            sentics: record.sentics,
            semantics: record.semantics.clone(),
        }
    }
}

/// Final polarity label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PolarityLabel {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl PolarityLabel {
    /// Label a value: strictly above `positive` is POSITIVE, strictly
    /// below `negative` is NEGATIVE, anything else NEUTRAL.
    pub fn from_value(value: f64, positive: f64, negative: f64) -> Self {
        if value > positive {
            PolarityLabel::Positive
        } else if value < negative {
            PolarityLabel::Negative
        } else {
            PolarityLabel::Neutral
        }
    }

    /// Upper-case label
    pub fn as_str(&self) -> &'static str {
        match self {
            PolarityLabel::Positive => "POSITIVE",
            PolarityLabel::Negative => "NEGATIVE",
            PolarityLabel::Neutral => "NEUTRAL",
        }
    }
}

impl std::fmt::Display for PolarityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The polarity judgment for one message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolarityResult {
    /// The scored message
    pub message: String,
    pub label: PolarityLabel,
    pub value: f64,
    /// Resolved concepts, in resolution order
    pub trace: Vec<TraceEntry>,
    /// Semantically related concepts of the trace, underscores replaced by spaces
    pub words: Vec<String>,
}

impl PolarityResult {
    /// Create a result; `words` is derived from the trace
    pub fn new(
        message: impl Into<String>,
        label: PolarityLabel,
        value: f64,
        trace: Vec<TraceEntry>,
    ) -> Self {
        let words = trace
            .iter()
            .flat_map(|entry| entry.semantics.iter())
            .map(|concept| concept.replace('_', " "))
            .collect();
        Self {
            message: message.into(),
            label,
            value,
            trace,
            words,
        }
    }

    /// A NEUTRAL, zero-valued result with an empty trace
    pub fn neutral(message: impl Into<String>) -> Self {
        Self::new(message, PolarityLabel::Neutral, 0.0, Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_from_spacy() {
        assert_eq!(PosTag::from_spacy("NOUN"), PosTag::Noun);
        assert_eq!(PosTag::from_spacy("adp"), PosTag::Preposition);
        assert_eq!(PosTag::from_spacy("PROPN"), PosTag::ProperNoun);
        assert_eq!(PosTag::from_spacy("AUX"), PosTag::Auxiliary);
        assert_eq!(PosTag::from_spacy("whatever"), PosTag::Other);
        assert_eq!(PosTag::from_spacy("SCONJ").as_str(), "CCONJ");
    }

    #[test]
    fn test_children_rebuilt_from_heads() {
        // "servicio muy malo": malo <- servicio, muy <- malo
        let sentence = ParsedSentence::new(vec![
            Token::new("servicio", PosTag::Noun, 0),
            Token::new("muy", PosTag::Adverb, 2),
            Token::new("malo", PosTag::Adjective, 0),
        ]);

        assert_eq!(sentence.tokens()[0].children, vec![2]);
        assert_eq!(sentence.tokens()[2].children, vec![1]);
        assert_eq!(sentence.root(), Some(0));
        assert_eq!(sentence.head_of(1).text, "malo");
    }

    #[test]
    fn test_out_of_range_head_becomes_root() {
        let sentence = ParsedSentence::new(vec![Token::new("hola", PosTag::Interjection, 7)]);
        assert_eq!(sentence.tokens()[0].head, 0);
        assert_eq!(sentence.root(), Some(0));
    }

    #[test]
    fn test_deserialized_sentence_is_repaired() {
        let json = r#"{
            "tokens": [{
                "text": "servicio", "lemma": "servicio", "stem": "servici",
                "pos": "Noun", "dep": "ROOT", "head": 5,
                "children": [3], "is_stopword": false, "is_punct": false
            }],
            "noun_chunks": [{ "start": 0, "end": 4, "root": 2 }]
        }"#;
        let sentence: ParsedSentence = serde_json::from_str(json).unwrap();

        assert_eq!(sentence.tokens()[0].head, 0);
        assert!(sentence.tokens()[0].children.is_empty());
        assert_eq!(sentence.head_of(0).text, "servicio");
        assert!(sentence.noun_chunks().is_empty());
    }

    #[test]
    fn test_deserialized_sentence_derives_missing_chunks() {
        let json = r#"{ "tokens": [{
            "text": "casa", "lemma": "casa", "stem": "casa", "pos": "Noun",
            "dep": "ROOT", "head": 0, "is_stopword": false, "is_punct": false
        }] }"#;
        let sentence: ParsedSentence = serde_json::from_str(json).unwrap();
        assert_eq!(sentence.noun_chunks(), &[NounSpan::new(0, 1, 0)]);
    }

    #[test]
    fn test_derived_noun_chunks() {
        // "el gran servicio": el(DET) gran(ADJ) servicio(NOUN)
        let sentence = ParsedSentence::new(vec![
            Token::new("el", PosTag::Determiner, 2).stopword(),
            Token::new("Gran", PosTag::Adjective, 2),
            Token::new("servicio", PosTag::Noun, 2),
        ]);

        assert_eq!(sentence.noun_chunks(), &[NounSpan::new(1, 3, 2)]);
        assert_eq!(sentence.span_text(&sentence.noun_chunks()[0]), "gran servicio");
    }

    #[test]
    fn test_invalid_supplied_spans_dropped() {
        let sentence = ParsedSentence::new(vec![Token::new("casa", PosTag::Noun, 0)])
            .with_noun_chunks(vec![NounSpan::new(0, 1, 0), NounSpan::new(0, 3, 1)]);
        assert_eq!(sentence.noun_chunks().len(), 1);
    }

    #[test]
    fn test_chunk_from_parts_lowercases() {
        let chunk = Chunk::from_parts(
            ChunkCategory::Noun,
            vec![
                ("Excelente".to_string(), PosTag::Adjective),
                ("Servicio".to_string(), PosTag::Noun),
            ],
        );
        assert_eq!(chunk.text, "excelente servicio");
        assert_eq!(chunk.parts[0].0, "excelente");
    }

    #[test]
    fn test_label_thresholds() {
        assert_eq!(PolarityLabel::from_value(0.11, 0.1, -0.1), PolarityLabel::Positive);
        assert_eq!(PolarityLabel::from_value(0.1, 0.1, -0.1), PolarityLabel::Neutral);
        assert_eq!(PolarityLabel::from_value(-0.1, 0.1, -0.1), PolarityLabel::Neutral);
        assert_eq!(PolarityLabel::from_value(-0.2, 0.1, -0.1), PolarityLabel::Negative);
    }

    #[test]
    fn test_result_words_from_semantics() {
        let record = ConceptRecord {
            sentics: Sentics::default(),
            mood_tags: ("#joy".into(), "#surprise".into()),
            polarity_value: 0.5,
            polarity_intensity: "positive".into(),
            semantics: vec!["buen_trato".into(), "amabilidad".into()],
        };
        let result = PolarityResult::new(
            "msg",
            PolarityLabel::Positive,
            0.5,
            vec![TraceEntry::new("atencion", &record)],
        );
        assert_eq!(result.words, vec!["buen trato", "amabilidad"]);
    }

    #[test]
    fn test_label_serializes_uppercase() {
        let json = serde_json::to_string(&PolarityLabel::Negative).unwrap();
        assert_eq!(json, r#""NEGATIVE""#);
        let result = PolarityResult::neutral("");
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains(r#""label":"NEUTRAL""#));
    }
}
