//! Chunk extraction
//!
//! Walks the noun-phrase-rooted spans of each parsed sentence and registers
//! candidate sentiment phrases under four categories (NOUN, VERB, ADV, ADJ)
//! following a fixed pattern grammar over the span root, its children and
//! its syntactic head.

use crate::types::{Chunk, ChunkCategory, NounSpan, ParsedSentence, PosTag};
use rustc_hash::FxHashMap;

/// Chunks of one category keyed by text.
///
/// Iteration follows first-registration order. Registering a key again
/// replaces the stored chunk in place (last write wins).
#[derive(Debug, Clone, Default)]
pub struct ChunkMap {
    index: FxHashMap<String, usize>,
    chunks: Vec<Chunk>,
}

impl ChunkMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a chunk, replacing any chunk with the same text
    pub fn insert(&mut self, chunk: Chunk) {
        match self.index.get(&chunk.text) {
            Some(&pos) => self.chunks[pos] = chunk,
            None => {
                self.index.insert(chunk.text.clone(), self.chunks.len());
                self.chunks.push(chunk);
            }
        }
    }

    /// Look up a chunk by text
    pub fn get(&self, text: &str) -> Option<&Chunk> {
        self.index.get(text).map(|&pos| &self.chunks[pos])
    }

    /// Check if a chunk with this text is registered
    pub fn contains(&self, text: &str) -> bool {
        self.index.contains_key(text)
    }

    /// Registered chunks in first-registration order
    pub fn iter(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.iter()
    }

    /// Registered chunk texts in first-registration order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.chunks.iter().map(|c| c.text.as_str())
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

/// The four chunk groups produced for one text
#[derive(Debug, Clone, Default)]
pub struct ChunkGroups {
    pub noun: ChunkMap,
    pub verb: ChunkMap,
    pub adv: ChunkMap,
    pub adj: ChunkMap,
}

impl ChunkGroups {
    /// The group for a category
    pub fn group(&self, category: ChunkCategory) -> &ChunkMap {
        match category {
            ChunkCategory::Noun => &self.noun,
            ChunkCategory::Verb => &self.verb,
            ChunkCategory::Adv => &self.adv,
            ChunkCategory::Adj => &self.adj,
        }
    }

    fn group_mut(&mut self, category: ChunkCategory) -> &mut ChunkMap {
        match category {
            ChunkCategory::Noun => &mut self.noun,
            ChunkCategory::Verb => &mut self.verb,
            ChunkCategory::Adv => &mut self.adv,
            ChunkCategory::Adj => &mut self.adj,
        }
    }

    /// All chunks, NOUN group first, then VERB, ADV and ADJ
    pub fn iter(&self) -> impl Iterator<Item = &Chunk> {
        ChunkCategory::ALL
            .into_iter()
            .flat_map(move |category| self.group(category).iter())
    }

    /// Total number of chunks across groups
    pub fn len(&self) -> usize {
        self.noun.len() + self.verb.len() + self.adv.len() + self.adj.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn register(&mut self, categories: &[ChunkCategory], parts: Vec<(String, PosTag)>) {
        for &category in categories {
            self.group_mut(category)
                .insert(Chunk::from_parts(category, parts.clone()));
        }
    }
}

/// Why a noun-chunk span produced nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Stopword,
    Punctuation,
    Pronoun,
}

/// A noun-chunk span rejected before pattern matching
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedSpan {
    /// Lowercased span text
    pub text: String,
    pub reason: SkipReason,
}

/// Pattern-grammar chunk extractor
#[derive(Debug, Clone, Copy, Default)]
pub struct ChunkExtractor;

impl ChunkExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract the chunk groups of a parsed text
    pub fn extract(&self, sentences: &[ParsedSentence]) -> ChunkGroups {
        self.extract_into(sentences, None)
    }

    /// Extract with an optional diagnostics sink.
    ///
    /// When `skipped` is `Some`, every span rejected because its root is a
    /// stopword, punctuation or a pronoun is recorded there.
    pub fn extract_into(
        &self,
        sentences: &[ParsedSentence],
        mut skipped: Option<&mut Vec<SkippedSpan>>,
    ) -> ChunkGroups {
        let mut groups = ChunkGroups::default();
        for sentence in sentences {
            for span in sentence.noun_chunks() {
                if let Some(reason) = skip_reason(sentence, span) {
                    if let Some(sink) = skipped.as_deref_mut() {
                        sink.push(SkippedSpan {
                            text: sentence.span_text(span),
                            reason,
                        });
                    }
                    continue;
                }
                extract_span(sentence, span, &mut groups);
            }
        }
        groups
    }
}

fn skip_reason(sentence: &ParsedSentence, span: &NounSpan) -> Option<SkipReason> {
    let root = &sentence.tokens()[span.root];
    if root.is_stopword {
        Some(SkipReason::Stopword)
    } else if root.is_punct {
        Some(SkipReason::Punctuation)
    } else if root.pos == PosTag::Pronoun {
        Some(SkipReason::Pronoun)
    } else {
        None
    }
}

fn extract_span(sentence: &ParsedSentence, span: &NounSpan, groups: &mut ChunkGroups) {
    use ChunkCategory::{Adj, Adv, Noun, Verb};

    let tokens = sentence.tokens();
    let root = &tokens[span.root];
    let chunk = (sentence.span_text(span), root.pos);
    let children: Vec<(String, PosTag)> = root
        .children
        .iter()
        .map(|&idx| (tokens[idx].text.to_lowercase(), tokens[idx].pos))
        .collect();

    match root.pos {
        PosTag::Noun => {
            groups.register(&[Noun], vec![chunk.clone()]);
            for child in &children {
                match child.1 {
                    PosTag::Adjective => {
                        groups.register(&[Noun, Adj], vec![child.clone(), chunk.clone()])
                    }
                    PosTag::Preposition => {
                        groups.register(&[Noun], vec![child.clone(), chunk.clone()])
                    }
                    _ => {}
                }
            }
        }
        PosTag::ProperNoun | PosTag::Pronoun => {
            for child in children.iter().filter(|c| c.1 == PosTag::Noun) {
                groups.register(&[Noun], vec![chunk.clone(), child.clone()]);
            }
        }
        PosTag::Adjective => {
            groups.register(&[Adj], vec![chunk.clone()]);
            for child in children.iter().filter(|c| c.1 == PosTag::Noun) {
                groups.register(&[Adj], vec![chunk.clone(), child.clone()]);
            }
        }
        _ => {}
    }

    // Compositions through the head; a sentence root is its own head
    let head_token = sentence.head_of(span.root);
    let head = (head_token.text.to_lowercase(), head_token.pos);
    for child in &children {
        match (head.1, child.1) {
            (PosTag::Noun, PosTag::Preposition) => {
                groups.register(&[Noun], triple(&head, child, &chunk))
            }
            (PosTag::Adjective, PosTag::Adjective) => {
                groups.register(&[Noun, Adj], triple(&head, child, &chunk))
            }
            (PosTag::Verb, PosTag::Adjective) => {
                groups.register(&[Verb], triple(&head, &chunk, child))
            }
            (PosTag::Verb, PosTag::Preposition) => {
                groups.register(&[Verb], triple(&head, child, &chunk))
            }
            (PosTag::Adverb, PosTag::Adverb) => {
                groups.register(&[Adv], triple(&head, child, &chunk))
            }
            (PosTag::Adverb, PosTag::Adjective) => {
                groups.register(&[Adv], triple(&head, &chunk, child))
            }
            _ => {}
        }
    }
}

type Part = (String, PosTag);

fn triple(first: &Part, second: &Part, third: &Part) -> Vec<Part> {
    vec![first.clone(), second.clone(), third.clone()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Token;

    /// "el producto es bueno"
    fn producto_es_bueno() -> ParsedSentence {
        ParsedSentence::new(vec![
            Token::new("el", PosTag::Determiner, 1).stopword(),
            Token::new("producto", PosTag::Noun, 2),
            Token::new("es", PosTag::Verb, 2).stopword(),
            Token::new("bueno", PosTag::Adjective, 1),
        ])
    }

    #[test]
    fn test_chunk_map_last_write_wins() {
        let mut map = ChunkMap::new();
        map.insert(Chunk::from_parts(
            ChunkCategory::Noun,
            vec![("a".into(), PosTag::Noun)],
        ));
        map.insert(Chunk::from_parts(
            ChunkCategory::Noun,
            vec![("b".into(), PosTag::Noun)],
        ));
        map.insert(Chunk::from_parts(
            ChunkCategory::Noun,
            vec![("a".into(), PosTag::ProperNoun)],
        ));

        assert_eq!(map.len(), 2);
        assert_eq!(map.texts().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(map.get("a").unwrap().parts[0].1, PosTag::ProperNoun);
    }

    #[test]
    fn test_noun_root_with_adjective_child() {
        let groups = ChunkExtractor::new().extract(&[producto_es_bueno()]);

        assert_eq!(
            groups.noun.texts().collect::<Vec<_>>(),
            vec!["producto", "bueno producto"]
        );
        assert_eq!(groups.adj.texts().collect::<Vec<_>>(), vec!["bueno producto"]);
        // head "es" is a VERB with an ADJ child of the root
        assert_eq!(
            groups.verb.texts().collect::<Vec<_>>(),
            vec!["es producto bueno"]
        );
        assert!(groups.adv.is_empty());
        assert_eq!(groups.len(), 4);
    }

    #[test]
    fn test_chunk_parts_trace_tokens() {
        let groups = ChunkExtractor::new().extract(&[producto_es_bueno()]);
        let chunk = groups.verb.get("es producto bueno").unwrap();
        assert_eq!(chunk.category, ChunkCategory::Verb);
        assert_eq!(
            chunk.parts,
            vec![
                ("es".to_string(), PosTag::Verb),
                ("producto".to_string(), PosTag::Noun),
                ("bueno".to_string(), PosTag::Adjective),
            ]
        );
    }

    #[test]
    fn test_noun_root_with_adposition_under_noun_head() {
        // "calidad de servicio": servicio <- calidad, "de" attached to servicio
        let sentence = ParsedSentence::new(vec![
            Token::new("Calidad", PosTag::Noun, 0),
            Token::new("de", PosTag::Preposition, 2).stopword(),
            Token::new("servicio", PosTag::Noun, 0),
        ]);
        let groups = ChunkExtractor::new().extract(&[sentence]);

        assert!(groups.noun.contains("calidad"));
        assert!(groups.noun.contains("servicio"));
        assert!(groups.noun.contains("de servicio"));
        assert!(groups.noun.contains("calidad de servicio"));
        assert!(groups.verb.is_empty());
    }

    #[test]
    fn test_verb_head_with_adposition() {
        // "habló con atención": atención <- habló, "con" attached to atención
        let sentence = ParsedSentence::new(vec![
            Token::new("habló", PosTag::Verb, 0),
            Token::new("con", PosTag::Preposition, 2),
            Token::new("atención", PosTag::Noun, 0),
        ]);
        let groups = ChunkExtractor::new().extract(&[sentence]);

        assert_eq!(
            groups.verb.texts().collect::<Vec<_>>(),
            vec!["habló con atención"]
        );
    }

    #[test]
    fn test_proper_noun_root_with_noun_child() {
        let sentence = ParsedSentence::new(vec![
            Token::new("Madrid", PosTag::ProperNoun, 0),
            Token::new("ciudad", PosTag::Noun, 0),
        ]);
        let groups = ChunkExtractor::new().extract(&[sentence]);

        assert!(groups.noun.contains("madrid ciudad"));
        assert!(groups.noun.contains("ciudad"));
        assert!(!groups.noun.contains("madrid"));
    }

    #[test]
    fn test_adjective_root_span() {
        let sentence = ParsedSentence::new(vec![
            Token::new("amable", PosTag::Adjective, 0),
            Token::new("gente", PosTag::Noun, 0),
        ])
        .with_noun_chunks(vec![NounSpan::new(0, 1, 0)]);
        let groups = ChunkExtractor::new().extract(&[sentence]);

        assert_eq!(
            groups.adj.texts().collect::<Vec<_>>(),
            vec!["amable", "amable gente"]
        );
        assert!(groups.noun.is_empty());
    }

    #[test]
    fn test_adverb_head_patterns() {
        // root noun "precio" hangs off an adverb that is its own head
        let sentence = ParsedSentence::new(vec![
            Token::new("muy", PosTag::Adverb, 0),
            Token::new("realmente", PosTag::Adverb, 2),
            Token::new("precio", PosTag::Noun, 0),
            Token::new("justo", PosTag::Adjective, 2),
        ]);
        let groups = ChunkExtractor::new().extract(&[sentence]);

        assert_eq!(
            groups.adv.texts().collect::<Vec<_>>(),
            vec!["muy realmente precio", "muy precio justo"]
        );
    }

    #[test]
    fn test_skipped_spans_are_reported() {
        let sentence = ParsedSentence::new(vec![
            Token::new("yo", PosTag::Pronoun, 1),
            Token::new("vi", PosTag::Verb, 1),
            Token::new("algo", PosTag::Noun, 1).stopword(),
        ]);

        let mut skipped = Vec::new();
        let groups = ChunkExtractor::new().extract_into(&[sentence], Some(&mut skipped));

        assert!(groups.is_empty());
        assert_eq!(
            skipped,
            vec![
                SkippedSpan {
                    text: "yo".into(),
                    reason: SkipReason::Pronoun
                },
                SkippedSpan {
                    text: "algo".into(),
                    reason: SkipReason::Stopword
                },
            ]
        );
    }

    #[test]
    fn test_interjection_only_yields_nothing() {
        let sentence = ParsedSentence::new(vec![Token::new("¡ay!", PosTag::Interjection, 0)]);
        let groups = ChunkExtractor::new().extract(&[sentence]);
        assert!(groups.is_empty());
    }

    #[test]
    fn test_groups_iterate_in_category_order() {
        let groups = ChunkExtractor::new().extract(&[producto_es_bueno()]);
        let categories: Vec<_> = groups.iter().map(|c| c.category).collect();
        assert_eq!(
            categories,
            vec![
                ChunkCategory::Noun,
                ChunkCategory::Noun,
                ChunkCategory::Verb,
                ChunkCategory::Adj
            ]
        );
    }
}
