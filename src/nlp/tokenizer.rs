//! Rule-based tokenizer, tagger and dependency attacher
//!
//! [`HeuristicParser`] is a fallback [`NlpPipeline`] for when no external
//! parser (spaCy via JSON or Python) is available. It segments text with
//! UAX #29 rules, guesses POS tags from function-word tables and suffixes,
//! and attaches every token to a nearby head. For accurate parses, feed the
//! engine real dependency trees through [`crate::nlp::json`].

use crate::config::Language;
use crate::errors::Result;
use crate::nlp::pipeline::NlpPipeline;
use crate::nlp::stopwords::StopwordFilter;
use crate::types::{ParsedSentence, PosTag, Token};
use unicode_segmentation::UnicodeSegmentation;

/// A heuristic dependency parser
#[derive(Debug, Clone)]
pub struct HeuristicParser {
    language: Language,
    stopwords: StopwordFilter,
    /// Minimum token length to consider
    min_token_length: usize,
}

impl Default for HeuristicParser {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl HeuristicParser {
    /// Create a parser for `language`
    pub fn new(language: Language) -> Self {
        Self {
            language,
            stopwords: StopwordFilter::new(language),
            min_token_length: 1,
        }
    }

    /// Set minimum token length
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_token_length = min_length;
        self
    }

    /// Replace the stopword list
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Parse `text` into sentences (the text is lowercased first)
    pub fn parse_text(&self, text: &str) -> Vec<ParsedSentence> {
        let lower = text.to_lowercase();
        let mut sentences = Vec::new();

        for sentence in lower.split_sentence_bounds() {
            if sentence.trim().is_empty() {
                continue;
            }

            let words: Vec<&str> = sentence
                .unicode_words()
                .filter(|w| w.chars().count() >= self.min_token_length)
                .filter(|w| w.chars().any(|c| c.is_alphanumeric()))
                .collect();
            if words.is_empty() {
                continue;
            }

            let tags: Vec<PosTag> = words.iter().map(|w| self.guess_pos(w)).collect();
            let heads = attach_heads(&tags);

            let tokens = words
                .iter()
                .zip(tags.iter())
                .zip(heads.iter())
                .map(|((word, &pos), &(head, dep))| {
                    let mut token = Token::new(*word, pos, head)
                        .with_lemma(self.basic_lemmatize(word))
                        .with_dep(dep);
                    token.is_stopword = self.stopwords.is_stopword(word);
                    token
                })
                .collect();

            sentences.push(ParsedSentence::new(tokens));
        }

        sentences
    }

    /// Basic heuristic POS tagging
    fn guess_pos(&self, word: &str) -> PosTag {
        if let Some(pos) = self.function_word_pos(word) {
            return pos;
        }

        if word
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == ',')
        {
            return PosTag::Numeral;
        }

        match self.language {
            Language::Es => guess_pos_es(word),
            Language::En => guess_pos_en(word),
        }
    }

    fn function_word_pos(&self, lower: &str) -> Option<PosTag> {
        match self.language {
            Language::Es => function_word_pos_es(lower),
            Language::En => function_word_pos_en(lower),
        }
    }

    /// Basic lemmatization; only English morphology is handled.
    fn basic_lemmatize(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        if self.language != Language::En {
            return lower;
        }

        if lower.ends_with("ies") && lower.len() > 4 {
            return format!("{}y", &lower[..lower.len() - 3]);
        }
        if lower.ends_with("es") && lower.len() > 3 {
            let stem = &lower[..lower.len() - 2];
            if stem.ends_with("ss")
                || stem.ends_with("sh")
                || stem.ends_with("ch")
                || stem.ends_with('x')
            {
                return stem.to_string();
            }
        }
        if lower.ends_with('s') && lower.len() > 3 && !lower.ends_with("ss") {
            return lower[..lower.len() - 1].to_string();
        }

        lower
    }
}

impl NlpPipeline for HeuristicParser {
    fn parse(&self, text: &str) -> Result<Vec<ParsedSentence>> {
        Ok(self.parse_text(text))
    }
}

fn function_word_pos_es(lower: &str) -> Option<PosTag> {
    let pos = match lower {
        "el" | "la" | "los" | "las" | "un" | "una" | "unos" | "unas" | "este" | "esta"
        | "estos" | "estas" | "ese" | "esa" | "esos" | "esas" | "mi" | "mis" | "tu" | "tus"
        | "su" | "sus" | "nuestro" | "nuestra" | "cada" | "todo" | "toda" | "todos" | "todas" => {
            PosTag::Determiner
        }
        "a" | "al" | "ante" | "bajo" | "con" | "contra" | "de" | "del" | "desde" | "en"
        | "entre" | "hacia" | "hasta" | "para" | "por" | "según" | "sin" | "sobre" | "tras" => {
            PosTag::Preposition
        }
        "y" | "e" | "o" | "u" | "pero" | "ni" | "que" | "sino" | "aunque" | "porque" | "si"
        | "mientras" => PosTag::Conjunction,
        "yo" | "tú" | "él" | "ella" | "nosotros" | "ellos" | "ellas" | "usted" | "ustedes"
        | "me" | "te" | "se" | "nos" | "le" | "les" | "lo" => PosTag::Pronoun,
        "no" | "muy" | "nunca" | "siempre" | "ya" | "también" | "tampoco" | "bien" | "mal"
        | "más" | "menos" | "jamás" | "casi" | "bastante" | "demasiado" | "tan" => PosTag::Adverb,
        "es" | "son" | "está" | "están" | "fue" | "fueron" | "era" | "eran" | "ser" | "estar"
        | "soy" | "somos" | "estoy" | "ha" | "han" | "he" | "hemos" | "hay" | "sido" => {
            PosTag::Auxiliary
        }
        "bueno" | "buena" | "buenos" | "buenas" | "buen" | "malo" | "mala" | "malos" | "malas"
        | "excelente" | "excelentes" | "pésimo" | "pésima" | "mejor" | "peor" | "gran"
        | "grande" | "terrible" | "horrible" | "increíble" | "amable" | "rápido" | "rápida"
        | "lento" | "lenta" | "caro" | "cara" | "barato" | "barata" | "feliz" | "triste" => {
            PosTag::Adjective
        }
        "hola" | "ay" | "uf" | "vaya" | "ojalá" | "bravo" => PosTag::Interjection,
        _ => return None,
    };
    Some(pos)
}

fn guess_pos_es(lower: &str) -> PosTag {
    if lower.ends_with("mente") {
        return PosTag::Adverb;
    }
    if lower.ends_with("ción")
        || lower.ends_with("sión")
        || lower.ends_with("dad")
        || lower.ends_with("tad")
        || lower.ends_with("miento")
        || lower.ends_with("aje")
    {
        return PosTag::Noun;
    }
    if ["oso", "osa", "osos", "osas", "ble", "bles", "ivo", "iva", "ísimo", "ísima"]
        .iter()
        .any(|suffix| lower.ends_with(suffix))
    {
        return PosTag::Adjective;
    }
    if ["ar", "er", "ir", "ando", "iendo", "aron", "ieron", "amos", "aba", "ó"]
        .iter()
        .any(|suffix| lower.ends_with(suffix))
        && lower.chars().count() > 3
    {
        return PosTag::Verb;
    }
    PosTag::Noun
}

fn function_word_pos_en(lower: &str) -> Option<PosTag> {
    let pos = match lower {
        "a" | "an" | "the" | "this" | "that" | "these" | "those" | "my" | "your" | "his"
        | "her" | "its" | "our" | "their" | "some" | "any" | "each" | "every" => {
            PosTag::Determiner
        }
        "and" | "or" | "but" | "nor" | "yet" | "if" | "because" | "while" | "though"
        | "although" | "when" | "unless" | "until" | "since" => PosTag::Conjunction,
        "of" | "to" | "in" | "for" | "on" | "with" | "at" | "from" | "by" | "about" | "as"
        | "into" | "like" | "through" | "after" | "over" | "between" | "out" | "against"
        | "during" | "without" | "before" | "under" | "around" | "among" => PosTag::Preposition,
        "i" | "you" | "he" | "she" | "it" | "we" | "they" | "me" | "him" | "us" | "them"
        | "myself" | "yourself" | "ourselves" | "themselves" => PosTag::Pronoun,
        "not" | "never" | "very" | "really" | "too" | "so" | "always" | "well" | "no" => {
            PosTag::Adverb
        }
        "is" | "are" | "was" | "were" | "be" | "been" | "am" | "has" | "have" | "had" => {
            PosTag::Auxiliary
        }
        "good" | "bad" | "great" | "excellent" | "poor" | "terrible" | "awful" | "amazing"
        | "nice" | "slow" | "fast" | "rude" | "kind" | "happy" | "sad" => PosTag::Adjective,
        "hello" | "wow" | "oh" | "ouch" | "hey" => PosTag::Interjection,
        _ => return None,
    };
    Some(pos)
}

fn guess_pos_en(lower: &str) -> PosTag {
    if lower.ends_with("ful")
        || lower.ends_with("less")
        || lower.ends_with("ous")
        || lower.ends_with("ive")
        || lower.ends_with("able")
        || lower.ends_with("ible")
    {
        return PosTag::Adjective;
    }
    if lower.ends_with("ing") || lower.ends_with("ed") || lower.ends_with("ize") {
        return PosTag::Verb;
    }
    if lower.ends_with("ly") {
        return PosTag::Adverb;
    }
    PosTag::Noun
}

fn is_nominal(pos: PosTag) -> bool {
    matches!(pos, PosTag::Noun | PosTag::ProperNoun | PosTag::Pronoun)
}

fn is_prenominal(pos: PosTag) -> bool {
    matches!(pos, PosTag::Determiner | PosTag::Adjective | PosTag::Numeral)
}

/// Pick a head and a dependency label for every tagged token.
///
/// The root is the first lexical verb, else the first auxiliary, else the
/// first noun, else the first token.
fn attach_heads(tags: &[PosTag]) -> Vec<(usize, &'static str)> {
    let root = tags
        .iter()
        .position(|&p| p == PosTag::Verb)
        .or_else(|| tags.iter().position(|&p| p == PosTag::Auxiliary))
        .or_else(|| tags.iter().position(|&p| p.is_noun()))
        .unwrap_or(0);

    let prev_verb = |i: usize| {
        (0..i)
            .rev()
            .find(|&j| matches!(tags[j], PosTag::Verb | PosTag::Auxiliary))
    };
    let next_verb = |i: usize| {
        (i + 1..tags.len()).find(|&j| matches!(tags[j], PosTag::Verb | PosTag::Auxiliary))
    };
    // next noun reachable over prenominal modifiers only
    let next_noun = |i: usize| {
        (i + 1..tags.len())
            .find(|&j| !is_prenominal(tags[j]))
            .filter(|&j| tags[j].is_noun())
    };

    (0..tags.len())
        .map(|i| {
            if i == root {
                return (i, "ROOT");
            }
            match tags[i] {
                PosTag::Determiner => next_noun(i).map_or((root, "dep"), |n| (n, "det")),
                PosTag::Numeral => next_noun(i).map_or((root, "dep"), |n| (n, "nummod")),
                PosTag::Preposition => next_noun(i).map_or((root, "dep"), |n| (n, "case")),
                PosTag::Adjective => {
                    if i > 0 && tags[i - 1].is_noun() {
                        (i - 1, "amod")
                    } else if let Some(n) = next_noun(i) {
                        (n, "amod")
                    } else if let Some(v) = prev_verb(i) {
                        (v, "xcomp")
                    } else {
                        (root, "dep")
                    }
                }
                PosTag::Adverb => {
                    let next = tags.get(i + 1).copied();
                    if matches!(
                        next,
                        Some(PosTag::Adjective | PosTag::Verb | PosTag::Adverb | PosTag::Auxiliary)
                    ) {
                        (i + 1, "advmod")
                    } else if let Some(v) = prev_verb(i) {
                        (v, "advmod")
                    } else {
                        (root, "advmod")
                    }
                }
                p if is_nominal(p) => {
                    if let Some(n) = governing_noun(tags, i) {
                        (n, "nmod")
                    } else if let Some(v) = prev_verb(i) {
                        (v, "obj")
                    } else if let Some(v) = next_verb(i) {
                        (v, "nsubj")
                    } else {
                        (root, "dep")
                    }
                }
                PosTag::Verb | PosTag::Auxiliary => (root, "conj"),
                PosTag::Conjunction => (root, "cc"),
                _ => (root, "dep"),
            }
        })
        .collect()
}

/// For "N1 (ADP) (DET|ADJ)* N2", the index of N1 governing N2.
fn governing_noun(tags: &[PosTag], i: usize) -> Option<usize> {
    let mut j = i;
    while j > 0 && is_prenominal(tags[j - 1]) {
        j -= 1;
    }
    if j == 0 || tags[j - 1] != PosTag::Preposition {
        return None;
    }
    let mut k = j - 1;
    while k > 0 {
        k -= 1;
        match tags[k] {
            PosTag::Noun | PosTag::ProperNoun => return Some(k),
            PosTag::Determiner | PosTag::Adjective | PosTag::Numeral => continue,
            _ => return None,
        }
    }
    None
}
