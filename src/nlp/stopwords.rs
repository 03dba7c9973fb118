//! Stopword lists for the built-in languages

use crate::config::Language;
use rustc_hash::FxHashSet;

const STOPWORDS_ES: &[&str] = &[
    "a", "al", "algo", "ante", "como", "con", "contra", "cual", "cuando", "de", "del", "desde",
    "donde", "durante", "e", "el", "ella", "ellas", "ellos", "en", "entre", "era", "eran", "es",
    "esa", "esas", "ese", "eso", "esos", "esta", "estaba", "estado", "estan", "estar", "este",
    "esto", "estos", "está", "están", "fue", "fueron", "ha", "han", "hasta", "hay", "he", "la",
    "las", "le", "les", "lo", "los", "me", "mi", "mis", "mucho", "muy", "más", "nada", "ni", "no",
    "nos", "nosotros", "o", "otra", "otro", "para", "pero", "por", "porque", "que", "qué", "se",
    "ser", "si", "sin", "sobre", "son", "soy", "su", "sus", "también", "te", "tu", "tus", "un",
    "una", "unas", "uno", "unos", "usted", "y", "ya", "yo", "él",
];

const STOPWORDS_EN: &[&str] = &[
    "a", "about", "after", "all", "am", "an", "and", "any", "are", "as", "at", "be", "been",
    "before", "being", "but", "by", "can", "did", "do", "does", "for", "from", "had", "has",
    "have", "he", "her", "him", "his", "i", "if", "in", "into", "is", "it", "its", "just", "me",
    "my", "no", "nor", "not", "of", "on", "or", "our", "she", "so", "than", "that", "the",
    "their", "them", "these", "they", "this", "those", "to", "too", "us", "very", "was", "we",
    "were", "will", "with", "you", "your",
];

/// Case-insensitive stopword membership
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    words: FxHashSet<String>,
}

impl StopwordFilter {
    /// Built-in list for a language
    pub fn new(language: Language) -> Self {
        let list = match language {
            Language::Es => STOPWORDS_ES,
            Language::En => STOPWORDS_EN,
        };
        Self::from_words(list.iter().copied())
    }

    /// Build a filter from a custom list
    pub fn from_words<S: AsRef<str>>(words: impl IntoIterator<Item = S>) -> Self {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Check if `word` is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(word.to_lowercase().as_str())
    }

    /// Number of stopwords
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spanish_stopwords() {
        let filter = StopwordFilter::new(Language::Es);
        assert!(filter.is_stopword("el"));
        assert!(filter.is_stopword("Pero"));
        assert!(!filter.is_stopword("servicio"));
    }

    #[test]
    fn test_english_stopwords() {
        let filter = StopwordFilter::new(Language::En);
        assert!(filter.is_stopword("The"));
        assert!(!filter.is_stopword("service"));
    }

    #[test]
    fn test_custom_list() {
        let filter = StopwordFilter::from_words(["Foo"]);
        assert_eq!(filter.len(), 1);
        assert!(filter.is_stopword("foo"));
    }
}
