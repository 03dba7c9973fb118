//! The NLP collaborator seam
//!
//! The engine never tags, lemmatizes or parses by itself. It asks an
//! [`NlpPipeline`] for dependency-parsed sentences and for a normalized
//! rendering of chunks that missed the lexicon.

use crate::errors::Result;
use crate::types::ParsedSentence;

/// Source of dependency parses and text normalization.
///
/// # Contract
///
/// - `parse` returns the sentences of `text` in order. An `Err` means the
///   span could not be parsed; the engine treats it as "no chunks".
/// - `clean_text` returns `None` when nothing usable is left.
/// - Implementations shared across threads (batch scoring) must be
///   reentrant.
pub trait NlpPipeline {
    /// Parse `text` into dependency-annotated sentences
    fn parse(&self, text: &str) -> Result<Vec<ParsedSentence>>;

    /// Normalize `text` for a second lexicon lookup
    fn clean_text(&self, text: &str) -> Option<String> {
        super::clean::clean_text(text)
    }
}

impl<T: NlpPipeline + ?Sized> NlpPipeline for &T {
    fn parse(&self, text: &str) -> Result<Vec<ParsedSentence>> {
        (**self).parse(text)
    }

    fn clean_text(&self, text: &str) -> Option<String> {
        (**self).clean_text(text)
    }
}

impl<T: NlpPipeline + ?Sized> NlpPipeline for Box<T> {
    fn parse(&self, text: &str) -> Result<Vec<ParsedSentence>> {
        (**self).parse(text)
    }

    fn clean_text(&self, text: &str) -> Option<String> {
        (**self).clean_text(text)
    }
}
