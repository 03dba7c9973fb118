//! Concept resolution against the lexicon

use crate::lexicon::Lexicon;
use crate::nlp::NlpPipeline;
use crate::types::ConceptRecord;

/// A chunk that hit the lexicon
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<'a> {
    /// The text that matched: the chunk itself, or its cleaned form
    pub text: String,
    pub record: &'a ConceptRecord,
    /// Whether the match needed the clean-text retry
    pub via_fallback: bool,
}

/// Looks chunks up verbatim, then once more after clean-text normalization.
pub struct ConceptResolver<'a, P: ?Sized> {
    lexicon: &'a Lexicon,
    pipeline: &'a P,
}

impl<'a, P: NlpPipeline + ?Sized> ConceptResolver<'a, P> {
    pub fn new(lexicon: &'a Lexicon, pipeline: &'a P) -> Self {
        Self { lexicon, pipeline }
    }

    /// Resolve a chunk; `None` is a lexicon miss and contributes nothing.
    pub fn resolve(&self, chunk: &str) -> Option<Resolved<'a>> {
        if let Some(record) = self.lexicon.get(chunk) {
            return Some(Resolved {
                text: chunk.to_string(),
                record,
                via_fallback: false,
            });
        }

        let Some(cleaned) = self.pipeline.clean_text(chunk) else {
            tracing::debug!(chunk, "lexicon miss, nothing left after cleaning");
            return None;
        };
        match self.lexicon.get(&cleaned) {
            Some(record) => {
                tracing::debug!(chunk, cleaned = %cleaned, "lexicon hit after cleaning");
                Some(Resolved {
                    text: cleaned,
                    record,
                    via_fallback: true,
                })
            }
            None => {
                tracing::debug!(chunk, cleaned = %cleaned, "lexicon miss");
                None
            }
        }
    }
}
