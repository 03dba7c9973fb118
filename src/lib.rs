//! # sentic_polarity
//!
//! Concept-level sentiment polarity for short messages.
//!
//! A message is dependency-parsed by an [`NlpPipeline`], turned into
//! categorized candidate phrases by the [`ChunkExtractor`], looked up in a
//! SenticNet-style [`Lexicon`] and aggregated into a POSITIVE / NEGATIVE /
//! NEUTRAL judgment. Messages containing a discourse connector ("pero",
//! "but", ...) are split and their conjuncts merged by a coordination rule.
//!
//! ```no_run
//! use sentic_polarity::{HeuristicParser, Lexicon, SenticEngine, TriggerTables};
//!
//! let lexicon = Lexicon::from_path("senticnet_es.json")?;
//! let engine = SenticEngine::new(lexicon, TriggerTables::default(), HeuristicParser::default())?;
//! let result = engine.score_with_discourse("la comida es buena pero el servicio es lento");
//! println!("{} {}", result.label, result.value);
//! # Ok::<(), sentic_polarity::SenticError>(())
//! ```
//!
//! ## Features
//!
//! - **Pluggable parsing**: bring parses from any UD pipeline as JSON, or use
//!   the built-in heuristic parser
//! - **Explainable**: every result carries the trace of resolved concepts
//! - **Parallel batches**: `score_batch` fans out over `rayon`
//! - **Python bindings**: behind the `python` feature, via PyO3

pub mod chunk;
pub mod config;
pub mod errors;
pub mod lexicon;
pub mod nlp;
pub mod polarity;
pub mod types;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use config::{Language, SenticConfig};
pub use errors::{Result, SenticError};
pub use types::{
    Chunk, ChunkCategory, ConceptRecord, NounSpan, ParsedSentence, PolarityLabel, PolarityResult,
    PosTag, Sentics, Token, TraceEntry,
};

// Re-export main functionality
pub use chunk::{ChunkExtractor, ChunkGroups, ChunkMap, SkipReason, SkippedSpan};
pub use lexicon::{normalize_key, Lexicon, TriggerTables};
pub use nlp::{clean_text, HeuristicParser, NlpPipeline, PrecomputedPipeline, StopwordFilter};
pub use polarity::{
    coordinate, split_conjuncts, ConceptResolver, DiscourseCoordinator, PolarityAggregator,
    Resolved, SenticEngine,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Initialize the Python module
#[cfg(feature = "python")]
#[pymodule]
fn sentic_polarity(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::register_module(m)?;
    Ok(())
}
