//! Candidate phrase extraction from dependency parses

pub mod extractor;

pub use extractor::{ChunkExtractor, ChunkGroups, ChunkMap, SkipReason, SkippedSpan};
