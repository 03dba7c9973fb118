//! Lexicon store and trigger tables
//!
//! Both are built once and shared read-only by every scoring call.

pub mod store;
pub mod triggers;

pub use store::{normalize_key, Lexicon};
pub use triggers::TriggerTables;
