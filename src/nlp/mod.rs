//! NLP collaborator: the pipeline trait and its built-in implementations

pub mod clean;
pub mod json;
pub mod pipeline;
pub mod stopwords;
pub mod tokenizer;

pub use clean::clean_text;
pub use json::PrecomputedPipeline;
pub use pipeline::NlpPipeline;
pub use stopwords::StopwordFilter;
pub use tokenizer::HeuristicParser;
