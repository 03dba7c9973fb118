//! Polarity scoring: concept resolution, flat aggregation, discourse
//! coordination and the engine tying them together

pub mod aggregator;
pub mod discourse;
pub mod engine;
pub mod resolver;

pub use aggregator::PolarityAggregator;
pub use discourse::{coordinate, split_conjuncts, DiscourseCoordinator};
pub use engine::SenticEngine;
pub use resolver::{ConceptResolver, Resolved};
