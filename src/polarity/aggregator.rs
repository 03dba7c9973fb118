//! Flat polarity scoring of a single span
//!
//! Every chunk of every group is resolved; each concept resolved for the
//! first time in the call bumps the counter and adds its weighted polarity
//! to the running total. The score is `round(total / counter)`.

use crate::chunk::{ChunkExtractor, ChunkGroups};
use crate::config::SenticConfig;
use crate::lexicon::{Lexicon, TriggerTables};
use crate::nlp::NlpPipeline;
use crate::polarity::resolver::ConceptResolver;
use crate::types::{ChunkCategory, PolarityLabel, PolarityResult, TraceEntry};
use rustc_hash::FxHashSet;

/// Scores text without discourse splitting
pub struct PolarityAggregator<'a, P: ?Sized> {
    lexicon: &'a Lexicon,
    triggers: &'a TriggerTables,
    config: &'a SenticConfig,
    pipeline: &'a P,
}

impl<'a, P: NlpPipeline + ?Sized> PolarityAggregator<'a, P> {
    pub fn new(
        lexicon: &'a Lexicon,
        triggers: &'a TriggerTables,
        config: &'a SenticConfig,
        pipeline: &'a P,
    ) -> Self {
        Self {
            lexicon,
            triggers,
            config,
            pipeline,
        }
    }

    /// Parse and score `text`; a parse failure counts as "no chunks"
    pub fn score(&self, text: &str) -> PolarityResult {
        let sentences = match self.pipeline.parse(text) {
            Ok(sentences) => sentences,
            Err(err) => {
                tracing::warn!(error = %err, "could not parse span, scoring it as empty");
                Vec::new()
            }
        };
        let groups = ChunkExtractor::new().extract(&sentences);
        self.score_groups(text, &groups)
    }

    /// Score already extracted chunk groups
    pub fn score_groups(&self, message: &str, groups: &ChunkGroups) -> PolarityResult {
        let resolver = ConceptResolver::new(self.lexicon, self.pipeline);
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut trace = Vec::new();
        let mut counter = self.config.initial_count;
        let mut total = 0.0;

        for chunk in groups.iter() {
            let Some(hit) = resolver.resolve(&chunk.text) else {
                continue;
            };
            if !seen.insert(hit.text.clone()) {
                continue;
            }

            counter += 1;
            let mut weight = self.config.weight(chunk.category);
            if chunk.category == ChunkCategory::Adv && self.triggers.has_negation(&hit.text) {
                weight = -weight;
            }
            total += weight * hit.record.polarity_value;
            trace.push(TraceEntry::new(hit.text, hit.record));
        }

        let value = self.config.round(total / counter as f64);
        let label = PolarityLabel::from_value(
            value,
            self.config.positive_threshold,
            self.config.negative_threshold,
        );
        tracing::debug!(total, counter, value, %label, "scored span");
        PolarityResult::new(message, label, value, trace)
    }
}
