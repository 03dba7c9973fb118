//! Discourse splitting and coordination
//!
//! A message containing a discourse connector is split into a left and a
//! right conjunct. Each side is scored flat and the two values are merged
//! by [`coordinate`].

use crate::lexicon::TriggerTables;
use crate::nlp::NlpPipeline;
use crate::polarity::aggregator::PolarityAggregator;
use crate::types::{PolarityLabel, PolarityResult};

/// Split `text` at the first discourse connector, in table order.
///
/// When the connector sits within its own length of the start of the text
/// the split falls back to the first comma (the comma opens the right
/// conjunct); with no comma there is no split. The scan stops at the first
/// connector found either way.
pub fn split_conjuncts(triggers: &TriggerTables, text: &str) -> Option<(String, String)> {
    let (connector, offset) = triggers.find_discourse(text)?;

    let char_offset = text[..offset].chars().count();
    let at = if char_offset <= connector.chars().count() {
        text.find(',')?
    } else {
        offset
    };

    let (left, right) = text.split_at(at);
    tracing::debug!(connector, left, right, "discourse split");
    Some((left.to_string(), right.to_string()))
}

/// Merge the values of the two conjuncts; `None` means the side is absent.
///
/// The first matching rule wins:
///
/// | left        | right   | label    | value  |
/// |-------------|---------|----------|--------|
/// | > 0         | < 0     | POSITIVE | left   |
/// | ≠ 0 or none | > 0     | POSITIVE | right  |
/// | > 0         | none    | NEGATIVE | -1.0   |
/// | < 0         | none    | POSITIVE | 1.0    |
/// | < 0 or none | < 0     | NEGATIVE | right  |
/// | otherwise   |         | NEUTRAL  | 0.0    |
pub fn coordinate(left: Option<f64>, right: Option<f64>) -> (PolarityLabel, f64) {
    let l = left.unwrap_or(0.0);
    let r = right.unwrap_or(0.0);

    if l > 0.0 && r < 0.0 {
        (PolarityLabel::Positive, l)
    } else if (l != 0.0 || left.is_none()) && r > 0.0 {
        (PolarityLabel::Positive, r)
    } else if l > 0.0 && right.is_none() {
        (PolarityLabel::Negative, -1.0)
    } else if l < 0.0 && right.is_none() {
        (PolarityLabel::Positive, 1.0)
    } else if (l < 0.0 || left.is_none()) && r < 0.0 {
        (PolarityLabel::Negative, r)
    } else {
        (PolarityLabel::Neutral, 0.0)
    }
}

/// Discourse-aware scoring on top of a [`PolarityAggregator`]
pub struct DiscourseCoordinator<'a, P: ?Sized> {
    triggers: &'a TriggerTables,
    aggregator: PolarityAggregator<'a, P>,
}

impl<'a, P: NlpPipeline + ?Sized> DiscourseCoordinator<'a, P> {
    pub fn new(triggers: &'a TriggerTables, aggregator: PolarityAggregator<'a, P>) -> Self {
        Self {
            triggers,
            aggregator,
        }
    }

    /// Score `text`, splitting it at a discourse connector when one is found.
    ///
    /// Conjuncts are scored flat, never split again. The merged trace is the
    /// left trace followed by the right one; the value is the one chosen by
    /// [`coordinate`], not recomputed from the trace.
    pub fn score(&self, text: &str) -> PolarityResult {
        let Some((left, right)) = split_conjuncts(self.triggers, text) else {
            return self.aggregator.score(text);
        };

        let left = self.aggregator.score(&left);
        let right = self.aggregator.score(&right);
        let (label, value) = coordinate(Some(left.value), Some(right.value));

        let mut trace = left.trace;
        trace.extend(right.trace);
        PolarityResult::new(text, label, value, trace)
    }
}
