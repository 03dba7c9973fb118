//! The scoring engine
//!
//! [`SenticEngine`] owns the read-only lexicon, trigger tables and
//! configuration, plus the NLP collaborator. Every scoring call builds its
//! own chunk groups, seen set and trace, so one engine can serve many
//! threads at once.

use crate::config::SenticConfig;
use crate::errors::{Result, SenticError};
use crate::lexicon::{Lexicon, TriggerTables};
use crate::nlp::NlpPipeline;
use crate::polarity::aggregator::PolarityAggregator;
use crate::polarity::discourse::DiscourseCoordinator;
use crate::types::{ConceptRecord, PolarityResult, TraceEntry};
use rayon::prelude::*;
use std::sync::Arc;

/// Concept-level polarity engine
#[derive(Debug, Clone)]
pub struct SenticEngine<P> {
    lexicon: Arc<Lexicon>,
    triggers: TriggerTables,
    config: SenticConfig,
    pipeline: P,
}

impl<P: NlpPipeline> SenticEngine<P> {
    /// Create an engine with the default configuration.
    ///
    /// Fails with [`SenticError::EmptyLexicon`] when the lexicon holds no
    /// concept.
    pub fn new(lexicon: impl Into<Arc<Lexicon>>, triggers: TriggerTables, pipeline: P) -> Result<Self> {
        Self::with_config(lexicon, triggers, pipeline, SenticConfig::default())
    }

    /// Create an engine with an explicit configuration
    pub fn with_config(
        lexicon: impl Into<Arc<Lexicon>>,
        triggers: TriggerTables,
        pipeline: P,
        config: SenticConfig,
    ) -> Result<Self> {
        config.validate()?;
        let lexicon = lexicon.into();
        if lexicon.is_empty() {
            return Err(SenticError::empty_lexicon(
                "the engine needs at least one concept",
            ));
        }

        Ok(Self {
            lexicon,
            triggers,
            config,
            pipeline,
        })
    }

    /// Create an engine using the built-in trigger tables of the configured language
    pub fn for_language(
        lexicon: impl Into<Arc<Lexicon>>,
        pipeline: P,
        config: SenticConfig,
    ) -> Result<Self> {
        let triggers = TriggerTables::for_language(config.language);
        Self::with_config(lexicon, triggers, pipeline, config)
    }

    fn aggregator(&self) -> PolarityAggregator<'_, P> {
        PolarityAggregator::new(&self.lexicon, &self.triggers, &self.config, &self.pipeline)
    }

    /// Score a message, splitting it at a discourse connector when present.
    ///
    /// Empty or whitespace-only messages get a NEUTRAL, zero result.
    pub fn score_with_discourse(&self, text: &str) -> PolarityResult {
        let _span = tracing::debug_span!("score_with_discourse", len = text.len()).entered();
        if text.trim().is_empty() {
            return PolarityResult::neutral(text);
        }
        DiscourseCoordinator::new(&self.triggers, self.aggregator()).score(text)
    }

    /// Score a message as one span, without discourse splitting
    pub fn score(&self, text: &str) -> PolarityResult {
        let _span = tracing::debug_span!("score", len = text.len()).entered();
        if text.trim().is_empty() {
            return PolarityResult::neutral(text);
        }
        self.aggregator().score(text)
    }

    /// Look a concept up in the lexicon (spaces match underscores)
    pub fn resolve(&self, concept: &str) -> Option<&ConceptRecord> {
        self.lexicon.get(concept)
    }

    /// Full view of a concept, as it would appear in a trace
    pub fn concept(&self, concept: &str) -> Option<TraceEntry> {
        self.resolve(concept)
            .map(|record| TraceEntry::new(concept, record))
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn triggers(&self) -> &TriggerTables {
        &self.triggers
    }

    pub fn config(&self) -> &SenticConfig {
        &self.config
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }
}

impl<P: NlpPipeline + Sync> SenticEngine<P> {
    /// Score many messages in parallel; results keep the input order
    pub fn score_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<PolarityResult> {
        texts
            .par_iter()
            .map(|text| self.score_with_discourse(text.as_ref()))
            .collect()
    }
}
