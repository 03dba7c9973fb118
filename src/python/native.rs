//! Native Python classes

use super::json::{to_json, to_py_err, PyPipeline};
use crate::config::{Language, SenticConfig};
use crate::lexicon::{Lexicon, TriggerTables};
use crate::nlp::HeuristicParser;
use crate::polarity::SenticEngine;
use pyo3::prelude::*;

/// Concept-level polarity engine
#[pyclass(name = "SenticEngine")]
pub struct PySenticEngine {
    inner: SenticEngine<PyPipeline>,
}

#[pymethods]
impl PySenticEngine {
    /// Build an engine from a lexicon JSON object.
    ///
    /// `parser`, when given, is called as `parser(text)` and must return the
    /// JSON array of parsed sentences; otherwise the built-in heuristic
    /// parser is used.
    #[new]
    #[pyo3(signature = (lexicon_json, language = "es", parser = None, triggers_json = None))]
    fn new(
        lexicon_json: &str,
        language: &str,
        parser: Option<Py<PyAny>>,
        triggers_json: Option<&str>,
    ) -> PyResult<Self> {
        let language: Language = language.parse().map_err(to_py_err)?;
        let lexicon = Lexicon::from_json_str(lexicon_json).map_err(to_py_err)?;
        let triggers = match triggers_json {
            Some(json) => TriggerTables::from_json_str(json).map_err(to_py_err)?,
            None => TriggerTables::for_language(language),
        };
        let pipeline = match parser {
            Some(callback) => PyPipeline::Callback(callback),
            None => PyPipeline::Heuristic(HeuristicParser::new(language)),
        };
        let config = SenticConfig::default().with_language(language);

        let inner =
            SenticEngine::with_config(lexicon, triggers, pipeline, config).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Score a message with discourse handling; returns the result as JSON
    fn score(&self, text: &str) -> PyResult<String> {
        to_json(&self.inner.score_with_discourse(text))
    }

    /// Score a message as a single span; returns the result as JSON
    fn score_flat(&self, text: &str) -> PyResult<String> {
        to_json(&self.inner.score(text))
    }

    /// Score many messages in parallel; returns a JSON array
    fn score_batch(&self, py: Python<'_>, texts: Vec<String>) -> PyResult<String> {
        let results = py.allow_threads(|| self.inner.score_batch(&texts));
        to_json(&results)
    }

    /// Look a concept up; returns its trace view as JSON, or None
    fn resolve(&self, concept: &str) -> PyResult<Option<String>> {
        self.inner
            .concept(concept)
            .map(|entry| to_json(&entry))
            .transpose()
    }

    fn __len__(&self) -> usize {
        self.inner.lexicon().len()
    }

    fn __repr__(&self) -> String {
        format!(
            "SenticEngine(language='{}', concepts={})",
            self.inner.config().language.code(),
            self.inner.lexicon().len()
        )
    }
}

/// Normalize text the way the lexicon fallback does
#[pyfunction]
#[pyo3(signature = (text))]
pub fn clean_text(text: &str) -> Option<String> {
    crate::nlp::clean_text(text)
}
