//! JSON bridge between Python parsers and the engine
//!
//! Python hands parses over as JSON strings (see [`crate::nlp::json`]) and
//! receives results back as JSON strings, which keeps the boundary cheap
//! and free of per-token Python objects.

use crate::errors::{Result, SenticError};
use crate::nlp::json::sentences_from_json;
use crate::nlp::{HeuristicParser, NlpPipeline};
use crate::types::ParsedSentence;
use pyo3::prelude::*;
use serde::Serialize;

/// The NLP collaborator behind a Python engine
pub enum PyPipeline {
    /// A Python callable `parse(text) -> str` returning the JSON sentence array
    Callback(Py<PyAny>),
    /// The built-in rule-based parser
    Heuristic(HeuristicParser),
}

impl NlpPipeline for PyPipeline {
    fn parse(&self, text: &str) -> Result<Vec<ParsedSentence>> {
        match self {
            PyPipeline::Heuristic(parser) => parser.parse(text),
            PyPipeline::Callback(callback) => {
                let json = Python::with_gil(|py| {
                    callback
                        .call1(py, (text,))
                        .and_then(|out| out.extract::<String>(py))
                })
                .map_err(|e| SenticError::parse_unavailable(e.to_string()))?;
                sentences_from_json(&json)
            }
        }
    }
}

/// Serialize a value for Python
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> PyResult<String> {
    serde_json::to_string(value).map_err(|e| to_py_err(e.into()))
}

/// Map a crate error onto a Python `ValueError`
pub fn to_py_err(err: SenticError) -> PyErr {
    pyo3::exceptions::PyValueError::new_err(err.to_string())
}
