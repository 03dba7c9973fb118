//! Python bindings via PyO3

pub mod json;
pub mod native;

use pyo3::prelude::*;

/// Register all Python classes and functions
pub fn register_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    m.add_class::<native::PySenticEngine>()?;
    m.add_function(wrap_pyfunction!(native::clean_text, m)?)?;

    Ok(())
}
