//! Province border validation.
//!
//! Parses `"NAME -> NAME, NAME"` adjacency lines against a region registry and
//! checks that every declared border is mutual. The two error logs (unresolved
//! names, one-sided borders) are reported, never repaired.

pub mod config;
pub mod display;
pub mod graph;
pub mod parser;
pub mod store;
pub mod validation;

#[cfg(feature = "python")]
mod bindings {
    pub mod python;
}

pub use config::ParserConfig;
pub use graph::{AdjacencyMap, Neighbours, RelationGraphBuilder};
pub use parser::RelationParser;
pub use store::{normalize, Region, Registry, INVALID_REGION_NAME};
pub use validation::{BorderIssue, IssueKind, MutualBorderValidator, RelationError};

// --- Python module (built by maturin with `--features python`) ---
#[cfg(feature = "python")]
use pyo3::prelude::*;

/// A simple function to confirm the Rust core is callable from Python.
#[cfg(feature = "python")]
#[pyfunction]
fn rust_core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Defines the `_core` Python module.
#[cfg(feature = "python")]
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(rust_core_version, m)?)?;
    m.add_class::<bindings::python::PyRelationParser>()?;
    Ok(())
}
