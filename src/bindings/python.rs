use crate::config::ParserConfig;
use crate::parser::RelationParser;
use crate::store::{Region, Registry};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

#[pyclass(name = "_RelationParser")]
#[derive(Debug, Clone)]
pub struct PyRelationParser {
    inner: RelationParser,
}

#[pymethods]
impl PyRelationParser {
    /// `province_names` are the registry keys; attributes stay on the Python side.
    #[new]
    #[pyo3(signature = (lines, province_names, ignored_lines=None, parallel=false))]
    pub fn new(
        lines: Vec<String>,
        province_names: Vec<String>,
        ignored_lines: Option<Vec<String>>,
        parallel: bool,
    ) -> PyResult<Self> {
        let registry: Registry = province_names.into_iter().map(Region::new).collect();
        let mut config = ParserConfig { parallel, ..Default::default() };
        if let Some(ignored) = ignored_lines {
            config.ignored_lines = ignored;
        }
        RelationParser::parse_with(&lines, &registry, &config)
            .map(|inner| Self { inner })
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    pub fn naming_errors(&self) -> Vec<String> { self.inner.naming_errors() }
    pub fn relation_errors(&self) -> Vec<String> { self.inner.relation_errors() }
    pub fn report_naming_errors(&self) -> String { self.inner.report_naming_errors() }
    pub fn report_relation_errors(&self) -> String { self.inner.report_relation_errors() }
    pub fn is_consistent(&self) -> bool { self.inner.is_consistent() }

    /// Ordered `(province, [neighbours])` pairs.
    pub fn adjacency(&self) -> Vec<(String, Vec<String>)> {
        self.inner
            .adjacency()
            .iter()
            .map(|(region, neighbours)| {
                (region.name.clone(), neighbours.iter().map(|n| n.name.clone()).collect())
            })
            .collect()
    }

    pub fn neighbours_of(&self, name: &str) -> Option<Vec<String>> {
        self.inner
            .neighbours_of(name)
            .map(|ns| ns.iter().map(|n| n.name.clone()).collect())
    }

    pub fn __repr__(&self) -> String { self.inner.to_string() }
}
