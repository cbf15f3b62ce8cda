//! builder.rs
//! Turns `"NAME -> NAME, NAME"` lines into an adjacency mapping of registry regions.

use super::adjacency::{AdjacencyMap, Neighbours};
use crate::config::ParserConfig;
use crate::store::{normalize, Region, Registry};
use crate::validation::error::{BorderIssue, RelationError};

const RELATION_DELIMITER: &str = "->";
const NEIGHBOUR_SEPARATOR: char = ',';

/// The result of one build pass.
#[derive(Debug, Clone, Default)]
pub struct BuildOutput {
    pub adjacency: AdjacencyMap,
    /// Unresolved names in line order, left-hand side first, then neighbours
    /// left to right.
    pub naming_errors: Vec<BorderIssue>,
}

/// Resolves every token of every relation line against the registry.
///
/// Unknown names never stop the build: they are logged and replaced by the
/// invalid sentinel so the validator still sees the full edge set.
pub struct RelationGraphBuilder<'a> {
    registry: &'a Registry,
    config: &'a ParserConfig,
    naming_errors: Vec<BorderIssue>,
}

impl<'a> RelationGraphBuilder<'a> {
    pub fn new(registry: &'a Registry, config: &'a ParserConfig) -> Self {
        Self {
            registry,
            config,
            naming_errors: Vec::new(),
        }
    }

    /// Builds the adjacency mapping.
    ///
    /// # Errors
    /// `RelationError::MissingDelimiter` for the first kept line without `->`.
    #[tracing::instrument(skip_all, fields(lines = lines.len()))]
    pub fn build<S: AsRef<str>>(mut self, lines: &[S]) -> Result<BuildOutput, RelationError> {
        let mut adjacency = AdjacencyMap::new();
        let config = self.config;

        let kept = lines
            .iter()
            .map(AsRef::as_ref)
            .filter(|line| !config.is_ignored(line));

        for (i, line) in kept.enumerate() {
            let (region, neighbours) = self.parse_line(i + 1, line)?;
            if let Some(previous) = adjacency.insert(region, neighbours) {
                tracing::debug!(line = i + 1, dropped = previous.len(), "relation line replaces an earlier entry");
            }
        }

        tracing::debug!(
            regions = adjacency.len(),
            naming_errors = self.naming_errors.len(),
            "relation graph built"
        );

        Ok(BuildOutput {
            adjacency,
            naming_errors: self.naming_errors,
        })
    }

    fn parse_line(&mut self, line_no: usize, line: &str) -> Result<(Region, Neighbours), RelationError> {
        let Some((lhs, rhs)) = line.split_once(RELATION_DELIMITER) else {
            tracing::warn!(line = line_no, text = line, "relation line has no delimiter");
            return Err(RelationError::MissingDelimiter { line: line_no, text: line.to_string() });
        };

        let source = normalize(lhs);
        let region = self.resolve(&source, &source);

        // Neighbour failures name the left-hand lookup key, not the resolved region.
        let neighbours = rhs
            .split(NEIGHBOUR_SEPARATOR)
            .map(|token| self.resolve(&normalize(token), &source))
            .collect();

        Ok((region, neighbours))
    }

    fn resolve(&mut self, key: &str, source: &str) -> Region {
        match self.registry.lookup(key) {
            Some(region) => region.clone(),
            None => {
                tracing::warn!(source, token = key, "province name not in registry");
                self.naming_errors.push(BorderIssue::unresolved(source, key));
                Region::invalid()
            }
        }
    }
}
