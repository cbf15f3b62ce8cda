//! Defines the error types for parsing and validating province relations.
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The specific category of a soft (recorded, non-fatal) issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IssueKind {
    /// A token did not match any registry entry.
    NameResolution,
    /// A declared neighbour never appears on the left-hand side of a line.
    MissingNeighbourEntry,
    /// A declared neighbour exists but does not list the region back.
    MissingMutualNeighbour,
}

/// A single entry in one of the two error logs.
///
/// `position` is the 1-based position of the source region in the adjacency
/// mapping; naming issues have none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BorderIssue {
    pub kind: IssueKind,
    pub position: Option<usize>,
    pub source: String,
    pub target: String,
}

impl BorderIssue {
    pub fn unresolved(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            kind: IssueKind::NameResolution,
            position: None,
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn missing_entry(position: usize, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            kind: IssueKind::MissingNeighbourEntry,
            position: Some(position),
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn missing_mutual(position: usize, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            kind: IssueKind::MissingMutualNeighbour,
            position: Some(position),
            source: source.into(),
            target: target.into(),
        }
    }
}

impl fmt::Display for BorderIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(position) = self.position {
            write!(f, "{}. ", position)?;
        }
        match self.kind {
            IssueKind::NameResolution => {
                write!(f, "Missing Province Lookup: {} -> {}", self.source, self.target)
            }
            IssueKind::MissingNeighbourEntry => {
                write!(f, "Missing Province Neighbour Entry for {} -> {}.", self.source, self.target)
            }
            IssueKind::MissingMutualNeighbour => {
                write!(f, "Missing Mutual Neighbour for {} -> {}.", self.source, self.target)
            }
        }
    }
}

/// Fatal errors. Anything listed here aborts the run instead of being logged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelationError {
    /// `line` is the 1-based index among the lines kept after filtering.
    #[error("Malformed relation line {line}: no '->' delimiter in {text:?}")]
    MissingDelimiter { line: usize, text: String },
    #[error("Invalid parser configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for RelationError {
    fn from(e: serde_json::Error) -> Self {
        RelationError::Config(e.to_string())
    }
}
