//! Parser settings.
use crate::validation::error::RelationError;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Lines whose exact text matches one of these are dropped before parsing
    /// and do not advance any line counter.
    pub ignored_lines: Vec<String>,
    /// Run the mutual-border pass on the rayon pool. Output is identical.
    pub parallel: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { ignored_lines: vec![String::new()], parallel: false }
    }
}

impl ParserConfig {
    pub fn from_json(json: &str) -> Result<Self, RelationError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn is_ignored(&self, line: &str) -> bool {
        self.ignored_lines.iter().any(|ignored| ignored == line)
    }
}
