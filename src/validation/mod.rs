//! The mutual-border validator and the issue types shared by both error logs.
pub mod error;
pub mod validator;

pub use error::{BorderIssue, IssueKind, RelationError};
pub use validator::MutualBorderValidator;
