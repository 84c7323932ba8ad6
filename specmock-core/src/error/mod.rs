use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to parse specification as JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse specification as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Error)]
pub enum ReferenceError {
    #[error("unsupported external $ref: {0}")]
    ExternalRef(String),
    #[error("unresolvable $ref: {0}")]
    NotFound(String),
    #[error("cyclic $ref: {0}")]
    Cycle(String),
    #[error("malformed $ref (expected '#/...'): {0}")]
    Malformed(String),
}

/// A failure inside a structurally valid schema node. Unlike a
/// [`ParsingProblem`], this aborts the current parse instead of being
/// accumulated.
#[derive(Debug, Error)]
pub enum SpecificationError {
    #[error(transparent)]
    Reference(#[from] ReferenceError),
    #[error("invalid schema at {path}: {message}")]
    Schema { path: String, message: String },
}

impl SpecificationError {
    pub fn schema(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Schema {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A recoverable, data-dependent defect in the specification document.
/// Accumulated by the error handler; the entry that produced it is dropped
/// and parsing continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsingProblem {
    pub path: String,
    pub message: String,
}

impl ParsingProblem {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}
