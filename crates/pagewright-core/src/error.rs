//! Pipeline error model.

use pagewright_data::RecordError;
use thiserror::Error;

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that abort a pipeline run
///
/// Any of these means nothing was persisted.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The product input could not be loaded or canonicalized
    #[error(transparent)]
    Record(#[from] RecordError),

    /// The comparison record could not be supplied
    #[error("comparison record unavailable: {0}")]
    Comparison(#[source] RecordError),

    /// A page document could not be serialized
    #[error("failed to render {name}: {source}")]
    Render {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// An artifact name cannot be used as a file name in the output directory
    #[error("invalid artifact name '{name}': {reason}")]
    ArtifactName { name: String, reason: &'static str },

    /// An artifact could not be written
    #[error("failed to write {path}: {source}")]
    Persist {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl PipelineError {
    /// Whether the run failed because of the product input itself
    pub fn is_input_error(&self) -> bool {
        matches!(self, PipelineError::Record(err) if err.is_validation())
    }
}
