//! Error types shared by the segmentation and classification stages.
//!
//! The core is pure computation over an immutable raster, so there is nothing
//! to retry: any error aborts the run for that raster and is handed back to
//! the caller as-is.

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ChartError>;

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// Malformed input: bad raster dimensions, out-of-palette colors, or a
    /// sample window that does not fit the raster.
    #[error("precondition violated: {0}")]
    PreconditionViolation(String),

    /// Objects that disagree with each other, e.g. a primitive pointing at a
    /// label the labeling never produced, or a geometry query on a line whose
    /// bounding box has not been finalized.
    #[error("structural inconsistency: {0}")]
    StructuralInconsistency(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("image error on {path}: {source}")]
    Image {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("JSON error on {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ChartError {
    pub(crate) fn precondition(msg: impl Into<String>) -> Self {
        ChartError::PreconditionViolation(msg.into())
    }

    pub(crate) fn structural(msg: impl Into<String>) -> Self {
        ChartError::StructuralInconsistency(msg.into())
    }
}
