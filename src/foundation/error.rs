/// Convenience result type used across the public API.
pub type BezringResult<T> = Result<T, BezringError>;

/// Top-level error type for validation, rendering, and serialization failures.
///
/// The animation engine itself is infallible; errors only surface at the host edges
/// (strict configuration loading, raster setup, file output).
#[derive(thiserror::Error, Debug)]
pub enum BezringError {
    /// Invalid user-provided configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Raster backend failure.
    #[error("render error: {0}")]
    Render(String),

    /// Serialization or deserialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BezringError {
    /// Construct a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Construct a render error.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Construct a serialization error.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for BezringError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
