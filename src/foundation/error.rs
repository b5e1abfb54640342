/// Convenience result type used across the sigil crate.
pub type SigilResult<T> = Result<T, SigilError>;

/// Top-level error taxonomy used by boundary APIs.
///
/// Feature extraction and path synthesis are total and never produce these;
/// only validation, the store, and preview rendering do.
#[derive(thiserror::Error, Debug)]
pub enum SigilError {
    /// Invalid caller-provided data (empty statement, unknown paradigm, duplicate id).
    #[error("validation error: {0}")]
    Validation(String),

    /// A store lookup did not match any record.
    #[error("not found: {0}")]
    NotFound(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors while building or rasterizing a preview.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SigilError {
    /// Build a [`SigilError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SigilError::NotFound`] value.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Build a [`SigilError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`SigilError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
