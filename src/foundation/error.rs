use std::path::PathBuf;

/// Convenience result type used across the crate.
pub type IntentionResult<T> = Result<T, IntentionError>;

/// Top-level error taxonomy used by the composer and its collaborators.
#[derive(thiserror::Error, Debug)]
pub enum IntentionError {
    /// Incomplete or malformed user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// A photo could not be decoded or oriented.
    #[error("invalid image: {0}")]
    InvalidImage(String),

    /// A requested font face file is not available.
    ///
    /// Recovered by the font fallback policy; only surfaces as a warning during composition.
    #[error("missing font '{name}' (looked in '{}')", path.display())]
    MissingFont {
        /// Conventional face name, e.g. `LiberationSans-Bold`.
        name: String,
        /// Path that was probed.
        path: PathBuf,
    },

    /// The finished canvas could not be encoded.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IntentionError {
    /// Build a [`IntentionError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`IntentionError::InvalidImage`] value.
    pub fn invalid_image(msg: impl Into<String>) -> Self {
        Self::InvalidImage(msg.into())
    }

    /// Build a [`IntentionError::MissingFont`] value.
    pub fn missing_font(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::MissingFont {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Build a [`IntentionError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
