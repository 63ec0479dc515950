//! Error types for Sunshine.

use std::path::PathBuf;

use crate::model::ChoiceMode;

/// Result type alias for selection operations.
pub type SelectionResult<T> = std::result::Result<T, SelectionError>;

/// Result type alias for settings operations.
pub type SettingsResult<T> = std::result::Result<T, SettingsError>;

/// Errors raised by the selection tracker.
#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    /// The choice mode is recognised but has no defined behavior.
    ///
    /// This is a programming error on the caller's side, not a recoverable
    /// runtime condition.
    #[error("choice mode {mode:?} is not implemented by the selection tracker")]
    Unimplemented { mode: ChoiceMode },

    /// Saved selection state could not be encoded.
    #[error("failed to encode selection state: {0}")]
    Encode(#[source] serde_json::Error),

    /// Saved selection state could not be decoded.
    #[error("failed to decode selection state: {0}")]
    Decode(#[source] serde_json::Error),
}

impl SelectionError {
    /// Create an unimplemented-mode error.
    pub fn unimplemented(mode: ChoiceMode) -> Self {
        Self::Unimplemented { mode }
    }

    /// Returns `true` for errors that indicate a caller bug rather than bad data.
    pub fn is_programming_error(&self) -> bool {
        matches!(self, Self::Unimplemented { .. })
    }
}

/// Errors raised while loading or validating display settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// Settings file could not be read.
    #[error("failed to read settings '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings text is not valid TOML for the settings schema.
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    /// A field holds a value outside its allowed range.
    #[error("invalid value for setting '{field}': {message}")]
    Invalid { field: String, message: String },
}

impl SettingsError {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a validation error.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }
}
