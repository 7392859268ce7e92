//! Error types for the slider widget.

use thiserror::Error;

/// Errors raised by slider construction and value-setting operations.
///
/// Out-of-range values, a degenerate `min == max` and missing tick positions
/// are not errors: they are clamped or defaulted.
#[derive(Debug, Error)]
pub enum SliderError {
    /// A value was not numeric, or a collection contained a non-numeric element.
    #[error("Invalid input value '{input}' passed in")]
    InvalidInput {
        /// Display form of the rejected input.
        input: String,
    },

    /// Option name not in the option schema.
    #[error("Unknown slider option: {0}")]
    UnknownOption(String),

    /// Options document was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Options document was not valid YAML.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl SliderError {
    /// Build an [`SliderError::InvalidInput`] from anything displayable.
    pub fn invalid_input(input: impl std::fmt::Display) -> Self {
        Self::InvalidInput {
            input: input.to_string(),
        }
    }

    /// Check if this is an invalid-input error.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}
