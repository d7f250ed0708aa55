//! Error types for theme storage, parsing, and configuration.

use thiserror::Error;

/// Failures raised by a [`crate::PreferenceStore`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The backing store cannot be reached at all (disabled, sandboxed, missing).
    #[error("preference storage unavailable: {detail}")]
    Unavailable {
        /// Host-provided failure detail.
        detail: String,
    },
    /// Reading a key failed.
    #[error("failed to read preference '{key}': {detail}")]
    Read {
        /// Key being read.
        key: String,
        /// Host-provided failure detail.
        detail: String,
    },
    /// Writing a key failed (quota, private browsing, ...).
    #[error("failed to write preference '{key}': {detail}")]
    Write {
        /// Key being written.
        key: String,
        /// Host-provided failure detail.
        detail: String,
    },
}

/// Failures raised while parsing a theme identifier strictly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// Value was neither `light` nor `dark`.
    #[error("unknown theme '{value}'")]
    UnknownTheme {
        /// Offending value.
        value: String,
    },
}

/// Failures raised while loading or validating a [`crate::ThemeConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The configuration document could not be decoded.
    #[error("invalid theme configuration document: {detail}")]
    Parse {
        /// Decoder error detail.
        detail: String,
    },
    /// A field held a value the toggle cannot work with.
    #[error("invalid value for '{field}': {reason}")]
    InvalidField {
        /// Field that failed validation.
        field: &'static str,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            detail: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_errors_name_the_key() {
        let err = StorageError::Write {
            key: "theme".to_string(),
            detail: "QuotaExceededError".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to write preference 'theme': QuotaExceededError"
        );
    }

    #[test]
    fn config_errors_render_field_and_reason() {
        let err = ConfigError::InvalidField {
            field: "dark_class",
            reason: "must not contain whitespace",
        };
        assert_eq!(
            err.to_string(),
            "invalid value for 'dark_class': must not contain whitespace"
        );
    }
}
