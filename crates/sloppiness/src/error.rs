//! Errors for the text and config surfaces.

use thiserror::Error;

/// Failure to turn user-supplied text into a [`crate::Sloppiness`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SloppinessError {
    #[error("unknown sloppiness: \"{0}\"")]
    UnknownFlag(String),

    #[error("invalid sloppiness config: {0}")]
    Config(String),
}

impl From<toml::de::Error> for SloppinessError {
    fn from(err: toml::de::Error) -> Self {
        SloppinessError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for SloppinessError {
    fn from(err: toml::ser::Error) -> Self {
        SloppinessError::Config(err.to_string())
    }
}
