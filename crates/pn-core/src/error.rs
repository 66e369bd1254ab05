//! Error types for paramnormal

use thiserror::Error;

/// paramnormal error type
#[derive(Error, Debug)]
pub enum Error {
    /// A human parameter is missing, null, or cannot be translated.
    #[error("invalid argument for {family}: `{parameter}` {reason}")]
    InvalidArgument {
        /// Family being translated (snake_case name).
        family: String,
        /// Offending parameter name.
        parameter: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Keyword arguments do not match a family signature.
    #[error("binding error: {0}")]
    Binding(String),

    /// Value rejected by a backing distribution or bad input data
    #[error("Validation error: {0}")]
    Validation(String),

    /// Not implemented
    #[error("Not implemented: {0}")]
    NotImplemented(String),
}

impl Error {
    /// Shorthand for [`Error::InvalidArgument`].
    pub fn invalid_argument(
        family: impl Into<String>,
        parameter: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            family: family.into(),
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
