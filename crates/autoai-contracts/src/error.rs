//! Error types for the AutoAI demo workspace.
//!
//! The view models never fail: empty submissions and unknown scenario ids
//! are ignored. Errors only arise at the edges, where configuration is
//! loaded, command-line arguments are resolved, the catalog is verified,
//! or the terminal is driven.

use thiserror::Error;

/// The unified error type for the AutoAI crates.
#[derive(Debug, Error)]
pub enum AutoAiError {
    /// A configuration document is missing, malformed, or fails validation.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// A page identifier did not match any navigation entry.
    #[error("unknown page '{name}'")]
    UnknownPage { name: String },

    /// A scenario identifier did not match any catalog scenario.
    ///
    /// Only raised where the caller must resolve an id up front (CLI,
    /// configuration). The scenario selector itself treats unknown ids as
    /// a no-op.
    #[error("unknown scenario '{id}'")]
    UnknownScenario { id: String },

    /// A scenario selector was built over an empty scenario set.
    #[error("scenario catalog is empty")]
    EmptyCatalog,

    /// One or more catalog records are not well-formed.
    #[error("catalog verification failed: {reason}")]
    VerificationFailed { reason: String },

    /// A record could not be rendered as JSON.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },

    /// Setting up, drawing to, or restoring the terminal failed.
    #[error("terminal error: {reason}")]
    Terminal { reason: String },
}

impl From<std::io::Error> for AutoAiError {
    fn from(e: std::io::Error) -> Self {
        AutoAiError::Terminal {
            reason: e.to_string(),
        }
    }
}

/// Convenience alias used throughout the AutoAI crates.
pub type AutoAiResult<T> = Result<T, AutoAiError>;
