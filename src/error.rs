//! Unified error type for nanobanana.

use thiserror::Error;

/// Errors that abort the run with a non-zero exit code.
#[derive(Debug, Error)]
pub enum ImageError {
    /// The API returned a non-success HTTP status.
    #[error("API returned {status}\n{body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body, printed verbatim for diagnosis.
        body: String,
    },

    /// A network error occurred.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No API key found in the environment.
    #[error("GEMINI_API_KEY or GOOGLE_API_KEY environment variable not set")]
    MissingApiKey,
}
