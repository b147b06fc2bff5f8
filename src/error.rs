//! Error types for the content editor and the generation pipeline.
//!
//! Nothing here is fatal: editor errors reject the offending operation and
//! leave the session where it was, and every generation error resolves back
//! to an idle generation state with the draft untouched.

use thiserror::Error;

/// Errors from editor session operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditorError {
    #[error("Editor is not in edit mode")]
    NotEditing,

    #[error("A generation request is already in flight")]
    GenerationInFlight,
}

/// Errors from the generative text service.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("No generative API key configured. Set apiKey in ~/.whiteorder/config.json or GEMINI_API_KEY")]
    NoApiKey,

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("HTTP: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Generation API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Model returned no content")]
    EmptyResponse,

    #[error("Malformed generation payload: {0}")]
    SchemaViolation(String),
}

impl GenerateError {
    /// True when the fix is in the user's hands (config), not a transient
    /// service condition worth trying again later.
    pub fn requires_configuration(&self) -> bool {
        matches!(self, GenerateError::NoApiKey)
    }
}
