//! Generative identity text for the editable section.
//!
//! The editor never talks to the network directly: it goes through the
//! [`ContentGenerator`] trait so tests can script the service. The one real
//! implementation is [`gemini::GeminiClient`].

pub mod gemini;
pub mod prompts;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::GenerateError;

/// Identity copy produced by the service.
///
/// Each key is independently optional: an absent key means "no update for
/// that field", and the editor applies whichever keys are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeneratedIdentity {
    #[serde(default)]
    pub who: Option<String>,
    #[serde(default)]
    pub mission: Option<String>,
}

/// One-shot structured text generation.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Ask the service for fresh "who we are" / "mission" copy for the
    /// given business description.
    async fn generate_identity(
        &self,
        business_context: &str,
    ) -> Result<GeneratedIdentity, GenerateError>;
}
