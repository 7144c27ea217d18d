//! Completion service port.
//!
//! Abstracts the text-completion service behind a single-call contract.
//! Every generation round is one fresh, independent exchange: a system
//! instruction fixing the assistant persona plus one user message. Memory
//! across rounds lives entirely in the prompt text the composer re-embeds,
//! never in conversational state on the provider side.

use async_trait::async_trait;

use crate::domain::GatewayError;

/// Temperature used for every naming completion: creative enough for novel
/// names, conservative enough that the output grammar is usually followed.
pub const NAMING_TEMPERATURE: f32 = 0.7;

/// Port for the text-completion service.
///
/// Implementations make exactly one attempt per call; retrying is the
/// caller's decision, made by invoking the round again.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Executes one completion exchange and returns the raw response text.
    async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError>;
}

/// One conversational exchange with the completion service.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// System instruction establishing persona and output obligations.
    pub system_prompt: String,
    /// The composed user prompt.
    pub user_prompt: String,
    /// Sampling temperature.
    pub temperature: f32,
}

impl CompletionRequest {
    /// Creates a request with the default naming temperature.
    pub fn new(system_prompt: impl Into<String>, user_prompt: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            user_prompt: user_prompt.into(),
            temperature: NAMING_TEMPERATURE,
        }
    }

    /// Overrides the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_defaults_to_naming_temperature() {
        let request = CompletionRequest::new("system", "user");
        assert_eq!(request.temperature, NAMING_TEMPERATURE);
        assert_eq!(request.system_prompt, "system");
        assert_eq!(request.user_prompt, "user");
    }

    #[test]
    fn temperature_can_be_overridden() {
        let request = CompletionRequest::new("s", "u").with_temperature(0.2);
        assert_eq!(request.temperature, 0.2);
    }
}
