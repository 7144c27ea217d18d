//! Naming session orchestrator.
//!
//! Owns one [`RefinementState`] and the per-session probe cache, and wires
//! the round pipeline: compose a prompt from the framework and the current
//! state, execute it against the completion service, parse the raw text,
//! and merge the result. State is only mutated after a round succeeds, so a
//! failed round leaves previously accepted names and rejected-name memory
//! untouched and the caller may retry immediately.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::domain::{parser, prompt, BrandFramework, CategoryMap, GatewayError, RefinementState};
use crate::ports::{CompletionClient, CompletionRequest, DomainProbeReport, DomainProber};

/// System instruction fixing the assistant persona and its output-grammar
/// obligation. Sent unchanged with every round.
pub const SYSTEM_PROMPT: &str = "You are a creative naming assistant that generates company name \
candidates from a brand communications framework. Always answer in exactly the output format the \
user requests: one block per category, the category label on its own line ending with a colon, \
numbered names on the following lines, and a blank line between blocks. Do not add commentary.";

/// Result of one successful generation round: the merged accepted names so
/// far, plus the raw prompt and response when debug echo is enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    /// Snapshot of every accepted name, merged across rounds.
    pub names: CategoryMap,
    /// The composed prompt, echoed only when debug echo is on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    /// The raw completion text, echoed only when debug echo is on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
}

/// One user-facing naming session.
///
/// Exclusively owned by its collaborator: mutations take `&mut self`, so no
/// concurrent rounds or rejections can interleave. Discarding the session
/// discards all state; nothing persists.
pub struct NamingSession {
    completion: Arc<dyn CompletionClient>,
    prober: Arc<dyn DomainProber>,
    state: RefinementState,
    /// Probe reports cached per name for the session's lifetime. Never
    /// invalidated; a stale entry is an accepted limitation.
    probe_cache: HashMap<String, DomainProbeReport>,
    debug_echo: bool,
}

impl NamingSession {
    /// Creates a session with empty state.
    pub fn new(completion: Arc<dyn CompletionClient>, prober: Arc<dyn DomainProber>) -> Self {
        Self {
            completion,
            prober,
            state: RefinementState::new(),
            probe_cache: HashMap::new(),
            debug_echo: false,
        }
    }

    /// Enables echoing the raw prompt and response in results.
    pub fn with_debug_echo(mut self, enabled: bool) -> Self {
        self.debug_echo = enabled;
        self
    }

    /// Read access to the session state.
    pub fn state(&self) -> &RefinementState {
        &self.state
    }

    /// Runs one generation round: a full batch on the first call, an
    /// incremental generate-more batch afterwards.
    ///
    /// # Errors
    ///
    /// Propagates [`GatewayError`] from the completion gateway unmodified.
    /// On error the session state is exactly as it was before the call.
    pub async fn generate(
        &mut self,
        framework: &BrandFramework,
    ) -> Result<GenerationResult, GatewayError> {
        let composed = prompt::compose(framework, &self.state);
        let request = CompletionRequest::new(SYSTEM_PROMPT, composed.clone());

        let raw = self.completion.complete(request).await?;
        let parsed = parser::parse(&raw);
        tracing::debug!(
            categories = parsed.len(),
            names = parsed.name_count(),
            "round parsed"
        );

        self.state.merge_round(parsed);

        Ok(GenerationResult {
            names: self.state.existing_names().clone(),
            prompt: self.debug_echo.then(|| composed),
            raw_response: self.debug_echo.then(|| raw),
        })
    }

    /// Rejects a name: it is removed from the accepted names and serialized
    /// into the negative constraints of every subsequent prompt. Idempotent.
    pub fn reject(&mut self, name: &str, category: &str) {
        self.state.reject(name, category);
    }

    /// Probes domain availability for one candidate name, serving repeat
    /// requests from the session cache.
    pub async fn check_domains(&mut self, name: &str) -> DomainProbeReport {
        if let Some(cached) = self.probe_cache.get(name) {
            return cached.clone();
        }
        let report = self.prober.probe(name).await;
        self.probe_cache.insert(name.to_string(), report.clone());
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MockCompletionClient, MockDomainProber};

    fn framework() -> BrandFramework {
        BrandFramework {
            industry: "Software".to_string(),
            ..BrandFramework::default()
        }
    }

    fn session(client: MockCompletionClient) -> NamingSession {
        NamingSession::new(Arc::new(client), Arc::new(MockDomainProber::default()))
    }

    #[tokio::test]
    async fn first_round_replaces_then_later_rounds_append() {
        let client = MockCompletionClient::new()
            .with_response("Animal Names:\n1. Fox\n\nPlayful Names:\n1. Zippy")
            .with_response("Animal Names:\n1. Owl");
        let mut session = session(client);

        let first = session.generate(&framework()).await.expect("round 1");
        assert_eq!(first.names.get("Animal Names"), Some(&["Fox".to_string()][..]));

        let second = session.generate(&framework()).await.expect("round 2");
        assert_eq!(
            second.names.get("Animal Names"),
            Some(&["Fox".to_string(), "Owl".to_string()][..])
        );
        assert_eq!(
            second.names.get("Playful Names"),
            Some(&["Zippy".to_string()][..])
        );
    }

    #[tokio::test]
    async fn failed_round_leaves_state_untouched() {
        let client = MockCompletionClient::new()
            .with_response("Animal Names:\n1. Fox")
            .with_error(GatewayError::transport("connection refused"));
        let mut session = session(client);

        session.generate(&framework()).await.expect("round 1");
        let before = session.state().clone();

        let err = session.generate(&framework()).await.expect_err("round 2 fails");
        assert_eq!(err, GatewayError::transport("connection refused"));
        assert_eq!(session.state(), &before);
    }

    #[tokio::test]
    async fn rejected_names_reach_subsequent_prompts() {
        let client = MockCompletionClient::new()
            .with_response("Animal Names:\n1. Fox\n2. Owl")
            .with_response("Animal Names:\n1. Lynx");
        let calls_handle = client.clone();
        let mut session = session(client);

        session.generate(&framework()).await.expect("round 1");
        session.reject("Owl", "Animal Names");
        session.generate(&framework()).await.expect("round 2");

        let calls = calls_handle.calls();
        assert_eq!(calls.len(), 2);
        assert!(calls[1].user_prompt.contains("never suggest these names again"));
        assert!(calls[1].user_prompt.contains("- Owl"));
        assert_eq!(calls[1].system_prompt, SYSTEM_PROMPT);
    }

    #[tokio::test]
    async fn debug_echo_carries_prompt_and_raw_response() {
        let client = MockCompletionClient::new().with_response("Animal Names:\n1. Fox");
        let mut session = session(client).with_debug_echo(true);

        let result = session.generate(&framework()).await.expect("round 1");
        assert!(result.prompt.is_some());
        assert_eq!(result.raw_response.as_deref(), Some("Animal Names:\n1. Fox"));

        let json = serde_json::to_value(&result).expect("serializable");
        assert!(json.get("prompt").is_some());
    }

    #[tokio::test]
    async fn debug_echo_is_off_by_default() {
        let client = MockCompletionClient::new().with_response("Animal Names:\n1. Fox");
        let mut session = session(client);

        let result = session.generate(&framework()).await.expect("round 1");
        assert_eq!(result.prompt, None);
        assert_eq!(result.raw_response, None);

        let json = serde_json::to_value(&result).expect("serializable");
        assert!(json.get("prompt").is_none());
    }

    #[tokio::test]
    async fn probe_reports_are_cached_per_name() {
        let prober = MockDomainProber::default();
        let prober_handle = prober.clone();
        let mut session = NamingSession::new(
            Arc::new(MockCompletionClient::new()),
            Arc::new(prober),
        );

        let first = session.check_domains("Acme").await;
        let second = session.check_domains("Acme").await;
        session.check_domains("Finch").await;

        assert_eq!(first, second);
        assert_eq!(
            prober_handle.probed_names(),
            vec!["Acme".to_string(), "Finch".to_string()]
        );
    }
}
