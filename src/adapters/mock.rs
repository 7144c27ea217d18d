//! Mock adapters for testing.
//!
//! Configurable implementations of the `CompletionClient` and `DomainProber`
//! ports, allowing tests to run without network access.
//!
//! # Example
//!
//! ```ignore
//! let client = MockCompletionClient::new()
//!     .with_response("Animal Names:\n1. Finch");
//!
//! let raw = client.complete(request).await?;
//! assert_eq!(client.calls().len(), 1);
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::GatewayError;
use crate::ports::{
    CompletionClient, CompletionRequest, DomainProbeReport, DomainProber, TldProbe, PROBED_TLDS,
};

/// Mock completion client with queued responses and call recording.
#[derive(Debug, Clone, Default)]
pub struct MockCompletionClient {
    /// Pre-configured outcomes, consumed in order.
    responses: Arc<Mutex<VecDeque<Result<String, GatewayError>>>>,
    /// Every request received, for verification.
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockCompletionClient {
    /// Creates a mock with no queued responses. An exhausted queue yields
    /// `EmptyCompletion`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful completion.
    pub fn with_response(self, raw: impl Into<String>) -> Self {
        self.responses
            .lock()
            .expect("responses lock")
            .push_back(Ok(raw.into()));
        self
    }

    /// Queues a failure.
    pub fn with_error(self, error: GatewayError) -> Self {
        self.responses
            .lock()
            .expect("responses lock")
            .push_back(Err(error));
        self
    }

    /// Requests received so far.
    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError> {
        self.calls.lock().expect("calls lock").push(request);
        self.responses
            .lock()
            .expect("responses lock")
            .pop_front()
            .unwrap_or(Err(GatewayError::EmptyCompletion))
    }
}

/// Mock domain prober returning a fixed per-TLD outcome and counting probes.
#[derive(Debug, Clone)]
pub struct MockDomainProber {
    outcome: TldProbe,
    probes: Arc<Mutex<Vec<String>>>,
}

impl MockDomainProber {
    /// Creates a prober that marks every TLD with `outcome`.
    pub fn new(outcome: TldProbe) -> Self {
        Self {
            outcome,
            probes: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Names probed so far, in call order.
    pub fn probed_names(&self) -> Vec<String> {
        self.probes.lock().expect("probes lock").clone()
    }
}

impl Default for MockDomainProber {
    fn default() -> Self {
        Self::new(TldProbe::unreachable("mock: nothing hosted"))
    }
}

#[async_trait]
impl DomainProber for MockDomainProber {
    async fn probe(&self, name: &str) -> DomainProbeReport {
        self.probes
            .lock()
            .expect("probes lock")
            .push(name.to_string());
        DomainProbeReport::from_outcomes(
            PROBED_TLDS.iter().map(|tld| (*tld, self.outcome.clone())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn responses_are_consumed_in_order() {
        let client = MockCompletionClient::new()
            .with_response("first")
            .with_error(GatewayError::transport("boom"));

        let first = client.complete(CompletionRequest::new("s", "u")).await;
        let second = client.complete(CompletionRequest::new("s", "u")).await;
        let exhausted = client.complete(CompletionRequest::new("s", "u")).await;

        assert_eq!(first, Ok("first".to_string()));
        assert_eq!(second, Err(GatewayError::transport("boom")));
        assert_eq!(exhausted, Err(GatewayError::EmptyCompletion));
        assert_eq!(client.calls().len(), 3);
    }

    #[tokio::test]
    async fn prober_covers_every_tld_and_records_names() {
        let prober = MockDomainProber::default();
        let report = prober.probe("acme").await;

        assert_eq!(report.len(), PROBED_TLDS.len());
        assert_eq!(prober.probed_names(), vec!["acme".to_string()]);
    }
}
