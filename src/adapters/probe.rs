//! HTTP domain prober.
//!
//! Issues a HEAD request per TLD against `https://<name><tld>` and converts
//! the outcome into an availability signal: an HTTP answer of any status
//! means something is hosted there (likely taken), any transport failure —
//! DNS, connect, TLS, timeout, or an unbuildable URL — means possibly
//! available. Both outcomes are values; probing never fails.
//!
//! The three TLD probes for one name run concurrently and are joined after
//! all settle, so one TLD's failure never suppresses the others.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::ProbeConfig;
use crate::ports::{DomainProbeReport, DomainProber, Tld, TldProbe, PROBED_TLDS};

/// Domain prober backed by plain HTTPS reachability checks.
pub struct HttpDomainProber {
    client: Client,
}

impl HttpDomainProber {
    /// Creates a prober whose requests are bounded by `timeout`.
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Creates a prober from configuration.
    pub fn from_config(config: &ProbeConfig) -> Self {
        Self::new(config.timeout())
    }

    fn probe_url(name: &str, tld: Tld) -> String {
        format!("https://{}{}", name.trim(), tld.suffix())
    }

    async fn check_one(&self, name: &str, tld: Tld) -> (Tld, TldProbe) {
        let url = Self::probe_url(name, tld);
        let outcome = match self.client.head(&url).send().await {
            Ok(response) => Ok(response.status().as_u16()),
            Err(e) => Err(e.to_string()),
        };
        tracing::debug!(%url, ?outcome, "domain probe settled");
        (tld, classify(outcome))
    }
}

impl Default for HttpDomainProber {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

#[async_trait]
impl DomainProber for HttpDomainProber {
    async fn probe(&self, name: &str) -> DomainProbeReport {
        let checks = PROBED_TLDS.iter().map(|tld| self.check_one(name, *tld));
        let outcomes = futures::future::join_all(checks).await;
        DomainProbeReport::from_outcomes(outcomes)
    }
}

/// Converts a raw reachability outcome into the availability signal.
/// Reachable implies likely taken; unreachable implies possibly available.
fn classify(outcome: Result<u16, String>) -> TldProbe {
    match outcome {
        Ok(status_code) => TldProbe::reachable(status_code),
        Err(error) => TldProbe::unreachable(error),
    }
}
