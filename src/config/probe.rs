//! Domain probe configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Domain probe configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ProbeConfig {
    /// Per-request timeout in seconds. Bounds worst-case latency of a
    /// probe; a timed-out probe is recorded as possibly available.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl ProbeConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timeout_is_a_few_seconds() {
        let config = ProbeConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_timeout_fails_validation() {
        let config = ProbeConfig { timeout_secs: 0 };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout));
    }
}
