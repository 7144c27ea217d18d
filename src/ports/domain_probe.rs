//! Domain reachability port.
//!
//! A probe is a best-effort proxy for registration status: reachable means
//! something is hosted there, so the domain is probably taken; any transport
//! failure means it might be available. The signal is deliberately crude and
//! is never upgraded to an authoritative registry check.

use std::collections::BTreeMap;
use std::fmt;

use async_trait::async_trait;
use serde::{Serialize, Serializer};

/// The fixed TLD set every name is probed against.
pub const PROBED_TLDS: [Tld; 3] = [Tld::Com, Tld::Ai, Tld::Io];

/// A probed top-level domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tld {
    Com,
    Ai,
    Io,
}

impl Tld {
    /// The dotted suffix, e.g. `".com"`.
    pub fn suffix(&self) -> &'static str {
        match self {
            Tld::Com => ".com",
            Tld::Ai => ".ai",
            Tld::Io => ".io",
        }
    }
}

impl fmt::Display for Tld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl Serialize for Tld {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.suffix())
    }
}

/// Outcome classification for one `(name, tld)` probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStatus {
    /// The site answered with this HTTP status.
    Code(u16),
    /// The probe never got an HTTP answer.
    Error,
}

impl Serialize for ProbeStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ProbeStatus::Code(code) => serializer.serialize_u16(*code),
            ProbeStatus::Error => serializer.serialize_str("ERROR"),
        }
    }
}

/// Result of probing one TLD for one name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TldProbe {
    /// True when the domain is possibly available (the probe failed to
    /// reach anything), false when it is likely taken (the site answered).
    #[serde(rename = "isAvailable")]
    pub available: bool,
    /// HTTP status code, or `"ERROR"` when no answer arrived.
    #[serde(rename = "statusCode")]
    pub status: ProbeStatus,
    /// Transport error message, when there was one.
    pub error: Option<String>,
}

impl TldProbe {
    /// A reachable site: likely taken.
    pub fn reachable(status_code: u16) -> Self {
        Self {
            available: false,
            status: ProbeStatus::Code(status_code),
            error: None,
        }
    }

    /// An unreachable site: possibly available.
    pub fn unreachable(error: impl Into<String>) -> Self {
        Self {
            available: true,
            status: ProbeStatus::Error,
            error: Some(error.into()),
        }
    }
}

/// Per-name probe report covering every TLD in [`PROBED_TLDS`].
///
/// One TLD's failure never suppresses the others: all three keys are always
/// present. Cached per name for the life of a session and never invalidated;
/// a stale result is an accepted limitation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DomainProbeReport {
    results: BTreeMap<Tld, TldProbe>,
}

impl DomainProbeReport {
    /// Builds a report from per-TLD outcomes.
    pub fn from_outcomes(outcomes: impl IntoIterator<Item = (Tld, TldProbe)>) -> Self {
        Self {
            results: outcomes.into_iter().collect(),
        }
    }

    /// The outcome for one TLD.
    pub fn get(&self, tld: Tld) -> Option<&TldProbe> {
        self.results.get(&tld)
    }

    /// Iterates outcomes in TLD order.
    pub fn iter(&self) -> impl Iterator<Item = (Tld, &TldProbe)> {
        self.results.iter().map(|(tld, probe)| (*tld, probe))
    }

    /// Number of TLDs covered.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// True when no TLD outcomes are recorded.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Port for the domain-reachability layer.
///
/// Probing has no failure path: both "reachable" and "unreachable" are
/// ordinary outcome values, so the trait is infallible.
#[async_trait]
pub trait DomainProber: Send + Sync {
    /// Probes one candidate name against every TLD in [`PROBED_TLDS`].
    async fn probe(&self, name: &str) -> DomainProbeReport;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serializes_with_camel_case_fields_and_tld_keys() {
        let report = DomainProbeReport::from_outcomes([
            (Tld::Com, TldProbe::reachable(200)),
            (Tld::Ai, TldProbe::unreachable("dns error")),
            (Tld::Io, TldProbe::reachable(403)),
        ]);
        let json = serde_json::to_value(&report).expect("serializable");
        assert_eq!(json[".com"]["isAvailable"], false);
        assert_eq!(json[".com"]["statusCode"], 200);
        assert_eq!(json[".ai"]["isAvailable"], true);
        assert_eq!(json[".ai"]["statusCode"], "ERROR");
        assert_eq!(json[".ai"]["error"], "dns error");
    }

    #[test]
    fn suffixes_match_the_fixed_set() {
        let suffixes: Vec<&str> = PROBED_TLDS.iter().map(Tld::suffix).collect();
        assert_eq!(suffixes, vec![".com", ".ai", ".io"]);
    }
}
