//! Ports - interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! domain and the outside world. Adapters implement these ports.
//!
//! - `CompletionClient` - the opaque text-completion service
//! - `DomainProber` - the domain-reachability layer

mod completion;
mod domain_probe;

pub use completion::{CompletionClient, CompletionRequest, NAMING_TEMPERATURE};
pub use domain_probe::{
    DomainProbeReport, DomainProber, ProbeStatus, Tld, TldProbe, PROBED_TLDS,
};
