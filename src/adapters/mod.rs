//! Adapters - implementations of the port interfaces.
//!
//! - `OpenAiClient` - chat completions over HTTPS
//! - `HttpDomainProber` - HEAD-request reachability probes
//! - `MockCompletionClient`, `MockDomainProber` - test doubles

mod mock;
mod openai;
mod probe;

pub use mock::{MockCompletionClient, MockDomainProber};
pub use openai::{OpenAiClient, OpenAiConfig};
pub use probe::HttpDomainProber;
