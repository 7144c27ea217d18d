//! Namesmith - Brand Name Candidate Generation & Refinement
//!
//! Turns a structured brand description into categorized lists of candidate
//! company names, refines the list over successive rounds while respecting
//! rejected and previously seen names, and probes whether short-listed names
//! are likely available as domains.
//!
//! # Layout
//!
//! - [`domain`] - pure core: framework, prompt composer, category parser,
//!   refinement state
//! - [`ports`] - contracts for the completion service and the reachability
//!   layer
//! - [`adapters`] - OpenAI client, HTTP domain prober, mocks
//! - [`application`] - the session orchestrator
//! - [`config`] - env-based typed configuration
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use namesmith::adapters::{HttpDomainProber, OpenAiClient, OpenAiConfig};
//! use namesmith::application::NamingSession;
//! use namesmith::config::AppConfig;
//! use namesmith::domain::BrandFramework;
//!
//! # async fn run() -> Result<(), namesmith::domain::GatewayError> {
//! let config = AppConfig::load().expect("config");
//! let client = OpenAiClient::new(OpenAiConfig::from(&config.ai));
//! let prober = HttpDomainProber::from_config(&config.probe);
//!
//! let mut session = NamingSession::new(Arc::new(client), Arc::new(prober));
//! let framework = BrandFramework {
//!     industry: "Software".to_string(),
//!     ..BrandFramework::default()
//! };
//!
//! let result = session.generate(&framework).await?;
//! for (category, names) in result.names.iter() {
//!     println!("{}: {}", category, names.join(", "));
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
