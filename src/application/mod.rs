//! Application layer - session orchestration over the domain core.

mod generator;

pub use generator::{GenerationResult, NamingSession, SYSTEM_PROMPT};
