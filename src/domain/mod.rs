//! Domain layer: the pure core of the naming pipeline.
//!
//! Everything here is side-effect free. The prompt composer and the category
//! parser are pure functions over value objects; the refinement state is a
//! plain state machine mutated only by the application layer after a round
//! succeeds.

mod category_map;
mod errors;
mod framework;
pub mod parser;
pub mod prompt;
mod session;

pub use category_map::{CategoryEntry, CategoryMap};
pub use errors::GatewayError;
pub use framework::BrandFramework;
pub use session::RefinementState;
