//! Static rule data: leaders and the civilizations of each era.
//!
//! Everything here is loaded once at startup and never mutated afterwards.

pub mod loader;
pub mod types;

pub use loader::*;
pub use types::*;
