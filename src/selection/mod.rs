//! Selection state: the picked leader and civilizations, and the trait filter.

pub mod context;
pub mod filter;

pub use context::*;
pub use filter::*;
