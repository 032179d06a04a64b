//! Unlock evaluation: which rules make a civilization available given the
//! current leader and earlier-era picks.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
