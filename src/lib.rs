//! civpath - terminal reference for civilization unlock paths.
//!
//! Exposes the data model, selection state and unlock evaluator for the
//! binary and for tests.

pub mod app;
pub mod build_info;
pub mod config;
pub mod data;
pub mod logging;
pub mod selection;
pub mod unlock;

// Rendering is tied to the terminal backend and only used by the binary
pub mod ui;
