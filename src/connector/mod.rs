//! # Connector Layer
//!
//! Implementations of the completion-provider port:
//! - OpenRouter over HTTP (reqwest)
//! - An offline mock for `--mock` runs and tests

pub mod adapter;

pub use adapter::*;
