//! # Application Layer
//!
//! The provider port and the two use cases built on it.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
