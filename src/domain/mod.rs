//! # Domain Layer
//!
//! Chat data types, error taxonomy and conversation assembly.
//! This layer is independent of the HTTP client and provider wire format.

mod error;
pub mod models;
pub mod services;

pub use error::*;
pub use models::*;
pub use services::*;
