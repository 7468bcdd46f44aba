//! Domain services: conversation assembly.

mod conversation;

pub use conversation::*;
