//! Life Clock Core - Pure domain logic with no terminal or file I/O
//!
//! This crate contains the validator, the life-ratio clock engine, domain
//! types, and the ports (interfaces) the engine is driven through. Rendering,
//! configuration files, and the real display loop are handled by the binary.

pub mod domain;
pub mod ports;
pub mod app;
pub mod error;

// Re-exports for ergonomics
pub use domain::*;
pub use error::*;
