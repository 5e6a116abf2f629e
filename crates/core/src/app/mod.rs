pub mod engine;
pub mod validate;

// Re-exports
pub use engine::*;
pub use validate::*;
