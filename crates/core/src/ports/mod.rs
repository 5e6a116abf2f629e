pub mod frames;
pub mod notifier;
pub mod time;

// Re-exports
pub use frames::*;
pub use notifier::*;
pub use time::*;
