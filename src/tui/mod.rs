pub mod model;
pub mod notifier;
pub mod update;
pub mod view;

// Re-exports for convenience
pub use model::*;
pub use notifier::*;
pub use update::*;
pub use view::*;
