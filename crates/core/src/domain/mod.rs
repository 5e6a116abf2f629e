pub mod lifespan;
pub mod reading;
pub mod stats;
pub mod locale;
pub mod quote;

// Re-exports for convenience
pub use lifespan::*;
pub use reading::*;
pub use stats::*;
pub use locale::*;
pub use quote::*;
