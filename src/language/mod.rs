// Types representing recipe quantities and conversion settings

mod quantity;
mod types;

// Re-export all public symbols
pub use quantity::*;
pub use types::*;
