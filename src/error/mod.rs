// Top-level error handling for the portions CLI

mod display;

// Re-export all public symbols
pub use display::*;
