// The portions library: parsing and rescaling of quantities in recipe text.
// The binary in main.rs is a thin presentation layer over these modules.

pub mod error;
pub mod language;
pub mod output;
pub mod rendering;
pub mod scaling;
