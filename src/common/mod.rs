//! Common types and utilities shared by the sheet model and its encoders.

// Submodule declarations
pub mod bom;
pub mod error;
pub mod id;

// Re-exports for convenience
pub use bom::{UTF8_BOM, strip_bom, write_bom};
pub use error::{Error, Result};
pub use id::generate_file_stem;
