//! Unified error types for tabsheet.
//!
//! Every fallible operation in the crate (encoding, delivery, configuration)
//! reports through the single [`Error`] enum.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{Error, Result};
