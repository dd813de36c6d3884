//! Error handling module for mathset
//!
//! This module provides the error type for the fallible set operations.

pub mod types;

// Re-export main types
pub use types::{SetError, SetResult};
