//! Set implementations
//!
//! This module provides the hash-backed [`Set`] container and the
//! [`set!`](crate::set) constructor macro.

pub mod macros;
pub mod set;

// Re-export main types
pub use set::Set;
