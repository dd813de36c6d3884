//! Core set traits module
//!
//! This module defines the algebra every set container implements.

pub mod algebra;

// Re-export main traits
pub use algebra::SetAlgebra;
