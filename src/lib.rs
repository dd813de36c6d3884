#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]

//! **Generic Mathematical Sets**
//!
//! mathset is a `no_std` Rust library implementing a mutable set container
//! with membership, mutation and set-algebra operations. It needs only an
//! allocator and runs anywhere a heap exists.
//!
//! ## Features
//!
//! - **Set algebra** - union, intersection, difference, symmetric difference, subset, equality
//! - **Convenience operations** - clone, enumerate, map, fallible map, cartesian product
//! - **Deterministic rendering** - `Display` sorts elements, whatever the hash order
//! - **Heterogeneous elements** - [`Value`] tags booleans, integers, floats, strings and pairs
//! - **Fail fast** - values that cannot honour equality (NaN) are rejected on construction
//!
//! ### Serialization Features
//! - `serde` - Serde serialization support (no_std compatible)
//!
//! ## Quick Start
//!
//! ```rust
//! use mathset::prelude::*;
//!
//! let mut odds = set![1, 3, 5];
//! assert!(odds.add(7));
//! assert!(!odds.add(7));
//!
//! let difference = odds.difference(&set![1, 2, 6]);
//! assert_eq!(difference, set![3, 5, 7]);
//! assert_eq!(difference.to_string(), "{3, 5, 7}");
//!
//! // The receiver is the candidate superset
//! assert!(odds.subset(&set![1, 3]));
//! assert!(set![1, 3].is_subset_of(&odds));
//!
//! let pairs = set![1, 2].cartesian_product(&set!['a', 'b']);
//! assert_eq!(pairs.size(), 4);
//! ```
//!
//! ## Concurrency
//!
//! A [`Set`] is plain data with no internal synchronisation. Share it
//! between threads behind a lock that guards every method.
//!
//! ## Logging
//!
//! Mutations emit `tracing` events at `TRACE` level and bulk operations
//! at `DEBUG`. The library never installs a subscriber.
//!
//! [`Set`]: crate::sets::Set
//! [`Value`]: crate::value::Value

#![no_std]
#![deny(missing_docs)]
#![warn(clippy::all)]

extern crate alloc;

// Core infrastructure modules
pub mod error;
pub mod render;
pub mod traits;

// Container and element modules
pub mod sets;
pub mod value;

/// Prelude module of mathset
///
/// Convenient re-exports for common mathset types and traits
pub mod prelude {

    // Re-export core traits
    pub use crate::traits::*;

    // Re-export error types
    pub use crate::error::{SetError, SetResult};

    // Re-export the container and its constructor macro
    pub use crate::set;
    pub use crate::sets::Set;

    // Re-export element types
    pub use crate::value::{Float, Value, ValueKind};
}
