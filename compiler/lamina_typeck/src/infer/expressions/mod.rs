//! Expression type inference.
//!
//! - `identifiers.rs`: environment lookup and instantiation
//! - `access.rs`: member access on nominal and base types
//! - `collections.rs`: tuples

mod access;
mod collections;
mod identifiers;

pub use access::*;
pub use collections::*;
pub use identifiers::*;
