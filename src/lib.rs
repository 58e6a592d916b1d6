//! hicache - A fast lookup cache for pluggable syntax highlighting components
//!
//! hicache provides:
//! - One-time discovery of the component catalog (lexers, formatters, styles, filters)
//! - A persisted key-to-component mapping under the user data directory
//! - Fast lookups by filename, extension or short name, with a slow-path
//!   fallback that repairs the cache on a miss

pub mod cache;
pub mod cli;
pub mod core;
pub mod error;
pub mod lookup;
pub mod registry;

pub use crate::error::Error;
pub use crate::lookup::LookupCache;
pub use crate::registry::{Category, Component, Options, Registry};

/// Crate-wide result alias
pub type Result<T, E = Error> = std::result::Result<T, E>;
