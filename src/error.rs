//! Error taxonomy for cache construction, persistence and lookup

use std::path::PathBuf;

use thiserror::Error;

use crate::registry::{Category, RegistryError};

/// Errors raised while building, persisting or consulting the lookup cache
#[derive(Debug, Error)]
pub enum Error {
    /// The catalog enumerated a component it could not resolve back to a spec.
    #[error("{category} catalog lists {name:?} but cannot resolve it")]
    Discovery { category: Category, name: String },

    /// The cache file is missing or does not parse as a cache.
    #[error("failed to read lookup cache at {}: {}", .path.display(), .reason)]
    Read { path: PathBuf, reason: String },

    /// The cache could not be rendered to its on-disk form.
    #[error("failed to serialize lookup cache")]
    Serialize(#[source] serde_json::Error),

    /// The cache file could not be written.
    #[error("failed to write lookup cache at {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Slow-path resolution failures, passed through unchanged.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
