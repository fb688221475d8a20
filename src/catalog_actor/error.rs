//! Error types for the catalog actor.

use crate::catalog_actor::CatalogId;
use crate::model::ValidationError;
use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The requested catalog was not found.
    #[error("Catalog not found: {0}")]
    NotFound(CatalogId),

    /// The catalog has no magazine at the requested position.
    #[error("No magazine at position {position} in {catalog}")]
    MagazineNotFound { catalog: CatalogId, position: usize },

    /// A magazine update broke a model invariant.
    #[error("Catalog validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The actor is no longer accepting requests.
    #[error("Actor closed")]
    ActorClosed,

    /// The actor dropped the response channel before answering.
    #[error("Actor dropped response channel")]
    ActorDropped,
}
