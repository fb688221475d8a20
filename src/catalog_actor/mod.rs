//! Single-owner catalog service: one task owns every magazine catalog.

mod actions;
pub mod actor;
pub mod entity;
pub mod error;
pub mod mock;

pub use actions::*;
pub use actor::*;
pub use entity::*;
pub use error::*;

use crate::clients::CatalogClient;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates a new catalog actor and its client.
pub fn new(buffer_size: usize) -> (CatalogActor, CatalogClient) {
    let catalog_id_counter = Arc::new(AtomicU64::new(1));
    let next_catalog_id = move || CatalogId(catalog_id_counter.fetch_add(1, Ordering::SeqCst));

    CatalogActor::new(buffer_size, next_catalog_id)
}
