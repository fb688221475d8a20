//! # Catalog Actor
//!
//! The single owner of every [`Catalog`]. Requests arrive over a bounded
//! `mpsc` channel and are processed one at a time, so the catalogs need no
//! locking. Each request carries a `oneshot` sender for its reply.
//!
//! Catalogs are not generic CRUD resources: sorting and edition updates
//! mutate a nested collection in place, so the request set is written out
//! here rather than going through an entity trait.

use crate::catalog_actor::{Catalog, CatalogError, CatalogId, CatalogQuery, CatalogQueryResult, EditionUpdate};
use crate::clients::CatalogClient;
use crate::model::{Edition, Magazine, SortKey};
use std::collections::HashMap;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, CatalogError>>;

/// Messages understood by [`CatalogActor`].
#[derive(Debug)]
pub enum CatalogRequest {
    Create {
        name: String,
        magazines: Vec<Magazine>,
        respond_to: Response<CatalogId>,
    },
    Get {
        id: CatalogId,
        respond_to: Response<Option<Catalog>>,
    },
    AddMagazines {
        id: CatalogId,
        magazines: Vec<Magazine>,
        respond_to: Response<usize>,
    },
    UpdateEdition {
        id: CatalogId,
        position: usize,
        update: EditionUpdate,
        respond_to: Response<Edition>,
    },
    Sort {
        id: CatalogId,
        key: SortKey,
        respond_to: Response<()>,
    },
    Query {
        id: CatalogId,
        query: CatalogQuery,
        respond_to: Response<CatalogQueryResult>,
    },
    Delete {
        id: CatalogId,
        respond_to: Response<()>,
    },
}

/// Server half of the catalog service. Owns the catalogs and the receiver.
pub struct CatalogActor {
    receiver: mpsc::Receiver<CatalogRequest>,
    catalogs: HashMap<CatalogId, Catalog>,
    next_id_fn: Box<dyn Fn() -> CatalogId + Send + Sync>,
}

impl CatalogActor {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> CatalogId + Send + Sync + 'static,
    ) -> (Self, CatalogClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            catalogs: HashMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        (actor, CatalogClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped.
    pub async fn run(mut self) {
        info!("Catalog actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CatalogRequest::Create { name, magazines, respond_to } => {
                    debug!(%name, count = magazines.len(), "Create");
                    let id = (self.next_id_fn)();
                    self.catalogs.insert(id, Catalog::new(id, name, magazines));
                    info!(%id, size = self.catalogs.len(), "Created");
                    let _ = respond_to.send(Ok(id));
                }
                CatalogRequest::Get { id, respond_to } => {
                    let catalog = self.catalogs.get(&id).cloned();
                    debug!(%id, found = catalog.is_some(), "Get");
                    let _ = respond_to.send(Ok(catalog));
                }
                CatalogRequest::AddMagazines { id, magazines, respond_to } => {
                    debug!(%id, count = magazines.len(), "AddMagazines");
                    let result = self.catalog_mut(id).map(|catalog| {
                        catalog.magazines.add_magazines(magazines);
                        catalog.magazines.len()
                    });
                    if let Ok(len) = &result {
                        info!(%id, len, "Magazines added");
                    }
                    let _ = respond_to.send(result);
                }
                CatalogRequest::UpdateEdition { id, position, update, respond_to } => {
                    debug!(%id, position, ?update, "UpdateEdition");
                    let result = self.catalog_mut(id).and_then(|catalog| {
                        let magazine = catalog
                            .magazines
                            .get_mut(position)
                            .ok_or(CatalogError::MagazineNotFound { catalog: id, position })?;
                        Ok(update.apply(magazine)?)
                    });
                    match &result {
                        Ok(edition) => info!(%id, position, %edition, "Updated"),
                        Err(e) => warn!(%id, position, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                CatalogRequest::Sort { id, key, respond_to } => {
                    debug!(%id, ?key, "Sort");
                    let result = self.catalog_mut(id).map(|catalog| catalog.magazines.sort_by(key));
                    if result.is_ok() {
                        info!(%id, ?key, "Sorted");
                    }
                    let _ = respond_to.send(result);
                }
                CatalogRequest::Query { id, query, respond_to } => {
                    debug!(%id, ?query, "Query");
                    let result = match self.catalogs.get(&id) {
                        Some(catalog) => Ok(query.evaluate(&catalog.magazines)),
                        None => {
                            warn!(%id, "Not found");
                            Err(CatalogError::NotFound(id))
                        }
                    };
                    let _ = respond_to.send(result);
                }
                CatalogRequest::Delete { id, respond_to } => {
                    debug!(%id, "Delete");
                    let result = match self.catalogs.remove(&id) {
                        Some(_) => {
                            info!(%id, size = self.catalogs.len(), "Deleted");
                            Ok(())
                        }
                        None => {
                            warn!(%id, "Not found");
                            Err(CatalogError::NotFound(id))
                        }
                    };
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(size = self.catalogs.len(), "Shutdown");
    }

    fn catalog_mut(&mut self, id: CatalogId) -> Result<&mut Catalog, CatalogError> {
        match self.catalogs.get_mut(&id) {
            Some(catalog) => Ok(catalog),
            None => {
                warn!(%id, "Not found");
                Err(CatalogError::NotFound(id))
            }
        }
    }
}
