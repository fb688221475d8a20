use crate::clients::CatalogClient;
use crate::lifecycle::CatalogConfig;
use crate::model::Defaults;
use tracing::{error, info};

/// Runtime owner of the catalog actor.
///
/// `CatalogSystem` spawns the actor on the current Tokio runtime, hands out
/// its [`CatalogClient`], and shuts it down again.
///
/// # Example
///
/// ```ignore
/// let system = CatalogSystem::new(&CatalogConfig::default());
/// let id = system.client.create_catalog("Shelf", magazines).await?;
/// system.client.sort(id, SortKey::Name).await?;
/// system.shutdown().await?;
/// ```
pub struct CatalogSystem {
    /// Client for interacting with the catalog actor
    pub client: CatalogClient,

    /// Defaults the system was configured with
    defaults: Defaults,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl CatalogSystem {
    /// Creates the actor and spawns its event loop.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &CatalogConfig) -> Self {
        let (actor, client) = crate::catalog_actor::new(config.channel_buffer.max(1));
        let handle = tokio::spawn(actor.run());
        info!(channel_buffer = config.channel_buffer, "Catalog system started");

        Self {
            client,
            defaults: config.defaults.clone(),
            handle,
        }
    }

    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    /// Drops the client and waits for the actor to drain its queue and stop.
    ///
    /// Clones of the client handed out earlier keep the actor alive until they
    /// are dropped as well.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down catalog system...");

        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("Catalog system shutdown complete.");
        Ok(())
    }
}

impl Default for CatalogSystem {
    fn default() -> Self {
        Self::new(&CatalogConfig::default())
    }
}
