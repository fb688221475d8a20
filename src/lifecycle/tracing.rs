//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered
//! by `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: `Catalog actor started`, `Shutdown` with the number of catalogs left
//! - **Catalog changes**: `Created`, `Magazines added`, `Updated`, `Sorted`, `Deleted`
//! - **Rejections**: unknown catalog ids and negative circulation at `warn`
//! - **Client calls**: one span per [`CatalogClient`](crate::clients::CatalogClient) method
//!
//! ## Usage Examples
//!
//! ```bash
//! # Lifecycle and mutations only
//! RUST_LOG=info cargo run
//!
//! # Request payloads as well
//! RUST_LOG=debug cargo run
//!
//! # Only the actor loop
//! RUST_LOG=magazine_catalog::catalog_actor=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a demo run looks like:
//!
//! ```text
//! INFO Catalog actor started
//! INFO create_catalog{name="Demo"}: Created id=catalog_1 size=1
//! INFO sort{id=CatalogId(1) key=Circulation}: Sorted id=catalog_1 key=Circulation
//! INFO Shutdown size=1
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
