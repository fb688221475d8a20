//! # Mock Helpers
//!
//! Utilities for testing [`CatalogClient`] without spawning a [`CatalogActor`](super::CatalogActor).
//!
//! [`create_mock_client`] returns a client together with the receiving end of
//! its channel. A test drives the client in a task, pulls the request off the
//! receiver with one of the `expect_*` helpers, asserts on it, and answers
//! through the returned responder.

use crate::catalog_actor::{CatalogId, CatalogQuery, CatalogQueryResult, CatalogRequest, EditionUpdate, Response};
use crate::clients::CatalogClient;
use crate::model::{Edition, Magazine, SortKey};
use tokio::sync::mpsc;

/// Creates a client whose requests land on the returned receiver.
pub fn create_mock_client(buffer_size: usize) -> (CatalogClient, mpsc::Receiver<CatalogRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CatalogClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
) -> Option<(String, Vec<Magazine>, Response<CatalogId>)> {
    match receiver.recv().await {
        Some(CatalogRequest::Create { name, magazines, respond_to }) => Some((name, magazines, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Sort request
pub async fn expect_sort(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
) -> Option<(CatalogId, SortKey, Response<()>)> {
    match receiver.recv().await {
        Some(CatalogRequest::Sort { id, key, respond_to }) => Some((id, key, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Query request
pub async fn expect_query(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
) -> Option<(CatalogId, CatalogQuery, Response<CatalogQueryResult>)> {
    match receiver.recv().await {
        Some(CatalogRequest::Query { id, query, respond_to }) => Some((id, query, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an UpdateEdition request
pub async fn expect_update_edition(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
) -> Option<(CatalogId, usize, EditionUpdate, Response<Edition>)> {
    match receiver.recv().await {
        Some(CatalogRequest::UpdateEdition { id, position, update, respond_to }) => {
            Some((id, position, update, respond_to))
        }
        _ => None,
    }
}
