//! # Catalog Client
//!
//! Provides a high-level API for interacting with the catalog actor.
//! It wraps the request channel and exposes domain-specific methods.
use crate::catalog_actor::{
    Catalog, CatalogError, CatalogId, CatalogQuery, CatalogQueryResult, CatalogRequest, EditionUpdate, Response,
};
use crate::model::{Edition, Magazine, Periodicity, SortKey};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Client for interacting with the catalog actor. Cheap to clone.
#[derive(Clone)]
pub struct CatalogClient {
    sender: mpsc::Sender<CatalogRequest>,
}

impl CatalogClient {
    pub fn new(sender: mpsc::Sender<CatalogRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(&self, build: impl FnOnce(Response<T>) -> CatalogRequest) -> Result<T, CatalogError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| CatalogError::ActorClosed)?;
        response.await.map_err(|_| CatalogError::ActorDropped)?
    }

    async fn query(&self, id: CatalogId, query: CatalogQuery) -> Result<CatalogQueryResult, CatalogError> {
        self.request(|respond_to| CatalogRequest::Query { id, query, respond_to })
            .await
    }

    #[instrument(skip(self, magazines))]
    pub async fn create_catalog(
        &self,
        name: impl Into<String> + std::fmt::Debug,
        magazines: Vec<Magazine>,
    ) -> Result<CatalogId, CatalogError> {
        debug!(count = magazines.len(), "Sending request");
        let name = name.into();
        self.request(|respond_to| CatalogRequest::Create { name, magazines, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: CatalogId) -> Result<Option<Catalog>, CatalogError> {
        debug!("Sending request");
        self.request(|respond_to| CatalogRequest::Get { id, respond_to })
            .await
    }

    /// Appends magazines and returns the catalog's new length.
    #[instrument(skip(self, magazines))]
    pub async fn add_magazines(&self, id: CatalogId, magazines: Vec<Magazine>) -> Result<usize, CatalogError> {
        debug!(count = magazines.len(), "Sending request");
        self.request(|respond_to| CatalogRequest::AddMagazines { id, magazines, respond_to })
            .await
    }

    /// Updates the edition metadata of the magazine at `position`.
    ///
    /// A negative circulation fails with [`CatalogError::Validation`] and
    /// leaves the magazine unchanged.
    #[instrument(skip(self))]
    pub async fn update_edition(
        &self,
        id: CatalogId,
        position: usize,
        update: EditionUpdate,
    ) -> Result<Edition, CatalogError> {
        debug!("Sending request");
        self.request(|respond_to| CatalogRequest::UpdateEdition { id, position, update, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn sort(&self, id: CatalogId, key: SortKey) -> Result<(), CatalogError> {
        debug!("Sending request");
        self.request(|respond_to| CatalogRequest::Sort { id, key, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn max_rating(&self, id: CatalogId) -> Result<f64, CatalogError> {
        debug!("Querying max rating");
        match self.query(id, CatalogQuery::MaxRating).await? {
            CatalogQueryResult::MaxRating(rating) => Ok(rating),
            CatalogQueryResult::Magazines(_) => unreachable!("MaxRating query must return MaxRating result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn magazines_with_periodicity(
        &self,
        id: CatalogId,
        periodicity: Periodicity,
    ) -> Result<Vec<Magazine>, CatalogError> {
        debug!("Querying by periodicity");
        match self.query(id, CatalogQuery::WithPeriodicity(periodicity)).await? {
            CatalogQueryResult::Magazines(magazines) => Ok(magazines),
            CatalogQueryResult::MaxRating(_) => unreachable!("WithPeriodicity query must return Magazines result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn magazines_with_rating_at_least(
        &self,
        id: CatalogId,
        threshold: f64,
    ) -> Result<Vec<Magazine>, CatalogError> {
        debug!("Querying by rating");
        match self.query(id, CatalogQuery::RatingAtLeast(threshold)).await? {
            CatalogQueryResult::Magazines(magazines) => Ok(magazines),
            CatalogQueryResult::MaxRating(_) => unreachable!("RatingAtLeast query must return Magazines result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: CatalogId) -> Result<(), CatalogError> {
        debug!("Sending request");
        self.request(|respond_to| CatalogRequest::Delete { id, respond_to })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_actor::mock::{create_mock_client, expect_create, expect_query, expect_sort, expect_update_edition};
    use crate::model::ValidationError;

    #[tokio::test]
    async fn test_create_catalog_sends_name_and_magazines() {
        let (client, mut receiver) = create_mock_client(10);

        let create_task = tokio::spawn(async move {
            client
                .create_catalog("Shelf", vec![Magazine::default()])
                .await
        });

        let (name, magazines, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(name, "Shelf");
        assert_eq!(magazines.len(), 1);
        responder.send(Ok(CatalogId(3))).unwrap();

        assert_eq!(create_task.await.unwrap(), Ok(CatalogId(3)));
    }

    #[tokio::test]
    async fn test_max_rating_unwraps_query_result() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move { client.max_rating(CatalogId(1)).await });

        let (id, query, responder) = expect_query(&mut receiver)
            .await
            .expect("Expected Query request");
        assert_eq!(id, CatalogId(1));
        assert!(matches!(query, CatalogQuery::MaxRating));
        responder.send(Ok(CatalogQueryResult::MaxRating(4.5))).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), 4.5);
    }

    #[tokio::test]
    async fn test_rating_query_sends_threshold() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move { client.magazines_with_rating_at_least(CatalogId(2), 4.0).await });

        let (_, query, responder) = expect_query(&mut receiver).await.expect("Expected Query request");
        assert!(matches!(query, CatalogQuery::RatingAtLeast(t) if t == 4.0));
        responder.send(Ok(CatalogQueryResult::Magazines(Vec::new()))).unwrap();

        assert!(task.await.unwrap().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sort_propagates_not_found() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move { client.sort(CatalogId(9), SortKey::Circulation).await });

        let (id, key, responder) = expect_sort(&mut receiver).await.expect("Expected Sort request");
        assert_eq!(key, SortKey::Circulation);
        responder.send(Err(CatalogError::NotFound(id))).unwrap();

        assert_eq!(task.await.unwrap(), Err(CatalogError::NotFound(CatalogId(9))));
    }

    #[tokio::test]
    async fn test_update_edition_propagates_validation_error() {
        let (client, mut receiver) = create_mock_client(10);

        let update = EditionUpdate {
            circulation: Some(-1),
            ..Default::default()
        };
        let task = tokio::spawn(async move { client.update_edition(CatalogId(1), 0, update).await });

        let (_, position, update, responder) = expect_update_edition(&mut receiver)
            .await
            .expect("Expected UpdateEdition request");
        assert_eq!(position, 0);
        assert_eq!(update.circulation, Some(-1));
        responder
            .send(Err(ValidationError::NegativeCirculation(-1).into()))
            .unwrap();

        assert_eq!(
            task.await.unwrap(),
            Err(CatalogError::Validation(ValidationError::NegativeCirculation(-1)))
        );
    }

    #[tokio::test]
    async fn test_closed_channel_reports_actor_closed() {
        let (client, receiver) = create_mock_client(10);
        drop(receiver);

        assert_eq!(client.get(CatalogId(1)).await.unwrap_err(), CatalogError::ActorClosed);
    }

    #[tokio::test]
    async fn test_dropped_responder_reports_actor_dropped() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move { client.sort(CatalogId(1), SortKey::Name).await });
        let (_, _, responder) = expect_sort(&mut receiver).await.expect("Expected Sort request");
        drop(responder);

        assert_eq!(task.await.unwrap(), Err(CatalogError::ActorDropped));
    }
}
