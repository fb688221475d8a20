//! Read-only queries the catalog actor answers about one catalog.

use crate::model::{Magazine, MagazineCollection, Periodicity};

/// Queries over a catalog's magazines.
#[derive(Debug, Clone)]
pub enum CatalogQuery {
    /// Highest magazine rating (`0.0` for an empty catalog).
    MaxRating,
    /// Magazines published with the given periodicity.
    WithPeriodicity(Periodicity),
    /// Magazines rated at least the given threshold.
    RatingAtLeast(f64),
}

/// Results from CatalogQuery - variants match the query that produced them
#[derive(Debug, Clone)]
pub enum CatalogQueryResult {
    MaxRating(f64),
    Magazines(Vec<Magazine>),
}

impl CatalogQuery {
    pub fn evaluate(&self, magazines: &MagazineCollection) -> CatalogQueryResult {
        match self {
            CatalogQuery::MaxRating => CatalogQueryResult::MaxRating(magazines.max_rating()),
            CatalogQuery::WithPeriodicity(periodicity) => CatalogQueryResult::Magazines(
                magazines.magazines_with_periodicity(*periodicity).cloned().collect(),
            ),
            CatalogQuery::RatingAtLeast(threshold) => CatalogQueryResult::Magazines(
                magazines
                    .magazines_with_rating_at_least(*threshold)
                    .into_iter()
                    .cloned()
                    .collect(),
            ),
        }
    }
}
