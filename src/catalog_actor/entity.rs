//! The state owned by the catalog actor.

use crate::model::{Edition, Magazine, MagazineCollection, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogId(pub u64);

impl From<u64> for CatalogId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for CatalogId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "catalog_{}", self.0)
    }
}

/// A named magazine collection managed by the catalog actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub id: CatalogId,
    pub name: String,
    pub magazines: MagazineCollection,
}

impl Catalog {
    pub fn new(id: CatalogId, name: impl Into<String>, magazines: impl IntoIterator<Item = Magazine>) -> Self {
        Self {
            id,
            name: name.into(),
            magazines: magazines.into_iter().collect(),
        }
    }
}

/// Partial update of a magazine's edition metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditionUpdate {
    pub name: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub circulation: Option<i64>,
}

impl EditionUpdate {
    /// Applies the update and returns the resulting edition snapshot.
    ///
    /// Circulation is validated before anything is written, so a rejected
    /// update leaves the magazine unchanged.
    pub fn apply(self, magazine: &mut Magazine) -> Result<Edition, ValidationError> {
        if let Some(circulation) = self.circulation {
            magazine.set_circulation(circulation)?;
        }
        if let Some(name) = self.name {
            magazine.set_name(name);
        }
        if let Some(release_date) = self.release_date {
            magazine.set_release_date(release_date);
        }
        Ok(magazine.edition())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Periodicity;

    fn magazine() -> Magazine {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        Magazine::new("Signal", Periodicity::Weekly, date, 800).unwrap()
    }

    #[test]
    fn test_apply_partial_update() {
        let mut m = magazine();
        let update = EditionUpdate {
            name: Some("Noise".to_string()),
            circulation: Some(900),
            ..Default::default()
        };

        let edition = update.apply(&mut m).unwrap();
        assert_eq!(edition.name(), "Noise");
        assert_eq!(edition.circulation(), 900);
        assert_eq!(m.release_date(), NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn test_rejected_update_changes_nothing() {
        let mut m = magazine();
        let update = EditionUpdate {
            name: Some("Noise".to_string()),
            circulation: Some(-3),
            ..Default::default()
        };

        assert_eq!(update.apply(&mut m), Err(ValidationError::NegativeCirculation(-3)));
        assert_eq!(m.name(), "Signal");
        assert_eq!(m.circulation(), 800);
    }

    #[test]
    fn test_catalog_id_display() {
        assert_eq!(CatalogId(7).to_string(), "catalog_7");
    }
}
