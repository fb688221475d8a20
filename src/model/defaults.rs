//! Construction defaults for the no-argument constructors.

use crate::model::Periodicity;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Circulation given to editions and magazines built without one.
pub const DEFAULT_CIRCULATION: u64 = 1000;

/// Placeholder values used by `Default` impls and `from_defaults` constructors.
///
/// These are a convention, not a contract. [`CatalogConfig`](crate::lifecycle::CatalogConfig)
/// can override them from the environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Name used for people, magazines and (suffixed) editions.
    pub name: String,
    pub article_title: String,
    pub circulation: u64,
    pub periodicity: Periodicity,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            name: "Unknown".to_string(),
            article_title: "Untitled".to_string(),
            circulation: DEFAULT_CIRCULATION,
            periodicity: Periodicity::Monthly,
        }
    }
}

/// Today's local calendar date.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
