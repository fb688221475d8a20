use crate::model::defaults::{today, Defaults};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A person who can edit a magazine or write an article.
///
/// Equality is by value: two people with the same names and birth date are
/// equal even when they are different instances. Use [`Person::is_same`] to
/// ask whether two references point at the same instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    first_name: String,
    last_name: String,
    birth_date: NaiveDate,
}

impl Person {
    /// Creates a new Person.
    ///
    /// # Arguments
    /// * `first_name` - Given name
    /// * `last_name` - Family name
    /// * `birth_date` - Date of birth
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, birth_date: NaiveDate) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_date,
        }
    }

    /// Creates a placeholder person born today.
    pub fn from_defaults(defaults: &Defaults) -> Self {
        Self::new(defaults.name.clone(), defaults.name.clone(), today())
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// Returns an independent copy with identical field values.
    pub fn deep_copy(&self) -> Self {
        self.clone()
    }

    /// Identity check: true only when both references point at the same instance.
    pub fn is_same(&self, other: &Person) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Default for Person {
    fn default() -> Self {
        Self::from_defaults(&Defaults::default())
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}, born {}",
            self.first_name,
            self.last_name,
            self.birth_date.format("%Y-%m-%d")
        )
    }
}
