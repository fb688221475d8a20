use crate::model::defaults::{today, Defaults};
use crate::model::error::{checked_circulation, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::Display;

/// Publication metadata shared by every kind of edition.
///
/// # Invariants
/// Circulation is never negative. [`Edition::new`] and [`Edition::set_circulation`]
/// take a signed value so that a negative request can be rejected with
/// [`ValidationError::NegativeCirculation`].
///
/// # Ordering
/// `Edition` deliberately has no `Ord` impl: equality compares every field
/// while the natural order compares names only. Sorting goes through the
/// named comparators ([`Edition::cmp_by_name`], [`Edition::cmp_by_release_date`],
/// [`Edition::cmp_by_circulation`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edition {
    name: String,
    release_date: NaiveDate,
    circulation: u64,
}

impl Edition {
    /// Creates a new Edition.
    ///
    /// # Errors
    /// Returns [`ValidationError::NegativeCirculation`] if `circulation < 0`.
    pub fn new(name: impl Into<String>, release_date: NaiveDate, circulation: i64) -> Result<Self, ValidationError> {
        let circulation = checked_circulation(circulation)?;
        Ok(Self::from_parts(name, release_date, circulation))
    }

    pub(crate) fn from_parts(name: impl Into<String>, release_date: NaiveDate, circulation: u64) -> Self {
        Self {
            name: name.into(),
            release_date,
            circulation,
        }
    }

    /// Creates a placeholder edition released today.
    pub fn from_defaults(defaults: &Defaults) -> Self {
        Self::from_parts(format!("{} edition", defaults.name), today(), defaults.circulation)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn release_date(&self) -> NaiveDate {
        self.release_date
    }

    pub fn set_release_date(&mut self, release_date: NaiveDate) {
        self.release_date = release_date;
    }

    pub fn circulation(&self) -> u64 {
        self.circulation
    }

    /// Sets the circulation, keeping the previous value if `value` is negative.
    pub fn set_circulation(&mut self, value: i64) -> Result<(), ValidationError> {
        self.circulation = checked_circulation(value)?;
        Ok(())
    }

    /// Natural order: ordinal (byte-wise) comparison of names.
    pub fn cmp_by_name(&self, other: &Edition) -> Ordering {
        self.name.as_bytes().cmp(other.name.as_bytes())
    }

    /// Alternate comparator by release date, oldest first.
    pub fn cmp_by_release_date(a: &Edition, b: &Edition) -> Ordering {
        a.release_date.cmp(&b.release_date)
    }

    /// Alternate comparator by circulation, smallest first.
    pub fn cmp_by_circulation(a: &Edition, b: &Edition) -> Ordering {
        a.circulation.cmp(&b.circulation)
    }

    pub fn deep_copy(&self) -> Self {
        self.clone()
    }

    /// Identity check: true only when both references point at the same instance.
    pub fn is_same(&self, other: &Edition) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Default for Edition {
    fn default() -> Self {
        Self::from_defaults(&Defaults::default())
    }
}

impl Display for Edition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Edition: {}, released: {}, circulation: {}",
            self.name,
            self.release_date.format("%Y-%m-%d"),
            self.circulation
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_reads_back_fields() {
        let edition = Edition::new("Quarterly", date(2024, 1, 31), 0).unwrap();
        assert_eq!(edition.name(), "Quarterly");
        assert_eq!(edition.release_date(), date(2024, 1, 31));
        assert_eq!(edition.circulation(), 0);
    }

    #[test]
    fn test_negative_circulation_is_rejected() {
        let result = Edition::new("Quarterly", date(2024, 1, 31), -1);
        assert_eq!(result, Err(ValidationError::NegativeCirculation(-1)));
    }

    #[test]
    fn test_rejected_setter_keeps_previous_value() {
        let mut edition = Edition::new("Quarterly", date(2024, 1, 31), 250).unwrap();

        let err = edition.set_circulation(-10).unwrap_err();
        assert_eq!(err, ValidationError::NegativeCirculation(-10));
        assert_eq!(edition.circulation(), 250);

        edition.set_circulation(300).unwrap();
        assert_eq!(edition.circulation(), 300);
    }

    #[test]
    fn test_equality_uses_all_fields() {
        let a = Edition::new("A", date(2024, 1, 1), 10).unwrap();
        let b = Edition::new("A", date(2024, 1, 1), 10).unwrap();
        let c = Edition::new("A", date(2024, 1, 1), 11).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(!a.is_same(&b));
    }

    #[test]
    fn test_name_order_is_ordinal() {
        let upper = Edition::new("Zeta", date(2024, 1, 1), 1).unwrap();
        let lower = Edition::new("alpha", date(2023, 1, 1), 1).unwrap();

        // 'Z' (0x5A) sorts before 'a' (0x61) byte-wise.
        assert_eq!(upper.cmp_by_name(&lower), Ordering::Less);
        assert_eq!(Edition::cmp_by_release_date(&upper, &lower), Ordering::Greater);
    }

    #[test]
    fn test_name_order_and_equality_are_distinct() {
        let a = Edition::new("Same", date(2024, 1, 1), 1).unwrap();
        let b = Edition::new("Same", date(2020, 1, 1), 99).unwrap();

        assert_eq!(a.cmp_by_name(&b), Ordering::Equal);
        assert_ne!(a, b);
    }

    #[test]
    fn test_default_edition() {
        let edition = Edition::default();
        assert_eq!(edition.name(), "Unknown edition");
        assert_eq!(edition.circulation(), 1000);
    }
}
