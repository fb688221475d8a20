use crate::model::samples::default_magazines;
use crate::model::{Edition, Magazine, Periodicity, RateAndCopy};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::Display;

/// Key selecting one of the three edition comparators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    Name,
    ReleaseDate,
    Circulation,
}

impl SortKey {
    /// The comparator this key stands for.
    pub fn comparator(self) -> fn(&Edition, &Edition) -> Ordering {
        match self {
            SortKey::Name => Edition::cmp_by_name,
            SortKey::ReleaseDate => Edition::cmp_by_release_date,
            SortKey::Circulation => Edition::cmp_by_circulation,
        }
    }
}

/// An ordered, appendable list of magazines.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MagazineCollection {
    magazines: Vec<Magazine>,
}

impl MagazineCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn magazines(&self) -> &[Magazine] {
        &self.magazines
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Magazine> {
        self.magazines.iter()
    }

    pub fn len(&self) -> usize {
        self.magazines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.magazines.is_empty()
    }

    pub(crate) fn get_mut(&mut self, position: usize) -> Option<&mut Magazine> {
        self.magazines.get_mut(position)
    }

    pub fn add_magazines(&mut self, magazines: impl IntoIterator<Item = Magazine>) {
        self.magazines.extend(magazines);
    }

    /// Appends the two sample magazines.
    pub fn add_defaults(&mut self) {
        self.add_magazines(default_magazines());
    }

    /// Stable in-place sort using an injected edition comparator.
    pub fn sort_with(&mut self, mut compare: impl FnMut(&Edition, &Edition) -> Ordering) {
        self.magazines
            .sort_by(|a, b| compare(a.as_edition(), b.as_edition()));
    }

    pub fn sort_by(&mut self, key: SortKey) {
        self.sort_with(key.comparator());
    }

    pub fn sort_by_name(&mut self) {
        self.sort_with(Edition::cmp_by_name);
    }

    pub fn sort_by_release_date(&mut self) {
        self.sort_with(Edition::cmp_by_release_date);
    }

    pub fn sort_by_circulation(&mut self) {
        self.sort_with(Edition::cmp_by_circulation);
    }

    /// Highest magazine rating, `0.0` for an empty collection.
    pub fn max_rating(&self) -> f64 {
        self.magazines
            .iter()
            .map(|m| m.rating())
            .reduce(f64::max)
            .unwrap_or(0.0)
    }

    pub fn magazines_with_periodicity(&self, periodicity: Periodicity) -> impl Iterator<Item = &Magazine> + '_ {
        self.magazines
            .iter()
            .filter(move |m| m.periodicity() == periodicity)
    }

    pub fn monthly_magazines(&self) -> impl Iterator<Item = &Magazine> + '_ {
        self.magazines_with_periodicity(Periodicity::Monthly)
    }

    /// Magazines rated at least `threshold`, in current collection order.
    pub fn magazines_with_rating_at_least(&self, threshold: f64) -> Vec<&Magazine> {
        self.magazines
            .iter()
            .filter(|m| m.rating() >= threshold)
            .collect()
    }

    /// One line per magazine.
    pub fn to_short_string(&self) -> String {
        self.magazines
            .iter()
            .map(Magazine::to_short_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FromIterator<Magazine> for MagazineCollection {
    fn from_iter<I: IntoIterator<Item = Magazine>>(iter: I) -> Self {
        Self {
            magazines: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MagazineCollection {
    type Item = &'a Magazine;
    type IntoIter = std::slice::Iter<'a, Magazine>;

    fn into_iter(self) -> Self::IntoIter {
        self.magazines.iter()
    }
}

impl Display for MagazineCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, magazine) in self.magazines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", magazine)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Article, Person};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rated(name: &str, periodicity: Periodicity, rating: f64) -> Magazine {
        let mut m = Magazine::new(name, periodicity, date(2024, 1, 1), 100).unwrap();
        let author = Person::new("A", "B", date(1980, 1, 1));
        m.add_articles([Article::new(author, "Piece", rating)]);
        m
    }

    fn names(c: &MagazineCollection) -> Vec<&str> {
        c.iter().map(|m| m.name()).collect()
    }

    #[test]
    fn test_sorts() {
        let mut c: MagazineCollection = [
            Magazine::new("B", Periodicity::Weekly, date(2024, 3, 1), 500).unwrap(),
            Magazine::new("A", Periodicity::Weekly, date(2024, 1, 1), 100).unwrap(),
            Magazine::new("C", Periodicity::Weekly, date(2024, 2, 1), 300).unwrap(),
        ]
        .into_iter()
        .collect();

        c.sort_by_name();
        assert_eq!(names(&c), vec!["A", "B", "C"]);

        c.sort_by_release_date();
        assert_eq!(names(&c), vec!["A", "C", "B"]);

        c.sort_by_circulation();
        let circulations: Vec<u64> = c.iter().map(|m| m.circulation()).collect();
        assert_eq!(circulations, vec![100, 300, 500]);

        c.sort_by(SortKey::Name);
        assert_eq!(names(&c), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_max_rating() {
        let mut c = MagazineCollection::new();
        assert_eq!(c.max_rating(), 0.0);

        c.add_magazines([
            rated("x", Periodicity::Weekly, 3.0),
            rated("y", Periodicity::Weekly, 4.5),
            rated("z", Periodicity::Weekly, 2.0),
        ]);
        assert_eq!(c.max_rating(), 4.5);
    }

    #[test]
    fn test_rating_group_is_inclusive_and_ordered() {
        let mut c = MagazineCollection::new();
        c.add_magazines([
            rated("low", Periodicity::Weekly, 3.9),
            rated("edge", Periodicity::Weekly, 4.0),
            rated("high", Periodicity::Weekly, 4.1),
        ]);

        let group: Vec<&str> = c
            .magazines_with_rating_at_least(4.0)
            .into_iter()
            .map(|m| m.name())
            .collect();
        assert_eq!(group, vec!["edge", "high"]);
    }

    #[test]
    fn test_periodicity_filter() {
        let mut c = MagazineCollection::new();
        c.add_magazines([
            rated("w", Periodicity::Weekly, 1.0),
            rated("m1", Periodicity::Monthly, 1.0),
            rated("y", Periodicity::Yearly, 1.0),
            rated("m2", Periodicity::Monthly, 1.0),
        ]);

        let monthly: Vec<&str> = c.monthly_magazines().map(|m| m.name()).collect();
        assert_eq!(monthly, vec!["m1", "m2"]);
        assert_eq!(c.magazines_with_periodicity(Periodicity::Yearly).count(), 1);
    }

    #[test]
    fn test_add_defaults() {
        let mut c = MagazineCollection::new();
        c.add_defaults();
        assert_eq!(names(&c), vec!["Science", "Technology"]);
        assert_eq!(c.max_rating(), 4.5);
    }
}
