use crate::model::defaults::Defaults;
use crate::model::{Person, RateAndCopy};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// An article written by a single author.
///
/// Ratings are conventionally in `[0, 5]`, but the range is not enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    author: Person,
    title: String,
    rating: f64,
}

impl Article {
    /// Creates a new Article.
    ///
    /// # Arguments
    /// * `author` - Person who wrote the article
    /// * `title` - Article title
    /// * `rating` - Reader rating
    pub fn new(author: Person, title: impl Into<String>, rating: f64) -> Self {
        Self {
            author,
            title: title.into(),
            rating,
        }
    }

    pub fn from_defaults(defaults: &Defaults) -> Self {
        Self::new(Person::from_defaults(defaults), defaults.article_title.clone(), 0.0)
    }

    pub fn author(&self) -> &Person {
        &self.author
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_rating(&mut self, rating: f64) {
        self.rating = rating;
    }
}

impl RateAndCopy for Article {
    fn rating(&self) -> f64 {
        self.rating
    }

    fn deep_copy(&self) -> Self {
        Self::new(self.author.deep_copy(), self.title.clone(), self.rating)
    }
}

impl Default for Article {
    fn default() -> Self {
        Self::from_defaults(&Defaults::default())
    }
}

impl Display for Article {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Article: {} by {}, rating: {:.2}", self.title, self.author, self.rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn author() -> Person {
        Person::new("Kim", "Stanley", NaiveDate::from_ymd_opt(1952, 3, 23).unwrap())
    }

    #[test]
    fn test_deep_copy_copies_author_and_values() {
        let original = Article::new(author(), "Red Mars", 4.5);
        let mut copy = original.deep_copy();

        assert_eq!(copy.author(), original.author());
        assert!(!copy.author().is_same(original.author()));
        assert_eq!(copy.title(), "Red Mars");
        assert_eq!(copy.rating(), 4.5);

        copy.set_title("Green Mars");
        copy.set_rating(3.0);
        assert_eq!(original.title(), "Red Mars");
        assert_eq!(original.rating(), 4.5);
    }

    #[test]
    fn test_default_article() {
        let article = Article::default();
        assert_eq!(article.title(), "Untitled");
        assert_eq!(article.rating(), 0.0);
        assert_eq!(article.author().first_name(), "Unknown");
    }

    #[test]
    fn test_display_formats_rating_with_two_decimals() {
        let article = Article::new(author(), "Red Mars", 4.0);
        assert_eq!(article.to_string(), "Article: Red Mars by Kim Stanley, born 1952-03-23, rating: 4.00");
    }
}
