use crate::model::defaults::{today, Defaults};
use crate::model::error::ValidationError;
use crate::model::{Article, Edition, Periodicity, Person, RateAndCopy};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::slice;

/// A periodical: an [`Edition`] plus its editors and articles.
///
/// The magazine embeds its edition metadata instead of inheriting it.
/// [`Magazine::as_edition`] borrows that part for comparators, while
/// [`Magazine::edition`] returns a detached snapshot.
///
/// # Iteration
/// Iterating over `&Magazine` yields the articles whose author is *not* one
/// of the editors, in article order. [`Magazine::articles_by_editors`] yields
/// exactly the remaining articles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Magazine {
    edition: Edition,
    periodicity: Periodicity,
    editors: Vec<Person>,
    articles: Vec<Article>,
}

impl Magazine {
    /// Creates a magazine with no editors and no articles.
    ///
    /// # Errors
    /// Returns [`ValidationError::NegativeCirculation`] if `circulation < 0`.
    pub fn new(
        name: impl Into<String>,
        periodicity: Periodicity,
        release_date: NaiveDate,
        circulation: i64,
    ) -> Result<Self, ValidationError> {
        Ok(Self::from_edition(Edition::new(name, release_date, circulation)?, periodicity))
    }

    /// Wraps existing edition metadata into an empty magazine.
    pub fn from_edition(edition: Edition, periodicity: Periodicity) -> Self {
        Self {
            edition,
            periodicity,
            editors: Vec::new(),
            articles: Vec::new(),
        }
    }

    pub fn from_defaults(defaults: &Defaults) -> Self {
        let edition = Edition::from_parts(defaults.name.clone(), today(), defaults.circulation);
        Self::from_edition(edition, defaults.periodicity)
    }

    pub fn name(&self) -> &str {
        self.edition.name()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.edition.set_name(name);
    }

    pub fn release_date(&self) -> NaiveDate {
        self.edition.release_date()
    }

    pub fn set_release_date(&mut self, release_date: NaiveDate) {
        self.edition.set_release_date(release_date);
    }

    pub fn circulation(&self) -> u64 {
        self.edition.circulation()
    }

    /// Sets the circulation, keeping the previous value if `value` is negative.
    pub fn set_circulation(&mut self, value: i64) -> Result<(), ValidationError> {
        self.edition.set_circulation(value)
    }

    pub fn periodicity(&self) -> Periodicity {
        self.periodicity
    }

    pub fn set_periodicity(&mut self, periodicity: Periodicity) {
        self.periodicity = periodicity;
    }

    pub fn editors(&self) -> &[Person] {
        &self.editors
    }

    pub fn editors_mut(&mut self) -> &mut Vec<Person> {
        &mut self.editors
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn articles_mut(&mut self) -> &mut Vec<Article> {
        &mut self.articles
    }

    /// Borrowed view of the edition metadata.
    pub fn as_edition(&self) -> &Edition {
        &self.edition
    }

    /// Detached snapshot of name, release date and circulation.
    pub fn edition(&self) -> Edition {
        self.edition.clone()
    }

    /// Overwrites name, release date and circulation. Periodicity, editors
    /// and articles are left untouched.
    pub fn set_edition(&mut self, edition: &Edition) {
        self.edition = edition.clone();
    }

    pub fn add_articles(&mut self, articles: impl IntoIterator<Item = Article>) {
        self.articles.extend(articles);
    }

    pub fn add_editors(&mut self, editors: impl IntoIterator<Item = Person>) {
        self.editors.extend(editors);
    }

    pub fn is_editor(&self, person: &Person) -> bool {
        self.editors.iter().any(|editor| editor == person)
    }

    /// Articles rated strictly above `threshold`.
    pub fn articles_with_rating_above(&self, threshold: f64) -> impl Iterator<Item = &Article> + '_ {
        self.articles.iter().filter(move |a| a.rating() > threshold)
    }

    /// Articles whose title contains `needle` (case-sensitive).
    pub fn articles_with_title_containing<'a>(&'a self, needle: &'a str) -> impl Iterator<Item = &'a Article> + 'a {
        self.articles.iter().filter(move |a| a.title().contains(needle))
    }

    /// Articles written by one of the editors. An article appears once even
    /// if several editors share the author's identity.
    pub fn articles_by_editors(&self) -> impl Iterator<Item = &Article> + '_ {
        self.articles.iter().filter(move |a| self.is_editor(a.author()))
    }

    /// Editors who are not the author of any article.
    pub fn editors_without_articles(&self) -> impl Iterator<Item = &Person> + '_ {
        self.editors
            .iter()
            .filter(move |editor| !self.articles.iter().any(|a| a.author() == *editor))
    }

    /// Articles whose author is not an editor. Same sequence as iterating `&Magazine`.
    pub fn non_editor_articles(&self) -> NonEditorArticles<'_> {
        NonEditorArticles {
            articles: self.articles.iter(),
            editors: &self.editors,
        }
    }

    /// One-line description.
    pub fn to_short_string(&self) -> String {
        format!(
            "Magazine: {}, periodicity: {}, released: {}, circulation: {}, average rating: {:.2}, editors: {}, articles: {}",
            self.name(),
            self.periodicity,
            self.release_date().format("%Y-%m-%d"),
            self.circulation(),
            self.rating(),
            self.editors.len(),
            self.articles.len()
        )
    }
}

impl RateAndCopy for Magazine {
    /// Mean article rating, or `0.0` without articles. Never cached.
    fn rating(&self) -> f64 {
        if self.articles.is_empty() {
            return 0.0;
        }
        let total: f64 = self.articles.iter().map(|a| a.rating()).sum();
        total / self.articles.len() as f64
    }

    fn deep_copy(&self) -> Self {
        Self {
            edition: self.edition.deep_copy(),
            periodicity: self.periodicity,
            editors: self.editors.iter().map(Person::deep_copy).collect(),
            articles: self.articles.iter().map(Article::deep_copy).collect(),
        }
    }
}

impl Default for Magazine {
    fn default() -> Self {
        Self::from_defaults(&Defaults::default())
    }
}

/// Iterator over the articles of a magazine not written by its editors.
#[derive(Clone)]
pub struct NonEditorArticles<'a> {
    articles: slice::Iter<'a, Article>,
    editors: &'a [Person],
}

impl<'a> Iterator for NonEditorArticles<'a> {
    type Item = &'a Article;

    fn next(&mut self) -> Option<Self::Item> {
        let editors = self.editors;
        self.articles.find(|a| !editors.contains(a.author()))
    }
}

impl<'a> IntoIterator for &'a Magazine {
    type Item = &'a Article;
    type IntoIter = NonEditorArticles<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.non_editor_articles()
    }
}

impl Display for Magazine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Magazine: {}, periodicity: {}, released: {}, circulation: {}",
            self.name(),
            self.periodicity,
            self.release_date().format("%Y-%m-%d"),
            self.circulation()
        )?;
        writeln!(f, "Editors:")?;
        for editor in &self.editors {
            writeln!(f, "  - {}", editor)?;
        }
        writeln!(f, "Articles:")?;
        for article in &self.articles {
            writeln!(f, "  - {}", article)?;
        }
        writeln!(f, "Average rating: {:.2}", self.rating())
    }
}
