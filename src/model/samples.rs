//! Sample magazines for demos and lookup benchmarks.

use crate::model::defaults::today;
use crate::model::{Article, Edition, Magazine, Periodicity, Person};
use chrono::{Days, Months, NaiveDate};

fn years_ago(years: u32) -> NaiveDate {
    let now = today();
    now.checked_sub_months(Months::new(years * 12)).unwrap_or(now)
}

fn days_from_today(days: i64) -> NaiveDate {
    let now = today();
    let shifted = if days >= 0 {
        now.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        now.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.unwrap_or(now)
}

/// Builds the `index`-th generated magazine.
///
/// Released `index` days from today with circulation `1000 + 100 * index`, one
/// editor, and one article by a different author rated `3.0 + index % 3`.
pub fn generate_magazine(index: usize) -> Magazine {
    let release = days_from_today(i64::try_from(index).unwrap_or(i64::MAX));
    let circulation = 1000u64.saturating_add((index as u64).saturating_mul(100));
    let mut magazine = Magazine::from_edition(
        Edition::from_parts(format!("Magazine {}", index), release, circulation),
        Periodicity::Monthly,
    );
    magazine.add_editors([Person::new(format!("Editor {}", index), "Sample", years_ago(30))]);
    magazine.add_articles([Article::new(
        Person::new(format!("Author {}", index), "Sample", years_ago(25)),
        format!("Article {}", index),
        3.0 + (index % 3) as f64,
    )]);
    magazine
}

/// The two magazines a fresh collection is seeded with.
pub fn default_magazines() -> Vec<Magazine> {
    let mut science = Magazine::from_edition(Edition::from_parts("Science", today(), 5000), Periodicity::Monthly);
    science.add_articles([Article::new(
        Person::new("Author 1", "Sample", years_ago(30)),
        "Article 1",
        4.5,
    )]);

    let mut technology = Magazine::from_edition(
        Edition::from_parts("Technology", days_from_today(-7), 2000),
        Periodicity::Weekly,
    );
    technology.add_articles([Article::new(
        Person::new("Author 2", "Sample", years_ago(25)),
        "Article 2",
        4.2,
    )]);

    vec![science, technology]
}
