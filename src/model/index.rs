//! Lookup structures keyed by edition metadata.
//!
//! An [`EditionIndex`] keeps the same magazines reachable four ways: an
//! ordered list of [`Edition`] snapshots, an ordered list of their rendered
//! descriptions, and two hash maps from each of those keys back to the
//! magazine. The list lookups are linear scans, the map lookups are hashed.

use crate::model::defaults::today;
use crate::model::samples::generate_magazine;
use crate::model::{Edition, Magazine};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct EditionIndex {
    editions: Vec<Edition>,
    descriptions: Vec<String>,
    by_edition: HashMap<Edition, Magazine>,
    by_description: HashMap<String, Magazine>,
}

impl EditionIndex {
    /// Indexes `count` generated magazines (see [`generate_magazine`]).
    pub fn generate(count: usize) -> Self {
        Self::from_magazines((0..count).map(generate_magazine))
    }

    /// Indexes the given magazines by their edition snapshot and its description.
    ///
    /// A later magazine with an equal edition replaces the earlier one in the
    /// maps; both snapshots stay in the ordered lists.
    pub fn from_magazines(magazines: impl IntoIterator<Item = Magazine>) -> Self {
        let mut index = Self::default();
        for magazine in magazines {
            let edition = magazine.edition();
            let description = edition.to_string();

            index.editions.push(edition.clone());
            index.descriptions.push(description.clone());
            index.by_edition.insert(edition, magazine.clone());
            index.by_description.insert(description, magazine);
        }
        debug!(size = index.editions.len(), "Edition index built");
        index
    }

    pub fn editions(&self) -> &[Edition] {
        &self.editions
    }

    pub fn descriptions(&self) -> &[String] {
        &self.descriptions
    }

    pub fn len(&self) -> usize {
        self.editions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.editions.is_empty()
    }

    /// Linear scan of the edition list.
    pub fn contains_edition(&self, edition: &Edition) -> bool {
        self.editions.contains(edition)
    }

    /// Hashed lookup of the edition map.
    pub fn contains_key(&self, edition: &Edition) -> bool {
        self.by_edition.contains_key(edition)
    }

    /// Linear scan of the indexed magazines, matching on edition metadata only.
    pub fn contains_magazine(&self, magazine: &Magazine) -> bool {
        self.by_edition
            .values()
            .any(|indexed| indexed.as_edition() == magazine.as_edition())
    }

    pub fn contains_description(&self, description: &str) -> bool {
        self.by_description.contains_key(description)
    }

    pub fn magazine_for(&self, edition: &Edition) -> Option<&Magazine> {
        self.by_edition.get(edition)
    }

    pub fn magazine_for_description(&self, description: &str) -> Option<&Magazine> {
        self.by_description.get(description)
    }

    /// First, middle and last indexed editions followed by one that is never indexed.
    pub fn probe_editions(&self) -> Vec<Edition> {
        let mut probes = Vec::with_capacity(4);
        if let (Some(first), Some(last)) = (self.editions.first(), self.editions.last()) {
            probes.push(first.clone());
            probes.push(self.editions[self.editions.len() / 2].clone());
            probes.push(last.clone());
        }
        probes.push(Edition::from_parts("Missing", today(), 0));
        probes
    }
}
