//! Static in-memory breed table.

use std::collections::HashMap;

use crate::provider::{BreedFetcher, BreedNotFound, SubBreeds};

/// Breed fetcher backed by a fixed table.
///
/// Names are matched case-insensitively. Useful offline and as a
/// deterministic delegate in tests.
#[derive(Debug, Clone, Default)]
pub struct StaticBreedFetcher {
    breeds: HashMap<String, SubBreeds>,
}

impl StaticBreedFetcher {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a breed and its sub-breeds.
    pub fn with_breed<I, S>(mut self, breed: &str, sub_breeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list: Vec<String> = sub_breeds.into_iter().map(Into::into).collect();
        self.breeds.insert(breed.to_lowercase(), list.into());
        self
    }

    /// Number of breeds in the table.
    pub fn len(&self) -> usize {
        self.breeds.len()
    }

    /// Returns true if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.breeds.is_empty()
    }
}

impl BreedFetcher for StaticBreedFetcher {
    fn sub_breeds(&self, breed: Option<&str>) -> Result<SubBreeds, BreedNotFound> {
        breed
            .filter(|name| !name.trim().is_empty())
            .and_then(|name| self.breeds.get(&name.to_lowercase()))
            .cloned()
            .ok_or_else(|| BreedNotFound::new(breed))
    }
}
