//! Success-only memoizing decorator for breed fetchers.
//!
//! [`CachingBreedFetcher`] wraps any [`BreedFetcher`] and remembers every
//! successful answer for the lifetime of the decorator:
//!
//! - Keys are normalized with [`BreedKey::normalize`] (case-insensitive,
//!   absent input is its own key).
//! - Only successes are stored. A [`BreedNotFound`] is passed through
//!   unchanged and leaves no trace, so the next lookup delegates again.
//! - Stored lists are [`SubBreeds`] (`Arc<[String]>`); hits hand out the same
//!   allocation and nobody can mutate it.
//! - Every miss bumps a call counter right before delegating, whether or not
//!   the delegate succeeds.
//!
//! # Concurrency
//!
//! The map is a sharded [`DashMap`] and the counter an atomic, so the
//! decorator can be shared across threads. No lock is held while the
//! delegate runs. Concurrent misses for the same key may each delegate (and
//! each is counted); the first stored success wins and every racer gets that
//! value back, so an entry never changes once present.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use tracing::debug;

use super::key::BreedKey;
use crate::provider::{BreedFetcher, BreedNotFound, SubBreeds};

/// Caching decorator in front of a [`BreedFetcher`].
///
/// # Example
///
/// ```
/// use dogapi::cache::CachingBreedFetcher;
/// use dogapi::provider::{BreedFetcher, StaticBreedFetcher};
///
/// let table = StaticBreedFetcher::new().with_breed("hound", ["afghan", "basset"]);
/// let fetcher = CachingBreedFetcher::new(table);
///
/// let first = fetcher.sub_breeds(Some("Hound")).unwrap();
/// let second = fetcher.sub_breeds(Some("HOUND")).unwrap();
///
/// assert_eq!(first, second);
/// assert_eq!(fetcher.calls_made(), 1);
/// ```
pub struct CachingBreedFetcher<F: BreedFetcher> {
    /// The wrapped fetcher, consulted on misses.
    delegate: F,

    /// Successful results keyed by normalized breed.
    cache: DashMap<BreedKey, SubBreeds>,

    /// Number of delegate invocations.
    calls_made: AtomicU64,
}

impl<F: BreedFetcher> CachingBreedFetcher<F> {
    /// Wraps `delegate` with an empty cache and a zero call counter.
    pub fn new(delegate: F) -> Self {
        Self {
            delegate,
            cache: DashMap::new(),
            calls_made: AtomicU64::new(0),
        }
    }

    /// Number of times the wrapped fetcher has been called (cache misses).
    pub fn calls_made(&self) -> u64 {
        self.calls_made.load(Ordering::SeqCst)
    }

    /// Number of breeds currently cached.
    pub fn cached_breeds(&self) -> usize {
        self.cache.len()
    }

    /// Whether a lookup for `breed` would be served from the cache.
    pub fn is_cached(&self, breed: Option<&str>) -> bool {
        self.cache.contains_key(&BreedKey::normalize(breed))
    }

    /// The wrapped fetcher.
    pub fn inner(&self) -> &F {
        &self.delegate
    }

    fn lookup(&self, key: &BreedKey) -> Option<SubBreeds> {
        self.cache.get(key).map(|entry| entry.value().clone())
    }
}

impl<F: BreedFetcher> BreedFetcher for CachingBreedFetcher<F> {
    fn sub_breeds(&self, breed: Option<&str>) -> Result<SubBreeds, BreedNotFound> {
        let key = BreedKey::normalize(breed);

        if let Some(hit) = self.lookup(&key) {
            debug!(key = %key, "Breed cache hit");
            return Ok(hit);
        }

        let calls = self.calls_made.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(key = %key, calls, "Breed cache miss, delegating");

        let fetched = self.delegate.sub_breeds(breed)?;
        let stored = self.cache.entry(key).or_insert(fetched).value().clone();
        Ok(stored)
    }
}
