//! In-process caching for breed lookups.
//!
//! # Architecture
//!
//! ```text
//! caller ──► CachingBreedFetcher ──(miss)──► BreedFetcher (dog.ceo, table, ...)
//!                   │
//!                   ▼
//!        DashMap<BreedKey, SubBreeds>
//! ```
//!
//! # Key Format
//!
//! - `Some("Hound")` → `BreedKey::Named("hound")`
//! - `None` → `BreedKey::Absent`

mod caching;
mod key;

pub use caching::CachingBreedFetcher;
pub use key::BreedKey;
