//! Cache key normalization.

use std::fmt;

/// Normalized cache key for a breed lookup.
///
/// Names are lower-cased so lookups are case-insensitive. A missing breed
/// name gets its own variant, so it can never collide with a real name,
/// not even one spelled `"null"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BreedKey {
    /// No breed name was given.
    Absent,
    /// A lower-cased breed name.
    Named(String),
}

impl BreedKey {
    /// Normalizes a (possibly absent) breed name.
    pub fn normalize(breed: Option<&str>) -> Self {
        match breed {
            None => BreedKey::Absent,
            Some(name) => BreedKey::Named(name.to_lowercase()),
        }
    }
}

impl fmt::Display for BreedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreedKey::Absent => write!(f, "<absent>"),
            BreedKey::Named(name) => write!(f, "{}", name),
        }
    }
}
