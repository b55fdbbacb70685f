//! Core resolver types.

use std::sync::Arc;

use thiserror::Error;

/// An immutable, ordered list of sub-breed names.
///
/// Cloning is cheap (reference count bump) and the contents can never be
/// modified in place, so a value handed out by a cache is safe to share.
pub type SubBreeds = Arc<[String]>;

/// The breed could not be resolved.
///
/// Raised for unknown breeds, absent or blank input, and any failure of the
/// underlying lookup (transport, HTTP status, malformed response).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Breed not found: {}", .breed.as_deref().unwrap_or("<none>"))]
pub struct BreedNotFound {
    breed: Option<String>,
}

impl BreedNotFound {
    /// Creates a not-found error for the given input.
    pub fn new(breed: Option<&str>) -> Self {
        Self {
            breed: breed.map(str::to_string),
        }
    }

    /// The breed name exactly as it was requested, if any.
    pub fn breed(&self) -> Option<&str> {
        self.breed.as_deref()
    }
}

/// Errors from the HTTP transport layer.
///
/// These never leave a resolver; they are folded into [`BreedNotFound`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpError {
    /// The HTTP client could not be constructed.
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(String),

    /// The request could not be sent or timed out.
    #[error("Request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// The response body could not be read.
    #[error("Failed to read response: {0}")]
    Body(String),
}

/// Trait for anything that can resolve a breed to its sub-breeds.
///
/// Implementations may hit the network, read a static table, or wrap another
/// fetcher (see [`CachingBreedFetcher`](crate::cache::CachingBreedFetcher)).
///
/// # Thread Safety
///
/// Fetchers must be `Send + Sync` so a single instance can serve several
/// threads.
pub trait BreedFetcher: Send + Sync {
    /// Resolves `breed` to its ordered list of sub-breeds.
    ///
    /// `None` stands for "no breed given". Implementations decide how to
    /// treat it; the bundled ones report it as [`BreedNotFound`].
    ///
    /// # Errors
    ///
    /// Returns [`BreedNotFound`] when no list could be obtained for any reason.
    fn sub_breeds(&self, breed: Option<&str>) -> Result<SubBreeds, BreedNotFound>;
}

impl<T: BreedFetcher + ?Sized> BreedFetcher for &T {
    fn sub_breeds(&self, breed: Option<&str>) -> Result<SubBreeds, BreedNotFound> {
        (**self).sub_breeds(breed)
    }
}

impl<T: BreedFetcher + ?Sized> BreedFetcher for Box<T> {
    fn sub_breeds(&self, breed: Option<&str>) -> Result<SubBreeds, BreedNotFound> {
        (**self).sub_breeds(breed)
    }
}

impl<T: BreedFetcher + ?Sized> BreedFetcher for Arc<T> {
    fn sub_breeds(&self, breed: Option<&str>) -> Result<SubBreeds, BreedNotFound> {
        (**self).sub_breeds(breed)
    }
}
