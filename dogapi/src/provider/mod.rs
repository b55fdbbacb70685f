//! Breed resolver abstraction
//!
//! This module provides the [`BreedFetcher`] trait and its implementations:
//! a dog.ceo HTTP provider and a static in-memory table.
//!
//! # Example
//!
//! ```no_run
//! use dogapi::provider::{BreedFetcher, DogCeoFetcher, ReqwestClient};
//!
//! let http_client = ReqwestClient::new()?;
//! let fetcher = DogCeoFetcher::new(http_client);
//! let sub_breeds = fetcher.sub_breeds(Some("hound"));
//! # Ok::<(), dogapi::provider::HttpError>(())
//! ```

mod dog_ceo;
mod http;
mod table;
mod types;

pub use dog_ceo::{DogCeoFetcher, DEFAULT_BASE_URL};
pub use http::{HttpClient, ReqwestClient, DEFAULT_TIMEOUT_SECS};
pub use table::StaticBreedFetcher;
pub use types::{BreedFetcher, BreedNotFound, HttpError, SubBreeds};

#[cfg(test)]
pub use http::tests::MockHttpClient;
