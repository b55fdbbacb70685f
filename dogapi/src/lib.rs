//! dogapi - Dog sub-breed lookups with in-process caching
//!
//! This library resolves a dog breed to its list of sub-breeds. Resolvers
//! implement [`provider::BreedFetcher`]; [`cache::CachingBreedFetcher`] sits in
//! front of any of them and remembers successful answers so repeated lookups
//! never hit the remote service twice.
//!
//! # Example
//!
//! ```no_run
//! use dogapi::cache::CachingBreedFetcher;
//! use dogapi::provider::{BreedFetcher, DogCeoFetcher, ReqwestClient};
//!
//! let fetcher = CachingBreedFetcher::new(DogCeoFetcher::new(ReqwestClient::new()?));
//!
//! match fetcher.sub_breeds(Some("hound")) {
//!     Ok(list) => println!("{}", list.join(", ")),
//!     Err(e) => eprintln!("{}", e),
//! }
//! println!("remote calls: {}", fetcher.calls_made());
//! # Ok::<(), dogapi::provider::HttpError>(())
//! ```

pub mod cache;
pub mod config;
pub mod logging;
pub mod provider;

/// Current version of the library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
