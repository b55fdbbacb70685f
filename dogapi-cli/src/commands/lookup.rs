//! One-shot breed lookups.

use std::io::Write;

use dogapi::cache::CachingBreedFetcher;
use dogapi::provider::BreedFetcher;

use super::common::format_result;
use crate::error::CliError;

/// Resolve each breed in order and print the results.
///
/// Repeated breeds (in any casing) are served from the cache. Fails with
/// [`CliError::NotFound`] if any breed could not be resolved.
pub fn run<F, W>(
    fetcher: &CachingBreedFetcher<F>,
    breeds: &[String],
    out: &mut W,
) -> Result<(), CliError>
where
    F: BreedFetcher,
    W: Write,
{
    let mut missing = 0;

    for breed in breeds {
        let result = fetcher.sub_breeds(Some(breed.as_str()));
        if result.is_err() {
            missing += 1;
        }
        writeln!(out, "{}", format_result(breed, &result))?;
    }

    writeln!(out, "Remote calls made: {}", fetcher.calls_made())?;

    if missing > 0 {
        return Err(CliError::NotFound(missing));
    }
    Ok(())
}
