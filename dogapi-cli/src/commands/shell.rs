//! Interactive lookups against a single cache.
//!
//! Reads one breed per line. `:calls` prints the remote call counter,
//! `:cached` the number of cached breeds, `:quit` (or EOF) exits.

use std::io::{BufRead, Write};

use dogapi::cache::CachingBreedFetcher;
use dogapi::provider::BreedFetcher;

use super::common::format_result;
use crate::error::CliError;

const PROMPT: &str = "breed> ";

/// Run the read-eval-print loop until `:quit` or end of input.
pub fn run<F, R, W>(fetcher: &CachingBreedFetcher<F>, input: R, out: &mut W) -> Result<(), CliError>
where
    F: BreedFetcher,
    R: BufRead,
    W: Write,
{
    write!(out, "{}", PROMPT)?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        let command = line.trim();

        match command {
            "" => {}
            ":quit" | ":q" => break,
            ":calls" => writeln!(out, "Remote calls made: {}", fetcher.calls_made())?,
            ":cached" => writeln!(out, "Cached breeds: {}", fetcher.cached_breeds())?,
            breed => {
                let result = fetcher.sub_breeds(Some(breed));
                writeln!(out, "{}", format_result(breed, &result))?;
            }
        }

        write!(out, "{}", PROMPT)?;
        out.flush()?;
    }

    writeln!(out)?;
    Ok(())
}
