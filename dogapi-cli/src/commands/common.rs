//! Common types and utilities shared across CLI commands.

use std::path::PathBuf;

use clap::Args;
use console::style;
use dogapi::cache::CachingBreedFetcher;
use dogapi::config::ConfigFile;
use dogapi::provider::{BreedNotFound, DogCeoFetcher, ReqwestClient, SubBreeds};

use crate::error::CliError;

/// The fetcher stack every command uses.
pub type CliFetcher = CachingBreedFetcher<DogCeoFetcher<ReqwestClient>>;

/// Options shared by all subcommands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Path to config.ini (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the Dog API base URL
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Override the HTTP timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,
}

/// Load the config file and apply command-line overrides.
///
/// CLI values take precedence over the file.
pub fn resolve_config(args: &GlobalArgs) -> Result<ConfigFile, CliError> {
    let mut config = match &args.config {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::load_default()?,
    };

    if let Some(url) = &args.base_url {
        config.api.base_url = url.trim_end_matches('/').to_string();
    }
    if let Some(secs) = args.timeout.filter(|s| *s > 0) {
        config.api.timeout_secs = secs;
    }

    Ok(config)
}

/// Build the caching dog.ceo fetcher from config.
pub fn build_fetcher(config: &ConfigFile) -> Result<CliFetcher, CliError> {
    let client = ReqwestClient::with_timeout(config.api.timeout_secs)?;
    let provider = DogCeoFetcher::with_base_url(client, config.api.base_url.clone());
    Ok(CachingBreedFetcher::new(provider))
}

/// Render one lookup result as a single line.
pub fn format_result(breed: &str, result: &Result<SubBreeds, BreedNotFound>) -> String {
    match result {
        Ok(list) if list.is_empty() => {
            format!("{}: {}", style(breed).bold(), style("(no sub-breeds)").dim())
        }
        Ok(list) => format!("{}: {}", style(breed).bold(), list.join(", ")),
        Err(_) => format!("{}: {}", style(breed).bold(), style("not found").red()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn plain(s: String) -> String {
        console::strip_ansi_codes(&s).into_owned()
    }

    #[test]
    fn test_format_result_list() {
        let list: SubBreeds = vec!["afghan".to_string(), "basset".to_string()].into();
        assert_eq!(plain(format_result("hound", &Ok(list))), "hound: afghan, basset");
    }

    #[test]
    fn test_format_result_empty() {
        let list: SubBreeds = Vec::<String>::new().into();
        assert_eq!(plain(format_result("pug", &Ok(list))), "pug: (no sub-breeds)");
    }

    #[test]
    fn test_format_result_not_found() {
        let err = BreedNotFound::new(Some("unicorn"));
        assert_eq!(plain(format_result("unicorn", &Err(err))), "unicorn: not found");
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        fs::write(&path, "[api]\nbase_url = http://file/api\ntimeout_secs = 7\n").unwrap();

        let args = GlobalArgs {
            config: Some(path.clone()),
            base_url: Some("http://cli/api/".to_string()),
            timeout: None,
        };
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.api.base_url, "http://cli/api");
        assert_eq!(config.api.timeout_secs, 7);

        let args = GlobalArgs {
            config: Some(path),
            base_url: None,
            timeout: Some(3),
        };
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.api.base_url, "http://file/api");
        assert_eq!(config.api.timeout_secs, 3);
    }

    #[test]
    fn test_build_fetcher_uses_config() {
        let mut config = ConfigFile::default();
        config.api.base_url = "http://localhost:1/api".to_string();

        let fetcher = build_fetcher(&config).unwrap();
        assert_eq!(fetcher.inner().base_url(), "http://localhost:1/api");
        assert_eq!(fetcher.calls_made(), 0);
    }
}
