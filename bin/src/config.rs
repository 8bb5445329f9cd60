//! Process environment and logging setup.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tickload_lib::{ApiConfig, BASE_URL_ENV};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::GlobalArgs;

/// Loads variables from `path`, or from `./.env` when no path is given.
///
/// Variables already set in the process environment win. A missing default
/// file is not an error; a missing explicit file is.
pub(crate) fn load_env_file(path: Option<&Path>) -> Result<Option<PathBuf>> {
    match path {
        Some(path) => {
            dotenvy::from_path(path)
                .with_context(|| format!("Failed to load env file {}", path.display()))?;
            Ok(Some(path.to_path_buf()))
        }
        None => match dotenvy::dotenv() {
            Ok(path) => Ok(Some(path)),
            Err(e) if e.not_found() => Ok(None),
            Err(e) => Err(e).context("Failed to load .env"),
        },
    }
}

/// Default log directives for a verbosity level.
fn default_directives(verbose: u8, quiet: bool) -> &'static str {
    match (quiet, verbose) {
        (true, _) => "warn",
        (false, 0) => "warn,tickload=info",
        (false, 1) => "warn,tickload=debug",
        (false, _) => "info,tickload=trace",
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the verbosity flags.
pub(crate) fn init_tracing(verbose: u8, quiet: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose, quiet)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose > 0)
                .compact(),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

/// Reads the API key and resolves the base URL: `--base-url`, then
/// `MASSIVE_BASE_URL`, then the public API.
///
/// Must run after [`load_env_file`] so that values from the env file apply.
pub(crate) fn api_config(global: &GlobalArgs) -> Result<ApiConfig> {
    let api = ApiConfig::from_env()?;
    let base_url = global
        .base_url
        .clone()
        .or_else(|| std::env::var(BASE_URL_ENV).ok().filter(|v| !v.is_empty()));
    Ok(match base_url {
        Some(base_url) => api.with_base_url(base_url),
        None => api,
    })
}
