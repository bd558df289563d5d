//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.repolens.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `REPOLENS_QUERY`, `REPOLENS_TOKEN`, or
//!    legacy `GITHUB_TOKEN`
//! 4. **Command-line arguments** – `--query`/`-q` and friends

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::error::DiscoveryError;
use crate::location::SearchLocation;
use crate::search::refine::{LanguageFilter, SortKey};

/// GitHub REST API base used when none is configured.
const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `REPOLENS_QUERY` or `--query`: Search submitted on startup
/// - `REPOLENS_SORT` or `--sort`: Startup sort key (`none`, `stars`,
///   `forks`, `updated`)
/// - `REPOLENS_LANGUAGE` or `--language`: Startup language filter
/// - `REPOLENS_TOKEN`, `GITHUB_TOKEN`, or `--token`: Optional access token
/// - `REPOLENS_API_BASE` or `--api-base`: Alternative API base URL
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use repolens::RepolensConfig;
///
/// let config = RepolensConfig::load().expect("failed to load configuration");
/// let location = config.initial_location().expect("invalid startup state");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "REPOLENS",
    discovery(
        dotfile_name = ".repolens.toml",
        config_file_name = "repolens.toml",
        app_name = "repolens"
    )
)]
pub struct RepolensConfig {
    /// Search query submitted when the program starts.
    ///
    /// Together with `sort` and `language` this re-creates a view from a
    /// previously mirrored location.
    #[ortho_config(cli_short = 'q')]
    pub query: Option<String>,

    /// Startup sort key: `none`, `stars`, `forks`, or `updated`.
    #[ortho_config(cli_short = 's')]
    pub sort: Option<String>,

    /// Startup language filter; `all` selects every language.
    #[ortho_config(cli_short = 'l')]
    pub language: Option<String>,

    /// Personal access token for GitHub API authentication.
    ///
    /// The search endpoints work unauthenticated; a token only raises rate
    /// limits.
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Alternative GitHub API base URL (e.g. a GitHub Enterprise host).
    #[ortho_config()]
    pub api_base: Option<String>,
}

impl RepolensConfig {
    /// Returns the configured API base URL or the github.com default.
    #[must_use]
    pub fn api_base(&self) -> &str {
        self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
    }

    /// Resolves the optional token from configuration or the legacy
    /// `GITHUB_TOKEN` environment variable.
    ///
    /// Unlike most GitHub tooling the token is optional here; `None` simply
    /// means unauthenticated requests.
    #[must_use]
    pub fn resolve_token(&self) -> Option<String> {
        self.token
            .clone()
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .filter(|token| !token.trim().is_empty())
    }

    /// Builds the startup location from the configured query, sort key, and
    /// language filter.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::Configuration`] when the sort key is not
    /// one of `none`, `stars`, `forks`, or `updated`.
    pub fn initial_location(&self) -> Result<SearchLocation, DiscoveryError> {
        let sort = match self.sort.as_deref() {
            None => SortKey::None,
            Some(value) => value.parse()?,
        };
        let language = match self.language.as_deref() {
            None | Some("all") => LanguageFilter::All,
            Some(value) => LanguageFilter::Language(value.to_owned()),
        };
        Ok(SearchLocation {
            query: self.query.clone().unwrap_or_default().trim().to_owned(),
            sort,
            language,
        })
    }
}
