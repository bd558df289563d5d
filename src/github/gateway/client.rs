//! Octocrab client construction helpers for gateway implementations.

use http::Uri;
use octocrab::Octocrab;

use crate::github::error::DiscoveryError;

use super::error_mapping::map_octocrab_error;

/// Builds an Octocrab client for the given API base URL.
///
/// The search endpoints work unauthenticated; a personal access token can be
/// supplied to raise the rate limits GitHub applies to anonymous callers.
///
/// # Errors
///
/// Returns [`DiscoveryError::Configuration`] when the base URI cannot be
/// parsed and [`DiscoveryError::Unexpected`] when Octocrab fails to
/// construct a client.
pub(super) fn build_octocrab_client(
    api_base: &str,
    token: Option<&str>,
) -> Result<Octocrab, DiscoveryError> {
    let base_uri: Uri = api_base
        .parse::<Uri>()
        .map_err(|error| DiscoveryError::Configuration {
            message: format!("invalid API base URL `{api_base}`: {error}"),
        })?;

    let builder = match token {
        Some(value) => Octocrab::builder().personal_token(value.to_owned()),
        None => Octocrab::builder(),
    };

    builder
        .base_uri(base_uri)
        .map_err(|error| DiscoveryError::Unexpected {
            message: format!("build client failed: {error}"),
        })?
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}
