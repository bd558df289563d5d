//! Error mapping helpers for the Octocrab search gateway.

use crate::github::error::DiscoveryError;

/// Maps an octocrab error into the discovery error taxonomy.
///
/// HTTP-level failures keep their status code; everything else (transport
/// failures, unparseable bodies, client construction errors) is normalised
/// into the status-0 unexpected variant.
pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> DiscoveryError {
    if let octocrab::Error::GitHub { source, .. } = error {
        return DiscoveryError::Http {
            status: source.status_code.as_u16(),
            message: format!("{operation} failed: {message}", message = source.message),
        };
    }

    DiscoveryError::Unexpected {
        message: format!("{operation} failed: {error}"),
    }
}
