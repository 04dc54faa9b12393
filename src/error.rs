//! Error types for Photon requests.

use thiserror::Error;

/// Errors surfaced by [`crate::PhotonClient`].
///
/// Nothing is recovered locally: every failure reaches the caller as-is.
#[derive(Debug, Error)]
pub enum Error {
    /// Photon answered with a non-2xx status.
    #[error("Photon API error: HTTP {status}")]
    UpstreamHttp { status: u16 },

    /// Network failure, propagated unchanged.
    #[error("Photon request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The caller's cancellation token fired before the request completed.
    #[error("Photon request cancelled")]
    Cancelled,

    /// The response body was not a valid feature collection.
    #[error("Failed to decode Photon response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured base URL could not be parsed.
    #[error("Invalid Photon base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// HTTP status carried by an upstream error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::UpstreamHttp { status } => Some(*status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
