//! HTTP transport for Photon requests.

use std::future::Future;

use reqwest::header::ACCEPT;
use reqwest::Client;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use url::Url;

use super::decode_features;
use crate::error::{Error, Result};
use crate::models::PhotonFeature;

/// Fetches and decodes one feature collection.
///
/// The seam between the pipeline and the network; tests substitute a stub.
pub trait Transport {
    fn fetch_raw(
        &self,
        url: Url,
        cancel: Option<CancellationToken>,
    ) -> impl Future<Output = Result<Vec<PhotonFeature>>> + Send;
}

/// reqwest-backed transport. One GET per call, no retries, no timeout.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(user_agent: &str) -> Result<Self> {
        Ok(Self {
            client: Client::builder().user_agent(user_agent).build()?,
        })
    }

    /// Use an existing client (shared connection pool, custom TLS, ...)
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    async fn get(&self, url: Url) -> Result<Vec<PhotonFeature>> {
        debug!("Photon request: {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Photon returned status {}", status);
            return Err(Error::UpstreamHttp {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let features = decode_features(&body)?;
        debug!("Decoded {} Photon features", features.len());
        Ok(features)
    }
}

impl Transport for HttpTransport {
    async fn fetch_raw(
        &self,
        url: Url,
        cancel: Option<CancellationToken>,
    ) -> Result<Vec<PhotonFeature>> {
        let Some(cancel) = cancel else {
            return self.get(url).await;
        };

        // Losing the race drops the request future, which aborts the connection
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                warn!("Photon request cancelled");
                Err(Error::Cancelled)
            }
            result = self.get(url) => result,
        }
    }
}
