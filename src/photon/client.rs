//! Forward search and reverse lookup against Photon.

use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::{retain_places, HttpTransport, Normalizer, QueryBuilder, Transport};
use crate::config::PhotonConfig;
use crate::error::Result;
use crate::models::{PhotonFeature, Place};

/// Per-request options
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Number of results requested upstream; the configured default when `None`
    pub limit: Option<u32>,
    /// Aborts the in-flight request when fired
    pub cancel: Option<CancellationToken>,
}

impl RequestOptions {
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_cancel(mut self, cancel: CancellationToken) -> Self {
        self.cancel = Some(cancel);
        self
    }
}

/// Photon client. Holds no per-request state, so concurrent calls are
/// fully independent (and never coalesced).
pub struct PhotonClient<T = HttpTransport> {
    transport: T,
    query: QueryBuilder,
    normalizer: Normalizer,
    default_limit: u32,
}

impl PhotonClient<HttpTransport> {
    pub fn new(config: &PhotonConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config.user_agent)?;
        Self::with_transport(transport, config)
    }
}

impl<T: Transport> PhotonClient<T> {
    pub fn with_transport(transport: T, config: &PhotonConfig) -> Result<Self> {
        Ok(Self {
            transport,
            query: QueryBuilder::new(&config.base_url, &config.lang)?,
            normalizer: Normalizer::new(config.unnamed_label.clone()),
            default_limit: config.default_limit,
        })
    }

    /// Forward search for `query`, optionally biased towards `lat`/`lon`.
    ///
    /// Only features tagged `osm_key=place` are returned.
    pub async fn search(
        &self,
        query: &str,
        lat: Option<f64>,
        lon: Option<f64>,
        options: RequestOptions,
    ) -> Result<Vec<Place>> {
        let limit = options.limit.unwrap_or(self.default_limit);
        let url = self.query.search_url(query, lat, lon, limit);

        let features = self.transport.fetch_raw(url, options.cancel).await?;
        let total = features.len();
        let places = retain_places(features);
        debug!("Search '{}': kept {} of {} features", query, places.len(), total);

        Ok(self.normalize(places))
    }

    /// Reverse lookup. Results are not filtered: the feature containing a
    /// coordinate is often a building or an address.
    pub async fn reverse(&self, lat: f64, lon: f64, options: RequestOptions) -> Result<Vec<Place>> {
        let limit = options.limit.unwrap_or(self.default_limit);
        let url = self.query.reverse_url(lat, lon, limit);

        let features = self.transport.fetch_raw(url, options.cancel).await?;
        debug!("Reverse ({}, {}): {} features", lat, lon, features.len());

        Ok(self.normalize(features))
    }

    fn normalize(&self, features: Vec<PhotonFeature>) -> Vec<Place> {
        features
            .into_iter()
            .map(|feature| self.normalizer.to_place(feature))
            .collect()
    }
}
