//! Request URL construction.

use url::Url;

use crate::error::Result;

const SEARCH_PATH: &str = "/api";
const REVERSE_PATH: &str = "/reverse";

/// Builds Photon request URLs. Inputs are forwarded unchecked.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    base_url: Url,
    lang: String,
}

impl QueryBuilder {
    pub fn new(base_url: &str, lang: &str) -> Result<Self> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            lang: lang.to_string(),
        })
    }

    /// Forward search URL. `lat` and `lon` are bias hints, each set only when given.
    pub fn search_url(&self, query: &str, lat: Option<f64>, lon: Option<f64>, limit: u32) -> Url {
        let mut url = self.endpoint(SEARCH_PATH);
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("q", query)
                .append_pair("lang", &self.lang)
                .append_pair("limit", &limit.to_string());

            if let Some(lat) = lat {
                pairs.append_pair("lat", &lat.to_string());
            }
            if let Some(lon) = lon {
                pairs.append_pair("lon", &lon.to_string());
            }
        }
        url
    }

    /// Reverse lookup URL
    pub fn reverse_url(&self, lat: f64, lon: f64, limit: u32) -> Url {
        let mut url = self.endpoint(REVERSE_PATH);
        url.query_pairs_mut()
            .append_pair("lat", &lat.to_string())
            .append_pair("lon", &lon.to_string())
            .append_pair("lang", &self.lang)
            .append_pair("limit", &limit.to_string());
        url
    }

    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(path);
        url.set_query(None);
        url
    }
}
