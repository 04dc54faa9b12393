use crate::error::Result;
use crate::models::{PhotonFeature, PhotonResponse};

/// Parse a Photon feature collection, keeping upstream order.
pub fn decode_features(body: &[u8]) -> Result<Vec<PhotonFeature>> {
    let response: PhotonResponse = serde_json::from_slice(body)?;
    Ok(response.features)
}
