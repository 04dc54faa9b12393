//! Raw Photon features, as returned by `/api` and `/reverse`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Type of the OSM object a feature was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OsmType {
    #[serde(rename = "N")]
    Node,
    #[serde(rename = "W")]
    Way,
    #[serde(rename = "R")]
    Relation,
}

/// GeoJSON feature collection
#[derive(Debug, Clone, Deserialize)]
pub struct PhotonResponse {
    pub features: Vec<PhotonFeature>,
}

/// A single upstream record. Never modified after decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotonFeature {
    pub geometry: PointGeometry,
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: PhotonProperties,
}

impl PhotonFeature {
    pub fn lon(&self) -> f64 {
        self.geometry.coordinates[0]
    }

    pub fn lat(&self) -> f64 {
        self.geometry.coordinates[1]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointGeometry {
    #[serde(rename = "type", default = "point_type")]
    pub geo_type: String,
    /// `[lon, lat]`; any further values (altitude) are dropped on decode
    #[serde(deserialize_with = "lon_lat")]
    pub coordinates: [f64; 2],
}

fn point_type() -> String {
    "Point".to_string()
}

/// A GeoJSON position has at least two values: longitude, latitude, then
/// optionally altitude.
fn lon_lat<'de, D>(deserializer: D) -> Result<[f64; 2], D::Error>
where
    D: Deserializer<'de>,
{
    let position = Vec::<f64>::deserialize(deserializer)?;
    match position.as_slice() {
        [lon, lat, ..] => Ok([*lon, *lat]),
        _ => Err(serde::de::Error::invalid_length(
            position.len(),
            &"a position with at least two values",
        )),
    }
}

/// Properties bag of a Photon feature.
///
/// Every field may be missing. An absent field (`None`) and an empty string
/// are kept apart; the normalizer decides how each is treated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhotonProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub osm_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub osm_type: Option<OsmType>,
    /// Category key, e.g. "place", "highway", "building"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub osm_key: Option<String>,
    /// Category value, e.g. "city", "residential", "yes"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub osm_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countrycode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub town: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub village: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suburb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub housenumber: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,

    /// Remaining upstream properties (extent, type, ...), kept for inspection
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Photon may send `"properties": null`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
