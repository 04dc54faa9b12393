use crate::models::PhotonFeature;

const PLACE_KEY: &str = "place";

/// Whether a feature is a named locality (`osm_key=place`) rather than a
/// road, building or administrative boundary.
pub fn is_place(feature: &PhotonFeature) -> bool {
    feature.properties.osm_key.as_deref() == Some(PLACE_KEY)
}

/// Drop every feature that is not a place, preserving order.
pub fn retain_places(mut features: Vec<PhotonFeature>) -> Vec<PhotonFeature> {
    features.retain(is_place);
    features
}
