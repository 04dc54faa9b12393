//! Canonical place shape handed to callers.

use serde::{Serialize, Serializer};

use super::PhotonFeature;

/// Classification of a place
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceKind {
    City,
    Town,
    Village,
    Suburb,
    Street,
    /// Generic label when nothing more specific is known
    Place,
    /// Upstream category value (osm_value) without a dedicated variant
    Other(String),
}

impl PlaceKind {
    /// Map a label to its variant, keeping unknown labels as `Other`
    pub fn from_label(label: &str) -> Self {
        match label {
            "city" => PlaceKind::City,
            "town" => PlaceKind::Town,
            "village" => PlaceKind::Village,
            "suburb" => PlaceKind::Suburb,
            "street" => PlaceKind::Street,
            "place" => PlaceKind::Place,
            other => PlaceKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PlaceKind::City => "city",
            PlaceKind::Town => "town",
            PlaceKind::Village => "village",
            PlaceKind::Suburb => "suburb",
            PlaceKind::Street => "street",
            PlaceKind::Place => "place",
            PlaceKind::Other(label) => label,
        }
    }
}

impl std::fmt::Display for PlaceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PlaceKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A normalized geocoding result.
///
/// Built once per upstream feature and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub latitude: f64,
    pub longitude: f64,

    /// Never empty; falls back to the configured placeholder
    pub name: String,

    pub kind: PlaceKind,

    /// Locality breadcrumb without repeats of `name`, e.g. "Hauptstr. 5, Mitte, Berlin"
    pub context: String,

    /// "name, postcode, state, country" with missing parts left out
    pub display_name: String,

    /// The feature this place was derived from
    pub raw: PhotonFeature,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        for label in ["city", "town", "village", "suburb", "street", "place"] {
            assert_eq!(PlaceKind::from_label(label).as_str(), label);
        }
        assert_eq!(
            PlaceKind::from_label("hamlet"),
            PlaceKind::Other("hamlet".to_string())
        );
    }

    #[test]
    fn test_kind_serializes_as_label() {
        assert_eq!(serde_json::to_string(&PlaceKind::Town).unwrap(), "\"town\"");
        assert_eq!(
            serde_json::to_string(&PlaceKind::Other("locality".into())).unwrap(),
            "\"locality\""
        );
    }
}
