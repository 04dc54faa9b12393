//! Mapping of raw Photon features onto [`Place`].
//!
//! Photon records carry any subset of city/town/village/street/... fields.
//! The four derivations below (name, kind, context, display name) are
//! independent and each reads its fields in a fixed priority order.

use crate::models::{PhotonFeature, PhotonProperties, Place, PlaceKind};

const SEPARATOR: &str = ", ";

/// Converts raw features into places
#[derive(Debug, Clone)]
pub struct Normalizer {
    unnamed_label: String,
}

impl Normalizer {
    pub fn new(unnamed_label: impl Into<String>) -> Self {
        Self {
            unnamed_label: unnamed_label.into(),
        }
    }

    /// Build a place, moving the feature into `Place::raw`.
    pub fn to_place(&self, feature: PhotonFeature) -> Place {
        let props = &feature.properties;

        let name = self.name(props);
        let kind = kind(props);
        let context = context(props, &name);
        let display_name = display_name(props, &name);

        Place {
            latitude: feature.lat(),
            longitude: feature.lon(),
            name,
            kind,
            context,
            display_name,
            raw: feature,
        }
    }

    /// First present, non-empty name-bearing field, else the placeholder.
    pub fn name(&self, props: &PhotonProperties) -> String {
        let candidates = [
            &props.name,
            &props.city,
            &props.town,
            &props.village,
            &props.suburb,
            &props.district,
            &props.street,
        ];

        candidates
            .into_iter()
            .filter_map(|field| non_empty(field))
            .next()
            .unwrap_or(self.unnamed_label.as_str())
            .to_string()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_UNNAMED_LABEL)
    }
}

/// Kind by field presence: city > town > village > suburb > street, then
/// the upstream category value, then the generic `place`.
///
/// Does not look at `name` or `district`, so a place named after its
/// district can still end up as `place`.
pub fn kind(props: &PhotonProperties) -> PlaceKind {
    let ranked = [
        (PlaceKind::City, &props.city),
        (PlaceKind::Town, &props.town),
        (PlaceKind::Village, &props.village),
        (PlaceKind::Suburb, &props.suburb),
        (PlaceKind::Street, &props.street),
    ];

    if let Some((kind, _)) = ranked.into_iter().find(|(_, field)| field.is_some()) {
        return kind;
    }

    match non_empty(&props.osm_value) {
        Some(value) => PlaceKind::from_label(value),
        None => PlaceKind::Place,
    }
}

/// Locality breadcrumb: street (+ house number), district, suburb, city,
/// county, state, country. District, suburb and city are left out when
/// they equal `name`.
pub fn context(props: &PhotonProperties, name: &str) -> String {
    let street = non_empty(&props.street).map(|street| match non_empty(&props.housenumber) {
        Some(number) => format!("{} {}", street, number),
        None => street.to_string(),
    });

    let parts = [
        street.as_deref(),
        unless_name(&props.district, name),
        unless_name(&props.suburb, name),
        unless_name(&props.city, name),
        non_empty(&props.county),
        non_empty(&props.state),
        non_empty(&props.country),
    ];

    join(parts)
}

/// "name, postcode, state, country"
pub fn display_name(props: &PhotonProperties, name: &str) -> String {
    join([
        Some(name).filter(|n| !n.is_empty()),
        non_empty(&props.postcode),
        non_empty(&props.state),
        non_empty(&props.country),
    ])
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

fn unless_name<'a>(field: &'a Option<String>, name: &str) -> Option<&'a str> {
    non_empty(field).filter(|value| *value != name)
}

fn join<'a>(parts: impl IntoIterator<Item = Option<&'a str>>) -> String {
    parts
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}
