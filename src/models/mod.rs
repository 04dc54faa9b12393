//! Core data models for Photon results.

pub mod feature;
pub mod location;
pub mod place;

pub use feature::{OsmType, PhotonFeature, PhotonProperties, PhotonResponse, PointGeometry};
pub use location::{Location, DEFAULT_LOCATION, DEFAULT_LOCATION_NAME};
pub use place::{Place, PlaceKind};
