//! Sunwalk - a client-side geocoding layer on top of the Photon API
//!
//! This library turns Photon's loosely-typed GeoJSON features into a stable
//! [`Place`] shape for forward search and reverse lookup, and computes the
//! day's sun times for a position.

pub mod config;
pub mod error;
pub mod models;
pub mod photon;
pub mod sun;

pub use config::{Config, PhotonConfig};
pub use error::{Error, Result};
pub use models::{Location, Place, PlaceKind, DEFAULT_LOCATION};
pub use photon::{PhotonClient, RequestOptions};
pub use sun::{calculate_times, Times};
