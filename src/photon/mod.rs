//! Photon geocoding client.
//!
//! Both operations share one pipeline: build URL, fetch, decode, normalize.
//! Forward search additionally drops everything that is not an OSM `place`.

mod client;
mod decode;
mod filter;
pub mod normalize;
mod query;
mod transport;

pub use client::{PhotonClient, RequestOptions};
pub use decode::decode_features;
pub use filter::{is_place, retain_places};
pub use normalize::Normalizer;
pub use query::QueryBuilder;
pub use transport::{HttpTransport, Transport};
