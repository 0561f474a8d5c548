//! Core domain traits for the zone planner.
//!
//! These are intentionally minimal and domain-agnostic. Concrete apps
//! should implement them for their own data models.

use std::hash::Hash;

use crate::geo::Coordinate;
use crate::geocode::{GeocodeError, GeocodedAddress};

/// Unique identifier for planner entities.
pub trait Id: Clone + Eq + Hash {}

impl<T> Id for T where T: Clone + Eq + Hash {}

/// A single geocoded stop on a technician's day: typically an
/// appointment projected down to its id and service location.
pub trait Stop {
    type Id: Id;

    fn id(&self) -> &Self::Id;

    /// Service location for this stop.
    fn location(&self) -> Coordinate;
}

/// Resolves a free-text address to a coordinate.
///
/// Implemented by the remote maps client, the deterministic offline
/// mock, and the fallback composition of the two.
pub trait Geocoder {
    fn geocode(&self, address: &str) -> Result<GeocodedAddress, GeocodeError>;
}
