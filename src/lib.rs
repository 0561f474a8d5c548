//! zone-planner core
//!
//! Zone assignment, capacity checks, and route ordering for
//! mobile-service scheduling. Everything except the geocoder is a pure
//! function over caller-supplied data.

pub mod traits;
pub mod geo;
pub mod zones;
pub mod capacity;
pub mod route;
pub mod geocode;
