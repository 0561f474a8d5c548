//! Test fixtures for zone-planner.
//!
//! Provides realistic Sacramento-area test data: named city locations
//! and zone builders matching a typical mobile-detailing deployment.

pub mod sacramento_locations;

pub use sacramento_locations::*;
