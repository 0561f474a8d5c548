//! Zone model and nearest-zone resolution.
//!
//! A zone is a geographic service cluster with a center, a soft radius,
//! assigned service weekdays, and a daily appointment ceiling. Clients
//! are assigned to the nearest zone whose radius contains them, falling
//! back to the globally closest zone so nobody is left stranded.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::geo::{self, Coordinate};
use crate::geocode::GeocodeError;
use crate::traits::Geocoder;

/// A geographic service cluster.
///
/// `avg_service_duration_minutes` and `travel_buffer_minutes` are
/// capacity-planning hints for operators; availability checks enforce
/// only the raw `max_appointments_per_day` ceiling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
    pub center: Coordinate,
    /// Soft boundary: clients within this radius are "naturally" in zone.
    pub radius_miles: f64,
    /// Serviced weekdays, 0=Sunday..6=Saturday. Empty means the zone is
    /// configured but never schedulable.
    pub assigned_weekdays: Vec<u32>,
    /// Hard per-day ceiling. Zero disables the zone entirely.
    pub max_appointments_per_day: u32,
    pub avg_service_duration_minutes: u32,
    pub travel_buffer_minutes: u32,
}

impl Zone {
    pub fn is_serviced_on(&self, weekday: u32) -> bool {
        self.assigned_weekdays.contains(&weekday)
    }
}

/// Result of resolving a point against the zone list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneAssignment {
    pub zone_id: String,
    pub distance_miles: f64,
}

/// Find the best zone for a point.
///
/// Prefers the nearest zone whose radius contains the point. When the
/// point is outside every radius, falls back to the globally closest
/// zone: a far-flung client is still routed to the nearest operational
/// cluster rather than left unassigned. Returns `None` only for an
/// empty zone list.
///
/// Ties are broken by position in `zones` (first wins), so callers
/// should pass zones in a stable order.
pub fn assign_zone(point: Coordinate, zones: &[Zone]) -> Option<ZoneAssignment> {
    let mut in_radius: Option<(usize, f64)> = None;
    let mut closest: Option<(usize, f64)> = None;

    for (i, zone) in zones.iter().enumerate() {
        let distance = geo::distance_miles(point, zone.center);

        if distance <= zone.radius_miles && in_radius.is_none_or(|(_, best)| distance < best) {
            in_radius = Some((i, distance));
        }
        if closest.is_none_or(|(_, best)| distance < best) {
            closest = Some((i, distance));
        }
    }

    if in_radius.is_none() {
        if let Some((i, distance)) = closest {
            debug!(
                zone_id = %zones[i].id,
                distance_miles = distance,
                "point outside all zone radii, assigning closest zone"
            );
        }
    }

    in_radius.or(closest).map(|(i, distance)| ZoneAssignment {
        zone_id: zones[i].id.clone(),
        distance_miles: distance,
    })
}

/// Geocode an address and resolve it to a zone.
///
/// This is the create/address-edit pipeline: the assignment it returns
/// is meant to be persisted on the client record, not re-derived on
/// read. A geocoding failure propagates without consulting the zones.
pub fn assign_zone_for_address<G: Geocoder>(
    geocoder: &G,
    address: &str,
    zones: &[Zone],
) -> Result<Option<ZoneAssignment>, GeocodeError> {
    let geocoded = geocoder.geocode(address)?;
    Ok(assign_zone(geocoded.coordinate, zones))
}
