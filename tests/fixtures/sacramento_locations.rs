//! Real Sacramento-area locations for realistic test fixtures.

use zone_planner::geo::Coordinate;
use zone_planner::traits::Stop;
use zone_planner::zones::Zone;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

// ============================================================================
// City centers (the offline geocoder's reference points)
// ============================================================================

pub const SACRAMENTO: Location = Location::new("Sacramento", 38.5816, -121.4944);
pub const ROSEVILLE: Location = Location::new("Roseville", 38.7521, -121.2880);
pub const ELK_GROVE: Location = Location::new("Elk Grove", 38.4088, -121.3716);
pub const FOLSOM: Location = Location::new("Folsom", 38.6780, -121.1761);
pub const DAVIS: Location = Location::new("Davis", 38.5449, -121.7405);
pub const RANCHO_CORDOVA: Location = Location::new("Rancho Cordova", 38.5891, -121.3027);
pub const CITRUS_HEIGHTS: Location = Location::new("Citrus Heights", 38.7071, -121.2811);
pub const CARMICHAEL: Location = Location::new("Carmichael", 38.6252, -121.3283);

// ============================================================================
// Builders
// ============================================================================

/// Zone centered on a fixture location, Mon/Wed service, capacity 6.
pub fn zone_at(id: &str, center: &Location, radius_miles: f64) -> Zone {
    Zone {
        id: id.to_string(),
        name: center.name.to_string(),
        center: center.coordinate(),
        radius_miles,
        assigned_weekdays: vec![1, 3],
        max_appointments_per_day: 6,
        avg_service_duration_minutes: 90,
        travel_buffer_minutes: 15,
    }
}

/// An appointment projected down to what the route optimizer needs.
#[derive(Debug, Clone)]
pub struct AppointmentStop {
    pub id: String,
    pub coordinate: Coordinate,
}

impl AppointmentStop {
    pub fn new(id: &str, location: &Location) -> Self {
        Self {
            id: id.to_string(),
            coordinate: location.coordinate(),
        }
    }
}

impl Stop for AppointmentStop {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn location(&self) -> Coordinate {
        self.coordinate
    }
}
