//! End-to-end zone assignment and capacity scenarios with realistic
//! Sacramento-area zones.

mod fixtures;

use chrono::NaiveDate;
use zone_planner::capacity::check_availability;
use zone_planner::geo::{distance_miles, Coordinate};
use zone_planner::zones::assign_zone;

use fixtures::{zone_at, Location, DAVIS, ELK_GROVE, FOLSOM, ROSEVILLE};

#[test]
fn in_radius_client_books_only_on_service_days() {
    // Zone centered east of Sacramento, 6 mile radius, Mon/Wed service,
    // six appointments per day.
    let zone = zone_at("east", &Location::new("East Sacramento", 38.62, -121.30), 6.0);

    let client = Coordinate::new(38.60, -121.28);
    let dist = distance_miles(client, zone.center);
    assert!(dist > 1.0 && dist < 2.5, "expected ~1.6mi, got {dist}");

    let assignment = assign_zone(client, std::slice::from_ref(&zone)).unwrap();
    assert_eq!(assignment.zone_id, "east");
    assert!((assignment.distance_miles - dist).abs() < 1e-12);

    // 2025-06-03 is a Tuesday: not a service day, count is irrelevant.
    let tuesday = NaiveDate::from_ymd_opt(2025, 6, 3).unwrap();
    assert!(!check_availability(&zone, tuesday, 0).available);
    assert!(!check_availability(&zone, tuesday, 3).available);

    // 2025-06-02 is a Monday: full at six, bookable at five.
    let monday = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
    assert!(!check_availability(&zone, monday, 6).available);
    let open = check_availability(&zone, monday, 5);
    assert!(open.available);
    assert_eq!(open.current_count, 5);
    assert_eq!(open.max_capacity, 6);
}

#[test]
fn client_between_zones_goes_to_the_nearer_one() {
    let zones = vec![
        zone_at("north", &ROSEVILLE, 8.0),
        zone_at("east", &FOLSOM, 8.0),
    ];

    // Citrus Heights sits inside both radii but closer to Roseville.
    let client = fixtures::CITRUS_HEIGHTS.coordinate();
    let assignment = assign_zone(client, &zones).unwrap();
    assert_eq!(assignment.zone_id, "north");
}

#[test]
fn remote_client_is_never_stranded() {
    let zones = vec![
        zone_at("north", &ROSEVILLE, 5.0),
        zone_at("south", &ELK_GROVE, 5.0),
    ];

    // Davis is far outside both radii; the closest zone still takes it.
    let client = DAVIS.coordinate();
    let assignment = assign_zone(client, &zones).unwrap();
    assert_eq!(assignment.zone_id, "south");
    assert!(assignment.distance_miles > 5.0);
}

#[test]
fn no_zones_means_no_assignment() {
    assert_eq!(assign_zone(DAVIS.coordinate(), &[]), None);
}
