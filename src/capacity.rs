//! Per-zone, per-day booking capacity checks.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::zones::Zone;

/// Structured capacity report for a zone on a calendar date.
///
/// When the date is not one of the zone's serviced weekdays the check
/// short-circuits: `available` is false and `current_count` is 0, so
/// the count is only meaningful for serviced days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityCheck {
    pub available: bool,
    pub current_count: u32,
    pub max_capacity: u32,
}

/// Decide whether a new appointment may be booked in `zone` on `date`.
///
/// `existing_count` is the number of non-cancelled appointments already
/// booked for this zone on that calendar day (midnight to midnight in
/// the business's local reference, start-inclusive). Counting is the
/// persistence layer's job; this function stays pure.
///
/// Never fails. A zone with `max_appointments_per_day == 0` is
/// permanently unavailable, which is a valid way to disable a zone.
pub fn check_availability(zone: &Zone, date: NaiveDate, existing_count: u32) -> AvailabilityCheck {
    let weekday = date.weekday().num_days_from_sunday();

    if !zone.is_serviced_on(weekday) {
        return AvailabilityCheck {
            available: false,
            current_count: 0,
            max_capacity: zone.max_appointments_per_day,
        };
    }

    AvailabilityCheck {
        available: existing_count < zone.max_appointments_per_day,
        current_count: existing_count,
        max_capacity: zone.max_appointments_per_day,
    }
}
