//! Slot availability engine
//!
//! Converts a charging point's confirmed reservations for one day into an
//! hour grid of bookable start times, each carrying the session lengths that
//! fit without colliding with a later reservation or running past the end of
//! the service day.
//!
//! The engine is pure and synchronous: it reads an already-fetched
//! reservation list and a caller-supplied reference time, holds no state,
//! and is recomputed from scratch on every input change. Fetching and
//! fetch-cancellation are the caller's concern.

use crate::domain::{Reservation, TimeOfDay, DURATION_CHOICES_MIN};

/// Last hour of the day at which a session may still start.
pub const DEFAULT_CLOSING_HOUR: u32 = 23;

/// One hour of the day grid: booked or free, and if free, which session
/// lengths fit starting at this hour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourSlot {
    /// Start hour, `0..=23`
    pub hour: u32,
    /// 12-hour display label for the start time, e.g. `"09:00 AM"`
    pub label_12h: String,
    /// Whether an existing reservation covers this hour
    pub is_booked: bool,
    /// Offerable durations in minutes, ordered ascending; empty when booked
    pub available_durations: Vec<u32>,
}

/// Compute the bookable hour grid for one charging point and day.
///
/// `reference` is the current wall-clock moment and determines the earliest
/// offerable hour: before minute 30 the current hour is still offered,
/// from minute 30 on only the next hour is. A reference past `closing_hour`
/// yields an empty grid, which is a normal outcome, not an error.
pub fn availability_grid(
    reservations: &[Reservation],
    reference: TimeOfDay,
    closing_hour: u32,
) -> Vec<HourSlot> {
    let booked = occupancy(reservations);

    let first_hour = if reference.minute() < 30 {
        reference.hour()
    } else {
        reference.hour() + 1
    };

    let closing_hour = closing_hour.min(23);
    if first_hour > closing_hour {
        return Vec::new();
    }

    (first_hour..=closing_hour)
        .map(|hour| hour_slot(hour, &booked))
        .collect()
}

/// Mark every hour covered by a reservation. An end hour of 0 (a label of
/// `"12:00 AM"`) means the reservation runs to the end of this day, so it
/// is folded to 24 and the final hour before midnight stays marked.
fn occupancy(reservations: &[Reservation]) -> [bool; 24] {
    let mut booked = [false; 24];
    for reservation in reservations {
        let start = reservation.start.hour();
        let end = reservation.end_hour_on_grid().min(24);
        for hour in start..end {
            booked[hour as usize] = true;
        }
    }
    booked
}

fn hour_slot(hour: u32, booked: &[bool; 24]) -> HourSlot {
    let is_booked = booked[hour as usize];

    let available_durations = if is_booked {
        Vec::new()
    } else {
        DURATION_CHOICES_MIN
            .iter()
            .copied()
            .filter(|&duration| duration <= evening_cap(hour))
            .filter(|&duration| span_is_free(hour, duration / 60, booked))
            .collect()
    };

    // Whole hours only; from_hour cannot fail for 0..=23
    let label_12h = TimeOfDay::from_hour(hour)
        .map(|t| t.label_12h())
        .unwrap_or_default();

    HourSlot {
        hour,
        label_12h,
        is_booked,
        available_durations,
    }
}

/// Every hour in `[start, start + hours_needed)` must be free. Hours at or
/// past 24 are outside the grid and not checked here; the evening cap is
/// what keeps sessions from being offered across midnight.
fn span_is_free(start: u32, hours_needed: u32, booked: &[bool; 24]) -> bool {
    (start..start + hours_needed).all(|hour| hour >= 24 || !booked[hour as usize])
}

/// Service-day boundary caps, independent of occupancy: a 22:00 start may
/// run at most two hours, a 23:00 start at most one.
fn evening_cap(hour: u32) -> u32 {
    match hour {
        22 => 120,
        23 => 60,
        _ => 180,
    }
}
