// src/domain/logic.rs

use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::NaiveDate;

use super::booking::Booking;
use super::payment::Payment;
use super::room::{Room, RoomStatus, RoomView};

/// Derives the display status of every room for one reference day.
///
/// This is the one dense piece of logic in the crate, so the rules are
/// spelled out in full:
///
/// 1. Stored room records are de-duplicated by `room_number` (first
///    record wins) and ordered by numeric room number ascending.
/// 2. For each room, the relevant booking is the earliest-starting one
///    whose stay has not fully elapsed by `reference_day`. Bookings
///    with a check-out before their check-in are ignored here and
///    reported by `scan_booking_integrity` instead.
/// 3. If the reference day falls inside the relevant booking's stay
///    (check-out day included) the room is `Occupied`; if the stay
///    starts later the room is `Booked`; otherwise it is `Available`.
///
/// For a fixed booking the derived status therefore walks
/// `Booked -> Occupied -> Available` as the reference day advances,
/// and a room with no bookings is `Available` on every day.
///
/// Pure over its inputs; safe to re-run on every refresh.
pub fn resolve_room_views(
    reference_day: NaiveDate,
    rooms: &[Room],
    bookings: &[Booking],
) -> Vec<RoomView> {
    dedup_rooms(rooms)
        .into_iter()
        .map(|room| classify_room(reference_day, room, bookings))
        .collect()
}

/// One representative per room number, ordered for stable display.
fn dedup_rooms(rooms: &[Room]) -> Vec<&Room> {
    let mut seen = HashSet::new();
    let mut unique: Vec<&Room> = rooms
        .iter()
        .filter(|room| seen.insert(room.room_number.as_str()))
        .collect();
    unique.sort_by(|a, b| room_number_order(&a.room_number, &b.room_number));
    unique
}

/// Numeric room numbers sort by value ("2" before "10"); anything
/// non-numeric sorts lexicographically after them.
fn room_number_order(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// The earliest-starting booking for `room_number` whose stay has not
/// fully elapsed by `reference_day`. Ties on the check-in day break on
/// the booking id so repeated runs agree.
pub fn relevant_booking<'a>(
    reference_day: NaiveDate,
    room_number: &str,
    bookings: &'a [Booking],
) -> Option<&'a Booking> {
    bookings
        .iter()
        .filter(|b| b.room_number == room_number)
        .filter(|b| b.is_well_formed())
        .filter(|b| !b.concluded_by(reference_day))
        .min_by(|a, b| {
            a.check_in_day()
                .cmp(&b.check_in_day())
                .then_with(|| a.id.cmp(&b.id))
        })
}

fn classify_room(reference_day: NaiveDate, room: &Room, bookings: &[Booking]) -> RoomView {
    let (status, current, future) =
        match relevant_booking(reference_day, &room.room_number, bookings) {
            Some(b) if b.covers(reference_day) => (RoomStatus::Occupied, Some(b.clone()), None),
            Some(b) if reference_day < b.check_in_day() => {
                (RoomStatus::Booked, None, Some(b.clone()))
            }
            _ => (RoomStatus::Available, None, None),
        };

    RoomView {
        id: room.id.clone(),
        room_number: room.room_number.clone(),
        status,
        current_booking: current,
        future_booking: future,
    }
}

/// Bookings *starting* on `day`. This is the calendar drill-down list,
/// which is day-equality on the check-in day. It is deliberately not
/// the same question `resolve_room_views` answers: a stay spanning the
/// day makes the room occupied without appearing here.
pub fn bookings_on<'a>(day: NaiveDate, bookings: &'a [Booking]) -> Vec<&'a Booking> {
    bookings
        .iter()
        .filter(|b| b.check_in_day() == day)
        .collect()
}

/// Payments recorded on `day`.
pub fn payments_on<'a>(day: NaiveDate, payments: &'a [Payment]) -> Vec<&'a Payment> {
    payments
        .iter()
        .filter(|p| p.paid_on.date() == day)
        .collect()
}

/// Bookings starting strictly after `day`, soonest first.
pub fn future_bookings<'a>(day: NaiveDate, bookings: &'a [Booking]) -> Vec<&'a Booking> {
    let mut upcoming: Vec<&Booking> = bookings
        .iter()
        .filter(|b| b.is_well_formed())
        .filter(|b| b.check_in_day() > day)
        .collect();
    upcoming.sort_by(|a, b| {
        a.check_in_day()
            .cmp(&b.check_in_day())
            .then_with(|| a.id.cmp(&b.id))
    });
    upcoming
}

/// A booking the classifier refuses to act on.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegrityIssue {
    pub booking_id: String,
    pub room_number: String,
    pub reason: String,
}

/// The loud counterpart of the silent skip inside `relevant_booking`:
/// one entry per malformed booking, for callers that surface data
/// errors during development instead of hiding them from the display.
pub fn scan_booking_integrity(bookings: &[Booking]) -> Vec<IntegrityIssue> {
    bookings
        .iter()
        .filter(|b| !b.is_well_formed())
        .map(|b| IntegrityIssue {
            booking_id: b.id.clone(),
            room_number: b.room_number.clone(),
            reason: format!(
                "check-out {} precedes check-in {}",
                b.check_out_day(),
                b.check_in_day()
            ),
        })
        .collect()
}
