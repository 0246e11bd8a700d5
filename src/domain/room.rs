// src/domain/room.rs

use serde::{Deserialize, Serialize};

use super::booking::Booking;

/// A room as stored. `id` is a storage-assigned surrogate; `room_number`
/// is the natural key guests and staff use. The store may hold several
/// records with the same `room_number` (a known data condition), so
/// anything display-facing goes through `resolve_room_views`, which
/// de-duplicates.
///
/// There is deliberately no persisted `status` field: status is always
/// derived from the booking set for a given reference date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub room_number: String,
}

/// Display status of a room for one reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomStatus {
    /// No active or upcoming reservation constrains the room.
    Available,
    /// The reference date falls within an active stay.
    Occupied,
    /// Free on the reference date, but reserved for a later one.
    Booked,
}

impl RoomStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Available => "Available",
            RoomStatus::Occupied => "Occupied",
            RoomStatus::Booked => "Booked",
        }
    }
}

/// A room decorated for display: the stored fields plus the derived
/// status and the booking that produced it.
///
/// Exactly one status is set per room, `current_booking` is present iff
/// the room is `Occupied`, and `future_booking` iff it is `Booked`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomView {
    pub id: String,
    pub room_number: String,
    pub status: RoomStatus,
    pub current_booking: Option<Booking>,
    pub future_booking: Option<Booking>,
}
