// src/domain/booking.rs

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Payment state of a booking over its lifetime. Bookings are created
/// either fully paid or with an advance; `Pending` only appears in
/// legacy records and is treated like an advance (payment still owed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Paid,
    #[serde(rename = "Advance Paid")]
    AdvancePaid,
    Pending,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::AdvancePaid => "Advance Paid",
            PaymentStatus::Pending => "Pending",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Paid" => Some(PaymentStatus::Paid),
            "Advance Paid" => Some(PaymentStatus::AdvancePaid),
            "Pending" => Some(PaymentStatus::Pending),
            _ => None,
        }
    }

    /// True when the guest still owes money on the booking.
    pub fn owes_balance(&self) -> bool {
        !matches!(self, PaymentStatus::Paid)
    }
}

/// A stay reservation for one room. `check_in` and `check_out` are
/// calendar-day boundaries: time of day carries no meaning and every
/// comparison runs on the `*_day()` projections.
///
/// Invariant: `check_in <= check_out`. The store rejects writes that
/// violate it; older records that do are skipped during classification
/// and reported by `scan_booking_integrity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub room_id: String,
    pub room_number: String,
    pub guest_name: String,
    pub check_in: NaiveDateTime,
    pub check_out: NaiveDateTime,
    pub num_persons: i64,
    pub payment_status: PaymentStatus,
}

impl Booking {
    /// First day of the stay.
    pub fn check_in_day(&self) -> NaiveDate {
        self.check_in.date()
    }

    /// Last day of the stay. The room counts as occupied through this
    /// whole day; it only turns available the day after.
    pub fn check_out_day(&self) -> NaiveDate {
        self.check_out.date()
    }

    pub fn is_well_formed(&self) -> bool {
        self.check_in_day() <= self.check_out_day()
    }

    /// Whether `day` falls within the stay, check-out day included.
    pub fn covers(&self, day: NaiveDate) -> bool {
        self.check_in_day() <= day && day <= self.check_out_day()
    }

    /// Whether the stay has fully elapsed as of `day`.
    pub fn concluded_by(&self, day: NaiveDate) -> bool {
        self.check_out_day() < day
    }
}
