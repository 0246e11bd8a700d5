// src/domain/billing.rs

use super::booking::Booking;
use super::payment::Payment;

/// Flat house rate per night, used when the caller has no rate card.
pub const DEFAULT_NIGHTLY_RATE: f64 = 800.0;

/// Nights between check-in and check-out as calendar days. A same-day
/// stay is zero nights; billing treats it as a day-use booking.
pub fn stay_nights(booking: &Booking) -> i64 {
    (booking.check_out_day() - booking.check_in_day()).num_days()
}

pub fn total_cost(booking: &Booking, nightly_rate: f64) -> f64 {
    stay_nights(booking) as f64 * nightly_rate
}

/// The advance is recognized by its date: the payment recorded on the
/// booking's check-in day. Later payments settle the balance and are
/// not advances.
pub fn advance_payment_for<'a>(booking: &Booking, payments: &'a [Payment]) -> Option<&'a Payment> {
    payments
        .iter()
        .find(|p| p.booking_id == booking.id && p.paid_on.date() == booking.check_in_day())
}

/// Outstanding amount on a booking, floored at zero so an over-paid
/// advance never shows a negative balance.
pub fn balance_due(booking: &Booking, payments: &[Payment], nightly_rate: f64) -> f64 {
    let paid = advance_payment_for(booking, payments)
        .map(|p| p.amount)
        .unwrap_or(0.0);
    (total_cost(booking, nightly_rate) - paid).max(0.0)
}
