// src/domain/payment.rs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Accepted payment channels. The set is closed; anything else in the
/// store is a data error surfaced by the reading layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMode {
    #[serde(rename = "UPI")]
    Upi,
    Cash,
    GPay,
    PhonePe,
    #[serde(rename = "Net Banking")]
    NetBanking,
    Card,
}

/// Declaration order doubles as the stable display order for breakdowns.
pub const ALL_MODES: [PaymentMode; 6] = [
    PaymentMode::Upi,
    PaymentMode::Cash,
    PaymentMode::GPay,
    PaymentMode::PhonePe,
    PaymentMode::NetBanking,
    PaymentMode::Card,
];

impl PaymentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMode::Upi => "UPI",
            PaymentMode::Cash => "Cash",
            PaymentMode::GPay => "GPay",
            PaymentMode::PhonePe => "PhonePe",
            PaymentMode::NetBanking => "Net Banking",
            PaymentMode::Card => "Card",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "UPI" => Some(PaymentMode::Upi),
            "Cash" => Some(PaymentMode::Cash),
            "GPay" => Some(PaymentMode::GPay),
            "PhonePe" => Some(PaymentMode::PhonePe),
            "Net Banking" => Some(PaymentMode::NetBanking),
            "Card" => Some(PaymentMode::Card),
            _ => None,
        }
    }
}

/// A recorded payment against a booking. `paid_on` is day-granular like
/// every other date here; a payment stamped on the booking's check-in
/// day is the advance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub booking_id: String,
    pub room_id: String,
    pub room_number: String,
    pub amount: f64,
    pub mode: PaymentMode,
    pub paid_on: NaiveDateTime,
}
