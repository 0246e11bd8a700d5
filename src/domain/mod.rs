pub mod billing;
pub mod booking;
pub mod logic;
pub mod payment;
pub mod room;

pub use booking::{Booking, PaymentStatus};
pub use logic::{
    bookings_on, future_bookings, payments_on, relevant_booking, resolve_room_views,
    scan_booking_integrity, IntegrityIssue,
};
pub use payment::{Payment, PaymentMode};
pub use room::{Room, RoomStatus, RoomView};
