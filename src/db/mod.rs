pub mod bookings;
pub mod connection;
pub mod ids;
pub mod payments;
pub mod rooms;

pub use bookings::{
    check_out, complete_payment, create_booking, get_booking, list_bookings, NewBooking,
    NewPayment, PaymentKind,
};
pub use connection::{init_db, Database};
pub use payments::{list_payments, payments_for_booking};
pub use rooms::list_rooms;
