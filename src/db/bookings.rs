// src/db/bookings.rs
use crate::db::connection::Database;
use crate::db::ids::new_record_id;
use crate::db::rooms::find_or_create_room;
use crate::domain::booking::{Booking, PaymentStatus};
use crate::domain::payment::{Payment, PaymentMode};
use crate::errors::{DeskError, DeskResult};
use chrono::{NaiveDateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

const SQL_SELECT_BOOKING: &str = "
    SELECT id, room_id, room_number, guest_name,
           check_in, check_out, num_persons, payment_status
    FROM bookings";

/// How the guest settles the bill when the booking is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentKind {
    Full,
    Advance,
}

impl PaymentKind {
    fn initial_status(self) -> PaymentStatus {
        match self {
            PaymentKind::Full => PaymentStatus::Paid,
            PaymentKind::Advance => PaymentStatus::AdvancePaid,
        }
    }
}

pub struct NewBooking {
    pub room_number: String,
    pub guest_name: String,
    pub check_in: NaiveDateTime,
    pub check_out: NaiveDateTime,
    pub num_persons: i64,
    pub payment_kind: PaymentKind,
}

pub struct NewPayment {
    pub amount: f64,
    pub mode: PaymentMode,
}

fn validate_new_booking(new: &NewBooking, payment: &NewPayment) -> DeskResult<()> {
    if new.guest_name.trim().is_empty() {
        return Err(DeskError::Invalid("guest name is required".to_string()));
    }
    if new.num_persons < 1 {
        return Err(DeskError::Invalid(
            "at least one person is required".to_string(),
        ));
    }
    if payment.amount <= 0.0 {
        return Err(DeskError::Invalid(
            "payment amount must be positive".to_string(),
        ));
    }
    if new.check_out.date() < new.check_in.date() {
        return Err(DeskError::Invalid(
            "check-out must not precede check-in".to_string(),
        ));
    }
    Ok(())
}

/// Take a booking together with its opening payment, in one transaction:
/// the room record is created if the number is new, and the payment is
/// stamped on the check-in day so it is later recognized as the advance.
pub fn create_booking(
    db: &Database,
    new: &NewBooking,
    payment: &NewPayment,
) -> DeskResult<(Booking, Payment)> {
    validate_new_booking(new, payment)?;

    db.with_conn(|conn| {
        let tx = conn
            .transaction()
            .map_err(|e| DeskError::DbError(e.to_string()))?;

        let room = find_or_create_room(&tx, &new.room_number)?;
        let now = Utc::now().naive_utc();

        let booking = Booking {
            id: new_record_id(),
            room_id: room.id.clone(),
            room_number: room.room_number.clone(),
            guest_name: new.guest_name.trim().to_string(),
            check_in: new.check_in,
            check_out: new.check_out,
            num_persons: new.num_persons,
            payment_status: new.payment_kind.initial_status(),
        };

        tx.execute(
            r#"
            INSERT INTO bookings
                (id, room_id, room_number, guest_name,
                 check_in, check_out, num_persons, payment_status, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
            params![
                booking.id,
                booking.room_id,
                booking.room_number,
                booking.guest_name,
                booking.check_in,
                booking.check_out,
                booking.num_persons,
                booking.payment_status.as_str(),
                now,
            ],
        )
        .map_err(|e| DeskError::DbError(format!("failed to insert booking: {e}")))?;

        let paid = Payment {
            id: new_record_id(),
            booking_id: booking.id.clone(),
            room_id: room.id.clone(),
            room_number: room.room_number.clone(),
            amount: payment.amount,
            mode: payment.mode,
            paid_on: new.check_in,
        };

        tx.execute(
            r#"
            INSERT INTO payments
                (id, booking_id, room_id, room_number, amount, mode, paid_on)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                paid.id,
                paid.booking_id,
                paid.room_id,
                paid.room_number,
                paid.amount,
                paid.mode.as_str(),
                paid.paid_on,
            ],
        )
        .map_err(|e| DeskError::DbError(format!("failed to insert payment: {e}")))?;

        log_booking_event(&tx, "created", &booking)?;

        tx.commit()
            .map_err(|e| DeskError::DbError(e.to_string()))?;

        Ok((booking, paid))
    })
}

pub fn list_bookings(db: &Database) -> DeskResult<Vec<Booking>> {
    db.with_conn(|conn| {
        let sql = format!("{SQL_SELECT_BOOKING} ORDER BY check_in, id");
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DeskError::DbError(e.to_string()))?;

        let rows = stmt
            .query_map([], map_booking_row)
            .map_err(|e| DeskError::DbError(e.to_string()))?;

        let mut out = Vec::new();
        for r in rows {
            let raw = r.map_err(|e| DeskError::DbError(e.to_string()))?;
            out.push(into_booking(raw)?);
        }
        Ok(out)
    })
}

pub fn get_booking(db: &Database, booking_id: &str) -> DeskResult<Booking> {
    db.with_conn(|conn| get_booking_conn(conn, booking_id))
}

fn get_booking_conn(conn: &Connection, booking_id: &str) -> DeskResult<Booking> {
    let sql = format!("{SQL_SELECT_BOOKING} WHERE id = ?");
    let raw = conn
        .query_row(&sql, params![booking_id], map_booking_row)
        .optional()
        .map_err(|e| DeskError::DbError(e.to_string()))?;

    match raw {
        Some(raw) => into_booking(raw),
        None => Err(DeskError::NotFound),
    }
}

/// Settle the outstanding balance on a booking: record the payment and
/// mark the booking fully paid, in one transaction.
pub fn complete_payment(
    db: &Database,
    booking_id: &str,
    amount: f64,
    mode: PaymentMode,
    paid_on: NaiveDateTime,
) -> DeskResult<Payment> {
    if amount <= 0.0 {
        return Err(DeskError::Invalid(
            "payment amount must be positive".to_string(),
        ));
    }

    db.with_conn(|conn| {
        let tx = conn
            .transaction()
            .map_err(|e| DeskError::DbError(e.to_string()))?;

        let mut booking = get_booking_conn(&tx, booking_id)?;

        let paid = Payment {
            id: new_record_id(),
            booking_id: booking.id.clone(),
            room_id: booking.room_id.clone(),
            room_number: booking.room_number.clone(),
            amount,
            mode,
            paid_on,
        };

        tx.execute(
            r#"
            INSERT INTO payments
                (id, booking_id, room_id, room_number, amount, mode, paid_on)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                paid.id,
                paid.booking_id,
                paid.room_id,
                paid.room_number,
                paid.amount,
                paid.mode.as_str(),
                paid.paid_on,
            ],
        )
        .map_err(|e| DeskError::DbError(format!("failed to insert payment: {e}")))?;

        tx.execute(
            "UPDATE bookings SET payment_status = ?1 WHERE id = ?2",
            params![PaymentStatus::Paid.as_str(), booking.id],
        )
        .map_err(|e| DeskError::DbError(format!("failed to update booking: {e}")))?;

        booking.payment_status = PaymentStatus::Paid;
        log_booking_event(&tx, "payment_completed", &booking)?;

        tx.commit()
            .map_err(|e| DeskError::DbError(e.to_string()))?;

        Ok(paid)
    })
}

/// Check the guest out: the booking and every payment attached to it
/// are deleted. The room record stays behind and derives `Available`
/// on the next board refresh. Refused while a balance is still owed.
pub fn check_out(db: &Database, booking_id: &str) -> DeskResult<()> {
    db.with_conn(|conn| {
        let tx = conn
            .transaction()
            .map_err(|e| DeskError::DbError(e.to_string()))?;

        let booking = get_booking_conn(&tx, booking_id)?;

        if booking.payment_status.owes_balance() {
            return Err(DeskError::Invalid(
                "complete the payment before checking out".to_string(),
            ));
        }

        log_booking_event(&tx, "checked_out", &booking)?;

        tx.execute(
            "DELETE FROM payments WHERE booking_id = ?",
            params![booking.id],
        )
        .map_err(|e| DeskError::DbError(format!("failed to delete payments: {e}")))?;

        tx.execute("DELETE FROM bookings WHERE id = ?", params![booking.id])
            .map_err(|e| DeskError::DbError(format!("failed to delete booking: {e}")))?;

        tx.commit()
            .map_err(|e| DeskError::DbError(e.to_string()))?;

        Ok(())
    })
}

/// Bookings are hard-deleted at check-out, so every write also drops the
/// full record into the append-only log.
fn log_booking_event(conn: &Connection, action: &str, booking: &Booking) -> DeskResult<()> {
    let raw_json =
        serde_json::to_string(booking).map_err(|e| DeskError::DbError(e.to_string()))?;

    conn.execute(
        r#"
        INSERT INTO booking_log (booking_id, action, logged_at, raw_json)
        VALUES (?1, ?2, ?3, ?4)
        "#,
        params![booking.id, action, Utc::now().naive_utc(), raw_json],
    )
    .map_err(|e| DeskError::DbError(format!("failed to log booking event: {e}")))?;

    Ok(())
}

type BookingRow = (
    String,
    String,
    String,
    String,
    NaiveDateTime,
    NaiveDateTime,
    i64,
    String,
);

fn map_booking_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<BookingRow> {
    Ok((
        row.get(0)?, // id
        row.get(1)?, // room_id
        row.get(2)?, // room_number
        row.get(3)?, // guest_name
        row.get(4)?, // check_in
        row.get(5)?, // check_out
        row.get(6)?, // num_persons
        row.get(7)?, // payment_status
    ))
}

fn into_booking(raw: BookingRow) -> DeskResult<Booking> {
    let (id, room_id, room_number, guest_name, check_in, check_out, num_persons, status) = raw;

    let payment_status = PaymentStatus::parse(&status).ok_or_else(|| {
        DeskError::DbError(format!("unknown payment status '{status}' on booking {id}"))
    })?;

    Ok(Booking {
        id,
        room_id,
        room_number,
        guest_name,
        check_in,
        check_out,
        num_persons,
        payment_status,
    })
}
