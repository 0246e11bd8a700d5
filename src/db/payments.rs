// src/db/payments.rs
use crate::db::connection::Database;
use crate::domain::payment::{Payment, PaymentMode};
use crate::errors::{DeskError, DeskResult};
use chrono::NaiveDateTime;

const SQL_SELECT_PAYMENT: &str = "
    SELECT id, booking_id, room_id, room_number, amount, mode, paid_on
    FROM payments";

pub fn list_payments(db: &Database) -> DeskResult<Vec<Payment>> {
    query_payments(db, &format!("{SQL_SELECT_PAYMENT} ORDER BY paid_on, id"), &[])
}

pub fn payments_for_booking(db: &Database, booking_id: &str) -> DeskResult<Vec<Payment>> {
    query_payments(
        db,
        &format!("{SQL_SELECT_PAYMENT} WHERE booking_id = ? ORDER BY paid_on, id"),
        &[booking_id],
    )
}

fn query_payments(db: &Database, sql: &str, args: &[&str]) -> DeskResult<Vec<Payment>> {
    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| DeskError::DbError(e.to_string()))?;

        let rows = stmt
            .query_map(rusqlite::params_from_iter(args), map_payment_row)
            .map_err(|e| DeskError::DbError(e.to_string()))?;

        let mut out = Vec::new();
        for r in rows {
            let raw = r.map_err(|e| DeskError::DbError(e.to_string()))?;
            out.push(into_payment(raw)?);
        }
        Ok(out)
    })
}

type PaymentRow = (String, String, String, String, f64, String, NaiveDateTime);

fn map_payment_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<PaymentRow> {
    Ok((
        row.get(0)?, // id
        row.get(1)?, // booking_id
        row.get(2)?, // room_id
        row.get(3)?, // room_number
        row.get(4)?, // amount
        row.get(5)?, // mode
        row.get(6)?, // paid_on
    ))
}

fn into_payment(raw: PaymentRow) -> DeskResult<Payment> {
    let (id, booking_id, room_id, room_number, amount, mode, paid_on) = raw;

    let mode = PaymentMode::parse(&mode)
        .ok_or_else(|| DeskError::DbError(format!("unknown payment mode '{mode}' on payment {id}")))?;

    Ok(Payment {
        id,
        booking_id,
        room_id,
        room_number,
        amount,
        mode,
        paid_on,
    })
}
