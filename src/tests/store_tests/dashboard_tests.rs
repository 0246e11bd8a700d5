// src/tests/store_tests/dashboard_tests.rs

use crate::dashboard::load_snapshot;
use crate::db::{create_booking, PaymentKind};
use crate::domain::payment::PaymentMode;
use crate::domain::RoomStatus;
use crate::tests::utils::{at_noon, booking_request, day, make_db, payment_request};

#[test]
fn fresh_booking_shows_occupied_on_its_check_in_day() {
    let db = make_db();

    create_booking(
        &db,
        &booking_request(
            "101",
            "Asha Rao",
            at_noon(2024, 6, 1),
            at_noon(2024, 6, 3),
            PaymentKind::Full,
        ),
        &payment_request(1600.0, PaymentMode::Card),
    )
    .unwrap();

    let snapshot = load_snapshot(&db, day(2024, 6, 1)).unwrap();

    assert_eq!(snapshot.room_views.len(), 1);
    assert_eq!(snapshot.room_views[0].status, RoomStatus::Occupied);
    assert_eq!(snapshot.bookings_for_day.len(), 1);
    // The opening payment lands in that day's takings.
    assert_eq!(snapshot.revenue.total_income, 1600.0);
}

#[test]
fn mid_stay_day_is_occupied_but_out_of_the_day_list() {
    let db = make_db();

    create_booking(
        &db,
        &booking_request(
            "101",
            "Asha Rao",
            at_noon(2024, 6, 3),
            at_noon(2024, 6, 7),
            PaymentKind::Full,
        ),
        &payment_request(3200.0, PaymentMode::Cash),
    )
    .unwrap();

    let snapshot = load_snapshot(&db, day(2024, 6, 5)).unwrap();

    assert_eq!(snapshot.room_views[0].status, RoomStatus::Occupied);
    assert!(snapshot.bookings_for_day.is_empty());
    assert!(snapshot.payments_for_day.is_empty());
    assert_eq!(snapshot.revenue.total_income, 0.0);
}

#[test]
fn summary_counts_follow_the_board() {
    let db = make_db();

    // 101 occupied on the selected day.
    create_booking(
        &db,
        &booking_request(
            "101",
            "Asha Rao",
            at_noon(2024, 6, 1),
            at_noon(2024, 6, 3),
            PaymentKind::Full,
        ),
        &payment_request(1600.0, PaymentMode::Cash),
    )
    .unwrap();

    // 102 reserved for later in the month.
    create_booking(
        &db,
        &booking_request(
            "102",
            "Vikram Shetty",
            at_noon(2024, 6, 20),
            at_noon(2024, 6, 22),
            PaymentKind::Advance,
        ),
        &payment_request(500.0, PaymentMode::GPay),
    )
    .unwrap();

    let snapshot = load_snapshot(&db, day(2024, 6, 2)).unwrap();

    assert_eq!(snapshot.summary.total, 2);
    assert_eq!(snapshot.summary.occupied, 1);
    assert_eq!(snapshot.summary.booked, 1);
    assert_eq!(snapshot.summary.available, 1);
}

#[test]
fn revenue_splits_by_mode_for_the_selected_day_only() {
    let db = make_db();

    // Two stays opening the same day, paid through different channels.
    create_booking(
        &db,
        &booking_request(
            "101",
            "Asha Rao",
            at_noon(2024, 6, 1),
            at_noon(2024, 6, 3),
            PaymentKind::Full,
        ),
        &payment_request(1600.0, PaymentMode::Cash),
    )
    .unwrap();
    create_booking(
        &db,
        &booking_request(
            "102",
            "Vikram Shetty",
            at_noon(2024, 6, 1),
            at_noon(2024, 6, 2),
            PaymentKind::Advance,
        ),
        &payment_request(400.0, PaymentMode::Upi),
    )
    .unwrap();
    // A third on another day stays out of the summary.
    create_booking(
        &db,
        &booking_request(
            "103",
            "Divya Nair",
            at_noon(2024, 6, 9),
            at_noon(2024, 6, 10),
            PaymentKind::Full,
        ),
        &payment_request(800.0, PaymentMode::Cash),
    )
    .unwrap();

    let snapshot = load_snapshot(&db, day(2024, 6, 1)).unwrap();

    assert_eq!(snapshot.revenue.total_income, 2000.0);
    assert_eq!(
        snapshot.revenue.by_mode,
        vec![(PaymentMode::Upi, 400.0), (PaymentMode::Cash, 1600.0)]
    );
}

#[test]
fn duplicate_room_records_show_once_on_the_board() {
    let db = make_db();

    // Two stored records for room 101, as duplicate legacy data.
    db.with_conn(|conn| {
        for id in ["dup-a", "dup-b"] {
            conn.execute(
                "INSERT INTO rooms (id, room_number, created_at) VALUES (?1, '101', ?2)",
                rusqlite::params![id, chrono::Utc::now().naive_utc()],
            )
            .map_err(|e| crate::errors::DeskError::DbError(e.to_string()))?;
        }
        Ok(())
    })
    .unwrap();

    let snapshot = load_snapshot(&db, day(2024, 6, 1)).unwrap();

    assert_eq!(snapshot.room_views.len(), 1);
    assert_eq!(snapshot.room_views[0].id, "dup-a");
    assert_eq!(snapshot.summary.total, 1);
}
