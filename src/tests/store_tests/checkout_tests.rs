// src/tests/store_tests/checkout_tests.rs

use crate::db::{
    check_out, complete_payment, create_booking, get_booking, list_bookings, list_rooms,
    payments_for_booking, PaymentKind,
};
use crate::domain::booking::PaymentStatus;
use crate::domain::payment::PaymentMode;
use crate::domain::{resolve_room_views, RoomStatus};
use crate::errors::DeskError;
use crate::tests::utils::{at_noon, booking_request, day, make_db, payment_request};

#[test]
fn check_out_refuses_while_balance_is_owed() {
    let db = make_db();

    let (booking, _) = create_booking(
        &db,
        &booking_request(
            "101",
            "Asha Rao",
            at_noon(2024, 6, 1),
            at_noon(2024, 6, 4),
            PaymentKind::Advance,
        ),
        &payment_request(1000.0, PaymentMode::Cash),
    )
    .unwrap();

    let err = check_out(&db, &booking.id).unwrap_err();
    assert!(matches!(err, DeskError::Invalid(_)));

    // Nothing was deleted.
    assert_eq!(list_bookings(&db).unwrap().len(), 1);
    assert_eq!(payments_for_booking(&db, &booking.id).unwrap().len(), 1);
}

#[test]
fn completing_the_payment_unlocks_check_out() {
    let db = make_db();

    let (booking, _) = create_booking(
        &db,
        &booking_request(
            "101",
            "Asha Rao",
            at_noon(2024, 6, 1),
            at_noon(2024, 6, 4),
            PaymentKind::Advance,
        ),
        &payment_request(1000.0, PaymentMode::Cash),
    )
    .unwrap();

    complete_payment(
        &db,
        &booking.id,
        1400.0,
        PaymentMode::Card,
        at_noon(2024, 6, 4),
    )
    .unwrap();

    let settled = get_booking(&db, &booking.id).unwrap();
    assert_eq!(settled.payment_status, PaymentStatus::Paid);
    assert_eq!(payments_for_booking(&db, &booking.id).unwrap().len(), 2);

    check_out(&db, &booking.id).unwrap();

    // The booking and its payments are gone; the room record stays.
    assert!(list_bookings(&db).unwrap().is_empty());
    assert!(payments_for_booking(&db, &booking.id).unwrap().is_empty());
    assert_eq!(list_rooms(&db).unwrap().len(), 1);
}

#[test]
fn room_derives_available_after_check_out() {
    let db = make_db();

    let (booking, _) = create_booking(
        &db,
        &booking_request(
            "101",
            "Asha Rao",
            at_noon(2024, 6, 1),
            at_noon(2024, 6, 4),
            PaymentKind::Full,
        ),
        &payment_request(2400.0, PaymentMode::NetBanking),
    )
    .unwrap();

    let rooms = list_rooms(&db).unwrap();
    let mid_stay = resolve_room_views(day(2024, 6, 2), &rooms, &list_bookings(&db).unwrap());
    assert_eq!(mid_stay[0].status, RoomStatus::Occupied);

    check_out(&db, &booking.id).unwrap();

    let after = resolve_room_views(day(2024, 6, 2), &rooms, &list_bookings(&db).unwrap());
    assert_eq!(after[0].status, RoomStatus::Available);
}

#[test]
fn check_out_of_unknown_booking_is_not_found() {
    let db = make_db();

    let err = check_out(&db, "no-such-booking").unwrap_err();
    assert!(matches!(err, DeskError::NotFound));
}

#[test]
fn complete_payment_on_unknown_booking_is_not_found() {
    let db = make_db();

    let err = complete_payment(
        &db,
        "no-such-booking",
        500.0,
        PaymentMode::Cash,
        at_noon(2024, 6, 1),
    )
    .unwrap_err();
    assert!(matches!(err, DeskError::NotFound));
}
