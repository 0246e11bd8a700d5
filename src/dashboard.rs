// src/dashboard.rs

use chrono::NaiveDate;
use serde::Serialize;

use crate::db;
use crate::db::connection::Database;
use crate::domain::logic::{bookings_on, payments_on, resolve_room_views};
use crate::domain::payment::ALL_MODES;
use crate::domain::{Booking, Payment, PaymentMode, Room, RoomStatus, RoomView};
use crate::errors::DeskResult;

/// Head counts over a resolved board. `available` counts rooms with no
/// active stay on the selected day; a `Booked` room is free today, so
/// it counts as available here AND shows up in `booked`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomSummary {
    pub total: usize,
    pub available: usize,
    pub occupied: usize,
    pub booked: usize,
}

pub fn summarize(views: &[RoomView]) -> RoomSummary {
    let occupied = views
        .iter()
        .filter(|v| v.status == RoomStatus::Occupied)
        .count();
    let booked = views
        .iter()
        .filter(|v| v.status == RoomStatus::Booked)
        .count();

    RoomSummary {
        total: views.len(),
        available: views.len() - occupied,
        occupied,
        booked,
    }
}

/// A day's takings: the total plus a per-mode breakdown in the fixed
/// display order, with unused modes left out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueSummary {
    pub total_income: f64,
    pub by_mode: Vec<(PaymentMode, f64)>,
}

pub fn daily_revenue(payments: &[Payment]) -> RevenueSummary {
    let total_income = payments.iter().map(|p| p.amount).sum();

    let by_mode = ALL_MODES
        .iter()
        .map(|mode| {
            let amount: f64 = payments
                .iter()
                .filter(|p| p.mode == *mode)
                .map(|p| p.amount)
                .sum();
            (*mode, amount)
        })
        .filter(|(_, amount)| *amount > 0.0)
        .collect();

    RevenueSummary {
        total_income,
        by_mode,
    }
}

/// Everything the front-desk display needs for one selected day,
/// assembled in a single pass over plain data. Rebuilt from scratch on
/// every date change or store refresh; nothing is cached between calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub selected_day: NaiveDate,
    pub room_views: Vec<RoomView>,
    pub bookings_for_day: Vec<Booking>,
    pub payments_for_day: Vec<Payment>,
    pub summary: RoomSummary,
    pub revenue: RevenueSummary,
}

impl DashboardSnapshot {
    pub fn build(
        selected_day: NaiveDate,
        rooms: &[Room],
        bookings: &[Booking],
        payments: &[Payment],
    ) -> Self {
        let room_views = resolve_room_views(selected_day, rooms, bookings);

        let bookings_for_day: Vec<Booking> = bookings_on(selected_day, bookings)
            .into_iter()
            .cloned()
            .collect();
        let payments_for_day: Vec<Payment> = payments_on(selected_day, payments)
            .into_iter()
            .cloned()
            .collect();

        let summary = summarize(&room_views);
        let revenue = daily_revenue(&payments_for_day);

        DashboardSnapshot {
            selected_day,
            room_views,
            bookings_for_day,
            payments_for_day,
            summary,
            revenue,
        }
    }
}

/// Read the three lists from the store and assemble the snapshot.
pub fn load_snapshot(db: &Database, selected_day: NaiveDate) -> DeskResult<DashboardSnapshot> {
    let rooms = db::list_rooms(db)?;
    let bookings = db::list_bookings(db)?;
    let payments = db::list_payments(db)?;

    Ok(DashboardSnapshot::build(
        selected_day,
        &rooms,
        &bookings,
        &payments,
    ))
}
