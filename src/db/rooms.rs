// src/db/rooms.rs
use crate::db::connection::Database;
use crate::db::ids::new_record_id;
use crate::domain::room::Room;
use crate::errors::{DeskError, DeskResult};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

pub fn list_rooms(db: &Database) -> DeskResult<Vec<Room>> {
    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare("SELECT id, room_number FROM rooms ORDER BY rowid")
            .map_err(|e| DeskError::DbError(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| {
                Ok(Room {
                    id: row.get(0)?,
                    room_number: row.get(1)?,
                })
            })
            .map_err(|e| DeskError::DbError(e.to_string()))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r.map_err(|e| DeskError::DbError(e.to_string()))?);
        }
        Ok(out)
    })
}

/// Oldest stored record for the number wins when duplicates exist,
/// matching the order the de-duplicating display uses.
pub fn find_room_by_number(conn: &Connection, room_number: &str) -> DeskResult<Option<Room>> {
    conn.query_row(
        "SELECT id, room_number FROM rooms WHERE room_number = ? ORDER BY rowid LIMIT 1",
        params![room_number],
        |row| {
            Ok(Room {
                id: row.get(0)?,
                room_number: row.get(1)?,
            })
        },
    )
    .optional()
    .map_err(|e| DeskError::DbError(format!("failed to look up room: {e}")))
}

/// Booking a number that has no room record yet creates one on the fly,
/// the way the front desk expects walk-in rooms to appear.
pub fn find_or_create_room(conn: &Connection, room_number: &str) -> DeskResult<Room> {
    if let Some(room) = find_room_by_number(conn, room_number)? {
        return Ok(room);
    }

    let room = Room {
        id: new_record_id(),
        room_number: room_number.to_string(),
    };

    conn.execute(
        "INSERT INTO rooms (id, room_number, created_at) VALUES (?1, ?2, ?3)",
        params![room.id, room.room_number, Utc::now().naive_utc()],
    )
    .map_err(|e| DeskError::DbError(format!("failed to create room: {e}")))?;

    Ok(room)
}
