//! Room selection for new bookings

use shared::models::{Room, RoomStatus};
use shared::{AppError, AppResult, ErrorCode};

/// Room list filter; empty fields match everything
#[derive(Debug, Clone, Default)]
pub struct RoomFilter {
    /// Room type, case-insensitive
    pub room_type: Option<String>,
    /// Floor label, exact
    pub floor: Option<String>,
}

impl RoomFilter {
    pub fn matches(&self, room: &Room) -> bool {
        let wanted_type = self
            .room_type
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty() && !t.eq_ignore_ascii_case("select"));
        if let Some(wanted) = wanted_type
            && !room
                .room_type
                .as_deref()
                .is_some_and(|t| t.eq_ignore_ascii_case(wanted))
        {
            return false;
        }

        let wanted_floor = self
            .floor
            .as_deref()
            .map(str::trim)
            .filter(|f| !f.is_empty() && !f.eq_ignore_ascii_case("select"));
        if let Some(wanted) = wanted_floor
            && room.floor.as_deref().map(str::trim) != Some(wanted)
        {
            return false;
        }

        true
    }
}

pub fn filter_rooms<'a>(rooms: &'a [Room], filter: &RoomFilter) -> Vec<&'a Room> {
    rooms.iter().filter(|r| filter.matches(r)).collect()
}

/// Distinct floor labels: numeric floors ascending, then the rest alphabetically
pub fn floors(rooms: &[Room]) -> Vec<String> {
    let mut floors: Vec<String> = rooms
        .iter()
        .filter_map(|r| r.floor.as_deref())
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_string)
        .collect();
    floors.sort_by(|a, b| floor_key(a).cmp(&floor_key(b)));
    floors.dedup();
    floors
}

fn floor_key(label: &str) -> (bool, i64, &str) {
    match label.parse::<i64>() {
        Ok(n) => (false, n, label),
        Err(_) => (true, 0, label),
    }
}

/// A room can be booked only while Available
pub fn ensure_bookable(room: &Room) -> AppResult<()> {
    match &room.room_status {
        RoomStatus::Available => Ok(()),
        RoomStatus::Occupied => Err(AppError::new(ErrorCode::RoomOccupied)
            .with_detail("roomNumber", room.room_number.clone().unwrap_or_default())),
        other => Err(AppError::with_message(
            ErrorCode::RoomUnavailable,
            format!(
                "Room {} is not available ({})",
                room.room_number.as_deref().unwrap_or("?"),
                if other.as_str().is_empty() { "no status" } else { other.as_str() }
            ),
        )),
    }
}
