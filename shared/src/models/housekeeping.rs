//! Housekeeping Task Model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Room;
use crate::util::{null_default, opt_datetime};

/// Housekeeping / maintenance task raised for a room
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HousekeepingTask {
    #[serde(default)]
    pub task_id: Option<i64>,
    #[serde(default)]
    pub booking_id: Option<i64>,
    #[serde(default)]
    pub room_id: Option<i64>,
    #[serde(default, alias = "roomnumber")]
    pub room_number: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub task_status: String,
    #[serde(default, deserialize_with = "null_default")]
    pub task_type: String,
    #[serde(default)]
    pub assigned_to_user_id: Option<i64>,
    #[serde(default)]
    pub room: Option<Room>,
    #[serde(default, alias = "createdOn", with = "opt_datetime")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, alias = "updatedOn", with = "opt_datetime")]
    pub updated_at: Option<NaiveDateTime>,
}

impl HousekeepingTask {
    /// Room number from the task, falling back to the embedded room
    pub fn room_number(&self) -> Option<&str> {
        self.room_number
            .as_deref()
            .or_else(|| self.room.as_ref().and_then(|r| r.room_number.as_deref()))
    }
}
