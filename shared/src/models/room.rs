//! Room Model

use serde::{Deserialize, Serialize};

use crate::util::{null_default, opt_f64, opt_text, opt_u32, wire_enum};

wire_enum! {
    /// Room status as maintained by the front desk and housekeeping
    RoomStatus {
        Available => "Available",
        Occupied => "Occupied",
        Maintenance => "Maintenance",
        Blocked => "Blocked",
    }
}

/// Room entity (room master)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    #[serde(default, alias = "id", alias = "Id")]
    pub room_id: Option<i64>,
    #[serde(default, alias = "roomnumber")]
    pub room_number: Option<String>,
    #[serde(default, alias = "roomtype", alias = "type")]
    pub room_type: Option<String>,
    #[serde(default, alias = "Floor", alias = "floorNumber", alias = "floor_number", with = "opt_text")]
    pub floor: Option<String>,
    /// Price per night
    #[serde(default, alias = "rate", with = "opt_f64")]
    pub price: Option<f64>,
    /// Adults included in the nightly price
    #[serde(default, with = "opt_u32")]
    pub base_occupancy: Option<u32>,
    /// Surcharge per extra adult per night
    #[serde(default, with = "opt_f64")]
    pub extra_adult_charge: Option<f64>,
    #[serde(default, alias = "roomstatus", alias = "status", deserialize_with = "null_default")]
    pub room_status: RoomStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_room_aliases() {
        let json = r#"{"Id": 5, "roomnumber": "305", "roomtype": "Suite", "floorNumber": 3, "rate": "4500", "roomstatus": "available"}"#;
        let room: Room = serde_json::from_str(json).unwrap();
        assert_eq!(room.room_id, Some(5));
        assert_eq!(room.room_number.as_deref(), Some("305"));
        assert_eq!(room.room_type.as_deref(), Some("Suite"));
        assert_eq!(room.floor.as_deref(), Some("3"));
        assert_eq!(room.price, Some(4500.0));
        assert_eq!(room.room_status, RoomStatus::Available);
        assert!(room.base_occupancy.is_none());
    }

    #[test]
    fn test_unknown_room_status_kept() {
        let json = r#"{"roomStatus": "Dirty"}"#;
        let room: Room = serde_json::from_str(json).unwrap();
        assert_eq!(room.room_status, RoomStatus::Other("Dirty".to_string()));
        assert_eq!(serde_json::to_value(&room).unwrap()["roomStatus"], "Dirty");
    }
}
