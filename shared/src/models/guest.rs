//! Guest Model

use serde::{Deserialize, Serialize};

use crate::util::{null_default, opt_u32, wire_enum};

wire_enum! {
    /// Occupancy class of a guest
    GuestType {
        Adult => "Adult",
        Child => "Child",
        Infant => "Infant",
    }
}

/// Guest attached to a booking
///
/// Exactly one guest per booking should be primary (billing/contact guest).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    #[serde(default, alias = "id")]
    pub guest_id: Option<i64>,
    #[serde(default, deserialize_with = "null_default")]
    pub guest_name: String,
    #[serde(default, with = "opt_u32")]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub guest_phone: Option<String>,
    #[serde(default)]
    pub guest_email: Option<String>,
    #[serde(default)]
    pub id_proof: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub guest_type: GuestType,
    #[serde(default, deserialize_with = "null_default")]
    pub is_primary: bool,
}

impl Guest {
    pub fn is_adult(&self) -> bool {
        self.guest_type == GuestType::Adult
    }
}
