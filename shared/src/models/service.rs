//! Service line item (ancillary purchase on a booking)

use serde::{Deserialize, Serialize};

use crate::util::{null_default, opt_f64, opt_u32, wire_enum};

wire_enum! {
    /// Fulfilment state of a service line
    ServiceStatus {
        Ordered => "Ordered",
        Delivered => "Delivered",
    }
}

/// Service ordered against a booking (food, laundry, ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingService {
    #[serde(default)]
    pub booking_service_id: Option<i64>,
    #[serde(default)]
    pub service_id: Option<i64>,
    #[serde(default)]
    pub service_name: Option<String>,
    /// Unit price
    #[serde(default, with = "opt_f64")]
    pub price: Option<f64>,
    #[serde(default, with = "opt_u32")]
    pub quantity: Option<u32>,
    #[serde(default, deserialize_with = "null_default")]
    pub service_status: ServiceStatus,
}

impl BookingService {
    /// Quantity with the backend's implicit default of one
    pub fn effective_quantity(&self) -> u32 {
        self.quantity.unwrap_or(1)
    }
}
