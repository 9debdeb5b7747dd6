//! Payment Model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::util::{null_default, opt_datetime, opt_f64, wire_enum};

wire_enum! {
    /// Whether a payment is a deposit or settles the bill
    PaymentType {
        Advance => "Advance",
        Final => "Final",
    }
}

wire_enum! {
    /// Processing state reported by the backend
    PaymentStatus {
        Completed => "Completed",
        Pending => "Pending",
        Failed => "Failed",
    }
}

/// Payment recorded against a booking
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(default, alias = "id")]
    pub payment_id: Option<i64>,
    #[serde(default)]
    pub booking_id: Option<i64>,
    #[serde(default, with = "opt_f64")]
    pub amount: Option<f64>,
    #[serde(default)]
    pub payment_mode: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub payment_status: PaymentStatus,
    #[serde(default, deserialize_with = "null_default")]
    pub payment_type: PaymentType,
    #[serde(default)]
    pub reference_number: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, with = "opt_datetime")]
    pub payment_date: Option<NaiveDateTime>,
}
