//! Booking Model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{BookingService, Guest, Payment, Room};
use crate::util::{null_default, opt_datetime, opt_u32, wire_enum};

wire_enum! {
    /// Booking lifecycle status
    BookingStatus {
        Booked => "Booked",
        CheckedOut => "CheckedOut",
        Cancelled => "Cancelled",
    }
}

/// Booking entity (reservation of one room for a guest party)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(default, alias = "id")]
    pub booking_id: Option<i64>,
    #[serde(default)]
    pub room_id: Option<i64>,
    #[serde(default, alias = "roomnumber")]
    pub room_number: Option<String>,
    /// Scheduled check-in
    #[serde(default, with = "opt_datetime")]
    pub check_in_date: Option<NaiveDateTime>,
    /// Scheduled check-out
    #[serde(default, with = "opt_datetime")]
    pub check_out_date: Option<NaiveDateTime>,
    /// Recorded at the desk when the party actually arrives
    #[serde(default, with = "opt_datetime")]
    pub actual_check_in_time: Option<NaiveDateTime>,
    /// Recorded at checkout; `None` while the stay is open
    #[serde(default, with = "opt_datetime")]
    pub actual_check_out_time: Option<NaiveDateTime>,
    #[serde(default, with = "opt_u32")]
    pub number_of_guests: Option<u32>,
    #[serde(default, deserialize_with = "null_default")]
    pub guests: Vec<Guest>,
    #[serde(default)]
    pub room: Option<Room>,
    #[serde(default, deserialize_with = "null_default")]
    pub booking_services: Vec<BookingService>,
    #[serde(default, deserialize_with = "null_default")]
    pub payments: Vec<Payment>,
    #[serde(default, alias = "status", deserialize_with = "null_default")]
    pub booking_status: BookingStatus,
}

impl Booking {
    /// Room number from the booking, falling back to the embedded room
    pub fn room_number(&self) -> Option<&str> {
        self.room_number
            .as_deref()
            .or_else(|| self.room.as_ref().and_then(|r| r.room_number.as_deref()))
    }

    /// Still `Booked` with no recorded check-out
    ///
    /// Cancelled and checked-out bookings are closed even when a check-in
    /// was recorded.
    pub fn is_open_stay(&self) -> bool {
        self.booking_status == BookingStatus::Booked && self.actual_check_out_time.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GuestType, ServiceStatus};

    #[test]
    fn test_booking_status_lenient() {
        assert_eq!(BookingStatus::from("Booked"), BookingStatus::Booked);
        assert_eq!(BookingStatus::from("Checked Out"), BookingStatus::CheckedOut);
        assert_eq!(BookingStatus::from("cancelled"), BookingStatus::Cancelled);
        assert_eq!(
            BookingStatus::from("NoShow"),
            BookingStatus::Other("NoShow".to_string())
        );
        assert_eq!(BookingStatus::CheckedOut.to_string(), "CheckedOut");
    }

    #[test]
    fn test_parse_full_booking() {
        let json = r#"{
            "bookingId": 7,
            "roomId": 3,
            "roomNumber": "101",
            "checkInDate": "2025-12-10",
            "checkOutDate": "2025-12-12",
            "actualCheckInTime": "2025-12-10T13:05:00",
            "actualCheckOutTime": null,
            "bookingStatus": "Booked",
            "room": {"roomId": 3, "roomNumber": "101", "price": "2000", "baseOccupancy": 2, "extraAdultCharge": 500, "roomStatus": "Occupied"},
            "guests": [{"guestName": "Asha", "guestType": "Adult", "isPrimary": true}],
            "bookingServices": [{"serviceId": 4, "price": 150, "quantity": 2, "serviceStatus": "Ordered"}],
            "payments": [{"amount": 1000, "paymentType": "Advance", "paymentMode": "Cash"}]
        }"#;

        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.booking_id, Some(7));
        assert_eq!(booking.booking_status, BookingStatus::Booked);
        assert!(booking.is_open_stay());
        assert_eq!(booking.room.as_ref().unwrap().price, Some(2000.0));
        assert_eq!(booking.guests[0].guest_type, GuestType::Adult);
        assert_eq!(
            booking.booking_services[0].service_status,
            ServiceStatus::Ordered
        );
        assert_eq!(booking.payments[0].amount, Some(1000.0));
    }

    #[test]
    fn test_parse_sparse_booking() {
        let json = r#"{"id": 9, "guests": null, "payments": null, "status": "CheckedOut"}"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.booking_id, Some(9));
        assert!(booking.guests.is_empty());
        assert!(booking.payments.is_empty());
        assert!(booking.check_in_date.is_none());
        assert_eq!(booking.booking_status, BookingStatus::CheckedOut);
        assert!(!booking.is_open_stay());
    }

    #[test]
    fn test_open_stay_needs_booked_status() {
        let mut booking = Booking {
            actual_check_in_time: crate::util::parse_timestamp("2025-12-10T13:05:00"),
            booking_status: BookingStatus::Cancelled,
            ..Default::default()
        };
        assert!(!booking.is_open_stay());

        booking.booking_status = BookingStatus::Booked;
        assert!(booking.is_open_stay());

        booking.actual_check_out_time = crate::util::parse_timestamp("2025-12-11T10:00:00");
        assert!(!booking.is_open_stay());
    }

    #[test]
    fn test_room_number_fallback() {
        let json = r#"{"room": {"roomnumber": "204"}}"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.room_number(), Some("204"));
    }
}
