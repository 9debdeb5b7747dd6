//! Booking search

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use shared::models::{Booking, BookingStatus};

use crate::billing::{BillingPolicy, calculate_bill, to_decimal, to_f64};

/// Booking history search; empty fields match everything
#[derive(Debug, Clone, Default)]
pub struct BookingFilter {
    /// Substring of the booking id
    pub booking_id: Option<String>,
    /// Guest name (case-insensitive) or phone substring
    pub guest: Option<String>,
    pub status: Option<BookingStatus>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl BookingFilter {
    pub fn matches(&self, booking: &Booking) -> bool {
        if let Some(id) = non_blank(&self.booking_id)
            && !booking
                .booking_id
                .is_some_and(|b| b.to_string().contains(id))
        {
            return false;
        }

        if let Some(guest) = non_blank(&self.guest) {
            let needle = guest.to_lowercase();
            let found = booking.guests.iter().any(|g| {
                g.guest_name.to_lowercase().contains(&needle)
                    || g.guest_phone.as_deref().is_some_and(|p| p.contains(guest))
            });
            if !found {
                return false;
            }
        }

        match &self.status {
            Some(status) if !status.as_str().is_empty() => booking.booking_status == *status,
            _ => true,
        }
    }
}

pub fn filter_bookings<'a>(bookings: &'a [Booking], filter: &BookingFilter) -> Vec<&'a Booking> {
    bookings.iter().filter(|b| filter.matches(b)).collect()
}

/// Current booking search (Booked only)
#[derive(Debug, Clone, Default)]
pub struct CurrentBookingQuery {
    /// Exact room type
    pub room_type: Option<String>,
    /// Room number substring, case-insensitive
    pub room_number: Option<String>,
    /// Keep bookings checking out on or after this date
    pub from: Option<NaiveDate>,
    /// Keep bookings checking in on or before this date
    pub to: Option<NaiveDate>,
}

impl CurrentBookingQuery {
    pub fn matches(&self, booking: &Booking) -> bool {
        if booking.booking_status != BookingStatus::Booked {
            return false;
        }

        if let Some(room_type) = non_blank(&self.room_type) {
            let same = booking
                .room
                .as_ref()
                .and_then(|r| r.room_type.as_deref())
                .is_some_and(|t| t == room_type);
            if !same {
                return false;
            }
        }

        if let Some(number) = non_blank(&self.room_number) {
            let needle = number.to_lowercase();
            if !booking
                .room_number()
                .is_some_and(|n| n.to_lowercase().contains(&needle))
            {
                return false;
            }
        }

        if let Some(from) = self.from
            && !booking.check_out_date.is_some_and(|d| d.date() >= from)
        {
            return false;
        }
        if let Some(to) = self.to
            && !booking.check_in_date.is_some_and(|d| d.date() <= to)
        {
            return false;
        }

        true
    }
}

/// One line of the current bookings table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentBookingRow {
    pub booking_id: Option<i64>,
    pub room_number: Option<String>,
    pub room_type: String,
    pub from: Option<NaiveDateTime>,
    pub to: Option<NaiveDateTime>,
    pub nights: u32,
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
    pub price_per_night: f64,
    pub room_amount: f64,
    pub extra_adults: u32,
    pub extra_adult_charge: f64,
    pub service_total: f64,
    /// Room + extra adults + services, before tax
    pub net_amount: f64,
}

/// Booked bookings matching the query, with their charge breakdown
pub fn current_bookings(
    bookings: &[Booking],
    query: &CurrentBookingQuery,
    policy: &BillingPolicy,
    as_of: NaiveDateTime,
) -> Vec<CurrentBookingRow> {
    bookings
        .iter()
        .filter(|b| query.matches(b))
        .map(|booking| {
            let bill = calculate_bill(booking, policy, as_of);
            let net = to_decimal(bill.room_subtotal)
                + to_decimal(bill.extra_adult_charge)
                + to_decimal(bill.service_total);
            CurrentBookingRow {
                booking_id: booking.booking_id,
                room_number: bill.room_number.clone(),
                room_type: booking
                    .room
                    .as_ref()
                    .and_then(|r| r.room_type.clone())
                    .unwrap_or_else(|| "Unknown".to_string()),
                from: booking.check_in_date,
                to: booking.check_out_date,
                nights: bill.nights.unwrap_or(0),
                adults: bill.guests.adults,
                children: bill.guests.children,
                infants: bill.guests.infants,
                price_per_night: bill.room_price,
                room_amount: bill.room_subtotal,
                extra_adults: bill.extra_adults,
                extra_adult_charge: bill.extra_adult_charge,
                service_total: bill.service_total,
                net_amount: to_f64(net),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{BookingService, Guest, GuestType, Room, ServiceStatus};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, d).unwrap()
    }

    fn at(d: u32) -> NaiveDateTime {
        day(d).and_hms_opt(12, 0, 0).unwrap()
    }

    fn booking(id: i64, room_number: &str, room_type: &str, status: BookingStatus) -> Booking {
        Booking {
            booking_id: Some(id),
            room_number: Some(room_number.to_string()),
            check_in_date: Some(at(10)),
            check_out_date: Some(at(12)),
            room: Some(Room {
                room_type: Some(room_type.to_string()),
                price: Some(1500.0),
                base_occupancy: Some(1),
                extra_adult_charge: Some(300.0),
                ..Default::default()
            }),
            guests: vec![
                Guest {
                    guest_name: "Ravi Kumar".to_string(),
                    guest_phone: Some("9876543210".to_string()),
                    guest_type: GuestType::Adult,
                    is_primary: true,
                    ..Default::default()
                },
                Guest {
                    guest_name: "Meera".to_string(),
                    guest_type: GuestType::Adult,
                    ..Default::default()
                },
                Guest {
                    guest_name: "Anu".to_string(),
                    guest_type: GuestType::Infant,
                    ..Default::default()
                },
            ],
            booking_status: status,
            ..Default::default()
        }
    }

    #[test]
    fn test_filter_by_id_guest_and_status() {
        let bookings = vec![
            booking(101, "101", "Deluxe", BookingStatus::Booked),
            booking(202, "202", "Suite", BookingStatus::CheckedOut),
        ];

        let by_id = BookingFilter {
            booking_id: Some("10".into()),
            ..Default::default()
        };
        assert_eq!(filter_bookings(&bookings, &by_id).len(), 1);

        let by_name = BookingFilter {
            guest: Some("RAVI".into()),
            ..Default::default()
        };
        assert_eq!(filter_bookings(&bookings, &by_name).len(), 2);

        let by_phone = BookingFilter {
            guest: Some("98765".into()),
            status: Some(BookingStatus::CheckedOut),
            ..Default::default()
        };
        let found = filter_bookings(&bookings, &by_phone);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].booking_id, Some(202));

        let blank = BookingFilter {
            booking_id: Some("  ".into()),
            guest: Some(String::new()),
            status: None,
        };
        assert_eq!(filter_bookings(&bookings, &blank).len(), 2);
    }

    #[test]
    fn test_current_bookings_only_booked() {
        let bookings = vec![
            booking(1, "101", "Deluxe", BookingStatus::Booked),
            booking(2, "102", "Deluxe", BookingStatus::Cancelled),
        ];
        let rows = current_bookings(
            &bookings,
            &CurrentBookingQuery::default(),
            &BillingPolicy::default(),
            at(11),
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].booking_id, Some(1));
    }

    #[test]
    fn test_current_booking_row_amounts() {
        let mut b = booking(1, "101", "Deluxe", BookingStatus::Booked);
        b.booking_services = vec![BookingService {
            service_id: Some(3),
            price: Some(250.0),
            quantity: Some(2),
            service_status: ServiceStatus::Ordered,
            ..Default::default()
        }];
        let rows = current_bookings(
            &[b],
            &CurrentBookingQuery::default(),
            &BillingPolicy::default(),
            at(11),
        );
        let row = &rows[0];
        assert_eq!(row.nights, 2);
        assert_eq!(row.adults, 2);
        assert_eq!(row.infants, 1);
        assert_eq!(row.room_amount, 3000.0);
        assert_eq!(row.extra_adults, 1);
        assert_eq!(row.extra_adult_charge, 600.0);
        assert_eq!(row.service_total, 500.0);
        assert_eq!(row.net_amount, 4100.0);
    }

    #[test]
    fn test_overdue_row_counts_to_today() {
        let b = booking(1, "101", "Deluxe", BookingStatus::Booked);
        let rows = current_bookings(
            &[b],
            &CurrentBookingQuery::default(),
            &BillingPolicy::default(),
            at(14),
        );
        assert_eq!(rows[0].nights, 4);
        assert_eq!(rows[0].room_amount, 6000.0);
    }

    #[test]
    fn test_current_booking_query_filters() {
        let bookings = vec![
            booking(1, "101", "Deluxe", BookingStatus::Booked),
            booking(2, "A-202", "Suite", BookingStatus::Booked),
        ];
        let policy = BillingPolicy::default();

        let suites = CurrentBookingQuery {
            room_type: Some("Suite".into()),
            ..Default::default()
        };
        assert_eq!(current_bookings(&bookings, &suites, &policy, at(11))[0].booking_id, Some(2));

        let lower = CurrentBookingQuery {
            room_type: Some("suite".into()),
            ..Default::default()
        };
        assert!(current_bookings(&bookings, &lower, &policy, at(11)).is_empty());

        let number = CurrentBookingQuery {
            room_number: Some("a-2".into()),
            ..Default::default()
        };
        assert_eq!(current_bookings(&bookings, &number, &policy, at(11)).len(), 1);

        let overlapping = CurrentBookingQuery {
            from: Some(day(12)),
            to: Some(day(10)),
            ..Default::default()
        };
        assert_eq!(current_bookings(&bookings, &overlapping, &policy, at(11)).len(), 2);

        let after = CurrentBookingQuery {
            from: Some(day(13)),
            ..Default::default()
        };
        assert!(current_bookings(&bookings, &after, &policy, at(11)).is_empty());

        let before = CurrentBookingQuery {
            to: Some(day(9)),
            ..Default::default()
        };
        assert!(current_bookings(&bookings, &before, &policy, at(11)).is_empty());
    }
}
