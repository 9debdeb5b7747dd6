//! Nights and occupancy

use chrono::NaiveDateTime;
use serde::Serialize;
use shared::models::{Booking, GuestType};

const SECONDS_PER_NIGHT: i64 = 24 * 60 * 60;

/// Which clock the nights were counted from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NightSource {
    /// Recorded checkout
    Actual,
    /// Still open and past its scheduled checkout: counted up to `as_of`
    Open,
    /// Scheduled checkout date
    Scheduled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StayNights {
    pub nights: u32,
    pub source: NightSource,
    pub check_in: NaiveDateTime,
    pub check_out: NaiveDateTime,
}

/// Head count by guest type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestCounts {
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
}

/// Billable nights of a booking
///
/// 1. check-in: actual check-in, else scheduled
/// 2. check-out: actual check-out; for an open stay the scheduled check-out
///    but never earlier than `as_of`; else scheduled
/// 3. check-out never precedes check-in
/// 4. nights = ceil(duration / 24h), at least 1
///
/// Returns `None` without a check-in, or without a check-out on a booking
/// that is no longer open.
pub fn stay_nights(booking: &Booking, as_of: NaiveDateTime) -> Option<StayNights> {
    let check_in = booking.actual_check_in_time.or(booking.check_in_date)?;

    let (check_out, source) = match booking.actual_check_out_time {
        Some(out) => (out, NightSource::Actual),
        None if booking.is_open_stay() => match booking.check_out_date {
            Some(scheduled) if scheduled >= as_of => (scheduled, NightSource::Scheduled),
            _ => (as_of, NightSource::Open),
        },
        None => (booking.check_out_date?, NightSource::Scheduled),
    };
    let check_out = check_out.max(check_in);

    Some(StayNights {
        nights: nights_between(check_in, check_out),
        source,
        check_in,
        check_out,
    })
}

/// Whole nights between two instants, rounded up, minimum 1
pub fn nights_between(check_in: NaiveDateTime, check_out: NaiveDateTime) -> u32 {
    let seconds = (check_out - check_in).num_seconds().max(0);
    let nights = (seconds + SECONDS_PER_NIGHT - 1) / SECONDS_PER_NIGHT;
    u32::try_from(nights.max(1)).unwrap_or(u32::MAX)
}

pub fn guest_counts(booking: &Booking) -> GuestCounts {
    booking
        .guests
        .iter()
        .fold(GuestCounts::default(), |mut counts, guest| {
            match guest.guest_type {
                GuestType::Adult => counts.adults += 1,
                GuestType::Child => counts.children += 1,
                GuestType::Infant => counts.infants += 1,
                GuestType::Other(_) => {}
            }
            counts
        })
}

/// Adults beyond the room's base occupancy
///
/// Zero without a room. A room with no base occupancy counts as base 0, so
/// every adult is extra.
pub fn extra_adults(booking: &Booking) -> u32 {
    let Some(room) = booking.room.as_ref() else {
        return 0;
    };
    let base = room.base_occupancy.unwrap_or(0);
    guest_counts(booking).adults.saturating_sub(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::models::{BookingStatus, Guest, Room};

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 12, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn guest(guest_type: GuestType) -> Guest {
        Guest {
            guest_type,
            ..Default::default()
        }
    }

    #[test]
    fn test_nights_between_rounds_up() {
        assert_eq!(nights_between(at(10, 12), at(12, 12)), 2);
        assert_eq!(nights_between(at(10, 12), at(12, 13)), 3);
        assert_eq!(nights_between(at(10, 12), at(10, 12)), 1);
        assert_eq!(nights_between(at(10, 12), at(10, 9)), 1);
    }

    #[test]
    fn test_scheduled_nights() {
        let booking = Booking {
            check_in_date: Some(at(10, 0)),
            check_out_date: Some(at(13, 0)),
            ..Default::default()
        };
        let stay = stay_nights(&booking, at(1, 0)).unwrap();
        assert_eq!(stay.nights, 3);
        assert_eq!(stay.source, NightSource::Scheduled);
    }

    #[test]
    fn test_actual_times_take_precedence() {
        let booking = Booking {
            check_in_date: Some(at(10, 0)),
            check_out_date: Some(at(15, 0)),
            actual_check_in_time: Some(at(11, 14)),
            actual_check_out_time: Some(at(12, 10)),
            ..Default::default()
        };
        let stay = stay_nights(&booking, at(20, 0)).unwrap();
        assert_eq!(stay.nights, 1);
        assert_eq!(stay.source, NightSource::Actual);
        assert_eq!(stay.check_in, at(11, 14));
    }

    #[test]
    fn test_open_stay_counts_to_as_of() {
        let booking = Booking {
            check_in_date: Some(at(10, 0)),
            check_out_date: Some(at(11, 0)),
            actual_check_in_time: Some(at(10, 14)),
            booking_status: BookingStatus::Booked,
            ..Default::default()
        };
        let stay = stay_nights(&booking, at(14, 10)).unwrap();
        assert_eq!(stay.source, NightSource::Open);
        assert_eq!(stay.check_out, at(14, 10));
        assert_eq!(stay.nights, 4);
    }

    #[test]
    fn test_open_stay_keeps_scheduled_checkout_ahead_of_as_of() {
        let booking = Booking {
            check_in_date: Some(at(10, 0)),
            check_out_date: Some(at(15, 0)),
            actual_check_in_time: Some(at(10, 0)),
            booking_status: BookingStatus::Booked,
            ..Default::default()
        };
        let stay = stay_nights(&booking, at(11, 0)).unwrap();
        assert_eq!(stay.source, NightSource::Scheduled);
        assert_eq!(stay.check_out, at(15, 0));
        assert_eq!(stay.nights, 5);
    }

    #[test]
    fn test_overdue_booking_without_check_in_runs_to_as_of() {
        let booking = Booking {
            check_in_date: Some(at(10, 0)),
            check_out_date: Some(at(12, 0)),
            booking_status: BookingStatus::Booked,
            ..Default::default()
        };
        let stay = stay_nights(&booking, at(14, 0)).unwrap();
        assert_eq!(stay.source, NightSource::Open);
        assert_eq!(stay.nights, 4);
    }

    #[test]
    fn test_open_stay_without_scheduled_checkout() {
        let booking = Booking {
            check_in_date: Some(at(10, 0)),
            booking_status: BookingStatus::Booked,
            ..Default::default()
        };
        let stay = stay_nights(&booking, at(13, 0)).unwrap();
        assert_eq!(stay.source, NightSource::Open);
        assert_eq!(stay.nights, 3);
    }

    #[test]
    fn test_closed_bookings_keep_scheduled_checkout() {
        for status in [BookingStatus::Cancelled, BookingStatus::CheckedOut] {
            let booking = Booking {
                check_in_date: Some(at(10, 0)),
                check_out_date: Some(at(12, 0)),
                actual_check_in_time: Some(at(10, 13)),
                booking_status: status,
                ..Default::default()
            };
            let stay = stay_nights(&booking, at(20, 0)).unwrap();
            assert_eq!(stay.source, NightSource::Scheduled);
            assert_eq!(stay.nights, 2);
        }
    }

    #[test]
    fn test_checkout_before_checkin_is_one_night() {
        let booking = Booking {
            check_in_date: Some(at(12, 0)),
            check_out_date: Some(at(10, 0)),
            ..Default::default()
        };
        assert_eq!(stay_nights(&booking, at(1, 0)).unwrap().nights, 1);
    }

    #[test]
    fn test_missing_dates() {
        let booking = Booking {
            check_in_date: Some(at(12, 0)),
            ..Default::default()
        };
        assert!(stay_nights(&booking, at(13, 0)).is_none());
        assert!(stay_nights(&Booking::default(), at(13, 0)).is_none());
    }

    #[test]
    fn test_extra_adults_never_negative() {
        let mut booking = Booking {
            room: Some(Room {
                base_occupancy: Some(2),
                ..Default::default()
            }),
            guests: vec![guest(GuestType::Adult), guest(GuestType::Child)],
            ..Default::default()
        };
        assert_eq!(extra_adults(&booking), 0);

        booking.guests.push(guest(GuestType::Adult));
        booking.guests.push(guest(GuestType::Adult));
        assert_eq!(extra_adults(&booking), 1);

        booking.room = None;
        assert_eq!(extra_adults(&booking), 0);
    }

    #[test]
    fn test_missing_base_occupancy_makes_every_adult_extra() {
        let booking = Booking {
            room: Some(Room {
                extra_adult_charge: Some(200.0),
                base_occupancy: None,
                ..Default::default()
            }),
            guests: vec![
                guest(GuestType::Adult),
                guest(GuestType::Adult),
                guest(GuestType::Child),
            ],
            ..Default::default()
        };
        assert_eq!(extra_adults(&booking), 2);
    }

    #[test]
    fn test_guest_counts() {
        let booking = Booking {
            guests: vec![
                guest(GuestType::Adult),
                guest(GuestType::Child),
                guest(GuestType::Infant),
                guest(GuestType::Adult),
                guest(GuestType::Other("Pet".into())),
            ],
            ..Default::default()
        };
        assert_eq!(
            guest_counts(&booking),
            GuestCounts {
                adults: 2,
                children: 1,
                infants: 1
            }
        );
    }
}
