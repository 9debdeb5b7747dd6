//! Booking views and guest rules
//!
//! - [`filter_bookings`] - booking history search
//! - [`current_bookings`] - current (Booked) bookings with charge breakdown
//! - [`validate_guests`], [`set_primary`], [`remove_guest`] - guest list rules
//! - [`filter_rooms`], [`floors`], [`ensure_bookable`] - room selection

pub mod filter;
pub mod guests;
pub mod rooms;

pub use filter::{BookingFilter, CurrentBookingQuery, CurrentBookingRow, current_bookings, filter_bookings};
pub use guests::{remove_guest, set_primary, validate_guests};
pub use rooms::{RoomFilter, ensure_bookable, filter_rooms, floors};
