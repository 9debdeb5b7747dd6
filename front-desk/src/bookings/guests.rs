//! Guest list rules for a booking
//!
//! A booking needs at least one guest and exactly one primary guest.

use shared::models::Guest;
use shared::{AppError, AppResult, ErrorCode};

fn guest_not_found(index: usize, len: usize) -> AppError {
    AppError::with_message(
        ErrorCode::GuestNotFound,
        format!("No guest at position {} (booking has {})", index + 1, len),
    )
}

/// Check a guest list before submitting a booking
pub fn validate_guests(guests: &[Guest]) -> AppResult<()> {
    if guests.is_empty() {
        return Err(AppError::new(ErrorCode::GuestRequired));
    }

    if let Some(index) = guests.iter().position(|g| g.guest_name.trim().is_empty()) {
        return Err(AppError::with_message(
            ErrorCode::RequiredField,
            format!("Guest {} needs a name", index + 1),
        )
        .with_detail("field", "guestName")
        .with_detail("index", index));
    }

    match guests.iter().filter(|g| g.is_primary).count() {
        0 => Err(AppError::new(ErrorCode::PrimaryGuestRequired)),
        1 => Ok(()),
        n => Err(AppError::with_message(
            ErrorCode::MultiplePrimaryGuests,
            format!("Only one guest can be primary, found {}", n),
        )),
    }
}

/// Make the guest at `index` the only primary guest
pub fn set_primary(guests: &mut [Guest], index: usize) -> AppResult<()> {
    if index >= guests.len() {
        return Err(guest_not_found(index, guests.len()));
    }
    for (i, guest) in guests.iter_mut().enumerate() {
        guest.is_primary = i == index;
    }
    Ok(())
}

/// Remove a guest, keeping at least one
///
/// Removing the primary guest promotes the first remaining guest.
pub fn remove_guest(guests: &mut Vec<Guest>, index: usize) -> AppResult<Guest> {
    if index >= guests.len() {
        return Err(guest_not_found(index, guests.len()));
    }
    if guests.len() == 1 {
        return Err(AppError::new(ErrorCode::LastGuestRemoval));
    }

    let removed = guests.remove(index);
    if removed.is_primary
        && let Some(first) = guests.first_mut()
    {
        first.is_primary = true;
    }
    Ok(removed)
}
