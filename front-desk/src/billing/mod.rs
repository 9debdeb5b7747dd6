//! Stay & charge calculation using rust_decimal for precision
//!
//! Folds a booking (room, guests, service lines, payments) into a [`Bill`].
//! All arithmetic is done in `Decimal`, then converted to `f64` rounded to
//! two places for display and serialization.
//!
//! Missing inputs never fail the calculation: a booking without dates, room
//! or price yields zero for the dependent subtotal and logs a warning.

pub mod payment;
pub mod services;
pub mod stay;
pub mod words;


use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use shared::models::{Booking, BookingService, BookingStatus, Guest, Tax};
use shared::{AppError, AppResult};

pub use payment::{PaymentDraft, next_payment, validate_payment};
pub use services::{line_total, merge_service_lines, service_total};
pub use stay::{GuestCounts, NightSource, StayNights, extra_adults, guest_counts, stay_nights};
pub use words::amount_in_words;

/// Rounding strategy for monetary values (2 decimal places, half away from zero)
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Tax rate applied when the tax master has no active entry
pub const DEFAULT_TAX_PERCENT: f64 = 18.0;

/// Convert f64 to Decimal for calculation
///
/// NaN/Infinity log an error and count as zero.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_else(|| {
            tracing::error!(value = %value, "Decimal out of f64 range, defaulting to zero");
            0.0
        })
}

/// Whether two amounts are equal within [`MONEY_TOLERANCE`]
pub fn money_eq(a: f64, b: f64) -> bool {
    (to_decimal(a) - to_decimal(b)).abs() < MONEY_TOLERANCE
}

/// Amount the tax percentage is applied to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxBase {
    /// Room subtotal plus the extra-adult surcharge
    #[default]
    #[serde(rename = "room_and_extra")]
    RoomAndExtraAdult,
    /// Room subtotal only
    #[serde(rename = "room")]
    RoomOnly,
}

impl FromStr for TaxBase {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match shared::util::normalize_key(s).as_str() {
            "roomandextraadult" | "roomandextra" | "roomextra" => Ok(Self::RoomAndExtraAdult),
            "room" | "roomonly" => Ok(Self::RoomOnly),
            _ => Err(AppError::config(format!(
                "Unknown tax base '{}', expected room or room_and_extra",
                s
            ))),
        }
    }
}

impl fmt::Display for TaxBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoomAndExtraAdult => f.write_str("room_and_extra"),
            Self::RoomOnly => f.write_str("room"),
        }
    }
}

/// Tax settings for a bill
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingPolicy {
    pub tax_percent: f64,
    pub tax_base: TaxBase,
}

impl Default for BillingPolicy {
    fn default() -> Self {
        Self {
            tax_percent: DEFAULT_TAX_PERCENT,
            tax_base: TaxBase::default(),
        }
    }
}

impl BillingPolicy {
    pub fn new(tax_percent: f64, tax_base: TaxBase) -> Self {
        Self {
            tax_percent,
            tax_base,
        }
    }

    /// Policy from the tax master: sum of active entries, default when none
    pub fn from_taxes(taxes: &[Tax]) -> Self {
        let active: Vec<&Tax> = taxes.iter().filter(|t| t.is_active).collect();
        if active.is_empty() {
            return Self::default();
        }
        let total: Decimal = active
            .iter()
            .filter_map(|t| t.tax_percent)
            .map(to_decimal)
            .sum();
        Self {
            tax_percent: to_f64(total),
            ..Self::default()
        }
    }
}

/// Full bill for one booking
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub booking_id: Option<i64>,
    pub booking_status: BookingStatus,
    pub room_number: Option<String>,
    /// `None` when the booking lacks check-in or check-out dates
    pub nights: Option<u32>,
    pub night_source: Option<NightSource>,
    pub room_price: f64,
    pub guests: GuestCounts,
    pub extra_adults: u32,
    pub room_subtotal: f64,
    pub extra_adult_charge: f64,
    /// Service lines after merging repeated Ordered items
    pub service_lines: Vec<BookingService>,
    pub service_total: f64,
    pub tax_percent: f64,
    pub tax_base: TaxBase,
    pub taxable_amount: f64,
    pub tax: f64,
    pub grand_total: f64,
    pub paid_amount: f64,
    pub amount_due: f64,
}

impl Bill {
    /// Nothing left to pay
    pub fn is_settled(&self) -> bool {
        self.amount_due <= 0.0
    }
}

/// Calculate the bill of a booking as of `as_of` (the desk's "now")
pub fn calculate_bill(booking: &Booking, policy: &BillingPolicy, as_of: NaiveDateTime) -> Bill {
    let stay = stay_nights(booking, as_of);
    if stay.is_none() {
        tracing::warn!(
            booking_id = ?booking.booking_id,
            "Booking has no usable check-in/check-out, room charges are zero"
        );
    }
    let nights = Decimal::from(stay.as_ref().map(|s| s.nights).unwrap_or(0));

    let room_price = match booking.room.as_ref().and_then(|r| r.price) {
        Some(price) => to_decimal(price),
        None => {
            tracing::warn!(booking_id = ?booking.booking_id, "Booking has no room price");
            Decimal::ZERO
        }
    };
    let extra_rate = booking
        .room
        .as_ref()
        .and_then(|r| r.extra_adult_charge)
        .map(to_decimal)
        .unwrap_or(Decimal::ZERO);

    let guests = guest_counts(booking);
    let extra = extra_adults(booking);

    let room_subtotal = room_price * nights;
    let extra_adult_charge = Decimal::from(extra) * extra_rate * nights;

    let service_lines = merge_service_lines(&booking.booking_services);
    let services = service_total(&service_lines);

    let taxable = match policy.tax_base {
        TaxBase::RoomAndExtraAdult => room_subtotal + extra_adult_charge,
        TaxBase::RoomOnly => room_subtotal,
    };
    let tax = (taxable * to_decimal(policy.tax_percent) / Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);

    let grand_total = room_subtotal + extra_adult_charge + tax + services;
    let paid: Decimal = booking
        .payments
        .iter()
        .filter_map(|p| p.amount)
        .map(to_decimal)
        .sum();
    let amount_due = (grand_total - paid).max(Decimal::ZERO);

    let bill = Bill {
        booking_id: booking.booking_id,
        booking_status: booking.booking_status.clone(),
        room_number: booking.room_number().map(str::to_string),
        nights: stay.as_ref().map(|s| s.nights),
        night_source: stay.as_ref().map(|s| s.source),
        room_price: to_f64(room_price),
        guests,
        extra_adults: extra,
        room_subtotal: to_f64(room_subtotal),
        extra_adult_charge: to_f64(extra_adult_charge),
        service_lines,
        service_total: to_f64(services),
        tax_percent: policy.tax_percent,
        tax_base: policy.tax_base,
        taxable_amount: to_f64(taxable),
        tax: to_f64(tax),
        grand_total: to_f64(grand_total),
        paid_amount: to_f64(paid),
        amount_due: to_f64(amount_due),
    };

    tracing::debug!(
        booking_id = ?bill.booking_id,
        nights = ?bill.nights,
        grand_total = bill.grand_total,
        amount_due = bill.amount_due,
        "Bill calculated"
    );
    bill
}

/// Billing contact: first guest flagged primary, else the first guest
pub fn primary_guest(booking: &Booking) -> Option<&Guest> {
    booking
        .guests
        .iter()
        .find(|g| g.is_primary)
        .or_else(|| booking.guests.first())
}
