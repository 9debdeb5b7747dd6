//! Payment drafting and validation

use serde::Serialize;
use shared::models::{BookingStatus, Payment, PaymentStatus, PaymentType};
use shared::{AppError, AppResult, ErrorCode};

use super::{Bill, MONEY_TOLERANCE, money_eq, to_decimal};

/// Payment mode preselected at the desk
pub const DEFAULT_PAYMENT_MODE: &str = "Cash";

/// Maximum allowed single payment
const MAX_PAYMENT_AMOUNT: f64 = 100_000_000.0;

/// Payment about to be submitted for a booking
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDraft {
    pub booking_id: Option<i64>,
    pub amount: f64,
    pub payment_mode: String,
    pub payment_type: PaymentType,
    pub payment_status: PaymentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Prefill the payment form from a bill
///
/// Amount is the outstanding due. `Final` when nothing has been paid yet
/// (due equals the grand total), otherwise `Advance`.
pub fn next_payment(bill: &Bill) -> PaymentDraft {
    let payment_type = if money_eq(bill.amount_due, bill.grand_total) {
        PaymentType::Final
    } else {
        PaymentType::Advance
    };
    PaymentDraft {
        booking_id: bill.booking_id,
        amount: bill.amount_due,
        payment_mode: DEFAULT_PAYMENT_MODE.to_string(),
        payment_type,
        payment_status: PaymentStatus::Completed,
        reference_number: None,
        notes: None,
    }
}

/// Validate a payment draft against the bill and the payments already made
///
/// - booking neither cancelled nor checked out
/// - amount finite and positive
/// - not above the amount due (0.01 tolerance)
/// - a non-empty reference number is not reused
pub fn validate_payment(bill: &Bill, draft: &PaymentDraft, existing: &[Payment]) -> AppResult<()> {
    match bill.booking_status {
        BookingStatus::Cancelled => {
            return Err(AppError::new(ErrorCode::BookingCancelled)
                .with_detail("bookingId", bill.booking_id));
        }
        BookingStatus::CheckedOut => {
            return Err(AppError::new(ErrorCode::BookingAlreadyCheckedOut)
                .with_detail("bookingId", bill.booking_id));
        }
        _ => {}
    }

    if !draft.amount.is_finite() || draft.amount <= 0.0 {
        return Err(AppError::with_message(
            ErrorCode::PaymentInvalidAmount,
            format!("Payment amount must be a positive number, got {}", draft.amount),
        )
        .with_detail("field", "amount"));
    }
    if draft.amount > MAX_PAYMENT_AMOUNT {
        return Err(AppError::with_message(
            ErrorCode::PaymentInvalidAmount,
            format!(
                "Payment amount exceeds maximum allowed ({}), got {}",
                MAX_PAYMENT_AMOUNT, draft.amount
            ),
        ));
    }

    if bill.is_settled() {
        return Err(AppError::new(ErrorCode::PaymentNotRequired));
    }

    let due = to_decimal(bill.amount_due);
    if to_decimal(draft.amount) > due + MONEY_TOLERANCE {
        return Err(AppError::with_message(
            ErrorCode::PaymentExceedsDue,
            format!(
                "Payment of {} exceeds amount due {}",
                draft.amount, bill.amount_due
            ),
        )
        .with_detail("amountDue", bill.amount_due));
    }

    if let Some(reference) = draft
        .reference_number
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty())
    {
        let duplicate = existing.iter().any(|p| {
            p.reference_number
                .as_deref()
                .is_some_and(|r| r.trim().eq_ignore_ascii_case(reference))
        });
        if duplicate {
            tracing::warn!(booking_id = ?bill.booking_id, reference, "Duplicate payment reference");
            return Err(AppError::with_message(
                ErrorCode::PaymentDuplicate,
                format!("Payment with reference {} already recorded", reference),
            )
            .with_detail("referenceNumber", reference));
        }
    }

    Ok(())
}

