//! Unified error codes for the front desk
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 4xxx: Booking errors
//! - 5xxx: Payment errors
//! - 6xxx: Room errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so they serialize the same
/// way the backend reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// Account is disabled
    AccountDisabled = 1007,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,

    // ==================== 4xxx: Booking ====================
    /// Booking has already been checked out
    BookingAlreadyCheckedOut = 4002,
    /// Booking has been cancelled
    BookingCancelled = 4003,
    /// Booking has no guests
    GuestRequired = 4004,
    /// No guest is marked as primary
    PrimaryGuestRequired = 4005,
    /// More than one guest is marked as primary
    MultiplePrimaryGuests = 4006,
    /// The last guest of a booking cannot be removed
    LastGuestRemoval = 4007,
    /// Guest index out of range
    GuestNotFound = 4008,

    // ==================== 5xxx: Payment ====================
    /// Payment amount is not a positive finite number
    PaymentInvalidAmount = 5002,
    /// Payment amount exceeds the amount due
    PaymentExceedsDue = 5003,
    /// Payment with the same reference already recorded
    PaymentDuplicate = 5004,
    /// Booking is already settled
    PaymentNotRequired = 5005,

    // ==================== 6xxx: Room ====================
    /// Room is occupied
    RoomOccupied = 6002,
    /// Room is not available for booking (maintenance, blocked, ...)
    RoomUnavailable = 6003,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Configuration error
    ConfigError = 9002,
    /// Backend reported an error
    BackendError = 9003,
    /// Backend response could not be understood
    InvalidResponse = 9004,
}

impl ErrorCode {
    /// Get the numeric code
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this code represents success
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::TokenExpired => "Authentication token has expired",
            ErrorCode::TokenInvalid => "Authentication token is invalid",
            ErrorCode::AccountDisabled => "Account is disabled",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",

            // Booking
            ErrorCode::BookingAlreadyCheckedOut => "Booking has already been checked out",
            ErrorCode::BookingCancelled => "Booking has been cancelled",
            ErrorCode::GuestRequired => "At least one guest is required",
            ErrorCode::PrimaryGuestRequired => "Please select at least one guest as primary",
            ErrorCode::MultiplePrimaryGuests => "Only one guest can be primary",
            ErrorCode::LastGuestRemoval => "A booking must keep at least one guest",
            ErrorCode::GuestNotFound => "Guest not found",

            // Payment
            ErrorCode::PaymentInvalidAmount => "Payment amount must be a positive number",
            ErrorCode::PaymentExceedsDue => "Payment amount exceeds the amount due",
            ErrorCode::PaymentDuplicate => "Payment has already been recorded",
            ErrorCode::PaymentNotRequired => "Booking is already settled",

            // Room
            ErrorCode::RoomOccupied => {
                "This room is already occupied. Please select an available room."
            }
            ErrorCode::RoomUnavailable => "This room is not available for booking at the moment.",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::BackendError => "Request failed. Please try again.",
            ErrorCode::InvalidResponse => "Invalid response from server",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 to [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),
            1007 => Ok(ErrorCode::AccountDisabled),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),

            // Booking
            4002 => Ok(ErrorCode::BookingAlreadyCheckedOut),
            4003 => Ok(ErrorCode::BookingCancelled),
            4004 => Ok(ErrorCode::GuestRequired),
            4005 => Ok(ErrorCode::PrimaryGuestRequired),
            4006 => Ok(ErrorCode::MultiplePrimaryGuests),
            4007 => Ok(ErrorCode::LastGuestRemoval),
            4008 => Ok(ErrorCode::GuestNotFound),

            // Payment
            5002 => Ok(ErrorCode::PaymentInvalidAmount),
            5003 => Ok(ErrorCode::PaymentExceedsDue),
            5004 => Ok(ErrorCode::PaymentDuplicate),
            5005 => Ok(ErrorCode::PaymentNotRequired),

            // Room
            6002 => Ok(ErrorCode::RoomOccupied),
            6003 => Ok(ErrorCode::RoomUnavailable),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::ConfigError),
            9003 => Ok(ErrorCode::BackendError),
            9004 => Ok(ErrorCode::InvalidResponse),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::NotAuthenticated.code(), 1001);
        assert_eq!(ErrorCode::PermissionDenied.code(), 2001);
        assert_eq!(ErrorCode::BookingCancelled.code(), 4003);
        assert_eq!(ErrorCode::PaymentExceedsDue.code(), 5003);
        assert_eq!(ErrorCode::RoomOccupied.code(), 6002);
        assert_eq!(ErrorCode::InvalidResponse.code(), 9004);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::NotFound.is_success());
        assert!(!ErrorCode::InternalError.is_success());
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(0), Ok(ErrorCode::Success));
        assert_eq!(ErrorCode::try_from(1001), Ok(ErrorCode::NotAuthenticated));
        assert_eq!(ErrorCode::try_from(4005), Ok(ErrorCode::PrimaryGuestRequired));
        assert_eq!(ErrorCode::try_from(5004), Ok(ErrorCode::PaymentDuplicate));
        assert_eq!(ErrorCode::try_from(9001), Ok(ErrorCode::InternalError));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(1006), Err(InvalidErrorCode(1006)));
        assert_eq!(ErrorCode::try_from(4001), Err(InvalidErrorCode(4001)));
        assert_eq!(ErrorCode::try_from(10000), Err(InvalidErrorCode(10000)));
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&ErrorCode::NotFound).unwrap();
        assert_eq!(json, "3");

        let json = serde_json::to_string(&ErrorCode::BookingCancelled).unwrap();
        assert_eq!(json, "4003");
    }

    #[test]
    fn test_deserialize() {
        let code: ErrorCode = serde_json::from_str("6003").unwrap();
        assert_eq!(code, ErrorCode::RoomUnavailable);

        let result: Result<ErrorCode, _> = serde_json::from_str("999");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ErrorCode::Success), "0");
        assert_eq!(format!("{}", ErrorCode::PaymentDuplicate), "5004");
    }

    #[test]
    fn test_message() {
        assert_eq!(ErrorCode::NotFound.message(), "Resource not found");
        assert_eq!(
            ErrorCode::InvalidResponse.message(),
            "Invalid response from server"
        );
        assert_eq!(
            ErrorCode::PrimaryGuestRequired.message(),
            "Please select at least one guest as primary"
        );
    }

    #[test]
    fn test_invalid_error_code_display() {
        let err = InvalidErrorCode(999);
        assert_eq!(format!("{}", err), "invalid error code: 999");
    }
}
