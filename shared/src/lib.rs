//! Shared types for the front desk
//!
//! Domain models mirrored from the property-management backend, the unified
//! error system, and the serde helpers used to read backend payloads.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};
