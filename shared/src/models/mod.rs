//! Data models
//!
//! Mirrors of the backend resources (camelCase JSON). Every field the
//! backend may omit or send as `null` is optional or defaulted, so a sparse
//! payload still parses; the billing layer decides what a gap means.

pub mod booking;
pub mod guest;
pub mod housekeeping;
pub mod payment;
pub mod permission;
pub mod role;
pub mod room;
pub mod service;
pub mod tax;
pub mod user;

// Re-exports
pub use booking::*;
pub use guest::*;
pub use housekeeping::*;
pub use payment::*;
pub use permission::*;
pub use role::*;
pub use room::*;
pub use service::*;
pub use tax::*;
pub use user::*;
