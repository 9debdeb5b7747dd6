//! Backend payloads → typed models
//!
//! Every backend response passes through here once; past this boundary the
//! crate only sees the models of `shared::models`.
//!
//! List endpoints answer either with a bare array or with a `{ "data": [...] }`
//! envelope; both are accepted.

use http::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::models::{Booking, HousekeepingTask, Room, Tax, User};
use shared::{AppError, AppResult, ErrorCode};

/// Message used when a payload is missing what the client needs
pub const INVALID_RESPONSE: &str = "Invalid response from server";

/// Parse raw JSON text
pub fn parse_json(raw: &str) -> AppResult<Value> {
    Ok(serde_json::from_str(raw)?)
}

fn unwrap_data(payload: Value) -> Value {
    match payload {
        Value::Object(mut map) if map.contains_key("data") => map.remove("data").unwrap_or(Value::Null),
        other => other,
    }
}

fn parse_one<T: DeserializeOwned>(payload: Value, what: &str) -> AppResult<T> {
    match unwrap_data(payload) {
        value @ Value::Object(_) => Ok(serde_json::from_value(value)?),
        other => {
            tracing::warn!(kind = what, got = %json_kind(&other), "Expected an object");
            Err(AppError::invalid_response(INVALID_RESPONSE).with_detail("expected", what))
        }
    }
}

fn parse_list<T: DeserializeOwned>(payload: Value, what: &str) -> AppResult<Vec<T>> {
    match unwrap_data(payload) {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(AppError::from))
            .collect(),
        Value::Null => Ok(Vec::new()),
        other => {
            tracing::warn!(kind = what, got = %json_kind(&other), "Expected a list");
            Err(AppError::invalid_response(INVALID_RESPONSE).with_detail("expected", what))
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub fn parse_booking(payload: Value) -> AppResult<Booking> {
    parse_one(payload, "booking")
}

pub fn parse_bookings(payload: Value) -> AppResult<Vec<Booking>> {
    parse_list(payload, "bookings")
}

pub fn parse_rooms(payload: Value) -> AppResult<Vec<Room>> {
    parse_list(payload, "rooms")
}

pub fn parse_taxes(payload: Value) -> AppResult<Vec<Tax>> {
    parse_list(payload, "taxes")
}

pub fn parse_tasks(payload: Value) -> AppResult<Vec<HousekeepingTask>> {
    parse_list(payload, "housekeeping tasks")
}

/// Login response: must carry a non-zero `userId` and a token
pub fn parse_login(payload: Value) -> AppResult<User> {
    let payload = unwrap_data(payload);
    let has_user_id = payload
        .get("userId")
        .and_then(shared::util::value_to_f64)
        .is_some_and(|id| id != 0.0);
    let has_token = payload
        .get("token")
        .and_then(Value::as_str)
        .is_some_and(|t| !t.trim().is_empty());
    if !has_user_id || !has_token {
        tracing::warn!(has_user_id, has_token, "Login response rejected");
        return Err(AppError::invalid_response(INVALID_RESPONSE));
    }

    let mut user: User = serde_json::from_value(payload)?;
    user.token = user.token.trim().to_string();
    Ok(user)
}

/// Error body of a failed request → `AppError`
///
/// Message is taken from `error.message`, then `message`, then `fallback`.
/// A numeric `code` the client knows wins over the HTTP status.
pub fn parse_error_body(status: Option<StatusCode>, body: &Value, fallback: &str) -> AppError {
    let message = body
        .pointer("/error/message")
        .and_then(Value::as_str)
        .or_else(|| body.get("message").and_then(Value::as_str))
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or(fallback);

    let code = body
        .get("code")
        .and_then(Value::as_u64)
        .and_then(|c| u16::try_from(c).ok())
        .and_then(|c| ErrorCode::try_from(c).ok())
        .filter(|c| !c.is_success())
        .or_else(|| status.map(ErrorCode::from_http_status).filter(|c| !c.is_success()))
        .unwrap_or(ErrorCode::BackendError);

    AppError::with_message(code, message)
}
