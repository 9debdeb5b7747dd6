//! User Model

use serde::{Deserialize, Serialize};

use super::Permission;
use crate::util::null_default;

fn default_true() -> bool {
    true
}

/// Logged-in user as returned by the `Login` endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_default")]
    pub username: String,
    #[serde(default, deserialize_with = "null_default")]
    pub phone: String,
    #[serde(default)]
    pub role_id: Option<i64>,
    #[serde(default)]
    pub role_name: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub is_staff: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub is_admin: bool,
    #[serde(default, alias = "ImageUrl")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub permissions: Vec<Permission>,
    #[serde(default, deserialize_with = "null_default")]
    pub token: String,
}
