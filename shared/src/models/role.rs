//! Role Model

use serde::{Deserialize, Serialize};

use super::Permission;
use crate::util::null_default;

/// Role entity (RBAC role with its granted permissions)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    #[serde(default, alias = "Id", alias = "id")]
    pub role_id: Option<i64>,
    #[serde(default, alias = "role_name", deserialize_with = "null_default")]
    pub role_name: String,
    #[serde(default, alias = "isactive", deserialize_with = "null_default")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub permissions: Vec<Permission>,
}
