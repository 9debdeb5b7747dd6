//! Permission Model

use serde::{Deserialize, Serialize};

use crate::util::null_default;

/// Permission entry held on the logged-in user
///
/// A permission is a `module` + `action` pair; some backends also send a
/// single `code` string (e.g. `"booking.create"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    #[serde(default, alias = "Id")]
    pub id: Option<i64>,
    #[serde(default, alias = "permission_name", deserialize_with = "null_default")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub module: String,
    #[serde(default, deserialize_with = "null_default")]
    pub action: String,
    #[serde(default, alias = "permission_code")]
    pub code: Option<String>,
}

impl Permission {
    /// Build a module/action permission
    pub fn new(module: impl Into<String>, action: impl Into<String>) -> Self {
        let module = module.into();
        let action = action.into();
        Self {
            name: format!("{} {}", action, module),
            module,
            action,
            ..Default::default()
        }
    }
}
