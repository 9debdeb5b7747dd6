//! Permission Evaluation
//!
//! 简单 RBAC：
//! - `isAdmin` 用户拥有所有权限
//! - 其余用户按登录时缓存的权限列表判断 (module + action，或权限码)
//! - 比较均不区分大小写，没有拒绝列表和角色继承

use serde::{Deserialize, Serialize};
use shared::models::{Permission, User};

/// 后端资源模块名 (权限的 `module` 字段)
pub mod modules {
    pub const USERS: &str = "Users";
    pub const ROLE: &str = "Role";
    pub const PERMISSION: &str = "Permission";
    pub const ROOM: &str = "Room";
    pub const BOOKING: &str = "Booking";
    pub const HOUSEKEEPING: &str = "HousekeepingTask";
    pub const SERVICE: &str = "Service";
    pub const TAX: &str = "Tax";
    pub const PAYMENT: &str = "Payment";
}

/// 操作名 (权限的 `action` 字段)
pub mod actions {
    pub const VIEW: &str = "view";
    pub const CREATE: &str = "create";
    pub const UPDATE: &str = "update";
    pub const DELETE: &str = "delete";
}

/// 菜单权限码 (后端 permission_code)
pub mod codes {
    pub const DASHBOARD: &str = "DS";
    pub const RESERVATIONS: &str = "RB";
    pub const FRONT_DESK: &str = "FD";
    pub const HOUSEKEEPING: &str = "HK";
    pub const MESSAGES: &str = "MM";
    pub const MASTERS: &str = "MS";
    pub const PROPERTY_SETUP: &str = "PS";
    pub const REVENUE: &str = "RM";
    pub const USERS: &str = "RU";
    pub const ROLES: &str = "RO";
    pub const REPORTS: &str = "RT";
}

/// 单个权限需求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PermissionRequest {
    /// module + action
    Pair { module: String, action: String },
    /// 权限码，匹配 module / name / code 任一字段
    Code(String),
}

impl PermissionRequest {
    pub fn pair(module: impl Into<String>, action: impl Into<String>) -> Self {
        Self::Pair {
            module: module.into(),
            action: action.into(),
        }
    }

    pub fn code(code: impl Into<String>) -> Self {
        Self::Code(code.into())
    }
}

impl std::fmt::Display for PermissionRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pair { module, action } => write!(f, "{}:{}", module, action),
            Self::Code(code) => f.write_str(code),
        }
    }
}

/// 当前用户上下文
///
/// 权限列表在登录时从 [`User`] 复制，直到下次登录都不会刷新。
///
/// ```
/// use front_desk::auth::CurrentUser;
/// use shared::models::Permission;
///
/// let user = CurrentUser {
///     user_id: 1,
///     username: "desk".into(),
///     role_name: None,
///     is_admin: false,
///     permissions: vec![Permission::new("Booking", "create")],
/// };
/// assert!(user.has_permission("booking", "CREATE"));
/// assert!(!user.has_permission("Booking", "delete"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    /// 用户 ID
    pub user_id: i64,
    /// 用户名
    pub username: String,
    /// 角色名称
    pub role_name: Option<String>,
    /// 管理员拥有所有权限
    pub is_admin: bool,
    /// 权限列表
    pub permissions: Vec<Permission>,
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.user_id,
            username: if user.username.is_empty() {
                user.name.clone()
            } else {
                user.username.clone()
            },
            role_name: user.role_name.clone(),
            is_admin: user.is_admin,
            permissions: user.permissions.clone(),
        }
    }
}

impl CurrentUser {
    /// 检查 module + action 权限
    ///
    /// 1. 管理员拥有所有权限
    /// 2. 否则需有一条权限的 module 和 action 都相等 (不区分大小写)
    pub fn has_permission(&self, module: &str, action: &str) -> bool {
        if self.is_admin {
            return true;
        }
        self.permissions.iter().any(|p| {
            p.module.eq_ignore_ascii_case(module) && p.action.eq_ignore_ascii_case(action)
        })
    }

    /// 检查权限码
    ///
    /// 权限码可匹配 module、name 或 code 字段
    pub fn has_code(&self, code: &str) -> bool {
        if self.is_admin {
            return true;
        }
        self.permissions.iter().any(|p| {
            p.module.eq_ignore_ascii_case(code)
                || p.name.eq_ignore_ascii_case(code)
                || p.code
                    .as_deref()
                    .is_some_and(|c| c.eq_ignore_ascii_case(code))
        })
    }

    /// 检查任一权限码 (OR)
    pub fn has_any_code(&self, codes: &[&str]) -> bool {
        if self.is_admin {
            return true;
        }
        codes.iter().any(|c| self.has_code(c))
    }

    pub fn allows(&self, request: &PermissionRequest) -> bool {
        match request {
            PermissionRequest::Pair { module, action } => self.has_permission(module, action),
            PermissionRequest::Code(code) => self.has_code(code),
        }
    }

    /// 检查是否拥有任一指定权限
    pub fn has_any_permission(&self, requests: &[PermissionRequest]) -> bool {
        if self.is_admin {
            return true;
        }
        requests.iter().any(|r| self.allows(r))
    }

    /// 检查是否拥有所有指定权限 (空列表视为满足)
    pub fn has_all_permissions(&self, requests: &[PermissionRequest]) -> bool {
        if self.is_admin {
            return true;
        }
        requests.iter().all(|r| self.allows(r))
    }

    /// 是否拥有该模块下的任意权限
    pub fn can_access_module(&self, module: &str) -> bool {
        if self.is_admin {
            return true;
        }
        self.permissions
            .iter()
            .any(|p| p.module.eq_ignore_ascii_case(module))
    }
}
