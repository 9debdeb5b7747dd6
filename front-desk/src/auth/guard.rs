//! 路由权限守卫
//!
//! 路由声明单个权限和/或一组权限 (`require_all` 决定 AND 还是 OR)。
//! 不满足时返回 `PermissionDenied`，detail 中带有跳转目标。

use serde::{Deserialize, Serialize};
use shared::{AppError, AppResult};

use super::{CurrentUser, PermissionRequest};
use crate::security_log;

/// 权限不足时跳转的页面
pub const DENIED_REDIRECT: &str = "/main/dashboard";

/// 路由上声明的权限需求
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequirement {
    #[serde(default)]
    pub permission: Option<PermissionRequest>,
    #[serde(default)]
    pub permissions: Vec<PermissionRequest>,
    #[serde(default)]
    pub require_all: bool,
}

impl RouteRequirement {
    /// 需要单个权限
    pub fn single(request: PermissionRequest) -> Self {
        Self {
            permission: Some(request),
            ..Default::default()
        }
    }

    /// 需要一组权限中的任一个
    pub fn any(requests: Vec<PermissionRequest>) -> Self {
        Self {
            permissions: requests,
            ..Default::default()
        }
    }

    /// 需要一组权限全部满足
    pub fn all(requests: Vec<PermissionRequest>) -> Self {
        Self {
            permissions: requests,
            require_all: true,
            ..Default::default()
        }
    }
}

/// 检查用户能否进入路由
///
/// 1. `permission` 存在时必须满足
/// 2. `permissions` 非空时按 `require_all` 做 AND / OR
pub fn check_route(user: &CurrentUser, requirement: &RouteRequirement) -> AppResult<()> {
    if let Some(request) = &requirement.permission
        && !user.allows(request)
    {
        return Err(denied(user, &request.to_string()));
    }

    if !requirement.permissions.is_empty() {
        let allowed = if requirement.require_all {
            user.has_all_permissions(&requirement.permissions)
        } else {
            user.has_any_permission(&requirement.permissions)
        };
        if !allowed {
            let wanted = requirement
                .permissions
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(if requirement.require_all { " & " } else { " | " });
            return Err(denied(user, &wanted));
        }
    }

    Ok(())
}

fn denied(user: &CurrentUser, wanted: &str) -> AppError {
    security_log!(
        "WARN",
        "permission_denied",
        user_id = user.user_id,
        username = user.username.as_str(),
        required = wanted
    );
    AppError::permission_denied(format!("Permission denied: {}", wanted))
        .with_detail("required", wanted)
        .with_detail("redirect", DENIED_REDIRECT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;
    use shared::models::Permission;

    fn user(permissions: Vec<Permission>, is_admin: bool) -> CurrentUser {
        CurrentUser {
            user_id: 3,
            username: "desk".to_string(),
            role_name: None,
            is_admin,
            permissions,
        }
    }

    #[test]
    fn test_no_requirement_passes() {
        let u = user(vec![], false);
        assert!(check_route(&u, &RouteRequirement::default()).is_ok());
    }

    #[test]
    fn test_single_requirement() {
        let u = user(vec![Permission::new("Room", "view")], false);
        assert!(check_route(&u, &RouteRequirement::single(PermissionRequest::pair("room", "VIEW"))).is_ok());

        let err = check_route(&u, &RouteRequirement::single(PermissionRequest::pair("Room", "delete")))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::PermissionDenied);
        assert_eq!(err.detail("redirect").unwrap(), DENIED_REDIRECT);
        assert_eq!(err.detail("required").unwrap(), "Room:delete");
    }

    #[test]
    fn test_any_and_all_requirements() {
        let u = user(vec![Permission::new("Booking", "view")], false);
        let requests = vec![
            PermissionRequest::pair("Booking", "view"),
            PermissionRequest::pair("Payment", "view"),
        ];

        assert!(check_route(&u, &RouteRequirement::any(requests.clone())).is_ok());

        let err = check_route(&u, &RouteRequirement::all(requests)).unwrap_err();
        assert_eq!(err.code, ErrorCode::PermissionDenied);
        assert_eq!(
            err.detail("required").unwrap(),
            "Booking:view & Payment:view"
        );
    }

    #[test]
    fn test_single_and_list_both_checked() {
        let u = user(vec![Permission::new("Booking", "view")], false);
        let requirement = RouteRequirement {
            permission: Some(PermissionRequest::pair("Booking", "view")),
            permissions: vec![PermissionRequest::code("RT")],
            require_all: false,
        };
        assert!(check_route(&u, &requirement).is_err());
    }

    #[test]
    fn test_admin_passes_everything() {
        let u = user(vec![], true);
        let requirement = RouteRequirement {
            permission: Some(PermissionRequest::code("RO")),
            permissions: vec![PermissionRequest::pair("Users", "delete")],
            require_all: true,
        };
        assert!(check_route(&u, &requirement).is_ok());
    }

    #[test]
    fn test_requirement_from_route_data() {
        let json = r#"{"permissions": [{"module": "Tax", "action": "view"}, "MS"], "requireAll": true}"#;
        let requirement: RouteRequirement = serde_json::from_str(json).unwrap();
        assert!(requirement.permission.is_none());
        assert_eq!(requirement.permissions.len(), 2);
        assert!(requirement.require_all);
    }
}
