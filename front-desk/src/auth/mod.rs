//! 权限模块
//!
//! 登录用户的权限判断，路由守卫，侧边栏菜单和角色权限选择：
//! - [`CurrentUser`] - 当前用户上下文 (缓存登录时的权限列表)
//! - [`check_route`] - 路由权限守卫
//! - [`visible_menu`] - 按权限过滤的侧边栏菜单
//! - [`split_permissions`] - 角色编辑页的已选/可选权限

pub mod guard;
pub mod menu;
pub mod permissions;
pub mod roles;

pub use guard::{DENIED_REDIRECT, RouteRequirement, check_route};
pub use menu::{MenuEntry, MenuItem, SIDEBAR, visible_menu};
pub use permissions::{CurrentUser, PermissionRequest, actions, codes, modules};
pub use roles::{search_permissions, split_permissions};
