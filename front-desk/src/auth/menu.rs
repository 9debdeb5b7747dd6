//! 侧边栏菜单
//!
//! 菜单项按权限码过滤：
//! - 没有权限码的项不显示
//! - 多个权限码为 OR
//! - 下拉菜单至少要有一个可见子项

use serde::Serialize;

use super::CurrentUser;
use super::permissions::codes;

/// 静态菜单定义
#[derive(Debug, Clone, Copy)]
pub struct MenuItem {
    pub label: &'static str,
    pub route: Option<&'static str>,
    pub codes: &'static [&'static str],
    pub children: &'static [MenuItem],
}

impl MenuItem {
    const fn link(label: &'static str, route: &'static str, codes: &'static [&'static str]) -> Self {
        Self {
            label,
            route: Some(route),
            codes,
            children: &[],
        }
    }

    const fn dropdown(
        label: &'static str,
        codes: &'static [&'static str],
        children: &'static [MenuItem],
    ) -> Self {
        Self {
            label,
            route: None,
            codes,
            children,
        }
    }

    fn is_dropdown(&self) -> bool {
        !self.children.is_empty()
    }
}

/// 过滤后的菜单项
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuEntry>,
}

const RESERVATION_ITEMS: &[MenuItem] = &[
    MenuItem::link("Room Booking", "/main/room-booking", &[codes::RESERVATIONS]),
    MenuItem::link(
        "Current Booking",
        "/main/reservations/current-booking",
        &[codes::RESERVATIONS],
    ),
    MenuItem::link(
        "Set Room Availability",
        "/main/reservations/set-availability",
        &[codes::RESERVATIONS],
    ),
    MenuItem::link("Booking History", "/main/paymentpage", &[codes::RESERVATIONS]),
];

const MASTER_ITEMS: &[MenuItem] = &[
    MenuItem::link("Room Master", "/main/masters/room-master", &[codes::MASTERS]),
    MenuItem::link(
        "Hotel Registration",
        "/main/masters/hotel-registration",
        &[codes::MASTERS],
    ),
    MenuItem::link(
        "Service Master",
        "/main/masters/service-master",
        &[codes::MASTERS],
    ),
];

const USER_ITEMS: &[MenuItem] = &[
    MenuItem::link("Roles & Permissions", "/main/roles-permissions", &[codes::ROLES]),
    MenuItem::link("Users", "/main/users", &[codes::USERS]),
];

pub const SIDEBAR: &[MenuItem] = &[
    MenuItem::link("Dashboard", "/main/dashboard", &[codes::DASHBOARD]),
    MenuItem::dropdown("Reservations", &[codes::RESERVATIONS], RESERVATION_ITEMS),
    MenuItem::link("Front Desk", "/main/front-desk", &[codes::FRONT_DESK]),
    MenuItem::link("House keeping", "/main/housekeeping", &[codes::HOUSEKEEPING]),
    MenuItem::link("Message Management", "/main/messages", &[codes::MESSAGES]),
    MenuItem::dropdown("Masters", &[codes::MASTERS], MASTER_ITEMS),
    MenuItem::link("Property Setup", "/main/property-setup", &[codes::PROPERTY_SETUP]),
    MenuItem::link("Revenue Management", "/main/revenue", &[codes::REVENUE]),
    MenuItem::dropdown("User Management", &[codes::USERS, codes::ROLES], USER_ITEMS),
    MenuItem::link("Reports", "/main/reports", &[codes::REPORTS]),
];

fn permits(user: &CurrentUser, item: &MenuItem) -> bool {
    !item.codes.is_empty() && user.has_any_code(item.codes)
}

/// 当前用户可见的菜单
pub fn visible_menu(user: &CurrentUser, items: &[MenuItem]) -> Vec<MenuEntry> {
    items
        .iter()
        .filter(|item| permits(user, item))
        .filter_map(|item| {
            let children: Vec<MenuEntry> = item
                .children
                .iter()
                .filter(|child| permits(user, child))
                .map(|child| MenuEntry {
                    label: child.label.to_string(),
                    route: child.route.map(str::to_string),
                    children: vec![],
                })
                .collect();
            if item.is_dropdown() && children.is_empty() {
                return None;
            }
            Some(MenuEntry {
                label: item.label.to_string(),
                route: item.route.map(str::to_string),
                children,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Permission;

    fn with_codes(list: &[&str]) -> CurrentUser {
        CurrentUser {
            user_id: 4,
            username: "ops".to_string(),
            role_name: None,
            is_admin: false,
            permissions: list
                .iter()
                .map(|c| Permission {
                    code: Some(c.to_string()),
                    ..Default::default()
                })
                .collect(),
        }
    }

    fn labels(entries: &[MenuEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.label.as_str()).collect()
    }

    #[test]
    fn test_admin_sees_full_menu() {
        let mut admin = with_codes(&[]);
        admin.is_admin = true;
        let menu = visible_menu(&admin, SIDEBAR);
        assert_eq!(menu.len(), SIDEBAR.len());
        assert_eq!(menu[1].children.len(), 4);
    }

    #[test]
    fn test_menu_filtered_by_code() {
        let menu = visible_menu(&with_codes(&["DS", "HK"]), SIDEBAR);
        assert_eq!(labels(&menu), vec!["Dashboard", "House keeping"]);
        assert!(menu[0].children.is_empty());
    }

    #[test]
    fn test_dropdown_or_codes_and_children() {
        let menu = visible_menu(&with_codes(&["RO"]), SIDEBAR);
        assert_eq!(labels(&menu), vec!["User Management"]);
        assert_eq!(labels(&menu[0].children), vec!["Roles & Permissions"]);
        assert!(menu[0].route.is_none());
    }

    #[test]
    fn test_dropdown_hidden_without_children() {
        const CHILDREN: &[MenuItem] = &[MenuItem::link("Child", "/child", &["YY"])];
        const ORPHAN: &[MenuItem] = &[MenuItem::dropdown("Empty", &["XX"], CHILDREN)];
        assert!(visible_menu(&with_codes(&["XX"]), ORPHAN).is_empty());
    }

    #[test]
    fn test_item_without_code_hidden() {
        const NO_CODE: &[MenuItem] = &[MenuItem::link("Open", "/open", &[])];
        let mut admin = with_codes(&[]);
        admin.is_admin = true;
        assert!(visible_menu(&admin, NO_CODE).is_empty());
    }
}
