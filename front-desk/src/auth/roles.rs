//! 角色权限选择 (角色编辑页)

use shared::models::Permission;

/// 按已选 ID 把权限目录分为 (已分配, 可分配)，保持目录顺序
pub fn split_permissions(all: &[Permission], chosen_ids: &[i64]) -> (Vec<Permission>, Vec<Permission>) {
    all.iter()
        .cloned()
        .partition(|p| p.id.is_some_and(|id| chosen_ids.contains(&id)))
}

/// 按名称或权限码搜索，不区分大小写；空查询返回全部
pub fn search_permissions<'a>(list: &'a [Permission], query: &str) -> Vec<&'a Permission> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return list.iter().collect();
    }
    list.iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle)
                || p.code
                    .as_deref()
                    .is_some_and(|c| c.to_lowercase().contains(&needle))
        })
        .collect()
}
