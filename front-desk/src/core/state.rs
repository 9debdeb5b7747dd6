use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::RwLock;
use shared::models::User;
use shared::{AppError, AppResult, ErrorCode};

use crate::auth::{CurrentUser, RouteRequirement, check_route};
use crate::security_log;

/// 在途请求计数
///
/// 每个请求持有一个 [`LoadingGuard`]，guard 释放时计数减一。
/// 多个请求交叠时，只有全部结束后 `is_loading()` 才返回 false。
#[derive(Debug, Clone, Default)]
pub struct LoadingTracker {
    in_flight: Arc<AtomicUsize>,
}

impl LoadingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 开始一个请求
    pub fn begin(&self) -> LoadingGuard {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        LoadingGuard {
            in_flight: Arc::clone(&self.in_flight),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight() > 0
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }
}

/// 请求结束 (drop) 时自动减少计数
#[derive(Debug)]
#[must_use = "loading ends as soon as the guard is dropped"]
pub struct LoadingGuard {
    in_flight: Arc<AtomicUsize>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone)]
struct Session {
    user: CurrentUser,
    token: String,
}

/// 应用状态 - 当前会话和加载状态
///
/// 使用 Arc 实现浅拷贝，克隆后共享同一会话。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | session | RwLock<Option<Session>> | 登录用户、令牌和权限列表 |
/// | loading | LoadingTracker | 在途请求计数 |
#[derive(Debug, Clone, Default)]
pub struct AppState {
    session: Arc<RwLock<Option<Session>>>,
    loading: LoadingTracker,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登录：缓存用户、令牌和权限列表
    ///
    /// 权限列表在下次登录前不会刷新。
    ///
    /// # 错误
    ///
    /// - 令牌为空: `TokenInvalid`
    /// - 账号停用: `AccountDisabled`
    pub fn login(&self, user: &User) -> AppResult<CurrentUser> {
        let token = user.token.trim();
        if token.is_empty() {
            security_log!("WARN", "login_rejected", user_id = user.user_id, reason = "missing_token");
            return Err(AppError::with_message(
                ErrorCode::TokenInvalid,
                "Login response has no token",
            ));
        }
        if !user.is_active {
            security_log!("WARN", "login_rejected", user_id = user.user_id, reason = "inactive");
            return Err(AppError::new(ErrorCode::AccountDisabled));
        }

        let current = CurrentUser::from(user);
        *self.session.write() = Some(Session {
            user: current.clone(),
            token: token.to_string(),
        });

        security_log!(
            "INFO",
            "login",
            user_id = current.user_id,
            username = current.username.as_str(),
            is_admin = current.is_admin,
            permissions = current.permissions.len()
        );
        Ok(current)
    }

    /// 登出：清除用户、令牌和权限
    pub fn logout(&self) {
        if let Some(session) = self.session.write().take() {
            security_log!("INFO", "logout", user_id = session.user.user_id);
        }
    }

    pub fn current_user(&self) -> Option<CurrentUser> {
        self.session.read().as_ref().map(|s| s.user.clone())
    }

    /// Bearer 令牌
    pub fn token(&self) -> Option<String> {
        self.session.read().as_ref().map(|s| s.token.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_some()
    }

    /// 要求已登录
    pub fn require_user(&self) -> AppResult<CurrentUser> {
        self.current_user().ok_or_else(AppError::not_authenticated)
    }

    /// 登录检查 + 路由权限检查
    pub fn authorize(&self, requirement: &RouteRequirement) -> AppResult<CurrentUser> {
        let user = self.require_user()?;
        check_route(&user, requirement)?;
        Ok(user)
    }

    pub fn loading(&self) -> &LoadingTracker {
        &self.loading
    }
}
