//! Front Desk - 酒店前台计费与权限核心
//!
//! # 架构概述
//!
//! - **计费** (`billing`): 入住晚数、房费、加人费、税、服务项、应付余额
//! - **权限** (`auth`): 管理员放行 + module/action 或权限码匹配，路由守卫，菜单过滤
//! - **状态** (`core`): 配置、会话与加载状态容器
//! - **预订** (`bookings`): 预订查询、客人规则、选房
//! - **客房服务** (`housekeeping`): 任务列表过滤
//! - **接口数据** (`schema`): 后端 JSON 到类型化模型
//!
//! # 模块结构
//!
//! ```text
//! front-desk/src/
//! ├── billing/       # 计费 (rust_decimal)
//! ├── auth/          # 权限、路由守卫、菜单、角色权限选择
//! ├── core/          # 配置、状态
//! ├── bookings/      # 预订、客人、房间
//! ├── housekeeping.rs
//! ├── schema.rs
//! └── utils/         # 日志、错误类型
//! ```

pub mod auth;
pub mod billing;
pub mod bookings;
pub mod core;
pub mod housekeeping;
pub mod schema;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, PermissionRequest, RouteRequirement};
pub use billing::{Bill, BillingPolicy, TaxBase, calculate_bill};
pub use crate::core::{AppState, Config};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// 设置运行环境 (dotenv, 日志)
///
/// `.env` 不存在时忽略
pub fn setup_environment() -> Config {
    let _ = dotenv::dotenv();
    let config = Config::from_env();
    let log_path = config.log_path();
    init_logger_with_file(
        Some(&config.log_level),
        Some(config.is_production()),
        log_path.as_deref().and_then(|p| p.to_str()),
    );
    tracing::debug!(
        work_dir = %config.work_dir,
        environment = %config.environment,
        tax_percent = config.tax_percent,
        tax_base = %config.tax_base,
        "Environment ready"
    );
    config
}
