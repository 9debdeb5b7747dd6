//! 核心模块 - 配置和应用状态
//!
//! - [`Config`] - 环境变量配置
//! - [`AppState`] - 会话与加载状态容器

pub mod config;
pub mod state;

pub use config::Config;
pub use state::{AppState, LoadingGuard, LoadingTracker};
