use std::path::{Path, PathBuf};

use crate::billing::{BillingPolicy, DEFAULT_TAX_PERCENT, TaxBase};

/// 前台配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | FRONT_DESK_WORK_DIR | . | 工作目录 (相对路径以此为基准) |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (无) | 日志目录，设置后按天滚动写文件 |
/// | TAX_PERCENT | 18 | 税率 (税务主数据为空时使用) |
/// | TAX_BASE | room_and_extra | 计税基数: room_and_extra / room |
/// | ENVIRONMENT | development | 运行环境 (production 输出 JSON 日志) |
///
/// # 示例
///
/// ```ignore
/// TAX_PERCENT=12 TAX_BASE=room front-desk bill booking.json
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录
    pub work_dir: String,
    /// 日志级别
    pub log_level: String,
    /// 日志目录
    pub log_dir: Option<String>,
    /// 税率 (百分比)
    pub tax_percent: f64,
    /// 计税基数
    pub tax_base: TaxBase,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 未设置或无法解析的值使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("FRONT_DESK_WORK_DIR").unwrap_or_else(|_| ".".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.trim().is_empty()),
            tax_percent: std::env::var("TAX_PERCENT")
                .ok()
                .and_then(|p| p.trim().parse::<f64>().ok())
                .filter(|p| p.is_finite() && *p >= 0.0)
                .unwrap_or(DEFAULT_TAX_PERCENT),
            tax_base: std::env::var("TAX_BASE")
                .ok()
                .and_then(|b| match b.parse() {
                    Ok(base) => Some(base),
                    Err(e) => {
                        tracing::warn!("Ignoring TAX_BASE: {}", e);
                        None
                    }
                })
                .unwrap_or_default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, tax_percent: f64, tax_base: TaxBase) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.tax_percent = tax_percent;
        config.tax_base = tax_base;
        config
    }

    /// 计费策略
    pub fn billing_policy(&self) -> BillingPolicy {
        BillingPolicy::new(self.tax_percent, self.tax_base)
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 相对路径按工作目录解析，绝对路径原样返回
    pub fn resolve_path(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            Path::new(&self.work_dir).join(path)
        }
    }

    /// 日志目录 (已按工作目录解析)
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_dir.as_deref().map(|dir| self.resolve_path(dir))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
