use shared::error::{AppError, AppResult};
use shared::i18n::Locale;

const DEFAULT_ENVIRONMENT: &str = "development";
const DEFAULT_TABLE_CAPACITY: u32 = 10;
const DEFAULT_LOG_LEVEL: &str = "info";

/// 引擎配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | ENVIRONMENT | development | 运行环境 |
/// | LOCALE | pt-BR | 提示信息语言 |
/// | DEFAULT_TABLE_CAPACITY | 10 | 建议加桌时的默认桌位数 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (未设置) | 日志目录，未设置则只输出到终端 |
///
/// 未设置或无法解析的值使用上表默认值
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 所有提示信息使用的语言
    pub locale: Locale,
    /// `suggest_additional_tables` 假定的每桌座位数
    pub default_table_capacity: u32,
    /// 日志级别
    pub log_level: String,
    /// 日志目录
    pub log_dir: Option<String>,
}

impl EngineConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值查找函数构建配置
    ///
    /// 测试中传入 map，避免修改进程环境变量
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| DEFAULT_ENVIRONMENT.into()),
            locale: lookup("LOCALE")
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            default_table_capacity: lookup("DEFAULT_TABLE_CAPACITY")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_TABLE_CAPACITY),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.into()),
            log_dir: lookup("LOG_DIR").filter(|dir| !dir.trim().is_empty()),
        }
    }

    /// 加载 `.env` (如存在)，读取环境变量并校验
    ///
    /// # Errors
    ///
    /// 配置值不可用时返回 `ConfigError`
    pub fn load() -> AppResult<Self> {
        if let Err(e) = dotenvy::dotenv()
            && !e.not_found()
        {
            tracing::warn!(error = %e, "Failed to read .env file");
        }

        let config = Self::from_env();
        config.validate()?;
        Ok(config)
    }

    /// 校验配置
    ///
    /// # Errors
    ///
    /// `default_table_capacity` 为 0 时返回 `ConfigError`
    pub fn validate(&self) -> AppResult<()> {
        if self.default_table_capacity == 0 {
            return Err(AppError::config("DEFAULT_TABLE_CAPACITY must be at least 1")
                .with_detail("default_table_capacity", self.default_table_capacity));
        }
        Ok(())
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            environment: DEFAULT_ENVIRONMENT.into(),
            locale: Locale::default(),
            default_table_capacity: DEFAULT_TABLE_CAPACITY,
            log_level: DEFAULT_LOG_LEVEL.into(),
            log_dir: None,
        }
    }
}
