//! 配置管理模块
//! 支持从环境变量和配置文件加载配置

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// TonAPI 公共端点（基础用法无需 API key）
pub const DEFAULT_TONAPI_BASE_URL: &str = "https://tonapi.io/v2";

/// 区块浏览器
pub const DEFAULT_EXPLORER_BASE_URL: &str = "https://tonviewer.com";

/// 应用配置结构体
///
/// 各段落及段内字段缺失时都回落到对应 `Default`（读取环境变量）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub tonapi: TonApiConfig,
    #[serde(default)]
    pub explorer: ExplorerConfig,
    #[serde(default)]
    pub balance: BalanceConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
    /// 逗号分隔的跨域白名单，"*" 表示任意来源
    pub cors_allow_origins: String,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String, // "json" or "text"
    pub enable_file_logging: bool,
    pub log_file_path: Option<String>,
}

/// 上游 TonAPI 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TonApiConfig {
    pub base_url: String,
    /// 请求总超时（秒），未设置则不超时
    pub timeout_secs: Option<u64>,
    pub connect_timeout_secs: Option<u64>,
}

/// 区块浏览器链接配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub base_url: String,
}

/// 余额格式化策略
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceConfig {
    /// true：非数字余额报错；false：按 0 TON 显示
    pub strict_format: bool,
}

fn env_flag(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(default)
}

fn env_secs(key: &str) -> Option<u64> {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .filter(|&v: &u64| v > 0)
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8088".into()),
            cors_allow_origins: std::env::var("CORS_ALLOW_ORIGINS").unwrap_or_else(|_| "*".into()),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            format: std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".into()),
            enable_file_logging: env_flag("LOG_FILE_ENABLED", false),
            log_file_path: std::env::var("LOG_FILE_PATH").ok(),
        }
    }
}

impl Default for TonApiConfig {
    fn default() -> Self {
        Self {
            base_url: std::env::var("TONAPI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_TONAPI_BASE_URL.into()),
            timeout_secs: env_secs("TONAPI_TIMEOUT_SECS"),
            connect_timeout_secs: env_secs("TONAPI_CONNECT_TIMEOUT_SECS"),
        }
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            base_url: std::env::var("EXPLORER_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_EXPLORER_BASE_URL.into()),
        }
    }
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            strict_format: env_flag("BALANCE_STRICT_FORMAT", true),
        }
    }
}

impl Config {
    /// 从环境变量加载配置
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            tonapi: TonApiConfig::default(),
            explorer: ExplorerConfig::default(),
            balance: BalanceConfig::default(),
        })
    }

    /// 从配置文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: Config =
            toml::from_str(&content).with_context(|| "Failed to parse config file as TOML")?;

        Ok(config)
    }

    /// 从环境变量和配置文件合并加载（配置文件优先级更高，文件中缺失的段落或字段回落到环境变量）
    pub fn from_env_and_file<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let mut config = Self::from_env()?;

        if let Some(path) = path {
            if path.as_ref().exists() {
                config = Self::from_file(path)?;
            }
        }

        Ok(config)
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<()> {
        for (name, url) in [
            ("TONAPI_BASE_URL", &self.tonapi.base_url),
            ("EXPLORER_BASE_URL", &self.explorer.base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("{} must start with http:// or https://", name);
            }
        }

        if self.server.bind_addr.trim().is_empty() {
            anyhow::bail!("BIND_ADDR must not be empty");
        }

        // 验证日志级别
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            anyhow::bail!("LOG_LEVEL must be one of: {:?}", valid_levels);
        }

        // 验证日志格式
        if self.logging.format != "json" && self.logging.format != "text" {
            anyhow::bail!("LOG_FORMAT must be 'json' or 'text'");
        }

        Ok(())
    }
}
