//! 配置加载
//!
//! 配置文件为 TOML 格式，查找顺序：命令行指定路径、`config.toml`、
//! `./config/config.toml`，均不存在时使用默认配置。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::admin::model::AdminProfile;

/// 商店服务配置结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// HTTP 服务配置
    pub http: HttpConfig,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 商品数据源配置
    pub catalog: CatalogConfig,
    /// 管理员资料
    pub admin: AdminProfile,
}

/// HTTP 服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// 绑定地址
    pub bind_address: String,
    /// HTTP 服务端口
    pub port: u16,
    /// 请求超时时间（秒）
    pub timeout_seconds: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
}

/// 商品数据源类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// 内置商品列表
    Static,
    /// 本地 JSON 文件
    File,
    /// 远程 HTTP 接口
    Http,
    /// PostgreSQL 数据库
    Database,
}

/// 商品数据源配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub source: SourceKind,
    /// 请求的资源名称
    pub resource: String,
    /// `file` 数据源的目录
    pub data_dir: Option<PathBuf>,
    /// `http` 数据源的基础地址
    pub base_url: Option<String>,
    /// `database` 数据源的连接串
    pub database_url: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 3000,
            timeout_seconds: 10,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::Static,
            resource: "products".to_string(),
            data_dir: None,
            base_url: None,
            database_url: None,
        }
    }
}

impl ShopConfig {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// 监听地址，形如 `127.0.0.1:3000`
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.http.bind_address, self.http.port)
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Validation("HTTP端口必须大于0".to_string()));
        }
        if self.http.bind_address.is_empty() {
            return Err(ConfigError::Validation("绑定地址不能为空".to_string()));
        }
        if self.http.timeout_seconds == 0 {
            return Err(ConfigError::Validation("请求超时时间必须大于0".to_string()));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.logging.level, valid_levels
            )));
        }

        if self.catalog.resource.is_empty() {
            return Err(ConfigError::Validation("资源名称不能为空".to_string()));
        }
        match self.catalog.source {
            SourceKind::Static => {}
            SourceKind::File if self.catalog.data_dir.is_none() => {
                return Err(ConfigError::Validation(
                    "file 数据源需要配置 data_dir".to_string(),
                ));
            }
            SourceKind::Http if self.catalog.base_url.is_none() => {
                return Err(ConfigError::Validation(
                    "http 数据源需要配置 base_url".to_string(),
                ));
            }
            SourceKind::Database if self.catalog.database_url.is_none() => {
                return Err(ConfigError::Validation(
                    "database 数据源需要配置 database_url".to_string(),
                ));
            }
            _ => {}
        }

        Ok(())
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("配置验证错误: {0}")]
    Validation(String),
}

/// 按查找顺序确定配置文件路径，均不存在时返回 `None`
pub fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => ["config.toml", "./config/config.toml"]
            .into_iter()
            .map(PathBuf::from)
            .find(|path| path.exists()),
    }
}

/// 从文件或默认值加载配置，并完成校验
pub fn load_config(path: Option<&Path>) -> Result<ShopConfig, ConfigError> {
    let config = match path {
        Some(path) => ShopConfig::load_from_file(path)?,
        None => ShopConfig::default(),
    };

    config.validate()?;
    Ok(config)
}
