//! 商品数据源
//!
//! 数据源按资源名称返回商品数组；加载失败由调用方决定如何降级。

use async_trait::async_trait;
use std::path::PathBuf;

use super::model::{seed_products, Product};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("无效的资源名称: {0}")]
    InvalidResource(String),
    #[error("读取商品数据失败: {0}")]
    Io(String),
    #[error("解析商品数据失败: {0}")]
    Decode(String),
    #[error("请求远程商品数据失败: {0}")]
    Http(String),
    #[error("查询数据库失败: {0}")]
    Database(String),
    #[error("数据源配置错误: {0}")]
    Config(String),
}

/// 资源名称只允许字母、数字、下划线和连字符
pub fn validate_resource(resource: &str) -> Result<(), SourceError> {
    let valid = !resource.is_empty()
        && resource
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(SourceError::InvalidResource(resource.to_string()))
    }
}

#[async_trait]
pub trait ProductSource: Send + Sync {
    /// 数据源类型名称，用于日志与健康检查
    fn kind(&self) -> &'static str;

    async fn fetch(&self, resource: &str) -> Result<Vec<Product>, SourceError>;
}

/// 内置商品列表，忽略资源名称
pub struct StaticSource {
    products: Vec<Product>,
}

impl StaticSource {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl Default for StaticSource {
    fn default() -> Self {
        Self::new(seed_products())
    }
}

#[async_trait]
impl ProductSource for StaticSource {
    fn kind(&self) -> &'static str {
        "static"
    }

    async fn fetch(&self, resource: &str) -> Result<Vec<Product>, SourceError> {
        validate_resource(resource)?;
        Ok(self.products.clone())
    }
}

/// 读取 `<data_dir>/<resource>.json`
pub struct JsonFileSource {
    data_dir: PathBuf,
}

impl JsonFileSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

#[async_trait]
impl ProductSource for JsonFileSource {
    fn kind(&self) -> &'static str {
        "file"
    }

    async fn fetch(&self, resource: &str) -> Result<Vec<Product>, SourceError> {
        validate_resource(resource)?;

        let path = self.data_dir.join(format!("{resource}.json"));
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| SourceError::Io(format!("{}: {}", path.display(), e)))?;

        serde_json::from_str(&content).map_err(|e| SourceError::Decode(e.to_string()))
    }
}
