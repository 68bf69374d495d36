//! 远程 HTTP 商品数据源

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use crate::app::catalog::model::Product;
use crate::app::catalog::source::{validate_resource, ProductSource, SourceError};

/// 通过 `GET {base_url}/api/{resource}` 获取商品数组
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Http(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn resource_url(&self, resource: &str) -> String {
        format!("{}/api/{}", self.base_url, resource)
    }
}

#[async_trait]
impl ProductSource for HttpSource {
    fn kind(&self) -> &'static str {
        "http"
    }

    async fn fetch(&self, resource: &str) -> Result<Vec<Product>, SourceError> {
        validate_resource(resource)?;

        let url = self.resource_url(resource);
        debug!("请求远程商品数据: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| SourceError::Http(e.to_string()))?;

        response
            .json::<Vec<Product>>()
            .await
            .map_err(|e| SourceError::Decode(e.to_string()))
    }
}
