//! 数据库基础设施

use async_trait::async_trait;
use sqlx::{
    postgres::{PgPool, PgPoolOptions, PgRow},
    Error, Row,
};
use std::time::Duration;

use crate::app::catalog::model::Product;
use crate::app::catalog::source::{validate_resource, ProductSource, SourceError};

pub struct DatabaseManager {
    pool: PgPool,
}

impl DatabaseManager {
    /// 连接池延迟建立连接，服务启动不依赖数据库可用
    pub fn connect_lazy(database_url: &str) -> Result<Self, Error> {
        let pool = PgPoolOptions::new()
            .max_connections(20)
            .min_connections(0)
            .acquire_timeout(Duration::from_secs(8))
            .idle_timeout(Duration::from_secs(60))
            .connect_lazy(database_url)?;

        Ok(Self { pool })
    }

    pub fn get_pool(&self) -> &PgPool {
        &self.pool
    }
}

/// 从 PostgreSQL 表读取商品，表名即资源名称
pub struct PgProductSource {
    pool: PgPool,
}

impl PgProductSource {
    pub fn new(manager: &DatabaseManager) -> Self {
        Self {
            pool: manager.get_pool().clone(),
        }
    }
}

fn product_from_row(row: &PgRow) -> Result<Product, Error> {
    Ok(Product {
        id: row.try_get("id")?,
        product_name: row.try_get("name")?,
        category: row.try_get("category")?,
        price: row.try_get("price")?,
        sale: row.try_get("sale")?,
        image_path: row
            .try_get::<Option<String>, _>("image_path")?
            .unwrap_or_default(),
        image_alt: row.try_get("image_alt")?,
    })
}

#[async_trait]
impl ProductSource for PgProductSource {
    fn kind(&self) -> &'static str {
        "database"
    }

    async fn fetch(&self, resource: &str) -> Result<Vec<Product>, SourceError> {
        validate_resource(resource)?;

        // 资源名已校验为标识符，可安全拼接为表名
        let sql = format!(
            "SELECT id, name, category, price, sale, image_path, image_alt FROM \"{}\" ORDER BY id",
            resource
        );
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| SourceError::Database(e.to_string()))?;

        rows.iter()
            .map(|row| product_from_row(row).map_err(|e| SourceError::Database(e.to_string())))
            .collect()
    }
}
