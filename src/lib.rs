//! # Monoca 网店前台
//!
//! 服务端渲染的网店展示层：
//! - 首页促销横幅
//! - 商品列表：分类导航、促销筛选、搜索、按价格排序
//! - 管理员资料面板
//! - 对应的 JSON 接口与健康检查

pub mod app;
pub mod core;
pub mod infrastructure;

use axum::{middleware, routing::get, Router};
use std::{sync::Arc, time::Duration};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use app::{
    admin::{self, service::AdminService},
    catalog::{
        self,
        service::CatalogService,
        source::{JsonFileSource, ProductSource, SourceError, StaticSource},
    },
    home::{self, model::Banner},
    AppState,
};
use infrastructure::{
    config::{ShopConfig, SourceKind},
    remote::HttpSource,
};

/// 按配置创建商品数据源
pub fn build_source(config: &ShopConfig) -> Result<Arc<dyn ProductSource>, SourceError> {
    let catalog = &config.catalog;
    let missing = |field: &str| SourceError::Config(format!("缺少配置项 catalog.{field}"));

    let source: Arc<dyn ProductSource> = match catalog.source {
        SourceKind::Static => Arc::new(StaticSource::default()),
        SourceKind::File => {
            let dir = catalog.data_dir.clone().ok_or_else(|| missing("data_dir"))?;
            Arc::new(JsonFileSource::new(dir))
        }
        SourceKind::Http => {
            let base_url = catalog.base_url.clone().ok_or_else(|| missing("base_url"))?;
            Arc::new(HttpSource::new(
                base_url,
                Duration::from_secs(config.http.timeout_seconds),
            )?)
        }
        #[cfg(feature = "database")]
        SourceKind::Database => {
            use crate::infrastructure::database::{DatabaseManager, PgProductSource};

            let url = catalog
                .database_url
                .as_deref()
                .ok_or_else(|| missing("database_url"))?;
            let manager =
                DatabaseManager::connect_lazy(url).map_err(|e| SourceError::Database(e.to_string()))?;
            Arc::new(PgProductSource::new(&manager))
        }
        #[cfg(not(feature = "database"))]
        SourceKind::Database => {
            return Err(SourceError::Database(
                "未启用 database 特性，无法使用数据库数据源".to_string(),
            ));
        }
    };

    tracing::info!(
        "商品数据源: {}，资源: {}",
        source.kind(),
        catalog.resource
    );
    Ok(source)
}

pub fn build_state(config: &ShopConfig, source: Arc<dyn ProductSource>) -> AppState {
    AppState {
        catalog: CatalogService::new(source, config.catalog.resource.clone()),
        admin: AdminService::new(config.admin.clone()),
        banner: Banner::default(),
    }
}

/// 创建路由
pub fn build_router(state: AppState, timeout: Duration) -> Router {
    Router::new()
        .route("/", get(home::handler::home_page))
        .route("/products", get(catalog::handler::products_page))
        .route("/admin", get(admin::handler::dashboard_page))
        .route("/api/products", get(catalog::handler::list_products))
        .route("/api/categories", get(catalog::handler::list_categories))
        .route("/api/admin/profile", get(admin::handler::get_profile))
        .route("/health", get(app::health_check))
        .fallback(app::not_found)
        .layer(middleware::from_fn(
            crate::core::middleware::request_logging_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TimeoutLayer::new(timeout))
        .with_state(state)
}
