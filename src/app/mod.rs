//! 应用层：首页横幅、商品目录与管理员面板

pub mod admin;
pub mod catalog;
pub mod home;
pub mod layout;

use axum::{extract::State, http::Uri, response::Json};

use self::{admin::service::AdminService, catalog::service::CatalogService, home::model::Banner};
use crate::core::error::CoreError;

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
    pub admin: AdminService,
    pub banner: Banner,
}

/// 健康检查
pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "catalog": {
            "source": state.catalog.source_kind(),
            "resource": state.catalog.resource(),
        }
    }))
}

pub async fn not_found(uri: Uri) -> CoreError {
    CoreError::NotFound(format!("页面 {} 不存在", uri.path()))
}
