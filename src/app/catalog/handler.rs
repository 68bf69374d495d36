//! 商品目录处理器

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{Html, Json},
};
use serde::{de, Deserialize, Deserializer};
use validator::Validate;

use super::filter::{CategoryFilter, ProductFilter, SortDirection};
use super::model::ProductListing;
use super::service::CatalogService;
use super::view;
use crate::app::AppState;
use crate::core::{error::CoreError, response::ApiResponse};

/// 商品列表查询参数
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ProductQuery {
    #[validate(length(max = 64))]
    pub category: Option<String>,
    pub sort: Option<String>,
    #[validate(length(max = 100))]
    pub q: Option<String>,
    #[serde(default, deserialize_with = "flag")]
    pub all: bool,
}

/// 开关参数：`true`/`1`/`on`/`yes` 与空值表示开启，`false`/`0`/`off`/`no` 表示关闭
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "true" | "1" | "on" | "yes" => Ok(true),
        "false" | "0" | "off" | "no" => Ok(false),
        other => Err(de::Error::custom(format!("无法识别的开关值: {other}"))),
    }
}

impl ProductQuery {
    pub fn into_filter(self) -> Result<ProductFilter, CoreError> {
        self.validate()?;

        Ok(ProductFilter {
            category: CategoryFilter::from_label(self.category.as_deref()),
            search: self.q,
            show_all: self.all,
            sort: self.sort.as_deref().and_then(SortDirection::parse),
        })
    }
}

pub async fn products_page(
    State(state): State<AppState>,
    query: Result<Query<ProductQuery>, QueryRejection>,
) -> Result<Html<String>, CoreError> {
    let Query(query) = query?;
    let filter = query.into_filter()?;
    let listing = state.catalog.listing(&filter).await;
    Ok(view::products_page(&listing, &filter))
}

pub async fn list_products(
    State(state): State<AppState>,
    query: Result<Query<ProductQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<ProductListing>>, CoreError> {
    let Query(query) = query?;
    let filter = query.into_filter()?;
    let listing = state.catalog.listing(&filter).await;
    Ok(Json(ApiResponse::success(listing)))
}

pub async fn list_categories(State(state): State<AppState>) -> Json<ApiResponse<Vec<String>>> {
    let products = state.catalog.load().await;
    Json(ApiResponse::success(CatalogService::categories(&products)))
}
