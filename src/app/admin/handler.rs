//! 管理员处理器

use axum::{
    extract::State,
    response::{Html, Json},
};

use super::{model::AdminProfile, view};
use crate::app::AppState;
use crate::core::response::ApiResponse;

pub async fn dashboard_page(State(state): State<AppState>) -> Html<String> {
    view::dashboard_page(&state.admin.dashboard())
}

pub async fn get_profile(State(state): State<AppState>) -> Json<ApiResponse<AdminProfile>> {
    Json(ApiResponse::success(state.admin.profile().clone()))
}
