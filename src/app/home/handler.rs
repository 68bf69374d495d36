//! 首页处理器

use axum::{extract::State, response::Html};

use super::view;
use crate::app::AppState;

pub async fn home_page(State(state): State<AppState>) -> Html<String> {
    view::banner_page(&state.banner)
}
