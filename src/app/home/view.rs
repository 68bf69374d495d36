//! 首页横幅渲染

use axum::response::Html;

use super::model::Banner;
use crate::app::layout::{page, NavItem};

pub fn banner_page(banner: &Banner) -> Html<String> {
    let body = format!(
        r#"<div class="banner" style="background-image: url('{background}')"><div class="paper"><h1>{headline}</h1><p>{tagline}</p><a class="button" href="{href}">{label}</a></div></div>"#,
        background = banner.background,
        headline = banner.headline,
        tagline = banner.tagline,
        href = banner.cta_href,
        label = banner.cta_label,
    );

    page("Monoca", NavItem::Home, &body)
}
