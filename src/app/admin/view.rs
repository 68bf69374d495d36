//! 管理员面板渲染

use axum::response::Html;

use super::model::{AdminLink, Dashboard};
use crate::app::layout::{escape, page, NavItem};

fn actions(links: &[AdminLink]) -> String {
    let buttons: String = links
        .iter()
        .map(|link| format!(r#"<a class="button" href="{}">{}</a>"#, link.href, link.label))
        .collect();
    format!(r#"<div class="actions">{buttons}</div>"#)
}

pub fn dashboard_page(dashboard: &Dashboard) -> Html<String> {
    let profile = &dashboard.profile;

    let fields: String = profile
        .fields()
        .iter()
        .map(|(label, value)| {
            format!(
                r#"<li><strong>{label}</strong><span>{}</span></li>"#,
                escape(value)
            )
        })
        .collect();

    let sections: String = dashboard
        .sections
        .iter()
        .map(|section| {
            format!(
                r#"<hr><section><h2>{}</h2><p>{}</p>{}</section>"#,
                section.title,
                section.description,
                actions(&section.links)
            )
        })
        .collect();

    let body = format!(
        r#"<div class="card"><header><h1>{shop}</h1><p class="subheader">User id: {id}, {role}</p></header><hr><section><h2>Profile Information</h2><ul class="profile">{fields}</ul>{profile_actions}</section>{sections}</div>"#,
        shop = escape(&profile.shop_name),
        id = profile.user_id,
        role = escape(&profile.role),
        profile_actions = actions(&dashboard.profile_links),
    );

    page("Admin", NavItem::Admin, &body)
}
