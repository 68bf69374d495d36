//! 商品列表页面渲染

use axum::response::Html;
use url::form_urlencoded;

use super::filter::{ProductFilter, SortDirection};
use super::model::{Product, ProductListing};
use crate::app::layout::{escape, page, NavItem};

const PROMO: &str =
    "Awaken your senses with every sip - Experience the perfect cup of coffee with us!";

/// 生成 `/products` 链接，保留未改变的参数
fn products_href(
    category: Option<&str>,
    show_all: bool,
    sort: Option<SortDirection>,
    search: Option<&str>,
) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    if show_all {
        query.append_pair("all", "true");
    } else if let Some(category) = category {
        query.append_pair("category", category);
    }
    if let Some(sort) = sort {
        query.append_pair("sort", sort.as_str());
    }
    if let Some(search) = search.filter(|s| !s.trim().is_empty()) {
        query.append_pair("q", search);
    }

    let query = query.finish();
    if query.is_empty() {
        "/products".to_string()
    } else {
        format!("/products?{query}")
    }
}

/// 价格以挪威克朗显示，整数价格不带小数
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{price:.0} kr")
    } else {
        format!("{price:.2} kr")
    }
}

pub fn category_sidebar(categories: &[String], filter: &ProductFilter) -> String {
    let search = filter.search.as_deref();
    let selected = if filter.show_all {
        None
    } else {
        filter.category.label()
    };

    let mut items = Vec::with_capacity(categories.len() + 1);
    let all_class = if selected.is_none() { r#" class="selected""# } else { "" };
    items.push(format!(
        r#"<li><a href="{}"{all_class}>All</a></li>"#,
        escape(&products_href(None, false, filter.sort, search))
    ));

    for category in categories {
        let class = if selected == Some(category.as_str()) {
            r#" class="selected""#
        } else {
            ""
        };
        items.push(format!(
            r#"<li><a href="{}"{class}>{}</a></li>"#,
            escape(&products_href(Some(category.as_str()), false, filter.sort, search)),
            escape(category)
        ));
    }

    format!(
        r#"<aside><h3>Categories</h3><ul class="category-list">{}</ul></aside>"#,
        items.concat()
    )
}

pub fn sort_menu(filter: &ProductFilter) -> String {
    let category = if filter.show_all {
        None
    } else {
        filter.category.label()
    };
    let search = filter.search.as_deref();

    let options: String = [SortDirection::Ascending, SortDirection::Descending]
        .iter()
        .map(|direction| {
            let class = if filter.sort == Some(*direction) {
                r#" class="selected""#
            } else {
                ""
            };
            format!(
                r#"<a href="{}"{class}>{}</a>"#,
                escape(&products_href(category, filter.show_all, Some(*direction), search)),
                direction.label()
            )
        })
        .collect();

    format!(r#"<div class="sort-menu" role="menu"><span>Sort</span> {options}</div>"#)
}

pub fn search_bar(filter: &ProductFilter) -> String {
    let mut hidden = String::new();
    if filter.show_all {
        hidden.push_str(r#"<input type="hidden" name="all" value="true">"#);
    } else if let Some(label) = filter.category.label() {
        hidden.push_str(&format!(
            r#"<input type="hidden" name="category" value="{}">"#,
            escape(label)
        ));
    }
    if let Some(sort) = filter.sort {
        hidden.push_str(&format!(
            r#"<input type="hidden" name="sort" value="{}">"#,
            sort.as_str()
        ));
    }

    format!(
        r#"<form class="search-bar" method="get" action="/products">{hidden}<input type="search" name="q" placeholder="Search…" value="{}"><button type="submit">Search</button></form>"#,
        escape(filter.search.as_deref().unwrap_or(""))
    )
}

pub fn product_card(product: &Product) -> String {
    let sale = if product.sale {
        r#"<span class="sale-badge">Sale</span>"#
    } else {
        ""
    };

    format!(
        r#"<article class="product-card" data-id="{id}"><img src="{src}" alt="{alt}"><h4>{name}</h4>{sale}<p class="price">{price}</p></article>"#,
        id = product.id,
        src = escape(&product.image_path),
        alt = escape(product.alt_text()),
        name = escape(&product.product_name),
        price = format_price(product.price),
    )
}

pub fn products_page(listing: &ProductListing, filter: &ProductFilter) -> Html<String> {
    let grid = if listing.products.is_empty() {
        r#"<p class="empty">No products to show.</p>"#.to_string()
    } else {
        let cards: String = listing.products.iter().map(product_card).collect();
        format!(r#"<div class="product-grid">{cards}</div>"#)
    };

    let body = format!(
        r#"<div class="products">{sidebar}<section class="listing"><div class="promo">{PROMO}</div><div class="toolbar">{sort}{search}</div>{grid}</section></div>"#,
        sidebar = category_sidebar(&listing.categories, filter),
        sort = sort_menu(filter),
        search = search_bar(filter),
    );

    page("Products", NavItem::Products, &body)
}
