//! 页面外壳：导航栏、基础样式与 HTML 转义

use axum::response::Html;

const STYLE: &str = r#"
    body { font-family: Arial, sans-serif; margin: 0; background: #f5f1ec; color: #3b2a1e; }
    nav { display: flex; gap: 24px; padding: 16px 32px; background: #3b2a1e; }
    nav a { color: #f5f1ec; text-decoration: none; font-weight: bold; }
    nav a.active { text-decoration: underline; }
    main { padding: 32px; }
    .products { display: flex; gap: 32px; }
    .category-list { list-style: none; padding: 0; min-width: 160px; }
    .category-list a.selected { font-weight: bold; }
    .promo { background: #3b2a1e; color: #f5f1ec; padding: 10px; border-radius: 8px; text-align: center; margin-bottom: 8px; }
    .toolbar { display: flex; gap: 16px; margin-bottom: 32px; align-items: center; }
    .product-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 20px; }
    .product-card { background: white; border-radius: 10px; padding: 16px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
    .product-card img { width: 100%; }
    .card { max-width: 640px; margin: 0 auto; background: white; border-radius: 10px; padding: 24px; }
    .actions { display: flex; justify-content: flex-end; gap: 8px; }
    .button { background: #3b2a1e; color: white; padding: 8px 16px; border-radius: 6px; text-decoration: none; }
    .banner { min-height: 80vh; display: flex; align-items: center; padding: 0 64px; background-size: cover; background-position: center; }
    .banner .paper { background: #efe3d3; padding: 56px; max-width: 400px; }
"#;

/// 导航栏中高亮的页面
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    Products,
    Admin,
}

const NAV: [(NavItem, &str, &str); 3] = [
    (NavItem::Home, "/", "Home"),
    (NavItem::Products, "/products", "Products"),
    (NavItem::Admin, "/admin", "Admin"),
];

/// 转义文本，用于元素内容与属性值
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn page(title: &str, active: NavItem, body: &str) -> Html<String> {
    let nav: String = NAV
        .iter()
        .map(|(item, href, label)| {
            let class = if *item == active { r#" class="active""# } else { "" };
            format!(r#"<a href="{href}"{class}>{label}</a>"#)
        })
        .collect();

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <style>{STYLE}</style>
</head>
<body>
    <nav>{nav}</nav>
    <main>{body}</main>
</body>
</html>"#,
        title = escape(title),
    ))
}
