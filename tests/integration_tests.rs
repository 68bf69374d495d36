use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use monoca_shop::app::catalog::model::{seed_products, Product};
use monoca_shop::app::catalog::source::{ProductSource, SourceError, StaticSource};
use monoca_shop::infrastructure::config::{ShopConfig, SourceKind};
use std::{sync::Arc, time::Duration};
use tower::ServiceExt;

struct UnreachableSource;

#[async_trait]
impl ProductSource for UnreachableSource {
    fn kind(&self) -> &'static str {
        "unreachable"
    }

    async fn fetch(&self, _resource: &str) -> Result<Vec<Product>, SourceError> {
        Err(SourceError::Http("connection refused".to_string()))
    }
}

fn app_with(source: Arc<dyn ProductSource>) -> Router {
    let config = ShopConfig::default();
    let state = monoca_shop::build_state(&config, source);
    monoca_shop::build_router(state, Duration::from_secs(5))
}

fn app() -> Router {
    app_with(Arc::new(StaticSource::default()))
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}

fn prices(body: &serde_json::Value) -> Vec<f64> {
    body["data"]["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["price"].as_f64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_home_page_renders_banner() {
    let (status, html) = get(app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("3 for 2"));
    assert!(html.contains("Mix and match or find exactly what you want"));
    assert!(html.contains(r#"href="/products""#));
}

#[tokio::test]
async fn test_products_page_lists_all_cards() {
    let (status, html) = get(app(), "/products").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(html.matches(r#"class="product-card""#).count(), 10);
    assert!(html.contains("Awaken your senses with every sip"));
    for category in ["Coffee", "Tea", "Food", "Pastries", "Sale"] {
        assert!(html.contains(&format!(">{category}</a>")));
    }
}

#[tokio::test]
async fn test_products_page_category_and_sort() {
    let (status, html) = get(app(), "/products?category=Coffee&sort=desc").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(html.matches(r#"class="product-card""#).count(), 3);

    let first = html.find("100 kr").unwrap();
    let second = html.find("67 kr").unwrap();
    let third = html.find("40 kr").unwrap();
    assert!(first < second && second < third);
}

#[tokio::test]
async fn test_products_page_empty_state() {
    let (status, html) = get(app(), "/products?category=Juice").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("No products to show."));
    assert!(!html.contains(r#"class="product-card""#));
}

#[tokio::test]
async fn test_api_sale_filter_ascending() {
    let (status, body) = get_json(app(), "/api/products?category=Sale&sort=asc").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(prices(&body), vec![90.0, 99.0, 100.0, 110.0]);
    assert!(body["data"]["products"]
        .as_array()
        .unwrap()
        .iter()
        .all(|p| p["sale"] == true));
    assert_eq!(body["data"]["total"], 10);
}

#[tokio::test]
async fn test_api_show_all_ignores_category() {
    let (_, body) = get_json(app(), "/api/products?category=Tea&all=true").await;
    assert_eq!(prices(&body).len(), 10);
}

#[tokio::test]
async fn test_products_page_show_all_keeps_flag_in_links() {
    let (status, html) = get(app(), "/products?category=Tea&all=true").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(html.matches(r#"class="product-card""#).count(), 10);
    assert!(html.contains(r#"href="/products?all=true&amp;sort=asc""#));
    assert!(html.contains(r#"<input type="hidden" name="all" value="true">"#));
}

#[tokio::test]
async fn test_show_all_accepts_form_style_flags() {
    let (status, body) = get_json(app(), "/api/products?category=Tea&all=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(prices(&body).len(), 10);

    let (status, html) = get(app(), "/products?category=Tea&all=on").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(html.matches(r#"class="product-card""#).count(), 10);
}

#[tokio::test]
async fn test_unrecognised_flag_is_json_bad_request() {
    let (status, body) = get_json(app(), "/api/products?all=maybe").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BAD_REQUEST");
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn test_api_listing_uses_camel_case_keys() {
    let (_, body) = get_json(app(), "/api/products?category=Coffee").await;
    assert_eq!(body["data"]["selectedCategory"], "Coffee");
    assert!(body["data"].get("selected_category").is_none());
}

#[tokio::test]
async fn test_api_search() {
    let (_, body) = get_json(app(), "/api/products?q=pastr").await;
    let products = body["data"]["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["productName"], "Pastries");
}

#[tokio::test]
async fn test_api_rejects_overlong_search() {
    let uri = format!("/api/products?q={}", "a".repeat(150));
    let (status, body) = get_json(app(), &uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BAD_REQUEST");
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn test_api_stable_sort_with_custom_source() {
    let mut products = seed_products();
    products.truncate(3);
    products[0].price = 40.0;
    let source = Arc::new(StaticSource::new(products));

    let (_, body) = get_json(app_with(source), "/api/products?sort=asc").await;
    let ids: Vec<i64> = body["data"]["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3, 2]);
}

#[tokio::test]
async fn test_failing_source_renders_empty_listing() {
    let app = app_with(Arc::new(UnreachableSource));

    let (status, html) = get(app.clone(), "/products").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("No products to show."));

    let (status, body) = get_json(app, "/api/products").await;
    assert_eq!(status, StatusCode::OK);
    assert!(prices(&body).is_empty());
}

#[tokio::test]
async fn test_categories_endpoint() {
    let (status, body) = get_json(app(), "/api/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        serde_json::json!(["Coffee", "Tea", "Food", "Pastries", "Sale"])
    );
}

#[tokio::test]
async fn test_admin_dashboard() {
    let (status, html) = get(app(), "/admin").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("My Monoca"));
    assert!(html.contains("User id: 125, admin"));
    assert!(html.contains("Simon Doe"));
    assert!(html.contains("Chicken Road 13, 7080 Farm County"));
    for href in [
        "/admin/edit",
        "/admin/changepw",
        "/admin/vieworders",
        "/admin/testimonials",
        "/admin/products",
    ] {
        assert!(html.contains(&format!(r#"href="{href}""#)), "missing {href}");
    }
}

#[tokio::test]
async fn test_admin_profile_api() {
    let (status, body) = get_json(app(), "/api/admin/profile").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["email"], "simondoe@example.com");
    assert_eq!(body["data"]["user_id"], 125);
}

#[tokio::test]
async fn test_health_and_not_found() {
    let (status, body) = get_json(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["catalog"]["source"], "static");

    let (status, body) = get_json(app(), "/admin/edit").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_build_source_from_file_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("menu.json"),
        r#"[{"id": 7, "productName": "Latte", "type": "Coffee", "price": 45}]"#,
    )
    .unwrap();

    let mut config = ShopConfig::default();
    config.catalog.source = SourceKind::File;
    config.catalog.data_dir = Some(dir.path().to_path_buf());
    config.catalog.resource = "menu".to_string();

    let source = monoca_shop::build_source(&config).unwrap();
    let state = monoca_shop::build_state(&config, source);
    let app = monoca_shop::build_router(state, Duration::from_secs(5));

    let (_, body) = get_json(app, "/api/products").await;
    assert_eq!(body["data"]["products"][0]["productName"], "Latte");
}
