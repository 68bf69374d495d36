//! 商品目录业务服务

use std::sync::Arc;
use tracing::{debug, warn};

use super::filter::{self, ProductFilter};
use super::model::{Product, ProductListing, SALE_CATEGORY};
use super::source::ProductSource;

#[derive(Clone)]
pub struct CatalogService {
    source: Arc<dyn ProductSource>,
    resource: String,
}

impl CatalogService {
    pub fn new(source: Arc<dyn ProductSource>, resource: impl Into<String>) -> Self {
        Self {
            source,
            resource: resource.into(),
        }
    }

    pub fn source_kind(&self) -> &'static str {
        self.source.kind()
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// 加载商品列表，数据源出错时返回空列表
    pub async fn load(&self) -> Vec<Product> {
        match self.source.fetch(&self.resource).await {
            Ok(products) => {
                debug!(
                    "从 {} 数据源加载 {} 个商品",
                    self.source.kind(),
                    products.len()
                );
                products
            }
            Err(e) => {
                warn!("商品加载失败，显示空列表: {}", e);
                Vec::new()
            }
        }
    }

    /// 分类按首次出现的顺序去重，末尾追加促销分类
    pub fn categories(products: &[Product]) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for product in products {
            if product.category != SALE_CATEGORY
                && !categories.iter().any(|c| *c == product.category)
            {
                categories.push(product.category.clone());
            }
        }
        categories.push(SALE_CATEGORY.to_string());
        categories
    }

    pub async fn listing(&self, filter: &ProductFilter) -> ProductListing {
        let products = self.load().await;
        let view = filter::apply(&products, filter);

        ProductListing {
            total: products.len(),
            categories: Self::categories(&products),
            products: view,
            selected_category: filter.category.label().map(str::to_string),
            sort: filter.sort.map(|d| d.as_str().to_string()),
            search: filter.search.clone().filter(|s| !s.trim().is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::catalog::filter::{CategoryFilter, SortDirection};
    use crate::app::catalog::source::{SourceError, StaticSource};
    use async_trait::async_trait;

    struct FailingSource;

    #[async_trait]
    impl ProductSource for FailingSource {
        fn kind(&self) -> &'static str {
            "failing"
        }

        async fn fetch(&self, _resource: &str) -> Result<Vec<Product>, SourceError> {
            Err(SourceError::Http("connection refused".to_string()))
        }
    }

    #[test]
    fn test_categories_first_seen_order() {
        let categories = CatalogService::categories(&crate::app::catalog::model::seed_products());
        assert_eq!(categories, vec!["Coffee", "Tea", "Food", "Pastries", "Sale"]);
    }

    #[test]
    fn test_categories_list_sale_once() {
        let mut products = crate::app::catalog::model::seed_products();
        let mut extra = products[0].clone();
        extra.id = 11;
        extra.category = SALE_CATEGORY.to_string();
        products.insert(0, extra);

        let categories = CatalogService::categories(&products);
        assert_eq!(categories, vec!["Coffee", "Tea", "Food", "Pastries", "Sale"]);
    }

    #[tokio::test]
    async fn test_listing_filters_and_sorts() {
        let service = CatalogService::new(Arc::new(StaticSource::default()), "products");
        let filter = ProductFilter {
            category: CategoryFilter::Sale,
            sort: Some(SortDirection::Ascending),
            ..Default::default()
        };

        let listing = service.listing(&filter).await;
        assert_eq!(listing.total, 10);
        let prices: Vec<f64> = listing.products.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![90.0, 99.0, 100.0, 110.0]);
        assert_eq!(listing.selected_category.as_deref(), Some("Sale"));
        assert_eq!(listing.sort.as_deref(), Some("asc"));
    }

    #[tokio::test]
    async fn test_failing_source_degrades_to_empty() {
        let service = CatalogService::new(Arc::new(FailingSource), "products");
        let listing = service.listing(&ProductFilter::default()).await;
        assert!(listing.products.is_empty());
        assert_eq!(listing.total, 0);
        assert_eq!(listing.categories, vec!["Sale"]);
    }
}
