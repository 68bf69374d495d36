//! 商品筛选与排序
//!
//! 先筛选出原列表的子序列，再按价格做稳定排序，价格相同的商品保持原有顺序。

use std::cmp::Ordering;

use super::model::{Product, SALE_CATEGORY};

/// 价格排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// 宽松解析，无法识别的值视为不排序
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Some(SortDirection::Ascending),
            "desc" | "descending" => Some(SortDirection::Descending),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "Ascending",
            SortDirection::Descending => "Descending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
    Sale,
}

impl CategoryFilter {
    /// 空字符串表示全部，`Sale` 表示促销商品
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            None => CategoryFilter::All,
            Some(label) if label.trim().is_empty() => CategoryFilter::All,
            Some(SALE_CATEGORY) => CategoryFilter::Sale,
            Some(other) => CategoryFilter::Category(other.to_string()),
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Category(name) => Some(name),
            CategoryFilter::Sale => Some(SALE_CATEGORY),
        }
    }

    fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(name) => product.category == *name,
            CategoryFilter::Sale => product.sale,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category: CategoryFilter,
    pub search: Option<String>,
    /// 忽略分类筛选，显示全部商品
    pub show_all: bool,
    pub sort: Option<SortDirection>,
}

fn matches_search(product: &Product, term: &str) -> bool {
    product
        .product_name
        .to_lowercase()
        .contains(&term.to_lowercase())
}

/// 返回满足条件的子序列，保持原有顺序
pub fn filter_products(products: &[Product], filter: &ProductFilter) -> Vec<Product> {
    let search = filter
        .search
        .as_deref()
        .map(str::trim)
        .filter(|term| !term.is_empty());

    products
        .iter()
        .filter(|p| filter.show_all || filter.category.matches(p))
        .filter(|p| search.map_or(true, |term| matches_search(p, term)))
        .cloned()
        .collect()
}

/// 按价格稳定排序
pub fn sort_products(products: &mut [Product], direction: Option<SortDirection>) {
    match direction {
        Some(SortDirection::Ascending) => products.sort_by(|a, b| by_price(a.price, b.price)),
        Some(SortDirection::Descending) => products.sort_by(|a, b| by_price(b.price, a.price)),
        None => {}
    }
}

/// 数值相等（含 `-0.0` 与 `0.0`）视为并列，无法比较的价格也视为并列
fn by_price(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

pub fn apply(products: &[Product], filter: &ProductFilter) -> Vec<Product> {
    let mut view = filter_products(products, filter);
    sort_products(&mut view, filter.sort);
    view
}
