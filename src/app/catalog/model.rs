//! 商品目录数据模型

use serde::{Deserialize, Serialize};

/// 促销伪分类，按 `sale` 标记而不是分类名筛选
pub const SALE_CATEGORY: &str = "Sale";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    #[serde(alias = "name")]
    pub product_name: String,
    #[serde(rename = "type", alias = "category")]
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub sale: bool,
    #[serde(default)]
    pub image_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,
}

impl Product {
    /// 图片替代文本，未设置时使用商品名称
    pub fn alt_text(&self) -> &str {
        self.image_alt.as_deref().unwrap_or(&self.product_name)
    }
}

/// 一次筛选排序后的商品视图
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListing {
    pub products: Vec<Product>,
    /// 数据源返回的商品总数（筛选前）
    pub total: usize,
    pub categories: Vec<String>,
    pub selected_category: Option<String>,
    pub sort: Option<String>,
    pub search: Option<String>,
}

const SEED_IMAGE: &str =
    "http://cdn.shopify.com/s/files/1/0548/9469/0401/products/WHOLE_2.png?v=1668467257";

fn seed(id: i64, name: &str, sale: bool, price: f64) -> Product {
    Product {
        id,
        product_name: name.to_string(),
        category: name.to_string(),
        price,
        sale,
        image_path: SEED_IMAGE.to_string(),
        image_alt: None,
    }
}

/// 内置商品列表
pub fn seed_products() -> Vec<Product> {
    vec![
        seed(1, "Coffee", false, 67.0),
        seed(2, "Coffee", true, 100.0),
        seed(3, "Coffee", false, 40.0),
        seed(4, "Tea", false, 70.0),
        seed(5, "Tea", true, 90.0),
        seed(6, "Tea", true, 110.0),
        seed(7, "Tea", false, 140.0),
        seed(8, "Food", true, 99.0),
        seed(9, "Food", false, 30.0),
        seed(10, "Pastries", false, 50.0),
    ]
}
