//! 首页横幅数据模型

#[derive(Debug, Clone)]
pub struct Banner {
    pub headline: &'static str,
    pub tagline: &'static str,
    pub cta_label: &'static str,
    pub cta_href: &'static str,
    pub background: &'static str,
}

impl Default for Banner {
    fn default() -> Self {
        Self {
            headline: "3 for 2",
            tagline: "Mix and match or find exactly what you want",
            cta_label: "ORDER NOW",
            cta_href: "/products",
            background: "/assets/img/banner.png",
        }
    }
}
