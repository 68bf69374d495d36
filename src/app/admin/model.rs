//! 管理员数据模型

use serde::{Deserialize, Serialize};

/// 管理员资料，可在配置文件 `[admin]` 段覆盖
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminProfile {
    pub shop_name: String,
    pub user_id: u64,
    pub role: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl Default for AdminProfile {
    fn default() -> Self {
        Self {
            shop_name: "My Monoca".to_string(),
            user_id: 125,
            role: "admin".to_string(),
            name: "Simon Doe".to_string(),
            email: "simondoe@example.com".to_string(),
            phone: "+47 90090900".to_string(),
            address: "Chicken Road 13, 7080 Farm County".to_string(),
        }
    }
}

impl AdminProfile {
    /// 资料卡片中逐行显示的字段
    pub fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("Name", self.name.as_str()),
            ("Email", self.email.as_str()),
            ("Phone", self.phone.as_str()),
            ("Address", self.address.as_str()),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct AdminLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone)]
pub struct DashboardSection {
    pub title: &'static str,
    pub description: &'static str,
    pub links: Vec<AdminLink>,
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub profile: AdminProfile,
    /// 资料卡片下方的操作
    pub profile_links: Vec<AdminLink>,
    pub sections: Vec<DashboardSection>,
}
