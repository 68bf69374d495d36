//! 管理员业务服务

use super::model::{AdminLink, AdminProfile, Dashboard, DashboardSection};

#[derive(Clone)]
pub struct AdminService {
    profile: AdminProfile,
}

impl AdminService {
    pub fn new(profile: AdminProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &AdminProfile {
        &self.profile
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard {
            profile: self.profile.clone(),
            profile_links: vec![
                AdminLink {
                    label: "Edit Profile",
                    href: "/admin/edit",
                },
                AdminLink {
                    label: "Change password",
                    href: "/admin/changepw",
                },
            ],
            sections: vec![
                DashboardSection {
                    title: "Orders",
                    description: "Here you can view all orders.",
                    links: vec![AdminLink {
                        label: "View Orders",
                        href: "/admin/vieworders",
                    }],
                },
                DashboardSection {
                    title: "Testimonials",
                    description: "Here you can edit testimonials.",
                    links: vec![AdminLink {
                        label: "Testimonials",
                        href: "/admin/testimonials",
                    }],
                },
                DashboardSection {
                    title: "Products",
                    description: "Here you can edit products.",
                    links: vec![AdminLink {
                        label: "Products",
                        href: "/admin/products",
                    }],
                },
            ],
        }
    }
}
