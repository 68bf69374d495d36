//! 商品目录：列表、分类导航、筛选与排序

pub mod filter;
pub mod handler;
pub mod model;
pub mod service;
pub mod source;
pub mod view;
