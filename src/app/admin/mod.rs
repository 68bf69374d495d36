//! 管理员资料面板

pub mod handler;
pub mod model;
pub mod service;
pub mod view;
