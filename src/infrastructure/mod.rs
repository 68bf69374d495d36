//! 基础设施层：配置、日志与外部商品数据源

pub mod config;
#[cfg(feature = "database")]
pub mod database;
pub mod logger;
pub mod remote;
