use anyhow::Context;
use monoca_shop::infrastructure::{
    config::{config_path, load_config},
    logger::Logger,
};
use std::{path::PathBuf, time::Duration};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 第一个命令行参数可指定配置文件路径
    let explicit = std::env::args().nth(1).map(PathBuf::from);
    let path = config_path(explicit.as_deref());
    let config = load_config(path.as_deref()).context("加载配置失败")?;

    Logger::init(&config.logging.level);
    info!("启动 Monoca 网店服务...");
    match &path {
        Some(path) => info!("从配置文件加载: {}", path.display()),
        None => info!("未找到配置文件，使用默认配置"),
    }

    let source = monoca_shop::build_source(&config).context("创建商品数据源失败")?;
    let state = monoca_shop::build_state(&config, source);
    let app = monoca_shop::build_router(state, Duration::from_secs(config.http.timeout_seconds));

    let addr = config.listen_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("无法绑定到 {}", addr))?;

    info!("🚀 服务器运行在 http://{}", addr);
    info!("📖 可用端点:");
    info!("   GET  /                   - 首页横幅");
    info!("   GET  /products           - 商品列表 (category, sort, q, all)");
    info!("   GET  /admin              - 管理员面板");
    info!("   GET  /api/products       - 商品列表 JSON");
    info!("   GET  /api/categories     - 分类列表 JSON");
    info!("   GET  /api/admin/profile  - 管理员资料 JSON");
    info!("   GET  /health             - 健康检查");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("服务器运行失败")?;

    info!("服务器已停止");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("监听退出信号失败: {}", e);
    }
    info!("收到退出信号，正在关闭...");
}
