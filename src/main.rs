//! 耶鲁投资者信心指数后端服务
//!
//! 从 Excel 数据文件读取信心指数时间序列，通过 JSON API 提供给单页前端
//! 数据文件由离线脚本 generate_data 生成

mod config;     // 配置
mod handlers;   // HTTP 请求处理器
mod models;     // 数据模型定义
mod services;   // 业务逻辑服务

use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use crate::config::AppConfig;

/// 应用程序入口
///
/// 加载配置，启动 HTTP 服务器
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = AppConfig::load();

    // 初始化日志系统，默认日志级别来自配置
    env_logger::init_from_env(Env::default().default_filter_or(config.log.level.as_str()));

    log::info!("启动耶鲁信心指数后端服务，监听 {}", config.bind_addr());
    log::info!("数据文件: {}", config.data.file);

    let bind_addr = config.bind_addr();
    let workers = config.server.workers;
    let app_config = web::Data::new(config);

    // 创建并启动 HTTP 服务器
    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())  // 添加请求日志中间件
            .app_data(app_config.clone())
            .configure(handlers::config)  // 配置路由
    })
    .bind(bind_addr)?;

    if workers > 0 {
        server = server.workers(workers);
    }

    server.run().await
}
