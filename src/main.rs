//! 股票价格预测后端服务
//!
//! 提供公司列表、历史收盘价和次日价格预测的 RESTful API
//! 数据来源：Yahoo Finance

mod config;     // 配置加载
mod error;      // 错误类型
mod handlers;   // HTTP 请求处理器
mod middleware; // 中间件
mod models;     // 数据模型定义
mod services;   // 业务逻辑服务

use std::io;
use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use crate::config::AppConfig;
use crate::handlers::AppState;
use crate::middleware::Cors;
use crate::services::provider::{MarketDataProvider, YahooProvider};

/// 应用程序入口
#[actix_web::main]
async fn main() -> io::Result<()> {
    let config = AppConfig::load();

    // 初始化日志系统，RUST_LOG 优先于配置文件中的级别
    env_logger::init_from_env(Env::default().default_filter_or(config.log.level.as_str()));

    match &config.source {
        Some(path) => log::info!("从 {} 加载配置成功", path.display()),
        None => log::info!("未找到配置文件，使用默认配置"),
    }

    let provider = YahooProvider::new(&config.provider)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    let provider: Arc<dyn MarketDataProvider> = Arc::new(provider);

    let state = web::Data::new(AppState {
        provider,
        history: config.history,
    });

    log::info!(
        "启动股票预测服务，监听 {}（数据源 {}）",
        config.bind_addr(),
        config.provider.base_url
    );
    log::warn!("CORS 允许任意来源访问，不适用于生产环境");

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())  // 跨域
            .wrap(Logger::default())   // 请求日志
            .app_data(state.clone())
            .configure(handlers::config)
    });

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(config.bind_addr())?.run().await
}
