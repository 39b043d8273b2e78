pub mod companies;
pub mod health;
pub mod stock;

use std::sync::Arc;

use actix_web::web;

use crate::config::HistoryConfig;
use crate::services::provider::MarketDataProvider;

/// 处理器共享状态（只读）
pub struct AppState {
    pub provider: Arc<dyn MarketDataProvider>,
    pub history: HistoryConfig,
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::config)
        .configure(companies::config)
        .configure(stock::config);
}
