//! 行情数据源
//!
//! 处理器通过 `MarketDataProvider` 访问外部数据，便于在测试中替换

pub mod yahoo;

pub use yahoo::YahooProvider;

use futures::future::BoxFuture;

use crate::error::AppError;
use crate::models::PriceSeries;

/// 外部行情数据源
pub trait MarketDataProvider: Send + Sync {
    /// 获取最近 `lookback_days` 个自然日内的日收盘价
    ///
    /// 每次调用发起一次网络请求，不重试、不缓存
    fn daily_closes<'a>(
        &'a self,
        ticker: &'a str,
        lookback_days: u32,
    ) -> BoxFuture<'a, Result<PriceSeries, AppError>>;

    /// 数据源名称，用于日志
    fn name(&self) -> &'static str;
}
