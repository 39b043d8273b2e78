//! 历史收盘价服务

use crate::error::AppError;
use crate::models::PriceSeries;
use crate::services::provider::MarketDataProvider;

/// 获取股票最近 `lookback_days` 个自然日的收盘价序列
///
/// 调用方负责先校验股票代码；此处只保证数据源返回了可用数据
pub async fn fetch_history(
    provider: &dyn MarketDataProvider,
    ticker: &str,
    lookback_days: u32,
) -> Result<PriceSeries, AppError> {
    let series = provider.daily_closes(ticker, lookback_days).await?;

    if series.is_empty() {
        return Err(AppError::NoData(ticker.to_string()));
    }

    log::debug!(
        "{} 返回 {} 条 {} 收盘价（回看 {} 天）",
        provider.name(),
        series.len(),
        ticker,
        lookback_days
    );
    Ok(series)
}
