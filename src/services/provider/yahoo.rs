//! Yahoo Finance 日线接口实现
//!
//! 对接 https://query1.finance.yahoo.com/v8/finance/chart/<symbol>

use std::time::Duration;

use chrono::{NaiveDate, TimeZone, Utc};
use chrono_tz::{America::New_York, Tz};
use futures::future::BoxFuture;
use reqwest::Client;
use serde::Deserialize;

use super::MarketDataProvider;
use crate::config::ProviderConfig;
use crate::error::AppError;
use crate::models::{PricePoint, PriceSeries};

/// Yahoo Finance 行情数据源
#[derive(Clone)]
pub struct YahooProvider {
    client: Client,
    base_url: String,
}

impl YahooProvider {
    /// 按配置构建 HTTP 客户端
    pub fn new(config: &ProviderConfig) -> reqwest::Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn chart_url(&self, ticker: &str) -> String {
        format!("{}/v8/finance/chart/{}", self.base_url, ticker)
    }

    async fn fetch_daily_closes(
        &self,
        ticker: &str,
        lookback_days: u32,
    ) -> Result<PriceSeries, AppError> {
        let url = self.chart_url(ticker);
        let range = format!("{}d", lookback_days);
        log::debug!("请求日线数据 URL: {} range={}", url, range);

        let response = self
            .client
            .get(&url)
            .query(&[("range", range.as_str()), ("interval", "1d")])
            .header("Referer", "https://finance.yahoo.com/")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // 错误响应通常仍带有 chart.error 描述
            if let Some(error) = parse_chart_error(&body, ticker) {
                return Err(error);
            }
            return Err(AppError::ProviderStatus(status.as_u16()));
        }

        parse_chart_response(&body, ticker)
    }
}

impl MarketDataProvider for YahooProvider {
    fn daily_closes<'a>(
        &'a self,
        ticker: &'a str,
        lookback_days: u32,
    ) -> BoxFuture<'a, Result<PriceSeries, AppError>> {
        Box::pin(self.fetch_daily_closes(ticker, lookback_days))
    }

    fn name(&self) -> &'static str {
        "yahoo"
    }
}

/// 解析 chart 接口响应为收盘价序列
///
/// 收盘价为 null 的交易日被丢弃；缺少时间戳或收盘价字段视为无数据
pub fn parse_chart_response(body: &str, ticker: &str) -> Result<PriceSeries, AppError> {
    let envelope: ChartEnvelope = serde_json::from_str(body)?;

    if let Some(error) = envelope.chart.error {
        return Err(error.into_app_error(ticker));
    }

    let result = envelope
        .chart
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| AppError::NoData(ticker.to_string()))?;

    let tz = result
        .meta
        .as_ref()
        .and_then(|m| m.exchange_timezone_name.as_deref())
        .and_then(|name| name.parse::<Tz>().ok())
        .unwrap_or(New_York);

    let timestamps = result
        .timestamp
        .ok_or_else(|| AppError::NoData(ticker.to_string()))?;
    let closes = result
        .indicators
        .quote
        .into_iter()
        .next()
        .and_then(|q| q.close)
        .ok_or_else(|| AppError::NoData(ticker.to_string()))?;

    let mut points = Vec::with_capacity(timestamps.len());
    for (ts, close) in timestamps.into_iter().zip(closes) {
        let Some(close) = close else { continue };
        let date = trading_date(ts, tz)
            .ok_or_else(|| AppError::ProviderApi(format!("invalid timestamp {}", ts)))?;
        points.push(PricePoint::new(date, close));
    }

    let series = PriceSeries::from_points(points);
    if series.is_empty() {
        return Err(AppError::NoData(ticker.to_string()));
    }

    Ok(series)
}

fn parse_chart_error(body: &str, ticker: &str) -> Option<AppError> {
    serde_json::from_str::<ChartEnvelope>(body)
        .ok()
        .and_then(|e| e.chart.error)
        .map(|e| e.into_app_error(ticker))
}

/// 将 Unix 时间戳换算为交易所所在时区的日期
fn trading_date(ts: i64, tz: Tz) -> Option<NaiveDate> {
    Utc.timestamp_opt(ts, 0)
        .single()
        .map(|dt| dt.with_timezone(&tz).date_naive())
}

// ==================== 响应结构 ====================

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: ChartBody,
}

#[derive(Debug, Deserialize)]
struct ChartBody {
    #[serde(default)]
    result: Option<Vec<ChartResult>>,
    #[serde(default)]
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: Option<String>,
    description: Option<String>,
}

/// 代码已退市或区间内无成交时 Yahoo 返回的错误码
const NOT_FOUND_CODE: &str = "Not Found";

impl ChartError {
    /// "Not Found" 表示区间内没有数据，其余错误视为数据源故障
    fn into_app_error(self, ticker: &str) -> AppError {
        if self.code.as_deref() == Some(NOT_FOUND_CODE) {
            return AppError::NoData(ticker.to_string());
        }
        AppError::ProviderApi(self.describe())
    }

    fn describe(&self) -> String {
        match (&self.code, &self.description) {
            (Some(code), Some(desc)) => format!("{}: {}", code, desc),
            (Some(code), None) => code.clone(),
            (None, Some(desc)) => desc.clone(),
            (None, None) => "unknown error".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    meta: Option<ChartMeta>,
    #[serde(default)]
    timestamp: Option<Vec<i64>>,
    #[serde(default)]
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartMeta {
    #[serde(rename = "exchangeTimezoneName")]
    exchange_timezone_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ChartIndicators {
    #[serde(default)]
    quote: Vec<ChartQuote>,
}

#[derive(Debug, Deserialize)]
struct ChartQuote {
    #[serde(default)]
    close: Option<Vec<Option<f64>>>,
}
