//! 股票数据模型
//!
//! 定义价格序列及接口响应结构

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 单日收盘价
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// 交易日
    pub date: NaiveDate,
    /// 收盘价
    pub close: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}

/// 按日期升序排列、日期不重复的收盘价序列
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// 由任意顺序的数据点构建序列
    ///
    /// 丢弃非有限值的收盘价；同一日期出现多次时保留后出现的样本
    pub fn from_points(points: impl IntoIterator<Item = PricePoint>) -> Self {
        let mut points: Vec<PricePoint> = points
            .into_iter()
            .filter(|p| p.close.is_finite())
            .collect();

        // 稳定排序保证同日样本保持原有先后顺序
        points.sort_by_key(|p| p.date);

        let mut deduped: Vec<PricePoint> = Vec::with_capacity(points.len());
        for point in points {
            match deduped.last_mut() {
                Some(last) if last.date == point.date => *last = point,
                _ => deduped.push(point),
            }
        }

        Self { points: deduped }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }
}

/// GET /stock/{ticker} 响应
///
/// dates 与 prices 一一对应
#[derive(Debug, Serialize, Deserialize)]
pub struct StockHistoryResponse {
    pub ticker: String,
    pub dates: Vec<NaiveDate>,
    pub prices: Vec<f64>,
}

impl StockHistoryResponse {
    pub fn new(ticker: String, series: &PriceSeries) -> Self {
        Self {
            ticker,
            dates: series.dates(),
            prices: series.closes(),
        }
    }
}

/// GET /predict/{ticker} 响应
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub ticker: String,
    /// 预测的下一交易日价格（保留两位小数）
    pub predicted_price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_series_sorted_and_deduped() {
        let series = PriceSeries::from_points(vec![
            PricePoint::new(day(5), 12.0),
            PricePoint::new(day(4), 11.0),
            PricePoint::new(day(5), 12.5),
            PricePoint::new(day(1), 10.0),
        ]);

        assert_eq!(series.dates(), vec![day(1), day(4), day(5)]);
        assert_eq!(series.closes(), vec![10.0, 11.0, 12.5]);
    }

    #[test]
    fn test_series_drops_non_finite_closes() {
        let series = PriceSeries::from_points(vec![
            PricePoint::new(day(1), f64::NAN),
            PricePoint::new(day(2), 10.0),
            PricePoint::new(day(3), f64::INFINITY),
        ]);

        assert_eq!(series.len(), 1);
        assert_eq!(series.closes(), vec![10.0]);
    }

    #[test]
    fn test_history_response_serialization() {
        let series = PriceSeries::from_points(vec![
            PricePoint::new(day(1), 100.0),
            PricePoint::new(day(4), 101.5),
        ]);
        let response = StockHistoryResponse::new("AAPL".to_string(), &series);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "ticker": "AAPL",
                "dates": ["2024-03-01", "2024-03-04"],
                "prices": [100.0, 101.5]
            })
        );
    }
}
