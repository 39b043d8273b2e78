//! 线性回归预测
//!
//! 以位置索引 0..n-1 为自变量、收盘价为因变量做最小二乘拟合，
//! 外推索引 n 处的价格

use crate::error::AppError;
use crate::models::PriceSeries;

/// 预测下一交易日收盘价，结果保留两位小数
pub fn predict_next(series: &PriceSeries) -> Result<f64, AppError> {
    let (slope, intercept) = fit_line(&series.closes())?;
    let next_index = series.len() as f64;
    Ok(round2(slope * next_index + intercept))
}

/// 普通最小二乘拟合 `price = slope * index + intercept`
///
/// 使用中心化求和，避免大数值下正规方程的精度损失
pub fn fit_line(prices: &[f64]) -> Result<(f64, f64), AppError> {
    let n = prices.len();
    if n < 2 {
        return Err(AppError::InsufficientData(n));
    }

    let count = n as f64;
    let mean_x = (count - 1.0) / 2.0;
    let mean_y = prices.iter().sum::<f64>() / count;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    for (i, &y) in prices.iter().enumerate() {
        let dx = i as f64 - mean_x;
        sxy += dx * (y - mean_y);
        sxx += dx * dx;
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;
    Ok((slope, intercept))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
