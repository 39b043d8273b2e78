//! 股票接口处理器
//!
//! - GET /stock/{ticker} - 最近 30 天收盘价
//! - GET /predict/{ticker} - 预测下一交易日价格

use actix_web::{web, HttpResponse, ResponseError, Result};

use super::AppState;
use crate::error::AppError;
use crate::models::{PredictionResponse, StockHistoryResponse};
use crate::services::{history, predictor, registry};

/// 获取股票历史收盘价
///
/// GET /stock/{ticker}
pub async fn get_stock_history(
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let ticker = registry::normalize_ticker(&path.into_inner());

    match stock_history(&state, &ticker).await {
        Ok(history) => Ok(HttpResponse::Ok().json(history)),
        Err(e) => {
            log::warn!("获取 {} 历史数据失败: {}", ticker, e);
            Ok(e.error_response())
        }
    }
}

/// 预测下一交易日价格
///
/// GET /predict/{ticker}
pub async fn predict_next_day_price(
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let ticker = registry::normalize_ticker(&path.into_inner());

    match prediction(&state, &ticker).await {
        Ok(prediction) => Ok(HttpResponse::Ok().json(prediction)),
        Err(e) => {
            if e.status_code().is_server_error() {
                log::error!("预测 {} 失败: {:?}", ticker, e);
            } else {
                log::warn!("预测 {} 失败: {}", ticker, e);
            }
            Ok(e.error_response())
        }
    }
}

async fn stock_history(state: &AppState, ticker: &str) -> Result<StockHistoryResponse, AppError> {
    let company = registry::validate_ticker(ticker)?;
    let series = history::fetch_history(
        state.provider.as_ref(),
        company.ticker,
        state.history.stock_lookback_days,
    )
    .await?;

    Ok(StockHistoryResponse::new(company.ticker.to_string(), &series))
}

async fn prediction(state: &AppState, ticker: &str) -> Result<PredictionResponse, AppError> {
    let company = registry::validate_ticker(ticker)?;
    let series = history::fetch_history(
        state.provider.as_ref(),
        company.ticker,
        state.history.predict_lookback_days,
    )
    .await?;
    let predicted_price = predictor::predict_next(&series)?;

    Ok(PredictionResponse {
        ticker: company.ticker.to_string(),
        predicted_price,
    })
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/stock/{ticker}", web::get().to(get_stock_history))
        .route("/predict/{ticker}", web::get().to(predict_next_day_price));
}
