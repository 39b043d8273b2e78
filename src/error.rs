//! 错误类型定义
//!
//! 所有组件边界统一返回 `AppError`，由处理器按类型映射为 HTTP 状态码

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::ErrorResponse;

#[derive(Debug, Error)]
pub enum AppError {
    /// 股票代码不在登记表中
    #[error("Invalid ticker.")]
    InvalidTicker(String),

    /// 数据源未返回可用的收盘价
    #[error("No valid stock data found.")]
    NoData(String),

    /// 回归所需数据点不足（至少 2 个）
    #[error("Not enough data for prediction.")]
    InsufficientData(usize),

    #[error("provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned status {0}")]
    ProviderStatus(u16),

    #[error("provider error: {0}")]
    ProviderApi(String),

    #[error("failed to decode provider response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl AppError {
    /// 返回给调用方的错误描述
    pub fn detail(&self) -> String {
        match self.status_code() {
            StatusCode::INTERNAL_SERVER_ERROR => format!("Internal error: {}", self),
            _ => self.to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidTicker(_) | AppError::InsufficientData(_) => StatusCode::BAD_REQUEST,
            AppError::NoData(_) => StatusCode::NOT_FOUND,
            AppError::Transport(_)
            | AppError::ProviderStatus(_)
            | AppError::ProviderApi(_)
            | AppError::Decode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.detail()))
    }
}
