//! 业务逻辑服务模块
//!
//! 封装数据获取和处理逻辑

pub mod history;    // 历史收盘价获取
pub mod predictor;  // 线性回归预测
pub mod provider;   // 外部行情数据源
pub mod registry;   // 股票代码登记表
