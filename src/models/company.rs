//! 公司数据模型

use serde::Serialize;

/// 登记表中的公司条目
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Company {
    /// 公司名称
    pub name: &'static str,
    /// 股票代码（大写）
    pub ticker: &'static str,
}

impl Company {
    pub const fn new(name: &'static str, ticker: &'static str) -> Self {
        Self { name, ticker }
    }
}
