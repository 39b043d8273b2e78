//! 股票代码登记表
//!
//! 进程内只读常量，启动后不再变化

use crate::error::AppError;
use crate::models::Company;

/// 支持查询的公司列表（顺序即接口返回顺序）
static COMPANIES: [Company; 12] = [
    Company::new("Apple", "AAPL"),
    Company::new("Microsoft", "MSFT"),
    Company::new("Google", "GOOGL"),
    Company::new("Amazon", "AMZN"),
    Company::new("Tesla", "TSLA"),
    Company::new("Meta", "META"),
    Company::new("NVIDIA", "NVDA"),
    Company::new("Netflix", "NFLX"),
    Company::new("Adobe", "ADBE"),
    Company::new("Intel", "INTC"),
    Company::new("Qualcomm", "QCOM"),
    Company::new("AMD", "AMD"),
];

/// 获取全部公司
pub fn list_companies() -> &'static [Company] {
    &COMPANIES
}

/// 规范化股票代码：转为大写，不做其他处理
pub fn normalize_ticker(raw: &str) -> String {
    raw.to_uppercase()
}

/// 校验股票代码是否在登记表中（不区分大小写）
pub fn validate_ticker(raw: &str) -> Result<&'static Company, AppError> {
    let ticker = normalize_ticker(raw);
    COMPANIES
        .iter()
        .find(|c| c.ticker == ticker)
        .ok_or(AppError::InvalidTicker(ticker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_companies_fixed_order() {
        let companies = list_companies();
        assert_eq!(companies.len(), 12);
        assert_eq!(companies[0], Company::new("Apple", "AAPL"));
        assert_eq!(companies[11], Company::new("AMD", "AMD"));

        let tickers: Vec<&str> = companies.iter().map(|c| c.ticker).collect();
        assert_eq!(
            tickers,
            vec![
                "AAPL", "MSFT", "GOOGL", "AMZN", "TSLA", "META", "NVDA", "NFLX", "ADBE", "INTC",
                "QCOM", "AMD"
            ]
        );

        // 多次调用结果一致
        assert_eq!(list_companies(), companies);
    }

    #[test]
    fn test_validate_ticker_case_insensitive() {
        for input in ["aapl", "AAPL", "AaPl", "nvda"] {
            let company = validate_ticker(input).unwrap();
            assert_eq!(company.ticker, normalize_ticker(input));
        }
    }

    #[test]
    fn test_validate_ticker_rejects_unknown() {
        for input in ["IBM", "", "AAPL1", "GOOG", " nvda ", "\taapl", "AAPL\n"] {
            match validate_ticker(input) {
                Err(AppError::InvalidTicker(t)) => assert_eq!(t, normalize_ticker(input)),
                other => panic!("期望 InvalidTicker，实际: {:?}", other),
            }
        }
    }
}
