//! 配置模块
//!
//! 支持从 JSON 文件加载系统配置

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,
    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
    /// 工作线程数（0 表示使用 CPU 核心数）
    #[serde(default)]
    pub workers: usize,
}

/// 行情数据源配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// 数据源根地址
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// 请求超时时间（秒）
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// 连接超时时间（秒）
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    /// 请求头 User-Agent
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// 回看窗口配置（自然日）
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// GET /stock/{ticker} 回看天数
    #[serde(default = "default_stock_lookback")]
    pub stock_lookback_days: u32,
    /// GET /predict/{ticker} 拟合所用回看天数
    #[serde(default = "default_predict_lookback")]
    pub predict_lookback_days: u32,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// 日志级别: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// 应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,
    /// 数据源配置
    #[serde(default)]
    pub provider: ProviderConfig,
    /// 回看窗口配置
    #[serde(default)]
    pub history: HistoryConfig,
    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
    /// 实际加载的配置文件（使用默认配置时为空）
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

// 默认值函数
fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8000 }
fn default_base_url() -> String { "https://query1.finance.yahoo.com".to_string() }
fn default_timeout() -> u64 { 10 }
fn default_connect_timeout() -> u64 { 5 }
fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string()
}
fn default_stock_lookback() -> u32 { 30 }
fn default_predict_lookback() -> u32 { 60 }
fn default_log_level() -> String { "info".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: 0,
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            connect_timeout_secs: default_connect_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            stock_lookback_days: default_stock_lookback(),
            predict_lookback_days: default_predict_lookback(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// 从 JSON 文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let mut config: AppConfig = serde_json::from_str(&content)?;
        config.source = Some(path.as_ref().to_path_buf());
        Ok(config)
    }

    /// 加载配置
    ///
    /// 优先读取环境变量 APP_CONFIG 指定的文件，其次 config.json、config/config.json，
    /// 均不存在时使用默认值。日志系统尚未初始化，失败信息输出到 stderr
    pub fn load() -> Self {
        let mut config_paths: Vec<PathBuf> = Vec::new();
        if let Ok(path) = env::var("APP_CONFIG") {
            config_paths.push(PathBuf::from(path));
        }
        config_paths.push(PathBuf::from("config.json"));
        config_paths.push(PathBuf::from("config/config.json"));

        for path in config_paths {
            if path.exists() {
                match Self::from_file(&path) {
                    Ok(config) => return config,
                    Err(e) => eprintln!("加载配置文件 {} 失败: {}", path.display(), e),
                }
            }
        }

        Self::default()
    }

    /// 获取服务器绑定地址
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
