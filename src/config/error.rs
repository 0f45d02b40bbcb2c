// ==========================================
// 食材推荐系统 - 配置层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("策略档案读取失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("策略档案解析失败: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result 类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
