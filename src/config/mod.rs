// ==========================================
// 食材推荐系统 - 配置层
// ==========================================
// 职责: 选配策略档案的定义与装载
// 存储: JSON 档案文件 (平台配置目录)
// ==========================================

pub mod error;
pub mod selection_policy;

// 重导出核心配置类型
pub use error::{ConfigError, ConfigResult};
pub use selection_policy::{SelectionPolicy, TargetCount};
