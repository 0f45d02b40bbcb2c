// ==========================================
// 食材推荐系统 - 核心库
// ==========================================
// 系统定位: 决策支持系统 (推荐结果由用户最终取舍)
// 技术栈: Rust + serde + tracing
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 选配规则
pub mod engine;

// 目录层 - 食材目录来源
pub mod catalog;

// 配置层 - 选配策略档案
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{Category, TrimStep};

// 领域实体
pub use domain::{
    CatalogLoadResult, Ingredient, LegacyRecipeResult, Preferences, RawIngredientRecord,
    RecipeResult, SkippedRow,
};

// 引擎
pub use engine::{
    CookingTimeRanker, PoolFilter, SelectionReport, SelectionSummaryEngine, Selector,
    TargetCountPicker, TimeBudgetTrimmer,
};

// 目录来源
pub use catalog::{reference_catalog, CatalogError, CatalogLoader};

// 配置
pub use config::{ConfigError, SelectionPolicy, TargetCount};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "食材推荐系统";

// ==========================================
// 预编译检查
// ==========================================

// 确保编译时所有模块可见
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
