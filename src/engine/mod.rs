// ==========================================
// 食材推荐系统 - 引擎层
// ==========================================
// 职责: 实现选配规则引擎,纯计算,不做 I/O
// 红线: 所有过滤/选配/修剪决策必须输出 reason
// ==========================================

pub mod picker;
pub mod pool_filter;
pub mod ranking;
pub mod selector;
pub mod summary;
pub mod trimmer;

// 重导出核心引擎
pub use picker::TargetCountPicker;
pub use pool_filter::PoolFilter;
pub use ranking::CookingTimeRanker;
pub use selector::{FilteredEntry, SelectionReport, Selector};
pub use summary::{CategoryCount, SelectionSummaryEngine};
pub use trimmer::{TimeBudgetTrimmer, TrimAction};
