// ==========================================
// 食材推荐系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、约束值对象
// 红线: 不含目录装载逻辑,不含选配引擎逻辑
// ==========================================

pub mod ingredient;
pub mod preference;
pub mod recipe;
pub mod types;

// 重导出核心类型
pub use ingredient::{CatalogLoadResult, Ingredient, RawIngredientRecord, SkippedRow};
pub use preference::{Preferences, DEFAULT_TIME_CAP_MIN, TIME_CAP_CLAMP_MAX_MIN};
pub use recipe::{LegacyRecipeResult, RecipeResult, NOTE_ADJUSTED, NOTE_BALANCED};
pub use types::{Category, TrimStep};
