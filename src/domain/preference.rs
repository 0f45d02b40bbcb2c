// ==========================================
// 食材推荐系统 - 用户约束领域模型
// ==========================================
// 职责: 定义每次请求的选配约束值对象
// 红线: 两个集合只有成员语义,没有次序语义
// ==========================================

use crate::domain::types::Category;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 界面侧时间上限钳制边界 (分钟)
pub const TIME_CAP_CLAMP_MAX_MIN: u32 = 240;

/// 历史界面默认时间上限 (分钟)
pub const DEFAULT_TIME_CAP_MIN: u32 = 20;

// ==========================================
// Preferences - 选配约束
// ==========================================
// 用途: 调用方每次请求构造,选配引擎只读
// 红线: 排除集合允许引用目录中不存在的标识,静默容忍
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    // ===== 类别开关 =====
    #[serde(default, rename = "includeCategories")]
    pub include_categories: HashSet<Category>, // 允许的类别 (可为空或全集)

    // ===== 排除清单 =====
    #[serde(default, rename = "excludeIngredients")]
    pub exclude_ingredients: HashSet<String>, // 排除的食材标识

    // ===== 时间预算 =====
    #[serde(default, rename = "maxCookingTime")]
    pub max_cooking_time_min: u32, // 总烹饪时间上限 (分钟,可为零)
}

impl Preferences {
    pub fn new(
        include_categories: HashSet<Category>,
        exclude_ingredients: HashSet<String>,
        max_cooking_time_min: u32,
    ) -> Self {
        Self {
            include_categories,
            exclude_ingredients,
            max_cooking_time_min,
        }
    }

    /// 界面侧时间上限钳制: 负值与超界值收敛到 [0, 240]
    ///
    /// 核心算法不钳制,按给定值执行;钳制属于采集边界的约定,
    /// 所有采集路径 (CLI/界面) 共用此函数。
    pub fn clamp_time_cap(raw: i64) -> u32 {
        raw.clamp(0, TIME_CAP_CLAMP_MAX_MIN as i64) as u32
    }

    /// 类别是否被允许
    pub fn category_included(&self, category: Category) -> bool {
        self.include_categories.contains(&category)
    }

    /// 食材是否在排除清单内
    pub fn ingredient_excluded(&self, ingredient_id: &str) -> bool {
        self.exclude_ingredients.contains(ingredient_id)
    }
}

impl Default for Preferences {
    /// 历史界面默认值: 五类全开,无排除,时间上限 20 分钟
    fn default() -> Self {
        Self {
            include_categories: Category::ALL.iter().copied().collect(),
            exclude_ingredients: HashSet::new(),
            max_cooking_time_min: DEFAULT_TIME_CAP_MIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_ui_defaults() {
        let prefs = Preferences::default();
        assert_eq!(prefs.include_categories.len(), 5);
        assert!(prefs.exclude_ingredients.is_empty());
        assert_eq!(prefs.max_cooking_time_min, 20);
    }

    #[test]
    fn test_clamp_time_cap_bounds() {
        assert_eq!(Preferences::clamp_time_cap(-5), 0);
        assert_eq!(Preferences::clamp_time_cap(0), 0);
        assert_eq!(Preferences::clamp_time_cap(60), 60);
        assert_eq!(Preferences::clamp_time_cap(240), 240);
        assert_eq!(Preferences::clamp_time_cap(1000), 240);
    }

    #[test]
    fn test_membership_helpers() {
        let prefs = Preferences::new(
            [Category::Protein].into_iter().collect(),
            ["rice".to_string()].into_iter().collect(),
            30,
        );
        assert!(prefs.category_included(Category::Protein));
        assert!(!prefs.category_included(Category::Fat));
        assert!(prefs.ingredient_excluded("rice"));
        assert!(!prefs.ingredient_excluded("tofu"));
    }

    #[test]
    fn test_serde_wire_names() {
        let json = r#"{
            "includeCategories": ["Protein", "Vegetable"],
            "excludeIngredients": ["rice"],
            "maxCookingTime": 45
        }"#;
        let prefs: Preferences = serde_json::from_str(json).unwrap();
        assert!(prefs.category_included(Category::Vegetable));
        assert!(prefs.ingredient_excluded("rice"));
        assert_eq!(prefs.max_cooking_time_min, 45);
    }

    #[test]
    fn test_serde_missing_fields_default() {
        let prefs: Preferences = serde_json::from_str("{}").unwrap();
        assert!(prefs.include_categories.is_empty());
        assert!(prefs.exclude_ingredients.is_empty());
        assert_eq!(prefs.max_cooking_time_min, 0);
    }
}
