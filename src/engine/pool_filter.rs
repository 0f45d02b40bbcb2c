// ==========================================
// 食材推荐系统 - 候选池过滤引擎
// ==========================================
// 职责: 按用户偏好从食材目录构建候选池
// 输入: 完整食材目录 + 用户偏好
// 输出: 候选池 + 被过滤食材及原因
// 红线: 无状态、无副作用、无 I/O 操作
// ==========================================

use crate::domain::ingredient::Ingredient;
use crate::domain::preference::Preferences;

// ==========================================
// PoolFilter - 候选池过滤引擎
// ==========================================
pub struct PoolFilter {
    // 无状态引擎,不需要注入依赖
}

impl PoolFilter {
    /// 构造函数
    ///
    /// # 返回
    /// 新的 PoolFilter 实例
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 构建候选池
    ///
    /// 过滤规则:
    /// 1) 食材类别必须在偏好的包含类别集合内
    /// 2) 食材 id 不得出现在排除清单中
    ///
    /// 两条规则都不满足时,记录类别原因(先判类别,后判排除)。
    /// 候选池保持目录原始顺序,不做任何重排。
    ///
    /// # 参数
    /// - `catalog`: 完整食材目录
    /// - `prefs`: 用户偏好
    ///
    /// # 返回
    /// (候选池, 被过滤食材及原因列表)
    pub fn build_pool(
        &self,
        catalog: &[Ingredient],
        prefs: &Preferences,
    ) -> (Vec<Ingredient>, Vec<(Ingredient, String)>) {
        let mut pool = Vec::new();
        let mut filtered_out = Vec::new();

        for ingredient in catalog {
            if !prefs.category_included(ingredient.category) {
                filtered_out.push((
                    ingredient.clone(),
                    format!("CATEGORY_NOT_INCLUDED: category={}", ingredient.category),
                ));
                continue;
            }
            if prefs.ingredient_excluded(&ingredient.id) {
                filtered_out.push((
                    ingredient.clone(),
                    format!("INGREDIENT_EXCLUDED: id={}", ingredient.id),
                ));
                continue;
            }
            pool.push(ingredient.clone());
        }

        (pool, filtered_out)
    }
}

impl Default for PoolFilter {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::Category;
    use std::collections::HashSet;

    fn create_test_ingredient(id: &str, category: Category, cooking_time_min: u32) -> Ingredient {
        Ingredient {
            id: id.to_string(),
            name: id.to_string(),
            category,
            cooking_time_min,
            calories: None,
            protein_g: None,
            carbohydrates_g: None,
            fat_g: None,
        }
    }

    fn create_test_prefs(categories: &[Category], excludes: &[&str]) -> Preferences {
        Preferences::new(
            categories.iter().copied().collect::<HashSet<_>>(),
            excludes.iter().map(|s| s.to_string()).collect::<HashSet<_>>(),
            30,
        )
    }

    // ==========================================
    // 正常案例
    // ==========================================

    #[test]
    fn test_scenario_1_all_pass() {
        // 场景1: 全类别包含且无排除,目录全部入池
        let filter = PoolFilter::new();
        let catalog = vec![
            create_test_ingredient("chicken-breast", Category::Protein, 15),
            create_test_ingredient("rice", Category::Carbohydrate, 20),
            create_test_ingredient("broccoli", Category::Vegetable, 8),
        ];
        let prefs = create_test_prefs(&Category::ALL, &[]);

        let (pool, filtered_out) = filter.build_pool(&catalog, &prefs);

        assert_eq!(pool.len(), 3);
        assert!(filtered_out.is_empty());
    }

    #[test]
    fn test_scenario_2_category_not_included() {
        // 场景2: 类别未包含的食材被过滤并记录原因
        let filter = PoolFilter::new();
        let catalog = vec![
            create_test_ingredient("chicken-breast", Category::Protein, 15),
            create_test_ingredient("olive-oil", Category::Fat, 0),
        ];
        let prefs = create_test_prefs(&[Category::Protein], &[]);

        let (pool, filtered_out) = filter.build_pool(&catalog, &prefs);

        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].id, "chicken-breast");
        assert_eq!(filtered_out.len(), 1);
        assert_eq!(filtered_out[0].0.id, "olive-oil");
        assert!(filtered_out[0].1.starts_with("CATEGORY_NOT_INCLUDED"));
    }

    #[test]
    fn test_scenario_3_ingredient_excluded() {
        // 场景3: 排除清单命中的食材被过滤并记录原因
        let filter = PoolFilter::new();
        let catalog = vec![
            create_test_ingredient("chicken-breast", Category::Protein, 15),
            create_test_ingredient("tofu", Category::Protein, 10),
        ];
        let prefs = create_test_prefs(&Category::ALL, &["tofu"]);

        let (pool, filtered_out) = filter.build_pool(&catalog, &prefs);

        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].id, "chicken-breast");
        assert_eq!(filtered_out.len(), 1);
        assert!(filtered_out[0].1.starts_with("INGREDIENT_EXCLUDED"));
    }

    #[test]
    fn test_scenario_4_category_reason_takes_precedence() {
        // 场景4: 类别未包含且同时被排除,记录类别原因
        let filter = PoolFilter::new();
        let catalog = vec![create_test_ingredient("honey", Category::Extra, 0)];
        let prefs = create_test_prefs(&[Category::Protein], &["honey"]);

        let (pool, filtered_out) = filter.build_pool(&catalog, &prefs);

        assert!(pool.is_empty());
        assert_eq!(filtered_out.len(), 1);
        assert!(filtered_out[0].1.starts_with("CATEGORY_NOT_INCLUDED"));
    }

    #[test]
    fn test_scenario_5_catalog_order_preserved() {
        // 场景5: 候选池保持目录原始顺序
        let filter = PoolFilter::new();
        let catalog = vec![
            create_test_ingredient("rice", Category::Carbohydrate, 20),
            create_test_ingredient("chicken-breast", Category::Protein, 15),
            create_test_ingredient("broccoli", Category::Vegetable, 8),
        ];
        let prefs = create_test_prefs(&Category::ALL, &[]);

        let (pool, _) = filter.build_pool(&catalog, &prefs);

        let ids: Vec<&str> = pool.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["rice", "chicken-breast", "broccoli"]);
    }

    // ==========================================
    // 边界案例
    // ==========================================

    #[test]
    fn test_scenario_6_empty_catalog() {
        // 场景6: 空目录,候选池为空
        let filter = PoolFilter::new();
        let prefs = create_test_prefs(&Category::ALL, &[]);

        let (pool, filtered_out) = filter.build_pool(&[], &prefs);

        assert!(pool.is_empty());
        assert!(filtered_out.is_empty());
    }

    #[test]
    fn test_scenario_7_no_categories_included() {
        // 场景7: 包含类别集合为空,目录全部被过滤
        let filter = PoolFilter::new();
        let catalog = vec![
            create_test_ingredient("chicken-breast", Category::Protein, 15),
            create_test_ingredient("rice", Category::Carbohydrate, 20),
        ];
        let prefs = create_test_prefs(&[], &[]);

        let (pool, filtered_out) = filter.build_pool(&catalog, &prefs);

        assert!(pool.is_empty());
        assert_eq!(filtered_out.len(), 2);
    }
}
