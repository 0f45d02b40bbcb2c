// ==========================================
// 食材推荐系统 - 烹饪时长排序引擎
// ==========================================
// 职责: 候选池内按烹饪时长升序排序
// 输入: 候选池食材列表
// 输出: 排序后的食材列表或按类别分组的排序列表
// 红线: 稳定排序,同时长食材保持目录相对顺序
// ==========================================

use crate::domain::ingredient::Ingredient;
use crate::domain::types::Category;
use std::cmp::Ordering;
use std::collections::HashMap;

// ==========================================
// CookingTimeRanker - 烹饪时长排序引擎
// ==========================================
pub struct CookingTimeRanker {
    // 无状态引擎,不需要注入依赖
}

impl CookingTimeRanker {
    /// 构造函数
    ///
    /// # 返回
    /// 新的 CookingTimeRanker 实例
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 按烹饪时长升序排序
    ///
    /// 排序键:
    /// 1) cooking_time_min 升序 (快熟优先)
    ///
    /// 稳定排序: 同时长食材保持输入相对顺序不变。
    ///
    /// # 参数
    /// - `ingredients`: 待排序的食材列表
    ///
    /// # 返回
    /// 排序后的食材列表
    pub fn sort(&self, mut ingredients: Vec<Ingredient>) -> Vec<Ingredient> {
        ingredients.sort_by(|a, b| self.compare(a, b));
        ingredients
    }

    /// 按类别分组排序
    ///
    /// 每个类别内部按烹饪时长升序,未出现的类别不产生空组。
    ///
    /// # 参数
    /// - `ingredients`: 候选池食材列表
    ///
    /// # 返回
    /// HashMap<类别, 排序后的食材列表>
    pub fn rank_by_category(
        &self,
        ingredients: &[Ingredient],
    ) -> HashMap<Category, Vec<Ingredient>> {
        let mut grouped: HashMap<Category, Vec<Ingredient>> = HashMap::new();

        // 按类别分组
        for ingredient in ingredients {
            grouped
                .entry(ingredient.category)
                .or_insert_with(Vec::new)
                .push(ingredient.clone());
        }

        // 对每组排序
        for members in grouped.values_mut() {
            members.sort_by(|a, b| self.compare(a, b));
        }

        grouped
    }

    // ==========================================
    // 比较方法
    // ==========================================

    /// 比较两个食材的排序优先级
    ///
    /// # 返回
    /// Ordering::Less 表示 a 排在 b 前面
    fn compare(&self, a: &Ingredient, b: &Ingredient) -> Ordering {
        a.cooking_time_min.cmp(&b.cooking_time_min)
    }
}

impl Default for CookingTimeRanker {
    fn default() -> Self {
        Self::new()
    }
}
