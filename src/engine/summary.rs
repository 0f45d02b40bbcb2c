// ==========================================
// 食材推荐系统 - 结果汇总引擎
// ==========================================
// 职责: 从最终选中列表组装推荐结果与选配摘要
// 输入: 修剪后的选中列表 + 修剪标记 + 选配策略
// 输出: RecipeResult (五项合计 + 说明) 与类别分布/可读描述
// ==========================================

use crate::config::selection_policy::SelectionPolicy;
use crate::domain::ingredient::Ingredient;
use crate::domain::recipe::RecipeResult;
use crate::domain::types::Category;
use serde::Serialize;

/// 类别分布条目
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

// ==========================================
// SelectionSummaryEngine - 结果汇总引擎
// ==========================================
// 红线: 无状态引擎,所有方法都是纯函数
pub struct SelectionSummaryEngine;

impl SelectionSummaryEngine {
    /// 创建新的结果汇总引擎
    pub fn new() -> Self {
        Self
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 组装推荐结果
    ///
    /// 合计为选中列表逐项求和 (缺失营养字段按 0 计),
    /// 说明按修剪标记从策略档案取值: 已修剪取 note_adjusted,
    /// 未修剪取 note_balanced。空列表合计全为 0。
    ///
    /// # 参数
    /// - `picks`: 最终选中列表 (保持选取顺序)
    /// - `trimmed`: 本次选配是否触发过修剪
    /// - `policy`: 选配策略档案
    ///
    /// # 返回
    /// 推荐结果
    pub fn build(
        &self,
        picks: Vec<Ingredient>,
        trimmed: bool,
        policy: &SelectionPolicy,
    ) -> RecipeResult {
        let note = self.resolve_note(trimmed, policy);
        RecipeResult::from_picks(picks, note)
    }

    /// 解析结果说明
    pub fn resolve_note(&self, trimmed: bool, policy: &SelectionPolicy) -> String {
        if trimmed {
            policy.note_adjusted.clone()
        } else {
            policy.note_balanced.clone()
        }
    }

    /// 统计类别分布
    ///
    /// 五大类别全部列出 (含 0 计数),次序固定为类别声明次序。
    ///
    /// # 参数
    /// - `picks`: 选中列表
    ///
    /// # 返回
    /// 类别分布表
    pub fn category_counts(&self, picks: &[Ingredient]) -> Vec<CategoryCount> {
        Category::ALL
            .iter()
            .map(|&category| CategoryCount {
                category,
                count: picks.iter().filter(|i| i.category == category).count(),
            })
            .collect()
    }

    /// 生成可读描述行
    ///
    /// 供 CLI 文本输出使用: 逐项列出选中食材,随后是合计行与说明行。
    ///
    /// # 参数
    /// - `result`: 推荐结果
    ///
    /// # 返回
    /// 可读文本行列表
    pub fn describe(&self, result: &RecipeResult) -> Vec<String> {
        let mut lines = Vec::new();

        if result.is_empty() {
            lines.push("(no ingredients selected)".to_string());
        } else {
            for ingredient in &result.selected_ingredients {
                lines.push(format!(
                    "- {} [{}] {} min",
                    ingredient.name, ingredient.category, ingredient.cooking_time_min
                ));
            }
        }

        lines.push(format!(
            "total: {} min, {:.1} kcal, protein {:.1} g, carbohydrates {:.1} g, fat {:.1} g",
            result.total_cooking_time_min,
            result.total_calories,
            result.total_protein_g,
            result.total_carbohydrates_g,
            result.total_fat_g
        ));
        lines.push(format!("note: {}", result.note));

        lines
    }
}

impl Default for SelectionSummaryEngine {
    fn default() -> Self {
        Self::new()
    }
}
