// ==========================================
// 食材推荐系统 - 时长预算修剪引擎
// ==========================================
// 职责: 初选结果超出时长预算时按步骤表逐项修剪
// 输入: 初选食材列表 + 时长预算 + 修剪步骤表
// 输出: 修剪后列表 + 修剪动作记录 + 是否触发修剪
// 红线: 比较一律用严格大于; 类别修剪取选取顺序首个命中,
//       兜底循环取严格最大时长且并列时首个命中
// ==========================================

use crate::domain::ingredient::Ingredient;
use crate::domain::types::TrimStep;
use serde::Serialize;
use tracing::instrument;

/// 单次修剪动作记录
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrimAction {
    /// 触发本次移除的步骤
    pub step: TrimStep,
    /// 被移除食材 id
    pub removed_id: String,
    /// 被移除食材的烹饪时长(分钟)
    pub removed_time_min: u32,
    /// 移除后的总时长(分钟)
    pub total_after_min: u32,
}

// ==========================================
// TimeBudgetTrimmer - 时长预算修剪引擎
// ==========================================
pub struct TimeBudgetTrimmer {
    // 无状态引擎,不需要注入依赖
}

impl TimeBudgetTrimmer {
    /// 构造函数
    ///
    /// # 返回
    /// 新的 TimeBudgetTrimmer 实例
    pub fn new() -> Self {
        Self {}
    }

    /// 汇总烹饪总时长(分钟)
    pub fn total_time_min(picks: &[Ingredient]) -> u32 {
        picks.iter().map(|i| i.cooking_time_min).sum()
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 按步骤表修剪至预算内
    ///
    /// 修剪规则:
    /// 1) 总时长未严格超出预算时不做任何修剪
    /// 2) 超出后按步骤表次序执行,每步执行前先复查是否已达标
    /// 3) DropCategoryFirstMatch: 移除该类别在选取顺序中的首个食材,
    ///    类别缺席时静默跳过,不记录动作
    /// 4) DropLargestTime: 循环移除严格最大时长的食材 (并列取首个),
    ///    直到达标或列表为空
    ///
    /// # 参数
    /// - `picks`: 初选食材列表 (选取顺序)
    /// - `budget_min`: 时长预算(分钟)
    /// - `trim_steps`: 修剪步骤表
    ///
    /// # 返回
    /// (修剪后列表, 修剪动作记录, 是否触发修剪)
    #[instrument(skip(self, picks, trim_steps), fields(picks = picks.len(), budget_min))]
    pub fn trim_to_budget(
        &self,
        mut picks: Vec<Ingredient>,
        budget_min: u32,
        trim_steps: &[TrimStep],
    ) -> (Vec<Ingredient>, Vec<TrimAction>, bool) {
        let mut total = Self::total_time_min(&picks);
        if total <= budget_min {
            return (picks, Vec::new(), false);
        }

        let mut actions = Vec::new();

        for step in trim_steps {
            if total <= budget_min {
                break;
            }
            match step {
                TrimStep::DropCategoryFirstMatch(category) => {
                    if let Some(idx) = picks.iter().position(|i| i.category == *category) {
                        let removed = picks.remove(idx);
                        total = Self::total_time_min(&picks);
                        actions.push(TrimAction {
                            step: *step,
                            removed_id: removed.id,
                            removed_time_min: removed.cooking_time_min,
                            total_after_min: total,
                        });
                    }
                }
                TrimStep::DropLargestTime => {
                    while total > budget_min && !picks.is_empty() {
                        let mut max_idx = 0;
                        for i in 1..picks.len() {
                            if picks[i].cooking_time_min > picks[max_idx].cooking_time_min {
                                max_idx = i;
                            }
                        }
                        let removed = picks.remove(max_idx);
                        total = Self::total_time_min(&picks);
                        actions.push(TrimAction {
                            step: *step,
                            removed_id: removed.id,
                            removed_time_min: removed.cooking_time_min,
                            total_after_min: total,
                        });
                    }
                }
            }
        }

        (picks, actions, true)
    }
}

impl Default for TimeBudgetTrimmer {
    fn default() -> Self {
        Self::new()
    }
}
