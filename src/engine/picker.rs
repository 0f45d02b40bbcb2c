// ==========================================
// 食材推荐系统 - 目标配额选配引擎
// ==========================================
// 职责: 按配额表固定次序从各类别排序列表选取食材
// 输入: 按类别分组的排序列表 + 目标配额表
// 输出: 初选食材列表 + 选配说明
// 红线: 配额表外的类别永不入选; 各类别取排序后的前 N 项
// ==========================================

use crate::config::selection_policy::TargetCount;
use crate::domain::ingredient::Ingredient;
use crate::domain::types::Category;
use std::collections::HashMap;
use tracing::instrument;

// ==========================================
// TargetCountPicker - 目标配额选配引擎
// ==========================================
pub struct TargetCountPicker {
    // 无状态引擎,不需要注入依赖
}

impl TargetCountPicker {
    /// 构造函数
    ///
    /// # 返回
    /// 新的 TargetCountPicker 实例
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 按配额表执行初选
    ///
    /// 选配规则:
    /// 1) 按配额表次序逐类别选取,结果顺序 = 表内次序
    /// 2) 每类别取排序列表前 N 项 (列表已按烹饪时长升序)
    /// 3) 类别缺货时取到多少算多少,不跨类别补位
    /// 4) 表外类别 (如 Extra) 永不主动入选
    ///
    /// # 参数
    /// - `ranked`: 按类别分组的排序列表
    /// - `target_counts`: 目标配额表
    ///
    /// # 返回
    /// (初选食材列表, 逐类别选配说明)
    #[instrument(skip(self, ranked), fields(categories = target_counts.len()))]
    pub fn pick_initial(
        &self,
        ranked: &HashMap<Category, Vec<Ingredient>>,
        target_counts: &[TargetCount],
    ) -> (Vec<Ingredient>, Vec<String>) {
        let mut picks = Vec::new();
        let mut reasons = Vec::new();

        for target in target_counts {
            let available = ranked.get(&target.category).map(Vec::as_slice).unwrap_or(&[]);
            let taken = available.len().min(target.count);

            for ingredient in &available[..taken] {
                picks.push(ingredient.clone());
            }

            if taken == target.count {
                reasons.push(format!(
                    "PICKED_TO_TARGET: category={}, picked={}, target={}",
                    target.category, taken, target.count
                ));
            } else {
                reasons.push(format!(
                    "TARGET_SHORTFALL: category={}, picked={}, target={}",
                    target.category, taken, target.count
                ));
            }
        }

        (picks, reasons)
    }
}

impl Default for TargetCountPicker {
    fn default() -> Self {
        Self::new()
    }
}
