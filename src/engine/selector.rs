// ==========================================
// 食材推荐系统 - 选配编排器
// ==========================================
// 用途: 协调过滤/排序/选配/修剪/汇总五段流程
// 红线: 纯计算编排,不做 I/O; 同输入必产出同结果
// ==========================================

use crate::config::selection_policy::SelectionPolicy;
use crate::domain::ingredient::Ingredient;
use crate::domain::preference::Preferences;
use crate::domain::recipe::RecipeResult;
use crate::engine::{
    CategoryCount, CookingTimeRanker, PoolFilter, SelectionSummaryEngine, TargetCountPicker,
    TimeBudgetTrimmer, TrimAction,
};
use serde::Serialize;
use tracing::{debug, info};

// ==========================================
// SelectionReport - 选配过程报告
// ==========================================
// 用途: 解释本次选配做了什么,仅派生数据,不影响结果本身

/// 被过滤食材条目
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilteredEntry {
    pub ingredient_id: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionReport {
    // PoolFilter 输出
    pub pool_size: usize,
    pub filtered_out: Vec<FilteredEntry>,

    // Picker 输出
    pub pick_reasons: Vec<String>,
    pub initial_total_time_min: u32,

    // Trimmer 输出
    pub trimmed: bool,
    pub trim_actions: Vec<TrimAction>,
    pub final_total_time_min: u32,

    // Summary 输出
    pub category_counts: Vec<CategoryCount>,
}

// ==========================================
// Selector - 选配编排器
// ==========================================

pub struct Selector {
    filter: PoolFilter,
    ranker: CookingTimeRanker,
    picker: TargetCountPicker,
    trimmer: TimeBudgetTrimmer,
    summary: SelectionSummaryEngine,
    policy: SelectionPolicy,
}

impl Selector {
    /// 创建使用出厂策略的编排器实例
    pub fn new() -> Self {
        Self::with_policy(SelectionPolicy::default())
    }

    /// 创建使用指定策略档案的编排器实例
    ///
    /// # 参数
    /// - policy: 选配策略档案
    pub fn with_policy(policy: SelectionPolicy) -> Self {
        Self {
            filter: PoolFilter::new(),
            ranker: CookingTimeRanker::new(),
            picker: TargetCountPicker::new(),
            trimmer: TimeBudgetTrimmer::new(),
            summary: SelectionSummaryEngine::new(),
            policy,
        }
    }

    /// 执行完整选配流程
    ///
    /// # 参数
    /// - catalog: 食材目录 (只读)
    /// - prefs: 用户偏好
    ///
    /// # 返回
    /// 推荐结果
    pub fn select(&self, catalog: &[Ingredient], prefs: &Preferences) -> RecipeResult {
        let (result, _) = self.select_with_report(catalog, prefs);
        result
    }

    /// 执行完整选配流程并返回过程报告
    ///
    /// 与 select 对同一输入产出完全相同的结果,报告只是附加解释。
    ///
    /// # 参数
    /// - catalog: 食材目录 (只读)
    /// - prefs: 用户偏好
    ///
    /// # 返回
    /// (推荐结果, 选配过程报告)
    pub fn select_with_report(
        &self,
        catalog: &[Ingredient],
        prefs: &Preferences,
    ) -> (RecipeResult, SelectionReport) {
        info!(
            catalog_count = catalog.len(),
            max_time_min = prefs.max_cooking_time_min,
            include_count = prefs.include_categories.len(),
            exclude_count = prefs.exclude_ingredients.len(),
            "开始执行选配流程"
        );

        // ==========================================
        // 步骤1: PoolFilter - 候选池过滤
        // ==========================================
        debug!("步骤1: 执行候选池过滤");

        let (pool, filtered_out) = self.filter.build_pool(catalog, prefs);

        info!(
            pool_size = pool.len(),
            filtered_count = filtered_out.len(),
            "候选池过滤完成"
        );

        // ==========================================
        // 步骤2: CookingTimeRanker - 类别内排序
        // ==========================================
        debug!("步骤2: 执行类别内排序");

        let ranked = self.ranker.rank_by_category(&pool);

        info!(categories = ranked.len(), "类别内排序完成");

        // ==========================================
        // 步骤3: TargetCountPicker - 目标配额选配
        // ==========================================
        debug!("步骤3: 执行目标配额选配");

        let (picks, pick_reasons) =
            self.picker.pick_initial(&ranked, &self.policy.target_counts);
        let initial_total_time_min = TimeBudgetTrimmer::total_time_min(&picks);

        info!(
            picked_count = picks.len(),
            initial_total_time_min,
            "目标配额选配完成"
        );

        // ==========================================
        // 步骤4: TimeBudgetTrimmer - 时长预算修剪
        // ==========================================
        debug!("步骤4: 执行时长预算修剪");

        let (final_picks, trim_actions, trimmed) = self.trimmer.trim_to_budget(
            picks,
            prefs.max_cooking_time_min,
            &self.policy.trim_steps,
        );
        let final_total_time_min = TimeBudgetTrimmer::total_time_min(&final_picks);

        info!(
            trimmed,
            removed_count = trim_actions.len(),
            final_total_time_min,
            "时长预算修剪完成"
        );

        // ==========================================
        // 步骤5: SelectionSummaryEngine - 结果汇总
        // ==========================================
        debug!("步骤5: 执行结果汇总");

        let category_counts = self.summary.category_counts(&final_picks);
        let result = self.summary.build(final_picks, trimmed, &self.policy);

        info!(
            selected_count = result.selected_ingredients.len(),
            note = %result.note,
            "结果汇总完成"
        );

        // ==========================================
        // 返回结果
        // ==========================================

        let report = SelectionReport {
            pool_size: pool.len(),
            filtered_out: filtered_out
                .into_iter()
                .map(|(ingredient, reason)| FilteredEntry {
                    ingredient_id: ingredient.id,
                    reason,
                })
                .collect(),
            pick_reasons,
            initial_total_time_min,
            trimmed,
            trim_actions,
            final_total_time_min,
            category_counts,
        };

        (result, report)
    }

    /// 当前生效的策略档案
    pub fn policy(&self) -> &SelectionPolicy {
        &self.policy
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::new()
    }
}
