// ==========================================
// 食材推荐系统 - 选配结果领域模型
// ==========================================
// 职责: 定义每次请求重算的结果值对象与旧载荷兼容转换
// 红线: 结果没有身份标识,不持久化,不可被界面状态反向污染
// ==========================================

use crate::domain::ingredient::Ingredient;
use serde::{Deserialize, Serialize};

/// 未触发修剪时的结果说明 (对外契约值,不翻译)
pub const NOTE_BALANCED: &str = "Balanced picks under your time cap.";

/// 触发修剪后的结果说明 (对外契约值,不翻译)
pub const NOTE_ADJUSTED: &str = "Adjusted to fit your time limit.";

// ==========================================
// RecipeResult - 选配结果
// ==========================================
// 红线: 五项汇总必须恒等于 selected_ingredients 对应字段之和
// 用途: 选配引擎输出,展示层只读
// 序列化: 字段名与历史前端载荷一致 (camelCase)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeResult {
    // ===== 选中清单 (选配插入次序,按类别分组) =====
    #[serde(rename = "selectedIngredients")]
    pub selected_ingredients: Vec<Ingredient>,

    // ===== 营养汇总 =====
    #[serde(rename = "totalCalories")]
    pub total_calories: f64, // 热量合计 (kcal)
    #[serde(rename = "totalProtein")]
    pub total_protein_g: f64, // 蛋白质合计 (克)
    #[serde(rename = "totalCarbohydrates")]
    pub total_carbohydrates_g: f64, // 碳水合计 (克)
    #[serde(rename = "totalFat")]
    pub total_fat_g: f64, // 脂肪合计 (克)

    // ===== 时间汇总 =====
    #[serde(rename = "totalCookingTime")]
    pub total_cooking_time_min: u32, // 烹饪时间合计 (分钟)

    // ===== 结果说明 =====
    #[serde(default)]
    pub note: String, // 人类可读说明 (NOTE_BALANCED / NOTE_ADJUSTED)
}

impl RecipeResult {
    /// 空结果: 空清单 + 全零汇总
    pub fn empty() -> Self {
        Self {
            selected_ingredients: Vec::new(),
            total_calories: 0.0,
            total_protein_g: 0.0,
            total_carbohydrates_g: 0.0,
            total_fat_g: 0.0,
            total_cooking_time_min: 0,
            note: String::new(),
        }
    }

    /// 从选中清单构造结果,汇总按字段逐项求和
    ///
    /// 缺省营养字段按零参与求和。这是唯一的汇总口径,
    /// 旧载荷转换同样经由此处重算。
    pub fn from_picks(picks: Vec<Ingredient>, note: impl Into<String>) -> Self {
        let total_calories = picks.iter().map(|i| i.calories_or_zero()).sum();
        let total_protein_g = picks.iter().map(|i| i.protein_or_zero()).sum();
        let total_carbohydrates_g = picks.iter().map(|i| i.carbohydrates_or_zero()).sum();
        let total_fat_g = picks.iter().map(|i| i.fat_or_zero()).sum();
        let total_cooking_time_min = picks.iter().map(|i| i.cooking_time_min).sum();

        Self {
            selected_ingredients: picks,
            total_calories,
            total_protein_g,
            total_carbohydrates_g,
            total_fat_g,
            total_cooking_time_min,
            note: note.into(),
        }
    }

    /// 旧结果载荷转换: 营养汇总从 picks 独立重算
    ///
    /// 旧载荷若带 totalTime 则沿用,缺失时与营养项一样重算;
    /// 说明缺失时置空,由展示层决定呈现。
    pub fn from_legacy(legacy: LegacyRecipeResult) -> Self {
        let carried_time = legacy.total_time_min;
        let note = legacy.note.unwrap_or_default();
        let mut result = Self::from_picks(legacy.picks, note);
        if let Some(time) = carried_time {
            result.total_cooking_time_min = time;
        }
        result
    }

    /// 是否为空结果 ("没有组合满足设置")
    pub fn is_empty(&self) -> bool {
        self.selected_ingredients.is_empty()
    }
}

// ==========================================
// LegacyRecipeResult - 旧结果载荷
// ==========================================
// 用途: 兼容旧版 { picks, totalTime } 形态的调用方载荷
// 生命周期: 仅在转换入口出现,转换后即废弃
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyRecipeResult {
    #[serde(default)]
    pub picks: Vec<Ingredient>,
    #[serde(default, rename = "totalTime")]
    pub total_time_min: Option<u32>,
    #[serde(default)]
    pub note: Option<String>,
}
