// ==========================================
// 食材推荐系统 - 食材领域模型
// ==========================================
// 职责: 定义目录食材记录与目录装载的中间结构
// 红线: 目录数据只读,装载后不可变更
// ==========================================

use crate::domain::types::Category;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// Ingredient - 食材目录记录
// ==========================================
// 红线: 进程/目录装载时创建一次,运行期永不修改
// 用途: 目录层写入,选配引擎只读
// 序列化: 字段名与历史前端载荷一致 (camelCase)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    // ===== 主键 =====
    pub id: String,   // 食材唯一标识 (kebab-case 稳定字符串)

    // ===== 基础信息 =====
    pub name: String,       // 展示名称
    pub category: Category, // 类别 (五类封闭集合)

    // ===== 时间维度 =====
    #[serde(rename = "cookingTime")]
    pub cooking_time_min: u32, // 烹饪时间 (分钟,非负整数)

    // ===== 营养维度 (每100克) =====
    // 缺省字段按零参与汇总,不报错
    #[serde(default)]
    pub calories: Option<f64>, // 热量 (kcal)
    #[serde(default, rename = "protein")]
    pub protein_g: Option<f64>, // 蛋白质 (克)
    #[serde(default, rename = "carbohydrates")]
    pub carbohydrates_g: Option<f64>, // 碳水化合物 (克)
    #[serde(default, rename = "fat")]
    pub fat_g: Option<f64>, // 脂肪 (克)
}

impl Ingredient {
    /// 热量取值,缺省按零计
    pub fn calories_or_zero(&self) -> f64 {
        self.calories.unwrap_or(0.0)
    }

    /// 蛋白质取值,缺省按零计
    pub fn protein_or_zero(&self) -> f64 {
        self.protein_g.unwrap_or(0.0)
    }

    /// 碳水取值,缺省按零计
    pub fn carbohydrates_or_zero(&self) -> f64 {
        self.carbohydrates_g.unwrap_or(0.0)
    }

    /// 脂肪取值,缺省按零计
    pub fn fat_or_zero(&self) -> f64 {
        self.fat_g.unwrap_or(0.0)
    }
}

// ==========================================
// RawIngredientRecord - 目录装载中间结构体
// ==========================================
// 用途: 装载管道中间产物 (文件解析 → 清洗 → Ingredient)
// 生命周期: 仅在装载流程内
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawIngredientRecord {
    // 源字段 (未清洗,保留原始字符串)
    pub id: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub cooking_time_min: Option<String>,
    pub calories: Option<String>,
    pub protein_g: Option<String>,
    pub carbohydrates_g: Option<String>,
    pub fat_g: Option<String>,

    // 元信息
    #[serde(skip)]
    pub row_number: usize, // 原始文件行号 (用于跳过报告)
}

// ==========================================
// SkippedRow - 被跳过的目录行
// ==========================================
// 用途: 记录清洗失败的行,装载不因单行失败而中断
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedRow {
    pub row_number: usize,           // 原始文件行号
    pub ingredient_id: Option<String>, // 食材标识 (如果可解析)
    pub reason: String,              // 跳过原因
}

// ==========================================
// CatalogLoadResult - 目录装载结果
// ==========================================
// 用途: 装载接口返回值
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogLoadResult {
    pub source: String,              // 数据来源 (文件路径或 "builtin")
    pub total_rows: usize,           // 总行数
    pub ingredients: Vec<Ingredient>, // 装载成功的目录 (次序与源一致)
    pub skipped: Vec<SkippedRow>,    // 跳过行明细
    pub loaded_at: DateTime<Utc>,    // 装载时间
}

impl CatalogLoadResult {
    /// 装载成功行数
    pub fn loaded_count(&self) -> usize {
        self.ingredients.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_ingredient(id: &str, category: Category, cooking_time_min: u32) -> Ingredient {
        Ingredient {
            id: id.to_string(),
            name: id.to_string(),
            category,
            cooking_time_min,
            calories: Some(100.0),
            protein_g: Some(10.0),
            carbohydrates_g: Some(5.0),
            fat_g: Some(2.0),
        }
    }

    #[test]
    fn test_missing_macros_count_as_zero() {
        let mut ing = create_test_ingredient("tofu", Category::Protein, 8);
        ing.calories = None;
        ing.fat_g = None;
        assert_eq!(ing.calories_or_zero(), 0.0);
        assert_eq!(ing.fat_or_zero(), 0.0);
        assert_eq!(ing.protein_or_zero(), 10.0);
    }

    #[test]
    fn test_serde_wire_names_match_legacy_payload() {
        // 历史载荷字段: cookingTime/calories/protein/carbohydrates/fat
        let json = r#"{
            "id": "chicken-breast",
            "name": "Chicken Breast",
            "category": "Protein",
            "cookingTime": 18,
            "calories": 165,
            "protein": 31,
            "carbohydrates": 0,
            "fat": 3.6
        }"#;
        let ing: Ingredient = serde_json::from_str(json).unwrap();
        assert_eq!(ing.id, "chicken-breast");
        assert_eq!(ing.category, Category::Protein);
        assert_eq!(ing.cooking_time_min, 18);
        assert_eq!(ing.protein_or_zero(), 31.0);
    }

    #[test]
    fn test_serde_missing_macro_fields_tolerated() {
        // 旧载荷可能缺营养字段,反序列化不报错
        let json = r#"{
            "id": "parsley",
            "name": "Parsley",
            "category": "Extra",
            "cookingTime": 0
        }"#;
        let ing: Ingredient = serde_json::from_str(json).unwrap();
        assert_eq!(ing.calories, None);
        assert_eq!(ing.calories_or_zero(), 0.0);
    }
}
