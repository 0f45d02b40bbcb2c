// ==========================================
// 食材推荐系统 - 目录装载器
// ==========================================
// 职责: 从 CSV 文件装载食材目录
// 流程: 解析 → 清洗 → 去重
// 红线: 单行失败只跳过并记录原因,不中断整体装载
// ==========================================

use crate::domain::ingredient::{CatalogLoadResult, Ingredient, RawIngredientRecord, SkippedRow};
use crate::domain::types::Category;
use chrono::Utc;
use csv::ReaderBuilder;
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;
use thiserror::Error;
use tracing::{info, instrument, warn};

/// 目录装载错误类型
#[derive(Error, Debug)]
pub enum CatalogError {
    // ===== 文件相关错误 =====
    #[error("目录文件不存在: {0}")]
    FileNotFound(String),

    #[error("目录文件格式不支持: {0}（仅支持 .csv）")]
    UnsupportedFormat(String),

    #[error("目录文件读取失败: {0}")]
    FileRead(String),

    #[error("CSV 解析失败: {0}")]
    CsvParse(String),

    // ===== 表头错误 =====
    #[error("表头缺失必需列: {0}")]
    MissingColumn(String),
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::FileRead(err.to_string())
    }
}

impl From<csv::Error> for CatalogError {
    fn from(err: csv::Error) -> Self {
        CatalogError::CsvParse(err.to_string())
    }
}

/// Result 类型别名
pub type CatalogResult<T> = Result<T, CatalogError>;

/// 必需列 (缺任一列整体拒绝装载)
const REQUIRED_COLUMNS: [&str; 4] = ["id", "name", "category", "cooking_time_min"];

// ==========================================
// CatalogLoader - 目录装载器
// ==========================================
pub struct CatalogLoader;

impl CatalogLoader {
    /// 创建新的目录装载器
    pub fn new() -> Self {
        Self
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 从 CSV 文件装载目录
    ///
    /// 表头: id, name, category, cooking_time_min, calories,
    /// protein_g, carbohydrates_g, fat_g (营养列可缺省)。
    /// 清洗失败的行跳过并记录原因;同 id 首行生效,后续行跳过。
    ///
    /// # 参数
    /// - `path`: CSV 文件路径
    ///
    /// # 返回
    /// 装载结果 (成功目录 + 跳过明细 + 装载时间)
    #[instrument(skip(self))]
    pub fn load_from_csv(&self, path: &Path) -> CatalogResult<CatalogLoadResult> {
        // 1. 解析原始行
        let raw_records = self.parse_to_raw_records(path)?;
        let total_rows = raw_records.len();

        // 2. 清洗 + 去重 (同 id 首行生效)
        let mut ingredients: Vec<Ingredient> = Vec::new();
        let mut skipped: Vec<SkippedRow> = Vec::new();
        let mut seen_ids: HashSet<String> = HashSet::new();

        for raw in raw_records {
            match self.clean_record(&raw) {
                Ok(ingredient) => {
                    if !seen_ids.insert(ingredient.id.clone()) {
                        warn!(
                            row = raw.row_number,
                            ingredient_id = %ingredient.id,
                            "目录行重复,首行生效"
                        );
                        skipped.push(SkippedRow {
                            row_number: raw.row_number,
                            ingredient_id: Some(ingredient.id),
                            reason: "DUPLICATE_ID: 同标识已在先前行装载".to_string(),
                        });
                        continue;
                    }
                    ingredients.push(ingredient);
                }
                Err(reason) => {
                    warn!(row = raw.row_number, reason = %reason, "目录行清洗失败,跳过");
                    skipped.push(SkippedRow {
                        row_number: raw.row_number,
                        ingredient_id: self.normalize_null(raw.id.as_ref()),
                        reason,
                    });
                }
            }
        }

        info!(
            source = %path.display(),
            total_rows,
            loaded_count = ingredients.len(),
            skipped_count = skipped.len(),
            "目录装载完成"
        );

        Ok(CatalogLoadResult {
            source: path.display().to_string(),
            total_rows,
            ingredients,
            skipped,
            loaded_at: Utc::now(),
        })
    }

    // ==========================================
    // 解析
    // ==========================================

    /// 解析 CSV 为原始记录列表
    ///
    /// 完全空白的行直接跳过,不进入清洗阶段。
    fn parse_to_raw_records(&self, path: &Path) -> CatalogResult<Vec<RawIngredientRecord>> {
        // 检查文件存在
        if !path.exists() {
            return Err(CatalogError::FileNotFound(path.display().to_string()));
        }

        // 检查扩展名
        if let Some(ext) = path.extension() {
            if ext.to_string_lossy().to_lowercase() != "csv" {
                return Err(CatalogError::UnsupportedFormat(
                    ext.to_string_lossy().to_string(),
                ));
            }
        }

        // 打开 CSV 文件
        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        // 读取表头并校验必需列
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        for required in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == required) {
                return Err(CatalogError::MissingColumn(required.to_string()));
            }
        }

        let index_of = |name: &str| headers.iter().position(|h| h == name);
        let idx_id = index_of("id");
        let idx_name = index_of("name");
        let idx_category = index_of("category");
        let idx_cooking_time = index_of("cooking_time_min");
        let idx_calories = index_of("calories");
        let idx_protein = index_of("protein_g");
        let idx_carbohydrates = index_of("carbohydrates_g");
        let idx_fat = index_of("fat_g");

        // 读取所有数据行
        let mut records = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            let record = result?;
            let field = |idx: Option<usize>| -> Option<String> {
                idx.and_then(|i| record.get(i)).map(|v| v.trim().to_string())
            };

            let raw = RawIngredientRecord {
                id: field(idx_id),
                name: field(idx_name),
                category: field(idx_category),
                cooking_time_min: field(idx_cooking_time),
                calories: field(idx_calories),
                protein_g: field(idx_protein),
                carbohydrates_g: field(idx_carbohydrates),
                fat_g: field(idx_fat),
                row_number: row_idx + 2, // 表头占第1行
            };

            // 跳过完全空白的行
            let all_blank = [
                &raw.id,
                &raw.name,
                &raw.category,
                &raw.cooking_time_min,
                &raw.calories,
                &raw.protein_g,
                &raw.carbohydrates_g,
                &raw.fat_g,
            ]
            .iter()
            .all(|f| f.as_deref().map_or(true, |v| v.is_empty()));
            if all_blank {
                continue;
            }

            records.push(raw);
        }

        Ok(records)
    }

    // ==========================================
    // 清洗
    // ==========================================

    /// 清洗单行原始记录为 Ingredient
    ///
    /// # 返回
    /// - `Ok(Ingredient)`: 清洗成功
    /// - `Err(reason)`: 清洗失败原因 (调用方记入跳过明细)
    fn clean_record(&self, raw: &RawIngredientRecord) -> Result<Ingredient, String> {
        let id = self
            .normalize_null(raw.id.as_ref())
            .ok_or_else(|| "MISSING_FIELD: id".to_string())?;
        let name = self
            .normalize_null(raw.name.as_ref())
            .ok_or_else(|| "MISSING_FIELD: name".to_string())?;

        let category_raw = self
            .normalize_null(raw.category.as_ref())
            .ok_or_else(|| "MISSING_FIELD: category".to_string())?;
        let category = Category::from_str(&category_raw)
            .ok_or_else(|| format!("INVALID_CATEGORY: value={}", category_raw))?;

        let time_raw = self
            .normalize_null(raw.cooking_time_min.as_ref())
            .ok_or_else(|| "MISSING_FIELD: cooking_time_min".to_string())?;
        let cooking_time_min: u32 = time_raw
            .parse()
            .map_err(|_| format!("INVALID_COOKING_TIME: value={}", time_raw))?;

        Ok(Ingredient {
            id,
            name,
            category,
            cooking_time_min,
            calories: self.parse_optional_number("calories", raw.calories.as_ref())?,
            protein_g: self.parse_optional_number("protein_g", raw.protein_g.as_ref())?,
            carbohydrates_g: self
                .parse_optional_number("carbohydrates_g", raw.carbohydrates_g.as_ref())?,
            fat_g: self.parse_optional_number("fat_g", raw.fat_g.as_ref())?,
        })
    }

    /// 空白标准化: 纯空白与空串视为缺省
    fn normalize_null(&self, value: Option<&String>) -> Option<String> {
        value.and_then(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
    }

    /// 解析可缺省营养数值 (缺省合法,非数值报错)
    fn parse_optional_number(
        &self,
        field: &str,
        value: Option<&String>,
    ) -> Result<Option<f64>, String> {
        match self.normalize_null(value) {
            None => Ok(None),
            Some(v) => v
                .parse::<f64>()
                .map(Some)
                .map_err(|_| format!("INVALID_NUMBER: field={}, value={}", field, v)),
        }
    }
}

impl Default for CatalogLoader {
    fn default() -> Self {
        Self::new()
    }
}
