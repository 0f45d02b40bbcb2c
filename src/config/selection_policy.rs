// ==========================================
// 食材推荐系统 - 选配策略档案
// ==========================================
// 职责: 以显式有序表承载选配策略 (目标配额/修剪次序/结果说明)
// 红线: 出厂默认值就是对外承诺的行为,档案只用于实验性微调
// ==========================================

use crate::config::error::ConfigResult;
use crate::domain::recipe::{NOTE_ADJUSTED, NOTE_BALANCED};
use crate::domain::types::{Category, TrimStep};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// 目标配额表条目
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetCount {
    pub category: Category,
    pub count: usize,
}

// ==========================================
// SelectionPolicy - 选配策略档案
// ==========================================
// 用途: 选配引擎的策略输入,按字段缺省回落到出厂表
// 红线: 表是有序的,选配与修剪都按表内次序执行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionPolicy {
    /// 目标配额表 (选配次序 = 表内次序; Extra 不在表内,永不入选)
    #[serde(default = "default_target_counts")]
    pub target_counts: Vec<TargetCount>,

    /// 超时修剪步骤表 (执行次序 = 表内次序,末项为兜底循环)
    #[serde(default = "default_trim_steps")]
    pub trim_steps: Vec<TrimStep>,

    /// 未修剪结果说明
    #[serde(default = "default_note_balanced")]
    pub note_balanced: String,

    /// 已修剪结果说明
    #[serde(default = "default_note_adjusted")]
    pub note_adjusted: String,
}

fn default_target_counts() -> Vec<TargetCount> {
    vec![
        TargetCount { category: Category::Protein, count: 1 },
        TargetCount { category: Category::Carbohydrate, count: 1 },
        TargetCount { category: Category::Vegetable, count: 2 },
        TargetCount { category: Category::Fat, count: 1 },
    ]
}

fn default_trim_steps() -> Vec<TrimStep> {
    vec![
        TrimStep::DropCategoryFirstMatch(Category::Extra),
        TrimStep::DropCategoryFirstMatch(Category::Vegetable),
        TrimStep::DropCategoryFirstMatch(Category::Carbohydrate),
        TrimStep::DropLargestTime,
    ]
}

fn default_note_balanced() -> String {
    NOTE_BALANCED.to_string()
}

fn default_note_adjusted() -> String {
    NOTE_ADJUSTED.to_string()
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self {
            target_counts: default_target_counts(),
            trim_steps: default_trim_steps(),
            note_balanced: default_note_balanced(),
            note_adjusted: default_note_adjusted(),
        }
    }
}

impl SelectionPolicy {
    /// 默认档案路径: <平台配置目录>/ingredient-selector/selection_policy.json
    pub fn default_profile_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ingredient-selector").join("selection_policy.json"))
    }

    /// 从指定文件严格装载 (读取/解析失败都上抛)
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path)?;
        let policy: SelectionPolicy = serde_json::from_str(&content)?;
        debug!(path = %path.display(), "选配策略档案装载成功");
        Ok(policy)
    }

    /// 装载策略档案
    ///
    /// - 显式指定路径: 严格装载,失败上抛
    /// - 未指定: 尝试默认路径,文件缺失或损坏都静默回落出厂默认
    pub fn load_or_default(explicit_path: Option<&Path>) -> ConfigResult<Self> {
        if let Some(path) = explicit_path {
            return Self::load_from_file(path);
        }

        let Some(default_path) = Self::default_profile_path() else {
            debug!("无平台配置目录,使用出厂默认策略");
            return Ok(Self::default());
        };

        if !default_path.exists() {
            debug!(path = %default_path.display(), "默认档案不存在,使用出厂默认策略");
            return Ok(Self::default());
        }

        match Self::load_from_file(&default_path) {
            Ok(policy) => Ok(policy),
            Err(e) => {
                warn!(path = %default_path.display(), error = %e, "默认档案装载失败,回落出厂默认策略");
                Ok(Self::default())
            }
        }
    }
}
