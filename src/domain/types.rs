// ==========================================
// 食材推荐系统 - 领域类型定义
// ==========================================
// 职责: 定义封闭的食材类别体系与修剪动作词汇
// 红线: 类别集合是封闭的,不允许运行期扩展
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 食材类别 (Ingredient Category)
// ==========================================
// 红线: 五类封闭集合,选配目标只覆盖前四类
// 序列化格式: PascalCase (与历史前端载荷一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Protein,      // 蛋白质
    Carbohydrate, // 碳水
    Vegetable,    // 蔬菜
    Fat,          // 脂肪
    Extra,        // 点缀 (香料/装饰,不参与目标选配)
}

impl Category {
    /// 全部类别,次序固定 (界面类别开关按此次序渲染)
    pub const ALL: [Category; 5] = [
        Category::Protein,
        Category::Carbohydrate,
        Category::Vegetable,
        Category::Fat,
        Category::Extra,
    ];

    /// 从字符串解析类别 (容忍大小写)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "protein" => Some(Category::Protein),
            "carbohydrate" => Some(Category::Carbohydrate),
            "vegetable" => Some(Category::Vegetable),
            "fat" => Some(Category::Fat),
            "extra" => Some(Category::Extra),
            _ => None,
        }
    }

    /// 转换为载荷字符串
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Protein => "Protein",
            Category::Carbohydrate => "Carbohydrate",
            Category::Vegetable => "Vegetable",
            Category::Fat => "Fat",
            Category::Extra => "Extra",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 修剪动作 (Trim Step)
// ==========================================
// 用途: 选配策略中的超时修剪步骤词汇
// 红线: 按类别修剪移除当前选中序列里第一个匹配项,不是最慢项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrimStep {
    /// 移除指定类别的第一个匹配项 (至多一项)
    DropCategoryFirstMatch(Category),
    /// 兜底循环: 反复移除烹饪时间最大的一项
    DropLargestTime,
}

impl fmt::Display for TrimStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrimStep::DropCategoryFirstMatch(cat) => {
                write!(f, "DROP_CATEGORY_FIRST_MATCH({})", cat)
            }
            TrimStep::DropLargestTime => write!(f, "DROP_LARGEST_TIME"),
        }
    }
}
