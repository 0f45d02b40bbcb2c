// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use ingredient_selector::domain::types::Category;
use ingredient_selector::domain::{Ingredient, Preferences};
use std::collections::HashSet;

// ==========================================
// Ingredient 构建器
// ==========================================

pub struct IngredientBuilder {
    id: String,
    name: Option<String>,
    category: Category,
    cooking_time_min: u32,
    calories: Option<f64>,
    protein_g: Option<f64>,
    carbohydrates_g: Option<f64>,
    fat_g: Option<f64>,
}

impl IngredientBuilder {
    pub fn new(id: &str, category: Category) -> Self {
        Self {
            id: id.to_string(),
            name: None,
            category,
            cooking_time_min: 0,
            calories: None,
            protein_g: None,
            carbohydrates_g: None,
            fat_g: None,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn cooking_time(mut self, minutes: u32) -> Self {
        self.cooking_time_min = minutes;
        self
    }

    pub fn calories(mut self, kcal: f64) -> Self {
        self.calories = Some(kcal);
        self
    }

    pub fn protein(mut self, grams: f64) -> Self {
        self.protein_g = Some(grams);
        self
    }

    pub fn carbohydrates(mut self, grams: f64) -> Self {
        self.carbohydrates_g = Some(grams);
        self
    }

    pub fn fat(mut self, grams: f64) -> Self {
        self.fat_g = Some(grams);
        self
    }

    /// 一次性设置四项营养值
    pub fn macros(mut self, calories: f64, protein_g: f64, carbohydrates_g: f64, fat_g: f64) -> Self {
        self.calories = Some(calories);
        self.protein_g = Some(protein_g);
        self.carbohydrates_g = Some(carbohydrates_g);
        self.fat_g = Some(fat_g);
        self
    }

    pub fn build(self) -> Ingredient {
        let name = self.name.unwrap_or_else(|| self.id.clone());
        Ingredient {
            id: self.id,
            name,
            category: self.category,
            cooking_time_min: self.cooking_time_min,
            calories: self.calories,
            protein_g: self.protein_g,
            carbohydrates_g: self.carbohydrates_g,
            fat_g: self.fat_g,
        }
    }
}

// ==========================================
// Preferences 构建器
// ==========================================

pub struct PreferencesBuilder {
    include_categories: HashSet<Category>,
    exclude_ingredients: HashSet<String>,
    max_cooking_time_min: u32,
}

impl PreferencesBuilder {
    /// 默认: 五类全开,无排除,时间上限 20 分钟 (历史界面默认值)
    pub fn new() -> Self {
        Self {
            include_categories: Category::ALL.iter().copied().collect(),
            exclude_ingredients: HashSet::new(),
            max_cooking_time_min: 20,
        }
    }

    pub fn include_only(mut self, categories: &[Category]) -> Self {
        self.include_categories = categories.iter().copied().collect();
        self
    }

    pub fn exclude(mut self, ingredient_id: &str) -> Self {
        self.exclude_ingredients.insert(ingredient_id.to_string());
        self
    }

    pub fn max_time(mut self, minutes: u32) -> Self {
        self.max_cooking_time_min = minutes;
        self
    }

    pub fn build(self) -> Preferences {
        Preferences::new(
            self.include_categories,
            self.exclude_ingredients,
            self.max_cooking_time_min,
        )
    }
}
