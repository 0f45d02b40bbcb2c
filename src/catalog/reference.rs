// ==========================================
// 食材推荐系统 - 内置参考目录
// ==========================================
// 职责: 提供固定次序的内置食材目录
// 红线: 次序与标识稳定,营养值按每 100 克计
// ==========================================

use crate::domain::ingredient::Ingredient;
use crate::domain::types::Category;

/// 内置参考目录
///
/// 覆盖五大类别,含 Extra 类条目 (选配引擎对 Extra 只修剪不选取,
/// 需要真实条目才能观察到该行为)。
pub fn reference_catalog() -> Vec<Ingredient> {
    let entry = |id: &str,
                 name: &str,
                 category: Category,
                 cooking_time_min: u32,
                 calories: f64,
                 protein_g: f64,
                 carbohydrates_g: f64,
                 fat_g: f64| Ingredient {
        id: id.to_string(),
        name: name.to_string(),
        category,
        cooking_time_min,
        calories: Some(calories),
        protein_g: Some(protein_g),
        carbohydrates_g: Some(carbohydrates_g),
        fat_g: Some(fat_g),
    };

    vec![
        // ===== 蛋白质 =====
        entry("chicken-breast", "Chicken breast", Category::Protein, 15, 165.0, 31.0, 0.0, 3.6),
        entry("salmon-fillet", "Salmon fillet", Category::Protein, 12, 208.0, 20.0, 0.0, 13.0),
        entry("tofu", "Firm tofu", Category::Protein, 10, 144.0, 15.7, 2.8, 8.7),
        entry("eggs", "Eggs", Category::Protein, 8, 155.0, 13.0, 1.1, 11.0),
        entry("red-lentils", "Red lentils", Category::Protein, 25, 116.0, 9.0, 20.0, 0.4),
        // ===== 碳水 =====
        entry("white-rice", "White rice", Category::Carbohydrate, 20, 130.0, 2.7, 28.0, 0.3),
        entry("quinoa", "Quinoa", Category::Carbohydrate, 15, 120.0, 4.4, 21.0, 1.9),
        entry("pasta", "Pasta", Category::Carbohydrate, 12, 158.0, 5.8, 31.0, 0.9),
        entry("sweet-potato", "Sweet potato", Category::Carbohydrate, 30, 86.0, 1.6, 20.0, 0.1),
        entry("couscous", "Couscous", Category::Carbohydrate, 7, 112.0, 3.8, 23.0, 0.2),
        // ===== 蔬菜 =====
        entry("spinach", "Spinach", Category::Vegetable, 4, 23.0, 2.9, 3.6, 0.4),
        entry("broccoli", "Broccoli", Category::Vegetable, 8, 34.0, 2.8, 7.0, 0.4),
        entry("bell-pepper", "Bell pepper", Category::Vegetable, 6, 31.0, 1.0, 6.0, 0.3),
        entry("zucchini", "Zucchini", Category::Vegetable, 7, 17.0, 1.2, 3.1, 0.3),
        entry("green-beans", "Green beans", Category::Vegetable, 9, 31.0, 1.8, 7.0, 0.2),
        // ===== 脂肪 =====
        entry("olive-oil", "Olive oil", Category::Fat, 0, 884.0, 0.0, 0.0, 100.0),
        entry("avocado", "Avocado", Category::Fat, 0, 160.0, 2.0, 8.5, 14.7),
        entry("butter", "Butter", Category::Fat, 1, 717.0, 0.9, 0.1, 81.0),
        // ===== 附加 =====
        entry("honey", "Honey", Category::Extra, 0, 304.0, 0.3, 82.0, 0.0),
        entry("fresh-parsley", "Fresh parsley", Category::Extra, 0, 36.0, 3.0, 6.3, 0.8),
    ]
}
