// ==========================================
// 目录装载集成测试
// ==========================================
// 职责: 验证 CSV 装载与选配流程的端到端协作
// ==========================================

mod helpers;

use helpers::test_data_builder::PreferencesBuilder;
use ingredient_selector::catalog::{CatalogError, CatalogLoader};
use ingredient_selector::domain::recipe::NOTE_ADJUSTED;
use ingredient_selector::domain::types::Category;
use ingredient_selector::engine::Selector;
use std::io::Write;
use tempfile::Builder;

fn write_catalog_csv(content: &str) -> tempfile::NamedTempFile {
    let mut temp_file = Builder::new().suffix(".csv").tempfile().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}

#[test]
fn test_load_then_select_end_to_end() {
    // 文件目录走完整选配流程,结果与内存目录语义一致
    let temp_file = write_catalog_csv(
        "id,name,category,cooking_time_min,calories,protein_g,carbohydrates_g,fat_g\n\
         turkey-slices,Turkey slices,Protein,5,104,17,4,2\n\
         instant-noodles,Instant noodles,Carbohydrate,5,188,4.5,27,7\n\
         baby-spinach,Baby spinach,Vegetable,5,23,2.9,3.6,0.4\n\
         snap-peas,Snap peas,Vegetable,7,42,2.8,7.6,0.2\n\
         sesame-oil,Sesame oil,Fat,5,884,0,0,100\n",
    );

    let loader = CatalogLoader::new();
    let loaded = loader.load_from_csv(temp_file.path()).unwrap();
    assert_eq!(loaded.loaded_count(), 5);
    assert!(loaded.skipped.is_empty());

    let selector = Selector::new();
    let prefs = PreferencesBuilder::new().max_time(10).build();
    let result = selector.select(&loaded.ingredients, &prefs);

    let ids: Vec<&str> = result
        .selected_ingredients
        .iter()
        .map(|i| i.id.as_str())
        .collect();
    assert_eq!(ids, vec!["turkey-slices", "sesame-oil"]);
    assert_eq!(result.total_cooking_time_min, 10);
    assert_eq!(result.note, NOTE_ADJUSTED);
}

#[test]
fn test_load_skips_bad_rows_then_selects() {
    // 坏行只影响自身,不影响其余目录参与选配
    let temp_file = write_catalog_csv(
        "id,name,category,cooking_time_min\n\
         tofu,Firm tofu,Protein,10\n\
         mystery,Mystery,Dessert,5\n\
         white-rice,White rice,Carbohydrate,20\n",
    );

    let loader = CatalogLoader::new();
    let loaded = loader.load_from_csv(temp_file.path()).unwrap();
    assert_eq!(loaded.loaded_count(), 2);
    assert_eq!(loaded.skipped.len(), 1);
    assert!(loaded.skipped[0].reason.starts_with("INVALID_CATEGORY"));

    let selector = Selector::new();
    let prefs = PreferencesBuilder::new().max_time(60).build();
    let result = selector.select(&loaded.ingredients, &prefs);

    assert_eq!(result.selected_ingredients.len(), 2);
    assert!(result.selected_ingredients.iter().any(|i| i.id == "tofu"));
    assert!(result
        .selected_ingredients
        .iter()
        .any(|i| i.id == "white-rice"));
}

#[test]
fn test_load_preserves_order_for_tie_breaking() {
    // 同时长并列时,文件行序决定选取结果 (稳定排序)
    let temp_file = write_catalog_csv(
        "id,name,category,cooking_time_min\n\
         second-listed,Second listed,Vegetable,5\n\
         first-listed,First listed,Vegetable,5\n",
    );

    let loader = CatalogLoader::new();
    let loaded = loader.load_from_csv(temp_file.path()).unwrap();

    let selector = Selector::new();
    let prefs = PreferencesBuilder::new()
        .include_only(&[Category::Vegetable])
        .max_time(60)
        .build();
    let result = selector.select(&loaded.ingredients, &prefs);

    // 蔬菜目标 2 项,全部入选,且行序在前者排前
    let ids: Vec<&str> = result
        .selected_ingredients
        .iter()
        .map(|i| i.id.as_str())
        .collect();
    assert_eq!(ids, vec!["second-listed", "first-listed"]);
}

#[test]
fn test_load_missing_header_rejected() {
    let temp_file = write_catalog_csv("tofu,Firm tofu,Protein,10\n");

    let loader = CatalogLoader::new();
    let result = loader.load_from_csv(temp_file.path());

    assert!(matches!(result, Err(CatalogError::MissingColumn(_))));
}
