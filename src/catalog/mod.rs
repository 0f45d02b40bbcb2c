// ==========================================
// 食材推荐系统 - 目录层
// ==========================================
// 职责: 食材目录的来源 (内置参考目录 / CSV 文件装载)
// ==========================================

pub mod loader;
pub mod reference;

pub use loader::{CatalogError, CatalogLoader, CatalogResult};
pub use reference::reference_catalog;
