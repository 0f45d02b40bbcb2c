// ==========================================
// 食材推荐系统 - 命令行入口
// ==========================================
// 系统定位: 决策支持系统 (推荐结果由用户最终取舍)
// 用法:
//   ingredient-selector [--catalog <file.csv>] [--policy <file.json>]
//                       [--max-time <分钟>] [--include <类别,...>]
//                       [--exclude <标识,...>] [--json]
// ==========================================

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use ingredient_selector::{
    logging, reference_catalog, CatalogLoader, Category, Preferences, RecipeResult,
    SelectionPolicy, SelectionReport, SelectionSummaryEngine, Selector, APP_NAME, VERSION,
};
use serde::Serialize;
use std::collections::HashSet;
use std::path::PathBuf;

/// 解析后的命令行参数
#[derive(Debug, Default)]
struct CliArgs {
    catalog_path: Option<PathBuf>,
    policy_path: Option<PathBuf>,
    max_time_min: Option<i64>,
    include: Option<Vec<String>>,
    exclude: Vec<String>,
    json: bool,
}

/// --json 输出信封
#[derive(Serialize)]
struct JsonEnvelope<'a> {
    generated_at: DateTime<Utc>,
    app: &'a str,
    version: &'a str,
    result: &'a RecipeResult,
    report: &'a SelectionReport,
}

fn print_usage() {
    println!("{} v{}", APP_NAME, VERSION);
    println!();
    println!("用法: ingredient-selector [选项]");
    println!();
    println!("选项:");
    println!("  --catalog <file.csv>   从 CSV 文件装载目录 (缺省用内置参考目录)");
    println!("  --policy <file.json>   指定选配策略档案 (缺省找平台配置目录,再回落出厂值)");
    println!("  --max-time <分钟>      总烹饪时间上限,收敛到 [0, 240] (缺省 20)");
    println!("  --include <类别,...>   包含的类别,逗号分隔 (缺省全部五类)");
    println!("  --exclude <标识,...>   排除的食材标识,逗号分隔");
    println!("  --json                 以 JSON 信封输出结果与过程报告");
    println!("  --help, -h             显示本帮助");
}

fn parse_args() -> Result<CliArgs> {
    let mut args = std::env::args().skip(1);
    let mut cli = CliArgs::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--catalog" => {
                let value = args.next().context("--catalog 需要文件路径")?;
                cli.catalog_path = Some(PathBuf::from(value));
            }
            "--policy" => {
                let value = args.next().context("--policy 需要文件路径")?;
                cli.policy_path = Some(PathBuf::from(value));
            }
            "--max-time" => {
                let value = args.next().context("--max-time 需要整数分钟")?;
                let minutes: i64 = value
                    .trim()
                    .parse()
                    .with_context(|| format!("--max-time 无法解析为整数: {}", value))?;
                cli.max_time_min = Some(minutes);
            }
            "--include" => {
                let value = args.next().context("--include 需要类别列表")?;
                cli.include = Some(
                    value
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect(),
                );
            }
            "--exclude" => {
                let value = args.next().context("--exclude 需要标识列表")?;
                cli.exclude.extend(
                    value
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty()),
                );
            }
            "--json" => cli.json = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => bail!("未知参数: {} (--help 查看用法)", other),
        }
    }

    Ok(cli)
}

/// 从命令行参数组装偏好 (未给出的项沿用历史界面默认值)
fn assemble_preferences(cli: &CliArgs) -> Result<Preferences> {
    let mut prefs = Preferences::default();

    if let Some(raw) = cli.max_time_min {
        prefs.max_cooking_time_min = Preferences::clamp_time_cap(raw);
    }

    if let Some(names) = &cli.include {
        let mut categories = HashSet::new();
        for name in names {
            match Category::from_str(name) {
                Some(category) => {
                    categories.insert(category);
                }
                None => bail!("未知类别: {} (可选: Protein/Carbohydrate/Vegetable/Fat/Extra)", name),
            }
        }
        prefs.include_categories = categories;
    }

    prefs
        .exclude_ingredients
        .extend(cli.exclude.iter().cloned());

    Ok(prefs)
}

fn main() -> Result<()> {
    // 初始化日志系统
    logging::init();

    let cli = parse_args()?;

    tracing::info!("==================================================");
    tracing::info!("{} - 决策支持系统", APP_NAME);
    tracing::info!("系统版本: {}", VERSION);
    tracing::info!("==================================================");

    // 装载策略档案
    let policy = SelectionPolicy::load_or_default(cli.policy_path.as_deref())?;

    // 装载目录
    let catalog = match &cli.catalog_path {
        Some(path) => {
            let loaded = CatalogLoader::new().load_from_csv(path)?;
            tracing::info!(
                source = %loaded.source,
                loaded_count = loaded.loaded_count(),
                skipped_count = loaded.skipped.len(),
                "使用文件目录"
            );
            loaded.ingredients
        }
        None => {
            let catalog = reference_catalog();
            tracing::info!(loaded_count = catalog.len(), "使用内置参考目录");
            catalog
        }
    };

    // 组装偏好并执行选配
    let prefs = assemble_preferences(&cli)?;
    let selector = Selector::with_policy(policy);
    let (result, report) = selector.select_with_report(&catalog, &prefs);

    // 输出 (空结果不算失败,退出码仍为 0)
    if cli.json {
        let envelope = JsonEnvelope {
            generated_at: Utc::now(),
            app: APP_NAME,
            version: VERSION,
            result: &result,
            report: &report,
        };
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else if result.is_empty() {
        println!("No combination fits your settings. Try increasing time or removing exclusions.");
    } else {
        let summary = SelectionSummaryEngine::new();
        for line in summary.describe(&result) {
            println!("{}", line);
        }
    }

    Ok(())
}
