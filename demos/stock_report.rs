//! 整店庫存評估示例

use chrono::NaiveDate;
use replen::{HorizonCalculator, ProductSnapshot, StockConfig, StockEvaluator};
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("=== 整店庫存評估示例 ===\n");

    // 商品快照（實務上由商店資料庫擷取）
    let products = vec![
        ProductSnapshot::new("SKU-KB-RED".to_string())
            .with_stock_level(Decimal::from(100))
            .with_sales_history(vec![Decimal::from(10); 7])
            .with_cumulative_sales(Decimal::from(900)),
        ProductSnapshot::new("SKU-KB-BLUE".to_string())
            .with_stock_level(Decimal::from(300))
            .with_sales_history(vec![Decimal::from(5); 7])
            .with_cumulative_sales(Decimal::from(420)),
        ProductSnapshot::new("SKU-MUG-01".to_string())
            .with_stock_level(Decimal::from(80))
            .with_sales_history(vec![Decimal::ZERO; 7])
            .with_cumulative_sales(Decimal::from(12)),
        ProductSnapshot::new("SKU-CABLE-2M".to_string())
            .with_stock_level(Decimal::ZERO)
            .with_sales_history(vec![Decimal::from(4); 7])
            .with_cumulative_sales(Decimal::from(150)),
    ];

    // 預設策略：閾值 15/45/90 天、採購覆蓋 30 天、7 天到貨
    let evaluator = StockEvaluator::new(StockConfig::default());

    let report = evaluator.evaluate_all(&products);

    println!("評估結果:");
    for assessment in &report.assessments {
        println!(
            "  - {}: 剩 {} 天, 健康度 {:?}, 建議採購 {} 件, 緊急度 {:?}",
            assessment.sku,
            assessment.days_left.round_dp(1),
            assessment.health,
            assessment.suggested_units,
            assessment.urgency
        );
    }

    if !report.warnings.is_empty() {
        println!("\n資料品質警告:");
        for warning in &report.warnings {
            println!(
                "  - [{:?}] {}: {}",
                warning.severity,
                warning.sku.as_deref().unwrap_or("(整體)"),
                warning.message
            );
        }
    }

    // 接日期推算：斷貨日與到貨日
    let as_of = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    println!("\n斷貨推算（基準日 {}）:", as_of);
    for assessment in &report.assessments {
        match HorizonCalculator::projected_runout_date(as_of, assessment.days_left) {
            Some(runout) => {
                let covered = HorizonCalculator::delivery_covers_runout(
                    as_of,
                    assessment.days_left,
                    evaluator.config(),
                );
                println!(
                    "  - {}: 預計 {} 斷貨, 現在下單{}",
                    assessment.sku,
                    runout,
                    if covered == Some(true) {
                        "趕得上"
                    } else {
                        "趕不上"
                    }
                );
            }
            None => println!("  - {}: 已無剩餘天數，無可推算", assessment.sku),
        }
    }

    if let Some(elapsed) = report.calculation_time_ms {
        println!("\n計算耗時: {} ms", elapsed);
    }

    println!("\n報告 JSON:");
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
