//! 庫存評估主入口

use std::time::Instant;

use replen_core::{
    HealthStatus, ProductSnapshot, PurchaseUrgency, StockConfig, DEFAULT_FALLBACK_HISTORY_LEN,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::forecast::ForecastCalculator;
use crate::health::HealthCalculator;
use crate::replenish::ReplenishmentCalculator;
use crate::validation::StockDataValidator;
use crate::StockReport;

/// 單一商品的評估結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockAssessment {
    /// 商品編號
    pub sku: String,

    /// 每期平均銷量
    pub sales_per_period: Decimal,

    /// 剩餘庫存天數
    pub days_left: Decimal,

    /// 週轉健康度
    pub health: HealthStatus,

    /// 建議採購量（單位數）
    pub suggested_units: u64,

    /// 採購緊急度
    pub urgency: PurchaseUrgency,
}

/// 庫存評估器
///
/// 以同一份配置評估一批商品，統一預測、分級、建議量與緊急度的
/// 計算路徑，取代各呈現端自行拼湊的近似公式。
pub struct StockEvaluator {
    /// 補貨配置
    config: StockConfig,

    /// 銷量歷史為空時充當期數的值
    fallback_history_len: usize,
}

impl StockEvaluator {
    /// 創建新的庫存評估器
    pub fn new(config: StockConfig) -> Self {
        Self {
            config,
            fallback_history_len: DEFAULT_FALLBACK_HISTORY_LEN,
        }
    }

    /// 建構器模式：設置歷史期數預設值
    pub fn with_fallback_history_len(mut self, fallback_history_len: usize) -> Self {
        self.fallback_history_len = fallback_history_len;
        self
    }

    /// 獲取補貨配置
    pub fn config(&self) -> &StockConfig {
        &self.config
    }

    /// 評估單一商品
    pub fn evaluate(&self, product: &ProductSnapshot) -> StockAssessment {
        let sales_per_period =
            ForecastCalculator::sales_per_period(product, self.fallback_history_len);
        let days_left = ForecastCalculator::days_of_stock_remaining_with_fallback(
            product,
            self.fallback_history_len,
        );
        let health = HealthCalculator::classify(days_left, &self.config);
        let suggested_units = ReplenishmentCalculator::purchase_suggestion_units_with_fallback(
            product,
            &self.config,
            self.fallback_history_len,
        );
        let urgency = ReplenishmentCalculator::purchase_urgency(product, health);

        StockAssessment {
            sku: product.sku.clone(),
            sales_per_period,
            days_left,
            health,
            suggested_units,
            urgency,
        }
    }

    /// 評估一批商品
    ///
    /// 附帶配置與商品的資料品質警告，以及計算耗時。
    pub fn evaluate_all(&self, products: &[ProductSnapshot]) -> StockReport {
        info!("開始庫存評估: {} 個商品", products.len());
        let start_time = Instant::now();

        let mut report = StockReport::empty();
        report.warnings = StockDataValidator::check_config(&self.config);

        for product in products {
            debug!("評估商品: {}", product.sku);
            report.warnings.extend(StockDataValidator::check_product(product));
            report.assessments.push(self.evaluate(product));
        }

        report.calculation_time_ms = Some(start_time.elapsed().as_millis());

        let action_count = report
            .assessments
            .iter()
            .filter(|assessment| assessment.urgency.requires_action())
            .count();
        info!("庫存評估完成，耗時 {:?}", start_time.elapsed());
        info!("需採購關注: {} 個商品", action_count);

        report
    }
}
