//! 資料品質檢查
//!
//! 檢查僅產出警告，不中斷計算。引擎對任何輸入皆有定義，
//! 警告用於提醒呼叫端輸入可能失真。

use replen_core::{ProductSnapshot, SaleFinancials, StockConfig};
use rust_decimal::Decimal;

use crate::ReplenWarning;

/// 資料品質檢查器
pub struct StockDataValidator;

impl StockDataValidator {
    /// 檢查補貨配置
    pub fn check_config(config: &StockConfig) -> Vec<ReplenWarning> {
        let mut warnings = Vec::new();
        let thresholds = &config.thresholds;

        if thresholds.excellent_max == 0
            || thresholds.excellent_max >= thresholds.moderate_max
            || thresholds.moderate_max >= thresholds.risk_max
        {
            warnings.push(ReplenWarning::warning(
                None,
                format!(
                    "健康度閾值未嚴格遞增: {} / {} / {}，分級結果可能失真",
                    thresholds.excellent_max, thresholds.moderate_max, thresholds.risk_max
                ),
            ));
        }

        if config.purchase_for_days == 0 {
            warnings.push(ReplenWarning::info(
                None,
                "採購覆蓋天數為 0，建議採購量恆為 0".to_string(),
            ));
        }

        if config.delivery_estimate_days == 0 {
            warnings.push(ReplenWarning::info(
                None,
                "預計到貨天數為 0，視同下單即到貨".to_string(),
            ));
        }

        warnings
    }

    /// 檢查商品快照
    pub fn check_product(product: &ProductSnapshot) -> Vec<ReplenWarning> {
        let mut warnings = Vec::new();
        let sku = Some(product.sku.clone());

        if let Some(stock) = product.stock_level {
            if stock < Decimal::ZERO {
                warnings.push(ReplenWarning::warning(
                    sku.clone(),
                    format!("現有庫存為負值: {}", stock),
                ));
            }
        }

        if product.sales_history.iter().any(|qty| *qty < Decimal::ZERO) {
            warnings.push(ReplenWarning::warning(
                sku.clone(),
                "銷量歷史含負值，銷售速度可能被低估".to_string(),
            ));
        }

        if let Some(cumulative) = product.cumulative_sales {
            if cumulative < Decimal::ZERO {
                warnings.push(ReplenWarning::warning(
                    sku.clone(),
                    format!("累計銷量為負值: {}", cumulative),
                ));
            } else if cumulative < product.total_recent_sales() {
                warnings.push(ReplenWarning::info(
                    sku,
                    "累計銷量小於近期銷量總和，缺貨判定可能失準".to_string(),
                ));
            }
        }

        warnings
    }

    /// 檢查財務記錄
    pub fn check_financials(sku: Option<&str>, financials: &SaleFinancials) -> Vec<ReplenWarning> {
        let mut warnings = Vec::new();
        let sku = sku.map(str::to_string);

        if !financials.has_financial_data() {
            warnings.push(ReplenWarning::info(
                sku,
                "無任何財務欄位，拆解結果全為 0".to_string(),
            ));
            return warnings;
        }

        if let Some(rollup) = financials.variable_cost_rollup {
            if rollup <= Decimal::ZERO {
                warnings.push(ReplenWarning::info(
                    sku.clone(),
                    format!("變動成本彙總值 {} 非正數，改採逐項合計", rollup),
                ));
            } else {
                let itemized = financials.itemized_variable_costs();
                if itemized > Decimal::ZERO && itemized != rollup {
                    warnings.push(ReplenWarning::info(
                        sku.clone(),
                        format!(
                            "變動成本彙總值 {} 與逐項合計 {} 不一致，以彙總值為準",
                            rollup, itemized
                        ),
                    ));
                }
            }
        }

        if financials.revenue() < Decimal::ZERO {
            warnings.push(ReplenWarning::warning(
                sku,
                format!("營收為負值: {}，利潤率一律記 0", financials.revenue()),
            ));
        }

        warnings
    }
}
