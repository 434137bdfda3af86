//! 採購建議計算

use replen_core::{
    HealthStatus, ProductSnapshot, PurchaseUrgency, StockConfig, DEFAULT_FALLBACK_HISTORY_LEN,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::forecast::ForecastCalculator;

/// 補貨計算器
pub struct ReplenishmentCalculator;

impl ReplenishmentCalculator {
    /// 計算建議採購量（採用預設期數）
    pub fn purchase_suggestion_units(product: &ProductSnapshot, config: &StockConfig) -> u64 {
        Self::purchase_suggestion_units_with_fallback(product, config, DEFAULT_FALLBACK_HISTORY_LEN)
    }

    /// 計算建議採購量
    ///
    /// 採購覆蓋天數 × 銷售速度 − 現有庫存，無條件進位取整，下限 0。
    /// 缺漏庫存視為 0（建議補足整個覆蓋量）。
    pub fn purchase_suggestion_units_with_fallback(
        product: &ProductSnapshot,
        config: &StockConfig,
        fallback_history_len: usize,
    ) -> u64 {
        let velocity = ForecastCalculator::sales_per_period(product, fallback_history_len);
        let stock = product.stock_level.unwrap_or(Decimal::ZERO);
        let shortfall = Decimal::from(config.purchase_for_days) * velocity - stock;

        if shortfall <= Decimal::ZERO {
            return 0;
        }
        shortfall.ceil().to_u64().unwrap_or(u64::MAX)
    }

    /// 判定採購緊急度
    ///
    /// 缺貨（庫存 <= 0 且曾有銷售）優先於健康度對應；
    /// 無庫存資料時一律視為正常，不產生誤報。
    pub fn purchase_urgency(product: &ProductSnapshot, health: HealthStatus) -> PurchaseUrgency {
        let stock = match product.stock_level {
            Some(stock) => stock,
            None => return PurchaseUrgency::Fine,
        };

        if stock <= Decimal::ZERO && product.has_ever_sold() {
            return PurchaseUrgency::OutOfStock;
        }

        if health.is_actionable() {
            PurchaseUrgency::NeedsOrder
        } else {
            PurchaseUrgency::Fine
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn product_with(stock: i64, history: Vec<i64>) -> ProductSnapshot {
        ProductSnapshot::new("SKU-T".to_string())
            .with_stock_level(Decimal::from(stock))
            .with_sales_history(history.into_iter().map(Decimal::from).collect())
    }

    #[test]
    fn test_suggestion_covers_purchase_window() {
        // 速度 10/期、覆蓋 30 天 -> 目標 300，現有 250 -> 建議 50
        let product = product_with(250, vec![10; 7]);
        let config = StockConfig::new(30, 7);

        assert_eq!(
            ReplenishmentCalculator::purchase_suggestion_units(&product, &config),
            50
        );
    }

    #[test]
    fn test_suggestion_rounds_up_fractions() {
        // 速度 10/7，目標 30 * 10/7 = 42.857...，現有 40 -> 缺口 2.857... -> 3
        let product = product_with(40, vec![10, 0, 0, 0, 0, 0, 0]);
        let config = StockConfig::new(30, 7);

        assert_eq!(
            ReplenishmentCalculator::purchase_suggestion_units(&product, &config),
            3
        );
    }

    #[test]
    fn test_overstocked_suggestion_is_zero() {
        let product = product_with(1_000, vec![10; 7]);
        let config = StockConfig::new(30, 7);

        assert_eq!(
            ReplenishmentCalculator::purchase_suggestion_units(&product, &config),
            0
        );
    }

    #[test]
    fn test_no_sales_history_suggests_nothing() {
        let product = ProductSnapshot::new("SKU-NEW".to_string())
            .with_stock_level(Decimal::from(5));
        let config = StockConfig::default();

        assert_eq!(
            ReplenishmentCalculator::purchase_suggestion_units(&product, &config),
            0
        );
    }

    #[test]
    fn test_missing_stock_suggests_full_window() {
        // 無庫存資料視為 0 庫存，建議補足整個覆蓋量
        let product = ProductSnapshot::new("SKU-M".to_string())
            .with_sales_history(vec![Decimal::from(10); 7]);
        let config = StockConfig::new(30, 7);

        assert_eq!(
            ReplenishmentCalculator::purchase_suggestion_units(&product, &config),
            300
        );
    }

    #[test]
    fn test_urgency_out_of_stock_takes_precedence() {
        // 曾售出 120 件、現無庫存 -> 缺貨，不看健康度
        let product = ProductSnapshot::new("SKU-HOT".to_string())
            .with_stock_level(Decimal::ZERO)
            .with_cumulative_sales(Decimal::from(120));

        assert_eq!(
            ReplenishmentCalculator::purchase_urgency(&product, HealthStatus::Stalled),
            PurchaseUrgency::OutOfStock
        );
    }

    #[test]
    fn test_urgency_never_sold_is_not_out_of_stock() {
        let product = ProductSnapshot::new("SKU-COLD".to_string())
            .with_stock_level(Decimal::ZERO);

        assert_eq!(
            ReplenishmentCalculator::purchase_urgency(&product, HealthStatus::Stalled),
            PurchaseUrgency::Fine
        );
    }

    #[test]
    fn test_urgency_missing_stock_is_fine() {
        let product = ProductSnapshot::new("SKU-NA".to_string())
            .with_cumulative_sales(Decimal::from(120));

        assert_eq!(
            ReplenishmentCalculator::purchase_urgency(&product, HealthStatus::Risk),
            PurchaseUrgency::Fine
        );
    }

    #[test]
    fn test_urgency_follows_health() {
        let product = product_with(100, vec![10; 7]);

        assert_eq!(
            ReplenishmentCalculator::purchase_urgency(&product, HealthStatus::Excellent),
            PurchaseUrgency::Fine
        );
        assert_eq!(
            ReplenishmentCalculator::purchase_urgency(&product, HealthStatus::Moderate),
            PurchaseUrgency::NeedsOrder
        );
        assert_eq!(
            ReplenishmentCalculator::purchase_urgency(&product, HealthStatus::Risk),
            PurchaseUrgency::NeedsOrder
        );
        assert_eq!(
            ReplenishmentCalculator::purchase_urgency(&product, HealthStatus::Stalled),
            PurchaseUrgency::Fine
        );
    }

    proptest! {
        #[test]
        fn prop_suggestion_is_minimal_covering_amount(
            stock in 0i64..100_000,
            history in proptest::collection::vec(0i64..1_000, 0..10),
            purchase_for_days in 0u32..365,
        ) {
            let product = product_with(stock, history);
            let config = StockConfig::new(purchase_for_days, 7);
            let suggestion = ReplenishmentCalculator::purchase_suggestion_units(
                &product, &config,
            );

            let target = Decimal::from(purchase_for_days)
                * ForecastCalculator::sales_per_period(&product, 7);
            let shortfall = target - Decimal::from(stock);

            if shortfall > Decimal::ZERO {
                // 足以覆蓋缺口，且少一件即不足
                prop_assert!(Decimal::from(suggestion) >= shortfall);
                prop_assert!(Decimal::from(suggestion) - Decimal::ONE < shortfall);
            } else {
                prop_assert_eq!(suggestion, 0);
            }
        }

        #[test]
        fn prop_more_stock_never_raises_suggestion(
            stock_low in 0i64..50_000,
            extra in 0i64..50_000,
            history in proptest::collection::vec(0i64..1_000, 0..10),
        ) {
            let config = StockConfig::default();
            let low = product_with(stock_low, history.clone());
            let high = product_with(stock_low + extra, history);

            prop_assert!(
                ReplenishmentCalculator::purchase_suggestion_units(&low, &config)
                    >= ReplenishmentCalculator::purchase_suggestion_units(&high, &config)
            );
        }
    }
}
