//! 銷售速度與剩餘庫存天數計算

use replen_core::money::safe_div;
use replen_core::{ProductSnapshot, DEFAULT_FALLBACK_HISTORY_LEN};
use rust_decimal::Decimal;

/// 庫存預測計算器
pub struct ForecastCalculator;

impl ForecastCalculator {
    /// 計算每期平均銷量（銷售速度）
    ///
    /// # 參數
    /// * `product` - 商品快照
    /// * `fallback_history_len` - 歷史為空時充當期數的值
    ///
    /// 總和除以期數，期數下限為 1；歷史為空時以 fallback_history_len
    /// 充當期數（總和為 0，結果必為 0）。
    pub fn sales_per_period(product: &ProductSnapshot, fallback_history_len: usize) -> Decimal {
        let total = product.total_recent_sales();
        let periods = if product.sales_history.is_empty() {
            fallback_history_len
        } else {
            product.sales_history.len()
        };

        safe_div(total, Decimal::from(periods.max(1) as u64))
    }

    /// 計算剩餘庫存天數（採用預設期數）
    pub fn days_of_stock_remaining(product: &ProductSnapshot) -> Decimal {
        Self::days_of_stock_remaining_with_fallback(product, DEFAULT_FALLBACK_HISTORY_LEN)
    }

    /// 計算剩餘庫存天數
    ///
    /// 現有庫存除以銷售速度。無庫存資料、庫存 <= 0 或速度 <= 0
    /// 時一律返回 0；缺貨與無資料不在此區分，缺貨另由採購緊急度呈現。
    pub fn days_of_stock_remaining_with_fallback(
        product: &ProductSnapshot,
        fallback_history_len: usize,
    ) -> Decimal {
        let stock = match product.stock_level {
            Some(stock) if stock > Decimal::ZERO => stock,
            _ => return Decimal::ZERO,
        };

        let velocity = Self::sales_per_period(product, fallback_history_len);
        if velocity <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        safe_div(stock, velocity)
    }
}
