//! 斷貨與到貨日期推算

use chrono::{Duration, NaiveDate};
use replen_core::StockConfig;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// 日期推算計算器
///
/// 評估基準日由呼叫端傳入，推算本身不讀系統時鐘。
pub struct HorizonCalculator;

impl HorizonCalculator {
    /// 推算預計斷貨日期
    ///
    /// 取剩餘天數的整數部分（不足一天視為當日耗盡）。
    /// days_left <= 0 時無可推算，返回 None。
    pub fn projected_runout_date(as_of: NaiveDate, days_left: Decimal) -> Option<NaiveDate> {
        if days_left <= Decimal::ZERO {
            return None;
        }

        let whole_days = days_left.floor().to_i64()?;
        let offset = Duration::try_days(whole_days)?;
        as_of.checked_add_signed(offset)
    }

    /// 推算預計到貨日期（基準日 + 預計到貨天數）
    pub fn expected_delivery_date(as_of: NaiveDate, config: &StockConfig) -> Option<NaiveDate> {
        let offset = Duration::try_days(i64::from(config.delivery_estimate_days))?;
        as_of.checked_add_signed(offset)
    }

    /// 檢查今天下單能否在斷貨前到貨（同日到貨視為趕上）
    pub fn delivery_covers_runout(
        as_of: NaiveDate,
        days_left: Decimal,
        config: &StockConfig,
    ) -> Option<bool> {
        let runout = Self::projected_runout_date(as_of, days_left)?;
        let delivery = Self::expected_delivery_date(as_of, config)?;

        Some(delivery <= runout)
    }
}
