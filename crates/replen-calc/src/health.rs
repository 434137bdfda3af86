//! 庫存健康度分級

use replen_core::{HealthStatus, StockConfig, ZeroVelocityPolicy};
use rust_decimal::Decimal;

/// 健康度分級計算器
pub struct HealthCalculator;

impl HealthCalculator {
    /// 依剩餘庫存天數分級
    ///
    /// 區間上界採閉區間，相鄰不重疊，任何天數恰好對應一個分級。
    /// days_left <= 0 時依配置的零速度策略分級。
    pub fn classify(days_left: Decimal, config: &StockConfig) -> HealthStatus {
        if days_left <= Decimal::ZERO {
            return match config.zero_velocity_policy {
                ZeroVelocityPolicy::Risk => HealthStatus::Risk,
                ZeroVelocityPolicy::Stalled => HealthStatus::Stalled,
            };
        }

        let thresholds = &config.thresholds;
        if days_left <= Decimal::from(thresholds.excellent_max) {
            HealthStatus::Excellent
        } else if days_left <= Decimal::from(thresholds.moderate_max) {
            HealthStatus::Moderate
        } else if days_left <= Decimal::from(thresholds.risk_max) {
            HealthStatus::Risk
        } else {
            HealthStatus::Stalled
        }
    }
}
