//! 庫存狀態類型

use serde::{Deserialize, Serialize};

/// 庫存週轉健康度
///
/// 依剩餘庫存天數對照閾值分級，衡量的是週轉速度：
/// 天數越少代表賣得越快，分級越好。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    /// 優良（週轉快，剩餘天數落在 excellent_max 以內）
    Excellent,
    /// 一般（週轉放緩）
    Moderate,
    /// 風險（週轉明顯過慢）
    Risk,
    /// 滯銷（超過 risk_max，庫存幾乎不動）
    Stalled,
}

impl HealthStatus {
    /// 檢查是否屬於建議下單的分級
    pub fn is_actionable(&self) -> bool {
        matches!(self, HealthStatus::Moderate | HealthStatus::Risk)
    }
}

/// 採購緊急度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PurchaseUrgency {
    /// 缺貨（曾有銷售且現無庫存，最高優先）
    OutOfStock,
    /// 需下單（健康度落在一般或風險）
    NeedsOrder,
    /// 正常（無需動作）
    Fine,
}

impl PurchaseUrgency {
    /// 檢查是否需要採購動作
    pub fn requires_action(&self) -> bool {
        !matches!(self, PurchaseUrgency::Fine)
    }
}
