//! 補貨計算配置

use serde::{Deserialize, Serialize};

use crate::{ReplenError, Result};

/// 銷量歷史為空時充當期數的預設值
pub const DEFAULT_FALLBACK_HISTORY_LEN: usize = 7;

/// 零速度分級策略
///
/// 剩餘庫存天數 <= 0（無庫存、無銷售速度或無資料）時採用的健康度分級。
/// 真正的缺貨另由採購緊急度獨立呈現，不依賴此策略。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZeroVelocityPolicy {
    /// 視為風險（需要立即關注）
    Risk,
    /// 視為滯銷（預設；庫存不動與賣光皆歸此級）
    Stalled,
}

/// 健康度閾值（單位：天）
///
/// 三個上界將剩餘庫存天數切成四個相鄰閉區間：
/// (0, excellent_max]、(excellent_max, moderate_max]、
/// (moderate_max, risk_max]、(risk_max, ∞)。
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StockThresholds {
    /// 優良分級上界（含）
    pub excellent_max: u32,

    /// 一般分級上界（含）
    pub moderate_max: u32,

    /// 風險分級上界（含），超過即為滯銷
    pub risk_max: u32,
}

impl StockThresholds {
    /// 創建新的健康度閾值（不檢查遞增關係，分級對任何值皆有定義）
    pub fn new(excellent_max: u32, moderate_max: u32, risk_max: u32) -> Self {
        Self {
            excellent_max,
            moderate_max,
            risk_max,
        }
    }

    /// 創建並檢查遞增關係的健康度閾值
    pub fn try_new(excellent_max: u32, moderate_max: u32, risk_max: u32) -> Result<Self> {
        if excellent_max == 0 || excellent_max >= moderate_max || moderate_max >= risk_max {
            return Err(ReplenError::InvalidThresholds(format!(
                "需滿足 0 < excellent_max < moderate_max < risk_max，實際為 {} / {} / {}",
                excellent_max, moderate_max, risk_max
            )));
        }
        Ok(Self::new(excellent_max, moderate_max, risk_max))
    }
}

impl Default for StockThresholds {
    fn default() -> Self {
        Self::new(15, 45, 90)
    }
}

/// 補貨計算配置
///
/// 一份配置對應一個商店／商品群的補貨策略，多份配置可並存。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockConfig {
    /// 採購覆蓋天數（建議採購量需覆蓋的銷售天數，預設 30）
    pub purchase_for_days: u32,

    /// 預計到貨天數（下單到入庫的估計天數，預設 7）
    pub delivery_estimate_days: u32,

    /// 健康度閾值
    pub thresholds: StockThresholds,

    /// 零速度分級策略
    pub zero_velocity_policy: ZeroVelocityPolicy,
}

impl StockConfig {
    /// 創建新的補貨配置
    pub fn new(purchase_for_days: u32, delivery_estimate_days: u32) -> Self {
        Self {
            purchase_for_days,
            delivery_estimate_days,
            thresholds: StockThresholds::default(),
            zero_velocity_policy: ZeroVelocityPolicy::Stalled,
        }
    }

    /// 建構器模式：設置健康度閾值
    pub fn with_thresholds(mut self, thresholds: StockThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// 建構器模式：設置零速度分級策略
    pub fn with_zero_velocity_policy(mut self, policy: ZeroVelocityPolicy) -> Self {
        self.zero_velocity_policy = policy;
        self
    }
}

impl Default for StockConfig {
    fn default() -> Self {
        Self::new(30, 7)
    }
}
