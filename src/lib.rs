//! # Replen
//!
//! 電商庫存補貨與獲利分析引擎。
//! 提供剩餘庫存天數預測、週轉健康度分級、採購建議與銷售財務拆解，
//! 讓各呈現端共用同一套計算路徑。

// Re-export 常用類型
pub use replen_core::{
    money, HealthStatus, OrderSnapshot, ProductSnapshot, PurchaseUrgency, ReplenError, Result,
    SaleFinancials, SaleLineItem, StockConfig, StockThresholds, ZeroVelocityPolicy,
    DEFAULT_FALLBACK_HISTORY_LEN,
};

pub use replen_calc::{
    FinancialBreakdown, ForecastCalculator, HealthCalculator, HorizonCalculator, MarginCalculator,
    OrderBreakdown, ReplenWarning, ReplenishmentCalculator, StockAssessment, StockDataValidator,
    StockEvaluator, StockReport, WarningSeverity,
};
