//! # Replen Calculation Engine
//!
//! 補貨計算引擎：庫存天數預測、健康度分級、採購建議與財務拆解

pub mod evaluator;
pub mod forecast;
pub mod health;
pub mod horizon;
pub mod margin;
pub mod replenish;
pub mod validation;

pub use evaluator::{StockAssessment, StockEvaluator};
pub use forecast::ForecastCalculator;
pub use health::HealthCalculator;
pub use horizon::HorizonCalculator;
pub use margin::{FinancialBreakdown, MarginCalculator, OrderBreakdown};
pub use replenish::ReplenishmentCalculator;
pub use validation::StockDataValidator;

use serde::{Deserialize, Serialize};

/// 庫存評估報告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockReport {
    /// 逐商品評估結果
    pub assessments: Vec<StockAssessment>,

    /// 資料品質警告
    pub warnings: Vec<ReplenWarning>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl StockReport {
    /// 創建空報告
    pub fn empty() -> Self {
        Self {
            assessments: Vec::new(),
            warnings: Vec::new(),
            calculation_time_ms: None,
        }
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: ReplenWarning) {
        self.warnings.push(warning);
    }
}

impl Default for StockReport {
    fn default() -> Self {
        Self::empty()
    }
}

/// 資料品質警告
///
/// 警告不中斷計算，僅標記可疑輸入供呼叫端呈現。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplenWarning {
    /// 商品編號（配置層級的警告為 None）
    pub sku: Option<String>,

    /// 警告訊息
    pub message: String,

    /// 嚴重程度
    pub severity: WarningSeverity,
}

impl ReplenWarning {
    /// 創建資訊級警告
    pub fn info(sku: Option<String>, message: String) -> Self {
        Self {
            sku,
            message,
            severity: WarningSeverity::Info,
        }
    }

    /// 創建警告級警告
    pub fn warning(sku: Option<String>, message: String) -> Self {
        Self {
            sku,
            message,
            severity: WarningSeverity::Warning,
        }
    }

    /// 創建錯誤級警告
    pub fn error(sku: Option<String>, message: String) -> Self {
        Self {
            sku,
            message,
            severity: WarningSeverity::Error,
        }
    }
}

/// 警告嚴重程度
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WarningSeverity {
    /// 資訊
    Info,
    /// 警告
    Warning,
    /// 錯誤
    Error,
}
