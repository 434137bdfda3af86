//! # Replen Core
//!
//! 庫存補貨與獲利分析的核心資料模型與類型定義

pub mod config;
pub mod financials;
pub mod money;
pub mod product;
pub mod status;

// Re-export 常用類型
pub use config::*;
pub use financials::*;
pub use money::*;
pub use product::*;
pub use status::*;

/// Replen 錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum ReplenError {
    #[error("無效的健康度閾值: {0}")]
    InvalidThresholds(String),

    #[error("非有限金額: {0}")]
    NonFiniteAmount(String),
}

/// Replen 結果類型
pub type Result<T> = std::result::Result<T, ReplenError>;
