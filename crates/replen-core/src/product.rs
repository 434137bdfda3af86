//! 商品快照模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 商品庫存快照
///
/// 由呼叫端自完整商品記錄擷取，僅保留補貨計算所需的欄位。
/// 所有欄位皆允許缺漏，計算端對缺漏資料一律有定義。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSnapshot {
    /// 商品編號（SKU）
    pub sku: String,

    /// 現有庫存量（None 表示尚無庫存資料）
    pub stock_level: Option<Decimal>,

    /// 每期銷量歷史（近期優先；僅總和與期數參與計算）
    pub sales_history: Vec<Decimal>,

    /// 累計銷量（區分「曾熱銷的缺貨」與「從未售出」）
    pub cumulative_sales: Option<Decimal>,
}

impl ProductSnapshot {
    /// 創建新的商品快照
    pub fn new(sku: String) -> Self {
        Self {
            sku,
            stock_level: None,
            sales_history: Vec::new(),
            cumulative_sales: None,
        }
    }

    /// 建構器模式：設置現有庫存量
    pub fn with_stock_level(mut self, stock_level: Decimal) -> Self {
        self.stock_level = Some(stock_level);
        self
    }

    /// 建構器模式：設置每期銷量歷史
    pub fn with_sales_history(mut self, sales_history: Vec<Decimal>) -> Self {
        self.sales_history = sales_history;
        self
    }

    /// 建構器模式：設置累計銷量
    pub fn with_cumulative_sales(mut self, cumulative_sales: Decimal) -> Self {
        self.cumulative_sales = Some(cumulative_sales);
        self
    }

    /// 近期銷量總和
    pub fn total_recent_sales(&self) -> Decimal {
        self.sales_history.iter().copied().sum()
    }

    /// 檢查是否有庫存資料
    pub fn has_stock_data(&self) -> bool {
        self.stock_level.is_some()
    }

    /// 檢查是否曾有銷售（依累計銷量判定）
    pub fn has_ever_sold(&self) -> bool {
        self.cumulative_sales
            .map_or(false, |total| total > Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_snapshot_creation() {
        let product = ProductSnapshot::new("SKU-001".to_string())
            .with_stock_level(Decimal::from(100))
            .with_sales_history(vec![Decimal::from(10), Decimal::from(20)])
            .with_cumulative_sales(Decimal::from(500));

        assert_eq!(product.sku, "SKU-001");
        assert_eq!(product.stock_level, Some(Decimal::from(100)));
        assert_eq!(product.sales_history.len(), 2);
        assert!(product.has_stock_data());
        assert!(product.has_ever_sold());
    }

    #[test]
    fn test_total_recent_sales() {
        let product = ProductSnapshot::new("SKU-001".to_string())
            .with_sales_history(vec![
                Decimal::from(10),
                Decimal::from(20),
                Decimal::from(30),
            ]);

        // 10 + 20 + 30 = 60
        assert_eq!(product.total_recent_sales(), Decimal::from(60));
    }

    #[test]
    fn test_empty_snapshot_defaults() {
        let product = ProductSnapshot::new("SKU-002".to_string());

        assert!(!product.has_stock_data());
        assert!(!product.has_ever_sold());
        assert_eq!(product.total_recent_sales(), Decimal::ZERO);
    }

    #[test]
    fn test_has_ever_sold_requires_positive_total() {
        // 累計銷量為 0 視同從未售出
        let product =
            ProductSnapshot::new("SKU-003".to_string()).with_cumulative_sales(Decimal::ZERO);

        assert!(!product.has_ever_sold());
    }
}
