//! 銷售財務記錄模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 缺漏金額一律視為零貢獻
fn amount_or_zero(value: Option<Decimal>) -> Decimal {
    value.unwrap_or(Decimal::ZERO)
}

/// 單筆銷售的財務欄位
///
/// 訂單層級與品項層級共用同一結構。上游資料常有缺漏，
/// 缺漏欄位一律視為 0（零貢獻），不視為計算失敗。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaleFinancials {
    /// 商品營收
    pub base_revenue: Option<Decimal>,

    /// 運費收入
    pub freight_revenue: Option<Decimal>,

    /// 折扣（自營收扣除）
    pub discounts: Option<Decimal>,

    /// 商品成本
    pub product_cost: Option<Decimal>,

    /// 通路佣金
    pub channel_commission: Option<Decimal>,

    /// 平台固定費用
    pub marketplace_fee: Option<Decimal>,

    /// 出貨運費成本
    pub shipping_cost: Option<Decimal>,

    /// 運費稅
    pub freight_tax: Option<Decimal>,

    /// 上游彙總的變動成本（大於 0 時取代逐項合計）
    pub variable_cost_rollup: Option<Decimal>,

    /// 固定訂單費用
    pub fixed_order_expense: Option<Decimal>,

    /// 附加運費支出
    pub additional_freight_expense: Option<Decimal>,

    /// 附加折扣
    pub additional_discount: Option<Decimal>,

    /// 附加稅費
    pub additional_tax: Option<Decimal>,

    /// 稅金（獨立成本桶，恆為加項）
    pub taxes: Option<Decimal>,
}

impl SaleFinancials {
    /// 創建空的財務記錄
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：設置商品營收
    pub fn with_base_revenue(mut self, amount: Decimal) -> Self {
        self.base_revenue = Some(amount);
        self
    }

    /// 建構器模式：設置運費收入
    pub fn with_freight_revenue(mut self, amount: Decimal) -> Self {
        self.freight_revenue = Some(amount);
        self
    }

    /// 建構器模式：設置折扣
    pub fn with_discounts(mut self, amount: Decimal) -> Self {
        self.discounts = Some(amount);
        self
    }

    /// 建構器模式：設置商品成本
    pub fn with_product_cost(mut self, amount: Decimal) -> Self {
        self.product_cost = Some(amount);
        self
    }

    /// 建構器模式：設置通路佣金
    pub fn with_channel_commission(mut self, amount: Decimal) -> Self {
        self.channel_commission = Some(amount);
        self
    }

    /// 建構器模式：設置平台固定費用
    pub fn with_marketplace_fee(mut self, amount: Decimal) -> Self {
        self.marketplace_fee = Some(amount);
        self
    }

    /// 建構器模式：設置出貨運費成本
    pub fn with_shipping_cost(mut self, amount: Decimal) -> Self {
        self.shipping_cost = Some(amount);
        self
    }

    /// 建構器模式：設置運費稅
    pub fn with_freight_tax(mut self, amount: Decimal) -> Self {
        self.freight_tax = Some(amount);
        self
    }

    /// 建構器模式：設置變動成本彙總值
    pub fn with_variable_cost_rollup(mut self, amount: Decimal) -> Self {
        self.variable_cost_rollup = Some(amount);
        self
    }

    /// 建構器模式：設置固定訂單費用
    pub fn with_fixed_order_expense(mut self, amount: Decimal) -> Self {
        self.fixed_order_expense = Some(amount);
        self
    }

    /// 建構器模式：設置附加運費支出
    pub fn with_additional_freight_expense(mut self, amount: Decimal) -> Self {
        self.additional_freight_expense = Some(amount);
        self
    }

    /// 建構器模式：設置附加折扣
    pub fn with_additional_discount(mut self, amount: Decimal) -> Self {
        self.additional_discount = Some(amount);
        self
    }

    /// 建構器模式：設置附加稅費
    pub fn with_additional_tax(mut self, amount: Decimal) -> Self {
        self.additional_tax = Some(amount);
        self
    }

    /// 建構器模式：設置稅金
    pub fn with_taxes(mut self, amount: Decimal) -> Self {
        self.taxes = Some(amount);
        self
    }

    /// 營收（商品營收 + 運費收入 - 折扣）
    pub fn revenue(&self) -> Decimal {
        amount_or_zero(self.base_revenue) + amount_or_zero(self.freight_revenue)
            - amount_or_zero(self.discounts)
    }

    /// 逐項變動成本合計
    pub fn itemized_variable_costs(&self) -> Decimal {
        amount_or_zero(self.product_cost)
            + amount_or_zero(self.channel_commission)
            + amount_or_zero(self.marketplace_fee)
            + amount_or_zero(self.shipping_cost)
            + amount_or_zero(self.freight_tax)
    }

    /// 變動成本
    ///
    /// 彙總值存在且大於 0 時以彙總值為準，否則退回逐項合計。
    /// 彙總值為 0 或負值視同缺漏。
    pub fn variable_costs(&self) -> Decimal {
        match self.variable_cost_rollup {
            Some(rollup) if rollup > Decimal::ZERO => rollup,
            _ => self.itemized_variable_costs(),
        }
    }

    /// 附加成本合計（恆為逐項加總，不受彙總值影響）
    pub fn additional_costs(&self) -> Decimal {
        amount_or_zero(self.fixed_order_expense)
            + amount_or_zero(self.additional_freight_expense)
            + amount_or_zero(self.additional_discount)
            + amount_or_zero(self.additional_tax)
    }

    /// 稅金
    pub fn tax_amount(&self) -> Decimal {
        amount_or_zero(self.taxes)
    }

    /// 檢查是否至少有一個財務欄位
    pub fn has_financial_data(&self) -> bool {
        [
            self.base_revenue,
            self.freight_revenue,
            self.discounts,
            self.product_cost,
            self.channel_commission,
            self.marketplace_fee,
            self.shipping_cost,
            self.freight_tax,
            self.variable_cost_rollup,
            self.fixed_order_expense,
            self.additional_freight_expense,
            self.additional_discount,
            self.additional_tax,
            self.taxes,
        ]
        .iter()
        .any(Option::is_some)
    }
}

/// 訂單品項
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaleLineItem {
    /// 商品編號（SKU）
    pub sku: Option<String>,

    /// 銷售數量
    pub quantity: Option<Decimal>,

    /// 品項層級財務欄位
    pub financials: SaleFinancials,
}

impl SaleLineItem {
    /// 創建新的訂單品項
    pub fn new(financials: SaleFinancials) -> Self {
        Self {
            sku: None,
            quantity: None,
            financials,
        }
    }

    /// 建構器模式：設置商品編號
    pub fn with_sku(mut self, sku: String) -> Self {
        self.sku = Some(sku);
        self
    }

    /// 建構器模式：設置銷售數量
    pub fn with_quantity(mut self, quantity: Decimal) -> Self {
        self.quantity = Some(quantity);
        self
    }
}

/// 訂單快照（訂單層級欄位 + 品項清單）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderSnapshot {
    /// 訂單編號
    pub order_ref: Option<String>,

    /// 訂單層級財務欄位
    pub financials: SaleFinancials,

    /// 品項清單
    pub items: Vec<SaleLineItem>,
}

impl OrderSnapshot {
    /// 創建新的訂單快照
    pub fn new(financials: SaleFinancials) -> Self {
        Self {
            order_ref: None,
            financials,
            items: Vec::new(),
        }
    }

    /// 建構器模式：設置訂單編號
    pub fn with_order_ref(mut self, order_ref: String) -> Self {
        self.order_ref = Some(order_ref);
        self
    }

    /// 建構器模式：添加品項
    pub fn with_item(mut self, item: SaleLineItem) -> Self {
        self.items.push(item);
        self
    }
}
