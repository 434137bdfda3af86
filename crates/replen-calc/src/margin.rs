//! 銷售財務拆解

use replen_core::money::safe_div;
use replen_core::{OrderSnapshot, SaleFinancials};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 財務拆解結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialBreakdown {
    /// 營收
    pub revenue: Decimal,

    /// 變動成本
    pub variable_costs: Decimal,

    /// 附加成本
    pub additional_costs: Decimal,

    /// 稅金
    pub taxes: Decimal,

    /// 總成本
    pub total_costs: Decimal,

    /// 利潤
    pub profit: Decimal,

    /// 利潤率（營收 <= 0 時為 0）
    pub margin: Decimal,
}

/// 訂單財務拆解結果
///
/// 訂單層級與品項層級平行計算，兩邊資料粒度常不一致，
/// 不強制彙總對帳。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderBreakdown {
    /// 訂單層級拆解
    pub order: FinancialBreakdown,

    /// 逐品項拆解
    pub items: Vec<FinancialBreakdown>,
}

/// 財務拆解計算器
pub struct MarginCalculator;

impl MarginCalculator {
    /// 拆解單筆財務記錄
    ///
    /// 同一公式適用於訂單與品項兩種粒度：
    /// 總成本 = 變動成本 + 附加成本 + 稅金，
    /// 利潤 = 營收 − 總成本，利潤率 = 利潤 / 營收。
    pub fn decompose(financials: &SaleFinancials) -> FinancialBreakdown {
        let revenue = financials.revenue();
        let variable_costs = financials.variable_costs();
        let additional_costs = financials.additional_costs();
        let taxes = financials.tax_amount();

        let total_costs = variable_costs + additional_costs + taxes;
        let profit = revenue - total_costs;
        let margin = if revenue > Decimal::ZERO {
            safe_div(profit, revenue)
        } else {
            Decimal::ZERO
        };

        FinancialBreakdown {
            revenue,
            variable_costs,
            additional_costs,
            taxes,
            total_costs,
            profit,
            margin,
        }
    }

    /// 拆解整張訂單：訂單層級一次、逐品項各一次
    pub fn decompose_order(order: &OrderSnapshot) -> OrderBreakdown {
        OrderBreakdown {
            order: Self::decompose(&order.financials),
            items: order
                .items
                .iter()
                .map(|item| Self::decompose(&item.financials))
                .collect(),
        }
    }
}
