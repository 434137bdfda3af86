//! 訂單獲利拆解示例

use replen::money::{decimal_from_f64, format_currency, format_percent};
use replen::{MarginCalculator, OrderSnapshot, SaleFinancials, SaleLineItem};
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== 訂單獲利拆解示例 ===\n");

    // 上游金額常是 f64，進引擎前先轉 Decimal
    let base_revenue = decimal_from_f64(200.0)?;
    let freight_revenue = decimal_from_f64(30.0)?;
    let discounts = decimal_from_f64(20.0)?;

    let order = OrderSnapshot::new(
        SaleFinancials::new()
            .with_base_revenue(base_revenue)
            .with_freight_revenue(freight_revenue)
            .with_discounts(discounts)
            .with_product_cost(Decimal::from(80))
            .with_channel_commission(Decimal::from(15))
            .with_shipping_cost(Decimal::from(12))
            .with_freight_tax(Decimal::from(3)),
    )
    .with_order_ref("ORD-1001".to_string())
    .with_item(
        SaleLineItem::new(
            SaleFinancials::new()
                .with_base_revenue(Decimal::from(140))
                .with_variable_cost_rollup(Decimal::from(70)),
        )
        .with_sku("SKU-KB-RED".to_string())
        .with_quantity(Decimal::from(2)),
    )
    .with_item(
        SaleLineItem::new(
            SaleFinancials::new()
                .with_base_revenue(Decimal::from(60))
                .with_product_cost(Decimal::from(40)),
        )
        .with_sku("SKU-CABLE-2M".to_string())
        .with_quantity(Decimal::ONE),
    );

    let breakdown = MarginCalculator::decompose_order(&order);

    println!("訂單 {}:", order.order_ref.as_deref().unwrap_or("(未知)"));
    println!("  營收:     {}", format_currency(breakdown.order.revenue, "R$"));
    println!(
        "  變動成本: {}",
        format_currency(breakdown.order.variable_costs, "R$")
    );
    println!(
        "  附加成本: {}",
        format_currency(breakdown.order.additional_costs, "R$")
    );
    println!("  稅金:     {}", format_currency(breakdown.order.taxes, "R$"));
    println!(
        "  總成本:   {}",
        format_currency(breakdown.order.total_costs, "R$")
    );
    println!("  利潤:     {}", format_currency(breakdown.order.profit, "R$"));
    println!("  利潤率:   {}", format_percent(breakdown.order.margin, 1));

    println!("\n品項拆解:");
    for (item, item_breakdown) in order.items.iter().zip(&breakdown.items) {
        println!(
            "  - {} x{}: 營收 {}, 利潤 {}, 利潤率 {}",
            item.sku.as_deref().unwrap_or("(未知)"),
            item.quantity.unwrap_or(Decimal::ONE),
            format_currency(item_breakdown.revenue, "R$"),
            format_currency(item_breakdown.profit, "R$"),
            format_percent(item_breakdown.margin, 1)
        );
    }

    Ok(())
}
