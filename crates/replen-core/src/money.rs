//! 共用數值與格式化輔助

use rust_decimal::Decimal;

use crate::{ReplenError, Result};

/// 安全除法：分母為 0 時返回 0 而非 panic
pub fn safe_div(numerator: Decimal, denominator: Decimal) -> Decimal {
    numerator.checked_div(denominator).unwrap_or(Decimal::ZERO)
}

/// 將 f64 金額轉為 Decimal，拒絕 NaN 與無窮值
///
/// 上游介接層（匯入、API）在邊界呼叫一次，
/// 之後的計算全程使用 Decimal，不再出現非有限值。
pub fn decimal_from_f64(value: f64) -> Result<Decimal> {
    if !value.is_finite() {
        return Err(ReplenError::NonFiniteAmount(value.to_string()));
    }
    Decimal::try_from(value).map_err(|_| ReplenError::NonFiniteAmount(value.to_string()))
}

/// 格式化金額（貨幣符號 + 千分位 + 兩位小數）
pub fn format_currency(amount: Decimal, symbol: &str) -> String {
    let rounded = amount.round_dp(2);
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some(parts) => parts,
        None => (text.as_str(), "00"),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{} {}{}.{}", symbol, sign, grouped, frac_part)
}

/// 將比率格式化為百分比字串（0.476 -> "47.6%"）
pub fn format_percent(ratio: Decimal, decimal_places: u32) -> String {
    let percent = (ratio * Decimal::from(100)).round_dp(decimal_places);
    format!("{:.prec$}%", percent, prec = decimal_places as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_div() {
        // 10 / 4 = 2.5
        assert_eq!(
            safe_div(Decimal::from(10), Decimal::from(4)),
            Decimal::new(25, 1)
        );
    }

    #[test]
    fn test_safe_div_zero_denominator() {
        assert_eq!(safe_div(Decimal::from(10), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_decimal_from_f64() {
        let amount = decimal_from_f64(19.99).unwrap();

        assert_eq!(amount.to_string(), "19.99");
    }

    #[test]
    fn test_decimal_from_f64_rejects_non_finite() {
        assert!(decimal_from_f64(f64::NAN).is_err());
        assert!(decimal_from_f64(f64::INFINITY).is_err());
        assert!(decimal_from_f64(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_format_currency_groups_thousands() {
        let amount = Decimal::new(1_234_567_891, 3); // 1234567.891

        assert_eq!(format_currency(amount, "R$"), "R$ 1,234,567.89");
    }

    #[test]
    fn test_format_currency_small_amounts() {
        assert_eq!(format_currency(Decimal::ZERO, "R$"), "R$ 0.00");
        assert_eq!(format_currency(Decimal::from(-50), "R$"), "R$ -50.00");
        assert_eq!(format_currency(Decimal::new(5, 1), "$"), "$ 0.50");
    }

    #[test]
    fn test_format_currency_rounds_to_cents() {
        // 999.999 進位到 1000.00
        let amount = Decimal::new(999_999, 3);

        assert_eq!(format_currency(amount, "R$"), "R$ 1,000.00");
    }

    #[test]
    fn test_format_percent() {
        // 0.476 -> 47.6%
        assert_eq!(format_percent(Decimal::new(476, 3), 1), "47.6%");
        assert_eq!(format_percent(Decimal::ZERO, 1), "0.0%");
        assert_eq!(format_percent(Decimal::ONE, 0), "100%");
    }
}
