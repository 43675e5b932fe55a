//! Implied-decimal amounts.
//!
//! The extract writes every value as a run of digits with no separator; the
//! layout fixes how many trailing digits are decimals.

use rust_decimal::Decimal;

/// Scale of currency amounts (centavos).
pub const CURRENCY_SCALE: u32 = 2;

/// Scale of rates and fee percentages.
pub const RATE_SCALE: u32 = 3;

/// Parse a digits-only string with `scale` implied decimal places.
///
/// Blank or non-numeric input resolves to zero rather than an error.
///
/// ```
/// use cielo_edi_core::fields::parse_implied_decimal;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_implied_decimal("0000000097500", 2), Decimal::new(97500, 2));
/// assert_eq!(parse_implied_decimal("   ", 2), Decimal::ZERO);
/// ```
pub fn parse_implied_decimal(digits: &str, scale: u32) -> Decimal {
    let digits = digits.trim();
    if digits.is_empty() {
        return Decimal::ZERO;
    }

    digits
        .parse::<i128>()
        .ok()
        .and_then(|n| Decimal::try_from_i128_with_scale(n, scale).ok())
        .unwrap_or(Decimal::ZERO)
}
