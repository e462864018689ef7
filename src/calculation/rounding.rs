//! Tax rounding functionality.
//!
//! Combined tax is rounded up to a multiple of 0.05. Two rules exist: the
//! default rounds up to the next increment and keeps values that already sit
//! on one, while [`TaxRounding::StrictlyUp`] always moves to the following
//! increment, matching the truncating rounding of the legacy receipts.
//! The default is the rule that reproduces 10.50 for an imported item priced
//! 10.00; strictly-up would print 10.55 there.
//!
//! Amounts too large to divide by the increment saturate at `Decimal::MAX`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Returns the rounding increment, 0.05.
pub fn rounding_increment() -> Decimal {
    Decimal::new(5, 2)
}

/// How a raw tax amount is brought onto the 0.05 grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxRounding {
    /// `ceil(x / 0.05) * 0.05`: the smallest multiple of 0.05 not below `x`.
    #[default]
    UpToIncrement,
    /// `floor(x / 0.05) * 0.05 + 0.05`: an exact multiple still moves up.
    StrictlyUp,
}

impl TaxRounding {
    /// Rounds a non-negative raw tax amount. Zero always stays zero.
    ///
    /// Saturates at `Decimal::MAX` instead of overflowing.
    ///
    /// # Examples
    ///
    /// ```
    /// use sales_tax::calculation::TaxRounding;
    /// use rust_decimal::Decimal;
    ///
    /// let exact = Decimal::new(10, 2); // 0.10
    /// assert_eq!(TaxRounding::UpToIncrement.apply(exact), Decimal::new(10, 2));
    /// assert_eq!(TaxRounding::StrictlyUp.apply(exact), Decimal::new(15, 2));
    /// assert_eq!(TaxRounding::StrictlyUp.apply(Decimal::ZERO), Decimal::ZERO);
    /// ```
    pub fn apply(&self, raw_tax: Decimal) -> Decimal {
        if raw_tax.is_zero() {
            return Decimal::ZERO;
        }

        let increment = rounding_increment();
        let rounded = raw_tax.checked_div(increment).and_then(|steps| match self {
            TaxRounding::UpToIncrement => steps.ceil().checked_mul(increment),
            TaxRounding::StrictlyUp => steps
                .floor()
                .checked_mul(increment)
                .and_then(|floor| floor.checked_add(increment)),
        });

        rounded.unwrap_or(Decimal::MAX)
    }
}

/// Rounds a raw tax amount with the default rule.
///
/// # Examples
///
/// ```
/// use sales_tax::calculation::round_tax;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_tax(Decimal::from_str("1.499").unwrap()), Decimal::from_str("1.50").unwrap());
/// assert_eq!(round_tax(Decimal::from_str("7.125").unwrap()), Decimal::from_str("7.15").unwrap());
/// assert_eq!(round_tax(Decimal::ZERO), Decimal::ZERO);
/// ```
pub fn round_tax(raw_tax: Decimal) -> Decimal {
    TaxRounding::default().apply(raw_tax)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_rounding_increment_is_five_cents() {
        assert_eq!(rounding_increment(), dec("0.05"));
    }

    #[test]
    fn test_zero_stays_zero_under_both_rules() {
        assert_eq!(round_tax(Decimal::ZERO), Decimal::ZERO);
        assert_eq!(TaxRounding::StrictlyUp.apply(dec("0.00")), Decimal::ZERO);
    }

    #[test]
    fn test_rounds_up_to_next_increment() {
        assert_eq!(round_tax(dec("1.499")), dec("1.50"));
        assert_eq!(round_tax(dec("0.5625")), dec("0.60"));
        assert_eq!(round_tax(dec("4.1985")), dec("4.20"));
        assert_eq!(round_tax(dec("0.01")), dec("0.05"));
    }

    #[test]
    fn test_default_keeps_exact_multiples() {
        assert_eq!(round_tax(dec("0.50")), dec("0.50"));
        assert_eq!(round_tax(dec("0.10")), dec("0.10"));
        assert_eq!(round_tax(dec("4.75")), dec("4.75"));
    }

    #[test]
    fn test_strictly_up_moves_exact_multiples() {
        let rule = TaxRounding::StrictlyUp;
        assert_eq!(rule.apply(dec("0.10")), dec("0.15"));
        assert_eq!(rule.apply(dec("0.05")), dec("0.10"));
        assert_eq!(rule.apply(dec("4.75")), dec("4.80"));
    }

    #[test]
    fn test_strictly_up_agrees_off_the_grid() {
        let rule = TaxRounding::StrictlyUp;
        for raw in ["1.499", "0.5625", "4.1985", "7.125", "0.0001"] {
            assert_eq!(rule.apply(dec(raw)), round_tax(dec(raw)), "raw tax {}", raw);
        }
    }

    #[test]
    fn test_huge_amounts_saturate_instead_of_overflowing() {
        assert_eq!(round_tax(Decimal::MAX), Decimal::MAX);
        assert_eq!(TaxRounding::StrictlyUp.apply(Decimal::MAX), Decimal::MAX);
    }

    #[test]
    fn test_default_rule_is_up_to_increment() {
        assert_eq!(TaxRounding::default(), TaxRounding::UpToIncrement);
    }

    #[test]
    fn test_rule_serialization() {
        assert_eq!(
            serde_json::to_string(&TaxRounding::StrictlyUp).unwrap(),
            "\"strictly_up\""
        );
    }
}
