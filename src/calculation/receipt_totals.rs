//! Receipt accumulation.
//!
//! Walks the items in order, keeping a running sum of pre-rounding tax and of
//! tax-inclusive prices. The tax sum is rounded once at the end.

use rust_decimal::Decimal;

use super::{calculate_item_tax, round_tax};
use crate::models::{AuditTrace, Item, ReceiptLine, ReceiptResult};

/// Calculates the lines and summary amounts of a receipt.
///
/// The accumulated tax is each item's basic sales tax plus import duty,
/// before per-item rounding. An empty slice yields zero for both summary
/// amounts and no lines. Running sums saturate at `Decimal::MAX`.
///
/// # Examples
///
/// ```
/// use sales_tax::calculation::calculate_receipt;
/// use sales_tax::models::Item;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let items = vec![
///     Item::from_flags("imported box of chocolates", dec("10.00"), true, true).unwrap(),
///     Item::from_flags("imported bottle of perfume", dec("47.50"), false, true).unwrap(),
/// ];
///
/// let receipt = calculate_receipt(&items);
/// assert_eq!(receipt.sales_tax, dec("7.65"));
/// assert_eq!(receipt.total, dec("65.15"));
/// ```
pub fn calculate_receipt(items: &[Item]) -> ReceiptResult {
    let mut raw_tax = Decimal::ZERO;
    let mut total = Decimal::ZERO;
    let mut lines = Vec::with_capacity(items.len());
    let mut steps = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let result = calculate_item_tax(item, index as u32 + 1);

        raw_tax = raw_tax.saturating_add(result.breakdown.raw_tax);
        total = total.saturating_add(result.breakdown.price_including_tax);

        lines.push(ReceiptLine {
            name: item.name().to_string(),
            price: item.price(),
            price_including_tax: result.breakdown.price_including_tax,
        });
        steps.push(result.audit_step);
    }

    ReceiptResult {
        lines,
        sales_tax: round_tax(raw_tax),
        total,
        audit_trace: AuditTrace { steps },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::max_price;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn item(name: &str, price: &str, is_tax_exempt: bool, is_imported: bool) -> Item {
        Item::from_flags(name, dec(price), is_tax_exempt, is_imported).unwrap()
    }

    #[test]
    fn test_empty_receipt() {
        let receipt = calculate_receipt(&[]);

        assert!(receipt.lines.is_empty());
        assert_eq!(receipt.sales_tax, Decimal::ZERO);
        assert_eq!(receipt.total, Decimal::ZERO);
        assert!(receipt.audit_trace.steps.is_empty());
    }

    #[test]
    fn test_first_sample_receipt() {
        let items = vec![
            item("book", "12.49", true, false),
            item("music CD", "14.99", false, false),
            item("chocolate bar", "0.85", true, false),
        ];
        let receipt = calculate_receipt(&items);

        let prices: Vec<Decimal> = receipt
            .lines
            .iter()
            .map(|line| line.price_including_tax)
            .collect();
        assert_eq!(prices, vec![dec("12.49"), dec("16.49"), dec("0.85")]);
        assert_eq!(receipt.sales_tax, dec("1.50"));
        assert_eq!(receipt.total, dec("29.83"));
    }

    #[test]
    fn test_third_sample_receipt() {
        let items = vec![
            item("imported bottle of perfume", "27.99", false, true),
            item("bottle of perfume", "18.99", false, false),
            item("packet of headache pills", "9.75", true, false),
            item("box of imported chocolates", "11.25", true, true),
        ];
        let receipt = calculate_receipt(&items);

        assert_eq!(receipt.lines[0].price_including_tax, dec("32.19"));
        assert_eq!(receipt.lines[1].price_including_tax, dec("20.89"));
        assert_eq!(receipt.lines[2].price_including_tax, dec("9.75"));
        assert_eq!(receipt.lines[3].price_including_tax, dec("11.85"));
        assert_eq!(receipt.sales_tax, dec("6.70"));
        assert_eq!(receipt.total, dec("74.68"));
    }

    #[test]
    fn test_lines_preserve_input_order() {
        let items = vec![
            item("zebra", "1.00", true, false),
            item("apple", "2.00", true, false),
        ];
        let receipt = calculate_receipt(&items);

        assert_eq!(receipt.lines[0].name, "zebra");
        assert_eq!(receipt.lines[1].name, "apple");
    }

    #[test]
    fn test_tax_is_rounded_once_over_the_sum() {
        // 0.01 each raw, 0.05 each rounded; the sum 0.02 rounds to 0.05.
        let items = vec![
            item("sticker", "0.10", false, false),
            item("eraser", "0.10", false, false),
        ];
        let receipt = calculate_receipt(&items);

        assert_eq!(receipt.total, dec("0.30"));
        assert_eq!(receipt.sales_tax, dec("0.05"));
    }

    #[test]
    fn test_receipt_of_largest_prices_does_not_overflow() {
        let items = vec![
            Item::from_flags("yacht", max_price(), false, true).unwrap(),
            Item::from_flags("jet", max_price(), false, true).unwrap(),
        ];
        let receipt = calculate_receipt(&items);

        assert_eq!(receipt.total, dec("2300000000000000"));
        assert_eq!(receipt.sales_tax, dec("300000000000000"));
    }

    #[test]
    fn test_audit_steps_are_numbered_from_one() {
        let items = vec![
            item("book", "12.49", true, false),
            item("music CD", "14.99", false, false),
        ];
        let receipt = calculate_receipt(&items);

        let numbers: Vec<u32> = receipt
            .audit_trace
            .steps
            .iter()
            .map(|step| step.step_number)
            .collect();
        assert_eq!(numbers, vec![1, 2]);
    }
}
