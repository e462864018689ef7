//! Console rendering of receipts.
//!
//! A rendered receipt is one `<name>: <amount>` line per item followed by a
//! `Sales Tax` line and a `Total` line. Every amount carries two decimals.

use rust_decimal::{Decimal, RoundingStrategy};
use std::io::Write;
use tracing::info;

use crate::calculation::calculate_receipt;
use crate::error::TaxResult;
use crate::models::{Item, ReceiptResult};

/// Formats an amount with exactly two decimal places.
///
/// Midpoints round away from zero, so `0.125` prints as `0.13`.
///
/// # Examples
///
/// ```
/// use sales_tax::render::format_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_amount(Decimal::new(105, 1)), "10.50");
/// assert_eq!(format_amount(Decimal::ZERO), "0.00");
/// ```
pub fn format_amount(amount: Decimal) -> String {
    let mut amount = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    amount.rescale(2);
    amount.to_string()
}

/// Formats a calculated receipt as console text, one line per `\n`.
pub fn format_receipt(receipt: &ReceiptResult) -> String {
    let mut text = String::new();
    for line in &receipt.lines {
        text.push_str(&format!(
            "{}: {}\n",
            line.name,
            format_amount(line.price_including_tax)
        ));
    }
    text.push_str(&format!("Sales Tax: {}\n", format_amount(receipt.sales_tax)));
    text.push_str(&format!("Total: {}\n", format_amount(receipt.total)));
    text
}

/// Calculates a receipt for the items and writes it to `out`.
///
/// # Errors
///
/// Returns [`crate::error::TaxError::Output`] if writing fails.
///
/// # Examples
///
/// ```
/// use sales_tax::models::Item;
/// use sales_tax::render::render_receipt;
/// use rust_decimal::Decimal;
///
/// let items = vec![Item::from_flags("book", Decimal::new(1249, 2), true, false).unwrap()];
/// let mut out = Vec::new();
/// render_receipt(&items, &mut out).unwrap();
///
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "book: 12.49\nSales Tax: 0.00\nTotal: 12.49\n"
/// );
/// ```
pub fn render_receipt<W: Write>(items: &[Item], out: &mut W) -> TaxResult<()> {
    let receipt = calculate_receipt(items);
    info!(
        items = receipt.lines.len(),
        sales_tax = %receipt.sales_tax,
        total = %receipt.total,
        "Rendering receipt"
    );

    out.write_all(format_receipt(&receipt).as_bytes())?;
    out.flush()?;
    Ok(())
}
