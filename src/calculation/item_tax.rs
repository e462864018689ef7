//! Per-item tax derivation.
//!
//! Basic sales tax is 10% of the price for every item outside the exempt
//! categories. Import duty is 5% of the price for every imported item,
//! exempt or not. The two are added before rounding.

use rust_decimal::Decimal;
use tracing::debug;

use super::round_tax;
use crate::models::{AuditStep, Item};

/// Returns the basic sales tax rate in percent (10).
pub fn basic_sales_tax_rate() -> Decimal {
    Decimal::from(10)
}

/// Returns the import duty rate in percent (5).
pub fn import_tax_rate() -> Decimal {
    Decimal::from(5)
}

fn calculate_tax(price: Decimal, rate: Decimal) -> Decimal {
    price * rate / Decimal::ONE_HUNDRED
}

/// Basic sales tax for an item, before rounding.
///
/// Zero for exempt items regardless of price.
pub fn sales_tax(item: &Item) -> Decimal {
    if item.is_tax_exempt() {
        return Decimal::ZERO;
    }
    calculate_tax(item.price(), basic_sales_tax_rate())
}

/// Import duty for an item, before rounding.
///
/// Zero for domestic items regardless of price.
pub fn import_tax(item: &Item) -> Decimal {
    if !item.is_imported() {
        return Decimal::ZERO;
    }
    calculate_tax(item.price(), import_tax_rate())
}

/// The item price plus its rounded combined tax.
///
/// # Examples
///
/// ```
/// use sales_tax::calculation::price_including_tax;
/// use sales_tax::models::Item;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let perfume = Item::from_flags(
///     "imported bottle of perfume",
///     Decimal::from_str("47.50").unwrap(),
///     false,
///     true,
/// )
/// .unwrap();
///
/// assert_eq!(price_including_tax(&perfume), Decimal::from_str("54.65").unwrap());
/// ```
pub fn price_including_tax(item: &Item) -> Decimal {
    item.price() + round_tax(sales_tax(item) + import_tax(item))
}

/// The tax components of a single item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxBreakdown {
    /// Basic sales tax before rounding.
    pub sales_tax: Decimal,
    /// Import duty before rounding.
    pub import_tax: Decimal,
    /// Sales tax plus import duty, before rounding.
    pub raw_tax: Decimal,
    /// The combined tax after rounding.
    pub rounded_tax: Decimal,
    /// The price plus the rounded tax.
    pub price_including_tax: Decimal,
}

/// The result of deriving an item's taxes, including the audit step.
#[derive(Debug, Clone)]
pub struct ItemTaxResult {
    /// The derived tax components.
    pub breakdown: TaxBreakdown,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Derives every tax component of an item and records how it was reached.
///
/// # Arguments
///
/// * `item` - The item to tax
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use sales_tax::calculation::calculate_item_tax;
/// use sales_tax::models::Item;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let cd = Item::from_flags("music CD", Decimal::from_str("14.99").unwrap(), false, false).unwrap();
/// let result = calculate_item_tax(&cd, 1);
///
/// assert_eq!(result.breakdown.raw_tax, Decimal::from_str("1.499").unwrap());
/// assert_eq!(result.breakdown.rounded_tax, Decimal::from_str("1.50").unwrap());
/// assert_eq!(result.audit_step.rule_id, "item_tax");
/// ```
pub fn calculate_item_tax(item: &Item, step_number: u32) -> ItemTaxResult {
    let sales_tax = sales_tax(item);
    let import_tax = import_tax(item);
    let raw_tax = sales_tax + import_tax;
    let rounded_tax = round_tax(raw_tax);
    let price_including_tax = item.price() + rounded_tax;

    debug!(
        item = %item.name(),
        raw_tax = %raw_tax,
        rounded_tax = %rounded_tax,
        "Derived item tax"
    );

    let sales_reason = if item.is_tax_exempt() {
        "exempt from sales tax".to_string()
    } else {
        format!(
            "${} x {}% = ${} sales tax",
            item.price().normalize(),
            basic_sales_tax_rate(),
            sales_tax.normalize()
        )
    };
    let import_reason = if item.is_imported() {
        format!(
            "${} x {}% = ${} import duty",
            item.price().normalize(),
            import_tax_rate(),
            import_tax.normalize()
        )
    } else {
        "no import duty".to_string()
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "item_tax".to_string(),
        rule_name: "Item Tax".to_string(),
        input: serde_json::json!({
            "name": item.name(),
            "price": item.price().normalize().to_string(),
            "tax_exempt": item.is_tax_exempt(),
            "imported": item.is_imported()
        }),
        output: serde_json::json!({
            "sales_tax": sales_tax.normalize().to_string(),
            "import_tax": import_tax.normalize().to_string(),
            "rounded_tax": rounded_tax.normalize().to_string(),
            "price_including_tax": price_including_tax.normalize().to_string()
        }),
        reasoning: format!(
            "{}; {}; ${} rounded up to ${}",
            sales_reason,
            import_reason,
            raw_tax.normalize(),
            rounded_tax.normalize()
        ),
    };

    ItemTaxResult {
        breakdown: TaxBreakdown {
            sales_tax,
            import_tax,
            raw_tax,
            rounded_tax,
            price_including_tax,
        },
        audit_step,
    }
}
