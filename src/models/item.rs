//! Item model and the specification it is built from.
//!
//! An [`Item`] is an immutable receipt line. Its taxes are not stored: they
//! are derived from the price and the two flags every time they are read.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Category;
use crate::calculation;
use crate::error::{TaxError, TaxResult};

/// The description an [`Item`] is built from.
///
/// This is the shape items take in fixture documents.
///
/// # Example
///
/// ```
/// use sales_tax::models::{Category, ItemSpec};
/// use rust_decimal::Decimal;
///
/// let spec = ItemSpec {
///     name: "music CD".to_string(),
///     price: Decimal::new(1499, 2),
///     category: Category::Music,
///     imported: false,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSpec {
    /// The display name printed on the receipt.
    pub name: String,
    /// The pre-tax unit price.
    pub price: Decimal,
    /// The category, which decides the sales tax exemption.
    pub category: Category,
    /// Whether the item is imported.
    #[serde(default)]
    pub imported: bool,
}

/// Returns the largest price an item may carry, one quadrillion.
///
/// Taxes and receipt totals on prices up to this bound stay far inside the
/// range of `Decimal`.
pub fn max_price() -> Decimal {
    Decimal::new(1_000_000_000_000_000, 0)
}

/// A single line item on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    name: String,
    price: Decimal,
    is_tax_exempt: bool,
    is_imported: bool,
}

impl Item {
    /// Builds an item from its specification.
    ///
    /// # Errors
    ///
    /// Returns [`TaxError::NegativePrice`] if the price is below zero, or
    /// [`TaxError::PriceTooLarge`] if it exceeds [`max_price`].
    ///
    /// # Examples
    ///
    /// ```
    /// use sales_tax::models::{Category, Item, ItemSpec};
    /// use rust_decimal::Decimal;
    ///
    /// let item = Item::new(ItemSpec {
    ///     name: "book".to_string(),
    ///     price: Decimal::new(1249, 2),
    ///     category: Category::Books,
    ///     imported: false,
    /// })
    /// .unwrap();
    ///
    /// assert!(item.is_tax_exempt());
    /// assert_eq!(item.price_including_tax(), Decimal::new(1249, 2));
    /// ```
    pub fn new(spec: ItemSpec) -> TaxResult<Self> {
        let is_tax_exempt = spec.category.is_tax_exempt();
        debug!(
            item = %spec.name,
            category = %spec.category,
            imported = spec.imported,
            "Building item"
        );
        Self::from_flags(spec.name, spec.price, is_tax_exempt, spec.imported)
    }

    /// Builds an item from explicit flags, bypassing category lookup.
    ///
    /// # Errors
    ///
    /// Returns [`TaxError::NegativePrice`] if the price is below zero, or
    /// [`TaxError::PriceTooLarge`] if it exceeds [`max_price`].
    pub fn from_flags(
        name: impl Into<String>,
        price: Decimal,
        is_tax_exempt: bool,
        is_imported: bool,
    ) -> TaxResult<Self> {
        let name = name.into();
        if price < Decimal::ZERO {
            return Err(TaxError::NegativePrice { item: name, price });
        }
        if price > max_price() {
            return Err(TaxError::PriceTooLarge {
                item: name,
                price,
                max: max_price(),
            });
        }

        Ok(Self {
            name,
            price,
            is_tax_exempt,
            is_imported,
        })
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The pre-tax unit price.
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Returns true if the item is exempt from basic sales tax.
    pub fn is_tax_exempt(&self) -> bool {
        self.is_tax_exempt
    }

    /// Returns true if the item is subject to import duty.
    pub fn is_imported(&self) -> bool {
        self.is_imported
    }

    /// Basic sales tax before rounding.
    pub fn sales_tax(&self) -> Decimal {
        calculation::sales_tax(self)
    }

    /// Import duty before rounding.
    pub fn import_tax(&self) -> Decimal {
        calculation::import_tax(self)
    }

    /// Price plus the rounded combined tax.
    pub fn price_including_tax(&self) -> Decimal {
        calculation::price_including_tax(self)
    }
}

impl TryFrom<ItemSpec> for Item {
    type Error = TaxError;

    fn try_from(spec: ItemSpec) -> Result<Self, Self::Error> {
        Item::new(spec)
    }
}
