//! Fixture document types.
//!
//! These structures are deserialized from the receipt fixture YAML.

use serde::Deserialize;

use crate::error::TaxResult;
use crate::models::{Item, ItemSpec};

/// A named receipt and the items on it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReceiptFixture {
    /// The receipt name (e.g., "input_1").
    pub name: String,
    /// The items in receipt order.
    pub items: Vec<ItemSpec>,
}

impl ReceiptFixture {
    /// Builds every item of the receipt, in order.
    ///
    /// # Errors
    ///
    /// Returns the first item construction error encountered.
    pub fn build_items(&self) -> TaxResult<Vec<Item>> {
        self.items.iter().cloned().map(Item::new).collect()
    }
}

/// The top-level fixture document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FixtureSet {
    /// All receipts in document order.
    pub receipts: Vec<ReceiptFixture>,
}
