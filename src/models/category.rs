//! Item categories and their tax exemption status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TaxError;

/// The category of goods an item belongs to.
///
/// Books, food and medicine are exempt from basic sales tax. Every other
/// category is taxable. Import duty is independent of the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Printed books.
    Books,
    /// Food, including confectionery.
    Food,
    /// Medical products.
    Medicine,
    /// Recorded music.
    Music,
    /// Perfume and other cosmetics.
    Cosmetics,
}

impl Category {
    /// Every known category, in declaration order.
    pub const ALL: [Category; 5] = [
        Category::Books,
        Category::Food,
        Category::Medicine,
        Category::Music,
        Category::Cosmetics,
    ];

    /// Returns true if goods in this category are exempt from basic sales tax.
    ///
    /// # Examples
    ///
    /// ```
    /// use sales_tax::models::Category;
    ///
    /// assert!(Category::Books.is_tax_exempt());
    /// assert!(!Category::Cosmetics.is_tax_exempt());
    /// ```
    pub fn is_tax_exempt(&self) -> bool {
        matches!(self, Category::Books | Category::Food | Category::Medicine)
    }

    /// Returns the lowercase label used in fixtures and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Books => "books",
            Category::Food => "food",
            Category::Medicine => "medicine",
            Category::Music => "music",
            Category::Cosmetics => "cosmetics",
        }
    }
}

impl FromStr for Category {
    type Err = TaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.label() == s)
            .ok_or_else(|| TaxError::UnknownCategory {
                label: s.to_string(),
            })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
