//! Category classification from free-text labels.

use tracing::warn;

use crate::models::Category;

/// Returns true if the category label names a sales tax exempt category.
///
/// Only `"books"`, `"food"` and `"medicine"` are exempt. Any other label,
/// including one that is not a known category at all, is taxable. Use
/// `str::parse::<Category>` instead when unknown labels should be rejected.
///
/// # Examples
///
/// ```
/// use sales_tax::calculation::classify;
///
/// assert!(classify("food"));
/// assert!(!classify("music"));
/// assert!(!classify("jewellery"));
/// ```
pub fn classify(label: &str) -> bool {
    match label.parse::<Category>() {
        Ok(category) => category.is_tax_exempt(),
        Err(_) => {
            warn!(label = %label, "Unknown category label, treating as taxable");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exempt_labels() {
        assert!(classify("books"));
        assert!(classify("food"));
        assert!(classify("medicine"));
    }

    #[test]
    fn test_taxable_labels() {
        assert!(!classify("music"));
        assert!(!classify("cosmetics"));
    }

    #[test]
    fn test_unknown_labels_default_to_taxable() {
        assert!(!classify("jewellery"));
        assert!(!classify(""));
        assert!(!classify("Books"));
    }

    #[test]
    fn test_agrees_with_category_exemption() {
        for category in Category::ALL {
            assert_eq!(classify(category.label()), category.is_tax_exempt());
        }
    }
}
