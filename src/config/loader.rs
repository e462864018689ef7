//! Fixture loading functionality.
//!
//! This module provides the [`FixtureLoader`] type for reading receipt
//! fixtures from YAML. The demonstration receipts are compiled into the
//! binary, so no file is read at runtime.

use tracing::debug;

use crate::error::{TaxError, TaxResult};

use super::types::{FixtureSet, ReceiptFixture};

const EMBEDDED_FIXTURES: &str = include_str!("../../fixtures/receipts.yaml");

/// Loads and provides access to receipt fixtures.
///
/// # Example
///
/// ```
/// use sales_tax::config::FixtureLoader;
///
/// let loader = FixtureLoader::embedded().unwrap();
/// let receipt = loader.receipt("input_1").unwrap();
/// assert_eq!(receipt.items.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct FixtureLoader {
    fixtures: FixtureSet,
}

impl FixtureLoader {
    /// Loads the demonstration receipts embedded in the crate.
    pub fn embedded() -> TaxResult<Self> {
        Self::from_yaml_str(EMBEDDED_FIXTURES)
    }

    /// Parses a fixture document.
    ///
    /// # Errors
    ///
    /// Returns [`TaxError::FixtureParseError`] if the YAML is malformed or
    /// names an unknown category.
    pub fn from_yaml_str(content: &str) -> TaxResult<Self> {
        let fixtures: FixtureSet =
            serde_yaml::from_str(content).map_err(|e| TaxError::FixtureParseError {
                message: e.to_string(),
            })?;

        debug!(receipts = fixtures.receipts.len(), "Loaded receipt fixtures");
        Ok(Self { fixtures })
    }

    /// Returns all receipts in document order.
    pub fn receipts(&self) -> &[ReceiptFixture] {
        &self.fixtures.receipts
    }

    /// Gets a receipt by its name.
    ///
    /// # Errors
    ///
    /// Returns [`TaxError::FixtureNotFound`] if no receipt has that name.
    pub fn receipt(&self, name: &str) -> TaxResult<&ReceiptFixture> {
        self.fixtures
            .receipts
            .iter()
            .find(|receipt| receipt.name == name)
            .ok_or_else(|| TaxError::FixtureNotFound {
                name: name.to_string(),
            })
    }
}
