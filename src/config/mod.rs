//! Receipt fixtures for the sales tax engine.
//!
//! The three demonstration receipts live in an embedded YAML document and
//! are exposed through [`FixtureLoader`].
//!
//! # Example
//!
//! ```
//! use sales_tax::config::FixtureLoader;
//!
//! let loader = FixtureLoader::embedded().unwrap();
//! for receipt in loader.receipts() {
//!     let items = receipt.build_items().unwrap();
//!     assert!(!items.is_empty());
//! }
//! ```

mod loader;
mod types;

pub use loader::FixtureLoader;
pub use types::{FixtureSet, ReceiptFixture};
