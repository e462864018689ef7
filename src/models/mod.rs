//! Core data models for the sales tax engine.

mod category;
mod item;
mod receipt;

pub use category::Category;
pub use item::{Item, ItemSpec, max_price};
pub use receipt::{AuditStep, AuditTrace, ReceiptLine, ReceiptResult};
