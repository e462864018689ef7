//! Sales Tax Receipt Engine
//!
//! This crate computes itemized sales tax and totals for a shopping receipt.
//! Basic sales tax applies to every item outside the exempt categories
//! (books, food, medicine), import duty applies to every imported item, and
//! the combined tax of each item is rounded up to the nearest 0.05.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
