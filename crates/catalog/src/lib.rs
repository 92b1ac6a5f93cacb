//! Catalog read models.
//!
//! This crate contains the product record shapes the storefront client
//! renders from, implemented purely as data (no IO, no HTTP, no storage).

pub mod product;

pub use product::{ProductKind, ProductRecord, VariantEntry};
