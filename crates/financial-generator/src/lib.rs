//! Synthetic record generator for the financial demo tables.
//!
//! This crate provides the [`DataGenerator`], which produces one plausible
//! record per call for each entity of the schema. Parent identifiers are
//! threaded in by the caller, so foreign keys line up when the records are
//! inserted in order.
//!
//! # Architecture
//!
//! ```text
//!             ┌─────────────────┐
//!             │  DataGenerator  │
//!             │  - rng (StdRng) │
//!             │  - now          │
//!             └────────┬────────┘
//!                      │
//!   Customer ──id──▶ Order, Address
//!   Order ──id──┐
//!   Item ──id───┴──▶ OrderDetail
//! ```
//!
//! # Example
//!
//! ```rust
//! use financial_generator::{DataGenerator, Record};
//!
//! let mut generator = DataGenerator::new(Some(42));
//! let customer = generator.generate_customer();
//! let order = generator.generate_order(customer.id);
//! assert_eq!(order.customer_id, customer.id);
//! assert_eq!(order.fields()[0].0, "id");
//! ```

pub mod generator;
pub mod generators;
pub mod records;

// Re-exports for convenience
pub use generator::DataGenerator;
pub use records::{
    Address, Customer, FieldValue, Item, Order, OrderDetail, OrderStatus, Record, Sex,
};
