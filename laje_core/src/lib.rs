//! # laje_core - Slab Budget Estimation Engine
//!
//! `laje_core` is the computational heart of Lajecalc, pricing pre-cast slab
//! systems (vigotas + EPS panels) for construction-materials resellers. All
//! inputs and outputs are JSON-serializable, so budgets travel cleanly
//! between the form layer, disk, and exports.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: pure functions that take input and return results
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//! - **Explicit Prices**: defaults live in a price book, never in globals
//!
//! ## Quick Start
//!
//! ```rust
//! use laje_core::catalog::PriceBook;
//! use laje_core::estimation::slab::{calculate, SlabInput};
//!
//! let input = SlabInput::new("Sala", 5.0, 0.12);
//! let result = calculate(&input, &PriceBook::default()).unwrap();
//!
//! assert_eq!(result.insulation_units, 1);
//! assert!((result.total_cost - 28.8024).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`estimation`] - The pricing formulas (per-area and aggregate freight)
//! - [`catalog`] - Product definitions and the price book
//! - [`budget`] - Budget container, metadata, and totals
//! - [`customer`] - Customer records
//! - [`export`] - Plain-text budget rendering (WhatsApp/e-mail bodies)
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - File operations with atomic saves and locking

pub mod budget;
pub mod catalog;
pub mod customer;
pub mod errors;
pub mod estimation;
pub mod export;
pub mod file_io;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use budget::{Budget, BudgetMetadata, BudgetSettings, BudgetTotals};
pub use catalog::{PriceBook, SpacingDivisor};
pub use customer::Customer;
pub use errors::{EstimateError, EstimateResult};
pub use estimation::{aggregate_freight, calculate, SlabInput, SlabResult};
pub use file_io::{load_budget, save_budget, FileLock};
