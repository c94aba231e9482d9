//! # Estimation Engine
//!
//! The pricing formulas for a vigota/EPS slab area. Each computation follows
//! the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Computed quantities and costs (JSON-serializable)
//! - `calculate(input, prices) -> Result<*Result, EstimateError>` - Pure function
//!
//! ## Available Computations
//!
//! - [`slab`] - Material quantities and costs for a single slab area
//! - [`freight`] - Freight aggregated across a set of areas

pub mod freight;
pub mod slab;

pub use freight::{aggregate_freight, total_linear_area};
pub use slab::{calculate, SlabInput, SlabResult};
