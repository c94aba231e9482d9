//! # Product Catalog
//!
//! Catalog entries for the two product families the reseller carries, plus
//! the price book the estimation engine reads its defaults from.
//!
//! ## Product Types
//!
//! - **Vigota**: pre-cast structural beam, priced per linear meter
//! - **EPS**: insulation panel, sold in whole fixed-length units
//!
//! ## Example
//!
//! ```rust
//! use laje_core::catalog::{BeamProduct, Product};
//!
//! let vigota = Product::Beam(BeamProduct::new("Vigota treliçada TR08", 14.652));
//! assert_eq!(vigota.unit_price(), 14.652);
//! ```

pub mod beams;
pub mod insulation;

pub use beams::{BeamProduct, SpacingDivisor};
pub use insulation::{InsulationProduct, PANEL_LENGTH_M};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{EstimateError, EstimateResult};

/// Default vigota price per linear meter when no product is selected
pub const DEFAULT_BEAM_PRICE_PER_METER: f64 = 14.652;

/// Default EPS sale price per unit when no product is selected
pub const DEFAULT_INSULATION_PRICE_PER_UNIT: f64 = 11.22;

/// Default freight rate per linear meter
pub const DEFAULT_FREIGHT_PER_LINEAR_METER: f64 = 4.646;

/// Unified product enum for heterogeneous catalog storage.
///
/// ## JSON Serialization
///
/// Products serialize with a "type" discriminator:
///
/// ```json
/// { "type": "Beam", "name": "Vigota treliçada TR08", "price_per_meter": 14.652 }
///
/// { "type": "Insulation", "name": "EPS B8", "cost": 8.0, "margin_percent": 40.25 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Product {
    /// Pre-cast structural beam (vigota)
    Beam(BeamProduct),
    /// EPS insulation panel
    Insulation(InsulationProduct),
}

impl Product {
    /// Get the catalog display name
    pub fn display_name(&self) -> &str {
        match self {
            Product::Beam(p) => &p.name,
            Product::Insulation(p) => &p.name,
        }
    }

    /// Get the product family as a string
    pub fn product_type(&self) -> &'static str {
        match self {
            Product::Beam(_) => "Vigota",
            Product::Insulation(_) => "EPS",
        }
    }

    /// Sale price per billing unit (linear meter for vigotas, panel for EPS)
    pub fn unit_price(&self) -> f64 {
        match self {
            Product::Beam(p) => p.price_per_meter,
            Product::Insulation(p) => p.sale_price().value(),
        }
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl From<BeamProduct> for Product {
    fn from(p: BeamProduct) -> Self {
        Product::Beam(p)
    }
}

impl From<InsulationProduct> for Product {
    fn from(p: InsulationProduct) -> Self {
        Product::Insulation(p)
    }
}

/// Unit prices the estimation engine falls back to when an input does not
/// name explicit prices.
///
/// This is an explicit configuration object rather than global constants, so
/// a budget can carry the prices it was quoted at even after the catalog
/// changes. `Default` yields the documented catalog rates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBook {
    /// Vigota price per linear meter
    pub beam_price_per_meter: f64,

    /// EPS sale price per panel unit
    pub insulation_price_per_unit: f64,

    /// Freight rate per linear meter
    pub freight_per_linear_meter: f64,
}

impl PriceBook {
    /// Build a price book from catalog selections, keeping the default
    /// freight rate.
    pub fn for_products(vigota: &BeamProduct, eps: &InsulationProduct) -> Self {
        PriceBook {
            beam_price_per_meter: vigota.price_per_meter,
            insulation_price_per_unit: eps.sale_price().value(),
            freight_per_linear_meter: DEFAULT_FREIGHT_PER_LINEAR_METER,
        }
    }
}

impl Default for PriceBook {
    fn default() -> Self {
        PriceBook {
            beam_price_per_meter: DEFAULT_BEAM_PRICE_PER_METER,
            insulation_price_per_unit: DEFAULT_INSULATION_PRICE_PER_UNIT,
            freight_per_linear_meter: DEFAULT_FREIGHT_PER_LINEAR_METER,
        }
    }
}

/// The reseller's standard product lines, used to seed a fresh catalog.
static DEFAULT_CATALOG: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        Product::Beam(BeamProduct::new(
            "Vigota treliçada TR08",
            DEFAULT_BEAM_PRICE_PER_METER,
        )),
        Product::Insulation({
            let mut eps = InsulationProduct::new("EPS B8", 8.0, 40.25);
            eps.dimensions = Some("125 × 100 × 8 cm".to_string());
            eps
        }),
    ]
});

/// Get the seeded default catalog
pub fn default_catalog() -> &'static [Product] {
    &DEFAULT_CATALOG
}

/// Find a product by name in a catalog slice
pub fn find_product<'a>(catalog: &'a [Product], name: &str) -> EstimateResult<&'a Product> {
    catalog
        .iter()
        .find(|p| p.display_name() == name)
        .ok_or_else(|| EstimateError::product_not_found(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_book_defaults() {
        let prices = PriceBook::default();
        assert_eq!(prices.beam_price_per_meter, 14.652);
        assert_eq!(prices.insulation_price_per_unit, 11.22);
        assert_eq!(prices.freight_per_linear_meter, 4.646);
    }

    #[test]
    fn test_price_book_for_products() {
        let vigota = BeamProduct::new("Vigota teste", 16.0);
        let eps = InsulationProduct::new("EPS teste", 10.0, 20.0);

        let prices = PriceBook::for_products(&vigota, &eps);
        assert_eq!(prices.beam_price_per_meter, 16.0);
        assert_eq!(prices.insulation_price_per_unit, 12.0);
        assert_eq!(prices.freight_per_linear_meter, 4.646);
    }

    #[test]
    fn test_default_catalog_matches_price_book() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 2);

        let vigota = find_product(catalog, "Vigota treliçada TR08").unwrap();
        assert_eq!(vigota.unit_price(), DEFAULT_BEAM_PRICE_PER_METER);

        let eps = find_product(catalog, "EPS B8").unwrap();
        assert!((eps.unit_price() - DEFAULT_INSULATION_PRICE_PER_UNIT).abs() < 1e-9);
    }

    #[test]
    fn test_find_product_missing() {
        let err = find_product(default_catalog(), "Laje pronta").unwrap_err();
        assert_eq!(err.error_code(), "PRODUCT_NOT_FOUND");
    }

    #[test]
    fn test_product_serialization() {
        let vigota = Product::Beam(BeamProduct::new("Vigota treliçada TR08", 14.652));
        let json = serde_json::to_string(&vigota).unwrap();
        assert!(json.contains("\"type\":\"Beam\""));
        let parsed: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(vigota, parsed);

        let eps = Product::Insulation(InsulationProduct::new("EPS B8", 8.0, 40.25));
        let json = serde_json::to_string(&eps).unwrap();
        assert!(json.contains("\"type\":\"Insulation\""));
        let parsed: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(eps, parsed);
    }

    #[test]
    fn test_product_type() {
        let vigota: Product = BeamProduct::new("V", 1.0).into();
        assert_eq!(vigota.product_type(), "Vigota");

        let eps: Product = InsulationProduct::new("E", 1.0, 0.0).into();
        assert_eq!(eps.product_type(), "EPS");
    }
}
