//! EPS insulation panel catalog entries.
//!
//! EPS panels fill the space between beam lines and are sold in whole
//! fixed-length units. The seller maintains a cost price and a margin; the
//! sale price is derived, matching how the catalog was maintained in the
//! back office.

use serde::{Deserialize, Serialize};

use crate::units::Reais;

/// Fixed panel length along the span, in meters. Panels are sold only in
/// whole units of this length, so partial coverage rounds up.
pub const PANEL_LENGTH_M: f64 = 1.25;

/// An EPS panel catalog entry.
///
/// ## JSON Example
///
/// ```json
/// {
///   "name": "EPS B8",
///   "dimensions": "125 × 100 × 8 cm",
///   "cost": 8.0,
///   "margin_percent": 40.25
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsulationProduct {
    /// Catalog name (e.g., "EPS B8")
    pub name: String,

    /// Nominal panel dimensions, free text (e.g., "125 × 100 × 8 cm")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,

    /// Acquisition cost per unit
    pub cost: f64,

    /// Resale margin over cost, in percent
    pub margin_percent: f64,
}

impl InsulationProduct {
    /// Create a new EPS entry
    pub fn new(name: impl Into<String>, cost: f64, margin_percent: f64) -> Self {
        InsulationProduct {
            name: name.into(),
            dimensions: None,
            cost,
            margin_percent,
        }
    }

    /// Sale price per unit: `cost * (1 + margin / 100)`
    pub fn sale_price(&self) -> Reais {
        Reais(self.cost * (1.0 + self.margin_percent / 100.0))
    }
}

impl std::fmt::Display for InsulationProduct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sale_price_from_margin() {
        let eps = InsulationProduct::new("EPS teste", 10.0, 50.0);
        assert_eq!(eps.sale_price().value(), 15.0);
    }

    #[test]
    fn test_zero_margin_sells_at_cost() {
        let eps = InsulationProduct::new("EPS teste", 12.5, 0.0);
        assert_eq!(eps.sale_price().value(), 12.5);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut eps = InsulationProduct::new("EPS B8", 8.0, 40.25);
        eps.dimensions = Some("125 × 100 × 8 cm".to_string());

        let json = serde_json::to_string(&eps).unwrap();
        let roundtrip: InsulationProduct = serde_json::from_str(&json).unwrap();
        assert_eq!(eps, roundtrip);
    }
}
