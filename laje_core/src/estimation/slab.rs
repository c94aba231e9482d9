//! # Slab Area Estimation
//!
//! Computes material quantities and costs for one slab area: beam-line
//! density, billable linear area, vigota cost, EPS panel count and cost,
//! freight, and the resulting cost per square meter.
//!
//! ## Assumptions
//!
//! - Beam lines run along the span; density is `beam_spacing / divisor`
//! - EPS panels are sold only in whole 1.25 m units, so coverage rounds up
//! - Freight is always computed; whether it enters the total is a flag
//! - Currency rounding is a presentation concern, values stay unrounded
//!
//! ## Example
//!
//! ```rust
//! use laje_core::catalog::{PriceBook, SpacingDivisor};
//! use laje_core::estimation::slab::{calculate, SlabInput};
//!
//! let input = SlabInput {
//!     label: "Sala".to_string(),
//!     span_length_m: 5.0,
//!     beam_spacing_m: 0.12,
//!     spacing_divisor: SpacingDivisor::Ie50,
//!     beam_price_per_meter: None,
//!     insulation_price_per_unit: None,
//!     freight_per_linear_meter: None,
//!     include_freight_in_total: false,
//! };
//!
//! let result = calculate(&input, &PriceBook::default()).unwrap();
//! assert_eq!(result.linear_area_m2, 1.2);
//! assert_eq!(result.insulation_units, 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::{PriceBook, SpacingDivisor, PANEL_LENGTH_M};
use crate::errors::{EstimateError, EstimateResult};

/// Input parameters for one slab area.
///
/// Unit prices are optional; when absent the price book supplies them, so a
/// budget can either pin the prices it was quoted at or follow the catalog.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Sala",
///   "span_length_m": 5.0,
///   "beam_spacing_m": 0.12,
///   "spacing_divisor": 0.5,
///   "include_freight_in_total": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlabInput {
    /// User label for this area (e.g., "Sala", "Cozinha")
    pub label: String,

    /// Span dimension of the slab area, in meters
    pub span_length_m: f64,

    /// Width/spacing value between beam lines, in meters
    pub beam_spacing_m: f64,

    /// Catalog spacing divisor ("IE")
    pub spacing_divisor: SpacingDivisor,

    /// Vigota price per linear meter; price book default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beam_price_per_meter: Option<f64>,

    /// EPS price per panel unit; price book default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insulation_price_per_unit: Option<f64>,

    /// Freight rate per linear meter; price book default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freight_per_linear_meter: Option<f64>,

    /// Whether freight enters the reported total. Freight itself is always
    /// computed and reported.
    #[serde(default)]
    pub include_freight_in_total: bool,
}

impl SlabInput {
    /// Create an area with catalog prices and freight kept out of the total
    pub fn new(label: impl Into<String>, span_length_m: f64, beam_spacing_m: f64) -> Self {
        SlabInput {
            label: label.into(),
            span_length_m,
            beam_spacing_m,
            spacing_divisor: SpacingDivisor::default(),
            beam_price_per_meter: None,
            insulation_price_per_unit: None,
            freight_per_linear_meter: None,
            include_freight_in_total: false,
        }
    }

    /// Validate input parameters.
    ///
    /// The engine rejects non-positive dimensions up front so division by
    /// zero never reaches the area computations. The divisor needs no check
    /// here; unsanctioned values cannot be constructed.
    pub fn validate(&self) -> EstimateResult<()> {
        if self.span_length_m <= 0.0 {
            return Err(EstimateError::invalid_dimension(
                "span_length_m",
                self.span_length_m.to_string(),
                "Span length must be positive",
            ));
        }
        if self.beam_spacing_m <= 0.0 {
            return Err(EstimateError::invalid_dimension(
                "beam_spacing_m",
                self.beam_spacing_m.to_string(),
                "Beam spacing must be positive",
            ));
        }
        Ok(())
    }

    /// Beam lines per meter of span-run: `beam_spacing / divisor`
    pub fn beam_line_density(&self) -> f64 {
        self.beam_spacing_m / self.spacing_divisor.value()
    }

    /// Billable linear meterage: `density * span_length`.
    ///
    /// This is the quantity vigotas and freight are priced on, distinct from
    /// the geometric plan area.
    pub fn linear_area_m2(&self) -> f64 {
        self.beam_line_density() * self.span_length_m
    }

    /// Geometric plan area: `span_length * beam_spacing`
    pub fn plan_area_m2(&self) -> f64 {
        self.span_length_m * self.beam_spacing_m
    }
}

/// Results for one slab area, always fully populated.
///
/// ## JSON Example
///
/// ```json
/// {
///   "beam_line_density": 0.24,
///   "linear_area_m2": 1.2,
///   "plan_area_m2": 0.6,
///   "beam_cost": 17.5824,
///   "insulation_units": 1,
///   "insulation_cost": 11.22,
///   "freight_cost": 5.5752,
///   "total_cost": 28.8024,
///   "cost_per_plan_m2": 48.004,
///   "cost_per_linear_m2": 24.002
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlabResult {
    /// Beam lines per meter of span-run
    pub beam_line_density: f64,

    /// Billable linear meterage (m²)
    pub linear_area_m2: f64,

    /// Geometric plan area (m²)
    pub plan_area_m2: f64,

    /// Vigota cost: `linear_area * price_per_meter`
    pub beam_cost: f64,

    /// Whole EPS panels needed: `ceil(span / 1.25 * density)`
    pub insulation_units: u32,

    /// EPS cost: `units * price_per_unit`
    pub insulation_cost: f64,

    /// Freight: `linear_area * rate`. Always computed, regardless of the
    /// include flag.
    pub freight_cost: f64,

    /// `beam_cost + insulation_cost`, plus freight when included
    pub total_cost: f64,

    /// Total cost over the geometric plan area
    pub cost_per_plan_m2: f64,

    /// Total cost over the billable linear area
    pub cost_per_linear_m2: f64,
}

impl SlabResult {
    /// Material cost only (vigotas + EPS), never including freight
    pub fn material_cost(&self) -> f64 {
        self.beam_cost + self.insulation_cost
    }
}

/// Compute quantities and costs for one slab area.
///
/// Pure function: identical inputs produce identical outputs, with no hidden
/// state or I/O. Prices missing from the input fall back to the price book.
///
/// # Arguments
///
/// * `input` - Area dimensions, divisor, optional price overrides
/// * `prices` - Default unit prices
///
/// # Returns
///
/// * `Ok(SlabResult)` - All quantities and costs
/// * `Err(EstimateError)` - A dimension is non-positive
///
/// # Example
///
/// ```rust
/// use laje_core::catalog::PriceBook;
/// use laje_core::estimation::slab::{calculate, SlabInput};
///
/// let mut input = SlabInput::new("Sala", 5.0, 0.12);
/// input.include_freight_in_total = true;
///
/// let result = calculate(&input, &PriceBook::default()).unwrap();
/// assert!((result.total_cost - 34.3776).abs() < 1e-9);
/// ```
pub fn calculate(input: &SlabInput, prices: &PriceBook) -> EstimateResult<SlabResult> {
    input.validate()?;

    let beam_price = input
        .beam_price_per_meter
        .unwrap_or(prices.beam_price_per_meter);
    let insulation_price = input
        .insulation_price_per_unit
        .unwrap_or(prices.insulation_price_per_unit);
    let freight_rate = input
        .freight_per_linear_meter
        .unwrap_or(prices.freight_per_linear_meter);

    let beam_line_density = input.beam_line_density();
    let linear_area_m2 = input.linear_area_m2();
    let plan_area_m2 = input.plan_area_m2();

    let beam_cost = linear_area_m2 * beam_price;

    // Panels are sold in whole 1.25 m units along the span, so partial
    // coverage rounds up.
    let insulation_units = (input.span_length_m / PANEL_LENGTH_M * beam_line_density).ceil() as u32;
    let insulation_cost = f64::from(insulation_units) * insulation_price;

    let freight_cost = linear_area_m2 * freight_rate;

    let mut total_cost = beam_cost + insulation_cost;
    if input.include_freight_in_total {
        total_cost += freight_cost;
    }

    Ok(SlabResult {
        beam_line_density,
        linear_area_m2,
        plan_area_m2,
        beam_cost,
        insulation_units,
        insulation_cost,
        freight_cost,
        total_cost,
        cost_per_plan_m2: total_cost / plan_area_m2,
        cost_per_linear_m2: total_cost / linear_area_m2,
    })
}
