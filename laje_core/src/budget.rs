//! # Budget ("Orçamento") Data Structures
//!
//! The `Budget` struct is the root container for one customer quote.
//! Budgets serialize to `.laje` files as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Budget
//! ├── meta: BudgetMetadata (version, seller, reference, timestamps)
//! ├── customer: Customer
//! ├── settings: BudgetSettings (price book, freight flag)
//! └── areas: HashMap<Uuid, SlabInput> (all slab areas)
//! ```
//!
//! ## Totals
//!
//! A budget's bottom line is not the sum of per-area totals: material costs
//! are summed per area, but freight is one shipment priced once over the
//! combined linear meterage. [`Budget::totals`] applies that rule.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::catalog::PriceBook;
use crate::customer::Customer;
use crate::errors::{EstimateError, EstimateResult};
use crate::estimation::freight::aggregate_freight;
use crate::estimation::slab::{calculate, SlabInput, SlabResult};

/// Current schema version for .laje files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root budget container.
///
/// This is the top-level struct that gets serialized to `.laje` files.
/// Areas are stored in a flat UUID-keyed map for O(1) lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    /// Budget metadata (version, seller, reference)
    pub meta: BudgetMetadata,

    /// The customer this quote is for
    pub customer: Customer,

    /// Prices and freight policy for this budget
    pub settings: BudgetSettings,

    /// All slab areas, keyed by UUID
    ///
    /// Using a HashMap instead of a Vec provides:
    /// - O(1) lookup when a form edits one area
    /// - No duplicate ID issues
    /// - Stable references when areas are reordered
    pub areas: HashMap<Uuid, SlabInput>,
}

impl Budget {
    /// Create a new empty budget.
    ///
    /// # Arguments
    ///
    /// * `seller` - Name of the responsible seller
    /// * `reference` - Quote reference (e.g., "ORC-2026-014")
    /// * `customer` - The customer being quoted
    pub fn new(
        seller: impl Into<String>,
        reference: impl Into<String>,
        customer: Customer,
    ) -> Self {
        let now = Utc::now();
        Budget {
            meta: BudgetMetadata {
                version: SCHEMA_VERSION.to_string(),
                seller: seller.into(),
                reference: reference.into(),
                created: now,
                modified: now,
            },
            customer,
            settings: BudgetSettings::default(),
            areas: HashMap::new(),
        }
    }

    /// Add a slab area to the budget.
    ///
    /// Returns the UUID assigned to the area.
    pub fn add_area(&mut self, area: SlabInput) -> Uuid {
        let id = Uuid::new_v4();
        self.areas.insert(id, area);
        self.touch();
        id
    }

    /// Remove a slab area by UUID.
    ///
    /// Returns the removed area if it existed.
    pub fn remove_area(&mut self, id: &Uuid) -> Option<SlabInput> {
        let area = self.areas.remove(id);
        if area.is_some() {
            self.touch();
        }
        area
    }

    /// Get a slab area by UUID.
    pub fn get_area(&self, id: &Uuid) -> Option<&SlabInput> {
        self.areas.get(id)
    }

    /// Get a mutable reference to a slab area by UUID.
    ///
    /// Note: getting a mutable reference marks the budget as modified.
    pub fn get_area_mut(&mut self, id: &Uuid) -> Option<&mut SlabInput> {
        if self.areas.contains_key(id) {
            self.meta.modified = Utc::now();
            self.areas.get_mut(id)
        } else {
            None
        }
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Number of slab areas in this budget.
    pub fn area_count(&self) -> usize {
        self.areas.len()
    }

    /// Compute the budget's bottom line.
    ///
    /// Per-area estimates run with freight excluded from their totals;
    /// freight is then priced once over all areas together and added to the
    /// budget total when the settings say so (it is reported either way).
    pub fn totals(&self) -> EstimateResult<BudgetTotals> {
        if self.areas.is_empty() {
            return Err(EstimateError::calculation_failed(
                "budget totals",
                "budget has no areas",
            ));
        }

        let mut per_area: Vec<AreaTotal> = Vec::with_capacity(self.areas.len());
        let mut material_cost = 0.0;
        let mut total_linear_area_m2 = 0.0;
        let mut total_plan_area_m2 = 0.0;

        for (id, area) in &self.areas {
            // Freight never enters a per-area total inside a budget; it is
            // priced once for the whole shipment below.
            let mut input = area.clone();
            input.include_freight_in_total = false;

            let result = calculate(&input, &self.settings.prices)?;
            material_cost += result.material_cost();
            total_linear_area_m2 += result.linear_area_m2;
            total_plan_area_m2 += result.plan_area_m2;
            per_area.push(AreaTotal {
                id: *id,
                input,
                result,
            });
        }
        per_area.sort_by(|a, b| a.input.label.cmp(&b.input.label));

        let inputs: Vec<SlabInput> = self.areas.values().cloned().collect();
        let freight_cost =
            aggregate_freight(&inputs, self.settings.prices.freight_per_linear_meter);

        let mut total_cost = material_cost;
        if self.settings.include_freight {
            total_cost += freight_cost;
        }

        debug!(
            areas = per_area.len(),
            material_cost, freight_cost, total_cost, "computed budget totals"
        );

        Ok(BudgetTotals {
            per_area,
            material_cost,
            freight_cost,
            total_cost,
            total_linear_area_m2,
            total_plan_area_m2,
            cost_per_plan_m2: total_cost / total_plan_area_m2,
            cost_per_linear_m2: total_cost / total_linear_area_m2,
        })
    }
}

/// Budget metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible seller
    pub seller: String,

    /// Quote reference (e.g., "ORC-2026-014")
    pub reference: String,

    /// When the budget was created
    pub created: DateTime<Utc>,

    /// When the budget was last modified
    pub modified: DateTime<Utc>,
}

/// Per-budget settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetSettings {
    /// Unit prices this budget was quoted at
    pub prices: PriceBook,

    /// Whether freight enters the budget total (it is always reported)
    pub include_freight: bool,
}

impl Default for BudgetSettings {
    fn default() -> Self {
        BudgetSettings {
            prices: PriceBook::default(),
            include_freight: true,
        }
    }
}

/// One area's contribution to the budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaTotal {
    /// Area id inside the budget
    pub id: Uuid,

    /// The area as it was computed (freight flag forced off)
    pub input: SlabInput,

    /// The area's computed quantities, freight excluded from its total
    pub result: SlabResult,
}

/// The budget's bottom line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetTotals {
    /// Per-area results, sorted by area label
    pub per_area: Vec<AreaTotal>,

    /// Σ vigota + EPS costs across areas
    pub material_cost: f64,

    /// Freight for the whole shipment, priced once
    pub freight_cost: f64,

    /// `material_cost`, plus freight when the settings include it
    pub total_cost: f64,

    /// Σ billable linear meterage
    pub total_linear_area_m2: f64,

    /// Σ geometric plan area
    pub total_plan_area_m2: f64,

    /// Total cost over the combined plan area
    pub cost_per_plan_m2: f64,

    /// Total cost over the combined linear area
    pub cost_per_linear_m2: f64,
}
