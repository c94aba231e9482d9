//! # Aggregate Freight
//!
//! Freight over a multi-area budget is a single shipment: the rate applies
//! once to the summed linear meterage, not once per area. Both forms reduce
//! to `rate * Σ linear_area_i`, so this is the one place the freight formula
//! lives; callers never re-derive it per area.

use tracing::debug;

use crate::estimation::slab::SlabInput;

/// Summed billable linear meterage across a set of areas.
pub fn total_linear_area(areas: &[SlabInput]) -> f64 {
    areas.iter().map(SlabInput::linear_area_m2).sum()
}

/// Freight for a set of areas shipped together:
/// `rate * Σ(beam_spacing_i / divisor_i * span_length_i)`.
///
/// Numerically equal to summing each area's own freight cost.
pub fn aggregate_freight(areas: &[SlabInput], rate_per_linear_meter: f64) -> f64 {
    let total = total_linear_area(areas);
    debug!(
        areas = areas.len(),
        total_linear_area_m2 = total,
        rate_per_linear_meter,
        "aggregating freight"
    );
    total * rate_per_linear_meter
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{PriceBook, SpacingDivisor};
    use crate::estimation::slab::calculate;

    fn sample_areas() -> Vec<SlabInput> {
        let mut sala = SlabInput::new("Sala", 5.0, 0.12);
        sala.spacing_divisor = SpacingDivisor::Ie50;

        let mut quarto = SlabInput::new("Quarto", 3.4, 0.3);
        quarto.spacing_divisor = SpacingDivisor::Ie40;

        vec![sala, quarto]
    }

    #[test]
    fn test_total_linear_area() {
        let areas = sample_areas();
        // Sala: 0.12 / 0.5 * 5 = 1.2; Quarto: 0.3 / 0.4 * 3.4 = 2.55
        assert!((total_linear_area(&areas) - 3.75).abs() < 1e-9);
    }

    #[test]
    fn test_aggregate_equals_sum_of_per_area_freight() {
        let areas = sample_areas();
        let prices = PriceBook::default();

        let summed: f64 = areas
            .iter()
            .map(|a| calculate(a, &prices).unwrap().freight_cost)
            .sum();
        let aggregated = aggregate_freight(&areas, prices.freight_per_linear_meter);

        assert!((aggregated - summed).abs() < 1e-9);
    }

    #[test]
    fn test_empty_budget_ships_nothing() {
        assert_eq!(aggregate_freight(&[], 4.646), 0.0);
    }

    #[test]
    fn test_rate_scales_linearly() {
        let areas = sample_areas();
        let base = aggregate_freight(&areas, 1.0);
        let doubled = aggregate_freight(&areas, 2.0);
        assert!((doubled - 2.0 * base).abs() < 1e-9);
    }
}
