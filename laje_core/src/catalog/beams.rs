//! Structural beam ("vigota") catalog entries.
//!
//! A vigota is priced per linear meter of beam run. The spacing divisor
//! ("IE") is a catalog-defined constant controlling how many beam lines fit
//! per meter of spacing; only two values are sanctioned by the product line.

use serde::{Deserialize, Serialize};

use crate::errors::{EstimateError, EstimateResult};

/// Spacing divisor ("IE") per the vigota catalog.
///
/// Governs beam-line density: `density = beam_spacing / divisor`. Only 0.4
/// and 0.5 exist in the product line, so the divisor is an enum and fallible
/// conversion from a raw float is the only way in from form input.
///
/// Serializes as the raw number (`0.4` / `0.5`) so budget files stay
/// readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum SpacingDivisor {
    /// IE 0.4 — denser beam layout
    Ie40,
    /// IE 0.5 — standard beam layout
    Ie50,
}

impl SpacingDivisor {
    /// All divisor variants for UI selection
    pub const ALL: [SpacingDivisor; 2] = [SpacingDivisor::Ie40, SpacingDivisor::Ie50];

    /// The divisor as the real number used in the formulas
    pub fn value(self) -> f64 {
        match self {
            SpacingDivisor::Ie40 => 0.4,
            SpacingDivisor::Ie50 => 0.5,
        }
    }

    /// Parse from a raw float as entered in a form.
    ///
    /// Only exact 0.4 and 0.5 are accepted; anything else is a caller-facing
    /// validation error.
    pub fn from_value(value: f64) -> EstimateResult<Self> {
        if value == 0.4 {
            Ok(SpacingDivisor::Ie40)
        } else if value == 0.5 {
            Ok(SpacingDivisor::Ie50)
        } else {
            Err(EstimateError::InvalidSpacingDivisor { value })
        }
    }
}

impl Default for SpacingDivisor {
    fn default() -> Self {
        SpacingDivisor::Ie50
    }
}

impl TryFrom<f64> for SpacingDivisor {
    type Error = EstimateError;

    fn try_from(value: f64) -> EstimateResult<Self> {
        SpacingDivisor::from_value(value)
    }
}

impl From<SpacingDivisor> for f64 {
    fn from(divisor: SpacingDivisor) -> Self {
        divisor.value()
    }
}

impl std::fmt::Display for SpacingDivisor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "IE {}", self.value())
    }
}

/// A vigota catalog entry.
///
/// ## JSON Example
///
/// ```json
/// {
///   "name": "Vigota treliçada TR08",
///   "price_per_meter": 14.652,
///   "description": "Treliça 8 cm, banzo simples"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamProduct {
    /// Catalog name (e.g., "Vigota treliçada TR08")
    pub name: String,

    /// Sale price per linear meter of beam run
    pub price_per_meter: f64,

    /// Optional free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl BeamProduct {
    /// Create a new vigota entry
    pub fn new(name: impl Into<String>, price_per_meter: f64) -> Self {
        BeamProduct {
            name: name.into(),
            price_per_meter,
            description: None,
        }
    }
}

impl std::fmt::Display for BeamProduct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divisor_values() {
        assert_eq!(SpacingDivisor::Ie40.value(), 0.4);
        assert_eq!(SpacingDivisor::Ie50.value(), 0.5);
    }

    #[test]
    fn test_divisor_from_value() {
        assert_eq!(
            SpacingDivisor::from_value(0.4).unwrap(),
            SpacingDivisor::Ie40
        );
        assert_eq!(
            SpacingDivisor::from_value(0.5).unwrap(),
            SpacingDivisor::Ie50
        );

        let err = SpacingDivisor::from_value(0.3).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SPACING_DIVISOR");
    }

    #[test]
    fn test_divisor_serializes_as_number() {
        let json = serde_json::to_string(&SpacingDivisor::Ie40).unwrap();
        assert_eq!(json, "0.4");

        let parsed: SpacingDivisor = serde_json::from_str("0.5").unwrap();
        assert_eq!(parsed, SpacingDivisor::Ie50);

        // Unsanctioned values must fail to deserialize
        assert!(serde_json::from_str::<SpacingDivisor>("0.45").is_err());
    }

    #[test]
    fn test_divisor_default() {
        assert_eq!(SpacingDivisor::default(), SpacingDivisor::Ie50);
    }

    #[test]
    fn test_beam_product_serialization() {
        let vigota = BeamProduct::new("Vigota treliçada TR08", 14.652);
        let json = serde_json::to_string(&vigota).unwrap();
        assert!(json.contains("14.652"));

        let roundtrip: BeamProduct = serde_json::from_str(&json).unwrap();
        assert_eq!(vigota, roundtrip);
    }
}
