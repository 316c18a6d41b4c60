//! Top-down market sizing (TAM / SAM / SOM)

use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, ensure_range, ValidationError};

fn default_top_down_total() -> f64 { 1_000_000_000.0 }
fn default_serviceable_ratio() -> f64 { 0.35 }
fn default_obtainable_ratio() -> f64 { 0.07 }

/// Three-tier market size estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketSizeEstimate {
    /// Total addressable market
    pub tam: f64,
    /// Serviceable addressable market
    pub sam: f64,
    /// Serviceable obtainable market
    pub som: f64,
}

/// Inputs for a market size estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketInputs {
    #[serde(default = "default_top_down_total")]
    pub top_down_total: f64,
    #[serde(default = "default_serviceable_ratio")]
    pub serviceable_ratio: f64,
    #[serde(default = "default_obtainable_ratio")]
    pub obtainable_ratio: f64,
}

impl Default for MarketInputs {
    fn default() -> Self {
        Self {
            top_down_total: default_top_down_total(),
            serviceable_ratio: default_serviceable_ratio(),
            obtainable_ratio: default_obtainable_ratio(),
        }
    }
}

impl MarketInputs {
    /// Reject negative totals and ratios outside `[0, 1]`. Ratios are never clamped.
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_non_negative("top_down_total", self.top_down_total)?;
        ensure_range("serviceable_ratio", self.serviceable_ratio, 0.0, 1.0)?;
        ensure_range("obtainable_ratio", self.obtainable_ratio, 0.0, 1.0)?;
        Ok(())
    }

    pub fn estimate(&self) -> MarketSizeEstimate {
        estimate(self.top_down_total, self.serviceable_ratio, self.obtainable_ratio)
    }
}

/// Scale a top-down total into TAM, SAM and SOM. No rounding is applied.
pub fn estimate(top_down_total: f64, serviceable_ratio: f64, obtainable_ratio: f64) -> MarketSizeEstimate {
    let tam = top_down_total;
    let sam = tam * serviceable_ratio;
    let som = sam * obtainable_ratio;
    MarketSizeEstimate { tam, sam, som }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_estimate() {
        let e = estimate(1_000_000_000.0, 0.35, 0.07);
        assert_eq!(e.tam, 1_000_000_000.0);
        assert_relative_eq!(e.sam, 350_000_000.0, max_relative = 1e-12);
        assert_relative_eq!(e.som, 24_500_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_scaling_is_exact_product() {
        let (t, r1, r2) = (123_456.789, 0.42, 0.13);
        let e = estimate(t, r1, r2);
        assert_eq!(e.tam, t);
        assert_eq!(e.sam, t * r1);
        assert_eq!(e.som, t * r1 * r2);
    }

    #[test]
    fn test_ordering_for_unit_ratios() {
        for &t in &[0.0, 1.0, 5e6, 1e12] {
            for &r1 in &[0.0, 0.1, 0.5, 1.0] {
                for &r2 in &[0.0, 0.07, 0.9, 1.0] {
                    let e = estimate(t, r1, r2);
                    assert!(0.0 <= e.som && e.som <= e.sam && e.sam <= e.tam);
                }
            }
        }
    }

    #[test]
    fn test_out_of_range_ratio_passes_through() {
        let e = estimate(100.0, 0.5, 2.0);
        assert_eq!(e.som, 100.0);
        assert!(e.som > e.sam);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert!(MarketInputs::default().validate().is_ok());

        let bad = MarketInputs { obtainable_ratio: 2.0, ..Default::default() };
        assert_eq!(bad.validate().unwrap_err().field, "obtainable_ratio");

        let bad = MarketInputs { serviceable_ratio: -0.1, ..Default::default() };
        assert_eq!(bad.validate().unwrap_err().field, "serviceable_ratio");

        let bad = MarketInputs { top_down_total: -1.0, ..Default::default() };
        assert_eq!(bad.validate().unwrap_err().field, "top_down_total");
    }

    #[test]
    fn test_idempotent() {
        let inputs = MarketInputs::default();
        assert_eq!(inputs.estimate(), inputs.estimate());
    }
}
