//! Scenario runner for growth sensitivity
//!
//! Holds one set of base assumptions and re-runs the projection with
//! alternative growth rates, fanning the runs out across the rayon pool.

use rayon::prelude::*;
use serde::Serialize;

use crate::projection::{ProjectionAssumptions, ProjectionEngine, ProjectionSummary, ProjectionTable};

/// One projection run in a sweep
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    /// Growth rate this scenario was run with
    pub monthly_growth: f64,
    pub table: ProjectionTable,
}

impl ScenarioResult {
    pub fn summary(&self) -> ProjectionSummary {
        self.table.summary()
    }
}

/// Runner for batches of projections sharing the same base assumptions
///
/// # Example
/// ```
/// use pitch_polisher::ScenarioRunner;
///
/// let runner = ScenarioRunner::default();
/// let results = runner.run_growth_sweep(&[0.05, 0.10, 0.15]);
/// assert_eq!(results.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    base_assumptions: ProjectionAssumptions,
}

impl ScenarioRunner {
    pub fn new(base_assumptions: ProjectionAssumptions) -> Self {
        Self { base_assumptions }
    }

    /// Run a single projection
    pub fn run(&self, assumptions: ProjectionAssumptions) -> ProjectionTable {
        ProjectionEngine::new(assumptions).run()
    }

    /// Run the base assumptions once per growth rate. Results keep input order.
    pub fn run_growth_sweep(&self, growth_rates: &[f64]) -> Vec<ScenarioResult> {
        let results: Vec<ScenarioResult> = growth_rates
            .par_iter()
            .map(|&monthly_growth| {
                let assumptions = ProjectionAssumptions {
                    monthly_growth,
                    ..self.base_assumptions.clone()
                };
                ScenarioResult {
                    monthly_growth,
                    table: self.run(assumptions),
                }
            })
            .collect();

        log::info!(
            "ran {} growth scenarios over {} months",
            results.len(),
            self.base_assumptions.months
        );
        results
    }

    /// Get reference to base assumptions for inspection
    pub fn assumptions(&self) -> &ProjectionAssumptions {
        &self.base_assumptions
    }

    /// Get mutable reference to base assumptions for customization
    pub fn assumptions_mut(&mut self) -> &mut ProjectionAssumptions {
        &mut self.base_assumptions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth_sweep_keeps_order() {
        let runner = ScenarioRunner::default();
        let rates = [0.20, 0.0, 0.10];
        let results = runner.run_growth_sweep(&rates);

        assert_eq!(results.len(), 3);
        for (result, rate) in results.iter().zip(rates) {
            assert_eq!(result.monthly_growth, rate);
            assert_eq!(result.table.assumptions.monthly_growth, rate);
            assert_eq!(result.table.len(), 12);
        }
    }

    #[test]
    fn test_higher_growth_more_final_users() {
        let runner = ScenarioRunner::default();
        let results = runner.run_growth_sweep(&[0.05, 0.10, 0.15]);

        assert!(results[2].summary().final_users > results[1].summary().final_users);
        assert!(results[1].summary().final_users > results[0].summary().final_users);
    }

    #[test]
    fn test_sweep_matches_single_run() {
        let mut runner = ScenarioRunner::default();
        runner.assumptions_mut().months = 6;

        let swept = runner.run_growth_sweep(&[0.15]);
        let single = runner.run(runner.assumptions().clone());
        assert_eq!(swept[0].table, single);
    }

    #[test]
    fn test_empty_sweep() {
        assert!(ScenarioRunner::default().run_growth_sweep(&[]).is_empty());
    }
}
