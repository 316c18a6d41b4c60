//! Core projection engine for monthly top-line projections
//!
//! Users grow by a fixed monthly rate, revenue is users times ARPU, COGS is a
//! fixed share of revenue and OPEX is a fixed monthly cost. Growth compounds on
//! the unrounded user count; rounding happens only when a row is emitted.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, ensure_non_negative, ensure_range, ValidationError};
use super::rows::{ProjectionRow, ProjectionTable};
use super::state::GrowthState;

/// Longest horizon accepted by [`ProjectionAssumptions::validate`] (50 years)
pub const MAX_PROJECTION_MONTHS: u32 = 600;

fn default_months() -> u32 { 12 }
fn default_base_users() -> f64 { 100.0 }
fn default_monthly_growth() -> f64 { 0.15 }
fn default_arpu() -> f64 { 5.0 }
fn default_cogs_pct() -> f64 { 0.25 }
fn default_opex() -> f64 { 2000.0 }

/// Starting assumptions for a projection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionAssumptions {
    /// Number of months to project
    #[serde(default = "default_months")]
    pub months: u32,

    /// User count in month 1
    #[serde(default = "default_base_users")]
    pub base_users: f64,

    /// Fractional growth applied each month (0.15 = 15%)
    #[serde(default = "default_monthly_growth")]
    pub monthly_growth: f64,

    /// Average revenue per user per month
    #[serde(default = "default_arpu")]
    pub arpu: f64,

    /// COGS as a share of revenue
    #[serde(default = "default_cogs_pct")]
    pub cogs_pct: f64,

    /// Fixed monthly operating cost
    #[serde(default = "default_opex")]
    pub opex: f64,
}

impl Default for ProjectionAssumptions {
    fn default() -> Self {
        Self {
            months: default_months(),
            base_users: default_base_users(),
            monthly_growth: default_monthly_growth(),
            arpu: default_arpu(),
            cogs_pct: default_cogs_pct(),
            opex: default_opex(),
        }
    }
}

impl ProjectionAssumptions {
    /// Boundary check run before projecting user-supplied assumptions.
    ///
    /// The engine itself accepts any values; this rejects the ones that would
    /// produce nonsensical tables (negative users, COGS above revenue, ...).
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.months > MAX_PROJECTION_MONTHS {
            return Err(ValidationError::new(
                "months",
                format!("must be at most {}, got {}", MAX_PROJECTION_MONTHS, self.months),
            ));
        }
        ensure_non_negative("base_users", self.base_users)?;
        ensure_finite("monthly_growth", self.monthly_growth)?;
        if self.monthly_growth <= -1.0 {
            return Err(ValidationError::new(
                "monthly_growth",
                format!("must be greater than -1, got {}", self.monthly_growth),
            ));
        }
        ensure_non_negative("arpu", self.arpu)?;
        ensure_range("cogs_pct", self.cogs_pct, 0.0, 1.0)?;
        ensure_non_negative("opex", self.opex)?;
        Ok(())
    }
}

/// Main projection engine
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    assumptions: ProjectionAssumptions,
}

impl ProjectionEngine {
    pub fn new(assumptions: ProjectionAssumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &ProjectionAssumptions {
        &self.assumptions
    }

    /// Run the projection over the configured number of months
    pub fn run(&self) -> ProjectionTable {
        let a = &self.assumptions;
        let mut table = ProjectionTable::new(a.clone());
        let mut state = GrowthState::new(a.base_users, a.monthly_growth);

        for _ in 0..a.months {
            state.advance_month();
            table.add_row(ProjectionRow::from_figures(
                state.month,
                state.users,
                a.arpu,
                a.cogs_pct,
                a.opex,
            ));
        }

        log::debug!(
            "projected {} months from {} users at {:.2}% monthly growth",
            table.len(),
            a.base_users,
            a.monthly_growth * 100.0
        );

        table
    }
}

/// Project month-by-month rows directly from scalar assumptions.
///
/// Returns exactly `months` rows; zero months gives an empty vector.
pub fn project(
    months: u32,
    base_users: f64,
    monthly_growth: f64,
    arpu: f64,
    cogs_pct: f64,
    opex: f64,
) -> Vec<ProjectionRow> {
    ProjectionEngine::new(ProjectionAssumptions {
        months,
        base_users,
        monthly_growth,
        arpu,
        cogs_pct,
        opex,
    })
    .run()
    .rows
}
