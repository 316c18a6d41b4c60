//! Projection output rows and the table that holds them

use serde::{Deserialize, Serialize};

use super::engine::{ProjectionAssumptions, MAX_PROJECTION_MONTHS};

/// Round to the nearest cent, half away from zero
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A single row of projection output for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionRow {
    pub month: u32,
    /// Users rounded to the nearest whole user
    pub users: i64,
    pub revenue: f64,
    pub cogs: f64,
    pub gross_profit: f64,
    pub opex: f64,
    pub net_profit: f64,

    /// Users before rounding; this is what revenue was computed from
    #[serde(skip)]
    pub unrounded_users: f64,
}

impl ProjectionRow {
    /// Build a display row from full-precision figures for one month
    pub fn from_figures(month: u32, users: f64, arpu: f64, cogs_pct: f64, opex: f64) -> Self {
        let revenue = users * arpu;
        let cogs = revenue * cogs_pct;
        let gross_profit = revenue - cogs;
        let net_profit = gross_profit - opex;

        Self {
            month,
            users: users.round() as i64,
            revenue: round_cents(revenue),
            cogs: round_cents(cogs),
            gross_profit: round_cents(gross_profit),
            opex: round_cents(opex),
            net_profit: round_cents(net_profit),
            unrounded_users: users,
        }
    }
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionTable {
    /// Inputs the rows were produced from
    pub assumptions: ProjectionAssumptions,

    /// Monthly rows, month 1 first
    pub rows: Vec<ProjectionRow>,
}

impl ProjectionTable {
    pub fn new(assumptions: ProjectionAssumptions) -> Self {
        Self {
            rows: Vec::with_capacity(assumptions.months.min(MAX_PROJECTION_MONTHS) as usize),
            assumptions,
        }
    }

    /// Add a row
    pub fn add_row(&mut self, row: ProjectionRow) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let total_revenue: f64 = self.rows.iter().map(|r| r.revenue).sum();
        let total_net_profit: f64 = self.rows.iter().map(|r| r.net_profit).sum();
        let final_users = self.rows.last().map(|r| r.users).unwrap_or(0);
        let break_even_month = self
            .rows
            .iter()
            .find(|r| r.net_profit >= 0.0)
            .map(|r| r.month);

        ProjectionSummary {
            total_months: self.rows.len() as u32,
            total_revenue: round_cents(total_revenue),
            total_net_profit: round_cents(total_net_profit),
            final_users,
            break_even_month,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub total_months: u32,
    pub total_revenue: f64,
    pub total_net_profit: f64,
    pub final_users: i64,
    /// First month with non-negative net profit, if the horizon reaches one
    pub break_even_month: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_cents_half_away_from_zero() {
        assert_eq!(round_cents(1.005_000_1), 1.01);
        assert_eq!(round_cents(-1625.0), -1625.0);
        assert_eq!(round_cents(661.25), 661.25);
        assert_eq!(round_cents(0.125), 0.13);
    }

    #[test]
    fn test_row_identities() {
        let row = ProjectionRow::from_figures(1, 100.0, 5.0, 0.25, 2000.0);
        assert_eq!(row.users, 100);
        assert_eq!(row.revenue, 500.0);
        assert_eq!(row.cogs, 125.0);
        assert_eq!(row.gross_profit, 375.0);
        assert_eq!(row.opex, 2000.0);
        assert_eq!(row.net_profit, -1625.0);
    }

    #[test]
    fn test_row_serializes_camel_case_without_unrounded_users() {
        let row = ProjectionRow::from_figures(2, 115.0, 5.0, 0.25, 2000.0);
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["grossProfit"], 431.25);
        assert_eq!(json["netProfit"], -1568.75);
        assert!(json.get("unroundedUsers").is_none());
    }

    #[test]
    fn test_summary_break_even() {
        let assumptions = ProjectionAssumptions { months: 2, ..Default::default() };
        let mut table = ProjectionTable::new(assumptions);
        table.add_row(ProjectionRow::from_figures(1, 100.0, 5.0, 0.0, 600.0));
        table.add_row(ProjectionRow::from_figures(2, 130.0, 5.0, 0.0, 600.0));

        let summary = table.summary();
        assert_eq!(summary.total_months, 2);
        assert_eq!(summary.total_revenue, 1150.0);
        assert_eq!(summary.total_net_profit, -50.0);
        assert_eq!(summary.final_users, 130);
        assert_eq!(summary.break_even_month, Some(2));
    }

    #[test]
    fn test_summary_empty_table() {
        let table = ProjectionTable::new(ProjectionAssumptions { months: 0, ..Default::default() });
        let summary = table.summary();
        assert_eq!(summary.total_months, 0);
        assert_eq!(summary.final_users, 0);
        assert_eq!(summary.break_even_month, None);
    }
}
