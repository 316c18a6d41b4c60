//! Running state carried between projection months

/// State of the user base at a point in time during projection
#[derive(Debug, Clone)]
pub struct GrowthState {
    /// Current projection month (1-indexed, 0 before the first advance)
    pub month: u32,

    /// Unrounded user count for the current month
    pub users: f64,

    /// Multiplicative growth factor applied after each month
    growth_factor: f64,
}

impl GrowthState {
    /// Initialize state before month 1
    pub fn new(base_users: f64, monthly_growth: f64) -> Self {
        Self {
            month: 0,
            users: base_users,
            growth_factor: 1.0 + monthly_growth,
        }
    }

    /// Move to the next month. Users only grow after month 1 has been emitted,
    /// so the first call leaves the base user count untouched.
    pub fn advance_month(&mut self) {
        if self.month > 0 {
            self.users *= self.growth_factor;
        }
        self.month += 1;
    }
}
