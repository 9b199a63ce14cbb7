//! Simple-interest schedule over standard compounding periods.

use serde::{Deserialize, Serialize};

/// The period an interest amount is accrued over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompoundingPeriod {
    /// One calendar year.
    Year,
    /// Three months.
    Quarter,
    /// One month.
    Month,
    /// One day (365-day year).
    Day,
}

impl CompoundingPeriod {
    /// How many of these periods make up a year.
    pub const fn periods_per_year(self) -> f64 {
        match self {
            Self::Year => 1.0,
            Self::Quarter => 4.0,
            Self::Month => 12.0,
            Self::Day => 365.0,
        }
    }

    /// Row label for tabular output.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Year => "Per Year",
            Self::Quarter => "Per 3 Months",
            Self::Month => "Per Month",
            Self::Day => "Per Day",
        }
    }
}

/// One row of the interest schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterestRow {
    /// Accrual period of this row.
    pub period: CompoundingPeriod,
    /// Interest earned over the period.
    pub interest: f64,
    /// Interest as a percentage of the principal.
    pub percent_of_principal: f64,
    /// Principal plus the period's interest.
    pub total_value: f64,
}

/// A 4-row simple-interest table for a principal and annual rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestSchedule {
    /// Principal amount.
    pub principal: f64,
    /// Annual interest rate as a fraction (0.04 = 4%).
    pub annual_rate: f64,
    /// Rows in year, quarter, month, day order.
    pub rows: Vec<InterestRow>,
}

/// Build the interest schedule: `principal * rate / periods_per_year` per
/// row, plus each amount's share of principal and the resulting total.
pub fn interest_schedule(principal: f64, annual_rate: f64) -> InterestSchedule {
    let per_year = principal * annual_rate;

    let rows = [
        CompoundingPeriod::Year,
        CompoundingPeriod::Quarter,
        CompoundingPeriod::Month,
        CompoundingPeriod::Day,
    ]
    .into_iter()
    .map(|period| {
        let interest = per_year / period.periods_per_year();
        InterestRow {
            period,
            interest,
            percent_of_principal: if principal > 0.0 {
                interest / principal * 100.0
            } else {
                0.0
            },
            total_value: principal + interest,
        }
    })
    .collect();

    InterestSchedule {
        principal,
        annual_rate,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_documented_example() {
        // principal = 50_000, rate = 4%
        let schedule = interest_schedule(50_000.0, 0.04);
        assert_eq!(schedule.rows.len(), 4);

        let year = schedule.rows[0];
        let quarter = schedule.rows[1];
        let month = schedule.rows[2];
        let day = schedule.rows[3];

        assert_relative_eq!(year.interest, 2000.0);
        assert_relative_eq!(quarter.interest, 500.0);
        assert_relative_eq!(month.interest, 2000.0 / 12.0, epsilon = 1e-9);
        assert_relative_eq!(day.interest, 2000.0 / 365.0, epsilon = 1e-9);
        assert_eq!(format!("{:.2}", month.interest), "166.67");
        assert_eq!(format!("{:.2}", day.interest), "5.48");

        assert_relative_eq!(year.percent_of_principal, 4.0);
        assert_relative_eq!(year.total_value, 52_000.0);
        assert_relative_eq!(day.total_value, 50_000.0 + 2000.0 / 365.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_principal() {
        let schedule = interest_schedule(0.0, 0.05);
        for row in &schedule.rows {
            assert_eq!(row.interest, 0.0);
            assert_eq!(row.percent_of_principal, 0.0);
            assert_eq!(row.total_value, 0.0);
        }
    }
}
