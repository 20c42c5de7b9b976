//! Projection of a simulation breakdown into table rows.

use crate::shared::date_utils::{date_at_offset, format_day_date};
use chrono::NaiveDate;
use contracts::usecases::u501_simulate_commissions::SimulationBreakdown;

/// One rendered result row: display date and that day's aggregate commission.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationRow {
    pub day: String,
    pub commission: f64,
}

/// Convert the breakdown into one row per day, in ascending offset order.
///
/// The displayed date is the simulation's start date plus the day offset.
pub fn simulation_rows(start: NaiveDate, breakdown: &SimulationBreakdown) -> Vec<SimulationRow> {
    breakdown
        .iter()
        .map(|(offset, day)| SimulationRow {
            day: format_day_date(date_at_offset(start, offset)),
            commission: day.sum_commissions,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::u501_simulate_commissions::DayCommissions;
    use std::collections::BTreeMap;

    #[test]
    fn rows_follow_ascending_day_offsets() {
        let mut days = BTreeMap::new();
        days.insert(2, DayCommissions { sum_commissions: 3.0 });
        days.insert(0, DayCommissions { sum_commissions: 5.0 });
        let breakdown = SimulationBreakdown(days);

        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let rows = simulation_rows(start, &breakdown);

        assert_eq!(
            rows,
            vec![
                SimulationRow { day: "Mon Jan 01 2024".to_string(), commission: 5.0 },
                SimulationRow { day: "Wed Jan 03 2024".to_string(), commission: 3.0 },
            ]
        );
    }

    #[test]
    fn empty_breakdown_renders_no_rows() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(simulation_rows(start, &SimulationBreakdown::default()).is_empty());
    }
}
