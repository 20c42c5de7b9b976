use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate commission amount for one simulated day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayCommissions {
    #[serde(rename = "sumCommissions")]
    pub sum_commissions: f64,
}

/// Day-by-day simulation result keyed by day offset from the start date.
///
/// The wire encoding is a JSON object with stringified integer keys. The
/// ordered map makes ascending-offset iteration part of the contract instead
/// of an accident of the transport encoding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimulationBreakdown(pub BTreeMap<u32, DayCommissions>);

impl SimulationBreakdown {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Days in ascending offset order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, DayCommissions)> + '_ {
        self.0.iter().map(|(offset, day)| (*offset, *day))
    }
}
