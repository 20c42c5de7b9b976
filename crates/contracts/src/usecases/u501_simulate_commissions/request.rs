use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/commissions/simulate`.
///
/// Both bounds are full date-times, serialized as ISO-8601.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulateCommissionsRequest {
    #[serde(rename = "startDate")]
    pub start_date: DateTime<Utc>,

    #[serde(rename = "endDate")]
    pub end_date: DateTime<Utc>,

    #[serde(rename = "staffMemberId")]
    pub staff_member_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn request_serializes_iso_dates() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc();
        let end = NaiveDate::from_ymd_opt(2024, 1, 7)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc();
        let request = SimulateCommissionsRequest {
            start_date: start,
            end_date: end,
            staff_member_id: "s1".to_string(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["startDate"], "2024-01-01T00:00:00Z");
        assert_eq!(value["endDate"], "2024-01-07T00:00:00Z");
        assert_eq!(value["staffMemberId"], "s1");
    }
}
