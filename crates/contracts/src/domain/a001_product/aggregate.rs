use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Sale item whose commission percent is managed through the admin grid.
///
/// Owned by the remote API; the client keeps a read-and-optimistically-mutated
/// local copy. Field names follow the API's wire contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,

    pub name: String,

    pub category: String,

    pub price: f64,

    /// Integer percent in [0, 100]; absent means no commission is set.
    #[serde(
        rename = "commissionPercent",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub commission_percent: Option<u8>,
}

/// Upper bound of a valid commission percent.
pub const MAX_COMMISSION_PERCENT: u8 = 100;

/// Parse a commission percent as typed into a UI field.
///
/// Rejects empty input, non-integer input and anything outside [0, 100];
/// callers send nothing to the API unless this succeeds.
pub fn parse_commission_percent(raw: &str) -> Result<u8, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Commission percent is empty".to_string());
    }
    let percent: u8 = trimmed
        .parse()
        .map_err(|_| format!("Invalid commission percent: {}", raw))?;
    if percent > MAX_COMMISSION_PERCENT {
        return Err(format!(
            "Commission percent must be between 0 and {}",
            MAX_COMMISSION_PERCENT
        ));
    }
    Ok(percent)
}

// ============================================================================
// Requests
// ============================================================================

/// Body of `PUT /api/products/{id}/commission`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommissionUpdateRequest {
    #[serde(rename = "commissionPercent")]
    pub commission_percent: u8,
}

/// Body of `PUT /api/products/commission-update`.
///
/// One percent applied to every listed product in a single request; the
/// response carries the full updated product list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkCommissionUpdateRequest {
    #[serde(rename = "productIds")]
    pub product_ids: Vec<String>,

    #[serde(rename = "commissionPercent")]
    pub commission_percent: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn product_deserializes_wire_names() {
        let product: Product = serde_json::from_value(json!({
            "_id": "p1",
            "name": "Espresso machine",
            "category": "Appliances",
            "price": 499.5,
            "commissionPercent": 12
        }))
        .unwrap();
        assert_eq!(product.id, "p1");
        assert_eq!(product.commission_percent, Some(12));
    }

    #[test]
    fn missing_commission_percent_means_unset() {
        let product: Product = serde_json::from_value(json!({
            "_id": "p2",
            "name": "Mug",
            "category": "Kitchen",
            "price": 8.0
        }))
        .unwrap();
        assert_eq!(product.commission_percent, None);
        // And unset stays off the wire.
        let value = serde_json::to_value(&product).unwrap();
        assert!(value.get("commissionPercent").is_none());
    }

    #[test]
    fn bulk_request_body_shape() {
        let request = BulkCommissionUpdateRequest {
            product_ids: vec!["1".to_string(), "3".to_string()],
            commission_percent: 15,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "productIds": ["1", "3"], "commissionPercent": 15 })
        );
    }

    #[test]
    fn single_update_body_shape() {
        let request = CommissionUpdateRequest {
            commission_percent: 30,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "commissionPercent": 30 })
        );
    }

    #[test]
    fn parse_accepts_bounds() {
        assert_eq!(parse_commission_percent("0"), Ok(0));
        assert_eq!(parse_commission_percent("100"), Ok(100));
        assert_eq!(parse_commission_percent(" 15 "), Ok(15));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(parse_commission_percent("").is_err());
        assert!(parse_commission_percent("   ").is_err());
        assert!(parse_commission_percent("101").is_err());
        assert!(parse_commission_percent("-5").is_err());
        assert!(parse_commission_percent("12.5").is_err());
        assert!(parse_commission_percent("abc").is_err());
    }
}
