use serde::{Deserialize, Serialize};

/// Staff member eligible for commission, as served by the API.
///
/// Read-only reference data for the simulation panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    #[serde(rename = "_id")]
    pub id: String,

    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn staff_member_deserializes_wire_names() {
        let member: StaffMember = serde_json::from_value(json!({
            "_id": "s1",
            "name": "Dana"
        }))
        .unwrap();
        assert_eq!(member.id, "s1");
        assert_eq!(member.name, "Dana");
    }
}
