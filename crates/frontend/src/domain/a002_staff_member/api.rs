use crate::shared::api_utils::ApiConfig;
use contracts::domain::a002_staff_member::StaffMember;
use gloo_net::http::Request;

/// Load the staff member reference list.
pub async fn fetch_staff_members(config: &ApiConfig) -> Result<Vec<StaffMember>, String> {
    let response = Request::get(&config.url("/api/staff-members"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
