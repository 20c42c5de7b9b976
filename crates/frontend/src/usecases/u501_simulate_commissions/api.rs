use crate::shared::api_utils::ApiConfig;
use contracts::usecases::u501_simulate_commissions::{
    SimulateCommissionsRequest, SimulationBreakdown,
};
use gloo_net::http::Request;

/// Run a commission simulation for the given staff member and date range.
///
/// The result is a non-persistent projection; each call replaces the
/// previous one wholesale on the caller's side.
pub async fn simulate_commissions(
    config: &ApiConfig,
    request: &SimulateCommissionsRequest,
) -> Result<SimulationBreakdown, String> {
    let response = Request::post(&config.url("/api/commissions/simulate"))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
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
