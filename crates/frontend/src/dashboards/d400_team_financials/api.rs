use contracts::dashboards::d400_team_financials::{RevenuesResponse, TeamsResponse};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::shared::api_utils::{api_url, with_query};

const TEAMS_FAILED: &str = "Failed to fetch teams";
const REVENUES_FAILED: &str = "Failed to fetch revenues";

/// GET `url` and parse the JSON body, mapping every failure to `generic_error`
async fn get_json<T: DeserializeOwned>(url: &str, generic_error: &str) -> Result<T, String> {
    let response = Request::get(url).send().await.map_err(|e| {
        log::error!("Request to {} failed: {}", url, e);
        generic_error.to_string()
    })?;

    if !response.ok() {
        log::error!("Request to {} returned HTTP {}", url, response.status());
        return Err(generic_error.to_string());
    }

    response.json::<T>().await.map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);
        generic_error.to_string()
    })
}

/// All teams, ordered by name
pub async fn fetch_teams() -> Result<TeamsResponse, String> {
    get_json(&api_url("/api/teams"), TEAMS_FAILED).await
}

/// Season financials of one team, ordered by season year
pub async fn fetch_revenues(team_id: &str) -> Result<RevenuesResponse, String> {
    let path = with_query("/api/revenues", &[("teamId", team_id)]);
    get_json(&api_url(&path), REVENUES_FAILED).await
}
