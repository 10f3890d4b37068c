use gloo_net::http::Request;
use log::debug;
use shared::api::paths;
use shared::{Result, TeamDto, TeamListResponse};

use crate::api::api_url;
use crate::api::utils::{ensure_ok, network_error, read_json};

pub async fn get_popular_clubs() -> Result<Vec<TeamDto>> {
    debug!("Fetching popular clubs");

    let response = Request::get(&api_url(paths::POPULAR_CLUBS))
        .send()
        .await
        .map_err(|e| network_error("Failed to fetch clubs", e))?;
    let response = ensure_ok(response).await?;

    let body: TeamListResponse = read_json(response, "Failed to parse clubs response").await?;
    debug!("Successfully fetched {} clubs", body.teams.len());
    Ok(body.teams)
}
