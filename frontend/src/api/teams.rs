use gloo_net::http::Request;
use log::debug;
use shared::api::paths;
use shared::{Result, SelectTeamForm, TeamDto, TeamListResponse, TeamQuery};

use crate::api::api_url;
use crate::api::utils::{ensure_ok, network_error, read_json, FORM_CONTENT_TYPE};

pub async fn search_teams(query: &TeamQuery) -> Result<Vec<TeamDto>> {
    debug!("Searching teams with query: {}", query.q);

    let response = Request::get(&api_url(&paths::search_teams(query)))
        .send()
        .await
        .map_err(|e| network_error("Failed to search teams", e))?;
    let response = ensure_ok(response).await?;

    let body: TeamListResponse = read_json(response, "Failed to parse search response").await?;
    debug!("Search for '{}' found {} teams", query.q, body.teams.len());
    Ok(body.teams)
}

pub async fn select_team(form: &SelectTeamForm) -> Result<()> {
    debug!("Selecting team {} ({})", form.team_name, form.team_id);

    let response = Request::post(&api_url(paths::SELECT_TEAM))
        .header("Content-Type", FORM_CONTENT_TYPE)
        .body(form.to_form_body())
        .map_err(|e| network_error("Failed to build selection request", e))?
        .send()
        .await
        .map_err(|e| network_error("Failed to select team", e))?;
    ensure_ok(response).await?;

    debug!("Server accepted team selection {}", form.team_id);
    Ok(())
}
