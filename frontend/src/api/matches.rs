use gloo_net::http::Request;
use log::debug;
use shared::api::paths;
use shared::{Result, ToggleResponse};

use crate::api::api_url;
use crate::api::utils::{ensure_ok, network_error, read_json};

pub async fn toggle_watched(external_id: &str) -> Result<ToggleResponse> {
    debug!("Toggling watched flag for match {}", external_id);

    let response = Request::post(&api_url(&paths::toggle_watched(external_id)))
        .send()
        .await
        .map_err(|e| network_error("Failed to toggle watched", e))?;
    let response = ensure_ok(response).await?;

    read_json(response, "Failed to parse toggle response").await
}
