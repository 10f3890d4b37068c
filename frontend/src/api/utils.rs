use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use shared::{CalendarError, ErrorResponse, Result};

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

pub fn network_error(context: &str, error: gloo_net::Error) -> CalendarError {
    match error {
        gloo_net::Error::SerdeError(e) => CalendarError::Decode(format!("{}: {}", context, e)),
        other => CalendarError::Network(format!("{}: {}", context, other)),
    }
}

/// Turns a non-success response into `CalendarError::Http`.
///
/// JSON bodies of the form `{"error": "..."}` contribute their message; any other
/// body is passed through as text.
pub async fn ensure_ok(response: Response) -> Result<Response> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(error) => error.error,
        Err(_) => body,
    };
    Err(CalendarError::http(status, message))
}

pub async fn read_json<T: DeserializeOwned>(response: Response, context: &str) -> Result<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| network_error(context, e))
}
