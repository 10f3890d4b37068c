//! Watched flag toggling for calendar matches.

use log::{debug, warn};

use crate::api::CalendarApi;

/// Class carried by a match container the user has watched
pub const WATCHED_CLASS: &str = "watched";
/// Selector for the element that owns a watched checkbox
pub const MATCH_CONTAINER_SELECTOR: &str = ".match";
/// Checkboxes that drive the toggle
pub const CHECKBOX_SELECTOR: &str = "input[type=\"checkbox\"][data-external-id]";
pub const EXTERNAL_ID_ATTR: &str = "data-external-id";

pub const TOGGLE_FAILED: &str = "Could not toggle watched.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Server answered; `watched` is the state to mirror on the match container
    Applied { watched: bool },
    /// Request failed; the checkbox goes back to `checked` and the user is alerted
    Reverted { checked: bool },
}

/// Toggles one match. `checked_now` is the checkbox state right after the user's change.
pub async fn toggle(api: &dyn CalendarApi, external_id: &str, checked_now: bool) -> ToggleOutcome {
    match api.toggle_watched(external_id).await {
        Ok(response) => {
            debug!("Match {} watched={}", external_id, response.watched);
            ToggleOutcome::Applied {
                watched: response.watched,
            }
        }
        Err(e) => {
            warn!("Toggle for match {} failed: {}", external_id, e);
            ToggleOutcome::Reverted {
                checked: !checked_now,
            }
        }
    }
}
