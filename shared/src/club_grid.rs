//! Club grid: popular clubs rendered as selectable cards.

use log::{debug, error};

use crate::api::CalendarApi;
use crate::dto::common::SelectTeamForm;
use crate::dto::team::TeamDto;
use crate::CalendarError;

pub const NO_CLUBS: &str = "No clubs available.";
pub const COULD_NOT_LOAD: &str = "Could not load clubs.";
pub const FAILED_TO_LOAD: &str = "Failed to load clubs.";

pub const CARD_PROMPT: &str = "Click to load calendar";
pub const CARD_LOADING: &str = "Loading calendar...";
pub const SELECT_FAILED: &str = "Failed to select club.";

/// Tags whose clicks belong to the element itself, not to the card
const INTERACTIVE_TAGS: [&str; 3] = ["A", "BUTTON", "INPUT"];

#[derive(Debug, Clone, PartialEq)]
pub enum GridState {
    Loading,
    Cards(Vec<TeamDto>),
    Placeholder(&'static str),
}

/// What a single card's content area shows
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CardStatus {
    #[default]
    Idle,
    Loading,
    Failed(String),
}

impl CardStatus {
    pub fn message(&self) -> &str {
        match self {
            CardStatus::Idle => CARD_PROMPT,
            CardStatus::Loading => CARD_LOADING,
            CardStatus::Failed(msg) => msg,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectOutcome {
    /// Selection stored; the page should leave for the calendar view
    Navigate,
    Failed(String),
}

/// Fetches popular clubs once and maps the answer onto the grid.
pub async fn load_grid(api: &dyn CalendarApi) -> GridState {
    match api.popular_clubs().await {
        Ok(teams) if teams.is_empty() => GridState::Placeholder(NO_CLUBS),
        Ok(teams) => {
            debug!("Loaded {} popular clubs", teams.len());
            GridState::Cards(teams)
        }
        Err(e @ CalendarError::Http { .. }) => {
            error!("Popular clubs request rejected: {}", e);
            GridState::Placeholder(COULD_NOT_LOAD)
        }
        Err(e) => {
            error!("Failed to load clubs: {}", e);
            GridState::Placeholder(FAILED_TO_LOAD)
        }
    }
}

/// Clicks on links, buttons and inputs inside a card never select the club.
pub fn is_interactive_tag(tag_name: &str) -> bool {
    INTERACTIVE_TAGS
        .iter()
        .any(|tag| tag.eq_ignore_ascii_case(tag_name))
}

/// Posts the club selection; one call is one request.
pub async fn select_club(api: &dyn CalendarApi, team: &TeamDto) -> SelectOutcome {
    let form = SelectTeamForm::for_team(team);
    debug!("Selecting club {} ({})", form.team_name, form.team_id);

    match api.select_team(&form).await {
        Ok(()) => SelectOutcome::Navigate,
        Err(e) => {
            error!("Club select failed: {}", e);
            let message = e.user_message();
            if message.is_empty() {
                SelectOutcome::Failed(SELECT_FAILED.to_string())
            } else {
                SelectOutcome::Failed(message)
            }
        }
    }
}
