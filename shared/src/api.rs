//! The seam between page behaviour and the calendar server.
//!
//! Behaviour modules only talk to the server through [`CalendarApi`]; the wasm crate
//! provides the HTTP implementation and tests provide in-memory ones.

use async_trait::async_trait;

use crate::dto::common::{SelectTeamForm, TeamQuery};
use crate::dto::matches::ToggleResponse;
use crate::dto::team::TeamDto;
use crate::Result;

pub mod paths {
    use crate::dto::common::TeamQuery;

    pub const POPULAR_CLUBS: &str = "/clubs/popular";
    pub const SELECT_TEAM: &str = "/teams/select";
    pub const SEARCH_TEAMS: &str = "/teams/search";

    pub fn toggle_watched(external_id: &str) -> String {
        format!("/matches/{}/toggle", urlencoding::encode(external_id))
    }

    pub fn search_teams(query: &TeamQuery) -> String {
        format!("{}?{}", SEARCH_TEAMS, query.to_query_string())
    }
}

#[async_trait(?Send)]
pub trait CalendarApi {
    /// `GET /clubs/popular`
    async fn popular_clubs(&self) -> Result<Vec<TeamDto>>;

    /// `POST /teams/select`; success means the server stored the selection
    async fn select_team(&self, form: &SelectTeamForm) -> Result<()>;

    /// `POST /matches/{external_id}/toggle`
    async fn toggle_watched(&self, external_id: &str) -> Result<ToggleResponse>;

    /// `GET /teams/search?q=`
    async fn search_teams(&self, query: &TeamQuery) -> Result<Vec<TeamDto>>;
}
