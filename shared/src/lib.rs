pub mod dto {
    pub mod common;
    pub mod matches;
    pub mod team;
}

pub mod api;
pub mod club_grid;
pub mod error;
pub mod search;
pub mod submit_guard;
pub mod watched;

#[cfg(test)]
mod test_support;

// Re-export commonly used items
pub use error::{CalendarError, Result};
pub use api::CalendarApi;

// Re-export DTOs
pub use dto::{
    common::{ErrorResponse, SelectTeamForm, TeamQuery, MIN_QUERY_LEN},
    matches::ToggleResponse,
    team::{TeamDto, TeamId, TeamListResponse},
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn min_query_len_matches_validation() {
        let shortest = "x".repeat(MIN_QUERY_LEN);
        assert!(TeamQuery::parse(&shortest).is_ok());
        assert!(TeamQuery::parse(&shortest[1..]).is_err());
    }

    #[test]
    fn team_list_round_trips_through_json() {
        let response = TeamListResponse {
            teams: vec![TeamDto::new(86, "Real Madrid CF")],
            error: None,
        };
        let json = serde_json::to_string(&response).unwrap();
        let parsed: TeamListResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, response);
    }
}
