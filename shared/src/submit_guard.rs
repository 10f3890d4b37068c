//! Guard for the team selection form: never submit without a resolved team.

use log::{debug, error, warn};

use crate::api::CalendarApi;
use crate::dto::common::TeamQuery;
use crate::search::Selection;

pub const QUERY_TOO_SHORT: &str = "Please type at least 2 characters and choose a team.";
pub const NO_MATCHING_TEAMS: &str = "No matching teams found. Please try a different name.";
pub const SEARCH_FAILED: &str = "Team search failed. Please try again.";

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitDecision {
    /// Let the browser submit the form as is
    Proceed,
    /// Cancel submission and alert the user
    Blocked(&'static str),
    /// Cancel submission, search for the query, then resubmit if it resolves
    Resolve(TeamQuery),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Resubmit(Selection),
    Warn(&'static str),
}

/// Decides what happens to a submit event given the hidden fields and the typed query.
pub fn decide(team_id: &str, team_name: &str, raw_query: &str) -> SubmitDecision {
    if !team_id.is_empty() && !team_name.is_empty() {
        return SubmitDecision::Proceed;
    }
    match TeamQuery::parse(raw_query) {
        Ok(query) => SubmitDecision::Resolve(query),
        Err(_) => SubmitDecision::Blocked(QUERY_TOO_SHORT),
    }
}

/// Runs the submit-time search. Any match resolves to the first team returned.
pub async fn resolve(api: &dyn CalendarApi, query: &TeamQuery) -> Resolution {
    match api.search_teams(query).await {
        Ok(teams) => match teams.first() {
            Some(team) => {
                if teams.len() > 1 {
                    debug!("'{}' matched {} teams, taking the first", query.q, teams.len());
                }
                Resolution::Resubmit(Selection::from(team))
            }
            None => Resolution::Warn(NO_MATCHING_TEAMS),
        },
        Err(e) if e.is_http() => {
            warn!("Team search rejected while resolving '{}': {}", query.q, e);
            Resolution::Warn(NO_MATCHING_TEAMS)
        }
        Err(e) => {
            error!("Team auto-resolve failed: {}", e);
            Resolution::Warn(SEARCH_FAILED)
        }
    }
}
