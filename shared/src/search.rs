//! Team search autocomplete session.
//!
//! Every input event advances a sequence number. A search result is rendered only
//! while its ticket is still the latest one, so a slow response can never overwrite
//! a newer query, a selection, or a cleared input.

use log::{debug, error};

use crate::dto::common::TeamQuery;
use crate::dto::team::TeamDto;
use crate::Result;

pub const NO_RESULTS: &str = "No results";

/// A search scheduled by an input event
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTicket {
    pub seq: u64,
    pub query: TeamQuery,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputAction {
    /// Query too short: close the dropdown and cancel any pending search
    Close,
    /// (Re)arm the debounce timer with this ticket
    Schedule(SearchTicket),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Dropdown {
    Options(Vec<TeamDto>),
    NoResults,
}

/// Values written into the search form when a team is picked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub text: String,
    pub team_id: String,
    pub team_name: String,
}

impl From<&TeamDto> for Selection {
    fn from(team: &TeamDto) -> Self {
        Self {
            text: team.name_or_empty().to_string(),
            team_id: team.id.to_string(),
            team_name: team.name_or_empty().to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct SearchSession {
    latest: u64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles the raw text of the search input after a keystroke.
    ///
    /// The caller clears the hidden id/name fields on every input regardless of the action.
    pub fn on_input(&mut self, raw: &str) -> InputAction {
        self.latest += 1;
        match TeamQuery::parse(raw) {
            Ok(query) => InputAction::Schedule(SearchTicket {
                seq: self.latest,
                query,
            }),
            Err(_) => InputAction::Close,
        }
    }

    pub fn is_current(&self, ticket: &SearchTicket) -> bool {
        ticket.seq == self.latest
    }

    /// Maps a finished search onto the dropdown, or `None` when the ticket is stale.
    pub fn on_results(&self, ticket: &SearchTicket, result: Result<Vec<TeamDto>>) -> Option<Dropdown> {
        if !self.is_current(ticket) {
            debug!(
                "Dropping stale results for '{}' (seq {} < {})",
                ticket.query.q, ticket.seq, self.latest
            );
            return None;
        }

        match result {
            Ok(teams) if teams.is_empty() => Some(Dropdown::NoResults),
            Ok(teams) => Some(Dropdown::Options(teams)),
            Err(e) => {
                error!("Team search error: {}", e);
                Some(Dropdown::NoResults)
            }
        }
    }

    /// Picks a team from the dropdown; in-flight searches become stale.
    pub fn select(&mut self, team: &TeamDto) -> Selection {
        self.latest += 1;
        Selection::from(team)
    }

    /// Closes the dropdown without a selection (Escape); in-flight searches become stale.
    pub fn dismiss(&mut self) {
        self.latest += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CalendarError;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn ticket(action: InputAction) -> SearchTicket {
        match action {
            InputAction::Schedule(ticket) => ticket,
            InputAction::Close => panic!("expected a scheduled search"),
        }
    }

    #[test_case("" ; "empty")]
    #[test_case("l" ; "one char")]
    #[test_case(" l " ; "one char padded")]
    fn short_input_never_schedules(raw: &str) {
        let mut session = SearchSession::new();
        assert_eq!(session.on_input(raw), InputAction::Close);
    }

    #[test]
    fn long_input_schedules_trimmed_query() {
        let mut session = SearchSession::new();
        let ticket = ticket(session.on_input("  liv "));
        assert_eq!(ticket.query.q, "liv");
        assert!(session.is_current(&ticket));
    }

    #[test]
    fn only_latest_ticket_renders() {
        let mut session = SearchSession::new();
        let first = ticket(session.on_input("li"));
        let second = ticket(session.on_input("liv"));
        let teams = vec![TeamDto::new(64, "Liverpool FC")];

        assert_eq!(session.on_results(&first, Ok(teams.clone())), None);
        assert_eq!(
            session.on_results(&second, Ok(teams.clone())),
            Some(Dropdown::Options(teams))
        );
    }

    #[test]
    fn clearing_input_invalidates_inflight_search() {
        let mut session = SearchSession::new();
        let pending = ticket(session.on_input("ars"));
        assert_eq!(session.on_input("a"), InputAction::Close);

        let late = session.on_results(&pending, Ok(vec![TeamDto::new(57, "Arsenal FC")]));
        assert_eq!(late, None);
    }

    #[test]
    fn empty_and_failed_searches_show_no_results() {
        let mut session = SearchSession::new();
        let current = ticket(session.on_input("zzz"));

        assert_eq!(session.on_results(&current, Ok(vec![])), Some(Dropdown::NoResults));
        assert_eq!(
            session.on_results(&current, Err(CalendarError::http(400, "API rate limit reached"))),
            Some(Dropdown::NoResults)
        );
    }

    #[test]
    fn selecting_fills_fields_and_invalidates_pending() {
        let mut session = SearchSession::new();
        let pending = ticket(session.on_input("che"));
        let chelsea = TeamDto::new(61, "Chelsea FC");

        let selection = session.select(&chelsea);

        assert_eq!(
            selection,
            Selection {
                text: "Chelsea FC".into(),
                team_id: "61".into(),
                team_name: "Chelsea FC".into(),
            }
        );
        assert_eq!(session.on_results(&pending, Ok(vec![chelsea])), None);
    }

    #[test]
    fn dismiss_invalidates_pending() {
        let mut session = SearchSession::new();
        let pending = ticket(session.on_input("tot"));
        session.dismiss();
        assert!(!session.is_current(&pending));
    }
}
