use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use async_trait::async_trait;

use crate::api::CalendarApi;
use crate::dto::common::{SelectTeamForm, TeamQuery};
use crate::dto::matches::ToggleResponse;
use crate::dto::team::TeamDto;
use crate::{CalendarError, Result};

/// In-memory `CalendarApi` that replays queued responses and records every call.
#[derive(Default)]
pub struct FakeApi {
    pub clubs: RefCell<Option<Result<Vec<TeamDto>>>>,
    pub select_result: RefCell<Option<Result<()>>>,
    pub toggle_results: RefCell<VecDeque<Result<ToggleResponse>>>,
    pub search_results: RefCell<VecDeque<Result<Vec<TeamDto>>>>,

    pub club_calls: Cell<usize>,
    pub selected: RefCell<Vec<SelectTeamForm>>,
    pub toggled: RefCell<Vec<String>>,
    pub searched: RefCell<Vec<String>>,
}

impl FakeApi {
    pub fn with_clubs(result: Result<Vec<TeamDto>>) -> Self {
        let api = Self::default();
        *api.clubs.borrow_mut() = Some(result);
        api
    }

    pub fn with_select(result: Result<()>) -> Self {
        let api = Self::default();
        *api.select_result.borrow_mut() = Some(result);
        api
    }

    pub fn with_toggle(result: Result<ToggleResponse>) -> Self {
        let api = Self::default();
        api.toggle_results.borrow_mut().push_back(result);
        api
    }

    pub fn with_search(result: Result<Vec<TeamDto>>) -> Self {
        let api = Self::default();
        api.search_results.borrow_mut().push_back(result);
        api
    }
}

fn unexpected<T>(what: &str) -> Result<T> {
    Err(CalendarError::Network(format!("no fake response queued for {}", what)))
}

#[async_trait(?Send)]
impl CalendarApi for FakeApi {
    async fn popular_clubs(&self) -> Result<Vec<TeamDto>> {
        self.club_calls.set(self.club_calls.get() + 1);
        self.clubs
            .borrow_mut()
            .take()
            .unwrap_or_else(|| unexpected("popular_clubs"))
    }

    async fn select_team(&self, form: &SelectTeamForm) -> Result<()> {
        self.selected.borrow_mut().push(form.clone());
        self.select_result
            .borrow()
            .clone()
            .unwrap_or_else(|| unexpected("select_team"))
    }

    async fn toggle_watched(&self, external_id: &str) -> Result<ToggleResponse> {
        self.toggled.borrow_mut().push(external_id.to_string());
        self.toggle_results
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| unexpected("toggle_watched"))
    }

    async fn search_teams(&self, query: &TeamQuery) -> Result<Vec<TeamDto>> {
        self.searched.borrow_mut().push(query.q.clone());
        self.search_results
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| unexpected("search_teams"))
    }
}
