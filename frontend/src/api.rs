pub mod clubs;
pub mod matches;
pub mod teams;
pub mod utils;

use std::ops::Deref;
use std::rc::Rc;

use async_trait::async_trait;
use shared::{CalendarApi, Result, SelectTeamForm, TeamDto, TeamQuery, ToggleResponse};

use crate::config::Config;

pub fn api_url(path: &str) -> String {
    let base_url = Config::api_base_url();
    if base_url.is_empty() {
        // Use relative URL
        path.to_string()
    } else {
        // Use absolute URL
        format!("{}{}", base_url, path)
    }
}

/// `CalendarApi` over `gloo-net` against the page's own server
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpApi;

#[async_trait(?Send)]
impl CalendarApi for HttpApi {
    async fn popular_clubs(&self) -> Result<Vec<TeamDto>> {
        clubs::get_popular_clubs().await
    }

    async fn select_team(&self, form: &SelectTeamForm) -> Result<()> {
        teams::select_team(form).await
    }

    async fn toggle_watched(&self, external_id: &str) -> Result<ToggleResponse> {
        matches::toggle_watched(external_id).await
    }

    async fn search_teams(&self, query: &TeamQuery) -> Result<Vec<TeamDto>> {
        teams::search_teams(query).await
    }
}

/// Shared handle to whichever `CalendarApi` the page behaviours talk to.
///
/// Components take it as a prop, so equality is identity of the underlying api.
#[derive(Clone)]
pub struct ApiHandle(Rc<dyn CalendarApi>);

impl ApiHandle {
    pub fn new(api: impl CalendarApi + 'static) -> Self {
        Self(Rc::new(api))
    }
}

impl Default for ApiHandle {
    fn default() -> Self {
        Self::new(HttpApi)
    }
}

impl Deref for ApiHandle {
    type Target = dyn CalendarApi;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for ApiHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
