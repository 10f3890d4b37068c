//! Team search autocomplete and the guarded team selection form.
//!
//! The search input, the hidden id/name fields and the form are rendered by the
//! server; this module only attaches behaviour to them.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use log::{debug, error};
use shared::search::{Dropdown, InputAction, SearchSession, SearchTicket, Selection, NO_RESULTS};
use shared::submit_guard::{self, Resolution, SubmitDecision};
use shared::{CalendarError, Result, TeamDto};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, HtmlFormElement, HtmlInputElement, KeyboardEvent};

use crate::api::ApiHandle;
use crate::config::Config;
use crate::debounce::Debouncer;
use crate::dom::{self, js_error};

const DROPDOWN_CLASS: &str = "dropdown";
const DROPDOWN_ITEM_CLASS: &str = "dropdown-item";

struct OpenDropdown {
    element: Element,
    _listeners: Vec<EventListener>,
}

pub struct TeamSearch {
    input: HtmlInputElement,
    team_id: Option<HtmlInputElement>,
    team_name: Option<HtmlInputElement>,
    api: ApiHandle,
    session: RefCell<SearchSession>,
    debouncer: RefCell<Debouncer>,
    dropdown: RefCell<Option<OpenDropdown>>,
}

/// Listeners that keep a bound search alive; dropping them unbinds it.
pub struct TeamSearchBinding {
    pub search: Rc<TeamSearch>,
    listeners: Vec<EventListener>,
}

impl TeamSearchBinding {
    /// Keeps the search bound for the rest of the page's life.
    pub fn forget(self) {
        for listener in self.listeners {
            listener.forget();
        }
    }
}

/// Binds the search input and, when present, the selection form.
///
/// Returns `None` when the page has no team search.
pub fn bind(document: &Document, api: &ApiHandle, debounce_ms: u32) -> Option<TeamSearchBinding> {
    let input = dom::input_by_id(document, Config::TEAM_SEARCH_ID)?;
    let search = Rc::new(TeamSearch {
        input,
        team_id: dom::input_by_id(document, Config::TEAM_ID_FIELD),
        team_name: dom::input_by_id(document, Config::TEAM_NAME_FIELD),
        api: api.clone(),
        session: RefCell::new(SearchSession::new()),
        debouncer: RefCell::new(Debouncer::new(debounce_ms)),
        dropdown: RefCell::new(None),
    });

    let input = search.input.clone();
    let mut listeners = vec![
        {
            let search = Rc::clone(&search);
            EventListener::new(&input, "input", move |_| search.on_input())
        },
        {
            let search = Rc::clone(&search);
            EventListener::new(&input, "keydown", move |event| {
                if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                    if event.key() == "Escape" {
                        search.dismiss();
                    }
                }
            })
        },
    ];

    let form = document
        .get_element_by_id(Config::TEAM_FORM_ID)
        .and_then(|element| element.dyn_into::<HtmlFormElement>().ok());
    if let Some(form) = form {
        let search = Rc::clone(&search);
        let target = form.clone();
        listeners.push(EventListener::new_with_options(
            &form,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event| search.on_submit(event, &target),
        ));
    }

    debug!("Team search bound ({} listeners)", listeners.len());
    Some(TeamSearchBinding {
        search,
        listeners,
    })
}

impl TeamSearch {
    fn on_input(self: &Rc<Self>) {
        self.clear_hidden();
        let action = self.session.borrow_mut().on_input(&self.input.value());

        match action {
            InputAction::Close => {
                self.debouncer.borrow_mut().cancel();
                self.close_dropdown();
            }
            InputAction::Schedule(ticket) => {
                let search = Rc::clone(self);
                self.debouncer
                    .borrow_mut()
                    .schedule(move || search.run_search(ticket));
            }
        }
    }

    fn run_search(self: Rc<Self>, ticket: SearchTicket) {
        spawn_local(async move {
            let result = self.api.search_teams(&ticket.query).await;
            let dropdown = self.session.borrow().on_results(&ticket, result);
            if let Some(dropdown) = dropdown {
                if let Err(e) = self.render_dropdown(dropdown) {
                    error!("Failed to render team dropdown: {}", e);
                }
            }
        });
    }

    fn render_dropdown(self: &Rc<Self>, dropdown: Dropdown) -> Result<()> {
        self.close_dropdown();

        let document = self
            .input
            .owner_document()
            .ok_or_else(|| CalendarError::Dom("Search input is detached".to_string()))?;
        let parent = self
            .input
            .parent_element()
            .ok_or_else(|| CalendarError::Dom("Search input has no parent".to_string()))?;
        let container = dom::div(&document, DROPDOWN_CLASS, None)?;
        let mut listeners = Vec::new();

        match dropdown {
            Dropdown::NoResults => {
                let empty = dom::div(&document, DROPDOWN_ITEM_CLASS, Some(NO_RESULTS))?;
                let style = empty.style();
                style
                    .set_property("color", "#888")
                    .and_then(|_| style.set_property("cursor", "default"))
                    .map_err(|e| js_error("Failed to style empty dropdown", e))?;
                container
                    .append_child(&empty)
                    .map_err(|e| js_error("Failed to append dropdown item", e))?;
            }
            Dropdown::Options(teams) => {
                for team in teams {
                    let option = dom::div(&document, DROPDOWN_ITEM_CLASS, Some(team.name_or_empty()))?;
                    let search = Rc::clone(self);
                    listeners.push(EventListener::new(&option, "click", move |_| search.pick(&team)));
                    container
                        .append_child(&option)
                        .map_err(|e| js_error("Failed to append dropdown item", e))?;
                }
            }
        }

        parent
            .append_child(&container)
            .map_err(|e| js_error("Failed to attach dropdown", e))?;
        *self.dropdown.borrow_mut() = Some(OpenDropdown {
            element: container.into(),
            _listeners: listeners,
        });
        Ok(())
    }

    fn pick(self: &Rc<Self>, team: &TeamDto) {
        let selection = self.session.borrow_mut().select(team);
        debug!("Picked team {} ({})", selection.team_name, selection.team_id);
        self.input.set_value(&selection.text);
        self.fill_hidden(&selection);

        // Runs from an option's click listener, which the close would drop mid-call.
        let search = Rc::clone(self);
        spawn_local(async move { search.close_dropdown() });
    }

    fn dismiss(&self) {
        self.session.borrow_mut().dismiss();
        self.debouncer.borrow_mut().cancel();
        self.close_dropdown();
    }

    fn close_dropdown(&self) {
        if let Some(open) = self.dropdown.borrow_mut().take() {
            open.element.remove();
        }
    }

    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown.borrow().is_some()
    }

    fn clear_hidden(&self) {
        for field in [&self.team_id, &self.team_name].into_iter().flatten() {
            field.set_value("");
        }
    }

    fn fill_hidden(&self, selection: &Selection) {
        if let Some(field) = &self.team_id {
            field.set_value(&selection.team_id);
        }
        if let Some(field) = &self.team_name {
            field.set_value(&selection.team_name);
        }
    }

    fn on_submit(self: &Rc<Self>, event: &Event, form: &HtmlFormElement) {
        let (Some(team_id), Some(team_name)) = (&self.team_id, &self.team_name) else {
            return;
        };

        match submit_guard::decide(&team_id.value(), &team_name.value(), &self.input.value()) {
            SubmitDecision::Proceed => {}
            SubmitDecision::Blocked(message) => {
                event.prevent_default();
                dom::alert(message);
            }
            SubmitDecision::Resolve(query) => {
                event.prevent_default();
                let search = Rc::clone(self);
                let form = form.clone();
                spawn_local(async move {
                    match submit_guard::resolve(&*search.api, &query).await {
                        Resolution::Resubmit(selection) => {
                            search.fill_hidden(&selection);
                            // `submit()` skips submit listeners, so the guard does not run again.
                            if let Err(e) = form.submit() {
                                error!("{}", js_error("Form resubmission failed", e));
                            }
                        }
                        Resolution::Warn(message) => dom::alert(message),
                    }
                });
            }
        }
    }
}
