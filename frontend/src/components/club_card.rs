use log::error;
use shared::club_grid::{is_interactive_tag, select_club, CardStatus, SelectOutcome};
use shared::TeamDto;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use yew::prelude::*;
use yew_router::Routable;

use crate::api::ApiHandle;
use crate::dom;
use crate::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct ClubCardProps {
    pub team: TeamDto,
    #[prop_or_default]
    pub api: ApiHandle,
}

#[function_component(ClubCard)]
pub fn club_card(props: &ClubCardProps) -> Html {
    let status = use_state(CardStatus::default);
    let crest_failed = use_state(|| false);

    let onclick = {
        let status = status.clone();
        let team = props.team.clone();
        let api = props.api.clone();

        Callback::from(move |e: MouseEvent| {
            if let Some(target) = e.target_dyn_into::<Element>() {
                if is_interactive_tag(&target.tag_name()) {
                    return;
                }
            }

            status.set(CardStatus::Loading);
            let status = status.clone();
            let team = team.clone();
            let api = api.clone();
            spawn_local(async move {
                match select_club(&*api, &team).await {
                    SelectOutcome::Navigate => {
                        if let Err(e) = dom::navigate(&Route::Calendar.to_path()) {
                            error!("Could not open the calendar: {}", e);
                            status.set(CardStatus::Failed(e.user_message()));
                        }
                    }
                    SelectOutcome::Failed(message) => {
                        gloo::console::error!("Club select failed", message.clone());
                        status.set(CardStatus::Failed(message));
                    }
                }
            });
        })
    };

    let onerror = {
        let crest_failed = crest_failed.clone();
        Callback::from(move |_: Event| crest_failed.set(true))
    };

    let team = &props.team;
    let crest_style = crest_failed.then(|| AttrValue::from("display: none"));

    html! {
        <div class="club-card" {onclick}>
            <img
                class="club-crest"
                src={team.crest_src().to_string()}
                alt={team.crest_alt().to_string()}
                style={crest_style}
                {onerror}
            />
            <div class="club-name">{team.display_name()}</div>
            <div class="club-content">
                <div class="muted">{status.message().to_string()}</div>
            </div>
        </div>
    }
}
