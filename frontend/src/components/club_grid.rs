use log::debug;
use shared::club_grid::{load_grid, GridState};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiHandle;
use crate::components::club_card::ClubCard;

#[derive(Properties, PartialEq, Default)]
pub struct ClubGridProps {
    #[prop_or_default]
    pub api: ApiHandle,
}

#[function_component(ClubGrid)]
pub fn club_grid(props: &ClubGridProps) -> Html {
    let state = use_state(|| GridState::Loading);

    {
        let state = state.clone();
        let api = props.api.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                state.set(load_grid(&*api).await);
            });
            || ()
        });
    }

    match &*state {
        GridState::Loading => {
            debug!("Club grid waiting for popular clubs");
            html! {}
        }
        GridState::Cards(teams) => teams
            .iter()
            .map(|team| {
                html! {
                    <ClubCard team={team.clone()} api={props.api.clone()} />
                }
            })
            .collect::<Html>(),
        GridState::Placeholder(message) => html! {
            <div class="muted">{*message}</div>
        },
    }
}
