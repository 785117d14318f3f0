use web_sys::HtmlInputElement;
use yew::prelude::*;

use hangman_shared::constants::{
    DUPLICATE_PLAYER_ERROR, MAX_PVP_PLAYERS, PVC_PLAYERS, PVC_PLAYERS_ERROR, PVP_MAX_PLAYERS_ERROR,
};
use hangman_shared::shared_hangman_game::GameMode;
use hangman_shared::validation::{validate_player_name, validate_roster};

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct SetupScreenProps {
    pub busy: bool,
    pub on_create: Callback<(GameMode, Vec<String>)>,
}

fn roster_limit(mode: GameMode) -> (usize, &'static str) {
    match mode {
        GameMode::Pvp => (MAX_PVP_PLAYERS, PVP_MAX_PLAYERS_ERROR),
        GameMode::Pvc => (PVC_PLAYERS, PVC_PLAYERS_ERROR),
    }
}

#[function_component(SetupScreen)]
pub fn setup_screen(props: &SetupScreenProps) -> Html {
    let mode = use_state(GameMode::default);
    let players = use_state(Vec::<String>::new);
    let name_input = use_state(String::new);
    let error = use_state(|| None::<String>);

    let on_mode = |next: GameMode| {
        let mode = mode.clone();
        let players = players.clone();
        let error = error.clone();
        Callback::from(move |_: Event| {
            mode.set(next);
            // A pvc roster holds a single name
            if next == GameMode::Pvc && players.len() > PVC_PLAYERS {
                players.set(players[..PVC_PLAYERS].to_vec());
            }
            error.set(None);
        })
    };

    let on_name_input = {
        let name_input = name_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name_input.set(input.value());
        })
    };

    let on_add = {
        let mode = mode.clone();
        let players = players.clone();
        let name_input = name_input.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let name = match validate_player_name(&name_input) {
                Ok(name) => name,
                Err(err) => {
                    error.set(err.message.map(|m| m.to_string()));
                    return;
                }
            };
            if players.contains(&name) {
                error.set(Some(DUPLICATE_PLAYER_ERROR.to_string()));
                return;
            }
            let (limit, message) = roster_limit(*mode);
            if players.len() >= limit {
                error.set(Some(message.to_string()));
                return;
            }
            let mut next = (*players).clone();
            next.push(name);
            players.set(next);
            name_input.set(String::new());
            error.set(None);
        })
    };

    let on_start = {
        let mode = mode.clone();
        let players = players.clone();
        let error = error.clone();
        let on_create = props.on_create.clone();
        Callback::from(move |_| {
            match validate_roster(*mode, &players) {
                Ok(roster) => {
                    error.set(None);
                    on_create.emit((*mode, roster));
                }
                Err(err) => error.set(err.message.map(|m| m.to_string())),
            }
        })
    };

    let title = match *mode {
        GameMode::Pvp => format!("Adicionar Jogadores (1-{})", MAX_PVP_PLAYERS),
        GameMode::Pvc => "Nome do Jogador".to_string(),
    };
    let roster_full = players.len() >= roster_limit(*mode).0;

    html! {
        <div class={styles::CONTAINER_SM}>
            <div class={styles::CARD}>
                <h2 class={styles::TEXT_H2}>{"Novo jogo"}</h2>

                <fieldset class="mt-4 flex gap-6">
                    <label class={styles::TEXT_LABEL}>
                        <input
                            type="radio"
                            name="mode"
                            class="mr-2"
                            checked={*mode == GameMode::Pvp}
                            onchange={on_mode(GameMode::Pvp)}
                        />
                        {"Jogador vs Jogador"}
                    </label>
                    <label class={styles::TEXT_LABEL}>
                        <input
                            type="radio"
                            name="mode"
                            class="mr-2"
                            checked={*mode == GameMode::Pvc}
                            onchange={on_mode(GameMode::Pvc)}
                        />
                        {"Jogador vs CPU"}
                    </label>
                </fieldset>

                <h3 class={classes!(styles::TEXT_H3, "mt-6")}>{ title }</h3>
                <form class={styles::FORM} onsubmit={on_add}>
                    <div class="flex gap-2">
                        <input
                            type="text"
                            class={styles::INPUT}
                            placeholder="Nome do jogador"
                            value={(*name_input).clone()}
                            oninput={on_name_input}
                            disabled={roster_full}
                        />
                        <button type="submit" class={styles::BUTTON_SECONDARY} disabled={roster_full}>
                            {"Adicionar"}
                        </button>
                    </div>
                </form>

                <ul class="mt-4 space-y-2">
                    { for players.iter().enumerate().map(|(index, player)| {
                        let players = players.clone();
                        let remove = Callback::from(move |_| {
                            let mut next = (*players).clone();
                            next.remove(index);
                            players.set(next);
                        });
                        html! {
                            <li key={player.clone()} class="flex items-center justify-between">
                                <span class={styles::TEXT_BODY}>{ player }</span>
                                <button type="button" class={styles::BUTTON_ICON} onclick={remove}>{"✕"}</button>
                            </li>
                        }
                    }) }
                </ul>

                if let Some(message) = (*error).clone() {
                    <p class={classes!(styles::TEXT_ERROR, "mt-4")}>{ message }</p>
                }

                <button
                    type="button"
                    class={classes!(styles::BUTTON_PRIMARY, "w-full", "mt-6")}
                    onclick={on_start}
                    disabled={props.busy}
                >
                    {"Iniciar jogo"}
                </button>
            </div>
        </div>
    }
}
