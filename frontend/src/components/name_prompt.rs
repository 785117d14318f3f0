use web_sys::HtmlInputElement;
use yew::prelude::*;

use hangman_shared::validation::validate_player_name;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct NamePromptProps {
    pub game_id: String,
    pub busy: bool,
    pub on_join: Callback<String>,
    pub on_cancel: Callback<()>,
}

/// Asks an invited visitor for a name before joining.
#[function_component(NamePrompt)]
pub fn name_prompt(props: &NamePromptProps) -> Html {
    let name = use_state(String::new);
    let error = use_state(|| None::<String>);

    let oninput = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let error = error.clone();
        let on_join = props.on_join.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match validate_player_name(&name) {
                Ok(valid) => {
                    error.set(None);
                    on_join.emit(valid);
                }
                Err(err) => error.set(err.message.map(|m| m.to_string())),
            }
        })
    };

    let on_cancel = {
        let cb = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class={styles::MODAL_BACKDROP}>
            <div class={styles::MODAL_WRAPPER}>
                <div class={styles::MODAL_PANEL}>
                    <h3 class={styles::TEXT_H3}>{"Entrar no jogo"}</h3>
                    <p class={classes!(styles::TEXT_SMALL, "mt-1")}>{ format!("Jogo {}", props.game_id) }</p>
                    <form class={styles::FORM} {onsubmit}>
                        <label class={styles::TEXT_LABEL}>{"Digite seu nome para entrar no jogo"}</label>
                        <input
                            type="text"
                            class={styles::INPUT}
                            value={(*name).clone()}
                            {oninput}
                            disabled={props.busy}
                        />
                        if let Some(message) = (*error).clone() {
                            <p class={styles::TEXT_ERROR}>{ message }</p>
                        }
                        <div class={styles::MODAL_ACTIONS}>
                            <button type="submit" class={styles::BUTTON_PRIMARY} disabled={props.busy}>{"Entrar"}</button>
                            <button type="button" class={styles::BUTTON_SECONDARY} onclick={on_cancel}>{"Cancelar"}</button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
