use web_sys::HtmlInputElement;
use yew::prelude::*;

use hangman_shared::validation::normalize_secret_word;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct WordModalProps {
    pub creator: String,
    pub busy: bool,
    pub on_submit: Callback<String>,
}

#[function_component(WordModal)]
pub fn word_modal(props: &WordModalProps) -> Html {
    let word = use_state(String::new);
    let error = use_state(|| None::<String>);

    let oninput = {
        let word = word.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            word.set(input.value());
        })
    };

    let onsubmit = {
        let word = word.clone();
        let error = error.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match normalize_secret_word(&word) {
                Ok(normalized) => {
                    error.set(None);
                    word.set(String::new());
                    on_submit.emit(normalized);
                }
                Err(err) => error.set(err.message.map(|m| m.to_string())),
            }
        })
    };

    html! {
        <div class={styles::MODAL_BACKDROP}>
            <div class={styles::MODAL_WRAPPER}>
                <div class={styles::MODAL_PANEL}>
                    <h3 class={styles::TEXT_H3}>{ format!("{}, é sua vez de criar a palavra!", props.creator) }</h3>
                    <form class={styles::FORM} {onsubmit}>
                        <input
                            type="password"
                            autocomplete="off"
                            class={styles::INPUT}
                            placeholder="Palavra secreta"
                            value={(*word).clone()}
                            {oninput}
                            disabled={props.busy}
                        />
                        if let Some(message) = (*error).clone() {
                            <p class={styles::TEXT_ERROR}>{ message }</p>
                        }
                        <div class={styles::MODAL_ACTIONS}>
                            <button type="submit" class={styles::BUTTON_PRIMARY} disabled={props.busy}>{"Enviar palavra"}</button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
