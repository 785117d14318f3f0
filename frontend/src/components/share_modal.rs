use web_sys::HtmlInputElement;
use yew::prelude::*;

use hangman_shared::constants::QR_SERVICE_URL;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ShareModalProps {
    pub link: String,
    pub on_close: Callback<()>,
}

pub fn qr_code_url(link: &str) -> String {
    let encoded: String = js_sys::encode_uri_component(link).into();
    format!("{}{}", QR_SERVICE_URL, encoded)
}

#[function_component(ShareModal)]
pub fn share_modal(props: &ShareModalProps) -> Html {
    let on_close = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    // Select the whole link so it can be copied in one gesture
    let select_all = Callback::from(|e: FocusEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input.select();
    });

    html! {
        <div class={styles::MODAL_BACKDROP} onclick={on_close.clone()}>
            <div class={styles::MODAL_WRAPPER}>
                <div
                    class={classes!(styles::MODAL_PANEL, "text-center")}
                    onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                >
                    <h3 class={styles::TEXT_H3}>{"Convide outros jogadores"}</h3>
                    <p class={classes!(styles::TEXT_SMALL, "mt-1")}>
                        {"Compartilhe o link ou o QR code para que entrem no jogo."}
                    </p>
                    <input
                        type="text"
                        readonly={true}
                        class={classes!(styles::INPUT, "text-center")}
                        value={props.link.clone()}
                        onfocus={select_all}
                    />
                    <div class="flex justify-center mt-4">
                        <img src={qr_code_url(&props.link)} alt="QR Code" width="200" height="200" />
                    </div>
                    <div class={styles::MODAL_ACTIONS}>
                        <button type="button" class={styles::BUTTON_SECONDARY} onclick={on_close}>{"Fechar"}</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
