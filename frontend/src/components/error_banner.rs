use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
    pub on_dismiss: Callback<()>,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let on_dismiss = {
        let cb = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class={classes!(styles::ALERT_ERROR, "mb-4", "flex", "items-start", "justify-between")} role="alert">
            <span>{ props.message.clone() }</span>
            <button type="button" class={styles::BUTTON_ICON} onclick={on_dismiss}>{"✕"}</button>
        </div>
    }
}
