use yew::prelude::*;

use crate::styles;

#[function_component(LoadingOverlay)]
pub fn loading_overlay() -> Html {
    html! {
        <div class="fixed bottom-4 right-4 z-[1200] flex items-center gap-2 rounded-lg bg-white/90 dark:bg-gray-800/90 px-3 py-2 shadow-lg">
            <svg class={styles::LOADING_SPINNER} xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24">
                <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
                <path class="opacity-75" fill="currentColor" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4z"></path>
            </svg>
            <span class={styles::TEXT_SMALL}>{"Carregando..."}</span>
        </div>
    }
}
