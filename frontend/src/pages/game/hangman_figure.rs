use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HangmanFigureProps {
    /// Number of body parts to draw, 0 to 6.
    pub stage: u32,
}

#[function_component(HangmanFigure)]
pub fn hangman_figure(props: &HangmanFigureProps) -> Html {
    let part = |index: u32, shape: Html| if props.stage > index { shape } else { html! {} };

    html! {
        <svg viewBox="0 0 120 140" class="w-40 h-48 stroke-gray-800 dark:stroke-gray-200" fill="none" stroke-width="4">
            // Gallows
            <line x1="10" y1="135" x2="70" y2="135" />
            <line x1="30" y1="135" x2="30" y2="10" />
            <line x1="30" y1="10" x2="85" y2="10" />
            <line x1="85" y1="10" x2="85" y2="25" />
            { part(0, html! { <circle cx="85" cy="37" r="12" /> }) }
            { part(1, html! { <line x1="85" y1="49" x2="85" y2="90" /> }) }
            { part(2, html! { <line x1="85" y1="60" x2="68" y2="75" /> }) }
            { part(3, html! { <line x1="85" y1="60" x2="102" y2="75" /> }) }
            { part(4, html! { <line x1="85" y1="90" x2="70" y2="115" /> }) }
            { part(5, html! { <line x1="85" y1="90" x2="100" y2="115" /> }) }
        </svg>
    }
}
