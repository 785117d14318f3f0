use yew::prelude::*;
use hangman_shared::reconciler::ScoreLine;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ScoreboardProps {
    pub lines: Vec<ScoreLine>,
}

#[function_component(Scoreboard)]
pub fn scoreboard(props: &ScoreboardProps) -> Html {
    html! {
        <div class={styles::CARD}>
            <h3 class={styles::TEXT_H3}>{"Placar"}</h3>
            <ul class="mt-2">
                { for props.lines.iter().map(|line| html! {
                    <li key={line.name.clone()} class={if line.is_local { styles::SCORE_ROW_LOCAL } else { styles::SCORE_ROW }}>
                        <span>{ line.name.clone() }</span>
                        <span>{ line.score }</span>
                    </li>
                }) }
            </ul>
        </div>
    }
}
