use yew::prelude::*;
use hangman_shared::reconciler::{mask_text, GuessedLetter};

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct WordBoardProps {
    pub mask: Vec<Option<char>>,
    pub guessed: Vec<GuessedLetter>,
}

#[function_component(WordBoard)]
pub fn word_board(props: &WordBoardProps) -> Html {
    html! {
        <div class="flex flex-col items-center gap-4">
            <div class="flex flex-wrap justify-center gap-2" aria-label={mask_text(&props.mask)}>
                { for props.mask.iter().map(|slot| html! {
                    <span class={styles::WORD_SLOT}>{ slot.map(String::from).unwrap_or_default() }</span>
                }) }
            </div>
            if !props.guessed.is_empty() {
                <div class="flex flex-wrap justify-center gap-1">
                    <span class={styles::TEXT_SMALL}>{"Letras tentadas:"}</span>
                    { for props.guessed.iter().map(|g| html! {
                        <span class={if g.hit { styles::GUESSED_HIT } else { styles::GUESSED_MISS }}>
                            { g.letter.clone() }
                        </span>
                    }) }
                </div>
            }
        </div>
    }
}
