use yew::prelude::*;
use hangman_shared::reconciler::{Outcome, ResultSummary};

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ResultModalProps {
    pub result: ResultSummary,
    pub busy: bool,
    pub on_next_round: Callback<()>,
    pub on_back_to_menu: Callback<()>,
    pub on_close: Callback<()>,
}

fn headline(result: &ResultSummary) -> String {
    match (&result.outcome, &result.round_winner) {
        (Outcome::Winner { name, .. }, _) if result.game_finished => name.clone(),
        (Outcome::Draw { .. }, _) if result.game_finished => "Empate!".to_string(),
        (_, Some(winner)) => winner.clone(),
        _ => "Ninguém acertou".to_string(),
    }
}

fn message(result: &ResultSummary) -> String {
    match &result.outcome {
        Outcome::Winner { name, score } if result.game_finished => {
            format!("{} venceu o jogo com {} ponto(s)!", name, score)
        }
        Outcome::Draw { names, score } if result.game_finished => {
            format!("Empate entre {} com {} ponto(s)!", names.join(", "), score)
        }
        _ => match &result.round_winner {
            Some(winner) => format!("{} venceu esta rodada!", winner),
            None => "A rodada terminou sem vencedor.".to_string(),
        },
    }
}

#[function_component(ResultModal)]
pub fn result_modal(props: &ResultModalProps) -> Html {
    let result = &props.result;
    let emit = |cb: &Callback<()>| {
        let cb = cb.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class={styles::MODAL_BACKDROP} onclick={emit(&props.on_close)}>
            <div class={styles::MODAL_WRAPPER}>
                <div
                    class={classes!(styles::MODAL_PANEL, "text-center")}
                    onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                >
                    <p class={styles::TEXT_SMALL}>
                        { if result.game_finished { "Fim de jogo" } else { "Fim da rodada" } }
                    </p>
                    <h3 class={classes!(styles::TEXT_H2, "mt-2")}>{ headline(result) }</h3>
                    <p class={classes!(styles::TEXT_BODY, "mt-2")}>{ message(result) }</p>
                    <div class={styles::MODAL_ACTIONS}>
                        if result.has_next_round {
                            <button
                                type="button"
                                class={styles::BUTTON_PRIMARY}
                                onclick={emit(&props.on_next_round)}
                                disabled={props.busy}
                            >
                                {"Próxima rodada"}
                            </button>
                        }
                        if result.game_finished {
                            <button type="button" class={styles::BUTTON_PRIMARY} onclick={emit(&props.on_back_to_menu)}>
                                {"Voltar ao menu"}
                            </button>
                        }
                        <button type="button" class={styles::BUTTON_SECONDARY} onclick={emit(&props.on_close)}>
                            {"Fechar"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
