mod hangman_figure;
mod keyboard;
mod scoreboard;
mod word_board;

use yew::prelude::*;

use hangman_shared::reconciler::{TurnInfo, UiDirectives};
use hangman_shared::shared_hangman_game::{GameMode, GameSnapshot, GameStatus};

use crate::styles;
use hangman_figure::HangmanFigure;
use keyboard::Keyboard;
use scoreboard::Scoreboard;
use word_board::WordBoard;

#[derive(Properties, PartialEq)]
pub struct GameScreenProps {
    pub snapshot: GameSnapshot,
    pub directives: UiDirectives,
    pub player_name: Option<String>,
    pub busy: bool,
    pub result_open: bool,
    pub on_guess: Callback<char>,
    pub on_show_result: Callback<()>,
    pub on_next_round: Callback<()>,
    pub on_share: Callback<()>,
    pub on_exit: Callback<()>,
    pub on_abandon: Callback<()>,
}

fn turn_text(turn: &TurnInfo, me: Option<&str>) -> String {
    let who = |name: &Option<String>| name.clone().unwrap_or_else(|| "?".to_string());
    match turn {
        TurnInfo::WaitingForPlayers => "Aguardando outros jogadores entrarem via link...".to_string(),
        TurnInfo::WaitingForWord { creator } if creator.as_deref() == me && me.is_some() => {
            "Sua vez de criar a palavra!".to_string()
        }
        TurnInfo::WaitingForWord { creator } => format!("Aguardando {} criar palavra", who(creator)),
        TurnInfo::Guessing { guesser } if guesser.as_deref() == me && me.is_some() => {
            "Sua vez de adivinhar!".to_string()
        }
        TurnInfo::Guessing { guesser } => format!("{} está adivinhando", who(guesser)),
        TurnInfo::RoundOver => "Rodada encerrada".to_string(),
        TurnInfo::GameOver => "Fim de jogo".to_string(),
    }
}

#[function_component(GameScreen)]
pub fn game_screen(props: &GameScreenProps) -> Html {
    let ui = &props.directives;
    let snapshot = &props.snapshot;

    let on_share = {
        let cb = props.on_share.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_exit = {
        let cb = props.on_exit.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_show_result = {
        let cb = props.on_show_result.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_next_round = {
        let cb = props.on_next_round.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_abandon = {
        let cb = props.on_abandon.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    // A dismissed result stays reachable until the next round starts
    let pending_result = ui.result.as_ref().filter(|_| !props.result_open);
    let can_share = snapshot.mode == GameMode::Pvp && snapshot.game_status != GameStatus::GameFinished;

    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
            <div class="md:col-span-2 space-y-6">
                <div class={styles::CARD}>
                    <div class="flex flex-wrap items-center justify-between gap-2">
                        <span class={styles::TEXT_H3}>{ ui.round_label.clone() }</span>
                        <span class={styles::TEXT_SMALL}>{ format!("Jogo {}", snapshot.game_id) }</span>
                        <span class={styles::TEXT_BODY}>{ ui.attempts_label.clone() }</span>
                    </div>
                    <p class={classes!(styles::TEXT_BODY, "mt-2", "text-center")}>
                        { turn_text(&ui.turn, props.player_name.as_deref()) }
                    </p>
                    <div class="flex justify-center mt-4">
                        <HangmanFigure stage={ui.hangman_stage} />
                    </div>
                    <WordBoard mask={ui.word_mask.clone()} guessed={ui.guessed.clone()} />
                    if let Some(result) = pending_result {
                        <div class="flex justify-center gap-3 mt-4">
                            <button type="button" class={styles::BUTTON_SECONDARY} onclick={on_show_result}>
                                {"Ver resultado"}
                            </button>
                            if result.has_next_round {
                                <button
                                    type="button"
                                    class={styles::BUTTON_PRIMARY}
                                    onclick={on_next_round}
                                    disabled={props.busy}
                                >
                                    {"Próxima rodada"}
                                </button>
                            }
                        </div>
                    }
                    <Keyboard keys={ui.keys.clone()} busy={props.busy} on_key_press={props.on_guess.clone()} />
                </div>
            </div>
            <div class="space-y-4">
                <Scoreboard lines={ui.scoreboard.clone()} />
                if let Some(name) = props.player_name.clone() {
                    <p class={styles::TEXT_SMALL}>{ format!("Você: {}", name) }</p>
                }
                <div class="flex flex-col gap-2">
                    if can_share {
                        <button type="button" class={styles::BUTTON_SECONDARY} onclick={on_share}>
                            {"Convidar jogadores"}
                        </button>
                    }
                    <button type="button" class={styles::BUTTON_SECONDARY} onclick={on_exit}>
                        {"Voltar ao menu"}
                    </button>
                    <button type="button" class={styles::BUTTON_DANGER} onclick={on_abandon} disabled={props.busy}>
                        {"Encerrar jogo"}
                    </button>
                </div>
            </div>
        </div>
    }
}
