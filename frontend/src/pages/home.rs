use yew::prelude::*;

use hangman_shared::reconciler::Screen;
use hangman_shared::session::invite_link;

use crate::components::{ErrorBanner, LoadingOverlay, NamePrompt, ResultModal, ShareModal, WordModal};
use crate::config::get_origin;
use crate::hooks::use_game_session;
use crate::pages::game::GameScreen;
use crate::pages::setup::SetupScreen;
use crate::styles;

#[function_component(Home)]
pub fn home() -> Html {
    let (store, actions) = use_game_session();
    let state = &store.0;

    let body = match (state.screen, &state.snapshot, &state.directives) {
        (Screen::Game, Some(snapshot), Some(directives)) => {
            let creator = snapshot.word_creator.clone().unwrap_or_default();
            let link = invite_link(&get_origin(), &snapshot.game_id);

            html! {
                <>
                    <GameScreen
                        snapshot={snapshot.clone()}
                        directives={directives.clone()}
                        player_name={state.player_name.clone()}
                        busy={state.busy}
                        result_open={state.result_open}
                        on_guess={actions.guess.clone()}
                        on_show_result={actions.reopen_result.clone()}
                        on_next_round={actions.next_round.clone()}
                        on_share={actions.open_share.clone()}
                        on_exit={actions.exit.clone()}
                        on_abandon={actions.abandon.clone()}
                    />
                    if directives.show_word_entry {
                        <WordModal
                            creator={creator}
                            busy={state.busy}
                            on_submit={actions.submit_word.clone()}
                        />
                    }
                    if state.result_open {
                        if let Some(result) = directives.result.clone() {
                            <ResultModal
                                result={result}
                                busy={state.busy}
                                on_next_round={actions.next_round.clone()}
                                on_back_to_menu={actions.exit.clone()}
                                on_close={actions.dismiss_result.clone()}
                            />
                        }
                    }
                    if state.share_open {
                        <ShareModal link={link} on_close={actions.close_share.clone()} />
                    }
                </>
            }
        }
        _ => html! {
            <>
                <SetupScreen busy={state.busy} on_create={actions.create.clone()} />
                if let Some(game_id) = state.join_prompt.clone() {
                    <NamePrompt
                        game_id={game_id}
                        busy={state.busy}
                        on_join={actions.join.clone()}
                        on_cancel={actions.cancel_join.clone()}
                    />
                }
            </>
        },
    };

    html! {
        <div class={styles::CONTAINER}>
            <div class={styles::CONTAINER_LG}>
                <h1 class={classes!(styles::TEXT_H1, "text-center", "mb-6")}>{"Jogo da Forca"}</h1>
                if let Some(error) = state.error.clone() {
                    <ErrorBanner message={error} on_dismiss={actions.dismiss_error.clone()} />
                }
                { body }
            </div>
            if state.busy {
                <LoadingOverlay />
            }
        </div>
    }
}
