use std::future::Future;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use hangman_shared::error::ClientError;
use hangman_shared::reconciler::Screen;
use hangman_shared::session::{plan_entry, resume_identity, EntryPlan, Identity, LocalSession};
use hangman_shared::shared_hangman_game::{GameMode, GameSnapshot};
use hangman_shared::state::{action_event, poll_event, ClientEvent, ClientState};
use hangman_shared::constants::GAME_GONE_ERROR;

use crate::api::{game_client, ApiClient};
use crate::scheduler::{GamePoller, IntervalScheduler};
use crate::storage::session_store;
use crate::Route;

/// `?game=ID` on the home route.
#[derive(Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct InviteQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game: Option<String>,
}

/// Reducer wrapper so the shared state machine can drive `use_reducer`.
#[derive(Default, PartialEq)]
pub struct GameStore(pub ClientState);

impl Reducible for GameStore {
    type Action = ClientEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(GameStore(self.0.apply(action)))
    }
}

#[derive(Clone, PartialEq)]
pub struct GameActions {
    pub create: Callback<(GameMode, Vec<String>)>,
    pub join: Callback<String>,
    pub cancel_join: Callback<()>,
    pub submit_word: Callback<String>,
    pub guess: Callback<char>,
    pub next_round: Callback<()>,
    pub exit: Callback<()>,
    pub abandon: Callback<()>,
    pub open_share: Callback<()>,
    pub close_share: Callback<()>,
    pub dismiss_result: Callback<()>,
    pub reopen_result: Callback<()>,
    pub dismiss_error: Callback<()>,
}

type Dispatcher = UseReducerDispatcher<GameStore>;

/// Runs an explicit action against the current game and feeds the outcome
/// back into the reducer.
fn run_action<F, Fut>(dispatcher: Dispatcher, game_id: String, request: F)
where
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<GameSnapshot, ClientError>> + 'static,
{
    dispatcher.dispatch(ClientEvent::ActionStarted);
    spawn_local(async move {
        let result = request().await;
        dispatcher.dispatch(action_event(&game_id, result));
    });
}

fn enter(dispatcher: &Dispatcher, snapshot: GameSnapshot, player_name: Option<String>) {
    session_store().save(&snapshot.game_id, player_name.as_deref());
    dispatcher.dispatch(ClientEvent::Entered { snapshot, player_name });
}

/// Forgets the stored session, unless it belongs to some other game.
fn clear_session_for(game_id: &str) {
    let store = session_store();
    if store.load().is_for(game_id) {
        store.clear();
    }
}

/// Attaches to a game found on page load, through an invite link or the
/// stored session.
async fn reattach(client: Rc<ApiClient>, dispatcher: Dispatcher, game_id: String, session: LocalSession) {
    match client.get_state(&game_id).await {
        Ok(snapshot) => match resume_identity(&session, &snapshot) {
            Identity::Player(name) => {
                log::info!("resuming game {} as {}", game_id, name);
                enter(&dispatcher, snapshot, Some(name));
            }
            Identity::Spectator => dispatcher.dispatch(ClientEvent::JoinPrompt { game_id }),
        },
        Err(err) if err.is_not_found() => {
            log::info!("game {} is gone: {}", game_id, err);
            clear_session_for(&game_id);
            dispatcher.dispatch(ClientEvent::SessionInvalidated(GAME_GONE_ERROR.to_string()));
        }
        Err(err) => dispatcher.dispatch(ClientEvent::ActionFailed(err.to_string())),
    }
}

#[hook]
pub fn use_game_session() -> (UseReducerHandle<GameStore>, GameActions) {
    let store = use_reducer(GameStore::default);
    let client = use_memo((), |_| game_client());
    let poller = use_memo((), |_| GamePoller::new(IntervalScheduler));
    // Set once the url carries a game id we put there
    let url_has_game = use_mut_ref(|| false);
    let navigator = use_navigator();
    let location = use_location();

    // Page load: invite link, stored session or the setup screen
    {
        let dispatcher = store.dispatcher();
        let client = client.clone();
        let invite = location
            .and_then(|l| l.query::<InviteQuery>().ok())
            .and_then(|q| q.game);
        use_effect_with((), move |_| {
            let session = session_store().load();
            let plan = plan_entry(invite.as_deref(), &session);
            log::info!("entry plan: {:?}", plan);

            match plan {
                EntryPlan::Setup => {}
                EntryPlan::JoinInvite(game_id) => {
                    dispatcher.dispatch(ClientEvent::ActionStarted);
                    spawn_local(reattach(client, dispatcher, game_id, LocalSession::default()));
                }
                EntryPlan::Resume { game_id, player_name } => {
                    dispatcher.dispatch(ClientEvent::ActionStarted);
                    let session = LocalSession { game_id: Some(game_id.clone()), player_name };
                    spawn_local(reattach(client, dispatcher, game_id, session));
                }
            }
            || ()
        });
    }

    // Poll while a game is on screen; the URL follows the current game
    {
        let dispatcher = store.dispatcher();
        let client = client.clone();
        let poller = poller.clone();
        let url_has_game = url_has_game.clone();
        let deps = (store.0.screen, store.0.game_id.clone(), store.0.join_prompt.clone());
        use_effect_with(deps, move |(screen, game_id, join_prompt)| {
            let replace_query = |game_id: &str| {
                if let Some(navigator) = &navigator {
                    let query = InviteQuery { game: Some(game_id.to_string()) };
                    if let Err(e) = navigator.replace_with_query(&Route::Home, &query) {
                        log::warn!("failed to update url: {:?}", e);
                    }
                }
                *url_has_game.borrow_mut() = true;
            };

            match (screen, game_id) {
                (Screen::Game, Some(game_id)) => {
                    let id = game_id.clone();
                    poller.start(game_id, move || {
                        let client = client.clone();
                        let dispatcher = dispatcher.clone();
                        let id = id.clone();
                        spawn_local(async move {
                            let result = client.get_state(&id).await;
                            if let Some(event) = poll_event(&id, result) {
                                if matches!(event, ClientEvent::SessionInvalidated(_)) {
                                    clear_session_for(&id);
                                }
                                dispatcher.dispatch(event);
                            }
                        });
                    });

                    replace_query(game_id);
                }
                _ => {
                    poller.stop();
                    if let Some(invited) = join_prompt {
                        replace_query(invited);
                    } else if url_has_game.replace(false) {
                        // Only strip what we wrote; a pending invite stays put
                        if let Some(navigator) = &navigator {
                            navigator.replace(&Route::Home);
                        }
                    }
                }
            }

            move || poller.stop()
        });
    }

    let dispatcher = store.dispatcher();
    let game_id = store.0.game_id.clone().unwrap_or_default();
    let busy = store.0.busy;

    let create = {
        let dispatcher = dispatcher.clone();
        let client = client.clone();
        Callback::from(move |(mode, players): (GameMode, Vec<String>)| {
            if busy {
                return;
            }
            let dispatcher = dispatcher.clone();
            let client = client.clone();
            dispatcher.dispatch(ClientEvent::ActionStarted);
            spawn_local(async move {
                match client.create_game(mode, &players).await {
                    Ok(snapshot) => {
                        // The device plays as the first listed name
                        let me = players.first().map(|p| p.trim().to_string());
                        enter(&dispatcher, snapshot, me);
                    }
                    Err(err) => dispatcher.dispatch(ClientEvent::ActionFailed(err.to_string())),
                }
            });
        })
    };

    let join = {
        let dispatcher = dispatcher.clone();
        let client = client.clone();
        let prompt = store.0.join_prompt.clone();
        Callback::from(move |name: String| {
            let Some(game_id) = prompt.clone() else { return };
            if busy {
                return;
            }
            let dispatcher = dispatcher.clone();
            let client = client.clone();
            dispatcher.dispatch(ClientEvent::ActionStarted);
            spawn_local(async move {
                match client.join_game(&game_id, &name).await {
                    Ok(snapshot) => enter(&dispatcher, snapshot, Some(name.trim().to_string())),
                    Err(err) => dispatcher.dispatch(ClientEvent::ActionFailed(err.to_string())),
                }
            });
        })
    };

    let submit_word = {
        let dispatcher = dispatcher.clone();
        let client = client.clone();
        let game_id = game_id.clone();
        Callback::from(move |word: String| {
            if busy {
                return;
            }
            let client = client.clone();
            let id = game_id.clone();
            run_action(dispatcher.clone(), game_id.clone(), move || async move {
                client.submit_word(&id, &word).await
            });
        })
    };

    let guess = {
        let dispatcher = dispatcher.clone();
        let client = client.clone();
        let game_id = game_id.clone();
        let enabled = store.0.directives.as_ref().map_or(false, |d| d.letter_input_enabled);
        Callback::from(move |letter: char| {
            if busy || !enabled {
                return;
            }
            let client = client.clone();
            let id = game_id.clone();
            run_action(dispatcher.clone(), game_id.clone(), move || async move {
                client.guess_letter(&id, &letter.to_string()).await
            });
        })
    };

    let next_round = {
        let dispatcher = dispatcher.clone();
        let client = client.clone();
        let game_id = game_id.clone();
        Callback::from(move |_: ()| {
            if busy {
                return;
            }
            dispatcher.dispatch(ClientEvent::ResultDismissed);
            let client = client.clone();
            let id = game_id.clone();
            run_action(dispatcher.clone(), game_id.clone(), move || async move {
                client.next_round(&id).await
            });
        })
    };

    let exit = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: ()| {
            session_store().clear();
            dispatcher.dispatch(ClientEvent::Exited);
        })
    };

    let abandon = {
        let dispatcher = dispatcher.clone();
        let client = client.clone();
        let game_id = game_id.clone();
        Callback::from(move |_: ()| {
            if busy {
                return;
            }
            let dispatcher = dispatcher.clone();
            let client = client.clone();
            let game_id = game_id.clone();
            dispatcher.dispatch(ClientEvent::ActionStarted);
            spawn_local(async move {
                match client.delete_game(&game_id).await {
                    Ok(()) => {
                        session_store().clear();
                        dispatcher.dispatch(ClientEvent::Exited);
                    }
                    Err(err) => dispatcher.dispatch(ClientEvent::ActionFailed(err.to_string())),
                }
            });
        })
    };

    let emit = |event: ClientEvent| {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: ()| dispatcher.dispatch(event.clone()))
    };

    let actions = GameActions {
        create,
        join,
        cancel_join: emit(ClientEvent::JoinCancelled),
        submit_word,
        guess,
        next_round,
        exit,
        abandon,
        open_share: emit(ClientEvent::ShareOpened),
        close_share: emit(ClientEvent::ShareClosed),
        dismiss_result: emit(ClientEvent::ResultDismissed),
        reopen_result: emit(ClientEvent::ResultReopened),
        dismiss_error: emit(ClientEvent::ErrorDismissed),
    };

    (store, actions)
}
