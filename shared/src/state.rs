use crate::constants::GAME_GONE_ERROR;
use crate::error::ClientError;
use crate::reconciler::{reconcile, Screen, UiDirectives};
use crate::shared_hangman_game::{GameSnapshot, GameStatus};

/// Everything the client knows, replaced wholesale on every event.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientState {
    pub screen: Screen,
    pub game_id: Option<String>,
    pub player_name: Option<String>,
    pub snapshot: Option<GameSnapshot>,
    pub directives: Option<UiDirectives>,
    pub last_status: Option<GameStatus>,
    pub result_open: bool,
    pub share_open: bool,
    /// Game id waiting for the user to pick a name before joining.
    pub join_prompt: Option<String>,
    /// An explicit action is in flight; its controls stay disabled.
    pub busy: bool,
    pub error: Option<String>,
}

impl Default for ClientState {
    fn default() -> Self {
        Self {
            screen: Screen::Setup,
            game_id: None,
            player_name: None,
            snapshot: None,
            directives: None,
            last_status: None,
            result_open: false,
            share_open: false,
            join_prompt: None,
            busy: false,
            error: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// A create, join or resume succeeded.
    Entered { snapshot: GameSnapshot, player_name: Option<String> },
    /// Ask for a name before joining this game.
    JoinPrompt { game_id: String },
    JoinCancelled,
    /// Background refresh; leaves an in-flight action's guard alone.
    Snapshot { game_id: String, snapshot: GameSnapshot },
    ActionStarted,
    /// The in-flight action finished with this snapshot.
    ActionSucceeded { game_id: String, snapshot: GameSnapshot },
    ActionFailed(String),
    PollFailed(String),
    SessionInvalidated(String),
    ResultDismissed,
    /// Bring a dismissed round or game result back.
    ResultReopened,
    ShareOpened,
    ShareClosed,
    ErrorDismissed,
    Exited,
}

impl ClientState {
    pub fn apply(&self, event: ClientEvent) -> ClientState {
        let mut next = self.clone();
        match event {
            ClientEvent::Entered { snapshot, player_name } => {
                next = ClientState {
                    screen: Screen::Game,
                    game_id: Some(snapshot.game_id.clone()),
                    player_name,
                    ..ClientState::default()
                };
                next = next.absorb(snapshot);
                next.share_open = next.directives.as_ref().map_or(false, |d| d.show_share_hint);
            }
            ClientEvent::JoinPrompt { game_id } => {
                next.busy = false;
                next.join_prompt = Some(game_id);
            }
            ClientEvent::JoinCancelled => {
                next.join_prompt = None;
            }
            ClientEvent::Snapshot { game_id, snapshot } => {
                if !self.is_active_game(&game_id) {
                    log::debug!("discarding stale snapshot for game {}", game_id);
                    return next;
                }
                next = next.absorb(snapshot);
            }
            ClientEvent::ActionSucceeded { game_id, snapshot } => {
                if !self.is_active_game(&game_id) {
                    log::debug!("discarding stale action result for game {}", game_id);
                    return next;
                }
                next = next.absorb(snapshot);
                next.busy = false;
            }
            ClientEvent::ActionStarted => {
                next.busy = true;
                next.error = None;
            }
            ClientEvent::ActionFailed(message) => {
                next.busy = false;
                next.error = Some(message);
            }
            ClientEvent::PollFailed(message) => {
                log::warn!("poll failed: {}", message);
            }
            ClientEvent::SessionInvalidated(message) => {
                next = ClientState { error: Some(message), ..ClientState::default() };
            }
            ClientEvent::ResultDismissed => next.result_open = false,
            ClientEvent::ResultReopened => {
                next.result_open = self.directives.as_ref().map_or(false, |d| d.result.is_some());
            }
            ClientEvent::ShareOpened => next.share_open = true,
            ClientEvent::ShareClosed => next.share_open = false,
            ClientEvent::ErrorDismissed => next.error = None,
            ClientEvent::Exited => next = ClientState::default(),
        }
        next
    }

    fn absorb(mut self, snapshot: GameSnapshot) -> Self {
        let directives = reconcile(&snapshot, self.player_name.as_deref(), self.last_status);
        if directives.show_result {
            self.result_open = true;
        } else if !snapshot.game_status.is_terminal() {
            self.result_open = false;
        }
        self.last_status = Some(snapshot.game_status);
        self.directives = Some(directives);
        self.snapshot = Some(snapshot);
        self
    }

    fn is_active_game(&self, game_id: &str) -> bool {
        self.screen == Screen::Game && self.game_id.as_deref() == Some(game_id)
    }
}

/// Maps the outcome of a background poll. Transport failures and most server
/// rejections are only logged; a missing game ends the session.
pub fn poll_event(game_id: &str, result: Result<GameSnapshot, ClientError>) -> Option<ClientEvent> {
    match result {
        Ok(snapshot) => Some(ClientEvent::Snapshot { game_id: game_id.to_string(), snapshot }),
        Err(err) if err.is_not_found() => {
            log::info!("game {} is gone: {}", game_id, err);
            Some(ClientEvent::SessionInvalidated(GAME_GONE_ERROR.to_string()))
        }
        Err(err) => {
            log::warn!("poll for game {} failed: {}", game_id, err);
            None
        }
    }
}

/// Maps the outcome of an explicit user action; every failure is shown.
pub fn action_event(game_id: &str, result: Result<GameSnapshot, ClientError>) -> ClientEvent {
    match result {
        Ok(snapshot) => ClientEvent::ActionSucceeded { game_id: game_id.to_string(), snapshot },
        Err(err) => {
            log::error!("action on game {} failed: {}", game_id, err);
            ClientEvent::ActionFailed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared_hangman_game::tests::snapshot;

    fn entered(status: GameStatus, me: &str) -> ClientState {
        ClientState::default().apply(ClientEvent::Entered {
            snapshot: snapshot(status),
            player_name: Some(me.to_string()),
        })
    }

    fn tick(state: &ClientState, status: GameStatus) -> ClientState {
        state.apply(ClientEvent::Snapshot { game_id: "ABCD1234".into(), snapshot: snapshot(status) })
    }

    #[test]
    fn test_entering_switches_to_game() {
        let state = entered(GameStatus::WaitingWord, "Ana");
        assert_eq!(state.screen, Screen::Game);
        assert_eq!(state.game_id.as_deref(), Some("ABCD1234"));
        assert!(state.directives.as_ref().unwrap().show_word_entry);
        assert!(!state.result_open);
        assert!(!state.share_open);
    }

    #[test]
    fn test_waiting_for_players_opens_share() {
        let state = entered(GameStatus::WaitingPlayers, "Ana");
        assert!(state.share_open);
        let state = state.apply(ClientEvent::ShareClosed);
        assert!(!state.share_open);
    }

    #[test]
    fn test_result_opens_once_per_transition() {
        let state = entered(GameStatus::Playing, "Bruno");
        let state = tick(&state, GameStatus::RoundFinished);
        assert!(state.result_open);

        let state = state.apply(ClientEvent::ResultDismissed);
        let state = tick(&state, GameStatus::RoundFinished);
        let state = tick(&state, GameStatus::RoundFinished);
        assert!(!state.result_open);

        let state = tick(&state, GameStatus::WaitingWord);
        let state = tick(&state, GameStatus::Playing);
        let state = tick(&state, GameStatus::GameFinished);
        assert!(state.result_open);
    }

    #[test]
    fn test_result_closes_when_next_round_starts() {
        let state = entered(GameStatus::Playing, "Bruno");
        let state = tick(&state, GameStatus::RoundFinished);
        assert!(state.result_open);
        let state = tick(&state, GameStatus::WaitingWord);
        assert!(!state.result_open);
    }

    #[test]
    fn test_stale_snapshot_is_discarded() {
        let state = entered(GameStatus::Playing, "Bruno");
        let mut other = snapshot(GameStatus::RoundFinished);
        other.game_id = "OTHER999".into();
        let after = state.apply(ClientEvent::Snapshot { game_id: "OTHER999".into(), snapshot: other });
        assert_eq!(after, state);

        let setup = ClientState::default();
        assert_eq!(tick(&setup, GameStatus::Playing), setup);

        let exited = state.apply(ClientEvent::Exited);
        assert_eq!(tick(&exited, GameStatus::Playing).screen, Screen::Setup);
    }

    #[test]
    fn test_busy_cleared_by_action_result_or_failure() {
        let state = entered(GameStatus::Playing, "Bruno").apply(ClientEvent::ActionStarted);
        assert!(state.busy);
        let done = state.apply(action_event("ABCD1234", Ok(snapshot(GameStatus::Playing))));
        assert!(!done.busy);

        let failed = state.apply(ClientEvent::ActionFailed("Letra já foi tentada".into()));
        assert!(!failed.busy);
        assert_eq!(failed.error.as_deref(), Some("Letra já foi tentada"));
        assert_eq!(failed.screen, Screen::Game);
        assert!(failed.apply(ClientEvent::ErrorDismissed).error.is_none());
    }

    #[test]
    fn test_poll_tick_keeps_action_guard() {
        let state = entered(GameStatus::Playing, "Bruno").apply(ClientEvent::ActionStarted);
        let event = poll_event("ABCD1234", Ok(snapshot(GameStatus::Playing))).unwrap();
        let state = state.apply(event);
        assert!(state.busy);

        let state = tick(&state, GameStatus::RoundFinished);
        assert!(state.busy);
        assert!(state.result_open);
    }

    #[test]
    fn test_stale_action_result_is_discarded() {
        let state = entered(GameStatus::Playing, "Bruno").apply(ClientEvent::Exited);
        let after = state.apply(action_event("ABCD1234", Ok(snapshot(GameStatus::Playing))));
        assert_eq!(after, state);
    }

    #[test]
    fn test_dismissed_result_can_be_reopened() {
        let state = entered(GameStatus::Playing, "Bruno");
        let mut state = tick(&state, GameStatus::RoundFinished).apply(ClientEvent::ResultDismissed);
        for _ in 0..5 {
            state = tick(&state, GameStatus::RoundFinished);
        }
        assert!(!state.result_open);

        let state = state.apply(ClientEvent::ResultReopened);
        assert!(state.result_open);
        assert!(state.directives.as_ref().unwrap().result.as_ref().unwrap().has_next_round);
    }

    #[test]
    fn test_reopen_without_result_is_ignored() {
        let state = entered(GameStatus::Playing, "Bruno").apply(ClientEvent::ResultReopened);
        assert!(!state.result_open);
    }

    #[test]
    fn test_poll_failure_keeps_state() {
        let state = entered(GameStatus::Playing, "Bruno");
        assert_eq!(state.apply(ClientEvent::PollFailed("timeout".into())), state);
        assert_eq!(poll_event("ABCD1234", Err(ClientError::transport("offline"))), None);
        assert_eq!(
            poll_event("ABCD1234", Err(ClientError::Remote { status: 400, message: "x".into() })),
            None
        );
    }

    #[test]
    fn test_missing_game_invalidates_session() {
        let err = ClientError::Remote { status: 404, message: "Jogo não encontrado".into() };
        let event = poll_event("ABCD1234", Err(err)).unwrap();
        let state = entered(GameStatus::Playing, "Bruno").apply(event);
        assert_eq!(state.screen, Screen::Setup);
        assert_eq!(state.game_id, None);
        assert_eq!(state.error.as_deref(), Some(GAME_GONE_ERROR));
    }

    #[test]
    fn test_action_event_maps_errors() {
        let event = action_event("ABCD1234", Err(ClientError::transport("offline")));
        assert_eq!(event, ClientEvent::ActionFailed("offline".into()));
        let event = action_event("ABCD1234", Ok(snapshot(GameStatus::Playing)));
        assert!(matches!(event, ClientEvent::ActionSucceeded { .. }));
    }

    #[test]
    fn test_join_prompt_lifecycle() {
        let state = ClientState::default().apply(ClientEvent::JoinPrompt { game_id: "ABCD1234".into() });
        assert_eq!(state.join_prompt.as_deref(), Some("ABCD1234"));
        assert_eq!(state.screen, Screen::Setup);
        assert_eq!(state.apply(ClientEvent::JoinCancelled).join_prompt, None);
    }
}
