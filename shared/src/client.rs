use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::constants::NEW_GAME_ENDPOINT;
use crate::error::{ClientError, RawResponse};
use crate::shared_hangman_game::{
    GameMode, GameSnapshot, GuessLetterRequest, GuessOutcome, JoinGameRequest, NewGameRequest,
    WordSubmit,
};
use crate::validation::{normalize_letter, normalize_secret_word, validate_player_name, validate_roster};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

/// A request against the game server, relative to the proxy root.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::Get, path: path.into(), body: None }
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self { method: Method::Post, path: path.into(), body: None }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self { method: Method::Delete, path: path.into(), body: None }
    }

    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, ClientError> {
        let value = serde_json::to_value(body)
            .map_err(|e| ClientError::transport(format!("failed to encode request: {}", e)))?;
        self.body = Some(value);
        Ok(self)
    }
}

/// Sends requests to the game server. Implementations must map network
/// failures to `ClientError::Transport` and hand back every HTTP answer,
/// success or not, as a `RawResponse`.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ClientError>;
}

pub fn game_path(game_id: &str) -> String {
    format!("/game/{}", game_id)
}

pub struct GameClient<T> {
    transport: T,
}

impl<T: Transport> GameClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn call(&self, request: ApiRequest) -> Result<GameSnapshot, ClientError> {
        log::debug!("{:?} {}", request.method, request.path);
        self.transport.send(request).await?.decode()
    }

    pub async fn create_game(&self, mode: GameMode, players: &[String]) -> Result<GameSnapshot, ClientError> {
        let players = validate_roster(mode, players)?;
        let request = ApiRequest::post(NEW_GAME_ENDPOINT).json(&NewGameRequest { mode, players })?;
        let snapshot = self.call(request).await?;
        log::info!("created {} game {}", mode, snapshot.game_id);
        Ok(snapshot)
    }

    pub async fn join_game(&self, game_id: &str, player_name: &str) -> Result<GameSnapshot, ClientError> {
        let player = validate_player_name(player_name)?;
        let request = ApiRequest::post(format!("{}/join", game_path(game_id)))
            .json(&JoinGameRequest { player })?;
        self.call(request).await
    }

    pub async fn get_state(&self, game_id: &str) -> Result<GameSnapshot, ClientError> {
        self.call(ApiRequest::get(game_path(game_id))).await
    }

    pub async fn submit_word(&self, game_id: &str, word: &str) -> Result<GameSnapshot, ClientError> {
        let word = normalize_secret_word(word)?;
        let request = ApiRequest::post(format!("{}/submit-word", game_path(game_id)))
            .json(&WordSubmit { word })?;
        self.call(request).await
    }

    /// Sends the guess, then refreshes the state since the guess endpoint
    /// only answers with a partial outcome.
    pub async fn guess_letter(&self, game_id: &str, letter: &str) -> Result<GameSnapshot, ClientError> {
        let letter = normalize_letter(letter)?;
        let request = ApiRequest::post(format!("{}/guess", game_path(game_id)))
            .json(&GuessLetterRequest { letter })?;
        let outcome: GuessOutcome = self.transport.send(request).await?.decode()?;
        log::info!(
            "guess {} in {}: correct={} attempts_left={}",
            outcome.letter,
            game_id,
            outcome.is_correct,
            outcome.attempts_left
        );
        self.get_state(game_id).await
    }

    pub async fn next_round(&self, game_id: &str) -> Result<GameSnapshot, ClientError> {
        self.call(ApiRequest::post(format!("{}/next-round", game_path(game_id)))).await
    }

    pub async fn delete_game(&self, game_id: &str) -> Result<(), ClientError> {
        let response = self.transport.send(ApiRequest::delete(game_path(game_id))).await?;
        response.decode::<Value>()?;
        log::info!("deleted game {}", game_id);
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::shared_hangman_game::tests::snapshot;
    use crate::shared_hangman_game::GameStatus;
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Replays canned answers and records every request it sees.
    #[derive(Default)]
    pub(crate) struct FakeTransport {
        pub requests: RefCell<Vec<ApiRequest>>,
        pub answers: RefCell<VecDeque<Result<RawResponse, ClientError>>>,
    }

    impl FakeTransport {
        pub fn answer(self, status: u16, body: Value) -> Self {
            self.answers
                .borrow_mut()
                .push_back(Ok(RawResponse { status, body: body.to_string() }));
            self
        }

        pub fn fail(self, message: &str) -> Self {
            self.answers.borrow_mut().push_back(Err(ClientError::transport(message)));
            self
        }
    }

    #[async_trait(?Send)]
    impl Transport for FakeTransport {
        async fn send(&self, request: ApiRequest) -> Result<RawResponse, ClientError> {
            self.requests.borrow_mut().push(request);
            self.answers
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ClientError::transport("no answer queued")))
        }
    }

    fn snapshot_json(status: GameStatus) -> Value {
        serde_json::to_value(snapshot(status)).unwrap()
    }

    #[test]
    fn test_create_pvp_without_players_sends_nothing() {
        let client = GameClient::new(FakeTransport::default());
        let err = block_on(client.create_game(GameMode::Pvp, &[])).unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
        assert!(client.transport().requests.borrow().is_empty());
    }

    #[test]
    fn test_create_game_posts_trimmed_roster() {
        let transport = FakeTransport::default().answer(200, snapshot_json(GameStatus::WaitingWord));
        let client = GameClient::new(transport);
        let players = vec![" Ana ".to_string(), "Bruno".to_string()];
        let snap = block_on(client.create_game(GameMode::Pvp, &players)).unwrap();
        assert_eq!(snap.game_id, "ABCD1234");

        let requests = client.transport().requests.borrow();
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].path, "/game/new");
        assert_eq!(requests[0].body, Some(json!({"mode": "pvp", "players": ["Ana", "Bruno"]})));
    }

    #[test]
    fn test_submit_word_is_uppercased() {
        let transport = FakeTransport::default().answer(200, snapshot_json(GameStatus::Playing));
        let client = GameClient::new(transport);
        block_on(client.submit_word("ABCD1234", "maçã")).unwrap();
        let requests = client.transport().requests.borrow();
        assert_eq!(requests[0].path, "/game/ABCD1234/submit-word");
        assert_eq!(requests[0].body, Some(json!({"word": "MAÇÃ"})));
    }

    #[test]
    fn test_submit_short_word_is_rejected_locally() {
        let client = GameClient::new(FakeTransport::default());
        let err = block_on(client.submit_word("ABCD1234", "oi")).unwrap_err();
        assert_eq!(err, ClientError::Validation(crate::constants::WORD_LENGTH_ERROR.to_string()));
        assert!(client.transport().requests.borrow().is_empty());
    }

    #[test]
    fn test_guess_follows_up_with_state_refresh() {
        let transport = FakeTransport::default()
            .answer(200, json!({
                "letter": "A",
                "is_correct": true,
                "positions": [1],
                "attempts_left": 6,
                "game_status": "playing",
                "round_winner": null,
                "revealed_word": null
            }))
            .answer(200, snapshot_json(GameStatus::Playing));
        let client = GameClient::new(transport);
        let snap = block_on(client.guess_letter("ABCD1234", "a")).unwrap();
        assert_eq!(snap.game_status, GameStatus::Playing);

        let requests = client.transport().requests.borrow();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].path, "/game/ABCD1234/guess");
        assert_eq!(requests[0].body, Some(json!({"letter": "A"})));
        assert_eq!(requests[1].method, Method::Get);
        assert_eq!(requests[1].path, "/game/ABCD1234");
    }

    #[test]
    fn test_rejected_guess_skips_refresh() {
        let transport = FakeTransport::default()
            .answer(400, json!({"detail": "Letra já foi tentada"}));
        let client = GameClient::new(transport);
        let err = block_on(client.guess_letter("ABCD1234", "A")).unwrap_err();
        assert_eq!(err.to_string(), "Letra já foi tentada");
        assert_eq!(client.transport().requests.borrow().len(), 1);
    }

    #[test]
    fn test_transport_failure_is_distinguishable() {
        let client = GameClient::new(FakeTransport::default().fail("connection refused"));
        let err = block_on(client.get_state("ABCD1234")).unwrap_err();
        assert!(err.is_transport());
    }

    #[test]
    fn test_join_and_next_round_paths() {
        let transport = FakeTransport::default()
            .answer(200, snapshot_json(GameStatus::WaitingWord))
            .answer(200, snapshot_json(GameStatus::WaitingWord));
        let client = GameClient::new(transport);
        block_on(client.join_game("ABCD1234", " Carla ")).unwrap();
        block_on(client.next_round("ABCD1234")).unwrap();

        let requests = client.transport().requests.borrow();
        assert_eq!(requests[0].path, "/game/ABCD1234/join");
        assert_eq!(requests[0].body, Some(json!({"player": "Carla"})));
        assert_eq!(requests[1].path, "/game/ABCD1234/next-round");
        assert_eq!(requests[1].body, None);
    }

    #[test]
    fn test_delete_game() {
        let transport = FakeTransport::default().answer(200, json!({"message": "Jogo deletado com sucesso"}));
        let client = GameClient::new(transport);
        block_on(client.delete_game("ABCD1234")).unwrap();
        assert_eq!(client.transport().requests.borrow()[0].method, Method::Delete);
    }
}
