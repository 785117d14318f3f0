use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::constants::DEFAULT_MAX_ATTEMPTS;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    Pvp,
    Pvc,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pvp => "pvp",
            Self::Pvc => "pvc",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    WaitingPlayers,
    WaitingWord,
    Playing,
    RoundFinished,
    GameFinished,
}

impl GameStatus {
    /// A round or the whole game has ended and a result should be announced.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::RoundFinished | Self::GameFinished)
    }
}

/// Full game state as reported by the server after every game-affecting call.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GameSnapshot {
    pub game_id: String,
    #[serde(default)]
    pub mode: GameMode,
    #[serde(default)]
    pub players: Vec<String>,
    pub game_status: GameStatus,
    // The server sends "" instead of null for every optional name
    #[serde(default, deserialize_with = "blank_as_none")]
    pub word_creator: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub word_guesser: Option<String>,
    #[serde(default, deserialize_with = "zero_as_none")]
    pub word_length: Option<usize>,
    #[serde(default)]
    pub correct_positions: BTreeMap<String, Vec<usize>>,
    #[serde(default)]
    pub guessed_letters: Vec<String>,
    #[serde(default)]
    pub attempts_left: u32,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_round")]
    pub current_round: u32,
    #[serde(default = "default_round")]
    pub max_rounds: u32,
    #[serde(default)]
    pub scores: BTreeMap<String, u32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub round_winner: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub game_winner: Option<String>,
}

impl GameSnapshot {
    pub fn has_player(&self, name: &str) -> bool {
        self.players.iter().any(|p| p == name)
    }

    pub fn is_guessed(&self, letter: &str) -> bool {
        self.guessed_letters.iter().any(|l| l == letter)
    }

    pub fn is_hit(&self, letter: &str) -> bool {
        self.correct_positions.contains_key(letter)
    }

    pub fn mistakes(&self) -> u32 {
        self.max_attempts.saturating_sub(self.attempts_left)
    }
}

/// Partial result returned by the guess endpoint. The client follows it with
/// a state refresh to obtain the full snapshot.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GuessOutcome {
    pub letter: String,
    pub is_correct: bool,
    #[serde(default)]
    pub positions: Vec<usize>,
    pub attempts_left: u32,
    pub game_status: GameStatus,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub round_winner: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub revealed_word: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NewGameRequest {
    pub mode: GameMode,
    pub players: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct JoinGameRequest {
    pub player: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WordSubmit {
    pub word: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GuessLetterRequest {
    pub letter: String,
}

/// Body of a non-success response. The proxy uses `detail`; a few paths
/// only carry `message`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ErrorDetail {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorDetail {
    pub fn into_message(self) -> Option<String> {
        self.detail
            .or(self.message)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

fn zero_as_none<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<usize>::deserialize(deserializer)?;
    Ok(value.filter(|&n| n > 0))
}

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

fn default_round() -> u32 {
    1
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    pub(crate) fn snapshot(status: GameStatus) -> GameSnapshot {
        GameSnapshot {
            game_id: "ABCD1234".to_string(),
            mode: GameMode::Pvp,
            players: vec!["Ana".to_string(), "Bruno".to_string()],
            game_status: status,
            word_creator: Some("Ana".to_string()),
            word_guesser: Some("Bruno".to_string()),
            word_length: Some(5),
            correct_positions: BTreeMap::new(),
            guessed_letters: Vec::new(),
            attempts_left: 6,
            max_attempts: 6,
            current_round: 1,
            max_rounds: 3,
            scores: [("Ana".to_string(), 0), ("Bruno".to_string(), 0)].into_iter().collect(),
            round_winner: None,
            game_winner: None,
        }
    }

    #[test]
    fn test_decodes_server_placeholders_as_absent() {
        let body = json!({
            "game_id": "K3J9QW2Z",
            "mode": "pvp",
            "players": ["Ana"],
            "current_round": 1,
            "max_rounds": 3,
            "scores": {"Ana": 0},
            "word_creator": "",
            "word_guesser": "",
            "word_length": 0,
            "guessed_letters": [],
            "correct_positions": {},
            "attempts_left": 6,
            "max_attempts": 6,
            "game_status": "waiting_players",
            "round_winner": "",
            "game_winner": ""
        });
        let snap: GameSnapshot = serde_json::from_value(body).unwrap();
        assert_eq!(snap.game_status, GameStatus::WaitingPlayers);
        assert_eq!(snap.word_creator, None);
        assert_eq!(snap.word_guesser, None);
        assert_eq!(snap.word_length, None);
        assert_eq!(snap.round_winner, None);
        assert_eq!(snap.game_winner, None);
    }

    #[test]
    fn test_decodes_playing_snapshot() {
        let body = json!({
            "game_id": "K3J9QW2Z",
            "mode": "pvc",
            "players": ["Ana"],
            "game_status": "playing",
            "word_creator": "CPU",
            "word_guesser": "Ana",
            "word_length": 6,
            "correct_positions": {"A": [1, 3]},
            "guessed_letters": ["A", "E"],
            "attempts_left": 5,
            "max_attempts": 6,
            "current_round": 2,
            "max_rounds": 3,
            "scores": {"Ana": 1, "CPU": 0},
            "unexpected": true
        });
        let snap: GameSnapshot = serde_json::from_value(body).unwrap();
        assert_eq!(snap.mode, GameMode::Pvc);
        assert_eq!(snap.word_length, Some(6));
        assert_eq!(snap.correct_positions["A"], vec![1, 3]);
        assert!(snap.is_hit("A"));
        assert!(!snap.is_hit("E"));
        assert!(snap.is_guessed("E"));
        assert_eq!(snap.mistakes(), 1);
    }

    #[test]
    fn test_guess_outcome_with_null_winner() {
        let body = json!({
            "letter": "Z",
            "is_correct": false,
            "positions": [],
            "attempts_left": 4,
            "game_status": "playing",
            "round_winner": null,
            "revealed_word": null
        });
        let outcome: GuessOutcome = serde_json::from_value(body).unwrap();
        assert!(!outcome.is_correct);
        assert_eq!(outcome.round_winner, None);
    }

    #[test]
    fn test_error_detail_prefers_detail() {
        let err: ErrorDetail = serde_json::from_value(json!({"detail": "Jogo não encontrado", "message": "x"})).unwrap();
        assert_eq!(err.into_message().as_deref(), Some("Jogo não encontrado"));

        let err: ErrorDetail = serde_json::from_value(json!({"detail": "  "})).unwrap();
        assert_eq!(err.into_message(), None);
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(GameStatus::RoundFinished.is_terminal());
        assert!(GameStatus::GameFinished.is_terminal());
        assert!(!GameStatus::Playing.is_terminal());
        assert_eq!(serde_json::to_value(GameMode::Pvc).unwrap(), json!("pvc"));
    }
}
