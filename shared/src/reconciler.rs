//! Derives everything the view needs from one snapshot and the local
//! player's identity. No side effects: callers decide what to do with the
//! directives.

use std::collections::BTreeMap;

use crate::constants::{ALPHABET, HANGMAN_PARTS};
use crate::shared_hangman_game::{GameMode, GameSnapshot, GameStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Setup,
    Game,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Unused,
    Hit,
    Miss,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterKey {
    pub letter: char,
    pub enabled: bool,
    pub state: KeyState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Winner { name: String, score: u32 },
    Draw { names: Vec<String>, score: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSummary {
    pub outcome: Outcome,
    pub game_finished: bool,
    /// Who took the round, as reported by the server.
    pub round_winner: Option<String>,
    pub has_next_round: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnInfo {
    WaitingForPlayers,
    WaitingForWord { creator: Option<String> },
    Guessing { guesser: Option<String> },
    RoundOver,
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreLine {
    pub name: String,
    pub score: u32,
    pub is_local: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessedLetter {
    pub letter: String,
    pub hit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiDirectives {
    pub screen: Screen,
    pub show_word_entry: bool,
    /// True only on the reconciliation that first observes a finished round or game.
    pub show_result: bool,
    pub show_share_hint: bool,
    pub letter_input_enabled: bool,
    pub keys: Vec<LetterKey>,
    pub word_mask: Vec<Option<char>>,
    pub guessed: Vec<GuessedLetter>,
    pub result: Option<ResultSummary>,
    pub turn: TurnInfo,
    pub hangman_stage: u32,
    pub scoreboard: Vec<ScoreLine>,
    pub round_label: String,
    pub attempts_label: String,
}

pub fn reconcile(
    snapshot: &GameSnapshot,
    local_player: Option<&str>,
    last_status: Option<GameStatus>,
) -> UiDirectives {
    let status = snapshot.game_status;
    let is_local = |role: &Option<String>| match (local_player, role) {
        (Some(me), Some(name)) => me == name,
        _ => false,
    };

    let letter_input_enabled = status == GameStatus::Playing && is_local(&snapshot.word_guesser);

    UiDirectives {
        screen: Screen::Game,
        show_word_entry: status == GameStatus::WaitingWord && is_local(&snapshot.word_creator),
        show_result: status.is_terminal() && last_status != Some(status),
        show_share_hint: snapshot.mode == GameMode::Pvp && status == GameStatus::WaitingPlayers,
        letter_input_enabled,
        keys: keys(snapshot, letter_input_enabled),
        word_mask: word_mask(snapshot),
        guessed: snapshot
            .guessed_letters
            .iter()
            .map(|l| GuessedLetter { letter: l.clone(), hit: snapshot.is_hit(l) })
            .collect(),
        result: result_summary(snapshot),
        turn: turn_info(snapshot),
        hangman_stage: snapshot.mistakes().min(HANGMAN_PARTS),
        scoreboard: scoreboard(snapshot, local_player),
        round_label: format!("Rodada {}/{}", snapshot.current_round, snapshot.max_rounds),
        attempts_label: format!("Tentativas: {}/{}", snapshot.attempts_left, snapshot.max_attempts),
    }
}

/// One slot per letter of the secret word, filled where the letter is known.
pub fn word_mask(snapshot: &GameSnapshot) -> Vec<Option<char>> {
    let len = snapshot.word_length.unwrap_or(0);
    let mut mask = vec![None; len];
    for (letter, positions) in &snapshot.correct_positions {
        let Some(ch) = letter.chars().next() else { continue };
        for &pos in positions {
            if let Some(slot) = mask.get_mut(pos) {
                *slot = Some(ch);
            }
        }
    }
    mask
}

pub fn mask_text(mask: &[Option<char>]) -> String {
    mask.iter()
        .map(|slot| slot.unwrap_or('_').to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn keys(snapshot: &GameSnapshot, input_enabled: bool) -> Vec<LetterKey> {
    ALPHABET
        .chars()
        .map(|letter| {
            let s = letter.to_string();
            let state = if !snapshot.is_guessed(&s) {
                KeyState::Unused
            } else if snapshot.is_hit(&s) {
                KeyState::Hit
            } else {
                KeyState::Miss
            };
            LetterKey { letter, enabled: input_enabled && state == KeyState::Unused, state }
        })
        .collect()
}

/// Winner or draw from the scores. The server's `game_winner` picks the first
/// player to reach the target and cannot express a tie, so it is not used.
pub fn leaderboard(scores: &BTreeMap<String, u32>, players: &[String]) -> Option<Outcome> {
    let top = *scores.values().max()?;
    let mut leaders: Vec<&String> = scores.iter().filter(|(_, s)| **s == top).map(|(n, _)| n).collect();
    // Join order first, names outside the roster (the CPU) after
    leaders.sort_by_key(|name| players.iter().position(|p| p == *name).unwrap_or(usize::MAX));

    if leaders.len() == 1 {
        return Some(Outcome::Winner { name: leaders[0].clone(), score: top });
    }
    Some(Outcome::Draw { names: leaders.into_iter().cloned().collect(), score: top })
}

fn result_summary(snapshot: &GameSnapshot) -> Option<ResultSummary> {
    if !snapshot.game_status.is_terminal() {
        return None;
    }
    let game_finished = snapshot.game_status == GameStatus::GameFinished;
    Some(ResultSummary {
        outcome: leaderboard(&snapshot.scores, &snapshot.players)?,
        game_finished,
        round_winner: snapshot.round_winner.clone(),
        has_next_round: !game_finished && snapshot.current_round < snapshot.max_rounds,
    })
}

fn turn_info(snapshot: &GameSnapshot) -> TurnInfo {
    match snapshot.game_status {
        GameStatus::WaitingPlayers => TurnInfo::WaitingForPlayers,
        GameStatus::WaitingWord => TurnInfo::WaitingForWord { creator: snapshot.word_creator.clone() },
        GameStatus::Playing => TurnInfo::Guessing { guesser: snapshot.word_guesser.clone() },
        GameStatus::RoundFinished => TurnInfo::RoundOver,
        GameStatus::GameFinished => TurnInfo::GameOver,
    }
}

fn scoreboard(snapshot: &GameSnapshot, local_player: Option<&str>) -> Vec<ScoreLine> {
    let line = |name: &String| ScoreLine {
        name: name.clone(),
        score: snapshot.scores.get(name).copied().unwrap_or(0),
        is_local: local_player == Some(name.as_str()),
    };
    let mut lines: Vec<ScoreLine> = snapshot.players.iter().map(line).collect();
    lines.extend(snapshot.scores.keys().filter(|n| !snapshot.has_player(n)).map(line));
    lines
}
