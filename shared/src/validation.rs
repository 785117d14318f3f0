use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use validator::ValidationError;

use crate::constants::*;
use crate::shared_hangman_game::GameMode;

// Uppercase Latin letters plus the accented range the server accepts.
static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-ZÀ-ÖØ-ÞŸ]+$").expect("word pattern"));

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

pub fn validate_player_name(name: &str) -> Result<String, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(invalid("empty_player_name", EMPTY_NAME_ERROR));
    }
    Ok(name.to_string())
}

/// Checks the roster for a new game and returns the trimmed names.
pub fn validate_roster(mode: GameMode, players: &[String]) -> Result<Vec<String>, ValidationError> {
    let mut roster: Vec<String> = Vec::with_capacity(players.len());
    for player in players {
        let name = validate_player_name(player)?;
        if roster.contains(&name) {
            return Err(invalid("duplicate_player", DUPLICATE_PLAYER_ERROR));
        }
        roster.push(name);
    }

    match mode {
        GameMode::Pvc if roster.len() != PVC_PLAYERS => {
            Err(invalid("pvc_player_count", PVC_PLAYERS_ERROR))
        }
        GameMode::Pvp if roster.len() < MIN_PVP_PLAYERS => {
            Err(invalid("pvp_too_few_players", PVP_MIN_PLAYERS_ERROR))
        }
        GameMode::Pvp if roster.len() > MAX_PVP_PLAYERS => {
            Err(invalid("pvp_too_many_players", PVP_MAX_PLAYERS_ERROR))
        }
        _ => Ok(roster),
    }
}

/// Upper-cases the secret word and checks it is at least three letters.
pub fn normalize_secret_word(word: &str) -> Result<String, ValidationError> {
    let word = word.trim().to_uppercase();
    if word.is_empty() {
        return Err(invalid("empty_word", EMPTY_WORD_ERROR));
    }
    if !WORD_PATTERN.is_match(&word) {
        return Err(invalid("word_not_letters", WORD_LETTERS_ERROR));
    }
    if word.chars().count() < MIN_WORD_LENGTH {
        return Err(invalid("word_too_short", WORD_LENGTH_ERROR));
    }
    Ok(word)
}

pub fn normalize_letter(letter: &str) -> Result<String, ValidationError> {
    let letter = letter.trim().to_uppercase();
    if letter.chars().count() != 1 || !WORD_PATTERN.is_match(&letter) {
        return Err(invalid("single_letter", SINGLE_LETTER_ERROR));
    }
    Ok(letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_pvp_roster_bounds() {
        assert_eq!(validate_roster(GameMode::Pvp, &[]).unwrap_err().code, "pvp_too_few_players");
        assert_eq!(validate_roster(GameMode::Pvp, &names(&[" Ana "])).unwrap(), names(&["Ana"]));
        let six = names(&["a", "b", "c", "d", "e", "f"]);
        assert_eq!(validate_roster(GameMode::Pvp, &six).unwrap_err().code, "pvp_too_many_players");
    }

    #[test]
    fn test_pvc_needs_exactly_one() {
        assert!(validate_roster(GameMode::Pvc, &names(&["Ana"])).is_ok());
        assert_eq!(validate_roster(GameMode::Pvc, &[]).unwrap_err().code, "pvc_player_count");
        assert_eq!(
            validate_roster(GameMode::Pvc, &names(&["Ana", "Bia"])).unwrap_err().code,
            "pvc_player_count"
        );
    }

    #[test]
    fn test_roster_rejects_blank_and_duplicates() {
        assert_eq!(validate_roster(GameMode::Pvp, &names(&["  "])).unwrap_err().code, "empty_player_name");
        assert_eq!(
            validate_roster(GameMode::Pvp, &names(&["Ana", "Ana "])).unwrap_err().code,
            "duplicate_player"
        );
    }

    #[test]
    fn test_secret_word_normalization() {
        assert_eq!(normalize_secret_word(" banana ").unwrap(), "BANANA");
        assert_eq!(normalize_secret_word("coração").unwrap(), "CORAÇÃO");
        assert_eq!(normalize_secret_word("").unwrap_err().code, "empty_word");
        assert_eq!(normalize_secret_word("ab").unwrap_err().code, "word_too_short");
        assert_eq!(normalize_secret_word("ab1").unwrap_err().code, "word_not_letters");
        assert_eq!(normalize_secret_word("dois gatos").unwrap_err().code, "word_not_letters");
    }

    #[test]
    fn test_accented_word_length_counts_chars() {
        // Three letters, more than three bytes
        assert_eq!(normalize_secret_word("pão").unwrap(), "PÃO");
    }

    #[test]
    fn test_letter_normalization() {
        assert_eq!(normalize_letter("a").unwrap(), "A");
        assert_eq!(normalize_letter("é").unwrap(), "É");
        assert!(normalize_letter("ab").is_err());
        assert!(normalize_letter("1").is_err());
        assert!(normalize_letter("").is_err());
    }

    #[test]
    fn test_error_carries_message() {
        let err = normalize_secret_word("").unwrap_err();
        assert_eq!(err.message.as_deref(), Some(EMPTY_WORD_ERROR));
    }
}
