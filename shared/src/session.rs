//! Persisted `{game id, player name}` pair and the decisions made from it on
//! page load.

use serde::{Deserialize, Serialize};

use crate::constants::{INVITE_QUERY_PARAM, STORAGE_GAME_ID_KEY, STORAGE_PLAYER_NAME_KEY};
use crate::shared_hangman_game::GameSnapshot;

/// Persistent key/value storage (`localStorage` in the browser). Implementations
/// swallow failures of the medium: a failed write is a no-op and a failed read
/// is `None`.
pub trait StorageProvider {
    fn save(&self, key: &str, value: &str);
    fn load(&self, key: &str) -> Option<String>;
    fn remove(&self, key: &str);
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocalSession {
    pub game_id: Option<String>,
    pub player_name: Option<String>,
}

impl LocalSession {
    /// Whether the stored session points at `game_id`. Only then may a report
    /// that the game is missing clear it.
    pub fn is_for(&self, game_id: &str) -> bool {
        self.game_id.as_deref() == Some(game_id)
    }
}

pub struct SessionStore<S> {
    storage: S,
}

impl<S: StorageProvider> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn save(&self, game_id: &str, player_name: Option<&str>) {
        self.storage.save(STORAGE_GAME_ID_KEY, game_id);
        match player_name {
            Some(name) => self.storage.save(STORAGE_PLAYER_NAME_KEY, name),
            None => self.storage.remove(STORAGE_PLAYER_NAME_KEY),
        }
        log::debug!("session saved for game {}", game_id);
    }

    pub fn load(&self) -> LocalSession {
        LocalSession {
            game_id: non_blank(self.storage.load(STORAGE_GAME_ID_KEY)),
            player_name: non_blank(self.storage.load(STORAGE_PLAYER_NAME_KEY)),
        }
    }

    pub fn clear(&self) {
        self.storage.remove(STORAGE_GAME_ID_KEY);
        self.storage.remove(STORAGE_PLAYER_NAME_KEY);
        log::debug!("session cleared");
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// What to do when the page loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryPlan {
    /// Show the setup screen.
    Setup,
    /// Opened through an invite link for a game we are not known in.
    JoinInvite(String),
    /// Reattach to a stored game, as the stored player if any.
    Resume { game_id: String, player_name: Option<String> },
}

pub fn plan_entry(invite_game_id: Option<&str>, session: &LocalSession) -> EntryPlan {
    let invite = invite_game_id.map(str::trim).filter(|id| !id.is_empty());

    match (invite, &session.game_id) {
        (Some(invite), Some(stored)) if invite == stored && session.player_name.is_some() => {
            EntryPlan::Resume { game_id: stored.clone(), player_name: session.player_name.clone() }
        }
        (Some(invite), _) => EntryPlan::JoinInvite(invite.to_string()),
        (None, Some(stored)) => {
            EntryPlan::Resume { game_id: stored.clone(), player_name: session.player_name.clone() }
        }
        (None, None) => EntryPlan::Setup,
    }
}

/// Who the local user is within a given game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Player(String),
    /// Not in the roster; must be asked for a name before joining.
    Spectator,
}

impl Identity {
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Player(name) => Some(name),
            Self::Spectator => None,
        }
    }
}

/// Never auto-joins: a stored name that is not in the roster makes us a
/// spectator.
pub fn resume_identity(session: &LocalSession, snapshot: &GameSnapshot) -> Identity {
    match &session.player_name {
        Some(name) if snapshot.has_player(name) => Identity::Player(name.clone()),
        _ => Identity::Spectator,
    }
}

/// Shareable link that drops whoever opens it into the join flow.
pub fn invite_link(base: &str, game_id: &str) -> String {
    format!("{}/?{}={}", base.trim_end_matches('/'), INVITE_QUERY_PARAM, game_id)
}
