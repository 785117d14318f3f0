pub mod use_game_session;

pub use use_game_session::*;
