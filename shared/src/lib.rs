pub mod client;
pub mod constants;
pub mod error;
pub mod poller;
pub mod reconciler;
pub mod session;
pub mod shared_hangman_game;
pub mod state;
pub mod validation;
