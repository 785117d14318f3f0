pub mod game;
pub mod home;
pub mod setup;
