#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

pub mod answer;
pub mod game;

pub use answer::{Answer, Config, ConfigError, FIRST_TURN, MAX_TURNS};
pub use game::{
    recital, Backend, BackendParseError, FlatGame, Game, GameError, Recital,
    SparseGame,
};
