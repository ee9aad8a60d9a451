use crate::game::{Backend, Game};
use anyhow::Result;
use common::parse_list;
use log::{debug, info};
use runner::{parse_string, Reader, Solver};
use thiserror::Error;

pub const FIRST_TURN: u32 = 2020;
pub const MAX_TURNS: u32 = 30_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Turn reported by part 1.
    pub first_turn: u32,
    /// Turn reported by part 2, and the size of the turn table.
    pub max_turns: u32,
    pub backend: Backend,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            first_turn: FIRST_TURN,
            max_turns: MAX_TURNS,
            backend: Backend::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("turns are counted from 1")]
    ZeroTurn,
    #[error("first turn {first_turn} is past the maximum turn {max_turns}")]
    FirstTurnPastMax { first_turn: u32, max_turns: u32 },
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Config {
            first_turn,
            max_turns,
            ..
        } = *self;

        if first_turn == 0 {
            Err(ConfigError::ZeroTurn)
        } else if first_turn > max_turns {
            Err(ConfigError::FirstTurnPastMax {
                first_turn,
                max_turns,
            })
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, Default)]
pub struct Answer {
    config: Config,
}

impl Answer {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl Solver for Answer {
    type Input = Vec<u32>;
    type State = Box<dyn Game>;
    type Output1 = u32;
    type Output2 = u32;

    fn parse_input<R: Reader>(&self, r: R) -> Result<Self::Input> {
        Ok(parse_list(&parse_string(r)?, ',')?)
    }

    fn prepare(&self, input: Self::Input) -> Result<Self::State> {
        self.config.validate()?;
        info!(
            "playing turns {} and {} with the {} backend",
            self.config.first_turn, self.config.max_turns, self.config.backend
        );
        debug!("starting numbers: {:?}", input);

        Ok(self.config.backend.start(&input, self.config.max_turns)?)
    }

    fn solve_first(&self, state: &mut Self::State) -> Result<Self::Output1> {
        Ok(state.play_until(self.config.first_turn)?)
    }

    fn solve_second(&self, state: &mut Self::State) -> Result<Self::Output2> {
        Ok(state.play_until(self.config.max_turns)?)
    }
}
