use std::convert::TryFrom;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("no starting numbers")]
    EmptySeed,
    #[error("{len} starting numbers do not fit in {max_turns} turns")]
    SeedTooLong { len: usize, max_turns: u32 },
    #[error("starting number {value} is not below the {max_turns} turn limit")]
    SeedOutOfRange { value: u32, max_turns: u32 },
    #[error("turn {target} is past the {max_turns} turn limit")]
    TurnOutOfRange { target: u32, max_turns: u32 },
    #[error("turn {target} was already played, the game is at turn {current}")]
    TurnInPast { target: u32, current: u32 },
}

/// Checks that `seed` can be played within `max_turns` turns and that every
/// starting number can index a table of `max_turns` entries. Returns the
/// number of turns the seed takes.
pub(crate) fn check_seed(seed: &[u32], max_turns: u32) -> Result<u32, GameError> {
    if seed.is_empty() {
        return Err(GameError::EmptySeed);
    }

    let len = u32::try_from(seed.len())
        .ok()
        .filter(|&len| len <= max_turns)
        .ok_or(GameError::SeedTooLong {
            len: seed.len(),
            max_turns,
        })?;

    match seed.iter().find(|&&value| value >= max_turns) {
        Some(&value) => Err(GameError::SeedOutOfRange { value, max_turns }),
        None => Ok(len),
    }
}

/// Checks that a game at `current` can move on to `target`.
pub(crate) fn check_target(
    current: u32,
    target: u32,
    max_turns: u32,
) -> Result<(), GameError> {
    if target > max_turns {
        Err(GameError::TurnOutOfRange { target, max_turns })
    } else if target < current {
        Err(GameError::TurnInPast { target, current })
    } else {
        Ok(())
    }
}
