//! Typed, recoverable engine errors. None of these are fatal; the caller
//! surfaces them and state is left untouched.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleError {
    /// Input was not rock, paper or scissors. Rejected before any random
    /// draw or state change.
    #[error("'{0}' is not a valid battle choice")]
    InvalidChoice(String),
    /// Fatigue is at the cap; the character must recover before fighting.
    #[error("fatigue is maxed out; play a minigame to recover")]
    FatigueExhausted,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MinigameError {
    #[error("requires level {required}")]
    LevelTooLow { required: u32 },
    #[error("not enough gold (costs {cost})")]
    NotEnoughGold { cost: u32 },
}
