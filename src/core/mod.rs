//! Core engine: tuning constants, progression math, fatigue and the
//! session aggregate.

pub mod constants;
pub mod fatigue;
pub mod progression;
pub mod session;

pub use fatigue::Fatigue;
pub use progression::{
    apply_victory, monster_exp, required_exp, DefaultHooks, ProgressionHooks, VictorySummary,
};
pub use session::{BattleLogEntry, GameSession};
