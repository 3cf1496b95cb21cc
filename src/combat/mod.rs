//! Battle resolution: monster generation, the choice gate and round logic.

pub mod logic;
pub mod types;

pub use logic::{resolve_battle, win_chance, BattleEvent, BattleOutcome, BattleRound};
pub use types::{spawn_monster, Choice, Grade, Monster};
