//! Notebook RPG - Battle & Progression Engine
//!
//! Turn-based combat and progression for a browser RPG: a character fights
//! spawned monsters through a rock-paper-scissors-gated, power-weighted
//! coin flip, gains experience and levels, accrues fatigue that caps
//! further fighting, and spends gold on minigames to recover. Rendering,
//! HTTP and storage stay outside; the engine works against injected
//! collaborators (character store, minigame host, RNG) and reports what
//! happened as events.

pub mod character;
pub mod combat;
pub mod core;
pub mod error;
pub mod minigames;

pub use character::{CharacterSnapshot, CharacterStore, InMemoryStore, PlayerStats};
pub use combat::{
    resolve_battle, spawn_monster, win_chance, BattleEvent, BattleOutcome, BattleRound, Choice,
    Grade, Monster,
};
pub use crate::core::constants::MAX_LEVEL;
pub use crate::core::{
    apply_victory, monster_exp, required_exp, BattleLogEntry, DefaultHooks, Fatigue, GameSession,
    ProgressionHooks, VictorySummary,
};
pub use error::{BattleError, MinigameError};
pub use minigames::{
    catalog, LocalMinigames, MinigameInfo, MinigameKind, MinigamePlay, MinigameProvider,
    MinigameRewards,
};
