//! After-school minigames: the gold sink that recovers fatigue.

pub mod logic;
pub mod types;

pub use logic::{play, LocalMinigames, MinigameProvider};
pub use types::{catalog, MinigameInfo, MinigameKind, MinigamePlay, MinigameRewards};
