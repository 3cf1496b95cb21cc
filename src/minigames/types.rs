use serde::{Deserialize, Serialize};
use std::fmt;

/// After-school minigames. Playing one costs gold and recovers fatigue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MinigameKind {
    Capsule,
    Arcade,
    Pets,
    Phone,
    Gambling,
}

impl MinigameKind {
    pub const ALL: [MinigameKind; 5] = [
        MinigameKind::Capsule,
        MinigameKind::Arcade,
        MinigameKind::Pets,
        MinigameKind::Phone,
        MinigameKind::Gambling,
    ];

    /// String key used by the page when requesting a play.
    pub fn key(&self) -> &'static str {
        match self {
            MinigameKind::Capsule => "capsule",
            MinigameKind::Arcade => "arcade",
            MinigameKind::Pets => "pets",
            MinigameKind::Phone => "phone",
            MinigameKind::Gambling => "gambling",
        }
    }

    /// Static catalog entry for this minigame.
    pub fn info(&self) -> MinigameInfo {
        match self {
            MinigameKind::Capsule => MinigameInfo {
                name: "Capsule Toy Machine",
                required_level: 5,
                cost: 100,
                fatigue_recovery: 10,
            },
            MinigameKind::Arcade => MinigameInfo {
                name: "Crouch-Down Arcade",
                required_level: 10,
                cost: 200,
                fatigue_recovery: 15,
            },
            MinigameKind::Pets => MinigameInfo {
                name: "Chick & Quail Raising",
                required_level: 15,
                cost: 300,
                fatigue_recovery: 20,
            },
            MinigameKind::Phone => MinigameInfo {
                name: "Phone Under the Desk",
                required_level: 20,
                cost: 150,
                fatigue_recovery: 25,
            },
            MinigameKind::Gambling => MinigameInfo {
                name: "Stationery Shop Gambling",
                required_level: 25,
                cost: 500,
                fatigue_recovery: 30,
            },
        }
    }
}

impl fmt::Display for MinigameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().name)
    }
}

/// Catalog entry: what the game page shows before a play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinigameInfo {
    pub name: &'static str,
    pub required_level: u32,
    pub cost: u32,
    pub fatigue_recovery: u32,
}

/// Numeric rewards of a successful play. The engine consumes nothing else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinigameRewards {
    pub gold: u32,
    pub fatigue_recovery: u32,
}

/// Result of a successful play, mirroring the backend's play response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinigamePlay {
    pub kind: MinigameKind,
    pub rewards: MinigameRewards,
    pub new_gold: u32,
    pub new_fatigue: u32,
}

/// The full catalog in display order.
pub fn catalog() -> Vec<(MinigameKind, MinigameInfo)> {
    MinigameKind::ALL.iter().map(|k| (*k, k.info())).collect()
}
