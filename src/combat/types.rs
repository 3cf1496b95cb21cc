use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::constants::*;
use crate::error::BattleError;

/// Monster rarity tier. Drives base stats, experience reward and drop rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Grade {
    Normal,
    Rare,
    Epic,
    Legendary,
}

impl Grade {
    pub const ALL: [Grade; 4] = [Grade::Normal, Grade::Rare, Grade::Epic, Grade::Legendary];

    pub fn name(&self) -> &'static str {
        match self {
            Grade::Normal => "Normal",
            Grade::Rare => "Rare",
            Grade::Epic => "Epic",
            Grade::Legendary => "Legendary",
        }
    }

    /// Base (hp, attack) for a freshly spawned monster of this grade.
    pub fn base_stats(&self) -> (u32, u32) {
        match self {
            Grade::Normal => (50, 5),
            Grade::Rare => (100, 10),
            Grade::Epic => (200, 20),
            Grade::Legendary => (500, 50),
        }
    }

    /// Experience multiplier applied to the base kill reward.
    pub fn exp_multiplier(&self) -> f64 {
        match self {
            Grade::Normal => 1.0,
            Grade::Rare => 2.5,
            Grade::Epic => 6.0,
            Grade::Legendary => 15.0,
        }
    }

    /// Chance that a kill of this grade drops an item.
    pub fn drop_rate(&self) -> f64 {
        match self {
            Grade::Normal => 0.05,
            Grade::Rare => 0.15,
            Grade::Epic => 0.35,
            Grade::Legendary => 1.0,
        }
    }

    /// Rolls a grade for the player's level.
    ///
    /// One uniform draw against level-banded cumulative thresholds. Higher
    /// grades only enter the pool as the player levels up; below level 15
    /// every spawn is Normal (the draw is still consumed).
    pub fn for_player_level(player_level: u32, rng: &mut impl Rng) -> Grade {
        let roll = rng.gen::<f64>();

        if player_level < GRADE_BAND_RARE_LEVEL {
            Grade::Normal
        } else if player_level < GRADE_BAND_EPIC_LEVEL {
            if roll < 0.95 {
                Grade::Normal
            } else {
                Grade::Rare
            }
        } else if player_level < GRADE_BAND_LEGENDARY_LEVEL {
            if roll < 0.85 {
                Grade::Normal
            } else if roll < 0.98 {
                Grade::Rare
            } else {
                Grade::Epic
            }
        } else if roll < 0.75 {
            Grade::Normal
        } else if roll < 0.95 {
            Grade::Rare
        } else if roll < 0.99 {
            Grade::Epic
        } else {
            Grade::Legendary
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The single current monster. Created by `spawn_monster`, replaced
/// unconditionally on death or explicit respawn; no state carries over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    pub grade: Grade,
    pub hp: u32,
    pub attack: u32,
    #[serde(default)]
    pub defense: u32,
}

impl Monster {
    pub fn new(grade: Grade) -> Self {
        let (hp, attack) = grade.base_stats();
        Self {
            grade,
            hp,
            attack,
            defense: 0,
        }
    }

    pub fn power(&self) -> u32 {
        self.attack * 2 + self.defense
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }
}

/// Rolls a grade for the player's level and spawns a monster with that
/// grade's base stats.
pub fn spawn_monster(player_level: u32, rng: &mut impl Rng) -> Monster {
    Monster::new(Grade::for_player_level(player_level, rng))
}

/// One of the three battle choices. Matching choices force a draw; beyond
/// that the pair has no influence on who wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// Draws a choice uniformly; used for the computer's hand.
    pub fn random(rng: &mut impl Rng) -> Choice {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Choice {
    type Err = BattleError;

    /// Parses the button ids the page sends. Anything else is rejected
    /// before a battle can start.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rock" => Ok(Choice::Rock),
            "paper" => Ok(Choice::Paper),
            "scissors" => Ok(Choice::Scissors),
            other => Err(BattleError::InvalidChoice(other.to_string())),
        }
    }
}
