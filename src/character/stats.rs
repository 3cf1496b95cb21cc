//! Player character stats.
//!
//! The engine mutates these through a handle; the character store
//! (`character::store`) is the source of truth.

use serde::{Deserialize, Serialize};

use crate::core::fatigue::Fatigue;

/// Character stats as exchanged with the character state provider.
///
/// Field names mirror the backend payload, so a stats object can be fed
/// straight from a `/api/character` style response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub level: u32,
    #[serde(rename = "exp")]
    pub experience: u64,
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub gold: u32,
    #[serde(default)]
    pub fatigue: Fatigue,
}

impl Default for PlayerStats {
    /// Fresh character defaults.
    fn default() -> Self {
        Self {
            level: 1,
            experience: 0,
            hp: 100,
            attack: 10,
            defense: 5,
            gold: 0,
            fatigue: Fatigue::default(),
        }
    }
}

impl PlayerStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Combat power: attack weighs double, defense once.
    pub fn power(&self) -> u32 {
        self.attack * 2 + self.defense
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats_match_new_character() {
        let stats = PlayerStats::new();
        assert_eq!(stats.level, 1);
        assert_eq!(stats.experience, 0);
        assert_eq!(stats.hp, 100);
        assert_eq!(stats.attack, 10);
        assert_eq!(stats.defense, 5);
        assert_eq!(stats.gold, 0);
        assert_eq!(stats.fatigue.value(), 0);
    }

    #[test]
    fn test_power_weighs_attack_double() {
        let stats = PlayerStats {
            attack: 20,
            defense: 5,
            ..PlayerStats::new()
        };
        assert_eq!(stats.power(), 45);
    }

    #[test]
    fn test_take_damage_floors_at_zero() {
        let mut stats = PlayerStats::new();
        stats.take_damage(30);
        assert_eq!(stats.hp, 70);
        stats.take_damage(1000);
        assert_eq!(stats.hp, 0);
        assert!(!stats.is_alive());
    }

    #[test]
    fn test_deserializes_backend_payload() {
        // The exact shape the game page receives from the backend.
        let json = r#"{"level":3,"exp":120,"hp":90,"attack":12,"defense":6,"gold":450,"fatigue":35}"#;
        let stats: PlayerStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.level, 3);
        assert_eq!(stats.experience, 120);
        assert_eq!(stats.fatigue.value(), 35);
    }

    #[test]
    fn test_missing_fatigue_defaults_to_zero() {
        // Older character payloads carry no fatigue field.
        let json = r#"{"level":1,"exp":0,"hp":100,"attack":10,"defense":5,"gold":0}"#;
        let stats: PlayerStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.fatigue.value(), 0);
    }

    #[test]
    fn test_serializes_exp_field_name() {
        let stats = PlayerStats::new();
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"exp\":0"));
        assert!(!json.contains("experience"));
    }
}
