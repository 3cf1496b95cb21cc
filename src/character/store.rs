//! Character state boundary.
//!
//! The backend owns the character; the engine only reads and writes stats
//! through this trait and never persists anything itself.

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::character::stats::PlayerStats;

/// Source of truth for character stats.
pub trait CharacterStore {
    fn stats(&self) -> PlayerStats;
    fn set_stats(&mut self, stats: PlayerStats);
}

/// Wire shape of a stored character: the stats payload plus the record
/// fields the backend keeps alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSnapshot {
    pub id: String,
    #[serde(flatten)]
    pub stats: PlayerStats,
    pub last_fatigue_reset: i64,
}

/// In-memory character store, standing in for the remote backend.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    id: String,
    stats: PlayerStats,
    last_fatigue_reset: i64,
}

impl InMemoryStore {
    /// Creates a fresh character with default stats, stamped `now`.
    pub fn new(now: i64) -> Self {
        Self::with_stats(PlayerStats::new(), now)
    }

    pub fn with_stats(stats: PlayerStats, now: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            stats,
            last_fatigue_reset: now,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn last_fatigue_reset(&self) -> i64 {
        self.last_fatigue_reset
    }

    /// Zeroes fatigue once per UTC day. Returns true if a reset happened.
    pub fn apply_daily_fatigue_reset(&mut self, now: i64) -> bool {
        let last_day = DateTime::from_timestamp(self.last_fatigue_reset, 0).map(|t| t.date_naive());
        let today = DateTime::from_timestamp(now, 0).map(|t| t.date_naive());
        match (last_day, today) {
            (Some(last), Some(today)) if today > last => {
                self.stats.fatigue.reset();
                self.last_fatigue_reset = now;
                true
            }
            _ => false,
        }
    }

    /// Serializes the character to its wire shape.
    pub fn snapshot(&self) -> serde_json::Result<String> {
        serde_json::to_string(&CharacterSnapshot {
            id: self.id.clone(),
            stats: self.stats.clone(),
            last_fatigue_reset: self.last_fatigue_reset,
        })
    }

    /// Restores a character from a snapshot produced by [`snapshot`].
    ///
    /// [`snapshot`]: InMemoryStore::snapshot
    pub fn restore(json: &str) -> serde_json::Result<Self> {
        let snapshot: CharacterSnapshot = serde_json::from_str(json)?;
        Ok(Self {
            id: snapshot.id,
            stats: snapshot.stats,
            last_fatigue_reset: snapshot.last_fatigue_reset,
        })
    }
}

impl CharacterStore for InMemoryStore {
    fn stats(&self) -> PlayerStats {
        self.stats.clone()
    }

    fn set_stats(&mut self, stats: PlayerStats) {
        self.stats = stats;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fatigue::Fatigue;

    const DAY: i64 = 24 * 60 * 60;

    #[test]
    fn test_new_store_has_fresh_character() {
        let store = InMemoryStore::new(1_700_000_000);
        assert!(!store.id().is_empty());
        assert_eq!(store.stats(), PlayerStats::new());
        assert_eq!(store.last_fatigue_reset(), 1_700_000_000);
    }

    #[test]
    fn test_set_stats_round_trips() {
        let mut store = InMemoryStore::new(0);
        let mut stats = store.stats();
        stats.gold = 777;
        stats.fatigue.increase(40);
        store.set_stats(stats.clone());
        assert_eq!(store.stats(), stats);
    }

    #[test]
    fn test_snapshot_uses_wire_field_names() {
        let store = InMemoryStore::new(0);
        let json = store.snapshot().unwrap();
        assert!(json.contains("\"exp\":0"));
        assert!(json.contains("\"fatigue\":0"));
        assert!(json.contains("\"last_fatigue_reset\":0"));
    }

    #[test]
    fn test_snapshot_restore_round_trip() {
        let mut store = InMemoryStore::new(123);
        let mut stats = store.stats();
        stats.level = 12;
        stats.experience = 345;
        stats.fatigue = Fatigue::new(60);
        store.set_stats(stats);

        let restored = InMemoryStore::restore(&store.snapshot().unwrap()).unwrap();
        assert_eq!(restored.id(), store.id());
        assert_eq!(restored.stats(), store.stats());
        assert_eq!(restored.last_fatigue_reset(), 123);
    }

    #[test]
    fn test_daily_reset_same_day_is_noop() {
        let mut store = InMemoryStore::new(1_700_000_000);
        let mut stats = store.stats();
        stats.fatigue = Fatigue::new(90);
        store.set_stats(stats);

        assert!(!store.apply_daily_fatigue_reset(1_700_000_000 + 60));
        assert_eq!(store.stats().fatigue.value(), 90);
    }

    #[test]
    fn test_daily_reset_next_day_zeroes_fatigue() {
        let mut store = InMemoryStore::new(1_700_000_000);
        let mut stats = store.stats();
        stats.fatigue = Fatigue::new(100);
        store.set_stats(stats);

        let later = 1_700_000_000 + 2 * DAY;
        assert!(store.apply_daily_fatigue_reset(later));
        assert_eq!(store.stats().fatigue.value(), 0);
        assert_eq!(store.last_fatigue_reset(), later);

        // A second call the same day does nothing.
        assert!(!store.apply_daily_fatigue_reset(later + 60));
    }
}
