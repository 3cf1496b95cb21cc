//! The game session aggregate.
//!
//! Owns the single current monster and the battle log, and moves character
//! stats through the store on every operation, so there is no hidden
//! global state: each engine call reads stats, mutates a local copy and
//! writes it back only on success.

use std::collections::{HashMap, VecDeque};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::character::stats::PlayerStats;
use crate::character::store::CharacterStore;
use crate::combat::logic::{resolve_battle, BattleEvent, BattleRound};
use crate::combat::types::{spawn_monster, Choice, Monster};
use crate::core::constants::BATTLE_LOG_CAPACITY;
use crate::core::progression::{DefaultHooks, ProgressionHooks};
use crate::error::{BattleError, MinigameError};
use crate::minigames::{self, MinigameKind, MinigamePlay};

/// One line of the battle log shown next to the arena.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleLogEntry {
    pub message: String,
    pub is_crit: bool,
}

/// A running game for one character.
pub struct GameSession<S: CharacterStore> {
    store: S,
    current_monster: Monster,
    hooks: Box<dyn ProgressionHooks>,
    battle_log: VecDeque<BattleLogEntry>,
    minigames_played: HashMap<MinigameKind, u32>,
}

impl<S: CharacterStore> GameSession<S> {
    /// Opens a session with the default hooks and spawns the first monster
    /// for the stored character's level.
    pub fn new(store: S, rng: &mut impl Rng) -> Self {
        Self::with_hooks(store, Box::new(DefaultHooks), rng)
    }

    pub fn with_hooks(store: S, hooks: Box<dyn ProgressionHooks>, rng: &mut impl Rng) -> Self {
        let current_monster = spawn_monster(store.stats().level, rng);
        Self {
            store,
            current_monster,
            hooks,
            battle_log: VecDeque::with_capacity(BATTLE_LOG_CAPACITY),
            minigames_played: HashMap::new(),
        }
    }

    /// Fights one round against the current monster.
    ///
    /// Stats are loaded from the store, mutated and written back; on error
    /// the store is left as it was.
    pub fn battle(&mut self, choice: Choice, rng: &mut impl Rng) -> Result<BattleRound, BattleError> {
        let mut stats = self.store.stats();
        let round = resolve_battle(
            &mut stats,
            &mut self.current_monster,
            choice,
            self.hooks.as_mut(),
            rng,
        )?;
        self.store.set_stats(stats);
        self.log_round(&round);
        Ok(round)
    }

    /// Plays a minigame, spending gold and recovering fatigue.
    pub fn play_minigame(
        &mut self,
        kind: MinigameKind,
        rng: &mut impl Rng,
    ) -> Result<MinigamePlay, MinigameError> {
        let mut stats = self.store.stats();
        let play = minigames::play(&mut stats, kind, rng)?;
        self.store.set_stats(stats);

        *self.minigames_played.entry(kind).or_insert(0) += 1;
        self.add_log_entry(
            format!(
                "{}: +{} gold, -{} fatigue",
                kind.info().name,
                play.rewards.gold,
                play.rewards.fatigue_recovery
            ),
            false,
        );
        Ok(play)
    }

    /// Discards the current monster and spawns a fresh one.
    pub fn respawn_monster(&mut self, rng: &mut impl Rng) {
        self.current_monster = spawn_monster(self.store.stats().level, rng);
    }

    pub fn current_monster(&self) -> &Monster {
        &self.current_monster
    }

    pub fn stats(&self) -> PlayerStats {
        self.store.stats()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn battle_log(&self) -> &VecDeque<BattleLogEntry> {
        &self.battle_log
    }

    pub fn times_played(&self, kind: MinigameKind) -> u32 {
        self.minigames_played.get(&kind).copied().unwrap_or(0)
    }

    fn add_log_entry(&mut self, message: String, is_crit: bool) {
        if self.battle_log.len() >= BATTLE_LOG_CAPACITY {
            self.battle_log.pop_front();
        }
        self.battle_log.push_back(BattleLogEntry { message, is_crit });
    }

    fn log_round(&mut self, round: &BattleRound) {
        for event in &round.events {
            match event {
                BattleEvent::Draw { choice } => {
                    self.add_log_entry(format!("Both sides throw {choice}. Draw!"), false);
                }
                BattleEvent::Won {
                    exp_gained,
                    damage,
                    critical,
                } => {
                    let hit = if *critical {
                        format!("Victory! Critical hit for {damage}, +{exp_gained} exp")
                    } else {
                        format!("Victory! Hit for {damage}, +{exp_gained} exp")
                    };
                    self.add_log_entry(hit, *critical);
                }
                BattleEvent::Lost { damage } => {
                    self.add_log_entry(format!("Defeat... took {damage} damage"), false);
                }
                BattleEvent::LevelUp { level } => {
                    self.add_log_entry(format!("LEVEL UP! Now level {level}"), false);
                }
                BattleEvent::ItemDropped { what } => {
                    self.add_log_entry(format!("Drop: {what}"), false);
                }
                BattleEvent::MonsterDefeated { grade } => {
                    self.add_log_entry(format!("{grade} monster destroyed!"), false);
                }
                BattleEvent::FatigueWarning { fatigue } => {
                    self.add_log_entry(
                        format!("Fatigue at {fatigue}. Take a minigame break!"),
                        false,
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::store::InMemoryStore;
    use crate::combat::logic::BattleOutcome;
    use crate::core::fatigue::Fatigue;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn session_with_stats(stats: PlayerStats) -> GameSession<InMemoryStore> {
        let store = InMemoryStore::with_stats(stats, 0);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        GameSession::new(store, &mut rng)
    }

    #[test]
    fn test_new_session_spawns_monster_for_level() {
        let session = session_with_stats(PlayerStats::new());
        // Level 1 only spawns Normal monsters.
        assert_eq!(session.current_monster().grade, crate::combat::types::Grade::Normal);
        assert_eq!(session.current_monster().hp, 50);
    }

    #[test]
    fn test_battle_writes_back_to_store() {
        let mut session = session_with_stats(PlayerStats::new());
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        // Fight decided rounds until fatigue moves.
        for _ in 0..20 {
            let round = session.battle(Choice::Rock, &mut rng).unwrap();
            if round.outcome != BattleOutcome::Draw {
                break;
            }
        }

        let stored = session.store().stats();
        assert!(stored.fatigue.value() > 0, "store should see the fatigue");
        assert_eq!(stored, session.stats());
    }

    #[test]
    fn test_exhausted_session_fails_and_store_untouched() {
        let stats = PlayerStats {
            fatigue: Fatigue::new(100),
            ..PlayerStats::new()
        };
        let mut session = session_with_stats(stats.clone());
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let err = session.battle(Choice::Paper, &mut rng).unwrap_err();
        assert_eq!(err, BattleError::FatigueExhausted);
        assert_eq!(session.store().stats(), stats);
        assert!(session.battle_log().is_empty());
    }

    #[test]
    fn test_minigame_play_counts_and_log() {
        let stats = PlayerStats {
            level: 10,
            gold: 1000,
            fatigue: Fatigue::new(60),
            ..PlayerStats::new()
        };
        let mut session = session_with_stats(stats);
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        session.play_minigame(MinigameKind::Arcade, &mut rng).unwrap();
        session.play_minigame(MinigameKind::Capsule, &mut rng).unwrap();
        session.play_minigame(MinigameKind::Arcade, &mut rng).unwrap();

        assert_eq!(session.times_played(MinigameKind::Arcade), 2);
        assert_eq!(session.times_played(MinigameKind::Capsule), 1);
        assert_eq!(session.times_played(MinigameKind::Gambling), 0);
        assert_eq!(session.battle_log().len(), 3);
    }

    #[test]
    fn test_minigame_error_does_not_count_a_play() {
        let mut session = session_with_stats(PlayerStats::new());
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        let err = session
            .play_minigame(MinigameKind::Gambling, &mut rng)
            .unwrap_err();
        assert_eq!(err, MinigameError::LevelTooLow { required: 25 });
        assert_eq!(session.times_played(MinigameKind::Gambling), 0);
        assert!(session.battle_log().is_empty());
    }

    #[test]
    fn test_battle_log_caps_at_capacity() {
        let stats = PlayerStats {
            level: 10,
            gold: 100_000,
            ..PlayerStats::new()
        };
        let mut session = session_with_stats(stats);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        for _ in 0..30 {
            session.play_minigame(MinigameKind::Capsule, &mut rng).unwrap();
        }

        assert_eq!(session.battle_log().len(), BATTLE_LOG_CAPACITY);
    }

    #[test]
    fn test_respawn_replaces_monster() {
        let mut session = session_with_stats(PlayerStats::new());
        let mut rng = ChaCha8Rng::seed_from_u64(4);

        let mut monster = session.current_monster().clone();
        monster.take_damage(49);
        // Wound the current monster, then respawn over it.
        session.current_monster = monster;

        session.respawn_monster(&mut rng);
        assert_eq!(session.current_monster().hp, 50);
    }
}
