//! Minigame play: gating, cost deduction, fatigue recovery and gold payout.

use rand::{Rng, RngCore};

use crate::character::stats::PlayerStats;
use crate::error::MinigameError;
use crate::minigames::types::{catalog, MinigameInfo, MinigameKind, MinigamePlay, MinigameRewards};

/// Plays a minigame against the character's stats.
///
/// Checks level and gold first and leaves the stats untouched on failure.
/// On success the cost is deducted, fatigue recovers by the game's fixed
/// amount and the gold payout (if any) is credited.
pub fn play(
    stats: &mut PlayerStats,
    kind: MinigameKind,
    rng: &mut (impl Rng + ?Sized),
) -> Result<MinigamePlay, MinigameError> {
    let info = kind.info();

    if stats.level < info.required_level {
        return Err(MinigameError::LevelTooLow {
            required: info.required_level,
        });
    }
    if stats.gold < info.cost {
        return Err(MinigameError::NotEnoughGold { cost: info.cost });
    }

    stats.gold -= info.cost;
    stats.fatigue.recover(info.fatigue_recovery);

    let gold = roll_gold_reward(kind, rng);
    stats.gold += gold;

    Ok(MinigamePlay {
        kind,
        rewards: MinigameRewards {
            gold,
            fatigue_recovery: info.fatigue_recovery,
        },
        new_gold: stats.gold,
        new_fatigue: stats.fatigue.value(),
    })
}

/// Gold payout per game. Capsule and Pets pay out in things other than
/// gold, which the engine does not model, so their gold reward is zero.
fn roll_gold_reward(kind: MinigameKind, rng: &mut (impl Rng + ?Sized)) -> u32 {
    match kind {
        MinigameKind::Capsule | MinigameKind::Pets => 0,
        MinigameKind::Arcade => rng.gen_range(300..=800),
        MinigameKind::Phone => {
            // One of three reward flavors is gold.
            if rng.gen_range(0..3) == 0 {
                rng.gen_range(200..=500)
            } else {
                0
            }
        }
        MinigameKind::Gambling => {
            // High risk: 40% jackpot, otherwise small change.
            if rng.gen::<f64>() < 0.4 {
                rng.gen_range(1000..=2000)
            } else {
                rng.gen_range(100..=300)
            }
        }
    }
}

/// Minigame host boundary. The engine only consumes the gold and fatigue
/// numbers a host hands back; how a concrete host computes them is its own
/// business.
pub trait MinigameProvider {
    fn list(&self) -> Vec<(MinigameKind, MinigameInfo)>;

    fn play(
        &mut self,
        kind: MinigameKind,
        stats: &mut PlayerStats,
        rng: &mut dyn RngCore,
    ) -> Result<MinigamePlay, MinigameError>;
}

/// Default host running the built-in catalog in process.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalMinigames;

impl MinigameProvider for LocalMinigames {
    fn list(&self) -> Vec<(MinigameKind, MinigameInfo)> {
        catalog()
    }

    fn play(
        &mut self,
        kind: MinigameKind,
        stats: &mut PlayerStats,
        rng: &mut dyn RngCore,
    ) -> Result<MinigamePlay, MinigameError> {
        play(stats, kind, rng)
    }
}
