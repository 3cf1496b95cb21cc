//! Experience curve, kill rewards and level-up handling.

use rand::Rng;

use crate::character::stats::PlayerStats;
use crate::combat::types::Grade;
use crate::core::constants::*;

/// Experience required to clear the given level.
///
/// `floor(100 * 1.5^(level - 1))`. Returns `None` at the level cap: level
/// 77 is terminal, no amount of experience advances it.
pub fn required_exp(level: u32) -> Option<u64> {
    if level >= MAX_LEVEL {
        return None;
    }
    Some((XP_CURVE_BASE * XP_CURVE_FACTOR.powi(level as i32 - 1)).floor() as u64)
}

/// Experience rewarded for a kill of the given grade.
///
/// High-level characters get a shrinking reward for farming low monsters:
/// every level past 5 shaves 10% off, floored at 10%. Legendary kills are
/// exempt from the penalty.
pub fn monster_exp(grade: Grade, player_level: u32) -> u64 {
    let level_diff = if grade == Grade::Legendary {
        0
    } else {
        player_level.saturating_sub(LEVEL_PENALTY_GRACE)
    };
    let penalty = (1.0 - level_diff as f64 * LEVEL_PENALTY_STEP).max(LEVEL_PENALTY_FLOOR);
    (BASE_MONSTER_EXP * grade.exp_multiplier() * penalty).floor() as u64
}

/// Strategy hooks invoked by victory processing.
///
/// Stat growth and item generation are game content rather than engine
/// rules; callers plug in their own rules here. The defaults leave stats
/// untouched and describe the drop instead of creating one.
pub trait ProgressionHooks {
    /// Called once per level gained, after the level has been applied.
    fn grow_stats(&mut self, _stats: &mut PlayerStats, _new_level: u32) {}

    /// Called when the drop roll succeeds. The returned description is
    /// forwarded to the notification sink; `None` suppresses the drop.
    fn roll_drop(&mut self, grade: Grade, _player_level: u32) -> Option<String> {
        Some(format!("{} spoils", grade.name()))
    }
}

/// Hooks that keep both extension points at their defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHooks;

impl ProgressionHooks for DefaultHooks {}

/// What a single victory did to the character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VictorySummary {
    pub exp_gained: u64,
    pub levels_gained: u32,
    pub new_level: u32,
    pub dropped: Option<String>,
}

impl VictorySummary {
    pub fn leveled_up(&self) -> bool {
        self.levels_gained > 0
    }
}

/// Grants the kill reward, resolves the level-up loop and rolls the drop
/// table. Consumes exactly one random draw (the drop roll).
pub fn apply_victory(
    stats: &mut PlayerStats,
    grade: Grade,
    hooks: &mut dyn ProgressionHooks,
    rng: &mut impl Rng,
) -> VictorySummary {
    let exp_gained = monster_exp(grade, stats.level);
    stats.experience += exp_gained;

    let mut levels_gained = 0;
    while let Some(needed) = required_exp(stats.level) {
        if stats.experience < needed {
            break;
        }
        stats.experience -= needed;
        stats.level += 1;
        levels_gained += 1;
        hooks.grow_stats(stats, stats.level);
    }

    let dropped = if rng.gen::<f64>() < grade.drop_rate() {
        hooks.roll_drop(grade, stats.level)
    } else {
        None
    };

    VictorySummary {
        exp_gained,
        levels_gained,
        new_level: stats.level,
        dropped,
    }
}
