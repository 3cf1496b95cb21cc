//! Battle round resolution.
//!
//! A round is a rock-paper-scissors gate in front of a power-weighted coin
//! flip: matching choices draw, anything else goes to a single random roll
//! against the win chance. The thrown hands never decide the winner.

use rand::Rng;

use crate::character::stats::PlayerStats;
use crate::combat::types::{spawn_monster, Choice, Grade, Monster};
use crate::core::constants::*;
use crate::core::progression::{apply_victory, ProgressionHooks};
use crate::error::BattleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    Win,
    Loss,
    Draw,
}

/// Events emitted by a battle round, in the order they happened. The
/// presentation layer renders these; the engine never draws anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleEvent {
    Draw {
        choice: Choice,
    },
    Won {
        exp_gained: u64,
        damage: u32,
        critical: bool,
    },
    Lost {
        damage: u32,
    },
    LevelUp {
        level: u32,
    },
    ItemDropped {
        what: String,
    },
    MonsterDefeated {
        grade: Grade,
    },
    FatigueWarning {
        fatigue: u32,
    },
}

/// Everything a single call to [`resolve_battle`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleRound {
    pub outcome: BattleOutcome,
    pub player_choice: Choice,
    pub computer_choice: Choice,
    pub events: Vec<BattleEvent>,
}

/// Probability that the player wins a decided round.
///
/// Base 33%, plus 0.2 per unit of positive power gap normalized by 100,
/// bonus capped at +40pp and the whole thing at 90%.
pub fn win_chance(player_power: u32, monster_power: u32) -> f64 {
    let diff = player_power as f64 - monster_power as f64;
    let bonus = ((diff / POWER_DIFF_DIVISOR).max(0.0) * POWER_BONUS_RATE).min(MAX_POWER_BONUS);
    (BASE_WIN_CHANCE + bonus).min(MAX_WIN_CHANCE)
}

/// Resolves one battle round against the current monster.
///
/// Refuses to fight at max fatigue (`FatigueExhausted`, nothing mutated).
/// On a win the victory rewards land first, then the monster takes the
/// player's attack (10% critical doubles it); a kill replaces the monster
/// in place with a fresh spawn at the player's post-victory level. On a
/// loss the player takes `max(5, 10 - defense)` with no critical path.
///
/// Random draws happen in a fixed order so scripted sources replay
/// exactly: computer choice, win roll, then on a win the drop roll, the
/// critical roll and the replacement monster's grade roll.
pub fn resolve_battle(
    stats: &mut PlayerStats,
    monster: &mut Monster,
    choice: Choice,
    hooks: &mut dyn ProgressionHooks,
    rng: &mut impl Rng,
) -> Result<BattleRound, BattleError> {
    if stats.fatigue.is_exhausted() {
        return Err(BattleError::FatigueExhausted);
    }

    let computer_choice = Choice::random(rng);
    if choice == computer_choice {
        return Ok(BattleRound {
            outcome: BattleOutcome::Draw,
            player_choice: choice,
            computer_choice,
            events: vec![BattleEvent::Draw { choice }],
        });
    }

    let chance = win_chance(stats.power(), monster.power());
    let mut events = Vec::new();

    let outcome = if rng.gen::<f64>() < chance {
        let summary = apply_victory(stats, monster.grade, hooks, rng);

        let critical = rng.gen::<f64>() < CRIT_CHANCE;
        let damage = if critical {
            stats.attack * CRIT_MULTIPLIER
        } else {
            stats.attack
        };
        monster.take_damage(damage);

        events.push(BattleEvent::Won {
            exp_gained: summary.exp_gained,
            damage,
            critical,
        });
        for level in summary.new_level - summary.levels_gained + 1..=summary.new_level {
            events.push(BattleEvent::LevelUp { level });
        }
        if let Some(what) = summary.dropped {
            events.push(BattleEvent::ItemDropped { what });
        }
        if monster.is_defeated() {
            events.push(BattleEvent::MonsterDefeated {
                grade: monster.grade,
            });
            *monster = spawn_monster(stats.level, rng);
        }

        let fatigue = stats.fatigue.increase(FATIGUE_PER_WIN);
        if stats.fatigue.at_warning() {
            events.push(BattleEvent::FatigueWarning { fatigue });
        }
        BattleOutcome::Win
    } else {
        let damage = LOSS_BASE_DAMAGE
            .saturating_sub(stats.defense)
            .max(LOSS_MIN_DAMAGE);
        stats.take_damage(damage);
        events.push(BattleEvent::Lost { damage });

        let fatigue = stats.fatigue.increase(FATIGUE_PER_LOSS);
        if stats.fatigue.at_warning() {
            events.push(BattleEvent::FatigueWarning { fatigue });
        }
        BattleOutcome::Loss
    };

    Ok(BattleRound {
        outcome,
        player_choice: choice,
        computer_choice,
        events,
    })
}
