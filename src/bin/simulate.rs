//! Battle balance simulator CLI.
//!
//! Runs whole careers through the engine and reports win rates, leveling
//! pace and the gold/fatigue economy.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                    # Default: 20 runs, 2000 battles each
//!   cargo run --bin simulate -- -n 100 -b 500   # 100 runs of 500 battles
//!   cargo run --bin simulate -- --seed 42       # Reproducible run

use std::env;

use rand::rngs::StdRng;
use rand::SeedableRng;

use notebook_rpg::{
    BattleEvent, BattleOutcome, Choice, GameSession, InMemoryStore, MinigameKind, PlayerStats,
};

const DAY_SECONDS: i64 = 24 * 60 * 60;

struct SimConfig {
    num_runs: u32,
    battles_per_run: u32,
    seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 20,
            battles_per_run: 2000,
            seed: None,
        }
    }
}

#[derive(Default)]
struct RunReport {
    wins: u64,
    losses: u64,
    draws: u64,
    kills: u64,
    drops: u64,
    minigame_plays: u64,
    rest_days: u64,
    final_level: u32,
    final_gold: u32,
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("=== Notebook RPG balance simulator ===");
    println!("Runs:             {}", config.num_runs);
    println!("Battles per run:  {}", config.battles_per_run);
    if let Some(seed) = config.seed {
        println!("Seed:             {seed}");
    }
    println!();

    let base_seed = config.seed.unwrap_or(0xB417_1E5);
    let mut reports = Vec::new();
    for run in 0..config.num_runs {
        let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(run as u64));
        reports.push(simulate_run(config.battles_per_run, &mut rng));
    }

    print_summary(&reports, config.battles_per_run);
}

/// Plays one character through `battles` rounds, recovering fatigue with
/// minigames when possible and sleeping a day off when broke.
fn simulate_run(battles: u32, rng: &mut StdRng) -> RunReport {
    let mut report = RunReport::default();
    let mut now = 0i64;
    // A small allowance so the minigame economy gets exercised once the
    // level gates open.
    let starting_stats = PlayerStats {
        gold: 500,
        ..PlayerStats::new()
    };
    let store = InMemoryStore::with_stats(starting_stats, now);
    let mut session = GameSession::new(store, rng);

    for _ in 0..battles {
        if session.stats().fatigue.is_exhausted() {
            if !recover(&mut session, &mut report, rng) {
                // Nothing affordable: sleep until the daily reset.
                now += DAY_SECONDS;
                session.store_mut().apply_daily_fatigue_reset(now);
                report.rest_days += 1;
            }
            continue;
        }

        let choice = Choice::random(rng);
        let round = match session.battle(choice, rng) {
            Ok(round) => round,
            Err(_) => continue,
        };

        match round.outcome {
            BattleOutcome::Win => report.wins += 1,
            BattleOutcome::Loss => report.losses += 1,
            BattleOutcome::Draw => report.draws += 1,
        }
        for event in &round.events {
            match event {
                BattleEvent::MonsterDefeated { .. } => report.kills += 1,
                BattleEvent::ItemDropped { .. } => report.drops += 1,
                _ => {}
            }
        }
    }

    let stats = session.stats();
    report.final_level = stats.level;
    report.final_gold = stats.gold;
    report
}

/// Plays the cheapest affordable minigame. Returns false when none is.
fn recover(
    session: &mut GameSession<InMemoryStore>,
    report: &mut RunReport,
    rng: &mut StdRng,
) -> bool {
    let stats = session.stats();
    let mut affordable: Vec<MinigameKind> = MinigameKind::ALL
        .iter()
        .copied()
        .filter(|kind| {
            let info = kind.info();
            stats.level >= info.required_level && stats.gold >= info.cost
        })
        .collect();
    affordable.sort_by_key(|kind| kind.info().cost);

    match affordable.first() {
        Some(kind) => {
            if session.play_minigame(*kind, rng).is_ok() {
                report.minigame_plays += 1;
                true
            } else {
                false
            }
        }
        None => false,
    }
}

fn print_summary(reports: &[RunReport], battles_per_run: u32) {
    let runs = reports.len() as u64;
    let total_decided: u64 = reports.iter().map(|r| r.wins + r.losses).sum();
    let total_wins: u64 = reports.iter().map(|r| r.wins).sum();
    let total_draws: u64 = reports.iter().map(|r| r.draws).sum();
    let total_kills: u64 = reports.iter().map(|r| r.kills).sum();
    let total_drops: u64 = reports.iter().map(|r| r.drops).sum();
    let total_plays: u64 = reports.iter().map(|r| r.minigame_plays).sum();
    let total_rest: u64 = reports.iter().map(|r| r.rest_days).sum();

    let avg_level: f64 = reports.iter().map(|r| r.final_level as f64).sum::<f64>() / runs as f64;
    let avg_gold: f64 = reports.iter().map(|r| r.final_gold as f64).sum::<f64>() / runs as f64;
    let max_level = reports.iter().map(|r| r.final_level).max().unwrap_or(1);

    println!("Results over {runs} runs of {battles_per_run} battles:");
    println!(
        "  Win rate (decided rounds):  {:.1}%",
        100.0 * total_wins as f64 / total_decided.max(1) as f64
    );
    println!(
        "  Draw rate (all rounds):     {:.1}%",
        100.0 * total_draws as f64 / (total_decided + total_draws).max(1) as f64
    );
    println!("  Monsters destroyed:         {}", total_kills);
    println!("  Item drops:                 {}", total_drops);
    println!("  Minigame plays:             {}", total_plays);
    println!("  Rest days taken:            {}", total_rest);
    println!("  Avg final level:            {:.1}", avg_level);
    println!("  Max final level:            {}", max_level);
    println!("  Avg final gold:             {:.0}", avg_gold);
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(20);
                    i += 1;
                }
            }
            "-b" | "--battles" => {
                if i + 1 < args.len() {
                    config.battles_per_run = args[i + 1].parse().unwrap_or(2000);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-h" | "--help" => {
                println!("Usage: simulate [-n RUNS] [-b BATTLES] [-s SEED]");
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}
