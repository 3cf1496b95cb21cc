// Combat resolution
pub const BASE_WIN_CHANCE: f64 = 0.33;
pub const MAX_WIN_CHANCE: f64 = 0.9;
pub const MAX_POWER_BONUS: f64 = 0.4;
pub const POWER_DIFF_DIVISOR: f64 = 100.0;
pub const POWER_BONUS_RATE: f64 = 0.2;
pub const CRIT_CHANCE: f64 = 0.1;
pub const CRIT_MULTIPLIER: u32 = 2;

// Damage taken on a lost round
pub const LOSS_BASE_DAMAGE: u32 = 10;
pub const LOSS_MIN_DAMAGE: u32 = 5;

// Fatigue
pub const FATIGUE_MAX: u32 = 100;
pub const FATIGUE_WARNING_THRESHOLD: u32 = 80;
pub const FATIGUE_PER_WIN: u32 = 10;
pub const FATIGUE_PER_LOSS: u32 = 15;

// XP and leveling
pub const MAX_LEVEL: u32 = 77;
pub const XP_CURVE_BASE: f64 = 100.0;
pub const XP_CURVE_FACTOR: f64 = 1.5;
pub const BASE_MONSTER_EXP: f64 = 10.0;
pub const LEVEL_PENALTY_GRACE: u32 = 5;
pub const LEVEL_PENALTY_STEP: f64 = 0.1;
pub const LEVEL_PENALTY_FLOOR: f64 = 0.1;

// Monster grade selection level bands
pub const GRADE_BAND_RARE_LEVEL: u32 = 15;
pub const GRADE_BAND_EPIC_LEVEL: u32 = 30;
pub const GRADE_BAND_LEGENDARY_LEVEL: u32 = 50;

// Battle log
pub const BATTLE_LOG_CAPACITY: usize = 10;
