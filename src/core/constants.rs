// Character event banner (published 5★ pity table values)
pub const CHAR_BASE_RATE_PERCENT: f64 = 0.6;
pub const CHAR_HARD_PITY: u32 = 90;
pub const CHAR_SOFT_PITY_START: u32 = 74;

// Weapon event banner
pub const WEAPON_BASE_RATE_PERCENT: f64 = 0.7;
pub const WEAPON_HARD_PITY: u32 = 77;
pub const WEAPON_SOFT_PITY_START: u32 = 63;

// Rate-up resolution coins
pub const RATE_UP_COIN: f64 = 0.5;
pub const WEAPON_PRIMARY_COIN: f64 = 0.75;

// Radiance (loss-streak compensation on the character banner).
// RADIANCE_MAX bounds the streak a caller may claim at construction; the
// increment on a lost 50/50 is NOT clamped against it, matching the source
// game's observed behavior. Whether streaks above 4 should saturate is
// unconfirmed.
pub const RADIANCE_MAX: u32 = 4;
pub const RADIANCE_SECOND_CHANCE_AT: u32 = 2;
pub const RADIANCE_FORCED_WIN_AT: u32 = 3;

// Estimator defaults
pub const DEFAULT_TRIALS: u32 = 100_000;
// The always-affordable shortcut budgets two hard pities per wanted copy.
// Heuristic, not a proven bound.
pub const FAST_PATH_PITY_FACTOR: u32 = 2;
