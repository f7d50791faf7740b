//! Estimation configuration.

use crate::core::constants::DEFAULT_TRIALS;

/// Configuration for a probability estimate.
#[derive(Debug, Clone)]
pub struct EstimateConfig {
    /// Wishes available across both banners
    pub wish_budget: u32,

    /// Featured characters wanted (must be at least 1)
    pub wanted_char: u32,

    /// Featured weapons wanted (0 skips the weapon banner)
    pub wanted_weapon: u32,

    /// Monte Carlo repetitions
    pub trials: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Pity carried into the character banner
    pub char_initial_pity: u32,

    /// Current run of lost 50/50s on the character banner
    pub char_lose_streak: u32,

    /// Pity carried into the weapon banner
    pub weapon_initial_pity: u32,

    /// Whether to also sample the unbudgeted wish-cost distribution
    pub analyze_cost: bool,

    /// Log verbosity (0 = silent, 1 = summary, 2 = progress)
    pub verbosity: u8,
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self {
            wish_budget: 180,
            wanted_char: 1,
            wanted_weapon: 0,
            trials: DEFAULT_TRIALS,
            seed: None,
            char_initial_pity: 0,
            char_lose_streak: 0,
            weapon_initial_pity: 0,
            analyze_cost: true,
            verbosity: 1,
        }
    }
}

impl EstimateConfig {
    /// Quick low-resolution config for interactive what-if checks
    pub fn quick_check(wish_budget: u32) -> Self {
        Self {
            wish_budget,
            trials: 10_000,
            analyze_cost: false,
            ..Default::default()
        }
    }
}
