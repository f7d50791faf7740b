//! Immutable banner configuration.
//!
//! Configuration is separated from run state: a `BannerConfig` is validated
//! once at construction and never mutated, so a simulation trial can never
//! corrupt the parameters of the next one.

use crate::core::constants::{
    CHAR_BASE_RATE_PERCENT, CHAR_HARD_PITY, CHAR_SOFT_PITY_START, WEAPON_BASE_RATE_PERCENT,
    WEAPON_HARD_PITY, WEAPON_SOFT_PITY_START,
};

/// Validated parameters of a single banner's pity system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BannerConfig {
    /// 5★ probability below the soft-pity threshold, as a fraction in (0, 1].
    pub base_rate: f64,
    /// Pull index at which a 5★ is guaranteed.
    pub hard_pity: u32,
    /// Pull index at which the rate starts ramping.
    pub soft_pity_start: u32,
    /// Pity carried into the first pull of every run.
    pub initial_pity: u32,
}

impl BannerConfig {
    /// Build a config from a rate given in percent (`0.6` means 0.6%), the
    /// unit the published pity tables use.
    pub fn new(
        base_rate_percent: f64,
        hard_pity: u32,
        soft_pity_start: u32,
        initial_pity: u32,
    ) -> Result<Self, String> {
        let config = Self {
            base_rate: base_rate_percent / 100.0,
            hard_pity,
            soft_pity_start,
            initial_pity,
        };
        config.validate()?;
        Ok(config)
    }

    /// Character event banner defaults (0.6% / hard pity 90 / soft pity 74).
    pub fn character(initial_pity: u32) -> Result<Self, String> {
        Self::new(
            CHAR_BASE_RATE_PERCENT,
            CHAR_HARD_PITY,
            CHAR_SOFT_PITY_START,
            initial_pity,
        )
    }

    /// Weapon event banner defaults (0.7% / hard pity 77 / soft pity 63).
    pub fn weapon(initial_pity: u32) -> Result<Self, String> {
        Self::new(
            WEAPON_BASE_RATE_PERCENT,
            WEAPON_HARD_PITY,
            WEAPON_SOFT_PITY_START,
            initial_pity,
        )
    }

    fn validate(&self) -> Result<(), String> {
        if !self.base_rate.is_finite() || self.base_rate <= 0.0 || self.base_rate > 1.0 {
            return Err(format!(
                "base rate must be in (0, 100] percent, got {}%",
                self.base_rate * 100.0
            ));
        }
        if self.hard_pity == 0 {
            return Err("hard pity must be at least 1".to_string());
        }
        if self.soft_pity_start == 0 || self.soft_pity_start > self.hard_pity {
            return Err(format!(
                "soft pity start must be in 1..={}, got {}",
                self.hard_pity, self.soft_pity_start
            ));
        }
        if self.initial_pity >= self.hard_pity {
            return Err(format!(
                "initial pity {} already meets hard pity {}",
                self.initial_pity, self.hard_pity
            ));
        }
        Ok(())
    }
}
