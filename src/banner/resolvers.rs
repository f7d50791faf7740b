//! Rate-up resolution rules.
//!
//! When a banner yields a 5★, the banner itself only knows *that* something
//! dropped; deciding whether it is the featured item is banner-specific.
//! Each rule is a [`RareOutcomeResolver`] composed into `Banner<R>`, so the
//! shared pity/guarantee logic lives in one place.

use crate::core::constants::{
    RADIANCE_FORCED_WIN_AT, RADIANCE_MAX, RADIANCE_SECOND_CHANCE_AT, RATE_UP_COIN,
    WEAPON_PRIMARY_COIN,
};
use rand::Rng;

/// Decides whether a freshly-hit 5★ is the featured (rate-up) item.
pub trait RareOutcomeResolver {
    /// Resolve one 5★ hit. `guarantee` is true when the previous 5★ lost
    /// its rate-up roll.
    fn resolve(&mut self, guarantee: bool, rng: &mut impl Rng) -> bool;

    /// Restore per-trial state to its configured starting point.
    fn reset(&mut self);
}

/// Character banner rule: 50/50 with "capturing radiance" loss-streak
/// compensation.
#[derive(Debug, Clone)]
pub struct CharacterResolver {
    /// Consecutive lost 50/50s. Escalates the next resolution: at 2 a lost
    /// coin is re-flipped once, at 3 the win is forced. Losses increment
    /// this without clamping to [`RADIANCE_MAX`].
    radiance: u32,
    initial_radiance: u32,
    /// Lifetime count of wins granted by the escalation paths. Diagnostic
    /// only, never consulted by the probability logic.
    global_radiance: u32,
}

impl CharacterResolver {
    /// `lose_streak` is the player's current run of lost 50/50s, clamped to
    /// the documented range at construction.
    pub fn new(lose_streak: u32) -> Self {
        let radiance = lose_streak.min(RADIANCE_MAX);
        Self {
            radiance,
            initial_radiance: radiance,
            global_radiance: 0,
        }
    }

    pub fn radiance(&self) -> u32 {
        self.radiance
    }

    pub fn global_radiance(&self) -> u32 {
        self.global_radiance
    }
}

impl RareOutcomeResolver for CharacterResolver {
    fn resolve(&mut self, guarantee: bool, rng: &mut impl Rng) -> bool {
        if guarantee {
            // Radiance is untouched here: only a random-chance win resets it.
            return true;
        }
        let mut won = rng.gen::<f64>() <= RATE_UP_COIN;
        if won {
            self.radiance = 0;
            return true;
        }
        if self.radiance == RADIANCE_SECOND_CHANCE_AT {
            won = rng.gen::<f64>() <= RATE_UP_COIN;
        }
        if self.radiance == RADIANCE_FORCED_WIN_AT {
            won = true;
        }
        if won {
            self.global_radiance += 1;
            self.radiance = 0;
        } else {
            self.radiance += 1;
        }
        won
    }

    fn reset(&mut self) {
        self.radiance = self.initial_radiance;
    }
}

/// Weapon banner rule: two independent coins (0.75, then 0.5). Both must
/// succeed, so a non-guaranteed 5★ is the featured weapon 37.5% of the time.
#[derive(Debug, Clone, Default)]
pub struct WeaponResolver;

impl RareOutcomeResolver for WeaponResolver {
    fn resolve(&mut self, guarantee: bool, rng: &mut impl Rng) -> bool {
        if guarantee {
            return true;
        }
        rng.gen::<f64>() <= WEAPON_PRIMARY_COIN && rng.gen::<f64>() <= RATE_UP_COIN
    }

    fn reset(&mut self) {}
}
