//! Monte Carlo estimation driver.
//!
//! Each trial replays the player's plan with private banner state: the
//! character banner spends from the shared wish budget first, and whatever
//! the winning pull left over is handed to the weapon banner. The estimate
//! is the fraction of trials where both targets were met.

use super::config::EstimateConfig;
use super::report::{EstimateReport, WishCostStats};
use crate::banner::{CharacterBanner, WeaponBanner};
use crate::core::constants::FAST_PATH_PITY_FACTOR;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Run the estimate and return a report.
pub fn run_estimate(config: &EstimateConfig) -> Result<EstimateReport, String> {
    if config.trials == 0 {
        return Err("trials must be at least 1".to_string());
    }
    if config.wanted_char == 0 {
        return Err("at least one featured character target is required".to_string());
    }

    let mut char_banner =
        CharacterBanner::character(config.char_initial_pity, config.char_lose_streak)?;
    let mut weapon_banner = WeaponBanner::weapon(config.weapon_initial_pity)?;

    // Always-affordable shortcut: assume two hard pities per wanted copy.
    // Inherited heuristic, not a proven bound.
    let affordable = FAST_PATH_PITY_FACTOR * char_banner.hard_pity() * config.wanted_char
        + FAST_PATH_PITY_FACTOR * weapon_banner.hard_pity() * config.wanted_weapon;
    if affordable < config.wish_budget {
        if config.verbosity >= 1 {
            println!(
                "Budget {} clears the {}-wish affordability bar, skipping trials",
                config.wish_budget, affordable
            );
        }
        return Ok(EstimateReport::always_affordable(
            config.wish_budget,
            config.wanted_char,
            config.wanted_weapon,
        ));
    }

    let mut successes = 0u32;
    let progress_step = (config.trials / 10).max(1);

    for trial in 0..config.trials {
        // Private RNG per trial, derived from the seed when one is given
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed + trial as u64),
            None => ChaCha8Rng::from_entropy(),
        };

        if run_trial(config, &mut char_banner, &mut weapon_banner, &mut rng) {
            successes += 1;
        }

        if config.verbosity >= 2 && trial > 0 && trial % progress_step == 0 {
            println!(
                "Trial {}/{} - running success rate {:.2}%",
                trial,
                config.trials,
                (successes as f64 / trial as f64) * 100.0
            );
        }
    }

    let mut report = EstimateReport::from_trials(
        config.wish_budget,
        config.wanted_char,
        config.wanted_weapon,
        config.trials,
        successes,
    );

    if config.analyze_cost {
        report.wish_cost = Some(sample_wish_cost(
            config,
            &mut char_banner,
            &mut weapon_banner,
        ));
    }

    Ok(report)
}

/// One budgeted repetition. The character target must be met first; its
/// leftover budget funds the weapon target.
fn run_trial(
    config: &EstimateConfig,
    char_banner: &mut CharacterBanner,
    weapon_banner: &mut WeaponBanner,
    rng: &mut ChaCha8Rng,
) -> bool {
    let (char_success, leftover) =
        char_banner.try_draw(config.wish_budget, config.wanted_char, rng);
    if !char_success {
        return false;
    }
    let (weapon_success, _) = weapon_banner.try_draw(leftover, config.wanted_weapon, rng);
    weapon_success
}

/// Sample the unbudgeted wish cost of the same targets: how many wishes the
/// plan takes when the player just keeps pulling until done.
fn sample_wish_cost(
    config: &EstimateConfig,
    char_banner: &mut CharacterBanner,
    weapon_banner: &mut WeaponBanner,
) -> WishCostStats {
    // Offset keeps the cost stream distinct from the trial streams
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(0x9E37_79B9_7F4A_7C15)),
        None => ChaCha8Rng::from_entropy(),
    };

    let sample_size = config.trials.min(10_000);
    let mut costs = Vec::with_capacity(sample_size as usize);
    for _ in 0..sample_size {
        let mut cost = char_banner.pulls_until_target(config.wanted_char, &mut rng);
        if config.wanted_weapon > 0 {
            cost += weapon_banner.pulls_until_target(config.wanted_weapon, &mut rng);
        }
        costs.push(cost);
    }
    WishCostStats::from_sample(costs)
}
