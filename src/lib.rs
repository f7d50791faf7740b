//! Wishsim - Gacha Pity-System Probability Simulator
//!
//! Models the character and weapon event banners (soft/hard pity, 50/50
//! with radiance compensation, double-coin weapon rate-up) and estimates by
//! Monte Carlo sampling the probability of hitting a pull target within a
//! wish budget.

pub mod banner;
pub mod core;
pub mod simulator;

pub use banner::{Banner, BannerConfig, CharacterBanner, WeaponBanner};
pub use simulator::{run_estimate, EstimateConfig, EstimateReport};
