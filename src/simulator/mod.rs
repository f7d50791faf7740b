//! Wish probability simulator for Monte Carlo analysis.
//!
//! Runs many simulated pull sessions to answer: with this many wishes, what
//! is the chance of getting the wanted featured characters and weapons?
//! Both banners share one budget; the character banner spends first and the
//! weapon banner gets what is left.

mod config;
mod report;
mod runner;

pub use config::EstimateConfig;
pub use report::{EstimateReport, WishCostStats};
pub use runner::run_estimate;
