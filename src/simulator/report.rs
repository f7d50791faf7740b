//! Estimate report generation.

use serde::Serialize;

/// Distribution of wishes needed to hit the targets with no budget cap.
#[derive(Debug, Clone, Serialize)]
pub struct WishCostStats {
    pub sample_size: u32,
    pub avg: f64,
    pub min: u32,
    pub median: u32,
    pub p90: u32,
    pub max: u32,
}

impl WishCostStats {
    /// Aggregate a sample of per-trial wish costs.
    pub fn from_sample(mut costs: Vec<u32>) -> Self {
        let sample_size = costs.len() as u32;
        costs.sort_unstable();
        let avg = costs.iter().map(|&c| c as f64).sum::<f64>() / sample_size.max(1) as f64;
        let percentile = |p: f64| -> u32 {
            let idx = ((costs.len() as f64 * p) as usize).min(costs.len().saturating_sub(1));
            costs.get(idx).copied().unwrap_or(0)
        };
        Self {
            sample_size,
            avg,
            min: costs.first().copied().unwrap_or(0),
            median: percentile(0.5),
            p90: percentile(0.9),
            max: costs.last().copied().unwrap_or(0),
        }
    }
}

/// Result of a probability estimate.
#[derive(Debug, Clone, Serialize)]
pub struct EstimateReport {
    pub wish_budget: u32,
    pub wanted_char: u32,
    pub wanted_weapon: u32,
    pub trials: u32,
    pub successes: u32,
    /// Empirical success probability in [0, 1]
    pub probability: f64,
    /// True when the always-affordable shortcut skipped sampling
    pub fast_path: bool,
    pub wish_cost: Option<WishCostStats>,
}

impl EstimateReport {
    /// Report for the always-affordable shortcut: no trials were run.
    pub fn always_affordable(wish_budget: u32, wanted_char: u32, wanted_weapon: u32) -> Self {
        Self {
            wish_budget,
            wanted_char,
            wanted_weapon,
            trials: 0,
            successes: 0,
            probability: 1.0,
            fast_path: true,
            wish_cost: None,
        }
    }

    /// Report from completed Monte Carlo trials.
    pub fn from_trials(
        wish_budget: u32,
        wanted_char: u32,
        wanted_weapon: u32,
        trials: u32,
        successes: u32,
    ) -> Self {
        Self {
            wish_budget,
            wanted_char,
            wanted_weapon,
            trials,
            successes,
            probability: successes as f64 / trials as f64,
            fast_path: false,
            wish_cost: None,
        }
    }

    /// Probability rendered as a percentage with 2 decimal digits.
    pub fn probability_percent(&self) -> String {
        format!("{:.2}%", self.probability * 100.0)
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                      ESTIMATE REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "  Target:      {} featured character(s), {} featured weapon(s)\n",
            self.wanted_char, self.wanted_weapon
        ));
        report.push_str(&format!("  Budget:      {} wishes\n", self.wish_budget));

        if self.fast_path {
            report.push_str("  Trials:      skipped (budget clears two hard pities per target)\n");
        } else {
            report.push_str(&format!(
                "  Trials:      {} ({} successful)\n",
                self.trials, self.successes
            ));
        }
        report.push_str(&format!(
            "\n  Success probability: {}\n",
            self.probability_percent()
        ));

        if let Some(cost) = &self.wish_cost {
            report.push_str("\n── WISH COST (no budget cap) ────────────────────────────────────\n");
            report.push_str(&format!("  Samples: {}\n", cost.sample_size));
            report.push_str(&format!("  Average: {:.1} wishes\n", cost.avg));
            report.push_str(&format!("  Min:     {}\n", cost.min));
            report.push_str(&format!("  Median:  {}\n", cost.median));
            report.push_str(&format!("  P90:     {}\n", cost.p90));
            report.push_str(&format!("  Max:     {}\n", cost.max));
        }

        report
    }

    /// Generate a JSON report.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
