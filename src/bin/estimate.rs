//! Wish probability estimator CLI.
//!
//! Run Monte Carlo estimates of banner pull outcomes.
//!
//! Usage:
//!   cargo run --bin estimate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin estimate -- -w 240 -c 2           # 2 characters in 240 wishes
//!   cargo run --bin estimate -- -w 300 -c 1 --weapons 1
//!   cargo run --bin estimate -- -w 240 --seed 42      # Reproducible run

use std::env;
use wishsim::simulator::{run_estimate, EstimateConfig};

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              WISHSIM PROBABILITY ESTIMATOR                    ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Wishes:         {}", config.wish_budget);
    println!("  Characters:     {}", config.wanted_char);
    println!("  Weapons:        {}", config.wanted_weapon);
    println!("  Trials:         {}", config.trials);
    if config.char_initial_pity > 0 {
        println!("  Char Pity:      {}", config.char_initial_pity);
    }
    if config.char_lose_streak > 0 {
        println!("  Lose Streak:    {}", config.char_lose_streak);
    }
    if config.weapon_initial_pity > 0 {
        println!("  Weapon Pity:    {}", config.weapon_initial_pity);
    }
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running estimate...");
    println!();

    let report = match run_estimate(&config) {
        Ok(report) => report,
        Err(message) => {
            eprintln!("Error: {}", message);
            std::process::exit(1);
        }
    };

    println!("{}", report.to_text());
    println!(
        "Probability of getting at least {} character 5★ and {} weapon 5★ in {} wishes: {}",
        report.wanted_char,
        report.wanted_weapon,
        report.wish_budget,
        report.probability_percent()
    );

    // Optionally save JSON report
    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "estimate_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, json).expect("Failed to write JSON report");
        println!("JSON report saved to: {}", filename);
    }
}

fn parse_args(args: &[String]) -> EstimateConfig {
    let mut config = EstimateConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-w" | "--wishes" => {
                if i + 1 < args.len() {
                    config.wish_budget = args[i + 1].parse().unwrap_or(180);
                    i += 1;
                }
            }
            "-c" | "--chars" => {
                if i + 1 < args.len() {
                    config.wanted_char = args[i + 1].parse().unwrap_or(1);
                    i += 1;
                }
            }
            "--weapons" => {
                if i + 1 < args.len() {
                    config.wanted_weapon = args[i + 1].parse().unwrap_or(0);
                    i += 1;
                }
            }
            "-n" | "--trials" => {
                if i + 1 < args.len() {
                    config.trials = args[i + 1].parse().unwrap_or(100_000);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--pity" => {
                if i + 1 < args.len() {
                    config.char_initial_pity = args[i + 1].parse().unwrap_or(0);
                    i += 1;
                }
            }
            "--weapon-pity" => {
                if i + 1 < args.len() {
                    config.weapon_initial_pity = args[i + 1].parse().unwrap_or(0);
                    i += 1;
                }
            }
            "--lose-streak" => {
                if i + 1 < args.len() {
                    config.char_lose_streak = args[i + 1].parse().unwrap_or(0);
                    i += 1;
                }
            }
            "--no-cost" => {
                config.analyze_cost = false;
            }
            "--quick" => {
                let budget = config.wish_budget;
                config = EstimateConfig::quick_check(budget);
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Wishsim Probability Estimator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin estimate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -w, --wishes <W>     Wish budget shared by both banners (default: 180)");
    println!("    -c, --chars <C>      Featured characters wanted (default: 1)");
    println!("    --weapons <N>        Featured weapons wanted (default: 0)");
    println!("    -n, --trials <T>     Monte Carlo trials (default: 100,000)");
    println!("    -s, --seed <S>       Random seed for reproducibility");
    println!("    --pity <P>           Current character banner pity");
    println!("    --weapon-pity <P>    Current weapon banner pity");
    println!("    --lose-streak <L>    Current run of lost 50/50s (0-4)");
    println!("    --no-cost            Skip the wish-cost distribution");
    println!("    --quick              Quick check (10,000 trials)");
    println!("    -v, --verbose        Progress output during trials");
    println!("    --json               Save JSON report");
    println!("    -h, --help           Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin estimate -- -w 240 -c 2            # 2 characters in 240 wishes");
    println!("    cargo run --bin estimate -- -w 300 -c 1 --weapons 1");
    println!("    cargo run --bin estimate -- -w 240 --seed 42       # Reproducible");
    println!("    cargo run --bin estimate -- --pity 45 --lose-streak 1");
}
