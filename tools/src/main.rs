//! trial-runner: headless runner for the Probability Playground.
//!
//! Usage:
//!   trial-runner --experiment coin --trials 1000
//!   trial-runner --experiment dice --trials 500 --seed 42
//!   trial-runner --experiment threat --trials 1000 --base-prob 0.3 --defence 0.5
//!   trial-runner --experiment threat --config params.json --json

use anyhow::{bail, Result};
use playground_core::{
    config::ExperimentConfig,
    summary::Summary,
    Experiment, ExperimentReport, Playground,
};
use std::env;
use std::path::Path;

#[derive(serde::Serialize)]
struct RunOutput {
    experiment: String,
    seed:       u64,
    rows:       Vec<playground_core::FrequencyRow>,
    scenarios:  Vec<playground_core::threat_experiment::ScenarioRecord>,
    summary:    serde_json::Map<String, serde_json::Value>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let json_mode = args.iter().any(|a| a == "--json");
    let experiment_name = args
        .windows(2)
        .find(|w| w[0] == "--experiment")
        .map(|w| w[1].clone())
        .unwrap_or_else(|| "coin".to_string());

    let mut config = match args.windows(2).find(|w| w[0] == "--config") {
        Some(w) => ExperimentConfig::load(Path::new(&w[1]))?,
        None => ExperimentConfig::default(),
    };
    config.trials = parse_arg(&args, "--trials", config.trials);
    config.base_attack_prob = parse_arg(&args, "--base-prob", config.base_attack_prob);
    config.defence_strength = parse_arg(&args, "--defence", config.defence_strength);
    let config = config.clamped();

    let experiment = match experiment_name.as_str() {
        "coin" => Experiment::Coin { trials: config.trials },
        "dice" => Experiment::Dice { trials: config.trials },
        "threat" => Experiment::Threat {
            trials:           config.trials,
            base_attack_prob: config.base_attack_prob,
            defence_strength: config.defence_strength,
        },
        other => bail!("Unknown experiment '{other}' (expected coin, dice or threat)"),
    };

    log::info!(
        "experiment={experiment_name} trials={} base_prob={} defence={}",
        config.trials, config.base_attack_prob, config.defence_strength
    );

    let playground = match args.windows(2).find(|w| w[0] == "--seed") {
        Some(w) => Playground::seeded(w[1].parse()?),
        None => Playground::from_entropy(),
    };
    let seed = playground.master_seed();

    let report = playground.run(&experiment)?;

    if json_mode {
        print_json(&experiment_name, seed, &report)?;
    } else {
        print_report(&experiment_name, seed, &report);
    }
    Ok(())
}

fn print_report(experiment: &str, seed: u64, report: &ExperimentReport) {
    println!("Probability Playground — trial-runner");
    println!("  experiment: {experiment}");
    println!("  seed:       {seed}");
    println!();

    if let Some(table) = &report.table {
        println!("=== FREQUENCY TABLE ===");
        println!("  {:<10} {:>8} {:>10}", "outcome", "count", "rel freq");
        for row in table.rows() {
            println!(
                "  {:<10} {:>8} {:>10.3}",
                row.outcome, row.count, row.relative_frequency
            );
        }
        println!();
    }

    if !report.scenarios.is_empty() {
        println!("=== SCENARIO SAMPLE (first 10) ===");
        for record in report.scenarios.iter().take(10) {
            println!(
                "  #{:<6} {}",
                record.scenario_id,
                if record.attack_successful { "attack succeeded" } else { "blocked" }
            );
        }
        println!();
    }

    println!("=== RUN SUMMARY ===");
    for (label, value) in report.summary.iter() {
        println!("  {label}: {value}");
    }
}

fn print_json(experiment: &str, seed: u64, report: &ExperimentReport) -> Result<()> {
    let output = RunOutput {
        experiment: experiment.to_string(),
        seed,
        rows: report
            .table
            .as_ref()
            .map(|t| t.rows().to_vec())
            .unwrap_or_default(),
        scenarios: report.scenarios.clone(),
        summary: summary_map(&report.summary),
    };
    println!("{}", serde_json::to_string(&output)?);
    Ok(())
}

fn summary_map(summary: &Summary) -> serde_json::Map<String, serde_json::Value> {
    summary
        .iter()
        .map(|(label, value)| (label.to_string(), serde_json::Value::from(value.to_string())))
        .collect()
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
