use std::time::Instant;

use electionsim::input::load_state_table;
use electionsim::simulation::{
    aggregate_statistics, save_national_winners, save_state_winners, save_statistics,
    simulate_batch, simulate_batch_sequential,
};
use electionsim::types::ElectionContext;

struct Args {
    states_path: String,
    num_trials: usize,
    seed: u64,
    polling_error: bool,
    output: Option<String>,
    sequential: bool,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut states_path = "state_info.csv".to_string();
    let mut num_trials = 1000usize;
    let mut seed = 42u64;
    let mut polling_error = false;
    let mut output: Option<String> = None;
    let mut sequential = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--states" => {
                i += 1;
                if i < args.len() {
                    states_path = args[i].clone();
                }
            }
            "--trials" => {
                i += 1;
                if i < args.len() {
                    num_trials = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --trials value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --seed value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--polling-error" => {
                polling_error = true;
            }
            "--output" => {
                i += 1;
                if i < args.len() {
                    output = Some(args[i].clone());
                }
            }
            "--sequential" => {
                sequential = true;
            }
            "--help" | "-h" => {
                println!(
                    "Usage: electionsim-simulate [--states FILE] [--trials N] [--seed S] [--polling-error] [--output DIR] [--sequential]"
                );
                println!();
                println!("Options:");
                println!("  --states FILE     State table CSV (default: state_info.csv)");
                println!("  --trials N        Number of election trials (default: 1000)");
                println!("  --seed S          RNG seed (default: 42)");
                println!("  --polling-error   Perturb poll shares by each state's margin of error");
                println!("  --output DIR      Write winner tables and statistics to DIR");
                println!("  --sequential      Run trials sequentially with progress printing");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!(
                    "Usage: electionsim-simulate [--states FILE] [--trials N] [--seed S] [--polling-error] [--output DIR] [--sequential]"
                );
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if num_trials == 0 {
        eprintln!("Error: --trials must be positive");
        std::process::exit(1);
    }

    Args {
        states_path,
        num_trials,
        seed,
        polling_error,
        output,
        sequential,
    }
}

fn main() {
    let _base = electionsim::env_config::init_base_path();
    let args = parse_args();

    let num_threads = electionsim::env_config::init_rayon_threads();

    let t0 = Instant::now();
    let states = match load_state_table(&args.states_path) {
        Ok(states) => states,
        Err(e) => {
            eprintln!("Invalid state table: {}", e);
            std::process::exit(1);
        }
    };
    let load_ms = t0.elapsed().as_secs_f64() * 1000.0;

    let ctx = ElectionContext::new(states, args.polling_error);

    println!("Election Simulation ({} trials)", args.num_trials);
    println!(
        "  States:          {} ({} electoral votes, {:.1} ms load)",
        ctx.states.len(),
        ctx.total_electoral_votes(),
        load_ms
    );
    println!(
        "  Polling error:   {}",
        if ctx.add_polling_error {
            "enabled"
        } else {
            "disabled"
        }
    );
    if args.sequential {
        println!("  Mode:            sequential");
    } else {
        println!("  Mode:            parallel ({} threads)", num_threads);
    }
    println!();

    let sim_start = Instant::now();
    let result = if args.sequential {
        simulate_batch_sequential(&ctx, args.num_trials, args.seed)
    } else {
        simulate_batch(&ctx, args.num_trials, args.seed)
    };
    let summary = match result {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Simulation failed: {}", e);
            std::process::exit(1);
        }
    };
    let sim_elapsed = sim_start.elapsed();

    let per_trial_us = sim_elapsed.as_secs_f64() * 1e6 / args.num_trials as f64;
    let throughput = args.num_trials as f64 / sim_elapsed.as_secs_f64();

    println!(
        "  Elapsed:     {:.1} ms",
        sim_elapsed.as_secs_f64() * 1000.0
    );
    println!("  Per trial:   {:.1} \u{00b5}s", per_trial_us);
    println!("  Throughput:  {:.0} trials/sec", throughput);
    println!();

    let stats = aggregate_statistics(&summary, &ctx.states, args.seed, ctx.add_polling_error);

    if let Some(ref output_dir) = args.output {
        let winners_path = format!("{}/state_winners.csv", output_dir);
        save_state_winners(&summary, &ctx.states, &winners_path);
        println!("  State winners:    {}", winners_path);

        let national_path = format!("{}/national_winners.csv", output_dir);
        save_national_winners(&summary, &national_path);
        println!("  National winners: {}", national_path);

        let stats_path = format!("{}/election_statistics.json", output_dir);
        save_statistics(&stats, &stats_path);
        println!("  Statistics:       {}", stats_path);
        println!();
    }

    println!("Results:");
    println!(
        "  Harris:  {} wins ({:.1}%), mean {:.1} electoral votes",
        stats.harris_wins,
        stats.harris_win_rate * 100.0,
        stats.harris_electoral_votes.mean
    );
    println!(
        "  Trump:   {} wins ({:.1}%), mean {:.1} electoral votes",
        stats.trump_wins,
        stats.trump_win_rate * 100.0,
        stats.trump_electoral_votes.mean
    );
    println!();
    println!(
        "Harris won {} times, Trump won {} times",
        stats.harris_wins, stats.trump_wins
    );
}
