//! Level economy simulator CLI.
//!
//! Runs player archetypes through the level table and prints a balance
//! summary.
//!
//! Usage:
//!   cargo run -- [OPTIONS]
//!
//! Examples:
//!   cargo run                       # Sample data, target level 54
//!   cargo run -- -l 20 --seed 42    # Reproducible run to level 20
//!   cargo run -- --data-dir ./data  # Use existing CSVs instead of samples

use levelsim::config::SimConfig;
use levelsim::engine::Simulator;
use levelsim::loader::load_simulation_data;
use levelsim::report::{log_to_text, SimReport};
use levelsim::sample_data::{default_inventory, write_sample_csvs};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::env;
use std::path::{Path, PathBuf};

struct CliOptions {
    config: SimConfig,
    data_dir: Option<PathBuf>,
    dump_log: bool,
    save_json: bool,
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let options = parse_args(&args);
    let config = &options.config;

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║                LEVEL ECONOMY SIMULATOR                        ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Target Level:   {}", config.target_level);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    if let Some(cap) = config.max_days {
        println!("  Day Cap:        {}", cap);
    }
    println!();

    // Use provided CSVs, or generate the sample set in the working directory
    // and clean it up afterwards.
    let generated = if options.data_dir.is_none() {
        println!("Generating sample CSV files: items.csv, levels.csv, players.csv");
        match write_sample_csvs(Path::new(".")) {
            Ok(files) => Some(files),
            Err(e) => {
                eprintln!("Error: could not write sample data: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        None
    };

    let dir = options.data_dir.clone().unwrap_or_else(|| PathBuf::from("."));
    let data = load_simulation_data(
        &dir.join("items.csv"),
        &dir.join("levels.csv"),
        &dir.join("players.csv"),
        &default_inventory(),
    );

    let data = match data {
        Ok(data) => data,
        Err(e) => {
            cleanup(&generated);
            eprintln!("Error: {}", e);
            eprintln!("Aborting: no simulation data loaded.");
            std::process::exit(1);
        }
    };

    println!("Loaded {} items, {} levels, {} players.", data.catalog.len(), data.levels.len(), data.players.len());
    println!();
    println!("Running simulation...");
    println!();

    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let mut simulator = Simulator::new(data.players, data.levels, data.catalog);
    simulator.run(config, &mut rng);

    if options.dump_log {
        println!("{}", log_to_text(simulator.log()));
    }

    let report = SimReport::from_run(
        simulator.players(),
        simulator.log(),
        simulator.stop_reason(),
        simulator.days_simulated(),
    );
    println!("{}", report.to_text());

    if options.save_json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, report.to_json()) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => eprintln!("Error: could not write JSON report: {}", e),
        }
    }

    cleanup(&generated);
}

/// Removes generated sample files, if any.
fn cleanup(generated: &Option<levelsim::sample_data::SampleFiles>) {
    if let Some(files) = generated {
        for path in [&files.items, &files.levels, &files.players] {
            let _ = std::fs::remove_file(path);
        }
        println!("Cleaned up generated CSV files.");
    }
}

fn parse_args(args: &[String]) -> CliOptions {
    let mut options = CliOptions {
        config: SimConfig::default(),
        data_dir: None,
        dump_log: false,
        save_json: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-l" | "--target" => {
                if i + 1 < args.len() {
                    options.config.target_level = args[i + 1].parse().unwrap_or(54);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    options.config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-d" | "--days" => {
                if i + 1 < args.len() {
                    options.config.max_days = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--data-dir" => {
                if i + 1 < args.len() {
                    options.data_dir = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--log" => {
                options.dump_log = true;
            }
            "--json" => {
                options.save_json = true;
            }
            "-v" | "--verbose" => {
                options.config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    options
}

fn print_help() {
    println!("Level Economy Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -l, --target <L>    Target level index (default: 54)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    -d, --days <D>      Safety cap on simulated days (default: none)");
    println!("    --data-dir <DIR>    Load items/levels/players CSVs from DIR");
    println!("                        instead of generating sample data");
    println!("    --log               Print the per-attempt log");
    println!("    --json              Save a JSON report");
    println!("    -v, --verbose       Per-day trace output");
    println!("    -h, --help          Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run                        # Default sample run");
    println!("    cargo run -- -l 20 --seed 42     # Reproducible");
    println!("    cargo run -- --log --json        # Full output");
}
