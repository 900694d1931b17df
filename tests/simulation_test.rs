//! End-to-end simulation tests over the generated sample data set.
//!
//! These run the full pipeline (sample CSVs -> loader -> engine -> report)
//! and assert the run-level invariants: monotone progression, budget safety,
//! and seed determinism.

use levelsim::config::SimConfig;
use levelsim::engine::{Simulator, StopReason};
use levelsim::loader::{load_simulation_data, SimData};
use levelsim::report::{log_to_text, SimReport};
use levelsim::sample_data::{default_inventory, write_sample_csvs};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;
use std::fs;

/// Generates the sample CSVs in a scratch directory, loads them, cleans up.
fn load_sample_data(tag: &str) -> SimData {
    let dir = std::env::temp_dir().join(format!("levelsim_it_{}_{}", tag, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let files = write_sample_csvs(&dir).unwrap();
    let data = load_simulation_data(&files.items, &files.levels, &files.players, &default_inventory())
        .unwrap();
    fs::remove_dir_all(&dir).ok();
    data
}

fn silent(target_level: usize, seed: u64) -> SimConfig {
    SimConfig {
        target_level,
        seed: Some(seed),
        max_days: Some(365),
        verbosity: 0,
    }
}

#[test]
fn test_all_sample_players_reach_a_modest_target() {
    let data = load_sample_data("reach");
    let config = silent(20, 42);
    let mut sim = Simulator::new(data.players, data.levels, data.catalog);
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    sim.run(&config, &mut rng);

    assert_eq!(sim.stop_reason(), Some(StopReason::TargetReached));
    for player in sim.players() {
        assert!(player.current_level >= 20, "{} fell short", player.player_id);
        assert!(
            player.days_to_reach_target.is_some(),
            "{} has no days-to-target",
            player.player_id
        );
    }
}

#[test]
fn test_log_invariants_hold_across_a_full_run() {
    let data = load_sample_data("invariants");
    let budget = data.players[0].initial_playtime;
    let config = silent(54, 7);
    let mut sim = Simulator::new(data.players, data.levels, data.catalog);
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let log = sim.run(&config, &mut rng).to_vec();
    assert!(!log.is_empty());

    let mut last_day: HashMap<&str, u32> = HashMap::new();
    let mut last_level: HashMap<&str, u32> = HashMap::new();
    let mut last_coins: HashMap<&str, u64> = HashMap::new();

    for record in &log {
        let id = record.player_id.as_str();

        // Days never run backwards for a player.
        let day = last_day.entry(id).or_insert(record.day);
        assert!(record.day >= *day);
        *day = record.day;

        // Each committed attempt advances the player by exactly one level
        // position, so logged level ids strictly increase per player.
        if let Some(prev) = last_level.get(id) {
            assert!(record.level_id > *prev, "level ids must increase per player");
        }
        last_level.insert(id, record.level_id);

        // The budget before the attempt covered its cost and never exceeds
        // the daily allotment.
        let before = record.playtime_left + record.playtime_cost;
        assert!(before <= budget, "pre-attempt budget above the allotment");

        // Coins only ever go up.
        if let Some(prev) = last_coins.get(id) {
            assert!(record.total_coins >= *prev, "coins must be monotone");
        }
        last_coins.insert(id, record.total_coins);

        assert!(record.struggle_score >= 0.0);
    }
}

#[test]
fn test_same_seed_gives_byte_identical_logs_and_reports() {
    let run = || {
        let data = load_sample_data("determinism");
        let config = silent(30, 4242);
        let mut sim = Simulator::new(data.players, data.levels, data.catalog);
        let mut rng = ChaCha8Rng::seed_from_u64(4242);
        sim.run(&config, &mut rng);
        let report = SimReport::from_run(
            sim.players(),
            sim.log(),
            sim.stop_reason(),
            sim.days_simulated(),
        );
        (log_to_text(sim.log()), report.to_json())
    };

    let (log_a, report_a) = run();
    let (log_b, report_b) = run();

    assert!(!log_a.is_empty());
    assert_eq!(log_a, log_b, "seeded logs must be byte-identical");
    assert_eq!(report_a, report_b, "seeded reports must be byte-identical");
}

#[test]
fn test_different_seeds_diverge() {
    let run = |seed: u64| {
        let data = load_sample_data("diverge");
        let config = silent(30, seed);
        let mut sim = Simulator::new(data.players, data.levels, data.catalog);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        sim.run(&config, &mut rng);
        log_to_text(sim.log())
    };

    // Booster usage rolls make some attempt in a 30-level run differ.
    assert_ne!(run(1), run(2));
}

#[test]
fn test_target_zero_returns_empty_log() {
    let data = load_sample_data("target_zero");
    let config = silent(0, 1);
    let mut sim = Simulator::new(data.players, data.levels, data.catalog);
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let log = sim.run(&config, &mut rng);

    assert!(log.is_empty());
    assert_eq!(sim.stop_reason(), Some(StopReason::TargetReached));
}

#[test]
fn test_target_beyond_table_reports_exhaustion() {
    // 100 sample levels, target 150: every player clears the table and the
    // run ends with the explicit exhaustion reason, days-to-target unset.
    let data = load_sample_data("exhaustion");
    let config = SimConfig {
        target_level: 150,
        seed: Some(9),
        max_days: None,
        verbosity: 0,
    };
    let mut sim = Simulator::new(data.players, data.levels, data.catalog);
    let mut rng = ChaCha8Rng::seed_from_u64(9);

    sim.run(&config, &mut rng);

    assert_eq!(sim.stop_reason(), Some(StopReason::LevelsExhausted));
    for player in sim.players() {
        assert_eq!(player.current_level, 100);
        assert_eq!(player.days_to_reach_target, None);
    }
}

#[test]
fn test_report_covers_every_player() {
    let data = load_sample_data("report");
    let config = silent(10, 64);
    let mut sim = Simulator::new(data.players, data.levels, data.catalog);
    let mut rng = ChaCha8Rng::seed_from_u64(64);

    sim.run(&config, &mut rng);
    let report = SimReport::from_run(
        sim.players(),
        sim.log(),
        sim.stop_reason(),
        sim.days_simulated(),
    );

    assert_eq!(report.players.len(), 3);
    let text = report.to_text();
    for id in ["Frugal_Expert", "Average_Joe", "Rich_Spender"] {
        assert!(text.contains(id), "summary must mention {}", id);
    }
    assert_eq!(
        report.total_attempts,
        sim.log().len(),
        "report attempt total must match the log"
    );
}
