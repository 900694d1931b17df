//! The day-by-day progression engine.
//!
//! Drives every player through the level table one simulated day at a time,
//! invoking the attempt model, committing attempts against the daily budget,
//! and appending one log record per committed attempt. All randomness comes
//! from the injected rng, so a fixed seed reproduces the exact log.

use crate::attempt::{cheapest_possible_cost, simulate_attempt};
use crate::config::SimConfig;
use crate::items::ItemCatalog;
use crate::levels::LevelTable;
use crate::player::Player;
use rand::Rng;
use serde::Serialize;

/// One committed level attempt. Rejected attempts (insufficient budget for
/// the rolled cost) are not logged; they end the player's day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttemptRecord {
    pub day: u32,
    pub player_id: String,
    pub level_id: u32,
    pub struggle_score: f64,
    pub boosters_used: u32,
    pub playtime_cost: u32,
    /// Budget remaining after this attempt was deducted.
    pub playtime_left: u32,
    /// Running coin total after rewards were merged.
    pub total_coins: u64,
    /// Running booster unit total after rewards were merged.
    pub total_boosters: u32,
}

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StopReason {
    /// Every player reached the target level.
    TargetReached,
    /// Every still-active player either ran out of levels before the target
    /// or can never afford their next level, even with best-case boosters.
    LevelsExhausted,
    /// The configured day cap cut the run short.
    DayCapReached,
    /// No players or no levels were loaded; the run was a no-op.
    NoData,
}

/// The progression engine: owns the players, the level table, the catalog,
/// and the log of committed attempts.
pub struct Simulator {
    players: Vec<Player>,
    levels: LevelTable,
    catalog: ItemCatalog,
    log: Vec<AttemptRecord>,
    stop_reason: Option<StopReason>,
    days_simulated: u32,
}

impl Simulator {
    pub fn new(players: Vec<Player>, levels: LevelTable, catalog: ItemCatalog) -> Self {
        Self {
            players,
            levels,
            catalog,
            log: Vec::new(),
            stop_reason: None,
            days_simulated: 0,
        }
    }

    /// Runs the simulation until every player reaches the target level, all
    /// remaining players exhaust the level table, or the optional day cap
    /// fires. Returns the ordered log of committed attempts (empty when no
    /// data was loaded).
    pub fn run(&mut self, config: &SimConfig, rng: &mut impl Rng) -> &[AttemptRecord] {
        self.log.clear();
        self.days_simulated = 0;
        self.stop_reason = None;

        if self.players.is_empty() || self.levels.is_empty() {
            self.stop_reason = Some(StopReason::NoData);
            return &self.log;
        }

        let target = config.target_level;
        let mut day: u32 = 0;

        while self.players.iter().any(|p| p.current_level < target) {
            if let Some(cap) = config.max_days {
                if day >= cap {
                    self.stop_reason = Some(StopReason::DayCapReached);
                    break;
                }
            }
            day += 1;
            self.days_simulated = day;

            if config.verbosity >= 2 {
                println!("==================== DAY {} ====================", day);
            }

            // Active players who have run out of content, or whose full daily
            // allotment cannot cover even a best-case roll on their next
            // level, can never advance. Once that describes all of them, the
            // run can only spin.
            let all_exhausted = self
                .players
                .iter()
                .filter(|p| p.current_level < target)
                .all(|p| match self.levels.get(p.current_level) {
                    Some(level) => {
                        p.initial_playtime < cheapest_possible_cost(p, level, &self.catalog)
                    }
                    None => true,
                });
            if all_exhausted {
                self.stop_reason = Some(StopReason::LevelsExhausted);
                if config.verbosity >= 1 {
                    println!(
                        "[STOP] All players have run out of available levels before reaching the target."
                    );
                }
                break;
            }

            let Self {
                players,
                levels,
                catalog,
                log,
                ..
            } = self;

            for player in players.iter_mut() {
                if player.current_level >= target {
                    continue;
                }
                player.reset_daily_playtime();

                if config.verbosity >= 2 {
                    println!(
                        "[SIMULATING] Player: {} (Target: Lv.{})",
                        player.player_id, target
                    );
                }

                while player.daily_playtime_budget > 0
                    && player.current_level < target
                    && player.current_level < levels.len()
                {
                    // Index is bounded by the loop condition.
                    let Some(level) = levels.get(player.current_level) else {
                        break;
                    };

                    let outcome = simulate_attempt(player, level, catalog, rng);
                    if player.daily_playtime_budget < outcome.playtime_cost {
                        // Not enough budget left; the attempt is not taken and
                        // the day ends with no partial consumption of time.
                        break;
                    }

                    player.daily_playtime_budget -= outcome.playtime_cost;
                    player.add_rewards(&level.rewards);
                    player.current_level += 1;
                    if player.current_level == target && player.days_to_reach_target.is_none() {
                        player.days_to_reach_target = Some(day);
                    }

                    log.push(AttemptRecord {
                        day,
                        player_id: player.player_id.clone(),
                        level_id: level.level_id,
                        struggle_score: outcome.struggle_score,
                        boosters_used: outcome.boosters_used,
                        playtime_cost: outcome.playtime_cost,
                        playtime_left: player.daily_playtime_budget,
                        total_coins: player.inventory.coins,
                        total_boosters: player.total_boosters(),
                    });
                }
            }
        }

        if self.stop_reason.is_none() {
            self.stop_reason = Some(StopReason::TargetReached);
        }
        &self.log
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn log(&self) -> &[AttemptRecord] {
        &self.log
    }

    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop_reason
    }

    pub fn days_simulated(&self) -> u32 {
        self.days_simulated
    }
}
