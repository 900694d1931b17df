//! End-of-run summary report.

use crate::engine::{AttemptRecord, StopReason};
use crate::player::Player;
use serde::Serialize;
use std::collections::BTreeMap;

/// Final state of one player archetype.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerSummary {
    pub player_id: String,
    pub skill_potential: f64,
    pub booster_tendency: f64,
    pub final_level: usize,
    pub days_to_reach_target: Option<u32>,
    pub final_coins: u64,
    /// Held booster types with positive counts. Empty means "none held".
    pub final_boosters: BTreeMap<String, u32>,
    pub attempts_committed: u32,
}

/// Aggregated results of a finished run.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub days_simulated: u32,
    pub total_attempts: usize,
    pub stop_reason: Option<StopReason>,
    pub players: Vec<PlayerSummary>,
}

impl SimReport {
    /// Builds the report from final player states and the attempt log.
    pub fn from_run(
        players: &[Player],
        log: &[AttemptRecord],
        stop_reason: Option<StopReason>,
        days_simulated: u32,
    ) -> Self {
        let mut attempts_by_player: BTreeMap<&str, u32> = BTreeMap::new();
        for record in log {
            *attempts_by_player.entry(record.player_id.as_str()).or_insert(0) += 1;
        }

        let summaries = players
            .iter()
            .map(|p| PlayerSummary {
                player_id: p.player_id.clone(),
                skill_potential: p.skill_potential,
                booster_tendency: p.booster_tendency,
                final_level: p.current_level,
                days_to_reach_target: p.days_to_reach_target,
                final_coins: p.inventory.coins,
                final_boosters: p
                    .inventory
                    .boosters
                    .iter()
                    .filter(|(_, count)| **count > 0)
                    .map(|(name, count)| (name.clone(), *count))
                    .collect(),
                attempts_committed: attempts_by_player
                    .get(p.player_id.as_str())
                    .copied()
                    .unwrap_or(0),
            })
            .collect();

        Self {
            days_simulated,
            total_attempts: log.len(),
            stop_reason,
            players: summaries,
        }
    }

    /// Generate a human-readable text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                FINAL PLAYER INFORMATION SUMMARY\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Days simulated: {}   Committed attempts: {}\n",
            self.days_simulated, self.total_attempts
        ));
        if let Some(reason) = self.stop_reason {
            let text = match reason {
                StopReason::TargetReached => "all players reached the target level",
                StopReason::LevelsExhausted => "level table exhausted before the target",
                StopReason::DayCapReached => "day cap reached",
                StopReason::NoData => "no player or level data loaded",
            };
            report.push_str(&format!("Run ended: {}\n", text));
        }
        report.push('\n');

        for player in &self.players {
            report.push_str(&format!("Player: {}\n", player.player_id));
            report.push_str("  - Archetype Stats:\n");
            report.push_str(&format!(
                "    - Skill Potential: {}\n",
                player.skill_potential
            ));
            report.push_str(&format!(
                "    - Booster Tendency: {}\n",
                player.booster_tendency
            ));
            report.push_str("  - Final State:\n");
            report.push_str(&format!("    - Reached Level: {}\n", player.final_level));
            if let Some(days) = player.days_to_reach_target {
                report.push_str(&format!("    - Days to Reach Target: {}\n", days));
            }
            report.push_str(&format!("    - Final Coins:   {}\n", player.final_coins));
            report.push_str("    - Final Boosters:\n");
            if player.final_boosters.is_empty() {
                report.push_str("      - None\n");
            } else {
                for (name, count) in &player.final_boosters {
                    report.push_str(&format!("      - {}: {}\n", name, count));
                }
            }
            report.push_str(&"-".repeat(30));
            report.push('\n');
        }

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Renders the attempt log as one line per committed attempt, for verbose
/// output or diffing two seeded runs.
pub fn log_to_text(log: &[AttemptRecord]) -> String {
    let mut out = String::new();
    for r in log {
        out.push_str(&format!(
            "day {:>3}  {:<16} lv {:>3}  struggle {:.2}  boosters {}  cost {:>4}  left {:>4}  coins {:>6}  held {}\n",
            r.day,
            r.player_id,
            r.level_id,
            r.struggle_score,
            r.boosters_used,
            r.playtime_cost,
            r.playtime_left,
            r.total_coins,
            r.total_boosters,
        ));
    }
    out
}
