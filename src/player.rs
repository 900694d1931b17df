//! Per-archetype player state: stats, inventory, daily budget, progression.

use crate::items::ItemCatalog;
use crate::levels::RewardBundle;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What a player holds: a coin total and per-booster-type counts.
///
/// `BTreeMap` keeps booster-name iteration deterministic; the only
/// randomness in consumption order comes from the explicit shuffle in
/// [`Player::consume_boosters`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub coins: u64,
    pub boosters: BTreeMap<String, u32>,
}

/// A player archetype and its mutable progression state.
///
/// Created once before a run, mutated by the progression engine every
/// committed attempt and once per simulated day (budget reset).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub player_id: String,
    /// Higher skill means less struggle against a given difficulty.
    pub skill_potential: f64,
    /// Baseline propensity to spend boosters, in [0, 1].
    pub booster_tendency: f64,
    /// Daily allotment the budget resets to each day.
    pub initial_playtime: u32,
    /// Remaining playtime budget for the current day.
    pub daily_playtime_budget: u32,
    pub inventory: Inventory,
    /// Zero-based index into the level table: the level about to be attempted.
    pub current_level: usize,
    /// Day number on which the target level was first reached. Set at most once.
    pub days_to_reach_target: Option<u32>,
}

impl Player {
    /// Creates a player with a deep copy of the supplied starting inventory.
    /// Inventories are never shared between players.
    pub fn new(
        player_id: String,
        skill_potential: f64,
        booster_tendency: f64,
        daily_playtime_budget: u32,
        initial_inventory: &Inventory,
    ) -> Self {
        Self {
            player_id,
            skill_potential,
            booster_tendency,
            initial_playtime: daily_playtime_budget,
            daily_playtime_budget,
            inventory: initial_inventory.clone(),
            current_level: 0,
            days_to_reach_target: None,
        }
    }

    /// Total booster units held across all types.
    pub fn total_boosters(&self) -> u32 {
        self.inventory.boosters.values().sum()
    }

    pub fn has_boosters(&self) -> bool {
        self.total_boosters() > 0
    }

    /// Consumes up to `quantity` booster units and returns the summed
    /// effectiveness of what was actually consumed.
    ///
    /// The set of currently-held booster names (count > 0) is shuffled, then
    /// one unit is decremented per name up to the requested quantity. A
    /// request for K units therefore consumes at most one unit of each
    /// distinct type the player holds.
    pub fn consume_boosters(
        &mut self,
        quantity: u32,
        catalog: &ItemCatalog,
        rng: &mut impl Rng,
    ) -> f64 {
        let mut owned: Vec<String> = self
            .inventory
            .boosters
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(name, _)| name.clone())
            .collect();
        owned.shuffle(rng);

        let mut total_effectiveness = 0.0;
        let mut consumed = 0;
        for name in owned {
            if consumed >= quantity {
                break;
            }
            if let Some(count) = self.inventory.boosters.get_mut(&name) {
                *count -= 1;
            }
            total_effectiveness += catalog.booster_effectiveness(&name);
            consumed += 1;
        }
        total_effectiveness
    }

    /// Merges a level's reward bundle into the inventory.
    pub fn add_rewards(&mut self, rewards: &RewardBundle) {
        self.inventory.coins += rewards.coins;
        for (name, count) in &rewards.boosters {
            *self.inventory.boosters.entry(name.clone()).or_insert(0) += count;
        }
    }

    /// Resets the daily budget to the initial allotment.
    pub fn reset_daily_playtime(&mut self) {
        self.daily_playtime_budget = self.initial_playtime;
    }
}
