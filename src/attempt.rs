//! The stochastic model for one player attempting one level.

use crate::constants::MAX_BOOSTERS_PER_ATTEMPT;
use crate::items::ItemCatalog;
use crate::levels::Level;
use crate::player::Player;
use rand::Rng;
use serde::Serialize;

/// Outcome of a single level attempt.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AttemptOutcome {
    /// Time units this attempt would cost. Already rounded up.
    pub playtime_cost: u32,
    /// Requested booster quantity, clamped to what the player held.
    pub boosters_used: u32,
    /// How far the level's difficulty exceeded the player's skill.
    pub struggle_score: f64,
}

/// Simulates one attempt. Mutates nothing on the player except booster
/// inventory (via consumption); committing the attempt is the engine's job.
///
/// - `struggle = max(0, difficulty - skill_potential)`
/// - `use_probability = tendency + struggle * (1 - tendency)`; struggle pushes
///   the probability toward 1 regardless of base tendency.
/// - If boosters are held and the usage roll passes, the quantity (1..=3) is a
///   weighted draw where using exactly k has weight `(1 + struggle)^k`.
/// - `cost = ceil(base_duration * (1 + struggle) * (1 - total_effectiveness))`,
///   clamped at 0 so heavy stacking yields a free attempt, never a refund.
pub fn simulate_attempt(
    player: &mut Player,
    level: &Level,
    catalog: &ItemCatalog,
    rng: &mut impl Rng,
) -> AttemptOutcome {
    let struggle_score = (level.difficulty - player.skill_potential).max(0.0);
    let use_probability =
        player.booster_tendency + struggle_score * (1.0 - player.booster_tendency);

    let mut boosters_to_use = 0;
    if player.has_boosters() && rng.gen::<f64>() < use_probability {
        let chosen = roll_booster_quantity(struggle_score, rng);
        boosters_to_use = chosen.min(player.total_boosters());
    }

    let base_time_cost = f64::from(level.base_duration) * (1.0 + struggle_score);
    let total_effectiveness = if boosters_to_use > 0 {
        player.consume_boosters(boosters_to_use, catalog, rng)
    } else {
        0.0
    };

    let playtime_cost = (base_time_cost * (1.0 - total_effectiveness)).ceil().max(0.0) as u32;

    AttemptOutcome {
        playtime_cost,
        boosters_used: boosters_to_use,
        struggle_score,
    }
}

/// The lowest playtime cost this player could possibly roll on this level.
///
/// Takes the best case: if booster usage is possible at all (positive usage
/// probability and boosters held), assume the top-effectiveness types are
/// consumed, one unit per distinct type up to the per-attempt maximum. Used
/// by the engine to detect players who can never afford their next level:
/// consumption only ever shrinks the inventory, so a player stuck by this
/// measure stays stuck.
pub fn cheapest_possible_cost(player: &Player, level: &Level, catalog: &ItemCatalog) -> u32 {
    let struggle_score = (level.difficulty - player.skill_potential).max(0.0);
    let use_probability =
        player.booster_tendency + struggle_score * (1.0 - player.booster_tendency);
    let base_time_cost = f64::from(level.base_duration) * (1.0 + struggle_score);

    let mut best_effectiveness = 0.0;
    if use_probability > 0.0 && player.has_boosters() {
        let mut effects: Vec<f64> = player
            .inventory
            .boosters
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(name, _)| catalog.booster_effectiveness(name))
            .collect();
        effects.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
        best_effectiveness = effects
            .iter()
            .take(MAX_BOOSTERS_PER_ATTEMPT as usize)
            .sum();
    }

    (base_time_cost * (1.0 - best_effectiveness)).ceil().max(0.0) as u32
}

/// Weighted categorical draw of how many boosters to use at once.
/// Weight for quantity k is `(1 + struggle)^k`, so higher struggle biases
/// toward burning more boosters in a single attempt.
fn roll_booster_quantity(struggle_score: f64, rng: &mut impl Rng) -> u32 {
    let weights: Vec<f64> = (1..=MAX_BOOSTERS_PER_ATTEMPT)
        .map(|k| (1.0 + struggle_score).powi(k as i32))
        .collect();
    let total: f64 = weights.iter().sum();

    let mut roll = rng.gen::<f64>() * total;
    for (i, weight) in weights.iter().enumerate() {
        if roll < *weight {
            return i as u32 + 1;
        }
        roll -= weight;
    }
    MAX_BOOSTERS_PER_ATTEMPT
}
