//! Level definitions, reward bundles, and the ordered level table.

use crate::items::{ItemCatalog, ItemKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregated rewards granted on completing a level: a coin total plus
/// per-booster-type counts.
///
/// Booster counts live in a `BTreeMap` so iteration order is deterministic
/// everywhere rewards flow into player inventories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RewardBundle {
    pub coins: u64,
    pub boosters: BTreeMap<String, u32>,
}

impl RewardBundle {
    /// Aggregates an ordered list of (item name, amount) pairs against the
    /// catalog: currency items accumulate into `coins`, booster items into
    /// per-name counts. Names the catalog does not know are silently dropped.
    pub fn from_pairs(pairs: &[(String, u32)], catalog: &ItemCatalog) -> Self {
        let mut bundle = RewardBundle::default();
        for (name, amount) in pairs {
            match catalog.get(name).map(|i| i.kind) {
                Some(ItemKind::Currency) => bundle.coins += u64::from(*amount),
                Some(ItemKind::Booster) => {
                    *bundle.boosters.entry(name.clone()).or_insert(0) += amount;
                }
                None => {} // unknown item name: ignored by design
            }
        }
        bundle
    }
}

/// A single level: how long it takes, how hard it is, what it pays out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub level_id: u32,
    pub base_duration: u32,
    pub difficulty: f64,
    pub rewards: RewardBundle,
}

/// The full level sequence, sorted ascending by `level_id`.
///
/// The engine traverses levels by position (a player's `current_level` is an
/// index into this table), not by matching id values.
#[derive(Debug, Clone, Default)]
pub struct LevelTable {
    levels: Vec<Level>,
}

impl LevelTable {
    pub fn from_levels(mut levels: Vec<Level>) -> Self {
        levels.sort_by_key(|lvl| lvl.level_id);
        Self { levels }
    }

    pub fn get(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::Item;

    fn test_catalog() -> ItemCatalog {
        ItemCatalog::from_items(vec![
            Item {
                name: "coins".to_string(),
                kind: ItemKind::Currency,
                price: 1,
                effectiveness: 0.0,
            },
            Item {
                name: "Speedy Time".to_string(),
                kind: ItemKind::Booster,
                price: 50,
                effectiveness: 0.2,
            },
        ])
    }

    fn pairs(raw: &[(&str, u32)]) -> Vec<(String, u32)> {
        raw.iter().map(|(n, a)| (n.to_string(), *a)).collect()
    }

    #[test]
    fn test_bundle_aggregates_by_kind() {
        let bundle = RewardBundle::from_pairs(
            &pairs(&[("coins", 10), ("Speedy Time", 1), ("coins", 5)]),
            &test_catalog(),
        );

        assert_eq!(bundle.coins, 15);
        assert_eq!(bundle.boosters.get("Speedy Time"), Some(&1));
    }

    #[test]
    fn test_bundle_ignores_unknown_names() {
        let bundle = RewardBundle::from_pairs(
            &pairs(&[("coins", 10), ("Mystery Box", 99)]),
            &test_catalog(),
        );

        assert_eq!(bundle.coins, 10);
        assert!(bundle.boosters.is_empty());
    }

    #[test]
    fn test_repeated_booster_pairs_accumulate() {
        let bundle = RewardBundle::from_pairs(
            &pairs(&[("Speedy Time", 1), ("Speedy Time", 2)]),
            &test_catalog(),
        );

        assert_eq!(bundle.boosters.get("Speedy Time"), Some(&3));
    }

    #[test]
    fn test_table_sorts_by_level_id() {
        let mk = |id: u32| Level {
            level_id: id,
            base_duration: 60,
            difficulty: 0.5,
            rewards: RewardBundle::default(),
        };
        let table = LevelTable::from_levels(vec![mk(30), mk(10), mk(20)]);

        assert_eq!(table.len(), 3);
        assert_eq!(table.get(0).unwrap().level_id, 10);
        assert_eq!(table.get(2).unwrap().level_id, 30);
        assert!(table.get(3).is_none());
    }
}
