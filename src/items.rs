//! Item definitions and the master item catalog.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Whether an item is spendable currency or a consumable booster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Currency,
    Booster,
}

impl ItemKind {
    /// Parses the `item_type` column value. Returns `None` for unknown kinds.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "currency" => Some(ItemKind::Currency),
            "booster" => Some(ItemKind::Booster),
            _ => None,
        }
    }
}

/// A single item type (currency or booster) with its static properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub kind: ItemKind,
    /// Acquisition price. Informational only; the simulation never spends.
    pub price: u32,
    /// Fractional playtime reduction per consumed unit. Meaningful for boosters.
    pub effectiveness: f64,
}

/// Static lookup of item definitions by name.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: HashMap<String, Item>,
}

impl ItemCatalog {
    /// Builds the catalog from an ordered item list.
    ///
    /// Duplicate names resolve last-write-wins: a later row silently replaces
    /// an earlier one.
    pub fn from_items(items: Vec<Item>) -> Self {
        let mut map = HashMap::with_capacity(items.len());
        for item in items {
            map.insert(item.name.clone(), item);
        }
        Self { items: map }
    }

    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.get(name)
    }

    /// Effectiveness of a booster by name, or 0.0 when the name is unknown.
    /// Unknown names are a policy non-error throughout the simulation.
    pub fn booster_effectiveness(&self, name: &str) -> f64 {
        self.items.get(name).map(|i| i.effectiveness).unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
