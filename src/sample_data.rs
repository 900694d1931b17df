//! Generation of sample input CSVs for demo runs and tests.

use crate::constants::{
    SAMPLE_BASE_COIN_REWARD, SAMPLE_BASE_DURATION, SAMPLE_COIN_REWARD_PER_LEVEL,
    SAMPLE_DAILY_BUDGET, SAMPLE_DURATION_PER_LEVEL, SAMPLE_LEVEL_COUNT,
};
use crate::player::Inventory;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Paths of the three generated files.
pub struct SampleFiles {
    pub items: PathBuf,
    pub levels: PathBuf,
    pub players: PathBuf,
}

/// Writes items.csv, levels.csv, and players.csv into `dir`.
///
/// The level table ramps duration and difficulty linearly, pays out coins
/// every level, and adds one Speedy Time booster every fifth level.
pub fn write_sample_csvs(dir: &Path) -> io::Result<SampleFiles> {
    let files = SampleFiles {
        items: dir.join("items.csv"),
        levels: dir.join("levels.csv"),
        players: dir.join("players.csv"),
    };

    let items_csv = "item_name,item_type,price,effectiveness\n\
                     coins,currency,1,0.0\n\
                     Speedy Time,booster,50,0.2\n\
                     Mega Clear,booster,75,0.35\n";
    fs::write(&files.items, items_csv)?;

    let mut levels_csv = String::from(
        "level_id,base_duration,difficulty,reward_1_name,reward_1_amount,reward_2_name,reward_2_amount\n",
    );
    for i in 1..=SAMPLE_LEVEL_COUNT {
        let duration = SAMPLE_BASE_DURATION + i * SAMPLE_DURATION_PER_LEVEL;
        let difficulty = 0.1 + (f64::from(i) / 100.0) * 0.8;
        let coins = SAMPLE_BASE_COIN_REWARD + u64::from(i) * SAMPLE_COIN_REWARD_PER_LEVEL;
        if i % 5 == 0 {
            levels_csv.push_str(&format!(
                "{},{},{},coins,{},Speedy Time,1\n",
                i, duration, difficulty, coins
            ));
        } else {
            levels_csv.push_str(&format!("{},{},{},coins,{},,\n", i, duration, difficulty, coins));
        }
    }
    fs::write(&files.levels, levels_csv)?;

    let players_csv = format!(
        "player_id,skill_potential,booster_tendency,daily_playtime_budget\n\
         Frugal_Expert,0.8,0.1,{b}\n\
         Average_Joe,0.5,0.5,{b}\n\
         Rich_Spender,0.2,0.9,{b}\n",
        b = SAMPLE_DAILY_BUDGET
    );
    fs::write(&files.players, players_csv)?;

    Ok(files)
}

/// The starting inventory every sample player is seeded with.
pub fn default_inventory() -> Inventory {
    let mut inventory = Inventory {
        coins: 100,
        boosters: Default::default(),
    };
    inventory.boosters.insert("Speedy Time".to_string(), 3);
    inventory.boosters.insert("Mega Clear".to_string(), 1);
    inventory
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_simulation_data;

    #[test]
    fn test_sample_files_load_cleanly() {
        let dir = std::env::temp_dir().join(format!("levelsim_sample_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let files = write_sample_csvs(&dir).unwrap();
        let data =
            load_simulation_data(&files.items, &files.levels, &files.players, &default_inventory())
                .unwrap();
        fs::remove_dir_all(&dir).ok();

        assert_eq!(data.catalog.len(), 3);
        assert_eq!(data.levels.len(), 100);
        assert_eq!(data.players.len(), 3);

        // Every fifth level carries a booster reward.
        let fifth = data.levels.get(4).unwrap();
        assert_eq!(fifth.level_id, 5);
        assert_eq!(fifth.rewards.boosters.get("Speedy Time"), Some(&1));
        let fourth = data.levels.get(3).unwrap();
        assert!(fourth.rewards.boosters.is_empty());

        // Players carry the seeded default inventory.
        assert_eq!(data.players[0].inventory.coins, 100);
        assert_eq!(data.players[0].total_boosters(), 4);
    }

    #[test]
    fn test_default_inventory_contents() {
        let inv = default_inventory();
        assert_eq!(inv.coins, 100);
        assert_eq!(inv.boosters["Speedy Time"], 3);
        assert_eq!(inv.boosters["Mega Clear"], 1);
    }
}
