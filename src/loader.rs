//! CSV ingestion of item, level, and player definitions.
//!
//! The files are plain unquoted comma-separated tables with a header row.
//! Missing files and missing columns abort the load with a diagnostic; the
//! caller is expected to degrade to a no-op run. Item names unknown to the
//! catalog are ignored wherever they appear in reward columns.

use crate::items::{Item, ItemCatalog, ItemKind};
use crate::levels::{Level, LevelTable, RewardBundle};
use crate::player::{Inventory, Player};
use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

/// Everything a simulation run needs, fully parsed.
pub struct SimData {
    pub catalog: ItemCatalog,
    pub levels: LevelTable,
    pub players: Vec<Player>,
}

/// Loads the three CSV files and assembles catalog, level table, and players.
/// Every player receives a deep copy of `default_inventory`.
pub fn load_simulation_data(
    items_path: &Path,
    levels_path: &Path,
    players_path: &Path,
    default_inventory: &Inventory,
) -> io::Result<SimData> {
    let catalog = load_items(items_path)?;
    let levels = load_levels(levels_path, &catalog)?;
    let players = load_players(players_path, default_inventory)?;

    Ok(SimData {
        catalog,
        levels,
        players,
    })
}

fn load_items(path: &Path) -> io::Result<ItemCatalog> {
    let table = CsvTable::read(path)?;
    let name_col = table.column("item_name")?;
    let kind_col = table.column("item_type")?;
    let price_col = table.column("price")?;
    let eff_col = table.column("effectiveness")?;

    let mut items = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let name = table.cell(row, name_col);
        let kind_text = table.cell(row, kind_col);
        let kind = ItemKind::parse(kind_text).ok_or_else(|| {
            bad_data(path, &format!("unknown item_type '{}' for '{}'", kind_text, name))
        })?;
        items.push(Item {
            name: name.to_string(),
            kind,
            price: parse_number(path, "price", table.cell(row, price_col))?,
            effectiveness: parse_number(path, "effectiveness", table.cell(row, eff_col))?,
        });
    }
    Ok(ItemCatalog::from_items(items))
}

fn load_levels(path: &Path, catalog: &ItemCatalog) -> io::Result<LevelTable> {
    let table = CsvTable::read(path)?;
    let id_col = table.column("level_id")?;
    let duration_col = table.column("base_duration")?;
    let difficulty_col = table.column("difficulty")?;

    let mut levels = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let pairs = parse_reward_pairs(path, &table, row)?;
        levels.push(Level {
            level_id: parse_number(path, "level_id", table.cell(row, id_col))?,
            base_duration: parse_number(path, "base_duration", table.cell(row, duration_col))?,
            difficulty: parse_number(path, "difficulty", table.cell(row, difficulty_col))?,
            rewards: RewardBundle::from_pairs(&pairs, catalog),
        });
    }
    Ok(LevelTable::from_levels(levels))
}

/// Collects the variable-width `reward_{i}_name` / `reward_{i}_amount` column
/// pairs for one row, in order, stopping at the first empty name cell.
fn parse_reward_pairs(
    path: &Path,
    table: &CsvTable,
    row: &[String],
) -> io::Result<Vec<(String, u32)>> {
    let mut pairs = Vec::new();
    let mut i = 1;
    loop {
        let name_col = match table.find_column(&format!("reward_{}_name", i)) {
            Some(col) => col,
            None => break,
        };
        let amount_col = table.column(&format!("reward_{}_amount", i))?;

        let name = table.cell(row, name_col);
        if name.is_empty() {
            break;
        }
        let amount = parse_number(path, &format!("reward_{}_amount", i), table.cell(row, amount_col))?;
        pairs.push((name.to_string(), amount));
        i += 1;
    }
    Ok(pairs)
}

fn load_players(path: &Path, default_inventory: &Inventory) -> io::Result<Vec<Player>> {
    let table = CsvTable::read(path)?;
    let id_col = table.column("player_id")?;
    let skill_col = table.column("skill_potential")?;
    let tendency_col = table.column("booster_tendency")?;
    let budget_col = table.column("daily_playtime_budget")?;

    let mut players = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        players.push(Player::new(
            table.cell(row, id_col).to_string(),
            parse_number(path, "skill_potential", table.cell(row, skill_col))?,
            parse_number(path, "booster_tendency", table.cell(row, tendency_col))?,
            parse_number(path, "daily_playtime_budget", table.cell(row, budget_col))?,
            default_inventory,
        ));
    }
    Ok(players)
}

/// A parsed CSV file: header names plus raw row cells.
struct CsvTable {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CsvTable {
    fn read(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("could not read data file {}: {}", path.display(), e),
            )
        })?;

        let mut lines = text.lines().filter(|l| !l.trim().is_empty());
        let header = match lines.next() {
            Some(line) => split_row(line),
            None => {
                return Err(bad_data(path, "file has no header row"));
            }
        };
        let rows = lines.map(split_row).collect();

        Ok(Self { header, rows })
    }

    fn find_column(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }

    fn column(&self, name: &str) -> io::Result<usize> {
        self.find_column(name)
            .ok_or_else(|| bad_data_owned(format!("required column '{}' is missing", name)))
    }

    fn cell<'a>(&self, row: &'a [String], index: usize) -> &'a str {
        row.get(index).map(String::as_str).unwrap_or("")
    }
}

fn split_row(line: &str) -> Vec<String> {
    line.split(',').map(|cell| cell.trim().to_string()).collect()
}

fn parse_number<T: std::str::FromStr>(path: &Path, column: &str, cell: &str) -> io::Result<T> {
    cell.parse().map_err(|_| {
        bad_data(path, &format!("column '{}' has non-numeric value '{}'", column, cell))
    })
}

fn bad_data(path: &Path, msg: &str) -> io::Error {
    bad_data_owned(format!("{}: {}", path.display(), msg))
}

fn bad_data_owned(msg: String) -> io::Error {
    io::Error::new(ErrorKind::InvalidData, msg)
}
