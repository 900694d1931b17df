//! Levelsim - discrete-event economy simulator for a level-based game.
//!
//! Synthetic player archetypes progress through a level table day by day,
//! spending a daily playtime budget, consuming booster items, and earning
//! rewards. Built for balance analysis of level difficulty, duration, and
//! reward pacing against player skill and spending behavior.

pub mod attempt;
pub mod config;
pub mod constants;
pub mod engine;
pub mod items;
pub mod levels;
pub mod loader;
pub mod player;
pub mod report;
pub mod sample_data;
