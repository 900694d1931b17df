// Attempt model constants
pub const MAX_BOOSTERS_PER_ATTEMPT: u32 = 3;

// Default run configuration
pub const DEFAULT_TARGET_LEVEL: usize = 54;

// Sample data generation constants
pub const SAMPLE_LEVEL_COUNT: u32 = 100;
pub const SAMPLE_BASE_DURATION: u32 = 60;
pub const SAMPLE_DURATION_PER_LEVEL: u32 = 5;
pub const SAMPLE_BASE_COIN_REWARD: u64 = 10;
pub const SAMPLE_COIN_REWARD_PER_LEVEL: u64 = 2;
pub const SAMPLE_DAILY_BUDGET: u32 = 1800;
