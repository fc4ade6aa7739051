// Persistence
pub const SAVE_KEY: &str = "earlyHeroGame";
pub const CONFIG_FILE: &str = "config.json";
pub const LOG_FILE: &str = "early-hero.log";
pub const DATA_DIR_NAME: &str = ".early-hero";

// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 1000;
pub const INPUT_POLL_MS: u64 = 50;

// Daily schedule (local time of day)
pub const DEADLINE_HOUR: u32 = 7;
pub const DEADLINE_MINUTE: u32 = 45;
pub const BONUS_CUTOFF_HOUR: u32 = 7;
pub const BONUS_CUTOFF_MINUTE: u32 = 30;
pub const WARNING_WINDOW_MINUTES: u32 = 30;

// Damage
pub const QUEST_DAMAGE: u32 = 1;
pub const DOOR_BONUS_DAMAGE: u32 = 2;

// Progression
pub const STARTING_LEVEL: u32 = 1;
pub const LEVELS_PER_AREA: u32 = 2;
pub const AREA_UNLOCK_STREAK: u32 = 7;
pub const MONSTER_MAX_HEALTH: u32 = 5;
