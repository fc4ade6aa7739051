//! Monster and area definitions.

use crate::core::constants::MONSTER_MAX_HEALTH;

/// A map region shared by two consecutive levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Area {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

/// A daily adversary. Immutable once defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monster {
    /// Id of the [`Area`] this monster lives in.
    pub area: &'static str,
    pub display_name: &'static str,
    pub display_name_secondary: Option<&'static str>,
    pub icon: &'static str,
    pub max_health: u32,
}

pub static AREAS: [Area; 5] = [
    Area {
        id: "candyland",
        name: "Candyland",
        icon: "🍬",
    },
    Area {
        id: "space",
        name: "Outer Space",
        icon: "🚀",
    },
    Area {
        id: "toyfactory",
        name: "Toy Factory",
        icon: "🧸",
    },
    Area {
        id: "sky",
        name: "Storm Sky",
        icon: "☁️",
    },
    Area {
        id: "ultimate_arena",
        name: "Ultimate Arena",
        icon: "🏟️",
    },
];

pub static MONSTERS: [Monster; 10] = [
    // Candyland
    Monster {
        area: "candyland",
        display_name: "Candy Boom Bear",
        display_name_secondary: Some("糖果爆爆熊"),
        icon: "🍭",
        max_health: MONSTER_MAX_HEALTH,
    },
    Monster {
        area: "candyland",
        display_name: "Chocolate Slime",
        display_name_secondary: Some("巧克力史萊姆"),
        icon: "🍫",
        max_health: MONSTER_MAX_HEALTH,
    },
    // Space
    Monster {
        area: "space",
        display_name: "Alien Jelly",
        display_name_secondary: Some("外星果凍怪"),
        icon: "👾",
        max_health: MONSTER_MAX_HEALTH,
    },
    Monster {
        area: "space",
        display_name: "Robo Space Dog",
        display_name_secondary: Some("太空機器狗"),
        icon: "🤖",
        max_health: MONSTER_MAX_HEALTH,
    },
    // Toy factory
    Monster {
        area: "toyfactory",
        display_name: "Runaway Toy Soldier",
        display_name_secondary: Some("失控玩具兵"),
        icon: "🪖",
        max_health: MONSTER_MAX_HEALTH,
    },
    Monster {
        area: "toyfactory",
        display_name: "Spring Clown",
        display_name_secondary: Some("彈簧小丑怪"),
        icon: "🤡",
        max_health: MONSTER_MAX_HEALTH,
    },
    // Sky
    Monster {
        area: "sky",
        display_name: "Thundercloud Warden",
        display_name_secondary: Some("雷雲守護者"),
        icon: "⚡",
        max_health: MONSTER_MAX_HEALTH,
    },
    Monster {
        area: "sky",
        display_name: "Storm Wyvern",
        display_name_secondary: Some("風暴飛龍"),
        icon: "🌪️",
        max_health: MONSTER_MAX_HEALTH,
    },
    // Ultimate arena
    Monster {
        area: "ultimate_arena",
        display_name: "Golden Armored Hero King",
        display_name_secondary: Some("黃金鎧甲勇者王"),
        icon: "🛡️",
        max_health: MONSTER_MAX_HEALTH,
    },
    Monster {
        area: "ultimate_arena",
        display_name: "Cosmic Energy Titan",
        display_name_secondary: Some("宇宙能量巨獸"),
        icon: "💥",
        max_health: MONSTER_MAX_HEALTH,
    },
];
