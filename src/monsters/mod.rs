//! Static monster catalog and level lookups.

pub mod data;

pub use data::{Area, Monster, AREAS, MONSTERS};

use crate::core::constants::LEVELS_PER_AREA;

/// Monster fought on `level`. Levels past the end of the catalog wrap around.
pub fn level_to_monster(level: u32) -> &'static Monster {
    let index = (level.max(1) - 1) as usize % MONSTERS.len();
    &MONSTERS[index]
}

/// Map area index for `level`: two consecutive levels share an area.
pub fn area_index_for_level(level: u32) -> u32 {
    (level.max(1) - 1) / LEVELS_PER_AREA
}

/// Area shown on the map for an area index, wrapping like the monster list.
pub fn area_for_index(index: u32) -> &'static Area {
    &AREAS[index as usize % AREAS.len()]
}

/// Looks up the area a monster belongs to.
pub fn area_of(monster: &Monster) -> Option<&'static Area> {
    AREAS.iter().find(|a| a.id == monster.area)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_to_monster_wraps() {
        assert_eq!(level_to_monster(1), &MONSTERS[0]);
        assert_eq!(level_to_monster(10), &MONSTERS[9]);
        assert_eq!(level_to_monster(11), &MONSTERS[0]);
        assert_eq!(level_to_monster(23), &MONSTERS[2]);
    }

    #[test]
    fn test_area_index_every_two_levels() {
        assert_eq!(area_index_for_level(1), 0);
        assert_eq!(area_index_for_level(2), 0);
        assert_eq!(area_index_for_level(3), 1);
        assert_eq!(area_index_for_level(4), 1);
        assert_eq!(area_index_for_level(11), 5);
    }

    #[test]
    fn test_catalog_pairs_share_an_area() {
        for (i, pair) in MONSTERS.chunks(2).enumerate() {
            let area = area_for_index(i as u32);
            assert!(pair.iter().all(|m| m.area == area.id));
        }
    }

    #[test]
    fn test_every_monster_has_known_area_and_health() {
        for monster in MONSTERS.iter() {
            assert!(area_of(monster).is_some(), "{}", monster.display_name);
            assert!(monster.max_health > 0);
        }
    }

    #[test]
    fn test_area_for_index_wraps() {
        assert_eq!(area_for_index(5).id, "candyland");
        assert_eq!(area_for_index(4).id, "ultimate_arena");
    }
}
