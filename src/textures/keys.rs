//! Texture keys shared by the logic, the generator and the preload scene.

use crate::units::Direction;

pub const ENEMY: &str = "enemy";
pub const WEAPON: &str = "weapon";

pub const ATTACK_EFFECT: &str = "attack-effect";
pub const HIT_EFFECT: &str = "hit-effect";
pub const PICKUP_EFFECT: &str = "pickup-effect";
pub const DROP_EFFECT: &str = "drop-effect";
pub const ITEM_GLOW: &str = "item-glow";

pub const GRASS_TILE: &str = "grass-tile";
pub const STONE_TILE: &str = "stone-tile";
pub const WALL_TILE: &str = "wall-tile";

pub const HEALTH_POTION: &str = "health-potion";
pub const MANA_POTION: &str = "mana-potion";
pub const GOLD_COIN: &str = "gold-coin";
pub const ARMOR: &str = "armor";
pub const ITEM_DEFAULT: &str = "item-default";
pub const ITEM_PLACEHOLDER: &str = "item-placeholder";

const PLAYER_DOWN: [&str; 2] = ["player-down-1", "player-down-2"];
const PLAYER_UP: [&str; 2] = ["player-up-1", "player-up-2"];
const PLAYER_LEFT: [&str; 2] = ["player-left-1", "player-left-2"];
const PLAYER_RIGHT: [&str; 2] = ["player-right-1", "player-right-2"];

/// Walk frame `frame` (1 or 2) for `direction`. Out-of-range frames clamp.
pub fn player_frame(direction: Direction, frame: usize) -> &'static str {
    let frames = match direction {
        Direction::Down => PLAYER_DOWN,
        Direction::Up => PLAYER_UP,
        Direction::Left => PLAYER_LEFT,
        Direction::Right => PLAYER_RIGHT,
    };
    frames[frame.clamp(1, 2) - 1]
}

/// Every key the game expects to exist before play starts, in load order.
pub const EXPECTED: &[&str] = &[
    PLAYER_DOWN[0],
    PLAYER_DOWN[1],
    PLAYER_UP[0],
    PLAYER_UP[1],
    PLAYER_LEFT[0],
    PLAYER_LEFT[1],
    PLAYER_RIGHT[0],
    PLAYER_RIGHT[1],
    ENEMY,
    WEAPON,
    ATTACK_EFFECT,
    HIT_EFFECT,
    PICKUP_EFFECT,
    DROP_EFFECT,
    ITEM_GLOW,
    GRASS_TILE,
    STONE_TILE,
    WALL_TILE,
    HEALTH_POTION,
    MANA_POTION,
    GOLD_COIN,
    ARMOR,
    ITEM_DEFAULT,
    ITEM_PLACEHOLDER,
];

/// Path of the optional image file for `key`, relative to `assets/`.
pub fn asset_path(key: &str) -> String {
    let folder = if key.starts_with("player-") {
        "player"
    } else if key == ENEMY {
        "enemy"
    } else if key.ends_with("-effect") || key == ITEM_GLOW {
        "effects"
    } else if key.ends_with("-tile") {
        "tiles"
    } else {
        "items"
    };
    format!("{folder}/{key}.png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_cover_every_direction() {
        for direction in Direction::ALL {
            let first = player_frame(direction, 1);
            assert!(first.contains(direction.as_str()));
            assert!(first.ends_with("-1"));
            assert!(player_frame(direction, 2).ends_with("-2"));
        }
    }

    #[test]
    fn asset_paths_use_category_folders() {
        assert_eq!(asset_path("player-up-2"), "player/player-up-2.png");
        assert_eq!(asset_path(ENEMY), "enemy/enemy.png");
        assert_eq!(asset_path(ITEM_GLOW), "effects/item-glow.png");
        assert_eq!(asset_path(WALL_TILE), "tiles/wall-tile.png");
        assert_eq!(asset_path(WEAPON), "items/weapon.png");
    }

    #[test]
    fn expected_keys_are_unique() {
        let mut keys = EXPECTED.to_vec();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), EXPECTED.len());
    }
}
