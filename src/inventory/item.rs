//! Item kinds and the data copied into inventory slots.

use serde::Deserialize;

use crate::textures::keys;

/// Kinds of collectible item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum ItemType {
    HealthPotion,
    ManaPotion,
    Gold,
    Weapon,
    Armor,
}

impl ItemType {
    pub const ALL: [ItemType; 5] = [
        ItemType::HealthPotion,
        ItemType::ManaPotion,
        ItemType::Gold,
        ItemType::Weapon,
        ItemType::Armor,
    ];

    /// Consumables are removed from the stack when used.
    pub fn is_consumable(self) -> bool {
        matches!(self, ItemType::HealthPotion | ItemType::ManaPotion)
    }

    /// Stackable items merge into an existing slot with the same value.
    pub fn is_stackable(self) -> bool {
        matches!(self, ItemType::HealthPotion | ItemType::ManaPotion | ItemType::Gold)
    }

    /// Texture drawn for the item's world pickup.
    pub fn texture_key(self) -> &'static str {
        match self {
            ItemType::HealthPotion => keys::HEALTH_POTION,
            ItemType::ManaPotion => keys::MANA_POTION,
            ItemType::Gold => keys::GOLD_COIN,
            ItemType::Weapon => keys::WEAPON,
            ItemType::Armor => keys::ARMOR,
        }
    }
}

/// An item as it exists in the world or in a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub struct ItemData {
    pub item_type: ItemType,
    /// Heal amount for potions, coin count for gold, power for gear
    pub value: u32,
}

impl ItemData {
    pub fn new(item_type: ItemType, value: u32) -> Self {
        Self { item_type, value }
    }
}
