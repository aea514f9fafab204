//! Fixed-capacity slot inventory.
//!
//! Stackable items (potions, gold) merge into an existing stack with the same
//! type and value until the stack is full; everything else takes the first
//! empty slot. A full inventory rejects the item and stays untouched.

use super::item::{ItemData, ItemType};

/// Slot count of a fresh inventory.
pub const DEFAULT_CAPACITY: usize = 20;

/// Largest quantity a single slot holds.
pub const MAX_STACK: u32 = 99;

/// One occupied slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemStack {
    pub item: ItemData,
    pub quantity: u32,
}

impl ItemStack {
    /// The item data of the stack (what a caller of `get_item` acts on).
    pub fn data(&self) -> ItemData {
        self.item
    }

    fn accepts(&self, item: &ItemData) -> bool {
        self.item == *item && item.item_type.is_stackable() && self.quantity < MAX_STACK
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    slots: Vec<Option<ItemStack>>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl Inventory {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Try to store one `item`. Returns `false` when there is no room.
    pub fn add_item(&mut self, item: ItemData) -> bool {
        if let Some(stack) = self.slots.iter_mut().flatten().find(|s| s.accepts(&item)) {
            stack.quantity += 1;
            return true;
        }

        match self.slots.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(ItemStack { item, quantity: 1 });
                true
            }
            None => false,
        }
    }

    /// Stack in `slot`, `None` if empty or out of range.
    pub fn get_item(&self, slot: usize) -> Option<&ItemStack> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    /// Remove up to `count` items from `slot`, clearing it at zero.
    /// Returns how many were removed.
    pub fn remove_item(&mut self, slot: usize, count: u32) -> u32 {
        let Some(entry) = self.slots.get_mut(slot) else {
            return 0;
        };
        let Some(stack) = entry.as_mut() else {
            return 0;
        };

        let removed = count.min(stack.quantity);
        stack.quantity -= removed;
        if stack.quantity == 0 {
            *entry = None;
        }
        removed
    }

    pub fn used_slots(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.used_slots() == self.capacity()
    }

    /// Sum of quantities of one item type across all slots.
    pub fn total_quantity(&self, item_type: ItemType) -> u32 {
        self.stacks()
            .filter(|s| s.item.item_type == item_type)
            .map(|s| s.quantity)
            .sum()
    }

    /// Total gold value held.
    pub fn gold(&self) -> u32 {
        self.stacks()
            .filter(|s| s.item.item_type == ItemType::Gold)
            .map(|s| s.item.value * s.quantity)
            .sum()
    }

    pub fn stacks(&self) -> impl Iterator<Item = &ItemStack> {
        self.slots.iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn potion() -> ItemData {
        ItemData::new(ItemType::HealthPotion, 25)
    }

    #[test]
    fn stackable_items_share_a_slot() {
        let mut inventory = Inventory::new(4);
        assert!(inventory.add_item(potion()));
        assert!(inventory.add_item(potion()));

        assert_eq!(inventory.used_slots(), 1);
        assert_eq!(inventory.get_item(0).map(|s| s.quantity), Some(2));
    }

    #[test]
    fn gear_never_stacks() {
        let mut inventory = Inventory::new(4);
        let sword = ItemData::new(ItemType::Weapon, 7);
        inventory.add_item(sword);
        inventory.add_item(sword);

        assert_eq!(inventory.used_slots(), 2);
    }

    #[test]
    fn full_inventory_rejects_and_is_unchanged() {
        let mut inventory = Inventory::new(2);
        inventory.add_item(ItemData::new(ItemType::Armor, 1));
        inventory.add_item(ItemData::new(ItemType::Weapon, 1));
        let before = inventory.clone();

        assert!(!inventory.add_item(ItemData::new(ItemType::Weapon, 2)));
        assert_eq!(inventory, before);
    }

    #[test]
    fn full_stack_spills_into_new_slot() {
        let mut inventory = Inventory::new(3);
        for _ in 0..MAX_STACK + 1 {
            assert!(inventory.add_item(potion()));
        }

        assert_eq!(inventory.used_slots(), 2);
        assert_eq!(inventory.total_quantity(ItemType::HealthPotion), MAX_STACK + 1);
    }

    #[test]
    fn remove_clears_slot_at_zero() {
        let mut inventory = Inventory::new(2);
        inventory.add_item(potion());
        inventory.add_item(potion());

        assert_eq!(inventory.remove_item(0, 1), 1);
        assert_eq!(inventory.get_item(0).map(|s| s.quantity), Some(1));
        assert_eq!(inventory.remove_item(0, 5), 1);
        assert!(inventory.get_item(0).is_none());
        assert_eq!(inventory.remove_item(9, 1), 0);
    }

    #[test]
    fn gold_totals_value_times_quantity() {
        let mut inventory = Inventory::new(3);
        inventory.add_item(ItemData::new(ItemType::Gold, 10));
        inventory.add_item(ItemData::new(ItemType::Gold, 10));
        inventory.add_item(ItemData::new(ItemType::Gold, 5));

        assert_eq!(inventory.gold(), 25);
    }
}
