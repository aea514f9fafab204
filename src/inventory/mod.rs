//! Inventory module - item definitions and slot storage.

mod storage;
mod item;

pub use storage::{Inventory, ItemStack, DEFAULT_CAPACITY, MAX_STACK};
pub use item::{ItemData, ItemType};
