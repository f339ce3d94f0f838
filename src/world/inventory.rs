//! Player inventories and the drop-slot ring.
//!
//! Inventories are three addressable slots; the use-slot actions name the
//! slot directly. Discarded items land in a fixed arena of six drop slots
//! allocated round-robin. The cursor never searches for a free slot, so
//! a seventh drop reuses the oldest marker and whatever it still held is
//! lost from tracking.

use serde::{Deserialize, Serialize};

use crate::catalog::Item;
use crate::core::INVENTORY_SLOTS;

use super::grid::Position;

/// Number of drop slots in the ring.
pub const DROP_SLOT_COUNT: usize = 6;

/// Marker characters for the drop slots, in ring order.
pub const DROP_MARKERS: [u8; DROP_SLOT_COUNT] = [b'9', b'8', b'7', b'6', b'5', b'4'];

/// A player's three-slot inventory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    slots: [Option<Item>; INVENTORY_SLOTS],
}

impl Inventory {
    /// Create an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The item in a slot.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<Item> {
        self.slots[slot]
    }

    /// Put an item in a slot, returning the previous occupant.
    pub fn put(&mut self, slot: usize, item: Item) -> Option<Item> {
        self.slots[slot].replace(item)
    }

    /// Empty a slot, returning its occupant.
    pub fn take(&mut self, slot: usize) -> Option<Item> {
        self.slots[slot].take()
    }

    /// The slot contents as display bytes (`b' '` for empty).
    #[must_use]
    pub fn symbols(&self) -> [u8; INVENTORY_SLOTS] {
        std::array::from_fn(|slot| self.slots[slot].map_or(b' ', Item::symbol))
    }
}

/// One slot of the drop ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropSlot {
    position: Position,
    item: Option<Item>,
}

impl DropSlot {
    const fn empty() -> Self {
        Self {
            position: Position::new(0, 0),
            item: None,
        }
    }
}

/// The bounded ring of drop slots, allocated round-robin.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropRing {
    slots: [DropSlot; DROP_SLOT_COUNT],
    cursor: usize,
}

impl DropRing {
    /// Create an empty ring with the cursor at the first slot.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: [DropSlot::empty(); DROP_SLOT_COUNT],
            cursor: 0,
        }
    }

    /// Place an item at a position in the next ring slot, advancing the
    /// cursor. Returns the marker character of the slot used.
    pub fn fill_next(&mut self, position: Position, item: Item) -> u8 {
        let index = self.cursor;
        self.cursor = (self.cursor + 1) % DROP_SLOT_COUNT;
        self.slots[index] = DropSlot {
            position,
            item: Some(item),
        };
        DROP_MARKERS[index]
    }

    /// The occupied slot at a position, if any.
    #[must_use]
    pub fn slot_at(&self, position: Position) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.item.is_some() && slot.position == position)
    }

    /// Take the item out of a slot, hiding its marker.
    pub fn take(&mut self, index: usize) -> Option<Item> {
        self.slots[index].item.take()
    }

    /// Iterate over occupied slots as (marker, position, item), in ring
    /// order.
    pub fn occupied(&self) -> impl Iterator<Item = (u8, Position, Item)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.item.map(|item| (DROP_MARKERS[index], slot.position, item)))
    }
}

impl Default for DropRing {
    fn default() -> Self {
        Self::new()
    }
}
