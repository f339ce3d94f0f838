//! Board entities: the eight item sprites and their seeded placement.
//!
//! Entities are plain data (a kind, a position, a visibility flag) with
//! all interaction rules living in the engine's use-slot handler. An item
//! picked up off the board goes invisible; it exists from then on only in
//! an inventory slot, a drop slot, or nowhere (consumed).

use serde::{Deserialize, Serialize};

use crate::catalog::{Item, ITEM_COUNT};
use crate::core::EpisodeRng;

use super::grid::{GridMap, Position};

/// Number of item spawn rows per outer column.
const SPAWN_ROWS: usize = ITEM_COUNT / 2;

/// One item entity on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardItem {
    pub item: Item,
    pub position: Position,
    pub visible: bool,
}

/// The static map plus the item entities living on it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    grid: GridMap,
    items: [BoardItem; ITEM_COUNT],
}

impl Board {
    /// Create a board with the items shuffled onto the two outer columns:
    /// four down column 0, four down column 5.
    #[must_use]
    pub fn new(rng: &mut EpisodeRng) -> Self {
        let mut shuffled = Item::ALL;
        rng.shuffle(&mut shuffled);

        let items = std::array::from_fn(|index| {
            let position = if index < SPAWN_ROWS {
                Position::new(index, 0)
            } else {
                Position::new(index - SPAWN_ROWS, super::grid::MAP_WIDTH - 1)
            };
            BoardItem {
                item: shuffled[index],
                position,
                visible: true,
            }
        });

        Self {
            grid: GridMap::new(),
            items,
        }
    }

    /// The static map.
    #[must_use]
    pub fn grid(&self) -> &GridMap {
        &self.grid
    }

    /// The visible item at a position, if any.
    #[must_use]
    pub fn item_at(&self, pos: Position) -> Option<Item> {
        self.items
            .iter()
            .find(|entity| entity.visible && entity.position == pos)
            .map(|entity| entity.item)
    }

    /// Remove the visible item at a position from the board.
    pub fn take_item_at(&mut self, pos: Position) -> Option<Item> {
        let entity = self
            .items
            .iter_mut()
            .find(|entity| entity.visible && entity.position == pos)?;
        entity.visible = false;
        Some(entity.item)
    }

    /// Iterate over the visible item entities, in paint order.
    pub fn visible_items(&self) -> impl Iterator<Item = &BoardItem> {
        self.items.iter().filter(|entity| entity.visible)
    }
}
