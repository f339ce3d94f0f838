//! Character-grid rendering and the drop-marker remapping table.
//!
//! Painting order matches the board's z-order: backdrop, item sprites,
//! drop markers, players, so a player standing on a marker covers it.
//! The bottom row is not part of the map; it draws the two inventories
//! side by side.
//!
//! Drop slots have generic marker characters (`9`..`4`). The
//! [`DisplayRemap`] substitutes the symbol of the item a marker
//! currently holds, so the rendered board shows what is actually lying
//! on the ground. The table is owned by the engine and passed by
//! reference into [`render`]; entries are written when a marker is
//! filled and simply go stale when it empties, since hidden markers are
//! never painted.

use rustc_hash::FxHashMap;

use crate::core::PlayerId;
use crate::world::{MAP_HEIGHT, MAP_WIDTH};

use super::crafting::CraftingEngine;

/// Rendered grid height: the map plus the inventory row.
pub const RENDER_HEIGHT: usize = MAP_HEIGHT + 1;

/// Character substitution table applied at paint time.
#[derive(Clone, Debug, Default)]
pub struct DisplayRemap {
    map: FxHashMap<u8, u8>,
}

impl DisplayRemap {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a marker character to a display character.
    pub fn set(&mut self, marker: u8, display: u8) {
        self.map.insert(marker, display);
    }

    /// The display character for `symbol`, or `symbol` itself when
    /// unmapped.
    #[must_use]
    pub fn apply(&self, symbol: u8) -> u8 {
        self.map.get(&symbol).copied().unwrap_or(symbol)
    }
}

/// Paint the map area (without the inventory row).
///
/// Drop markers are passed through `remap`; pass an empty table to see
/// the raw marker characters.
#[must_use]
pub fn paint_map(engine: &CraftingEngine, remap: &DisplayRemap) -> [[u8; MAP_WIDTH]; MAP_HEIGHT] {
    let mut rows = engine.board().grid().backdrop();

    for entity in engine.board().visible_items() {
        rows[entity.position.row][entity.position.col] = entity.item.symbol();
    }

    for (marker, position, _) in engine.drops().occupied() {
        rows[position.row][position.col] = remap.apply(marker);
    }

    for (player, state) in engine.players().iter() {
        rows[state.position.row][state.position.col] = player.symbol();
    }

    rows
}

/// Render the full character grid, inventory row included.
#[must_use]
pub fn render(engine: &CraftingEngine, remap: &DisplayRemap) -> Vec<String> {
    let mut lines: Vec<String> = paint_map(engine, remap)
        .iter()
        .map(|row| String::from_utf8_lossy(row).into_owned())
        .collect();

    let mut inventory_row = [b' '; MAP_WIDTH];
    for player in PlayerId::both() {
        let symbols = engine.player(player).inventory.symbols();
        for (slot, &symbol) in symbols.iter().enumerate() {
            inventory_row[symbols.len() * player.index() + slot] = symbol;
        }
    }
    lines.push(String::from_utf8_lossy(&inventory_row).into_owned());

    lines
}

impl CraftingEngine {
    /// Render with the engine's remapping applied (dropped items show
    /// their true characters).
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        render(self, self.remapping())
    }

    /// Render with raw drop-marker characters.
    #[must_use]
    pub fn render_raw(&self) -> Vec<String> {
        render(self, &DisplayRemap::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerAction;
    use crate::world::Position;

    #[test]
    fn test_remap_passthrough() {
        let mut remap = DisplayRemap::new();
        assert_eq!(remap.apply(b'9'), b'9');

        remap.set(b'9', b'R');
        assert_eq!(remap.apply(b'9'), b'R');
        assert_eq!(remap.apply(b'8'), b'8');
    }

    #[test]
    fn test_render_shape() {
        let engine = CraftingEngine::new(42);
        let lines = engine.render();

        assert_eq!(lines.len(), RENDER_HEIGHT);
        assert!(lines.iter().all(|line| line.len() == MAP_WIDTH));
    }

    #[test]
    fn test_render_paints_players_over_backdrop() {
        let engine = CraftingEngine::new(42);
        let lines = engine.render();

        assert_eq!(&lines[0][2..3], "1");
        assert_eq!(&lines[0][3..4], "2");
        // The station cells are untouched.
        assert_eq!(&lines[3][2..4], "BC");
    }

    #[test]
    fn test_render_inventory_row() {
        let mut engine = CraftingEngine::new(42);
        let pos = Position::new(0, 0);
        let item = engine.board().item_at(pos).unwrap();

        engine.players_mut()[PlayerId::ONE].position = pos;
        engine.step(PlayerId::ONE, PlayerAction::UseSlot(0));

        let lines = engine.render();
        assert_eq!(lines[RENDER_HEIGHT - 1].as_bytes()[0], item.symbol());
    }

    #[test]
    fn test_dropped_item_shows_true_character() {
        let mut engine = CraftingEngine::new(42);
        let pos = Position::new(0, 0);
        let item = engine.board().item_at(pos).unwrap();

        // Pick the item up, walk away, and drop it.
        engine.players_mut()[PlayerId::ONE].position = pos;
        engine.step(PlayerId::ONE, PlayerAction::UseSlot(0));
        engine.players_mut()[PlayerId::ONE].position = Position::new(2, 2);
        engine.step(PlayerId::ONE, PlayerAction::UseSlot(0));
        engine.players_mut()[PlayerId::ONE].position = Position::new(2, 3);

        let remapped = engine.render();
        assert_eq!(remapped[2].as_bytes()[2], item.symbol());

        let raw = engine.render_raw();
        assert_eq!(raw[2].as_bytes()[2], b'9');
    }
}
