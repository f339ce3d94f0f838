//! The static grid map: cells, masks, and bounds-clamped movement.
//!
//! The map is fixed: a 6x4 field with a mountain ridge at column 1, water
//! at column 4, and the two crafting stations on the bottom row. Items
//! spawn on the outer columns (0 and 5), so mountain and water cells do
//! not block movement; their impassability is advisory, surfaced to the
//! RL consumer through the walkable mask.
//!
//! ```text
//!  M  W
//!  M  W
//!  M  W
//!  MBCW
//! ```

use serde::{Deserialize, Serialize};

use crate::core::Direction;

/// Grid width in cells.
pub const MAP_WIDTH: usize = 6;

/// Grid height in cells (excluding the rendered inventory row).
pub const MAP_HEIGHT: usize = 4;

/// The static background, one byte per cell.
pub const BACKGROUND: [&str; MAP_HEIGHT] = [" M  W ", " M  W ", " M  W ", " MBCW "];

/// Spawn positions for the two players, in player order.
pub const PLAYER_SPAWNS: [Position; 2] = [Position { row: 0, col: 2 }, Position { row: 0, col: 3 }];

/// A cell position, row-major from the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Flat row-major index into a `MAP_HEIGHT * MAP_WIDTH` buffer.
    #[must_use]
    pub const fn flat_index(self) -> usize {
        self.row * MAP_WIDTH + self.col
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// What a static map cell is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    Empty,
    Mountain,
    Water,
    Bench,
    Crucible,
}

impl CellKind {
    /// The backdrop character for this cell.
    #[must_use]
    pub const fn symbol(self) -> u8 {
        match self {
            CellKind::Empty => b' ',
            CellKind::Mountain => b'M',
            CellKind::Water => b'W',
            CellKind::Bench => b'B',
            CellKind::Crucible => b'C',
        }
    }

    /// Whether this cell counts as walkable in the observation mask.
    #[must_use]
    pub const fn is_walkable(self) -> bool {
        !matches!(self, CellKind::Mountain | CellKind::Water)
    }
}

/// The kind of crafting station occupying a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StationKind {
    Crucible,
    Bench,
}

impl std::fmt::Display for StationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StationKind::Crucible => f.write_str("crucible"),
            StationKind::Bench => f.write_str("bench"),
        }
    }
}

/// The static map.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridMap {
    cells: [[CellKind; MAP_WIDTH]; MAP_HEIGHT],
}

impl GridMap {
    /// Build the fixed map from [`BACKGROUND`].
    #[must_use]
    pub fn new() -> Self {
        let mut cells = [[CellKind::Empty; MAP_WIDTH]; MAP_HEIGHT];
        for (row, line) in BACKGROUND.iter().enumerate() {
            for (col, byte) in line.bytes().enumerate() {
                cells[row][col] = match byte {
                    b'M' => CellKind::Mountain,
                    b'W' => CellKind::Water,
                    b'B' => CellKind::Bench,
                    b'C' => CellKind::Crucible,
                    _ => CellKind::Empty,
                };
            }
        }
        Self { cells }
    }

    /// The cell at a position.
    #[must_use]
    pub fn cell(&self, pos: Position) -> CellKind {
        self.cells[pos.row][pos.col]
    }

    /// The station at a position, if any.
    #[must_use]
    pub fn station_at(&self, pos: Position) -> Option<StationKind> {
        match self.cell(pos) {
            CellKind::Crucible => Some(StationKind::Crucible),
            CellKind::Bench => Some(StationKind::Bench),
            _ => None,
        }
    }

    /// Translate a position by one cell; a step off the grid is a no-op.
    #[must_use]
    pub fn step(&self, pos: Position, direction: Direction) -> Position {
        let (dr, dc) = direction.delta();
        let row = pos.row as isize + dr;
        let col = pos.col as isize + dc;
        if (0..MAP_HEIGHT as isize).contains(&row) && (0..MAP_WIDTH as isize).contains(&col) {
            Position::new(row as usize, col as usize)
        } else {
            pos
        }
    }

    /// Flattened walkable mask, 1 where a cell is walkable.
    #[must_use]
    pub fn walkable_mask(&self) -> Vec<u8> {
        self.flat_cells()
            .map(|cell| u8::from(cell.is_walkable()))
            .collect()
    }

    /// Flattened station mask, 1 where a cell holds a station.
    #[must_use]
    pub fn station_mask(&self) -> Vec<u8> {
        self.flat_cells()
            .map(|cell| u8::from(matches!(cell, CellKind::Bench | CellKind::Crucible)))
            .collect()
    }

    /// Backdrop characters, row by row.
    #[must_use]
    pub fn backdrop(&self) -> [[u8; MAP_WIDTH]; MAP_HEIGHT] {
        let mut rows = [[b' '; MAP_WIDTH]; MAP_HEIGHT];
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                rows[row][col] = cell.symbol();
            }
        }
        rows
    }

    fn flat_cells(&self) -> impl Iterator<Item = CellKind> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }
}

impl Default for GridMap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_map_layout() {
        let map = GridMap::new();

        assert_eq!(map.cell(Position::new(0, 1)), CellKind::Mountain);
        assert_eq!(map.cell(Position::new(2, 4)), CellKind::Water);
        assert_eq!(map.cell(Position::new(3, 2)), CellKind::Bench);
        assert_eq!(map.cell(Position::new(3, 3)), CellKind::Crucible);
        assert_eq!(map.cell(Position::new(0, 0)), CellKind::Empty);
    }

    #[test]
    fn test_station_lookup() {
        let map = GridMap::new();

        assert_eq!(map.station_at(Position::new(3, 3)), Some(StationKind::Crucible));
        assert_eq!(map.station_at(Position::new(3, 2)), Some(StationKind::Bench));
        assert_eq!(map.station_at(Position::new(0, 0)), None);
        assert_eq!(map.station_at(Position::new(1, 1)), None);
    }

    #[test]
    fn test_step_within_bounds() {
        let map = GridMap::new();
        let pos = Position::new(1, 1);

        assert_eq!(map.step(pos, Direction::Up), Position::new(0, 1));
        assert_eq!(map.step(pos, Direction::Down), Position::new(2, 1));
        assert_eq!(map.step(pos, Direction::Left), Position::new(1, 0));
        assert_eq!(map.step(pos, Direction::Right), Position::new(1, 2));
    }

    #[test]
    fn test_step_clamps_at_every_edge() {
        let map = GridMap::new();

        let top_left = Position::new(0, 0);
        assert_eq!(map.step(top_left, Direction::Up), top_left);
        assert_eq!(map.step(top_left, Direction::Left), top_left);

        let bottom_right = Position::new(MAP_HEIGHT - 1, MAP_WIDTH - 1);
        assert_eq!(map.step(bottom_right, Direction::Down), bottom_right);
        assert_eq!(map.step(bottom_right, Direction::Right), bottom_right);
    }

    #[test]
    fn test_walkable_mask() {
        let map = GridMap::new();
        let mask = map.walkable_mask();

        assert_eq!(mask.len(), MAP_WIDTH * MAP_HEIGHT);
        // Mountain column and water column are unwalkable in every row.
        for row in 0..MAP_HEIGHT {
            assert_eq!(mask[Position::new(row, 1).flat_index()], 0);
            assert_eq!(mask[Position::new(row, 4).flat_index()], 0);
            assert_eq!(mask[Position::new(row, 0).flat_index()], 1);
            assert_eq!(mask[Position::new(row, 5).flat_index()], 1);
        }
        // Stations are walkable.
        assert_eq!(mask[Position::new(3, 2).flat_index()], 1);
        assert_eq!(mask[Position::new(3, 3).flat_index()], 1);
    }

    #[test]
    fn test_station_mask() {
        let map = GridMap::new();
        let mask = map.station_mask();

        let hits: Vec<usize> = mask
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == 1)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(
            hits,
            vec![
                Position::new(3, 2).flat_index(),
                Position::new(3, 3).flat_index()
            ]
        );
    }

    #[test]
    fn test_backdrop_matches_background() {
        let map = GridMap::new();
        let rows = map.backdrop();
        for (row, line) in BACKGROUND.iter().enumerate() {
            assert_eq!(&rows[row], line.as_bytes());
        }
    }
}
