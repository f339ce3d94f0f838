//! Station buffers and the combination rules.
//!
//! Each station tracks the items most recently deposited into it, capped
//! at the arity of its recipe. The buffers are tracking state only: a
//! deposited item is already consumed from the player's point of view,
//! and truncation past the cap silently forgets the oldest entry whether
//! or not it ever resolved into jewelry.
//!
//! Resolution points:
//! - crucible, 3rd deposit: CROWN attempt iff coal is among the three,
//!   then truncate to the last two;
//! - crucible, buffer at exactly 2 (no truncation this deposit): RING;
//! - bench, buffer at exactly 2: BRACELET.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::catalog::{jewelry_index, jewelry_name, Item, ItemCategory, JewelryShape};

use super::grid::StationKind;

/// Crucible recipe arity (metal + gem + coal).
const CRUCIBLE_CAP: usize = 3;

/// Bench recipe arity (metal + gem).
const BENCH_CAP: usize = 2;

/// Ordered list of recently-deposited items at one station.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationBuffer {
    kind: StationKind,
    items: SmallVec<[Item; CRUCIBLE_CAP]>,
}

impl StationBuffer {
    /// Create the buffer for a station.
    #[must_use]
    pub fn new(kind: StationKind) -> Self {
        Self {
            kind,
            items: SmallVec::new(),
        }
    }

    /// Which station this buffer belongs to.
    #[must_use]
    pub fn kind(&self) -> StationKind {
        self.kind
    }

    /// The currently-buffered items, oldest first.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Deposit one item and run the station's resolution rule.
    ///
    /// Returns the jewelry index of a successfully resolved artifact.
    pub fn deposit(&mut self, item: Item) -> Option<usize> {
        self.items.push(item);
        match self.kind {
            StationKind::Crucible => self.resolve_crucible(),
            StationKind::Bench => self.resolve_bench(),
        }
    }

    fn resolve_crucible(&mut self) -> Option<usize> {
        if self.items.len() == CRUCIBLE_CAP {
            let resolved = if self.items.contains(&Item::Coal) {
                make_from(JewelryShape::Crown, &self.items)
            } else {
                tracing::debug!(items = ?self.items, "no coal among three crucible items");
                None
            };
            // Truncation happens whether or not the crown resolved.
            self.items.remove(0);
            resolved
        } else if self.items.len() == BENCH_CAP {
            make_from(JewelryShape::Ring, &self.items)
        } else {
            None
        }
    }

    fn resolve_bench(&mut self) -> Option<usize> {
        if self.items.len() > BENCH_CAP {
            self.items.remove(0);
        }
        if self.items.len() == BENCH_CAP {
            make_from(JewelryShape::Bracelet, &self.items)
        } else {
            None
        }
    }
}

/// Resolve a shape from a candidate ingredient set.
///
/// Succeeds only when exactly one metal and exactly one gem are present;
/// coal is ignored by the check. Failures are logged and silent.
#[must_use]
pub fn make_from(shape: JewelryShape, items: &[Item]) -> Option<usize> {
    let metals: SmallVec<[Item; 2]> = items
        .iter()
        .copied()
        .filter(|item| item.category() == ItemCategory::Metal)
        .collect();
    let gems: SmallVec<[Item; 2]> = items
        .iter()
        .copied()
        .filter(|item| item.category() == ItemCategory::Gem)
        .collect();

    if let ([metal], [gem]) = (metals.as_slice(), gems.as_slice()) {
        let index = jewelry_index(shape, metal.metal_index()?, gem.gem_index()?);
        tracing::debug!(name = %jewelry_name(index), "resolved {shape}");
        Some(index)
    } else {
        tracing::debug!(?items, "cannot make {shape}");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::JEWELRY_COUNT;

    #[test]
    fn test_make_from_requires_one_metal_one_gem() {
        assert_eq!(
            make_from(JewelryShape::Ring, &[Item::Silver, Item::Ruby]),
            Some(jewelry_index(JewelryShape::Ring, 0, 0))
        );
        assert_eq!(make_from(JewelryShape::Ring, &[Item::Silver, Item::Gold]), None);
        assert_eq!(make_from(JewelryShape::Ring, &[Item::Ruby, Item::Jade]), None);
        assert_eq!(make_from(JewelryShape::Ring, &[Item::Silver, Item::Coal]), None);
    }

    #[test]
    fn test_make_from_ignores_coal() {
        let index = make_from(JewelryShape::Crown, &[Item::Gold, Item::Coal, Item::Pearl]);
        assert_eq!(index, Some(jewelry_index(JewelryShape::Crown, 1, 4)));
        assert!(index.unwrap() < JEWELRY_COUNT);
    }

    #[test]
    fn test_crucible_ring_on_second_deposit() {
        let mut buffer = StationBuffer::new(StationKind::Crucible);

        assert_eq!(buffer.deposit(Item::Gold), None);
        assert_eq!(
            buffer.deposit(Item::Diamond),
            Some(jewelry_index(JewelryShape::Ring, 1, 2))
        );
        assert_eq!(buffer.items(), &[Item::Gold, Item::Diamond]);
    }

    #[test]
    fn test_crucible_crown_with_coal_on_third_deposit() {
        let mut buffer = StationBuffer::new(StationKind::Crucible);

        buffer.deposit(Item::Coal);
        assert_eq!(buffer.deposit(Item::Silver), None); // coal + silver is no ring
        assert_eq!(
            buffer.deposit(Item::Ruby),
            Some(jewelry_index(JewelryShape::Crown, 0, 0))
        );
        // Truncated to the last two entries regardless of success.
        assert_eq!(buffer.items(), &[Item::Silver, Item::Ruby]);
    }

    #[test]
    fn test_crucible_no_crown_without_coal() {
        let mut buffer = StationBuffer::new(StationKind::Crucible);

        buffer.deposit(Item::Ruby);
        buffer.deposit(Item::Jade); // two gems: ring fails
        assert_eq!(buffer.deposit(Item::Silver), None);
        assert_eq!(buffer.items(), &[Item::Jade, Item::Silver]);
    }

    #[test]
    fn test_crucible_truncation_drops_oldest() {
        let mut buffer = StationBuffer::new(StationKind::Crucible);

        buffer.deposit(Item::Coal);
        buffer.deposit(Item::Coal);
        buffer.deposit(Item::Gold); // three entries, no metal+gem pair
        assert_eq!(buffer.items(), &[Item::Coal, Item::Gold]);

        // The next deposit completes a crown from the surviving coal.
        assert_eq!(
            buffer.deposit(Item::Pearl),
            Some(jewelry_index(JewelryShape::Crown, 1, 4))
        );
    }

    #[test]
    fn test_bench_bracelet_per_consecutive_pair() {
        let mut buffer = StationBuffer::new(StationKind::Bench);

        assert_eq!(buffer.deposit(Item::Silver), None);
        assert_eq!(
            buffer.deposit(Item::Amethyst),
            Some(jewelry_index(JewelryShape::Bracelet, 0, 1))
        );

        // A further deposit evicts the oldest and re-checks the new pair.
        assert_eq!(
            buffer.deposit(Item::Gold),
            Some(jewelry_index(JewelryShape::Bracelet, 1, 1))
        );
        assert_eq!(buffer.items(), &[Item::Amethyst, Item::Gold]);
    }

    #[test]
    fn test_bench_eviction_pairs_last_two() {
        let mut buffer = StationBuffer::new(StationKind::Bench);

        buffer.deposit(Item::Ruby);
        assert_eq!(buffer.deposit(Item::Jade), None); // two gems
        assert_eq!(
            buffer.deposit(Item::Silver),
            Some(jewelry_index(JewelryShape::Bracelet, 0, 3))
        );
        assert_eq!(buffer.items(), &[Item::Jade, Item::Silver]);
    }

    #[test]
    fn test_bench_never_resolves_single_item() {
        let mut buffer = StationBuffer::new(StationKind::Bench);
        assert_eq!(buffer.deposit(Item::Gold), None);
        assert_eq!(buffer.items(), &[Item::Gold]);
    }
}
