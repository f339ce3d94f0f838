//! The fixed item and jewelry catalog.
//!
//! Eight collectible items partition into three categories: five gems,
//! two metals, and coal (the filler). Jewelry is a (shape, metal, gem)
//! triple, bijective with an index in `0..30`:
//!
//! ```text
//! jewelry_index = gem + 5 * metal + 10 * shape
//! ```
//!
//! Crowns additionally consume coal as a third ingredient, which is not
//! part of the index.
//!
//! The goal space appends the eight raw items after the thirty jewelry
//! indices, giving vectors of length [`GOAL_LEN`].

use serde::{Deserialize, Serialize};

/// Number of gem items.
pub const GEM_COUNT: usize = 5;

/// Number of metal items.
pub const METAL_COUNT: usize = 2;

/// Number of collectible items.
pub const ITEM_COUNT: usize = 8;

/// Number of distinct jewelry artifacts.
pub const JEWELRY_COUNT: usize = GEM_COUNT * METAL_COUNT * 3;

/// Length of a goal vector: jewelry indices followed by raw item indices.
pub const GOAL_LEN: usize = JEWELRY_COUNT + ITEM_COUNT;

/// Reward granted to a player whose goal matches a constructed artifact.
pub const GOAL_REWARD: f64 = 100.0;

/// A goal vector over the combined jewelry + item space.
pub type GoalVector = [f64; GOAL_LEN];

/// Item category; fixed per item for its whole lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    Gem,
    Metal,
    Filler,
}

/// A collectible item.
///
/// Declaration order is the catalog order (gems, metals, coal), which
/// fixes each item's raw index in the goal space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Item {
    Ruby,
    Amethyst,
    Diamond,
    Jade,
    Pearl,
    Silver,
    Gold,
    Coal,
}

impl Item {
    /// All items in catalog order.
    pub const ALL: [Item; ITEM_COUNT] = [
        Item::Ruby,
        Item::Amethyst,
        Item::Diamond,
        Item::Jade,
        Item::Pearl,
        Item::Silver,
        Item::Gold,
        Item::Coal,
    ];

    /// The board character for this item.
    #[must_use]
    pub const fn symbol(self) -> u8 {
        match self {
            Item::Ruby => b'R',
            Item::Amethyst => b'A',
            Item::Diamond => b'D',
            Item::Jade => b'J',
            Item::Pearl => b'P',
            Item::Silver => b'S',
            Item::Gold => b'G',
            Item::Coal => b'O',
        }
    }

    /// Look an item up by its board character.
    #[must_use]
    pub fn from_symbol(symbol: u8) -> Option<Self> {
        Item::ALL.into_iter().find(|item| item.symbol() == symbol)
    }

    /// Display name, as used in jewelry names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Item::Ruby => "Ruby",
            Item::Amethyst => "Amethyst",
            Item::Diamond => "Diamond",
            Item::Jade => "Jade",
            Item::Pearl => "Pearl",
            Item::Silver => "Silver",
            Item::Gold => "Gold",
            Item::Coal => "Coal",
        }
    }

    /// This item's category.
    #[must_use]
    pub const fn category(self) -> ItemCategory {
        match self {
            Item::Ruby | Item::Amethyst | Item::Diamond | Item::Jade | Item::Pearl => {
                ItemCategory::Gem
            }
            Item::Silver | Item::Gold => ItemCategory::Metal,
            Item::Coal => ItemCategory::Filler,
        }
    }

    /// Raw index within the catalog order, `0..ITEM_COUNT`.
    #[must_use]
    pub fn item_index(self) -> usize {
        Item::ALL.iter().position(|&i| i == self).unwrap_or(0)
    }

    /// Index within the goal space (`JEWELRY_COUNT..GOAL_LEN`).
    #[must_use]
    pub fn goal_index(self) -> usize {
        JEWELRY_COUNT + self.item_index()
    }

    /// Gem index `0..GEM_COUNT`, if this is a gem.
    #[must_use]
    pub fn gem_index(self) -> Option<usize> {
        match self.category() {
            ItemCategory::Gem => Some(self.item_index()),
            _ => None,
        }
    }

    /// Metal index `0..METAL_COUNT`, if this is a metal.
    #[must_use]
    pub fn metal_index(self) -> Option<usize> {
        match self.category() {
            ItemCategory::Metal => Some(self.item_index() - GEM_COUNT),
            _ => None,
        }
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Jewelry shape.
///
/// Discriminants fix each shape's block of ten indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JewelryShape {
    Crown = 0,
    Ring = 1,
    Bracelet = 2,
}

impl JewelryShape {
    /// All shapes in index order.
    pub const ALL: [JewelryShape; 3] = [
        JewelryShape::Crown,
        JewelryShape::Ring,
        JewelryShape::Bracelet,
    ];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            JewelryShape::Crown => "Crown",
            JewelryShape::Ring => "Ring",
            JewelryShape::Bracelet => "Bracelet",
        }
    }
}

impl std::fmt::Display for JewelryShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Compute the jewelry index for a (shape, metal, gem) triple.
#[must_use]
pub fn jewelry_index(shape: JewelryShape, metal: usize, gem: usize) -> usize {
    debug_assert!(metal < METAL_COUNT && gem < GEM_COUNT);
    gem + GEM_COUNT * metal + GEM_COUNT * METAL_COUNT * shape as usize
}

/// Decompose a jewelry index back into (shape, metal, gem).
#[must_use]
pub fn jewelry_parts(index: usize) -> (JewelryShape, usize, usize) {
    debug_assert!(index < JEWELRY_COUNT);
    let shape = JewelryShape::ALL[index / (GEM_COUNT * METAL_COUNT)];
    let metal = (index / GEM_COUNT) % METAL_COUNT;
    let gem = index % GEM_COUNT;
    (shape, metal, gem)
}

/// Display name for a jewelry index, e.g. `"Silver Crown with Ruby"`.
#[must_use]
pub fn jewelry_name(index: usize) -> String {
    let (shape, metal, gem) = jewelry_parts(index);
    let metal = Item::ALL[GEM_COUNT + metal];
    let gem = Item::ALL[gem];
    format!("{metal} {shape} with {gem}")
}
