//! The shared goal/jewelry vocabulary.
//!
//! Both engines speak in terms of this catalog: the crafting engine
//! resolves artifacts to jewelry indices, and the inference engine reasons
//! over the combined jewelry + item goal space.

pub mod evidence;
pub mod jewelry;

pub use evidence::{EvidenceTable, EvidenceVector, ABBREVS};
pub use jewelry::{
    jewelry_index, jewelry_name, jewelry_parts, GoalVector, Item, ItemCategory, JewelryShape,
    GEM_COUNT, GOAL_LEN, GOAL_REWARD, ITEM_COUNT, JEWELRY_COUNT, METAL_COUNT,
};
