//! Evidence distance vectors for goal inference.
//!
//! Each recognized abbreviation (one letter of the conversational
//! shorthand) maps to a fixed 38-length vector with 1.0 at every goal
//! index whose jewelry name contains the abbreviated concept, plus 1.0 at
//! the matching raw-item index. `'G'` (Gold) covers all fifteen gold
//! artifacts and the gold item; `'C'` (Crown) covers the ten crowns and
//! no raw item; `'O'` (Coal) covers only the coal item.

use rustc_hash::FxHashMap;

use super::jewelry::{jewelry_name, Item, JewelryShape, GOAL_LEN, JEWELRY_COUNT};

/// One evidence distance vector.
pub type EvidenceVector = [f64; GOAL_LEN];

/// The recognized abbreviations, paired with the concept each names.
pub const ABBREVS: [(char, &str); 11] = [
    ('G', "Gold"),
    ('S', "Silver"),
    ('O', "Coal"),
    ('R', "Ruby"),
    ('A', "Amethyst"),
    ('D', "Diamond"),
    ('J', "Jade"),
    ('P', "Pearl"),
    ('B', "Bracelet"),
    ('C', "Crown"),
    ('I', "Ring"),
];

/// Immutable table of evidence distance vectors, built once per
/// inference session.
#[derive(Clone, Debug)]
pub struct EvidenceTable {
    dists: FxHashMap<char, EvidenceVector>,
}

impl EvidenceTable {
    /// Build the table from the fixed catalog.
    #[must_use]
    pub fn new() -> Self {
        let mut dists = FxHashMap::default();
        for (abbrev, concept) in ABBREVS {
            dists.insert(abbrev, distance(abbrev, concept));
        }
        Self { dists }
    }

    /// Look up the distance vector for an abbreviation.
    #[must_use]
    pub fn get(&self, abbrev: char) -> Option<&EvidenceVector> {
        self.dists.get(&abbrev)
    }

    /// Whether an abbreviation is recognized.
    #[must_use]
    pub fn is_known(&self, abbrev: char) -> bool {
        self.dists.contains_key(&abbrev)
    }

    /// The abbreviation for an item's catalog symbol.
    #[must_use]
    pub fn for_item(item: Item) -> char {
        item.symbol() as char
    }

    /// The abbreviation for a jewelry shape.
    ///
    /// `'I'` stands in for Ring because `'R'` already names Ruby.
    #[must_use]
    pub fn for_shape(shape: JewelryShape) -> char {
        match shape {
            JewelryShape::Crown => 'C',
            JewelryShape::Ring => 'I',
            JewelryShape::Bracelet => 'B',
        }
    }
}

impl Default for EvidenceTable {
    fn default() -> Self {
        Self::new()
    }
}

fn distance(abbrev: char, concept: &str) -> EvidenceVector {
    let mut dist = [0.0; GOAL_LEN];
    for (index, entry) in dist.iter_mut().take(JEWELRY_COUNT).enumerate() {
        if jewelry_name(index).contains(concept) {
            *entry = 1.0;
        }
    }
    for item in Item::ALL {
        if item.symbol() as char == abbrev {
            dist[item.goal_index()] = 1.0;
        }
    }
    dist
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::jewelry::jewelry_index;

    #[test]
    fn test_all_abbrevs_present() {
        let table = EvidenceTable::new();
        for (abbrev, _) in ABBREVS {
            assert!(table.is_known(abbrev), "missing {abbrev}");
        }
        assert!(!table.is_known('X'));
        assert!(!table.is_known('g'));
    }

    #[test]
    fn test_metal_distance_covers_half_the_jewelry() {
        let table = EvidenceTable::new();
        let gold = table.get('G').unwrap();

        let jewelry_hits = gold[..JEWELRY_COUNT].iter().filter(|&&v| v == 1.0).count();
        assert_eq!(jewelry_hits, 15);
        assert_eq!(gold[Item::Gold.goal_index()], 1.0);
        assert_eq!(gold[Item::Silver.goal_index()], 0.0);
    }

    #[test]
    fn test_shape_distance_has_no_item_entry() {
        let table = EvidenceTable::new();
        let crown = table.get('C').unwrap();

        for shape in JewelryShape::ALL {
            for metal in 0..2 {
                for gem in 0..5 {
                    let index = jewelry_index(shape, metal, gem);
                    let expected = if shape == JewelryShape::Crown { 1.0 } else { 0.0 };
                    assert_eq!(crown[index], expected);
                }
            }
        }
        assert!(crown[JEWELRY_COUNT..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_coal_distance_is_item_only() {
        let table = EvidenceTable::new();
        let coal = table.get('O').unwrap();

        assert!(coal[..JEWELRY_COUNT].iter().all(|&v| v == 0.0));
        assert_eq!(coal[Item::Coal.goal_index()], 1.0);
        assert_eq!(coal.iter().filter(|&&v| v == 1.0).count(), 1);
    }

    #[test]
    fn test_gem_distance() {
        let table = EvidenceTable::new();
        let ruby = table.get('R').unwrap();

        // 3 shapes x 2 metals plus the raw item.
        assert_eq!(ruby.iter().filter(|&&v| v == 1.0).count(), 7);
        assert_eq!(ruby[Item::Ruby.goal_index()], 1.0);
        assert_eq!(ruby[jewelry_index(JewelryShape::Bracelet, 0, 0)], 1.0);
        assert_eq!(ruby[jewelry_index(JewelryShape::Bracelet, 0, 1)], 0.0);
    }

    #[test]
    fn test_union_covers_goal_space() {
        let table = EvidenceTable::new();
        let mut covered = [false; GOAL_LEN];
        for (abbrev, _) in ABBREVS {
            for (index, &v) in table.get(abbrev).unwrap().iter().enumerate() {
                if v == 1.0 {
                    covered[index] = true;
                }
            }
        }
        assert!(covered.iter().all(|&c| c));
    }
}
