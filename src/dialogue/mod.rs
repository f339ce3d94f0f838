//! The symbolic command vocabulary shared with the NLU/NLG collaborator.
//!
//! Commands travel as closed-vocabulary strings such as `skip()`,
//! `go(up)`, and `give_goal(gold,ruby,crown)`, produced by the
//! language-understanding layer and consumed on both sides of the
//! dialogue. This module only
//! parses and formats them; turning natural language into commands is
//! the collaborator's job.
//!
//! The goal-related subset translates into the inference engine's
//! four-act vocabulary via [`Command::to_evidence`]: naming a full
//! (metal, gem, shape) triple or mentioning an item asserts those
//! concepts as part of the goal, `goal_confirmed()` confirms, and
//! `decline_offer()` disconfirms.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{EvidenceTable, Item, ItemCategory, JewelryShape};
use crate::core::Direction;
use crate::inference::ForwardAct;

/// A parsed symbolic command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Skip,
    Go(Direction),
    Use(Item),
    Request(Item),
    Offer(Item),
    AcceptOffer,
    DeclineOffer,
    RequestGoal,
    GiveGoal {
        metal: Item,
        gem: Item,
        shape: JewelryShape,
    },
    ConfirmGoal {
        metal: Item,
        gem: Item,
        shape: JewelryShape,
    },
    GoalConfirmed,
    InvalidInput,
}

/// A command string outside the closed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized command: {0:?}")]
pub struct ParseCommandError(pub String);

impl Command {
    /// Translate the goal-related subset into a forward-channel act and
    /// its evidence abbreviations. Non-goal commands carry no evidence.
    #[must_use]
    pub fn to_evidence(&self) -> Option<(ForwardAct, Vec<char>)> {
        match *self {
            Command::Use(item) | Command::Request(item) | Command::Offer(item) => {
                Some((ForwardAct::PartOfGoal, vec![EvidenceTable::for_item(item)]))
            }
            Command::GiveGoal { metal, gem, shape } => Some((
                ForwardAct::PartOfGoal,
                vec![
                    EvidenceTable::for_item(metal),
                    EvidenceTable::for_item(gem),
                    EvidenceTable::for_shape(shape),
                ],
            )),
            Command::GoalConfirmed => Some((ForwardAct::Confirm, Vec::new())),
            Command::DeclineOffer => Some((ForwardAct::Disconfirm, Vec::new())),
            _ => None,
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Command::Skip => write!(f, "skip()"),
            Command::Go(direction) => write!(f, "go({})", direction_word(direction)),
            Command::Use(item) => write!(f, "use({})", item_word(item)),
            Command::Request(item) => write!(f, "request({})", item_word(item)),
            Command::Offer(item) => write!(f, "offer({})", item_word(item)),
            Command::AcceptOffer => write!(f, "accept_offer()"),
            Command::DeclineOffer => write!(f, "decline_offer()"),
            Command::RequestGoal => write!(f, "request_goal()"),
            Command::GiveGoal { metal, gem, shape } => write!(
                f,
                "give_goal({},{},{})",
                item_word(metal),
                item_word(gem),
                shape_word(shape)
            ),
            Command::ConfirmGoal { metal, gem, shape } => write!(
                f,
                "confirm_goal({},{},{})",
                item_word(metal),
                item_word(gem),
                shape_word(shape)
            ),
            Command::GoalConfirmed => write!(f, "goal_confirmed()"),
            Command::InvalidInput => write!(f, "invalid_input()"),
        }
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let err = || ParseCommandError(input.to_string());
        let trimmed = input.trim();

        let (name, rest) = trimmed.split_once('(').ok_or_else(err)?;
        let body = rest.strip_suffix(')').ok_or_else(err)?;
        let args: Vec<&str> = if body.is_empty() {
            Vec::new()
        } else {
            body.split(',').map(str::trim).collect()
        };

        match (name, args.as_slice()) {
            ("skip", []) => Ok(Command::Skip),
            ("go", [word]) => Ok(Command::Go(parse_direction(word).ok_or_else(err)?)),
            ("use", [word]) => Ok(Command::Use(parse_item(word).ok_or_else(err)?)),
            ("request", [word]) => Ok(Command::Request(parse_item(word).ok_or_else(err)?)),
            ("offer", [word]) => Ok(Command::Offer(parse_item(word).ok_or_else(err)?)),
            ("accept_offer", []) => Ok(Command::AcceptOffer),
            ("decline_offer", []) => Ok(Command::DeclineOffer),
            ("request_goal", []) => Ok(Command::RequestGoal),
            ("give_goal", [metal, gem, shape]) => {
                let (metal, gem, shape) = parse_goal_triple(metal, gem, shape).ok_or_else(err)?;
                Ok(Command::GiveGoal { metal, gem, shape })
            }
            ("confirm_goal", [metal, gem, shape]) => {
                let (metal, gem, shape) = parse_goal_triple(metal, gem, shape).ok_or_else(err)?;
                Ok(Command::ConfirmGoal { metal, gem, shape })
            }
            ("goal_confirmed", []) => Ok(Command::GoalConfirmed),
            ("invalid_input", []) => Ok(Command::InvalidInput),
            _ => Err(err()),
        }
    }
}

fn direction_word(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "up",
        Direction::Down => "down",
        Direction::Left => "left",
        Direction::Right => "right",
    }
}

fn parse_direction(word: &str) -> Option<Direction> {
    match word {
        "up" => Some(Direction::Up),
        "down" => Some(Direction::Down),
        "left" => Some(Direction::Left),
        "right" => Some(Direction::Right),
        _ => None,
    }
}

fn item_word(item: Item) -> &'static str {
    match item {
        Item::Ruby => "ruby",
        Item::Amethyst => "amethyst",
        Item::Diamond => "diamond",
        Item::Jade => "jade",
        Item::Pearl => "pearl",
        Item::Silver => "silver",
        Item::Gold => "gold",
        Item::Coal => "coal",
    }
}

fn parse_item(word: &str) -> Option<Item> {
    Item::ALL.into_iter().find(|&item| item_word(item) == word)
}

fn shape_word(shape: JewelryShape) -> &'static str {
    match shape {
        JewelryShape::Crown => "crown",
        JewelryShape::Ring => "ring",
        JewelryShape::Bracelet => "bracelet",
    }
}

fn parse_shape(word: &str) -> Option<JewelryShape> {
    JewelryShape::ALL
        .into_iter()
        .find(|&shape| shape_word(shape) == word)
}

/// Parse a (metal, gem, shape) argument triple with category checks:
/// the first slot must hold a metal, the second anything but a metal
/// (the language layer lets coal through as a "gem").
fn parse_goal_triple(metal: &str, gem: &str, shape: &str) -> Option<(Item, Item, JewelryShape)> {
    let metal = parse_item(metal)?;
    let gem = parse_item(gem)?;
    let shape = parse_shape(shape)?;
    if metal.category() != ItemCategory::Metal || gem.category() == ItemCategory::Metal {
        return None;
    }
    Some((metal, gem, shape))
}
