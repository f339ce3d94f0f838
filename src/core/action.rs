//! The discrete action vocabulary and its integer codec.
//!
//! The RL consumer sees one flat integer action space covering both
//! players: codes `0..9` are player one's actions, codes `9..18` are
//! player two's (the same vocabulary shifted by [`PLAYER_ACTION_COUNT`]).
//! Anything outside `0..18` decodes to `None` and is treated as a no-op
//! by the driver.
//!
//! Per-player vocabulary:
//!
//! | code | action |
//! |------|--------|
//! | 0 | skip |
//! | 1–4 | move up / down / left / right |
//! | 5–7 | use inventory slot 1 / 2 / 3 |
//! | 8 | quit (terminate the episode) |

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Number of action codes in one player's vocabulary.
pub const PLAYER_ACTION_COUNT: i64 = 9;

/// Total size of the combined two-player action surface.
pub const ACTION_SPACE: i64 = PLAYER_ACTION_COUNT * 2;

/// Number of inventory slots addressable by use-slot actions.
pub const INVENTORY_SLOTS: usize = 3;

/// A movement direction on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit translation as (row delta, col delta).
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// One player's action for a single turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Do nothing.
    Skip,
    /// Translate by one cell; a move off the grid is a no-op.
    Move(Direction),
    /// Interact with the current cell through inventory slot 0..=2.
    UseSlot(usize),
    /// Terminate the episode.
    Quit,
}

impl PlayerAction {
    /// Whether this action is exempt from the non-skip surcharge.
    #[must_use]
    pub const fn is_skip(self) -> bool {
        matches!(self, PlayerAction::Skip)
    }

    /// The per-player action code for this action.
    #[must_use]
    pub fn code(self) -> i64 {
        match self {
            PlayerAction::Skip => 0,
            PlayerAction::Move(Direction::Up) => 1,
            PlayerAction::Move(Direction::Down) => 2,
            PlayerAction::Move(Direction::Left) => 3,
            PlayerAction::Move(Direction::Right) => 4,
            PlayerAction::UseSlot(slot) => 5 + slot as i64,
            PlayerAction::Quit => 8,
        }
    }

    /// Decode a per-player action code.
    #[must_use]
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(PlayerAction::Skip),
            1 => Some(PlayerAction::Move(Direction::Up)),
            2 => Some(PlayerAction::Move(Direction::Down)),
            3 => Some(PlayerAction::Move(Direction::Left)),
            4 => Some(PlayerAction::Move(Direction::Right)),
            5..=7 => Some(PlayerAction::UseSlot((code - 5) as usize)),
            8 => Some(PlayerAction::Quit),
            _ => None,
        }
    }
}

/// Decode a combined action code into the tagged player and their action.
///
/// Returns `None` for codes outside the combined surface; callers treat
/// that as a no-op, never an error.
///
/// ```
/// use craftworld::core::{decode_action, encode_action, PlayerAction, PlayerId};
///
/// let (player, action) = decode_action(9).unwrap();
/// assert_eq!(player, PlayerId::TWO);
/// assert_eq!(action, PlayerAction::Skip);
///
/// assert_eq!(encode_action(player, action), 9);
/// assert!(decode_action(18).is_none());
/// assert!(decode_action(-1).is_none());
/// ```
#[must_use]
pub fn decode_action(code: i64) -> Option<(PlayerId, PlayerAction)> {
    if !(0..ACTION_SPACE).contains(&code) {
        return None;
    }
    let player = if code < PLAYER_ACTION_COUNT {
        PlayerId::ONE
    } else {
        PlayerId::TWO
    };
    let action = PlayerAction::from_code(code % PLAYER_ACTION_COUNT)?;
    Some((player, action))
}

/// Encode a player-tagged action back into its combined code.
#[must_use]
pub fn encode_action(player: PlayerId, action: PlayerAction) -> i64 {
    player.index() as i64 * PLAYER_ACTION_COUNT + action.code()
}

/// A recorded action with metadata, kept in the engine's history for
/// replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: PlayerAction,

    /// Step number within the episode (0-indexed).
    pub step: u32,
}
