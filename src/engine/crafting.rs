//! The crafting engine: one player-turn at a time.
//!
//! `step` applies a single action for a single player: movement, the
//! four-stage use-slot interaction, the per-step costs, and reward
//! distribution when a station resolves an artifact. The engine never
//! schedules turns itself; eligibility and the fixed horizon belong to
//! the [`Episode`](super::episode::Episode) driver.

use im::Vector;

use crate::catalog::{jewelry_name, GoalVector, Item, GOAL_LEN, GOAL_REWARD, JEWELRY_COUNT};
use crate::core::{ActionRecord, EpisodeRng, PerPlayer, PlayerAction, PlayerId};
use crate::world::{Board, DropRing, Inventory, Position, StationBuffer, StationKind, PLAYER_SPAWNS};

use super::render::DisplayRemap;

/// Per-player simulation state.
#[derive(Clone, Debug)]
pub struct PlayerState {
    /// Current position on the grid.
    pub position: Position,
    /// The three inventory slots.
    pub inventory: Inventory,
    /// One-hot private goal over the combined jewelry + item space.
    pub goal: GoalVector,
    /// Latched once an artifact matching the goal has been constructed.
    pub goal_complete: bool,
}

impl PlayerState {
    fn new(position: Position, goal_index: usize) -> Self {
        let mut goal = [0.0; GOAL_LEN];
        goal[goal_index] = 1.0;
        Self {
            position,
            inventory: Inventory::new(),
            goal,
            goal_complete: false,
        }
    }
}

/// The crafting simulation engine.
pub struct CraftingEngine {
    board: Board,
    players: PerPlayer<PlayerState>,
    drops: DropRing,
    crucible: StationBuffer,
    bench: StationBuffer,
    remap: DisplayRemap,
    constructed: Vec<usize>,
    terminated: bool,
    history: Vector<ActionRecord>,
}

impl CraftingEngine {
    /// Create an engine for a fresh episode.
    ///
    /// The seed drives the item shuffle and both goal draws; it is the
    /// sole source of non-determinism.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(&mut EpisodeRng::new(seed))
    }

    /// Create an engine drawing setup randomness from an existing RNG.
    #[must_use]
    pub fn with_rng(rng: &mut EpisodeRng) -> Self {
        let board = Board::new(rng);
        let goals = [
            rng.gen_range(0..JEWELRY_COUNT),
            rng.gen_range(0..JEWELRY_COUNT),
        ];
        let players = PerPlayer::new(|player| {
            let goal_index = goals[player.index()];
            tracing::info!(%player, goal = %jewelry_name(goal_index), "assigned goal");
            PlayerState::new(PLAYER_SPAWNS[player.index()], goal_index)
        });

        Self {
            board,
            players,
            drops: DropRing::new(),
            crucible: StationBuffer::new(StationKind::Crucible),
            bench: StationBuffer::new(StationKind::Bench),
            remap: DisplayRemap::new(),
            constructed: Vec::new(),
            terminated: false,
            history: Vector::new(),
        }
    }

    /// Advance one player-turn, returning the reward delta.
    pub fn step(&mut self, player: PlayerId, action: PlayerAction) -> f64 {
        if self.terminated {
            tracing::debug!(%player, ?action, "action after termination ignored");
            return 0.0;
        }

        self.record(player, action);

        if let PlayerAction::Quit = action {
            self.terminated = true;
            tracing::info!(%player, "episode terminated");
            return 0.0;
        }

        let mut reward = 0.0;
        if !self.players[player].goal_complete {
            reward -= 1.0;
        }
        if !action.is_skip() {
            reward -= 1.0;
        }

        match action {
            PlayerAction::Move(direction) => {
                let from = self.players[player].position;
                let to = self.board.grid().step(from, direction);
                self.players[player].position = to;
            }
            PlayerAction::UseSlot(slot) => {
                reward += self.use_slot(player, slot);
            }
            PlayerAction::Skip | PlayerAction::Quit => {}
        }

        reward
    }

    /// Resolve a use-slot action at the player's current position.
    ///
    /// Stages, in priority order: (a) pick up a board item, (b) deposit
    /// into a station, (c) recover from a drop slot, (d) drop the held
    /// item. Stage (c) does not consume the action, so a recovery and a
    /// drop in the same call swap the slot with the drop slot.
    fn use_slot(&mut self, player: PlayerId, slot: usize) -> f64 {
        let pos = self.players[player].position;
        let mut found = false;
        let mut reward = 0.0;

        // (a) item physically present on the board
        if let Some(item) = self.board.take_item_at(pos) {
            if let Some(evicted) = self.players[player].inventory.put(slot, item) {
                tracing::debug!(%player, item = %evicted, slot, "slot occupant overwritten");
            }
            tracing::debug!(%player, item = %item, slot, "picked up item");
            found = true;
        }

        // Slot contents after any pickup; this is also the item that
        // stage (d) drops.
        let held = self.players[player].inventory.get(slot);

        // (b) station at this cell
        if let Some(station) = self.board.grid().station_at(pos) {
            match held {
                Some(item) => {
                    found = true;
                    self.players[player].inventory.take(slot);
                    tracing::debug!(%player, item = %item, %station, "deposited item");
                    let buffer = match station {
                        StationKind::Crucible => &mut self.crucible,
                        StationKind::Bench => &mut self.bench,
                    };
                    if let Some(index) = buffer.deposit(item) {
                        reward += self.distribute_reward(index);
                    }
                }
                None => {
                    tracing::debug!(%player, slot, %station, "no item in slot to deposit");
                }
            }
        }

        // (c) occupied drop slot at this cell
        let mut recovered = false;
        if !found {
            if let Some(index) = self.drops.slot_at(pos) {
                if let Some(item) = self.drops.take(index) {
                    self.players[player].inventory.put(slot, item);
                    tracing::debug!(%player, item = %item, slot, "recovered dropped item");
                    recovered = true;
                }
            }
        }

        // (d) nothing found: drop the item the slot held going in
        if !found {
            if let Some(item) = held {
                if !recovered {
                    self.players[player].inventory.take(slot);
                }
                let marker = self.drops.fill_next(pos, item);
                self.remap.set(marker, item.symbol());
                tracing::debug!(%player, item = %item, marker = %(marker as char), at = %pos, "dropped item");
            }
        }

        reward
    }

    /// Distribute the reward for a freshly constructed artifact.
    ///
    /// Both players are paid independently; a player whose goal matches
    /// has their goal-complete flag latched, which stops their per-step
    /// cost but does not end the episode.
    fn distribute_reward(&mut self, index: usize) -> f64 {
        if !self.constructed.contains(&index) {
            self.constructed.push(index);
        }

        let mut total = 0.0;
        for player in PlayerId::both() {
            let share = self.players[player].goal[index] * GOAL_REWARD;
            tracing::info!(%player, reward = share, artifact = %jewelry_name(index), "distributing reward");
            total += share;
            if share > 0.0 {
                self.players[player].goal_complete = true;
            }
        }
        total
    }

    fn record(&mut self, player: PlayerId, action: PlayerAction) {
        let step = self.history.len() as u32;
        self.history.push_back(ActionRecord {
            player,
            action,
            step,
        });
    }

    /// Whether a QUIT action has terminated the episode.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// A player's simulation state.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerState {
        &self.players[player]
    }

    /// Jewelry indices constructed so far, in construction order.
    #[must_use]
    pub fn constructed(&self) -> &[usize] {
        &self.constructed
    }

    /// The action history (O(1) to clone for replay snapshots).
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// The drop-marker display remapping table.
    #[must_use]
    pub fn remapping(&self) -> &DisplayRemap {
        &self.remap
    }

    pub(crate) fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn drops(&self) -> &DropRing {
        &self.drops
    }

    pub(crate) fn players(&self) -> &PerPlayer<PlayerState> {
        &self.players
    }

    #[cfg(test)]
    pub(crate) fn players_mut(&mut self) -> &mut PerPlayer<PlayerState> {
        &mut self.players
    }

    /// The crucible's tracking buffer (oldest first).
    #[must_use]
    pub fn crucible_items(&self) -> &[Item] {
        self.crucible.items()
    }

    /// The bench's tracking buffer (oldest first).
    #[must_use]
    pub fn bench_items(&self) -> &[Item] {
        self.bench.items()
    }
}
