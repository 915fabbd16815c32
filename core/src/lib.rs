#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Grid Tactics engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing desired mutations, the world executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values describing what
//! actually happened. Rejected commands surface as events carrying a reason
//! enum rather than as panics, so every failure stays local and recoverable.

use serde::{Deserialize, Serialize};

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Welcome to Grid Tactics.";

/// Phase of the turn sequence currently governing which actions are valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TurnPhase {
    /// The player may select cards, hold cards, and commit a move.
    PlayerTurn,
    /// The king attempts its single automatic advance.
    KingTurn,
    /// Terminal phase entered once the king reaches the goal line.
    LevelComplete,
}

/// Cardinal directions used for king advancement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Movement toward decreasing row indices.
    North,
    /// Movement toward increasing column indices.
    East,
    /// Movement toward increasing row indices.
    South,
    /// Movement toward decreasing column indices.
    West,
}

impl Direction {
    /// Returns the unit offset corresponding to one step in this direction.
    #[must_use]
    pub const fn step(self) -> GridOffset {
        match self {
            Self::North => GridOffset::new(0, -1),
            Self::East => GridOffset::new(1, 0),
            Self::South => GridOffset::new(0, 1),
            Self::West => GridOffset::new(-1, 0),
        }
    }
}

/// Location of a single board tile expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPos {
    column: u32,
    row: u32,
}

impl GridPos {
    /// Creates a new grid position.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the position.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the position.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Applies a signed offset, yielding `None` when the result would leave
    /// the non-negative coordinate quadrant.
    #[must_use]
    pub fn offset_by(self, offset: GridOffset) -> Option<GridPos> {
        let column = checked_add_signed(self.column, offset.dx())?;
        let row = checked_add_signed(self.row, offset.dy())?;
        Some(GridPos::new(column, row))
    }

    /// Computes the Manhattan distance between two positions.
    #[must_use]
    pub fn manhattan_distance(self, other: GridPos) -> u32 {
        self.column.abs_diff(other.column) + self.row.abs_diff(other.row)
    }
}

fn checked_add_signed(base: u32, delta: i32) -> Option<u32> {
    if delta >= 0 {
        base.checked_add(delta as u32)
    } else {
        base.checked_sub(delta.unsigned_abs())
    }
}

/// Signed displacement between two grid positions, used by card patterns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridOffset {
    dx: i32,
    dy: i32,
}

impl GridOffset {
    /// Creates a new offset from signed column and row deltas.
    #[must_use]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// Signed column delta.
    #[must_use]
    pub const fn dx(&self) -> i32 {
        self.dx
    }

    /// Signed row delta.
    #[must_use]
    pub const fn dy(&self) -> i32 {
        self.dy
    }
}

/// Unique identifier assigned to a unit by the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitId(u32);

impl UnitId {
    /// Creates a new unit identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Identifier of a move-card definition within the installed catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(u32);

impl CardId {
    /// Creates a new card identifier with the provided catalog index.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the catalog index backing the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Non-negative hit-point counter carried by every unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Health(u32);

impl Health {
    /// Creates a new health value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the remaining hit points.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Subtracts damage, saturating at zero.
    #[must_use]
    pub const fn saturating_sub(self, amount: u32) -> Self {
        Self(self.0.saturating_sub(amount))
    }

    /// Reports whether the unit has been reduced to zero hit points.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

/// Tagged variant distinguishing the behavior attached to a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    /// Autonomous unit that advances one step per turn toward the goal line.
    King,
    /// Controllable unit moved through the card hand.
    Player,
    /// Obstacle unit spawned dynamically during the level.
    Enemy,
}

/// Row of the board that completes the level once the king stands on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GoalLine {
    row: u32,
}

impl GoalLine {
    /// Creates a goal line anchored at the provided row.
    #[must_use]
    pub const fn at_row(row: u32) -> Self {
        Self { row }
    }

    /// Row index that defines the goal.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Reports whether the provided position satisfies the win condition.
    #[must_use]
    pub const fn is_reached(&self, position: GridPos) -> bool {
        position.row() == self.row
    }
}

/// Displacement rule attached to a move card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovePattern {
    /// Finite set of fixed offsets; destinations must be empty tiles.
    Offsets(Vec<GridOffset>),
    /// Ray directions extended tile by tile until the board edge. Visited
    /// tiles are candidates regardless of occupancy; the grid enforces
    /// occupancy only when the move is committed.
    Sliding(Vec<GridOffset>),
}

/// Immutable definition of a move card as loaded from the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCardDefinition {
    /// Display name of the card.
    pub name: String,
    /// Rules text shown to the player.
    pub description: String,
    /// Cost charged when the card is played.
    pub cost: u32,
    /// Displacement rule granted by the card.
    pub pattern: MovePattern,
}

/// Parameters describing a level to construct.
#[derive(Clone, Debug, PartialEq)]
pub struct LevelConfig {
    /// Number of tile columns laid out on the board.
    pub columns: u32,
    /// Number of tile rows laid out on the board.
    pub rows: u32,
    /// Starting position of the king.
    pub king_start: GridPos,
    /// Starting position of the player.
    pub player_start: GridPos,
    /// Direction the king advances each turn.
    pub king_direction: Direction,
    /// Row that completes the level once the king reaches it.
    pub goal_row: u32,
    /// Maximum number of cards held in the hand after a draw.
    pub hand_size: usize,
    /// Multiset of catalog entries forming the draw pool.
    pub pool: Vec<CardId>,
    /// Tiles marked unwalkable at level construction.
    pub blocked: Vec<GridPos>,
    /// Seed for the deterministic draw stream.
    pub deck_seed: u64,
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Rebuilds the level from the provided configuration.
    ConfigureLevel {
        /// Parameters of the level to construct.
        config: LevelConfig,
    },
    /// Rebuilds the level from the most recently applied configuration.
    ResetLevel,
    /// Marks the provided hand card as the active selection.
    SelectCard {
        /// Card the player wants to preview.
        card: CardId,
    },
    /// Clears the active selection, if any.
    DeselectCard,
    /// Commits the active selection toward the provided tile.
    ClickTile {
        /// Destination tile the player clicked.
        position: GridPos,
    },
    /// Keeps a hand card for the next hand instead of discarding it.
    HoldCard {
        /// Card to place into the held set.
        card: CardId,
    },
    /// Returns a held card to normal discard behavior.
    ReleaseCard {
        /// Card to remove from the held set.
        card: CardId,
    },
    /// Ends the player phase and runs the king phase to completion.
    EndPlayerTurn,
    /// Spawns an enemy obstacle onto the board.
    SpawnEnemy {
        /// Tile the enemy should occupy.
        position: GridPos,
        /// Hit points assigned to the enemy.
        health: Health,
    },
    /// Applies damage to a unit, removing it when health reaches zero.
    DamageUnit {
        /// Unit receiving the damage.
        unit: UnitId,
        /// Amount of hit points to remove.
        amount: u32,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// One-shot notification that the level finished constructing and the
    /// world accepts gameplay commands.
    LevelInitialized,
    /// Reports the new hand composition after any hand mutation.
    HandUpdated {
        /// Cards currently in the hand, in order.
        hand: Vec<CardId>,
    },
    /// Announces that non-held cards were discarded from the hand.
    HandCleared,
    /// Confirms that a card became the active selection.
    CardSelected {
        /// Card that was selected.
        card: CardId,
    },
    /// Confirms that a card stopped being the active selection.
    CardDeselected {
        /// Card that was deselected.
        card: CardId,
    },
    /// Announces that the selection was cleared without a direct deselect,
    /// for example after a committed move or an external hand clear.
    SelectionCleared,
    /// Confirms that a card entered the held set.
    CardHeld {
        /// Card that will carry over into the next hand.
        card: CardId,
    },
    /// Confirms that a card left the held set.
    CardReleased {
        /// Card that will discard normally again.
        card: CardId,
    },
    /// Reports that a hold or release request was rejected.
    HoldRejected {
        /// Card named in the request.
        card: CardId,
        /// Specific reason the request failed.
        reason: HoldRejection,
    },
    /// Reports that a selection request was rejected.
    SelectionRejected {
        /// Card named in the request.
        card: CardId,
        /// Specific reason the selection failed.
        reason: SelectionRejection,
    },
    /// Confirms that a unit moved between two tiles.
    UnitMoved {
        /// Unit that moved.
        unit: UnitId,
        /// Tile the unit occupied before the move.
        from: GridPos,
        /// Tile the unit occupies after the move.
        to: GridPos,
    },
    /// Reports that a commit attempt was rejected.
    MoveRejected {
        /// Destination named in the request.
        position: GridPos,
        /// Specific reason the move failed.
        reason: MoveRejection,
    },
    /// Confirms that the king advanced one step during its phase.
    KingAdvanced {
        /// Tile the king occupied before advancing.
        from: GridPos,
        /// Tile the king occupies after advancing.
        to: GridPos,
    },
    /// Reports that the king could not advance this turn.
    KingBlocked {
        /// Tile the king remains on.
        at: GridPos,
    },
    /// Announces that a new turn phase began.
    TurnStarted {
        /// Phase that became active.
        phase: TurnPhase,
        /// One-based index of the current turn.
        turn: u32,
    },
    /// Announces that a turn phase finished.
    TurnEnded {
        /// Phase that just completed.
        phase: TurnPhase,
    },
    /// Announces that the king reached the goal line. Terminal.
    LevelCompleted,
    /// Confirms that an enemy was spawned onto the board.
    EnemySpawned {
        /// Identifier assigned to the enemy.
        unit: UnitId,
        /// Tile the enemy occupies.
        position: GridPos,
    },
    /// Reports that an enemy spawn request was rejected.
    SpawnRejected {
        /// Tile named in the request.
        position: GridPos,
        /// Specific reason the spawn failed.
        reason: SpawnRejection,
    },
    /// Confirms that a unit took damage and survived.
    UnitDamaged {
        /// Unit that was damaged.
        unit: UnitId,
        /// Hit points remaining after the damage.
        remaining: Health,
    },
    /// Confirms that a unit died and was removed from the board.
    UnitDied {
        /// Unit that died.
        unit: UnitId,
        /// Tile the unit vacated.
        position: GridPos,
    },
    /// Reports that a damage request was rejected.
    DamageRejected {
        /// Unit named in the request.
        unit: UnitId,
        /// Specific reason the damage failed.
        reason: DamageRejection,
    },
}

/// Reasons a selection request may be rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionRejection {
    /// The world has no constructed level yet.
    NotReady,
    /// Selection is only valid during the player phase.
    WrongPhase,
    /// The card does not exist in the installed catalog.
    UnknownCard,
    /// The card is not part of the current hand.
    NotInHand,
}

/// Reasons a hold or release request may be rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HoldRejection {
    /// The world has no constructed level yet.
    NotReady,
    /// Holding is only valid during the player phase.
    WrongPhase,
    /// The card is not part of the current hand.
    NotInHand,
    /// The card is not currently held.
    NotHeld,
}

/// Reasons a commit attempt may be rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveRejection {
    /// The world has no constructed level yet.
    NotReady,
    /// Moves are only valid during the player phase.
    WrongPhase,
    /// No card is currently selected.
    NoSelection,
    /// The selected card left the hand; the stale selection was cleared.
    NotInHand,
    /// The clicked tile is not a legal destination for the selected card.
    NotACandidate,
    /// The destination lies outside the board.
    OutOfBounds,
    /// The destination tile is not walkable.
    Unwalkable,
    /// The destination tile is occupied by another unit.
    Occupied,
}

/// Reasons an enemy spawn request may be rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpawnRejection {
    /// The world has no constructed level yet.
    NotReady,
    /// The requested tile lies outside the board.
    OutOfBounds,
    /// The requested tile is not walkable.
    Unwalkable,
    /// The requested tile is occupied by another unit.
    Occupied,
}

/// Reasons a damage request may be rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageRejection {
    /// The world has no constructed level yet.
    NotReady,
    /// No unit with the provided identifier exists.
    UnknownUnit,
}

/// Failure modes reported by occupancy mutations on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OccupancyError {
    /// The position lies outside the board.
    OutOfBounds,
    /// The tile is not walkable.
    Unwalkable,
    /// The tile is occupied by a different unit.
    Occupied,
}

/// Read-only view over the board's walkability and occupancy, indexed
/// row-major.
#[derive(Clone, Copy, Debug)]
pub struct BoardView<'a> {
    walkable: &'a [bool],
    occupants: &'a [Option<UnitId>],
    columns: u32,
    rows: u32,
}

impl<'a> BoardView<'a> {
    /// Captures a new board view backed by the provided slices.
    #[must_use]
    pub fn new(
        walkable: &'a [bool],
        occupants: &'a [Option<UnitId>],
        columns: u32,
        rows: u32,
    ) -> Self {
        Self {
            walkable,
            occupants,
            columns,
            rows,
        }
    }

    /// Reports whether the position lies inside the board.
    #[must_use]
    pub const fn in_bounds(&self, position: GridPos) -> bool {
        position.column() < self.columns && position.row() < self.rows
    }

    /// Reports whether the tile may ever be entered.
    #[must_use]
    pub fn is_walkable(&self, position: GridPos) -> bool {
        self.index(position)
            .map_or(false, |index| self.walkable.get(index).copied().unwrap_or(false))
    }

    /// Returns the unit occupying the provided tile, if any.
    #[must_use]
    pub fn occupant(&self, position: GridPos) -> Option<UnitId> {
        self.index(position)
            .and_then(|index| self.occupants.get(index).copied().flatten())
    }

    /// Reports whether the tile is in bounds, walkable, and unoccupied.
    #[must_use]
    pub fn is_empty(&self, position: GridPos) -> bool {
        self.is_walkable(position) && self.occupant(position).is_none()
    }

    /// Provides the dimensions of the underlying board.
    #[must_use]
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.columns, self.rows)
    }

    fn index(&self, position: GridPos) -> Option<usize> {
        if !self.in_bounds(position) {
            return None;
        }
        let row = usize::try_from(position.row()).ok()?;
        let column = usize::try_from(position.column()).ok()?;
        let width = usize::try_from(self.columns).ok()?;
        Some(row * width + column)
    }
}

/// Query-side description of a single tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileSnapshot {
    /// Position of the tile on the board.
    pub position: GridPos,
    /// Whether units may ever enter the tile.
    pub walkable: bool,
    /// Unit currently standing on the tile, if any.
    pub occupant: Option<UnitId>,
}

/// Immutable representation of a single unit's state used for queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitSnapshot {
    /// Identifier assigned to the unit by the registry.
    pub id: UnitId,
    /// Behavioral tag of the unit.
    pub kind: UnitKind,
    /// Display name of the unit.
    pub name: String,
    /// Remaining hit points.
    pub health: Health,
    /// Tile the unit currently occupies.
    pub position: GridPos,
}

/// Read-only snapshot describing a set of units in deterministic order.
#[derive(Clone, Debug, Default)]
pub struct UnitView {
    snapshots: Vec<UnitSnapshot>,
}

impl UnitView {
    /// Creates a new unit view from the provided snapshots.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<UnitSnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.id);
        Self { snapshots }
    }

    /// Iterator over the captured snapshots in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &UnitSnapshot> {
        self.snapshots.iter()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<UnitSnapshot> {
        self.snapshots
    }
}

/// Read-only snapshot of the deck economy visible to adapters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HandSnapshot {
    /// Cards currently in the hand, in order. Held cards appear first
    /// immediately after a draw.
    pub hand: Vec<CardId>,
    /// Cards flagged to carry over into the next hand.
    pub held: Vec<CardId>,
    /// Catalog entries currently marked as used.
    pub used: Vec<CardId>,
}

#[cfg(test)]
mod tests {
    use super::{
        CardId, Direction, GoalLine, GridOffset, GridPos, Health, MoveCardDefinition, MovePattern,
        MoveRejection, OccupancyError, SpawnRejection, UnitId,
    };
    use serde::{de::DeserializeOwned, Serialize};

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn manhattan_distance_matches_expectation() {
        let origin = GridPos::new(1, 1);
        let destination = GridPos::new(4, 3);
        assert_eq!(origin.manhattan_distance(destination), 5);
        assert_eq!(destination.manhattan_distance(origin), 5);
    }

    #[test]
    fn offset_by_applies_signed_deltas() {
        let origin = GridPos::new(2, 3);
        assert_eq!(
            origin.offset_by(GridOffset::new(1, -2)),
            Some(GridPos::new(3, 1))
        );
        assert_eq!(
            origin.offset_by(GridOffset::new(-2, 0)),
            Some(GridPos::new(0, 3))
        );
    }

    #[test]
    fn offset_by_rejects_negative_coordinates() {
        let origin = GridPos::new(0, 1);
        assert_eq!(origin.offset_by(GridOffset::new(-1, 0)), None);
        assert_eq!(origin.offset_by(GridOffset::new(0, -2)), None);
    }

    #[test]
    fn direction_steps_are_unit_offsets() {
        assert_eq!(Direction::North.step(), GridOffset::new(0, -1));
        assert_eq!(Direction::East.step(), GridOffset::new(1, 0));
        assert_eq!(Direction::South.step(), GridOffset::new(0, 1));
        assert_eq!(Direction::West.step(), GridOffset::new(-1, 0));
    }

    #[test]
    fn goal_line_recognizes_only_its_row() {
        let goal = GoalLine::at_row(4);
        assert!(goal.is_reached(GridPos::new(2, 4)));
        assert!(!goal.is_reached(GridPos::new(2, 3)));
    }

    #[test]
    fn health_saturates_at_zero() {
        let health = Health::new(2);
        let drained = health.saturating_sub(5);
        assert!(drained.is_zero());
        assert_eq!(drained.get(), 0);
    }

    #[test]
    fn unit_id_round_trips_through_bincode() {
        assert_round_trip(&UnitId::new(42));
    }

    #[test]
    fn card_id_round_trips_through_bincode() {
        assert_round_trip(&CardId::new(7));
    }

    #[test]
    fn grid_pos_round_trips_through_bincode() {
        assert_round_trip(&GridPos::new(5, 9));
    }

    #[test]
    fn move_card_definition_round_trips_through_bincode() {
        let definition = MoveCardDefinition {
            name: "Lance".to_owned(),
            description: "Slide along the file.".to_owned(),
            cost: 1,
            pattern: MovePattern::Sliding(vec![GridOffset::new(0, -1), GridOffset::new(0, 1)]),
        };
        assert_round_trip(&definition);
    }

    #[test]
    fn rejection_reasons_round_trip_through_bincode() {
        assert_round_trip(&MoveRejection::NotACandidate);
        assert_round_trip(&SpawnRejection::Occupied);
        assert_round_trip(&OccupancyError::Unwalkable);
    }
}
