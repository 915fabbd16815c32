#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for Grid Tactics.
//!
//! The [`World`] is the session object: it constructs and wires the grid,
//! the unit registry, the card catalog, the deck engine, the selection
//! state, and the turn tracker, and passes references explicitly between
//! them. All mutation flows through [`apply`], which resolves one command
//! fully before returning and reports every outcome — accepted or
//! rejected — through the `out_events` vector.

mod catalog;
mod deck;
mod grid;
mod selection;
mod turn;
mod units;

use tactics_core::{
    CardId, Command, DamageRejection, Direction, Event, GoalLine, GridPos, Health, HoldRejection,
    LevelConfig, MoveRejection, OccupancyError, SelectionRejection, SpawnRejection, TurnPhase,
    UnitId, UnitKind, WELCOME_BANNER,
};
use tactics_system_movement as movement;

use catalog::CardCatalog;
use deck::{DeckEngine, DeckError};
use grid::GridModel;
use selection::SelectionState;
use turn::TurnTracker;

const DEFAULT_DECK_SEED: u64 = 0x9e37_79b9_7f4a_7c15;
const KING_HEALTH: u32 = 3;
const PLAYER_HEALTH: u32 = 3;

const DEFAULT_COLUMNS: u32 = 7;
const DEFAULT_ROWS: u32 = 7;

/// Represents the authoritative Grid Tactics world state.
#[derive(Debug)]
pub struct World {
    banner: &'static str,
    catalog: CardCatalog,
    config: LevelConfig,
    grid: GridModel,
    units: units::UnitRegistry,
    deck: DeckEngine,
    selection: SelectionState,
    turn: TurnTracker,
    goal: GoalLine,
    king: Option<UnitId>,
    player: Option<UnitId>,
    ready: bool,
}

impl World {
    /// Creates a world with the built-in catalog and the default level.
    #[must_use]
    pub fn new() -> Self {
        Self::with_catalog(Vec::new())
    }

    /// Creates a world using an externally loaded card catalog. An empty
    /// list installs the built-in catalog instead.
    #[must_use]
    pub fn with_catalog(definitions: Vec<tactics_core::MoveCardDefinition>) -> Self {
        let catalog = if definitions.is_empty() {
            CardCatalog::builtin()
        } else {
            CardCatalog::new(definitions)
        };
        let config = default_config(&catalog);
        let mut world = Self {
            banner: WELCOME_BANNER,
            grid: GridModel::new(config.columns, config.rows),
            units: units::UnitRegistry::new(),
            deck: DeckEngine::new(Vec::new(), config.hand_size, config.deck_seed),
            selection: SelectionState::default(),
            turn: TurnTracker::new(),
            goal: GoalLine::at_row(config.goal_row),
            king: None,
            player: None,
            ready: false,
            catalog,
            config,
        };
        world.build_level(&mut Vec::new());
        world
    }

    /// Rebuilds every component from the stored configuration. A
    /// configuration that cannot produce a playable level leaves the world
    /// inert: gameplay commands are rejected until a valid configuration
    /// arrives.
    fn build_level(&mut self, out_events: &mut Vec<Event>) {
        self.ready = false;
        self.king = None;
        self.player = None;
        let _ = self.selection.clear();
        self.units.clear();
        self.catalog.clear_used_flags();
        self.grid = GridModel::new(self.config.columns, self.config.rows);
        self.turn = TurnTracker::new();
        self.goal = GoalLine::at_row(self.config.goal_row);
        let catalog = &self.catalog;
        let pool: Vec<CardId> = self
            .config
            .pool
            .iter()
            .copied()
            .filter(|card| catalog.contains(*card))
            .collect();
        self.deck = DeckEngine::new(pool, self.config.hand_size, self.config.deck_seed);

        if self.config.columns == 0 || self.config.rows == 0 {
            return;
        }
        if self.config.king_start == self.config.player_start {
            return;
        }
        for blocked in &self.config.blocked {
            self.grid.block(*blocked);
        }

        let king = self.units.register(
            UnitKind::King,
            "King",
            Health::new(KING_HEALTH),
            self.config.king_start,
        );
        if self.grid.set_occupant(self.config.king_start, king).is_err() {
            self.units.clear();
            return;
        }
        let player = self.units.register(
            UnitKind::Player,
            "Player",
            Health::new(PLAYER_HEALTH),
            self.config.player_start,
        );
        if self
            .grid
            .set_occupant(self.config.player_start, player)
            .is_err()
        {
            self.grid.clear_occupant(self.config.king_start);
            self.units.clear();
            return;
        }

        self.king = Some(king);
        self.player = Some(player);
        self.ready = true;
        out_events.push(Event::LevelInitialized);
        self.enter_player_phase(out_events);
    }

    /// Entry sequence shared by level setup and the turn loop: stale
    /// selection cleared, hand cleared (held cards survive), fresh draw,
    /// turn-start notification.
    fn enter_player_phase(&mut self, out_events: &mut Vec<Event>) {
        if self.selection.clear().is_some() {
            out_events.push(Event::SelectionCleared);
        }
        self.deck.clear_hand();
        out_events.push(Event::HandCleared);
        self.deck.draw_hand(&mut self.catalog);
        out_events.push(Event::HandUpdated {
            hand: self.deck.hand().to_vec(),
        });
        out_events.push(Event::TurnStarted {
            phase: TurnPhase::PlayerTurn,
            turn: self.turn.turn(),
        });
    }

    fn handle_select_card(&mut self, card: CardId, out_events: &mut Vec<Event>) {
        let rejection = if !self.ready {
            Some(SelectionRejection::NotReady)
        } else if self.turn.phase() != TurnPhase::PlayerTurn {
            Some(SelectionRejection::WrongPhase)
        } else if !self.catalog.contains(card) {
            Some(SelectionRejection::UnknownCard)
        } else if !self.deck.contains(card) {
            Some(SelectionRejection::NotInHand)
        } else {
            None
        };
        if let Some(reason) = rejection {
            out_events.push(Event::SelectionRejected { card, reason });
            return;
        }

        if self.selection.selected() == Some(card) {
            return;
        }
        if let Some(previous) = self.selection.clear() {
            out_events.push(Event::CardDeselected { card: previous });
        }

        let Some(origin) = self
            .player
            .and_then(|id| self.units.get(id))
            .map(|unit| unit.position)
        else {
            out_events.push(Event::SelectionRejected {
                card,
                reason: SelectionRejection::NotReady,
            });
            return;
        };
        let Some(pattern) = self
            .catalog
            .definition(card)
            .map(|definition| definition.pattern.clone())
        else {
            out_events.push(Event::SelectionRejected {
                card,
                reason: SelectionRejection::UnknownCard,
            });
            return;
        };

        let mut candidates = Vec::new();
        {
            let (columns, rows) = self.grid.dimensions();
            let view = tactics_core::BoardView::new(
                self.grid.walkable_cells(),
                self.grid.occupant_cells(),
                columns,
                rows,
            );
            movement::candidate_destinations(&pattern, origin, view, &mut candidates);
        }
        self.selection.select(card, candidates);
        out_events.push(Event::CardSelected { card });
    }

    fn handle_deselect_card(&mut self, out_events: &mut Vec<Event>) {
        if let Some(card) = self.selection.clear() {
            out_events.push(Event::CardDeselected { card });
        }
    }

    fn handle_click_tile(&mut self, position: GridPos, out_events: &mut Vec<Event>) {
        let rejection = if !self.ready {
            Some(MoveRejection::NotReady)
        } else if self.turn.phase() != TurnPhase::PlayerTurn {
            Some(MoveRejection::WrongPhase)
        } else if self.selection.selected().is_none() {
            Some(MoveRejection::NoSelection)
        } else {
            None
        };
        if let Some(reason) = rejection {
            out_events.push(Event::MoveRejected { position, reason });
            return;
        }
        let Some(card) = self.selection.selected() else {
            out_events.push(Event::MoveRejected {
                position,
                reason: MoveRejection::NoSelection,
            });
            return;
        };

        // A stale selection (the hand changed underneath the UI) aborts the
        // move and clears itself without touching the grid.
        if !self.deck.contains(card) {
            let _ = self.selection.clear();
            out_events.push(Event::SelectionCleared);
            out_events.push(Event::MoveRejected {
                position,
                reason: MoveRejection::NotInHand,
            });
            return;
        }

        if !self.selection.is_candidate(position) {
            out_events.push(Event::MoveRejected {
                position,
                reason: MoveRejection::NotACandidate,
            });
            return;
        }

        let Some(player_id) = self.player else {
            out_events.push(Event::MoveRejected {
                position,
                reason: MoveRejection::NotReady,
            });
            return;
        };
        let Some(from) = self.units.get(player_id).map(|unit| unit.position) else {
            out_events.push(Event::MoveRejected {
                position,
                reason: MoveRejection::NotReady,
            });
            return;
        };

        // The card is consumed before the grid is touched. A destination the
        // grid refuses (an occupied sliding candidate) therefore costs the
        // card, and the selection clears because the card left the hand.
        if self.deck.use_card(card, &mut self.catalog).is_err() {
            out_events.push(Event::MoveRejected {
                position,
                reason: MoveRejection::NotInHand,
            });
            return;
        }
        out_events.push(Event::HandUpdated {
            hand: self.deck.hand().to_vec(),
        });

        match self.grid.move_occupant(player_id, from, position) {
            Ok(()) => {
                if let Some(unit) = self.units.get_mut(player_id) {
                    unit.position = position;
                }
                out_events.push(Event::UnitMoved {
                    unit: player_id,
                    from,
                    to: position,
                });
            }
            Err(error) => {
                out_events.push(Event::MoveRejected {
                    position,
                    reason: occupancy_rejection(error),
                });
            }
        }

        let _ = self.selection.clear();
        out_events.push(Event::SelectionCleared);
    }

    fn handle_hold_card(&mut self, card: CardId, out_events: &mut Vec<Event>) {
        if let Some(reason) = self.hold_phase_rejection() {
            out_events.push(Event::HoldRejected { card, reason });
            return;
        }
        match self.deck.hold_card(card) {
            Ok(true) => out_events.push(Event::CardHeld { card }),
            Ok(false) => {}
            Err(DeckError::NotInHand) | Err(DeckError::NotHeld) => {
                out_events.push(Event::HoldRejected {
                    card,
                    reason: HoldRejection::NotInHand,
                });
            }
        }
    }

    fn handle_release_card(&mut self, card: CardId, out_events: &mut Vec<Event>) {
        if let Some(reason) = self.hold_phase_rejection() {
            out_events.push(Event::HoldRejected { card, reason });
            return;
        }
        match self.deck.release_card(card) {
            Ok(()) => out_events.push(Event::CardReleased { card }),
            Err(DeckError::NotHeld) | Err(DeckError::NotInHand) => {
                out_events.push(Event::HoldRejected {
                    card,
                    reason: HoldRejection::NotHeld,
                });
            }
        }
    }

    fn hold_phase_rejection(&self) -> Option<HoldRejection> {
        if !self.ready {
            Some(HoldRejection::NotReady)
        } else if self.turn.phase() != TurnPhase::PlayerTurn {
            Some(HoldRejection::WrongPhase)
        } else {
            None
        }
    }

    /// Runs the king phase to completion: exactly one advance attempt, then
    /// either level completion or the next player turn.
    fn handle_end_player_turn(&mut self, out_events: &mut Vec<Event>) {
        // Outside the player phase this is a silent no-op: state unchanged,
        // zero notifications.
        if !self.ready || self.turn.phase() != TurnPhase::PlayerTurn {
            return;
        }

        out_events.push(Event::TurnEnded {
            phase: TurnPhase::PlayerTurn,
        });
        self.turn.begin_king_phase();
        out_events.push(Event::TurnStarted {
            phase: TurnPhase::KingTurn,
            turn: self.turn.turn(),
        });

        self.advance_king(out_events);

        let king_position = self
            .king
            .and_then(|id| self.units.get(id))
            .map(|unit| unit.position);
        if let Some(position) = king_position {
            if self.goal.is_reached(position) {
                self.turn.complete_level();
                out_events.push(Event::LevelCompleted);
                return;
            }
        }

        out_events.push(Event::TurnEnded {
            phase: TurnPhase::KingTurn,
        });
        self.turn.begin_player_phase();
        self.enter_player_phase(out_events);
    }

    fn advance_king(&mut self, out_events: &mut Vec<Event>) {
        let Some(king_id) = self.king else {
            return;
        };
        let Some(from) = self.units.get(king_id).map(|unit| unit.position) else {
            return;
        };

        let target = {
            let (columns, rows) = self.grid.dimensions();
            let view = tactics_core::BoardView::new(
                self.grid.walkable_cells(),
                self.grid.occupant_cells(),
                columns,
                rows,
            );
            movement::advance_target(from, self.config.king_direction, view)
        };

        match target {
            Some(to) => match self.grid.move_occupant(king_id, from, to) {
                Ok(()) => {
                    if let Some(unit) = self.units.get_mut(king_id) {
                        unit.position = to;
                    }
                    out_events.push(Event::KingAdvanced { from, to });
                }
                Err(_) => out_events.push(Event::KingBlocked { at: from }),
            },
            None => out_events.push(Event::KingBlocked { at: from }),
        }
    }

    fn handle_spawn_enemy(
        &mut self,
        position: GridPos,
        health: Health,
        out_events: &mut Vec<Event>,
    ) {
        if !self.ready {
            out_events.push(Event::SpawnRejected {
                position,
                reason: SpawnRejection::NotReady,
            });
            return;
        }

        let unit = self
            .units
            .register(UnitKind::Enemy, "Enemy", health, position);
        match self.grid.set_occupant(position, unit) {
            Ok(()) => out_events.push(Event::EnemySpawned { unit, position }),
            Err(error) => {
                let _ = self.units.unregister(unit);
                out_events.push(Event::SpawnRejected {
                    position,
                    reason: spawn_rejection(error),
                });
            }
        }
    }

    fn handle_damage_unit(&mut self, unit: UnitId, amount: u32, out_events: &mut Vec<Event>) {
        if !self.ready {
            out_events.push(Event::DamageRejected {
                unit,
                reason: DamageRejection::NotReady,
            });
            return;
        }
        let Some(state) = self.units.get_mut(unit) else {
            out_events.push(Event::DamageRejected {
                unit,
                reason: DamageRejection::UnknownUnit,
            });
            return;
        };

        state.health = state.health.saturating_sub(amount);
        if !state.health.is_zero() {
            out_events.push(Event::UnitDamaged {
                unit,
                remaining: state.health,
            });
            return;
        }

        let position = state.position;
        let kind = state.kind;
        self.grid.clear_occupant(position);
        let _ = self.units.unregister(unit);
        // Losing either royal leaves the engine inert until the next reset.
        if kind == UnitKind::King || kind == UnitKind::Player {
            self.ready = false;
        }
        out_events.push(Event::UnitDied { unit, position });
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

fn default_config(catalog: &CardCatalog) -> LevelConfig {
    LevelConfig {
        columns: DEFAULT_COLUMNS,
        rows: DEFAULT_ROWS,
        king_start: GridPos::new(3, 0),
        player_start: GridPos::new(5, 6),
        king_direction: Direction::South,
        goal_row: DEFAULT_ROWS - 1,
        hand_size: 4,
        pool: catalog.default_pool(),
        blocked: Vec::new(),
        deck_seed: DEFAULT_DECK_SEED,
    }
}

const fn occupancy_rejection(error: OccupancyError) -> MoveRejection {
    match error {
        OccupancyError::OutOfBounds => MoveRejection::OutOfBounds,
        OccupancyError::Unwalkable => MoveRejection::Unwalkable,
        OccupancyError::Occupied => MoveRejection::Occupied,
    }
}

const fn spawn_rejection(error: OccupancyError) -> SpawnRejection {
    match error {
        OccupancyError::OutOfBounds => SpawnRejection::OutOfBounds,
        OccupancyError::Unwalkable => SpawnRejection::Unwalkable,
        OccupancyError::Occupied => SpawnRejection::Occupied,
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::ConfigureLevel { config } => {
            world.config = config;
            world.build_level(out_events);
        }
        Command::ResetLevel => world.build_level(out_events),
        Command::SelectCard { card } => world.handle_select_card(card, out_events),
        Command::DeselectCard => world.handle_deselect_card(out_events),
        Command::ClickTile { position } => world.handle_click_tile(position, out_events),
        Command::HoldCard { card } => world.handle_hold_card(card, out_events),
        Command::ReleaseCard { card } => world.handle_release_card(card, out_events),
        Command::EndPlayerTurn => world.handle_end_player_turn(out_events),
        Command::SpawnEnemy { position, health } => {
            world.handle_spawn_enemy(position, health, out_events);
        }
        Command::DamageUnit { unit, amount } => {
            world.handle_damage_unit(unit, amount, out_events);
        }
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use super::World;
    use tactics_core::{
        BoardView, CardId, GoalLine, GridPos, HandSnapshot, MoveCardDefinition, TileSnapshot,
        TurnPhase, UnitId, UnitSnapshot, UnitView,
    };

    /// Retrieves the welcome banner that adapters may display to players.
    #[must_use]
    pub fn welcome_banner(world: &World) -> &'static str {
        world.banner
    }

    /// Reports whether the world holds a playable level.
    #[must_use]
    pub fn is_ready(world: &World) -> bool {
        world.ready
    }

    /// Current phase of the turn sequence.
    #[must_use]
    pub fn turn_phase(world: &World) -> TurnPhase {
        world.turn.phase()
    }

    /// One-based index of the current turn.
    #[must_use]
    pub fn turn_count(world: &World) -> u32 {
        world.turn.turn()
    }

    /// Captures the hand, the held set, and the used flags.
    #[must_use]
    pub fn hand_snapshot(world: &World) -> HandSnapshot {
        world.deck.snapshot(&world.catalog)
    }

    /// Card currently selected, if any.
    #[must_use]
    pub fn selected_card(world: &World) -> Option<CardId> {
        world.selection.selected()
    }

    /// Preview destinations computed for the active selection.
    #[must_use]
    pub fn selection_preview(world: &World) -> &[GridPos] {
        world.selection.candidates()
    }

    /// Reports whether the card is flagged for carryover.
    #[must_use]
    pub fn is_card_held(world: &World, card: CardId) -> bool {
        world.deck.is_held(card)
    }

    /// Exposes a read-only view of the board's walkability and occupancy.
    #[must_use]
    pub fn board_view(world: &World) -> BoardView<'_> {
        let (columns, rows) = world.grid.dimensions();
        BoardView::new(
            world.grid.walkable_cells(),
            world.grid.occupant_cells(),
            columns,
            rows,
        )
    }

    /// Describes a single tile, or `None` outside the board.
    #[must_use]
    pub fn tile(world: &World, position: GridPos) -> Option<TileSnapshot> {
        world.grid.tile(position)
    }

    /// Snapshot of the king, when it is alive and placed.
    #[must_use]
    pub fn king(world: &World) -> Option<UnitSnapshot> {
        world
            .king
            .and_then(|id| world.units.get(id))
            .map(super::units::UnitState::snapshot)
    }

    /// Snapshot of the player, when it is alive and placed.
    #[must_use]
    pub fn player(world: &World) -> Option<UnitSnapshot> {
        world
            .player
            .and_then(|id| world.units.get(id))
            .map(super::units::UnitState::snapshot)
    }

    /// Snapshot view of every live enemy in identifier order.
    #[must_use]
    pub fn enemies(world: &World) -> UnitView {
        UnitView::from_snapshots(world.units.enemy_snapshots())
    }

    /// Unit standing on the provided tile, if any.
    #[must_use]
    pub fn unit_at(world: &World, position: GridPos) -> Option<UnitId> {
        world.grid.occupant(position)
    }

    /// Reports whether the catalog entry is flagged used this turn.
    #[must_use]
    pub fn is_card_used(world: &World, card: CardId) -> bool {
        world.catalog.is_used(card)
    }

    /// Definition of a catalog entry, or `None` for an unknown identifier.
    #[must_use]
    pub fn card_definition(world: &World, card: CardId) -> Option<&MoveCardDefinition> {
        world.catalog.definition(card)
    }

    /// Number of definitions in the installed catalog.
    #[must_use]
    pub fn catalog_len(world: &World) -> usize {
        world.catalog.len()
    }

    /// Row the king must reach to complete the level.
    #[must_use]
    pub fn goal_line(world: &World) -> GoalLine {
        world.goal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_config() -> LevelConfig {
        LevelConfig {
            columns: 5,
            rows: 5,
            king_start: GridPos::new(2, 0),
            player_start: GridPos::new(0, 4),
            king_direction: Direction::South,
            goal_row: 4,
            hand_size: 4,
            pool: vec![CardId::new(0)],
            blocked: Vec::new(),
            deck_seed: 1,
        }
    }

    #[test]
    fn new_world_is_ready_with_defaults() {
        let world = World::new();
        assert!(query::is_ready(&world));
        assert_eq!(query::turn_phase(&world), TurnPhase::PlayerTurn);
        assert_eq!(query::turn_count(&world), 1);
        assert!(query::king(&world).is_some());
        assert!(query::player(&world).is_some());
        assert_eq!(query::hand_snapshot(&world).hand.len(), 4);
    }

    #[test]
    fn configure_emits_initialization_sequence() {
        let mut world = World::new();
        let mut events = Vec::new();
        apply(
            &mut world,
            Command::ConfigureLevel {
                config: minimal_config(),
            },
            &mut events,
        );

        assert_eq!(events.first(), Some(&Event::LevelInitialized));
        assert!(events.contains(&Event::HandCleared));
        assert!(events
            .iter()
            .any(|event| matches!(event, Event::HandUpdated { .. })));
        assert_eq!(
            events.last(),
            Some(&Event::TurnStarted {
                phase: TurnPhase::PlayerTurn,
                turn: 1
            })
        );
    }

    #[test]
    fn zero_area_board_leaves_the_world_inert() {
        let mut world = World::new();
        let mut events = Vec::new();
        let mut config = minimal_config();
        config.columns = 0;
        apply(&mut world, Command::ConfigureLevel { config }, &mut events);

        assert!(events.is_empty());
        assert!(!query::is_ready(&world));

        apply(
            &mut world,
            Command::SelectCard {
                card: CardId::new(0),
            },
            &mut events,
        );
        assert_eq!(
            events.last(),
            Some(&Event::SelectionRejected {
                card: CardId::new(0),
                reason: SelectionRejection::NotReady,
            })
        );
    }

    #[test]
    fn coinciding_starts_leave_the_world_inert() {
        let mut world = World::new();
        let mut events = Vec::new();
        let mut config = minimal_config();
        config.player_start = config.king_start;
        apply(&mut world, Command::ConfigureLevel { config }, &mut events);

        assert!(!query::is_ready(&world));
        assert!(events.is_empty());
    }

    #[test]
    fn unknown_pool_entries_are_dropped_at_configure() {
        let mut world = World::new();
        let mut events = Vec::new();
        let mut config = minimal_config();
        config.pool = vec![CardId::new(999)];
        apply(&mut world, Command::ConfigureLevel { config }, &mut events);

        assert!(query::is_ready(&world));
        assert!(
            query::hand_snapshot(&world).hand.is_empty(),
            "an unusable pool draws an empty hand"
        );
    }

    #[test]
    fn damage_to_zero_removes_the_unit_and_frees_the_tile() {
        let mut world = World::new();
        let mut events = Vec::new();
        apply(
            &mut world,
            Command::ConfigureLevel {
                config: minimal_config(),
            },
            &mut events,
        );

        let position = GridPos::new(4, 4);
        apply(
            &mut world,
            Command::SpawnEnemy {
                position,
                health: Health::new(2),
            },
            &mut events,
        );
        let unit = match events.last() {
            Some(Event::EnemySpawned { unit, .. }) => *unit,
            other => panic!("expected spawn event, got {other:?}"),
        };

        apply(
            &mut world,
            Command::DamageUnit { unit, amount: 1 },
            &mut events,
        );
        assert_eq!(
            events.last(),
            Some(&Event::UnitDamaged {
                unit,
                remaining: Health::new(1)
            })
        );

        apply(
            &mut world,
            Command::DamageUnit { unit, amount: 1 },
            &mut events,
        );
        assert_eq!(events.last(), Some(&Event::UnitDied { unit, position }));
        assert_eq!(query::unit_at(&world, position), None);
        assert!(query::board_view(&world).is_empty(position));
    }

    #[test]
    fn damaging_an_unknown_unit_is_rejected() {
        let mut world = World::new();
        let mut events = Vec::new();
        apply(
            &mut world,
            Command::DamageUnit {
                unit: UnitId::new(99),
                amount: 1,
            },
            &mut events,
        );
        assert_eq!(
            events.last(),
            Some(&Event::DamageRejected {
                unit: UnitId::new(99),
                reason: DamageRejection::UnknownUnit,
            })
        );
    }
}
