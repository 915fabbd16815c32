#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that boots the Grid Tactics experience.

mod catalog_transfer;

use anyhow::Context as _;
use clap::Parser;
use tactics_core::{CardId, Command, Direction, Event, GridPos, LevelConfig};
use tactics_world::{apply, query, World};

use catalog_transfer::CatalogSnapshot;

const DEMO_SEED: u64 = 7;

/// Launch options for the Grid Tactics command-line interface.
#[derive(Debug, Parser)]
#[command(name = "grid-tactics", about = "Boots a Grid Tactics session in the terminal")]
struct Args {
    /// Install the catalog from a transfer string instead of the built-in set.
    #[arg(long)]
    catalog: Option<String>,

    /// Print the installed catalog as a transfer string and exit.
    #[arg(long)]
    export_catalog: bool,

    /// Seed for the deterministic draw stream.
    #[arg(long, default_value_t = DEMO_SEED)]
    seed: u64,

    /// Number of player turns to pass before printing the final state.
    #[arg(long, default_value_t = 0)]
    turns: u32,
}

/// Entry point for the Grid Tactics command-line interface.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let definitions = match &args.catalog {
        Some(encoded) => {
            CatalogSnapshot::decode(encoded)
                .context("catalog transfer string is invalid")?
                .cards
        }
        None => Vec::new(),
    };
    let mut world = World::with_catalog(definitions);

    if args.export_catalog {
        println!("{}", CatalogSnapshot::from_world(&world).encode());
        return Ok(());
    }

    println!("{}", query::welcome_banner(&world));

    let config = demo_level(&world, args.seed);
    let mut events = Vec::new();
    apply(&mut world, Command::ConfigureLevel { config }, &mut events);
    report_events(&events);

    for _ in 0..args.turns {
        events.clear();
        apply(&mut world, Command::EndPlayerTurn, &mut events);
        report_events(&events);
    }

    render_board(&world);
    render_hand(&world);
    Ok(())
}

/// Demo level played when the adapter boots: a 7x7 board with two walls
/// pinching the middle rank and a pool holding two copies of every card.
fn demo_level(world: &World, seed: u64) -> LevelConfig {
    let mut pool = Vec::new();
    for index in 0..query::catalog_len(world) {
        let card = CardId::new(index as u32);
        pool.push(card);
        pool.push(card);
    }
    LevelConfig {
        columns: 7,
        rows: 7,
        king_start: GridPos::new(3, 0),
        player_start: GridPos::new(5, 6),
        king_direction: Direction::South,
        goal_row: 6,
        hand_size: 4,
        pool,
        blocked: vec![GridPos::new(1, 3), GridPos::new(5, 3)],
        deck_seed: seed,
    }
}

fn report_events(events: &[Event]) {
    for event in events {
        println!("- {}", describe(event));
    }
}

fn describe(event: &Event) -> String {
    match event {
        Event::LevelInitialized => "level initialized".to_owned(),
        Event::HandUpdated { hand } => format!("hand updated ({} cards)", hand.len()),
        Event::HandCleared => "hand cleared".to_owned(),
        Event::CardSelected { card } => format!("card {} selected", card.get()),
        Event::CardDeselected { card } => format!("card {} deselected", card.get()),
        Event::SelectionCleared => "selection cleared".to_owned(),
        Event::CardHeld { card } => format!("card {} held", card.get()),
        Event::CardReleased { card } => format!("card {} released", card.get()),
        Event::HoldRejected { card, reason } => {
            format!("hold of card {} rejected: {reason:?}", card.get())
        }
        Event::SelectionRejected { card, reason } => {
            format!("selection of card {} rejected: {reason:?}", card.get())
        }
        Event::UnitMoved { unit, from, to } => format!(
            "unit {} moved {} -> {}",
            unit.get(),
            describe_pos(*from),
            describe_pos(*to)
        ),
        Event::MoveRejected { position, reason } => {
            format!("move to {} rejected: {reason:?}", describe_pos(*position))
        }
        Event::KingAdvanced { from, to } => format!(
            "king advanced {} -> {}",
            describe_pos(*from),
            describe_pos(*to)
        ),
        Event::KingBlocked { at } => format!("king blocked at {}", describe_pos(*at)),
        Event::TurnStarted { phase, turn } => format!("turn {turn}: {phase:?} started"),
        Event::TurnEnded { phase } => format!("{phase:?} ended"),
        Event::LevelCompleted => "level completed".to_owned(),
        Event::EnemySpawned { unit, position } => format!(
            "enemy {} spawned at {}",
            unit.get(),
            describe_pos(*position)
        ),
        Event::SpawnRejected { position, reason } => {
            format!("spawn at {} rejected: {reason:?}", describe_pos(*position))
        }
        Event::UnitDamaged { unit, remaining } => format!(
            "unit {} damaged ({} hp remaining)",
            unit.get(),
            remaining.get()
        ),
        Event::UnitDied { unit, position } => {
            format!("unit {} died at {}", unit.get(), describe_pos(*position))
        }
        Event::DamageRejected { unit, reason } => {
            format!("damage to unit {} rejected: {reason:?}", unit.get())
        }
    }
}

fn describe_pos(position: GridPos) -> String {
    format!("({}, {})", position.column(), position.row())
}

fn render_board(world: &World) {
    let (columns, rows) = query::board_view(world).dimensions();
    let king = query::king(world).map(|unit| unit.position);
    let player = query::player(world).map(|unit| unit.position);
    println!(
        "Board {columns}x{rows}, goal row {}:",
        query::goal_line(world).row()
    );
    for row in 0..rows {
        let mut line = String::new();
        for column in 0..columns {
            let position = GridPos::new(column, row);
            let glyph = match query::tile(world, position) {
                Some(tile) if !tile.walkable => '#',
                Some(tile) => match tile.occupant {
                    Some(_) if king == Some(position) => 'K',
                    Some(_) if player == Some(position) => 'P',
                    Some(_) => 'E',
                    None => '.',
                },
                None => ' ',
            };
            line.push(glyph);
            line.push(' ');
        }
        println!("{}", line.trim_end());
    }
}

fn render_hand(world: &World) {
    let snapshot = query::hand_snapshot(world);
    if snapshot.hand.is_empty() {
        println!("Hand: (empty)");
        return;
    }
    println!("Hand:");
    for card in &snapshot.hand {
        let name = query::card_definition(world, *card)
            .map_or("?", |definition| definition.name.as_str());
        let mut tags = String::new();
        if snapshot.held.contains(card) {
            tags.push_str(" [held]");
        }
        if snapshot.used.contains(card) {
            tags.push_str(" [used]");
        }
        println!("  {:>2} {name}{tags}", card.get());
    }
}
