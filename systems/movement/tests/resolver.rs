use tactics_core::{BoardView, GridOffset, GridPos, MovePattern, UnitId};
use tactics_system_movement::candidate_destinations;

fn board_slices(columns: u32, rows: u32) -> (Vec<bool>, Vec<Option<UnitId>>) {
    let cells = (columns * rows) as usize;
    (vec![true; cells], vec![None; cells])
}

fn index(columns: u32, position: GridPos) -> usize {
    (position.row() * columns + position.column()) as usize
}

#[test]
fn sliding_ray_visits_tiles_in_order_without_repeats() {
    let columns = 6;
    let rows = 5;
    let (walkable, occupants) = board_slices(columns, rows);
    let board = BoardView::new(&walkable, &occupants, columns, rows);

    let origin = GridPos::new(1, 1);
    let pattern = MovePattern::Sliding(vec![GridOffset::new(1, 0)]);
    let mut out = Vec::new();
    candidate_destinations(&pattern, origin, board, &mut out);

    let expected: Vec<GridPos> = (2..columns).map(|column| GridPos::new(column, 1)).collect();
    assert_eq!(out, expected);

    let mut deduplicated = out.clone();
    deduplicated.dedup();
    assert_eq!(out, deduplicated);
}

#[test]
fn diagonal_rays_stop_at_the_nearest_edge() {
    let columns = 5;
    let rows = 3;
    let (walkable, occupants) = board_slices(columns, rows);
    let board = BoardView::new(&walkable, &occupants, columns, rows);

    let pattern = MovePattern::Sliding(vec![GridOffset::new(1, 1), GridOffset::new(-1, -1)]);
    let mut out = Vec::new();
    candidate_destinations(&pattern, GridPos::new(2, 1), board, &mut out);

    assert_eq!(
        out,
        vec![GridPos::new(3, 2), GridPos::new(1, 0)],
        "each ray should stop at the first boundary it meets"
    );
}

#[test]
fn sliding_rays_ignore_occupants_and_unwalkable_tiles() {
    let columns = 5;
    let rows = 1;
    let (mut walkable, mut occupants) = board_slices(columns, rows);
    walkable[index(columns, GridPos::new(1, 0))] = false;
    occupants[index(columns, GridPos::new(3, 0))] = Some(UnitId::new(8));
    let board = BoardView::new(&walkable, &occupants, columns, rows);

    let pattern = MovePattern::Sliding(vec![GridOffset::new(1, 0)]);
    let mut out = Vec::new();
    candidate_destinations(&pattern, GridPos::new(0, 0), board, &mut out);

    assert_eq!(
        out,
        vec![
            GridPos::new(1, 0),
            GridPos::new(2, 0),
            GridPos::new(3, 0),
            GridPos::new(4, 0),
        ],
        "sliding candidates are filtered only by the board edge"
    );
}

#[test]
fn fixed_offsets_filter_bounds_walkability_and_occupancy() {
    let columns = 3;
    let rows = 3;
    let (mut walkable, mut occupants) = board_slices(columns, rows);
    walkable[index(columns, GridPos::new(0, 0))] = false;
    occupants[index(columns, GridPos::new(2, 2))] = Some(UnitId::new(4));
    let board = BoardView::new(&walkable, &occupants, columns, rows);

    let pattern = MovePattern::Offsets(vec![
        GridOffset::new(-1, -1), // unwalkable
        GridOffset::new(1, 1),   // occupied
        GridOffset::new(-2, 0),  // off the board
        GridOffset::new(0, -1),  // legal
    ]);
    let mut out = Vec::new();
    candidate_destinations(&pattern, GridPos::new(1, 1), board, &mut out);

    assert_eq!(out, vec![GridPos::new(1, 0)]);
}

#[test]
fn duplicate_offsets_yield_a_single_candidate() {
    let columns = 3;
    let rows = 3;
    let (walkable, occupants) = board_slices(columns, rows);
    let board = BoardView::new(&walkable, &occupants, columns, rows);

    let pattern = MovePattern::Offsets(vec![GridOffset::new(1, 0), GridOffset::new(1, 0)]);
    let mut out = Vec::new();
    candidate_destinations(&pattern, GridPos::new(0, 0), board, &mut out);

    assert_eq!(out, vec![GridPos::new(1, 0)]);
}
