#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure movement resolution for card patterns and king advancement.
//!
//! The resolver never mutates anything. It turns a card pattern and an
//! origin into the ordered list of legal destinations, and computes the
//! single-step advance target for the king. The authoritative world commits
//! moves against the grid afterwards, so occupancy rules that only apply at
//! commit time (sliding cards) are deliberately not enforced here.

use tactics_core::{BoardView, Direction, GridOffset, GridPos, MovePattern};

/// Computes the ordered candidate destinations for a card played from
/// `origin`, appending them to `out`.
///
/// Fixed-offset patterns keep only in-bounds, walkable, unoccupied tiles.
/// Sliding patterns walk each ray until the board edge and keep every
/// visited tile regardless of occupancy or walkability; the grid rejects
/// an occupied destination when the move is committed.
pub fn candidate_destinations(
    pattern: &MovePattern,
    origin: GridPos,
    board: BoardView<'_>,
    out: &mut Vec<GridPos>,
) {
    match pattern {
        MovePattern::Offsets(offsets) => {
            for offset in offsets {
                let Some(destination) = origin.offset_by(*offset) else {
                    continue;
                };
                if board.is_empty(destination) && !out.contains(&destination) {
                    out.push(destination);
                }
            }
        }
        MovePattern::Sliding(directions) => {
            for direction in directions {
                walk_ray(origin, *direction, board, out);
            }
        }
    }
}

fn walk_ray(origin: GridPos, direction: GridOffset, board: BoardView<'_>, out: &mut Vec<GridPos>) {
    // A zero ray would never leave the origin.
    if direction.dx() == 0 && direction.dy() == 0 {
        return;
    }

    let mut cursor = origin;
    loop {
        let Some(next) = cursor.offset_by(direction) else {
            return;
        };
        if !board.in_bounds(next) {
            return;
        }
        if !out.contains(&next) {
            out.push(next);
        }
        cursor = next;
    }
}

/// Returns the tile one step from `origin` in `direction`, or `None` when
/// the step leaves the non-negative quadrant.
#[must_use]
pub fn step_from(origin: GridPos, direction: Direction) -> Option<GridPos> {
    origin.offset_by(direction.step())
}

/// Computes the destination of a king advance attempt.
///
/// Succeeds only when the destination tile is in bounds and empty; a
/// blocked advance yields `None` and must leave the king untouched.
#[must_use]
pub fn advance_target(
    origin: GridPos,
    direction: Direction,
    board: BoardView<'_>,
) -> Option<GridPos> {
    let destination = step_from(origin, direction)?;
    if board.is_empty(destination) {
        Some(destination)
    } else {
        None
    }
}
