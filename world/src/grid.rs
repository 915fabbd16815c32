//! Authoritative board state: per-tile walkability and occupancy.

use tactics_core::{GridPos, OccupancyError, TileSnapshot, UnitId};

/// Fixed-size board owning one tile slot per in-bounds position.
///
/// Dimensions are immutable after construction; a tile holds at most one
/// occupant and every mutation validates before touching state, so a failed
/// move leaves the origin tile untouched.
#[derive(Clone, Debug)]
pub(crate) struct GridModel {
    columns: u32,
    rows: u32,
    walkable: Vec<bool>,
    occupants: Vec<Option<UnitId>>,
}

impl GridModel {
    /// Creates a fully walkable, unoccupied board.
    pub(crate) fn new(columns: u32, rows: u32) -> Self {
        let capacity_u64 = u64::from(columns) * u64::from(rows);
        let capacity = usize::try_from(capacity_u64).unwrap_or(0);
        Self {
            columns,
            rows,
            walkable: vec![true; capacity],
            occupants: vec![None; capacity],
        }
    }

    pub(crate) const fn in_bounds(&self, position: GridPos) -> bool {
        position.column() < self.columns && position.row() < self.rows
    }

    /// Describes the tile at the provided position, or `None` out of bounds.
    pub(crate) fn tile(&self, position: GridPos) -> Option<TileSnapshot> {
        let index = self.index(position)?;
        Some(TileSnapshot {
            position,
            walkable: self.walkable.get(index).copied().unwrap_or(false),
            occupant: self.occupants.get(index).copied().flatten(),
        })
    }

    pub(crate) fn occupant(&self, position: GridPos) -> Option<UnitId> {
        self.index(position)
            .and_then(|index| self.occupants.get(index).copied().flatten())
    }

    /// Marks a tile unwalkable. Out-of-bounds positions are ignored.
    pub(crate) fn block(&mut self, position: GridPos) {
        if let Some(index) = self.index(position) {
            if let Some(slot) = self.walkable.get_mut(index) {
                *slot = false;
            }
        }
    }

    /// Places a unit on a tile. Idempotent when the tile already holds the
    /// same unit.
    pub(crate) fn set_occupant(
        &mut self,
        position: GridPos,
        unit: UnitId,
    ) -> Result<(), OccupancyError> {
        let index = self.validate_destination(position, unit)?;
        self.occupants[index] = Some(unit);
        Ok(())
    }

    /// Vacates a tile. Out-of-bounds or already-empty tiles are ignored.
    pub(crate) fn clear_occupant(&mut self, position: GridPos) {
        if let Some(index) = self.index(position) {
            if let Some(slot) = self.occupants.get_mut(index) {
                *slot = None;
            }
        }
    }

    /// Moves a unit between two tiles as one operation. The destination is
    /// validated first; on failure the unit keeps its origin tile.
    pub(crate) fn move_occupant(
        &mut self,
        unit: UnitId,
        from: GridPos,
        to: GridPos,
    ) -> Result<(), OccupancyError> {
        let destination = self.validate_destination(to, unit)?;
        if let Some(origin) = self.index(from) {
            if self.occupants.get(origin).copied().flatten() == Some(unit) {
                self.occupants[origin] = None;
            }
        }
        self.occupants[destination] = Some(unit);
        Ok(())
    }

    pub(crate) const fn dimensions(&self) -> (u32, u32) {
        (self.columns, self.rows)
    }

    pub(crate) fn walkable_cells(&self) -> &[bool] {
        &self.walkable
    }

    pub(crate) fn occupant_cells(&self) -> &[Option<UnitId>] {
        &self.occupants
    }

    fn validate_destination(
        &self,
        position: GridPos,
        unit: UnitId,
    ) -> Result<usize, OccupancyError> {
        let index = self.index(position).ok_or(OccupancyError::OutOfBounds)?;
        if !self.walkable.get(index).copied().unwrap_or(false) {
            return Err(OccupancyError::Unwalkable);
        }
        match self.occupants.get(index).copied().flatten() {
            Some(occupant) if occupant != unit => Err(OccupancyError::Occupied),
            _ => Ok(index),
        }
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
