//! Authoritative unit registry: lifecycle, health, and position lookups.

use std::collections::BTreeMap;

use tactics_core::{GridPos, Health, UnitId, UnitKind, UnitSnapshot};

/// Mutable state of a single live unit.
#[derive(Clone, Debug)]
pub(crate) struct UnitState {
    pub(crate) id: UnitId,
    pub(crate) kind: UnitKind,
    pub(crate) name: String,
    pub(crate) health: Health,
    pub(crate) position: GridPos,
}

impl UnitState {
    pub(crate) fn snapshot(&self) -> UnitSnapshot {
        UnitSnapshot {
            id: self.id,
            kind: self.kind,
            name: self.name.clone(),
            health: self.health,
            position: self.position,
        }
    }
}

/// Registry that owns every live unit and allocates identifiers.
///
/// A unit appears here iff it is alive and placed on the grid; death
/// removes it from the registry and the caller clears its tile.
#[derive(Debug, Default)]
pub(crate) struct UnitRegistry {
    entries: BTreeMap<UnitId, UnitState>,
    next_unit_id: u32,
}

impl UnitRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Removes every unit and resets identifier allocation.
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.next_unit_id = 0;
    }

    /// Registers a new live unit and returns its allocated identifier.
    pub(crate) fn register(
        &mut self,
        kind: UnitKind,
        name: &str,
        health: Health,
        position: GridPos,
    ) -> UnitId {
        let id = UnitId::new(self.next_unit_id);
        self.next_unit_id = self.next_unit_id.saturating_add(1);
        let previous = self.entries.insert(
            id,
            UnitState {
                id,
                kind,
                name: name.to_owned(),
                health,
                position,
            },
        );
        debug_assert!(previous.is_none(), "unit identifiers are never reused");
        id
    }

    /// Removes a unit, yielding its final state when it existed.
    pub(crate) fn unregister(&mut self, id: UnitId) -> Option<UnitState> {
        self.entries.remove(&id)
    }

    pub(crate) fn get(&self, id: UnitId) -> Option<&UnitState> {
        self.entries.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: UnitId) -> Option<&mut UnitState> {
        self.entries.get_mut(&id)
    }

    /// Snapshot copy of every enemy, safe to iterate while mutating.
    pub(crate) fn enemy_snapshots(&self) -> Vec<UnitSnapshot> {
        self.entries
            .values()
            .filter(|unit| unit.kind == UnitKind::Enemy)
            .map(UnitState::snapshot)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_allocates_monotonic_identifiers() {
        let mut registry = UnitRegistry::new();
        let first = registry.register(UnitKind::King, "King", Health::new(3), GridPos::new(0, 0));
        let second =
            registry.register(UnitKind::Player, "Player", Health::new(3), GridPos::new(1, 0));
        assert!(second > first);
        assert_eq!(registry.get(first).map(|unit| unit.kind), Some(UnitKind::King));
    }

    #[test]
    fn unregister_yields_the_final_state_once() {
        let mut registry = UnitRegistry::new();
        let id = registry.register(UnitKind::Enemy, "Enemy", Health::new(1), GridPos::new(2, 2));

        let removed = registry.unregister(id).expect("unit existed");
        assert_eq!(removed.id, id);
        assert_eq!(removed.position, GridPos::new(2, 2));
        assert!(registry.unregister(id).is_none());
        assert!(registry.get(id).is_none());
    }

    #[test]
    fn enemy_snapshots_exclude_the_royal_pair() {
        let mut registry = UnitRegistry::new();
        let _ = registry.register(UnitKind::King, "King", Health::new(3), GridPos::new(0, 0));
        let _ = registry.register(UnitKind::Player, "Player", Health::new(3), GridPos::new(1, 0));
        let enemy =
            registry.register(UnitKind::Enemy, "Enemy", Health::new(1), GridPos::new(2, 0));

        let snapshots = registry.enemy_snapshots();
        assert_eq!(snapshots.len(), 1);
        assert_eq!(snapshots[0].id, enemy);
    }
}
