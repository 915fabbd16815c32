//! Immutable move-card catalog plus the shared runtime `used` flags.

use tactics_core::{CardId, GridOffset, MoveCardDefinition, MovePattern};

/// Catalog of move-card definitions installed at world construction.
///
/// Definitions never change after installation. The `used` flags are the
/// only runtime state and are shared per definition: playing one copy of a
/// duplicated card marks every copy in the hand as used.
#[derive(Clone, Debug)]
pub(crate) struct CardCatalog {
    definitions: Vec<MoveCardDefinition>,
    used: Vec<bool>,
}

impl CardCatalog {
    pub(crate) fn new(definitions: Vec<MoveCardDefinition>) -> Self {
        let used = vec![false; definitions.len()];
        Self { definitions, used }
    }

    /// Catalog shipped with the engine when no external catalog is supplied.
    pub(crate) fn builtin() -> Self {
        Self::new(builtin_definitions())
    }

    pub(crate) fn contains(&self, card: CardId) -> bool {
        (card.get() as usize) < self.definitions.len()
    }

    pub(crate) fn definition(&self, card: CardId) -> Option<&MoveCardDefinition> {
        self.definitions.get(card.get() as usize)
    }

    pub(crate) fn len(&self) -> usize {
        self.definitions.len()
    }

    pub(crate) fn mark_used(&mut self, card: CardId) {
        if let Some(flag) = self.used.get_mut(card.get() as usize) {
            *flag = true;
        }
    }

    pub(crate) fn clear_used_flags(&mut self) {
        for flag in &mut self.used {
            *flag = false;
        }
    }

    pub(crate) fn is_used(&self, card: CardId) -> bool {
        self.used.get(card.get() as usize).copied().unwrap_or(false)
    }

    /// Catalog entries currently flagged as used, in index order.
    pub(crate) fn used_ids(&self) -> Vec<CardId> {
        self.used
            .iter()
            .enumerate()
            .filter(|(_, used)| **used)
            .map(|(index, _)| CardId::new(index as u32))
            .collect()
    }

    /// Default draw pool: two copies of every installed definition.
    pub(crate) fn default_pool(&self) -> Vec<CardId> {
        let mut pool = Vec::with_capacity(self.definitions.len() * 2);
        for index in 0..self.definitions.len() {
            let id = CardId::new(index as u32);
            pool.push(id);
            pool.push(id);
        }
        pool
    }
}

fn builtin_definitions() -> Vec<MoveCardDefinition> {
    vec![
        MoveCardDefinition {
            name: "Step".to_owned(),
            description: "Move one tile in any cardinal direction.".to_owned(),
            cost: 0,
            pattern: MovePattern::Offsets(vec![
                GridOffset::new(0, -1),
                GridOffset::new(1, 0),
                GridOffset::new(0, 1),
                GridOffset::new(-1, 0),
            ]),
        },
        MoveCardDefinition {
            name: "Sidewind".to_owned(),
            description: "Move one tile diagonally.".to_owned(),
            cost: 1,
            pattern: MovePattern::Offsets(vec![
                GridOffset::new(1, -1),
                GridOffset::new(1, 1),
                GridOffset::new(-1, 1),
                GridOffset::new(-1, -1),
            ]),
        },
        MoveCardDefinition {
            name: "Vault".to_owned(),
            description: "Jump in an L: two tiles one way, one tile across.".to_owned(),
            cost: 2,
            pattern: MovePattern::Offsets(vec![
                GridOffset::new(1, -2),
                GridOffset::new(2, -1),
                GridOffset::new(2, 1),
                GridOffset::new(1, 2),
                GridOffset::new(-1, 2),
                GridOffset::new(-2, 1),
                GridOffset::new(-2, -1),
                GridOffset::new(-1, -2),
            ]),
        },
        MoveCardDefinition {
            name: "Lance".to_owned(),
            description: "Slide any distance along the file.".to_owned(),
            cost: 2,
            pattern: MovePattern::Sliding(vec![GridOffset::new(0, -1), GridOffset::new(0, 1)]),
        },
        MoveCardDefinition {
            name: "Crosscut".to_owned(),
            description: "Slide any distance along a diagonal.".to_owned(),
            cost: 3,
            pattern: MovePattern::Sliding(vec![
                GridOffset::new(1, -1),
                GridOffset::new(1, 1),
                GridOffset::new(-1, 1),
                GridOffset::new(-1, -1),
            ]),
        },
    ]
}
