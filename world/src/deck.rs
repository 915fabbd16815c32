//! Deck economy: draw pool, hand, and the held-card carryover set.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tactics_core::{CardId, HandSnapshot};

use crate::catalog::CardCatalog;

/// Failure modes reported by deck mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DeckError {
    /// The card is not part of the current hand.
    NotInHand,
    /// The card is not currently held.
    NotHeld,
}

/// State machine over the draw pool, the hand, and the held set.
///
/// Draws are uniform with replacement over the pool, so duplicates across a
/// hand are possible and expected. The stream is seeded, so identical seeds
/// replay identical hands.
#[derive(Debug)]
pub(crate) struct DeckEngine {
    pool: Vec<CardId>,
    hand: Vec<CardId>,
    held: Vec<CardId>,
    hand_size: usize,
    rng: ChaCha8Rng,
}

impl DeckEngine {
    pub(crate) fn new(pool: Vec<CardId>, hand_size: usize, seed: u64) -> Self {
        Self {
            pool,
            hand: Vec::new(),
            held: Vec::new(),
            hand_size,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Composes a fresh hand: held cards first (the held set is drained),
    /// then uniform draws with replacement until the hand is full. An empty
    /// pool leaves the hand short; that is a reported state, not an error.
    pub(crate) fn draw_hand(&mut self, catalog: &mut CardCatalog) {
        catalog.clear_used_flags();
        self.hand.clear();
        self.hand.append(&mut self.held);
        if self.pool.is_empty() {
            return;
        }
        while self.hand.len() < self.hand_size {
            let index = self.rng.gen_range(0..self.pool.len());
            self.hand.push(self.pool[index]);
        }
    }

    /// Consumes one hand instance of the card, evicts it from the held set,
    /// and marks the definition used.
    pub(crate) fn use_card(
        &mut self,
        card: CardId,
        catalog: &mut CardCatalog,
    ) -> Result<(), DeckError> {
        let position = self
            .hand
            .iter()
            .position(|entry| *entry == card)
            .ok_or(DeckError::NotInHand)?;
        let _ = self.hand.remove(position);
        self.held.retain(|entry| *entry != card);
        catalog.mark_used(card);
        Ok(())
    }

    /// Flags a hand card for carryover. Returns `false` when the card was
    /// already held, so callers can skip duplicate notifications.
    pub(crate) fn hold_card(&mut self, card: CardId) -> Result<bool, DeckError> {
        if !self.hand.contains(&card) {
            return Err(DeckError::NotInHand);
        }
        if self.held.contains(&card) {
            return Ok(false);
        }
        self.held.push(card);
        Ok(true)
    }

    /// Removes a card from the held set.
    pub(crate) fn release_card(&mut self, card: CardId) -> Result<(), DeckError> {
        if !self.held.contains(&card) {
            return Err(DeckError::NotHeld);
        }
        self.held.retain(|entry| *entry != card);
        Ok(())
    }

    /// Discards every hand card that is not held. The held set survives.
    pub(crate) fn clear_hand(&mut self) {
        let held = &self.held;
        self.hand.retain(|card| held.contains(card));
    }

    pub(crate) fn hand(&self) -> &[CardId] {
        &self.hand
    }

    pub(crate) fn contains(&self, card: CardId) -> bool {
        self.hand.contains(&card)
    }

    pub(crate) fn is_held(&self, card: CardId) -> bool {
        self.held.contains(&card)
    }

    pub(crate) fn snapshot(&self, catalog: &CardCatalog) -> HandSnapshot {
        HandSnapshot {
            hand: self.hand.clone(),
            held: self.held.clone(),
            used: catalog.used_ids(),
        }
    }
}
