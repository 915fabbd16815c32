//! Active card selection and its cached movement preview.

use tactics_core::{CardId, GridPos};

/// At most one card is selected at a time; selecting caches the preview
/// candidates so a later commit validates against exactly what the player
/// was shown.
#[derive(Debug, Default)]
pub(crate) struct SelectionState {
    selected: Option<CardId>,
    candidates: Vec<GridPos>,
}

impl SelectionState {
    pub(crate) fn select(&mut self, card: CardId, candidates: Vec<GridPos>) {
        self.selected = Some(card);
        self.candidates = candidates;
    }

    /// Clears the selection and preview, yielding the previously selected
    /// card when there was one.
    pub(crate) fn clear(&mut self) -> Option<CardId> {
        self.candidates.clear();
        self.selected.take()
    }

    pub(crate) const fn selected(&self) -> Option<CardId> {
        self.selected
    }

    pub(crate) fn candidates(&self) -> &[GridPos] {
        &self.candidates
    }

    pub(crate) fn is_candidate(&self, position: GridPos) -> bool {
        self.candidates.contains(&position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_yields_the_previous_selection_once() {
        let mut selection = SelectionState::default();
        selection.select(CardId::new(2), vec![GridPos::new(1, 1)]);
        assert_eq!(selection.selected(), Some(CardId::new(2)));
        assert!(selection.is_candidate(GridPos::new(1, 1)));

        assert_eq!(selection.clear(), Some(CardId::new(2)));
        assert_eq!(selection.clear(), None);
        assert!(selection.candidates().is_empty());
    }
}
