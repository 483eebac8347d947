use alloc::collections::BTreeSet;
use core::num::Saturating;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EngineState {
    Idle,
    OneUp,
    Mismatch,
    Won,
}

impl EngineState {
    /// Input is ignored while a mismatched pair is still on display.
    pub const fn is_locked(self) -> bool {
        matches!(self, Self::Mismatch)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Idle
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayEngine {
    deck: CardDeck,
    selected: SmallVec<[CardId; 2]>,
    solved: BTreeSet<CardId>,
    state: EngineState,
    move_count: Saturating<u32>,
}

impl PlayEngine {
    pub fn new(deck: CardDeck) -> Self {
        Self {
            deck,
            selected: SmallVec::new(),
            solved: BTreeSet::new(),
            state: Default::default(),
            move_count: Saturating(0),
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_locked(&self) -> bool {
        self.state.is_locked()
    }

    pub fn is_won(&self) -> bool {
        self.state.is_finished()
    }

    /// Completed two-card comparisons, match or mismatch.
    pub fn move_count(&self) -> u32 {
        self.move_count.0
    }

    pub fn total_cards(&self) -> CardCount {
        self.deck.total_cards()
    }

    pub fn solved_count(&self) -> CardCount {
        self.solved.len() as CardCount
    }

    pub fn deck(&self) -> &CardDeck {
        &self.deck
    }

    pub fn card_at(&self, id: CardId) -> CardState {
        if self.solved.contains(&id) {
            CardState::Solved
        } else if self.selected.contains(&id) {
            CardState::Up
        } else {
            CardState::Down
        }
    }

    /// Value readable by the presentation layer, hidden unless the card is
    /// face up.
    pub fn revealed_value(&self, id: CardId) -> Option<CardValue> {
        if self.card_at(id).is_face_up() {
            self.deck.value_at(id).ok()
        } else {
            None
        }
    }

    pub fn can_select(&self, id: CardId) -> bool {
        self.deck.validate_id(id).is_ok()
            && !self.state.is_locked()
            && !self.state.is_finished()
            && !self.solved.contains(&id)
    }

    pub fn select(&mut self, id: CardId) -> Result<SelectOutcome> {
        use SelectOutcome::*;

        let id = self.deck.validate_id(id)?;

        if self.state.is_locked() || self.state.is_finished() || self.solved.contains(&id) {
            return Ok(NoChange);
        }

        match self.selected.as_slice() {
            &[] => {
                self.selected.push(id);
                self.state = EngineState::OneUp;
                Ok(Flipped)
            }
            &[first] if first == id => {
                // cancelling the turn is not a comparison, so no move counted
                self.selected.clear();
                self.state = EngineState::Idle;
                Ok(Dismissed)
            }
            &[first] => {
                self.selected.push(id);
                self.move_count += 1;
                self.settle_pair(first, id)
            }
            _ => Ok(NoChange),
        }
    }

    /// Turns a mismatched pair face down again. The presentation layer calls
    /// this once its conceal delay elapses.
    pub fn conceal_mismatch(&mut self) -> ConcealOutcome {
        use ConcealOutcome::*;

        if self.state.is_locked() {
            self.selected.clear();
            self.state = EngineState::Idle;
            Concealed
        } else {
            NoChange
        }
    }

    fn settle_pair(&mut self, first: CardId, second: CardId) -> Result<SelectOutcome> {
        use SelectOutcome::*;

        if self.deck.value_at(first)? == self.deck.value_at(second)? {
            self.solved.extend(self.selected.drain(..));
            if self.solved.len() == self.deck.total_cards() as usize {
                self.state = EngineState::Won;
                Ok(Won)
            } else {
                self.state = EngineState::Idle;
                Ok(Matched)
            }
        } else {
            self.state = EngineState::Mismatch;
            Ok(Mismatched)
        }
    }
}
