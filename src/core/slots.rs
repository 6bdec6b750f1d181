//! # Selection Slots
//!
//! Two ordered staging slots for the next combination. Selection fills
//! slot 1 before slot 2 and is rejected once both are occupied; nothing is
//! ever rotated out implicitly.
//!
//! Slot indexes are 1-based at this API (`1` or `2`), matching what the
//! player sees on screen.

use crate::core::catalog::ElementId;
use crate::core::state::{SelectionReason, SessionError};
use crate::core::unlock::UnlockSet;

pub const SLOT_COUNT: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSlots {
    slots: [Option<ElementId>; SLOT_COUNT],
}

impl SelectionSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `id` in the first empty slot and return that slot's index.
    ///
    /// `allow_repeat` decides whether an id already sitting in a slot may be
    /// placed again (combining an element with itself).
    pub fn select(
        &mut self,
        id: ElementId,
        unlocked: &UnlockSet,
        allow_repeat: bool,
    ) -> Result<usize, SessionError> {
        if !unlocked.contains(id.as_str()) {
            return Err(SessionError::InvalidSelection {
                id,
                reason: SelectionReason::Locked,
            });
        }
        let Some(free) = self.slots.iter().position(Option::is_none) else {
            return Err(SessionError::SlotsFull);
        };
        if !allow_repeat && self.slots.iter().flatten().any(|held| *held == id) {
            return Err(SessionError::InvalidSelection {
                id,
                reason: SelectionReason::AlreadySelected,
            });
        }
        self.slots[free] = Some(id);
        Ok(free + 1)
    }

    /// Empty slot `index` (1 or 2), returning what it held.
    pub fn clear(&mut self, index: usize) -> Result<Option<ElementId>, SessionError> {
        match index {
            1..=SLOT_COUNT => Ok(self.slots[index - 1].take()),
            _ => Err(SessionError::InvalidSlotIndex(index)),
        }
    }

    pub fn clear_all(&mut self) {
        self.slots = Default::default();
    }

    /// Contents of slot `index` (1 or 2). Out-of-range indexes read as empty.
    pub fn get(&self, index: usize) -> Option<&ElementId> {
        index
            .checked_sub(1)
            .and_then(|i| self.slots.get(i))
            .and_then(Option::as_ref)
    }

    /// Both ingredients, if both slots are occupied.
    pub fn pair(&self) -> Option<(&ElementId, &ElementId)> {
        match &self.slots {
            [Some(a), Some(b)] => Some((a, b)),
            _ => None,
        }
    }

    pub fn filled(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_full(&self) -> bool {
        self.filled() == SLOT_COUNT
    }

    pub fn is_empty(&self) -> bool {
        self.filled() == 0
    }
}
