//! # Session State
//!
//! One game session: the catalog it plays against, what the player owns,
//! and what is staged for the next combination.
//!
//! ```text
//! Session
//! ├── catalog: Arc<Catalog>        // immutable, shared
//! ├── unlocked: UnlockSet          // grows monotonically
//! ├── slots: SelectionSlots        // two staging slots
//! ├── options: SessionOptions      // selection policy
//! ├── last_report: Option<Report>  // most recent outcome or error
//! └── status_message: String       // status line text
//! ```
//!
//! The session is the only mutator of its unlock set and slots. Every
//! operation either succeeds or leaves state exactly as it was, and the
//! result is kept in `last_report` so a renderer can poll it.

use std::fmt;
use std::sync::Arc;

use log::debug;
use thiserror::Error;

use crate::core::action::READY_MESSAGE;
use crate::core::catalog::{Catalog, Element, ElementId};
use crate::core::resolver::{self, CombinationOutcome};
use crate::core::slots::SelectionSlots;
use crate::core::unlock::UnlockSet;

/// Why a selection was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionReason {
    /// No element with this id exists.
    Unknown,
    /// The element exists but has not been unlocked.
    Locked,
    /// The element already sits in a slot and repeats are disabled.
    AlreadySelected,
}

impl fmt::Display for SelectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionReason::Unknown => write!(f, "no such element"),
            SelectionReason::Locked => write!(f, "not unlocked yet"),
            SelectionReason::AlreadySelected => write!(f, "already in a slot"),
        }
    }
}

/// Recoverable errors from player actions. None of them change state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("cannot select '{id}': {reason}")]
    InvalidSelection {
        id: ElementId,
        reason: SelectionReason,
    },
    #[error("both slots are occupied")]
    SlotsFull,
    #[error("slot {0} does not exist (expected 1 or 2)")]
    InvalidSlotIndex(usize),
    #[error("two cards must be selected before combining")]
    IncompleteSelection,
}

/// What the most recent action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Ready,
    Selected { id: ElementId, slot: usize },
    Cleared { slot: usize, id: Option<ElementId> },
    ClearedAll,
    Combined(CombinationOutcome),
    Rejected(SessionError),
}

/// `Idle` while fewer than two slots are filled, `Ready` once both are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Ready,
}

/// Counts for the progress readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Owned elements, base elements included.
    pub unlocked: usize,
    /// Every element in the catalog.
    pub total: usize,
    /// Owned elements above tier 0.
    pub discovered: usize,
    /// Elements above tier 0.
    pub discoverable: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    pub allow_repeat_selection: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            allow_repeat_selection: true,
        }
    }
}

pub struct Session {
    catalog: Arc<Catalog>,
    unlocked: UnlockSet,
    slots: SelectionSlots,
    options: SessionOptions,
    last_report: Option<Report>,
    pub status_message: String,
}

impl Session {
    pub fn new(catalog: Arc<Catalog>, options: SessionOptions) -> Self {
        let unlocked = UnlockSet::seeded(&catalog);
        debug!(
            "New session on '{}' with {} base elements",
            catalog.topic(),
            unlocked.len()
        );
        Self {
            catalog,
            unlocked,
            slots: SelectionSlots::new(),
            options,
            last_report: Some(Report::Ready),
            status_message: READY_MESSAGE.to_string(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn unlocked(&self) -> &UnlockSet {
        &self.unlocked
    }

    pub fn slots(&self) -> &SelectionSlots {
        &self.slots
    }

    pub fn options(&self) -> SessionOptions {
        self.options
    }

    pub fn last_report(&self) -> Option<&Report> {
        self.last_report.as_ref()
    }

    pub fn phase(&self) -> Phase {
        if self.slots.is_full() {
            Phase::Ready
        } else {
            Phase::Idle
        }
    }

    pub fn progress(&self) -> Progress {
        let discovered = self
            .catalog
            .elements()
            .iter()
            .filter(|e| !e.is_base() && self.unlocked.contains(e.id.as_str()))
            .count();
        Progress {
            unlocked: self.unlocked.len(),
            total: self.catalog.len(),
            discovered,
            discoverable: self.catalog.discoverable_count(),
        }
    }

    /// Unlocked base elements, in catalog order.
    pub fn base_elements(&self) -> impl Iterator<Item = &Element> {
        self.catalog
            .elements()
            .iter()
            .filter(move |e| e.is_base() && self.unlocked.contains(e.id.as_str()))
    }

    /// Unlocked discoveries (tier > 0), in catalog order.
    pub fn discoveries(&self) -> impl Iterator<Item = &Element> {
        self.catalog
            .elements()
            .iter()
            .filter(move |e| !e.is_base() && self.unlocked.contains(e.id.as_str()))
    }

    /// Stage `id` in the first empty slot. Returns the slot index used.
    pub fn select_element(&mut self, id: &str) -> Result<usize, SessionError> {
        let result = if self.catalog.contains(id) {
            self.slots.select(
                ElementId::from(id),
                &self.unlocked,
                self.options.allow_repeat_selection,
            )
        } else {
            Err(SessionError::InvalidSelection {
                id: ElementId::from(id),
                reason: SelectionReason::Unknown,
            })
        };
        self.last_report = Some(match &result {
            Ok(slot) => Report::Selected {
                id: ElementId::from(id),
                slot: *slot,
            },
            Err(e) => Report::Rejected(e.clone()),
        });
        result
    }

    /// Empty slot `index` (1 or 2).
    pub fn clear_slot(&mut self, index: usize) -> Result<Option<ElementId>, SessionError> {
        let result = self.slots.clear(index);
        self.last_report = Some(match &result {
            Ok(id) => Report::Cleared {
                slot: index,
                id: id.clone(),
            },
            Err(e) => Report::Rejected(e.clone()),
        });
        result
    }

    pub fn clear_all(&mut self) {
        self.slots.clear_all();
        self.last_report = Some(Report::ClearedAll);
    }

    /// Combine the two staged elements.
    ///
    /// A matched recipe (new or repeated) empties both slots; `NoMatch`
    /// leaves them filled so one card can be swapped and retried.
    pub fn attempt_combine(&mut self) -> Result<CombinationOutcome, SessionError> {
        let Some((a, b)) = self.slots.pair() else {
            self.last_report = Some(Report::Rejected(SessionError::IncompleteSelection));
            return Err(SessionError::IncompleteSelection);
        };

        let outcome = resolver::resolve(a, b, &self.catalog, &self.unlocked);
        debug!("Combine {} + {} -> {:?}", a, b, outcome);

        match &outcome {
            CombinationOutcome::Discovered(element) => {
                self.unlocked.add(element.id.clone());
                self.slots.clear_all();
            }
            CombinationOutcome::Repeated(_) => self.slots.clear_all(),
            CombinationOutcome::NoMatch => {}
        }

        self.last_report = Some(Report::Combined(outcome.clone()));
        Ok(outcome)
    }
}
