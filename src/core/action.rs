//! # Actions
//!
//! Everything the player can do becomes an `Action`.
//! Pressing Enter on a card? That's `Action::SelectElement(id)`.
//! Pressing `c`? That's `Action::Combine`.
//!
//! The `update()` function applies an action to the session, refreshes the
//! status line, and returns an `Effect` describing anything the UI layer
//! should do beyond redrawing. No I/O happens here.
//!
//! ```text
//! Session + Action  →  update()  →  Session' + Effect
//! ```

use log::debug;

use crate::core::catalog::{Catalog, ElementId};
use crate::core::resolver::CombinationOutcome;
use crate::core::state::{Report, SelectionReason, Session, SessionError};

pub const READY_MESSAGE: &str = "System ready. Select cards to combine.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectElement(String),
    ClearSlot(usize),
    ClearAll,
    Combine,
    Quit,
}

/// Follow-up work for the UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// A combination matched nothing; briefly tint the combine control.
    FlashFailure,
    /// A new element was unlocked; move focus to it.
    Reveal(ElementId),
}

pub fn update(session: &mut Session, action: Action) -> Effect {
    debug!("Action: {:?}", action);
    let effect = match action {
        Action::SelectElement(id) => {
            let _ = session.select_element(&id);
            Effect::None
        }
        Action::ClearSlot(index) => {
            let _ = session.clear_slot(index);
            Effect::None
        }
        Action::ClearAll => {
            session.clear_all();
            Effect::None
        }
        Action::Combine => match session.attempt_combine() {
            Ok(CombinationOutcome::Discovered(element)) => Effect::Reveal(element.id),
            Ok(CombinationOutcome::NoMatch) => Effect::FlashFailure,
            Ok(CombinationOutcome::Repeated(_)) | Err(_) => Effect::None,
        },
        Action::Quit => return Effect::Quit,
    };

    if let Some(text) = session
        .last_report()
        .map(|report| status_text(report, session.catalog()))
    {
        session.status_message = text;
    }
    effect
}

/// Player-facing text for a report.
pub fn status_text(report: &Report, catalog: &Catalog) -> String {
    let name = |id: &ElementId| {
        catalog
            .lookup(id.as_str())
            .map(|e| e.name.clone())
            .unwrap_or_else(|| id.to_string())
    };

    match report {
        Report::Ready => READY_MESSAGE.to_string(),
        Report::Selected { .. } => "Card selected.".to_string(),
        Report::Cleared { slot, id: Some(id) } => {
            format!("{} returned from slot {}.", name(id), slot)
        }
        Report::Cleared { slot, id: None } => format!("Slot {} is already empty.", slot),
        Report::ClearedAll => "Slots cleared.".to_string(),
        Report::Combined(CombinationOutcome::Discovered(e)) => {
            format!("SUCCESS! Discovered: {}", e.name)
        }
        Report::Combined(CombinationOutcome::Repeated(e)) => {
            format!("Crafted: {} (Already discovered)", e.name)
        }
        Report::Combined(CombinationOutcome::NoMatch) => {
            "Nothing happened. Try different cards.".to_string()
        }
        Report::Rejected(error) => match error {
            SessionError::SlotsFull => "Slots full. Clear a slot to swap a card.".to_string(),
            SessionError::IncompleteSelection => "Select two cards first!".to_string(),
            SessionError::InvalidSlotIndex(index) => format!("There is no slot {}.", index),
            SessionError::InvalidSelection { id, reason } => match reason {
                SelectionReason::Unknown => format!("Unknown card '{}'.", id),
                SelectionReason::Locked => format!("{} is still locked.", name(id)),
                SelectionReason::AlreadySelected => {
                    format!("{} is already in a slot.", name(id))
                }
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{id, test_session};

    fn select(id: &str) -> Action {
        Action::SelectElement(id.to_string())
    }

    #[test]
    fn test_new_session_shows_ready_message() {
        let session = test_session();
        assert_eq!(session.status_message, READY_MESSAGE);
    }

    #[test]
    fn test_discovery_reveals_new_card() {
        let mut session = test_session();
        assert_eq!(update(&mut session, select("water")), Effect::None);
        assert_eq!(session.status_message, "Card selected.");
        update(&mut session, select("earth"));

        let effect = update(&mut session, Action::Combine);
        assert_eq!(effect, Effect::Reveal(id("mud")));
        assert_eq!(session.status_message, "SUCCESS! Discovered: Mud");
    }

    #[test]
    fn test_repeat_reports_already_discovered() {
        let mut session = test_session();
        for action in [select("water"), select("earth"), Action::Combine] {
            update(&mut session, action);
        }
        for action in [select("earth"), select("water")] {
            update(&mut session, action);
        }
        assert_eq!(update(&mut session, Action::Combine), Effect::None);
        assert_eq!(session.status_message, "Crafted: Mud (Already discovered)");
        assert!(session.slots().is_empty());
    }

    #[test]
    fn test_no_match_flashes() {
        let mut session = test_session();
        update(&mut session, select("earth"));
        update(&mut session, select("fire"));
        assert_eq!(update(&mut session, Action::Combine), Effect::FlashFailure);
        assert_eq!(
            session.status_message,
            "Nothing happened. Try different cards."
        );
        assert!(session.slots().is_full());
    }

    #[test]
    fn test_rejections_set_guidance() {
        let mut session = test_session();
        update(&mut session, Action::Combine);
        assert_eq!(session.status_message, "Select two cards first!");

        update(&mut session, select("mud"));
        assert_eq!(session.status_message, "Mud is still locked.");

        update(&mut session, select("ghost"));
        assert_eq!(session.status_message, "Unknown card 'ghost'.");

        update(&mut session, select("water"));
        update(&mut session, select("fire"));
        update(&mut session, select("earth"));
        assert_eq!(
            session.status_message,
            "Slots full. Clear a slot to swap a card."
        );

        update(&mut session, Action::ClearSlot(3));
        assert_eq!(session.status_message, "There is no slot 3.");
    }

    #[test]
    fn test_clear_messages() {
        let mut session = test_session();
        update(&mut session, select("water"));
        update(&mut session, Action::ClearSlot(1));
        assert_eq!(session.status_message, "Water returned from slot 1.");
        update(&mut session, Action::ClearSlot(1));
        assert_eq!(session.status_message, "Slot 1 is already empty.");
        update(&mut session, Action::ClearAll);
        assert_eq!(session.status_message, "Slots cleared.");
    }

    #[test]
    fn test_quit() {
        let mut session = test_session();
        assert_eq!(update(&mut session, Action::Quit), Effect::Quit);
    }
}
