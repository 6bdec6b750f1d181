use std::sync::Arc;

use fusecraft::core::catalog::{Catalog, ElementId};
use fusecraft::core::state::{Phase, SelectionReason, Session, SessionError, SessionOptions};
use fusecraft::core::{Action, CombinationOutcome, Effect, update};

// ============================================================================
// Helper Functions
// ============================================================================

const WATER_EARTH_MUD: &str = r#"{
    "library": [
        { "id": "water", "tier": 0 },
        { "id": "earth", "tier": 0 },
        { "id": "mud", "tier": 1, "recipes": [["water", "earth"]] }
    ]
}"#;

fn session(options: SessionOptions) -> Session {
    let catalog = Catalog::from_json(WATER_EARTH_MUD).expect("catalog is valid");
    Session::new(Arc::new(catalog), options)
}

fn unlocked(session: &Session) -> Vec<&str> {
    let mut ids: Vec<&str> = session.unlocked().all().map(ElementId::as_str).collect();
    ids.sort_unstable();
    ids
}

fn discovered_mud(session: &mut Session) {
    session.select_element("water").unwrap();
    session.select_element("earth").unwrap();
    let outcome = session.attempt_combine().unwrap();
    assert!(matches!(outcome, CombinationOutcome::Discovered(ref e) if e.id.as_str() == "mud"));
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_discovery_unlocks_and_clears() {
    let mut session = session(SessionOptions::default());
    assert_eq!(unlocked(&session), vec!["earth", "water"]);

    discovered_mud(&mut session);

    assert_eq!(unlocked(&session), vec!["earth", "mud", "water"]);
    assert!(session.slots().is_empty());
    assert_eq!(session.phase(), Phase::Idle);
}

#[test]
fn test_reverse_order_is_a_repeat() {
    let mut session = session(SessionOptions::default());
    discovered_mud(&mut session);

    session.select_element("earth").unwrap();
    session.select_element("water").unwrap();
    let outcome = session.attempt_combine().unwrap();

    assert!(matches!(outcome, CombinationOutcome::Repeated(ref e) if e.id.as_str() == "mud"));
    assert_eq!(session.unlocked().len(), 3);
    assert!(session.slots().is_empty());
}

#[test]
fn test_same_card_twice_without_recipe_keeps_slots() {
    let mut session = session(SessionOptions::default());

    session.select_element("water").unwrap();
    session.select_element("water").unwrap();
    assert_eq!(session.phase(), Phase::Ready);

    assert_eq!(session.attempt_combine(), Ok(CombinationOutcome::NoMatch));
    assert_eq!(
        session.slots().pair().map(|(a, b)| (a.as_str(), b.as_str())),
        Some(("water", "water"))
    );
    assert_eq!(session.unlocked().len(), 2);
}

#[test]
fn test_repeat_selection_can_be_disabled() {
    let mut session = session(SessionOptions {
        allow_repeat_selection: false,
    });

    session.select_element("water").unwrap();
    assert_eq!(
        session.select_element("water"),
        Err(SessionError::InvalidSelection {
            id: ElementId::from("water"),
            reason: SelectionReason::AlreadySelected,
        })
    );
    assert_eq!(session.slots().filled(), 1);
}

#[test]
fn test_locked_and_unknown_cards_are_refused() {
    let mut session = session(SessionOptions::default());

    assert!(matches!(
        session.select_element("mud"),
        Err(SessionError::InvalidSelection {
            reason: SelectionReason::Locked,
            ..
        })
    ));
    assert!(matches!(
        session.select_element("plasma"),
        Err(SessionError::InvalidSelection {
            reason: SelectionReason::Unknown,
            ..
        })
    ));
    assert!(session.slots().is_empty());
}

#[test]
fn test_combine_needs_two_cards() {
    let mut session = session(SessionOptions::default());
    assert_eq!(
        session.attempt_combine(),
        Err(SessionError::IncompleteSelection)
    );

    session.select_element("water").unwrap();
    assert_eq!(
        session.attempt_combine(),
        Err(SessionError::IncompleteSelection)
    );
    assert_eq!(session.slots().filled(), 1);
}

// ============================================================================
// Actions
// ============================================================================

#[test]
fn test_actions_drive_status_line() {
    let mut session = session(SessionOptions::default());
    assert_eq!(
        session.status_message,
        "System ready. Select cards to combine."
    );

    update(&mut session, Action::SelectElement("water".to_string()));
    update(&mut session, Action::SelectElement("earth".to_string()));
    let effect = update(&mut session, Action::Combine);

    assert_eq!(effect, Effect::Reveal(ElementId::from("mud")));
    // Nameless elements display their id
    assert_eq!(session.status_message, "SUCCESS! Discovered: mud");

    update(&mut session, Action::Combine);
    assert_eq!(session.status_message, "Select two cards first!");
}
