use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

use crate::core::catalog::Element;
use crate::core::state::{Phase, Session};
use crate::tui::component::Component;
use crate::tui::components::{CardGrid, MessageLog, SlotBar, TitleBar};
use crate::tui::{Pane, TuiState};

const HELP_TEXT: &str =
    " ←↑↓→ Move  Tab Switch pane  Enter Select  c Combine  1/2 Clear slot  x Clear all  q Quit ";

/// Screen regions, top to bottom.
struct Areas {
    title: Rect,
    base: Rect,
    discoveries: Rect,
    slots: Rect,
    log: Rect,
    help: Rect,
}

fn layout(area: Rect) -> Areas {
    use Constraint::{Length, Min, Percentage};
    let [title, panes, slots, log, help] =
        Layout::vertical([Length(1), Min(0), Length(3), Length(6), Length(1)]).areas(area);
    let [base, discoveries] =
        Layout::horizontal([Percentage(40), Percentage(60)]).areas(panes);
    Areas {
        title,
        base,
        discoveries,
        slots,
        log,
        help,
    }
}

pub fn draw_ui(frame: &mut Frame, session: &Session, tui: &mut TuiState, now: Instant) {
    let areas = layout(frame.area());
    let catalog = session.catalog();

    TitleBar::new(catalog.topic().to_string(), session.progress()).render(frame, areas.title);

    let base: Vec<&Element> = session.base_elements().collect();
    let discoveries: Vec<&Element> = session.discoveries().collect();

    let base_footer = recipe_hint(tui, session, &base, tui.base_grid.selected);
    let discovery_footer = recipe_hint(tui, session, &discoveries, tui.discovery_grid.selected);

    CardGrid::new(
        "Base Elements",
        base,
        &mut tui.base_grid,
        tui.focus == Pane::Base,
    )
    .footer(base_footer)
    .render(frame, areas.base);

    CardGrid::new(
        "Discoveries",
        discoveries,
        &mut tui.discovery_grid,
        tui.focus == Pane::Discoveries,
    )
    .empty_text("No discoveries yet.")
    .footer(discovery_footer)
    .render(frame, areas.discoveries);

    let slot_name = |index: usize| {
        session
            .slots()
            .get(index)
            .map(|id| match catalog.lookup(id.as_str()) {
                Some(element) => element.name.clone(),
                None => id.to_string(),
            })
    };
    SlotBar {
        slots: [slot_name(1), slot_name(2)],
        ready: session.phase() == Phase::Ready,
        flashing: tui.is_flashing(now),
    }
    .render(frame, areas.slots);

    MessageLog {
        entries: &tui.log.entries,
    }
    .render(frame, areas.log);

    frame.render_widget(
        Line::from(HELP_TEXT).style(Style::default().fg(Color::DarkGray)),
        areas.help,
    );
}

/// "Used in N recipes" for the card under the cursor, when hints are on.
fn recipe_hint(
    tui: &TuiState,
    session: &Session,
    cards: &[&Element],
    selected: usize,
) -> Option<String> {
    if !tui.show_recipe_hints {
        return None;
    }
    let card = cards.get(selected)?;
    let uses = session.catalog().recipes_using(&card.id).count();
    Some(match uses {
        1 => format!("{}: used in 1 recipe", card.name),
        n => format!("{}: used in {} recipes", card.name, n),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::test_session;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(session: &Session, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| draw_ui(f, session, tui, Instant::now()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_ui_fresh_session() {
        let session = test_session();
        let mut tui = TuiState::new(false);
        tui.log.push(session.status_message.clone());

        let text = render(&session, &mut tui);
        assert!(text.contains("Fusecraft: Elements"));
        assert!(text.contains("Discovered: 3/6"));
        assert!(text.contains("Base Elements (3)"));
        assert!(text.contains("No discoveries yet."));
        assert!(text.contains("Select Card 1"));
        assert!(text.contains("System ready."));
    }

    #[test]
    fn test_draw_ui_after_discovery() {
        let mut session = test_session();
        for action in [
            Action::SelectElement("water".to_string()),
            Action::SelectElement("earth".to_string()),
            Action::Combine,
        ] {
            update(&mut session, action);
        }
        let mut tui = TuiState::new(false);

        let text = render(&session, &mut tui);
        assert!(text.contains("Discoveries (1)"));
        assert!(text.contains("Mud"));
        assert!(text.contains("Discovered: 4/6"));
        assert!(!text.contains("No discoveries yet."));
    }

    #[test]
    fn test_recipe_hint_counts_uses() {
        let session = test_session();
        let mut tui = TuiState::new(true);
        let base: Vec<&Element> = session.base_elements().collect();
        assert_eq!(
            recipe_hint(&tui, &session, &base, 0).as_deref(),
            Some("Water: used in 2 recipes")
        );
        assert_eq!(
            recipe_hint(&tui, &session, &base, 1).as_deref(),
            Some("Earth: used in 1 recipe")
        );
        tui.show_recipe_hints = false;
        assert_eq!(recipe_hint(&tui, &session, &base, 0), None);
    }
}
