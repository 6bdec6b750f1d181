//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the session,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop only redraws when something changed:
//!
//! - **Flashing** (a failed combine is being shown): polls every ~50ms so
//!   the red tint clears on time.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal resize.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::catalog::{Element, ElementId};
use crate::core::config::ResolvedConfig;
use crate::core::state::Session;
use crate::tui::component::EventHandler;
use crate::tui::components::{CardEvent, CardGridState, MessageLogState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// How long the combine control stays red after a failed combination.
pub const FLASH_DURATION: Duration = Duration::from_millis(300);

/// Which card pane has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Base,
    Discoveries,
}

impl Pane {
    fn next(self) -> Self {
        match self {
            Pane::Base => Pane::Discoveries,
            Pane::Discoveries => Pane::Base,
        }
    }
}

/// TUI-specific presentation state (not part of core game logic)
pub struct TuiState {
    pub focus: Pane,
    pub base_grid: CardGridState,
    pub discovery_grid: CardGridState,
    pub log: MessageLogState,
    /// Combine control is tinted red until this instant.
    pub flash_until: Option<Instant>,
    pub show_recipe_hints: bool,
}

impl TuiState {
    pub fn new(show_recipe_hints: bool) -> Self {
        Self {
            focus: Pane::Base,
            base_grid: CardGridState::new(),
            discovery_grid: CardGridState::new(),
            log: MessageLogState::default(),
            flash_until: None,
            show_recipe_hints,
        }
    }

    pub fn is_flashing(&self, now: Instant) -> bool {
        self.flash_until.is_some_and(|until| now < until)
    }

    fn focused_grid(&mut self) -> &mut CardGridState {
        match self.focus {
            Pane::Base => &mut self.base_grid,
            Pane::Discoveries => &mut self.discovery_grid,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), Hide)?;
        info!("Terminal modes enabled (hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

pub fn run(mut session: Session, config: &ResolvedConfig) -> std::io::Result<()> {
    let mut tui = TuiState::new(config.show_recipe_hints);
    tui.log.push(session.status_message.clone());

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new().and_then(|_terminal_mode_guard| {
        event_loop(&mut terminal, &mut session, &mut tui)
    });
    ratatui::restore();

    let progress = session.progress();
    info!(
        "Session ended with {}/{} elements unlocked",
        progress.unlocked, progress.total
    );
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    session: &mut Session,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        let now = Instant::now();
        let flashing = tui.is_flashing(now);
        if !flashing && tui.flash_until.take().is_some() {
            // Flash just expired: repaint without the tint
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, session, tui, now))?;
            needs_redraw = false;
        }

        let timeout = if flashing {
            Duration::from_millis(50)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if dispatch(session, tui, event, Instant::now()) == Effect::Quit {
                return Ok(());
            }
        }
    }
}

/// Route one terminal event through the TUI state and, where it maps to a
/// player action, through `core::update`.
fn dispatch(session: &mut Session, tui: &mut TuiState, event: TuiEvent, now: Instant) -> Effect {
    let action = match event {
        // Resize just needs a redraw (already flagged by the caller)
        TuiEvent::Resize => return Effect::None,
        TuiEvent::Quit | TuiEvent::ForceQuit => Action::Quit,
        TuiEvent::Combine => Action::Combine,
        TuiEvent::ClearSlot(index) => Action::ClearSlot(index),
        TuiEvent::ClearAll => Action::ClearAll,
        TuiEvent::FocusNext => {
            tui.focus = tui.focus.next();
            return Effect::None;
        }
        TuiEvent::Submit
        | TuiEvent::CursorUp
        | TuiEvent::CursorDown
        | TuiEvent::CursorLeft
        | TuiEvent::CursorRight => {
            let Some(CardEvent::Pick(index)) = tui.focused_grid().handle_event(&event) else {
                return Effect::None;
            };
            match focused_card(session, tui.focus, index) {
                Some(id) => Action::SelectElement(id.to_string()),
                None => return Effect::None,
            }
        }
    };

    let effect = update(session, action);
    debug!("Effect: {:?}", effect);
    match &effect {
        Effect::Quit => return effect,
        Effect::FlashFailure => tui.flash_until = Some(now + FLASH_DURATION),
        Effect::Reveal(id) => reveal(session, tui, id),
        Effect::None => {}
    }
    tui.log.push(session.status_message.clone());
    effect
}

fn focused_card(session: &Session, pane: Pane, index: usize) -> Option<ElementId> {
    let mut cards: Box<dyn Iterator<Item = &Element>> = match pane {
        Pane::Base => Box::new(session.base_elements()),
        Pane::Discoveries => Box::new(session.discoveries()),
    };
    cards.nth(index).map(|e| e.id.clone())
}

/// Focus the discoveries pane on a freshly unlocked card.
fn reveal(session: &Session, tui: &mut TuiState, id: &ElementId) {
    if let Some(index) = session.discoveries().position(|e| &e.id == id) {
        tui.focus = Pane::Discoveries;
        tui.discovery_grid.focus(index);
    }
}
