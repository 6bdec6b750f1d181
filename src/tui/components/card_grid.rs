//! # CardGrid Component
//!
//! A pane of cards laid out left-to-right, wrapping into rows. Used twice:
//! once for base elements and once for discoveries.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CardGridState` lives in `TuiState` (cursor position, cached layout)
//! - `CardGrid` is created each frame with borrowed state and card props
//!
//! The grid learns how many columns fit while rendering and caches that,
//! so arrow-key navigation moves by whole rows.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::catalog::Element;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const CARD_WIDTH: u16 = 14;
pub const CARD_HEIGHT: u16 = 4;

/// Persistent cursor and layout cache for one grid.
#[derive(Debug, Default)]
pub struct CardGridState {
    pub selected: usize,
    /// Number of cards rendered last frame.
    pub len: usize,
    /// Columns that fit last frame (at least 1).
    pub columns: usize,
}

impl CardGridState {
    pub fn new() -> Self {
        Self {
            columns: 1,
            ..Default::default()
        }
    }

    /// Move the cursor to `index`. Out-of-range values are clamped on the next render.
    pub fn focus(&mut self, index: usize) {
        self.selected = index;
    }

    fn clamp(&mut self) {
        self.selected = self.selected.min(self.len.saturating_sub(1));
    }
}

/// Events emitted by a card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEvent {
    /// The card at this index was picked.
    Pick(usize),
}

impl EventHandler for CardGridState {
    type Event = CardEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<CardEvent> {
        if self.len == 0 {
            return None;
        }
        let columns = self.columns.max(1);
        match event {
            TuiEvent::CursorLeft => self.selected = self.selected.saturating_sub(1),
            TuiEvent::CursorRight => self.selected += 1,
            TuiEvent::CursorUp => self.selected = self.selected.saturating_sub(columns),
            TuiEvent::CursorDown => {
                if self.selected + columns < self.len {
                    self.selected += columns;
                }
            }
            TuiEvent::Submit => {
                self.clamp();
                return Some(CardEvent::Pick(self.selected));
            }
            _ => {}
        }
        self.clamp();
        None
    }
}

/// Transient render wrapper for a card grid.
pub struct CardGrid<'a> {
    pub title: &'a str,
    pub cards: Vec<&'a Element>,
    pub focused: bool,
    pub empty_text: &'a str,
    /// Optional footer for the focused card (recipe hints).
    pub footer: Option<String>,
    state: &'a mut CardGridState,
}

impl<'a> CardGrid<'a> {
    pub fn new(
        title: &'a str,
        cards: Vec<&'a Element>,
        state: &'a mut CardGridState,
        focused: bool,
    ) -> Self {
        Self {
            title,
            cards,
            focused,
            empty_text: "",
            footer: None,
            state,
        }
    }

    pub fn empty_text(mut self, text: &'a str) -> Self {
        self.empty_text = text;
        self
    }

    pub fn footer(mut self, footer: Option<String>) -> Self {
        self.footer = footer;
        self
    }
}

impl Component for CardGrid<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let mut block = Block::bordered()
            .title(format!(" {} ({}) ", self.title, self.cards.len()))
            .border_style(border_style);
        if let Some(footer) = &self.footer {
            block = block.title_bottom(Line::from(format!(" {} ", footer)).centered());
        }

        let inner = block.inner(area);
        frame.render_widget(block, area);

        self.state.len = self.cards.len();
        self.state.columns = (inner.width / CARD_WIDTH).max(1) as usize;
        self.state.clamp();

        if self.cards.is_empty() {
            let empty = Paragraph::new(self.empty_text)
                .style(
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                )
                .alignment(Alignment::Center);
            frame.render_widget(empty, inner);
            return;
        }

        let columns = self.state.columns;
        let visible_rows = (inner.height / CARD_HEIGHT).max(1) as usize;
        let selected_row = self.state.selected / columns;
        // Scroll just far enough to keep the cursor row on screen
        let first_row = selected_row.saturating_sub(visible_rows - 1);

        for (index, card) in self.cards.iter().enumerate() {
            let row = index / columns;
            if row < first_row || row >= first_row + visible_rows {
                continue;
            }
            let col = index % columns;
            let rect = Rect::new(
                inner.x + col as u16 * CARD_WIDTH,
                inner.y + (row - first_row) as u16 * CARD_HEIGHT,
                CARD_WIDTH.min(inner.width),
                CARD_HEIGHT.min(inner.height),
            );
            let is_cursor = self.focused && index == self.state.selected;
            render_card(frame, rect, card, is_cursor);
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, card: &Element, is_cursor: bool) {
    let style = if is_cursor {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else if card.is_base() {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Green)
    };

    let inner_width = area.width.saturating_sub(2) as usize;
    let lines: Vec<Line> = card_label(&card.name, inner_width, 2)
        .into_iter()
        .map(Line::from)
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(Block::bordered().border_style(style))
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Wrap `name` into at most `max_lines` lines of `width` columns, marking
/// any cut with an ellipsis.
pub fn card_label(name: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }
    let wrapped: Vec<String> = textwrap::wrap(name, width)
        .into_iter()
        .map(|line| line.into_owned())
        .collect();
    if wrapped.len() <= max_lines {
        return wrapped;
    }

    let mut lines: Vec<String> = wrapped[..max_lines].to_vec();
    if let Some(last) = lines.last_mut() {
        let mut cut = String::new();
        for ch in last.chars() {
            let mut next = cut.clone();
            next.push(ch);
            if next.width() + 1 > width {
                break;
            }
            cut = next;
        }
        cut.push('…');
        *last = cut;
    }
    lines
}
