//! # MessageLog Component
//!
//! Timestamped history of status messages, newest at the bottom. The last
//! entry is the current status and is drawn highlighted.

use chrono::{DateTime, Local};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::Component;

/// Oldest entries are dropped past this many.
pub const MAX_LOG_ENTRIES: usize = 100;

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub at: DateTime<Local>,
    pub text: String,
}

/// Persistent message history, lives in `TuiState`.
#[derive(Debug, Default)]
pub struct MessageLogState {
    pub entries: Vec<LogEntry>,
}

impl MessageLogState {
    pub fn push(&mut self, text: impl Into<String>) {
        self.entries.push(LogEntry {
            at: Local::now(),
            text: text.into(),
        });
        if self.entries.len() > MAX_LOG_ENTRIES {
            let excess = self.entries.len() - MAX_LOG_ENTRIES;
            self.entries.drain(..excess);
        }
    }

    pub fn latest(&self) -> Option<&str> {
        self.entries.last().map(|e| e.text.as_str())
    }
}

pub struct MessageLog<'a> {
    pub entries: &'a [LogEntry],
}

impl Component for MessageLog<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Log ")
            .border_style(Style::default().fg(Color::DarkGray));
        let visible = block.inner(area).height as usize;
        let start = self.entries.len().saturating_sub(visible);

        let last = self.entries.len().saturating_sub(1);
        let lines: Vec<Line> = self.entries[start..]
            .iter()
            .enumerate()
            .map(|(offset, entry)| {
                let style = if start + offset == last {
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                Line::from(vec![
                    Span::styled(
                        entry.at.format("%H:%M:%S ").to_string(),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(entry.text.clone(), style),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
