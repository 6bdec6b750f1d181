//! # SlotBar Component
//!
//! The staging row: `[ Slot 1 ] + [ Slot 2 ] = [ Combine ]`.
//!
//! Stateless. Filled slots get a solid green border, empty ones show a
//! dim placeholder. The combine control is dim until both slots are filled
//! and turns red for a moment after a combination that matched nothing.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::Component;

pub struct SlotBar {
    /// Display names of the staged cards, slot 1 then slot 2.
    pub slots: [Option<String>; 2],
    pub ready: bool,
    pub flashing: bool,
}

impl Component for SlotBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Fill, Length};
        let [first, plus, second, equals, button] =
            Layout::horizontal([Fill(1), Length(3), Fill(1), Length(3), Fill(1)]).areas(area);

        for (index, (slot, rect)) in self.slots.iter().zip([first, second]).enumerate() {
            render_slot(frame, rect, index + 1, slot.as_deref());
        }

        let operator_style = Style::default().fg(Color::DarkGray);
        for (symbol, rect) in [("+", plus), ("=", equals)] {
            let [_, middle, _] =
                Layout::vertical([Fill(1), Length(1), Fill(1)]).areas(rect);
            frame.render_widget(
                Paragraph::new(symbol)
                    .style(operator_style)
                    .alignment(Alignment::Center),
                middle,
            );
        }

        let button_style = if self.flashing {
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD)
        } else if self.ready {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let combine = Paragraph::new("Combine (c)")
            .block(Block::bordered().border_style(button_style))
            .style(button_style)
            .alignment(Alignment::Center);
        frame.render_widget(combine, button);
    }
}

fn render_slot(frame: &mut Frame, area: Rect, index: usize, name: Option<&str>) {
    let (text, block) = match name {
        Some(name) => (
            name.to_string(),
            Block::bordered()
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(Color::Green)),
        ),
        None => (
            format!("Select Card {}", index),
            Block::bordered()
                .border_type(BorderType::Plain)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
    };
    let style = if name.is_some() {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC)
    };
    let paragraph = Paragraph::new(text)
        .block(block.title(format!(" {} ", index)))
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
