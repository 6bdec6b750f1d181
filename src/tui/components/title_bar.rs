//! # TitleBar Component
//!
//! Top status bar showing the catalog topic and the progress readout.
//!
//! ## Responsibilities
//!
//! - Display the catalog's topic (`meta.topic`)
//! - Display `Discovered: unlocked/total`, counting base elements like the
//!   classic readout does
//! - Show a `★ Complete` marker once every element is unlocked
//!
//! ## Stateless Component
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(catalog.topic().to_string(), session.progress());
//! title_bar.render(frame, area);
//! ```

use crate::core::state::Progress;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Top status bar component showing topic and progress.
pub struct TitleBar {
    /// Catalog topic (e.g., "Chemistry")
    pub topic: String,
    pub progress: Progress,
}

impl TitleBar {
    pub fn new(topic: String, progress: Progress) -> Self {
        Self { topic, progress }
    }

    fn text(&self) -> String {
        let Progress {
            unlocked, total, ..
        } = self.progress;
        if unlocked >= total {
            format!(
                "Fusecraft: {} | Discovered: {}/{} | ★ Complete",
                self.topic, unlocked, total
            )
        } else {
            format!(
                "Fusecraft: {} | Discovered: {}/{}",
                self.topic, unlocked, total
            )
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow),
        ));
        frame.render_widget(line, area);
    }
}
