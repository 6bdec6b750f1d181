//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: Topic and progress readout
//! - `SlotBar`: The two staging slots and the combine control
//!
//! ### Stateful Components (Persistent State + Transient Wrapper)
//!
//! Components whose state outlives a frame keep it in `TuiState` and are
//! wrapped for rendering each frame:
//! - `CardGrid` / `CardGridState`: Navigable grid of cards
//! - `MessageLog` / `MessageLogState`: Timestamped status history
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as "props" (struct fields), never by
//! reaching into the session directly:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! SlotBar { slots, ready, flashing }.render(frame, area);
//!
//! // Bad: Hidden dependency on the session
//! slot_bar.render(frame, area); // reads from Session
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Topic + progress)
//! ├── card_grid.rs     (Card pane with cursor)
//! ├── slot_bar.rs      (Slots + combine control)
//! └── message_log.rs   (Status history)
//! ```

pub mod card_grid;
pub mod message_log;
pub mod slot_bar;
mod title_bar;

pub use card_grid::{CardEvent, CardGrid, CardGridState};
pub use message_log::{MessageLog, MessageLogState};
pub use slot_bar::SlotBar;
pub use title_bar::TitleBar;
