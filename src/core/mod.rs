//! # Core Game Logic
//!
//! This module contains Fusecraft's discovery engine.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (elements)   │
//!                    │  • Session (state)      │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No UI. Synchronous.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │  Catalog   │
//!            │  Adapter   │            │  Source    │
//!            │ (ratatui)  │            │ (file/http)│
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Element definitions, recipes, load-time validation
//! - [`unlock`]: The set of elements the player owns
//! - [`slots`]: The two staging slots for a combination
//! - [`resolver`]: Pair of ingredients → outcome
//! - [`state`]: The `Session` that owns all of the above
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`source`]: Fetching catalog text (the only async step)
//! - [`config`]: Layered settings

pub mod action;
pub mod catalog;
pub mod config;
pub mod resolver;
pub mod slots;
pub mod source;
pub mod state;
pub mod unlock;

// Re-export commonly used types for convenience
pub use action::{Action, Effect, update};
pub use catalog::{Catalog, Element, ElementId, LoadError};
pub use resolver::CombinationOutcome;
pub use state::{Session, SessionError, SessionOptions};
