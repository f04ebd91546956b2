//! # Core Session Logic
//!
//! The session controller and everything it needs to decide what happens
//! next. It knows nothing about any specific UI technology or HTTP library.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • App (session state)  │
//!                    │  • Action (events)      │
//!                    │  • update() → Effects   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │ ◀──── Action (results) ─ │  Inventory │
//!     │  runtime   │ ───── calls ───────────▶ │   client   │
//!     │ (ratatui)  │                          │ (reqwest)  │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all session state in one place
//! - [`action`]: `Action`, `Effect` and the `update()` transition function
//! - [`wizard`]: the add/edit sub-state machine
//! - [`table`]: table projection and cursor
//! - [`config`]: settings resolution

pub mod action;
pub mod config;
pub mod state;
pub mod table;
pub mod text_field;
pub mod wizard;
