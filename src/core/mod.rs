//! # Core Application Logic
//!
//! This module contains Greenleaf's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Pager, reveal, cart  │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │  Catalog   │
//!             │  Adapter   │          │  (HTTP)    │
//!             │ (ratatui)  │          │            │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`pager`]: Batched rendering cursor
//! - [`reveal`]: One-shot card reveal state machine
//! - [`filters`]: Category filter controls
//! - [`store`]: Fetched plants and category matching
//! - [`cart`]: Cart lines and totals
//! - [`config`]: Layered configuration

pub mod action;
pub mod cart;
pub mod config;
pub mod filters;
pub mod pager;
pub mod reveal;
pub mod state;
pub mod store;
