//! # TUI Components
//!
//! This module contains all UI components for the storefront.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: Top status bar with shop name, status and cart size
//! - `CategoryBar`: One control per filter, exactly one drawn active
//! - `PlantCard`: A single plant in the grid
//! - `DetailModal`: Overlay with everything known about one plant
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep persistent state in `TuiState` and emit events:
//! - `PlantGrid`: Scrollable card grid with reveal tracking and load-more
//! - `CartPanel`: Cart lines with remove controls and the total
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as "props" (struct fields borrowed from
//! `App`), never by reaching into global state. Each file holds the
//! component's state type, event type, rendering, event handling and tests.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── category_bar.rs  (Filter controls + hit testing)
//! ├── plant_card.rs    (Single card widget)
//! ├── plant_grid.rs    (Scrollable grid)
//! ├── cart_panel.rs    (Cart lines + total)
//! └── detail_modal.rs  (Plant detail overlay)
//! ```

pub mod cart_panel;
pub mod category_bar;
pub mod detail_modal;
pub mod plant_card;
pub mod plant_grid;
mod title_bar;

pub use cart_panel::{CartPanel, CartPanelEvent, CartPanelState};
pub use category_bar::CategoryBar;
pub use detail_modal::{DetailModal, ModalLayout};
pub use plant_grid::{GridEvent, PlantGrid, PlantGridState};
pub use title_bar::TitleBar;
