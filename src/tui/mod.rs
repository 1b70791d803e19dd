//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the storefront,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (fetch in flight, cards revealing): draws every ~80ms.
//! - **Idle**: sleeps up to 500ms, only redraws on events, background
//!   actions or terminal resize.
//!
//! ## Background Fetches
//!
//! `Effect::FetchCategories` and `Effect::FetchPlants` spawn a tokio task
//! that calls the `CatalogSource` and sends the outcome back as an `Action`
//! over a std mpsc channel. The loop drains that channel every iteration.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::catalog::{CatalogError, CatalogSource, HttpCatalog, PlantId};
use crate::core::action::{Action, Effect, FetchStage, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::category_bar::hit_test_control;
use crate::tui::components::plant_grid::CardPart;
use crate::tui::components::{
    CartPanelEvent, CartPanelState, GridEvent, ModalLayout, PlantGridState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which panel receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Grid,
    Cart,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub focus: Focus,
    // Persistent component states
    pub grid: PlantGridState,
    pub cart: CartPanelState,
    // Click targets from the last frame
    pub category_targets: Vec<Rect>,
    pub modal: Option<ModalLayout>,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            focus: Focus::Grid,
            grid: PlantGridState::new(),
            cart: CartPanelState::new(),
            category_targets: Vec::new(),
            modal: None,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source: Arc<dyn CatalogSource> =
        Arc::new(HttpCatalog::new(Some(config.base_url.clone())));
    info!("Catalog source: {} ({})", source.name(), config.base_url);
    if !config.paginate_filtered_views {
        info!("Category views show only their first batch (paginate_filtered_views = false)");
    }

    let mut app = App::new(source, config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let effect = update(&mut app, Action::LoadCatalog);
    apply_effect(effect, &app, &tx);

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let now = start_time.elapsed();
        let animating = app.is_loading || tui.grid.reveal.is_animating(now);
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (now.as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, now, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let effect = handle_event(&mut app, &mut tui, event);
            if apply_effect(effect, &app, &tx) {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (catalog responses)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            if apply_effect(effect, &app, &tx) {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Greenleaf shutting down ({} cart lines)", app.cart.lines().len());
    ratatui::restore();
    Ok(())
}

/// Perform the I/O an update asked for. Returns `true` when the loop should exit.
fn apply_effect(effect: Effect, app: &App, tx: &mpsc::Sender<Action>) -> bool {
    match effect {
        Effect::None => false,
        Effect::FetchCategories => {
            spawn_fetch(app.source.clone(), FetchStage::Categories, tx.clone());
            false
        }
        Effect::FetchPlants => {
            spawn_fetch(app.source.clone(), FetchStage::Plants, tx.clone());
            false
        }
        Effect::Quit => true,
    }
}

fn spawn_fetch(source: Arc<dyn CatalogSource>, stage: FetchStage, tx: mpsc::Sender<Action>) {
    info!("Spawning {} fetch from {}", stage.label(), source.name());
    tokio::spawn(async move {
        let action = match fetch(source.as_ref(), stage).await {
            Ok(action) => action,
            Err(error) => Action::CatalogFailed { stage, error },
        };
        if tx.send(action).is_err() {
            warn!("Failed to send {} result: receiver dropped", stage.label());
        }
    });
}

async fn fetch(source: &dyn CatalogSource, stage: FetchStage) -> Result<Action, CatalogError> {
    match stage {
        FetchStage::Categories => source
            .fetch_categories()
            .await
            .map(Action::CategoriesLoaded),
        FetchStage::Plants => source.fetch_plants().await.map(Action::PlantsLoaded),
    }
}

/// Translate one terminal event into state changes. Returns the effect of
/// the last `update` it performed.
fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    // Resize just needs a redraw
    if matches!(event, TuiEvent::Resize) {
        return Effect::None;
    }

    // ForceQuit (Ctrl+C) always quits, modal or not
    if matches!(event, TuiEvent::ForceQuit) {
        return update(app, Action::Quit);
    }

    // While the detail modal is open it swallows everything else
    if app.detail.is_some() {
        let close = match event {
            TuiEvent::Escape => true,
            TuiEvent::MouseClick(col, row) => tui
                .modal
                .is_some_and(|modal| modal.closes_on_click(col, row)),
            _ => false,
        };
        return if close {
            update(app, Action::CloseDetail)
        } else {
            Effect::None
        };
    }

    match event {
        TuiEvent::Quit => update(app, Action::Quit),
        TuiEvent::Escape if app.notice.is_some() => update(app, Action::DismissNotice),
        TuiEvent::NextFilter => {
            let index = app.filters.next_index();
            update(app, Action::SelectFilter(index))
        }
        TuiEvent::PrevFilter => {
            let index = app.filters.prev_index();
            update(app, Action::SelectFilter(index))
        }
        TuiEvent::ToggleFocus => {
            tui.focus = match tui.focus {
                Focus::Grid => Focus::Cart,
                Focus::Cart => Focus::Grid,
            };
            Effect::None
        }
        TuiEvent::MouseClick(col, row) => handle_click(app, tui, col, row),
        // Scroll events always go to the grid
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            let grid_event = tui.grid.handle_event(&event);
            handle_grid_event(app, tui, grid_event)
        }
        _ => match tui.focus {
            Focus::Grid => {
                let grid_event = tui.grid.handle_event(&event);
                handle_grid_event(app, tui, grid_event)
            }
            Focus::Cart => match tui.cart.handle_event(&event) {
                Some(CartPanelEvent::Remove(id)) => update(app, Action::RemoveFromCart(id)),
                None => Effect::None,
            },
        },
    }
}

fn handle_click(app: &mut App, tui: &mut TuiState, col: u16, row: u16) -> Effect {
    if let Some(index) = hit_test_control(&tui.category_targets, col, row) {
        return update(app, Action::SelectFilter(index));
    }

    if let Some(id) = tui.cart.hit_test_remove(col, row) {
        return update(app, Action::RemoveFromCart(id));
    }

    if let Some(hit) = tui.grid.hit_test(col, row) {
        tui.focus = Focus::Grid;
        tui.grid.selected = hit.index;
        let grid_event = match hit.part {
            CardPart::Name => Some(GridEvent::OpenDetail(hit.index)),
            CardPart::AddButton => Some(GridEvent::AddToCart(hit.index)),
            CardPart::Body => None,
        };
        return handle_grid_event(app, tui, grid_event);
    }

    Effect::None
}

fn handle_grid_event(app: &mut App, tui: &mut TuiState, grid_event: Option<GridEvent>) -> Effect {
    match grid_event {
        Some(GridEvent::OpenDetail(index)) => match plant_id_at(app, index) {
            Some(id) => update(app, Action::OpenDetail(id)),
            None => Effect::None,
        },
        Some(GridEvent::AddToCart(index)) => match plant_id_at(app, index) {
            Some(id) => update(app, Action::AddToCart(id)),
            None => Effect::None,
        },
        Some(GridEvent::Moved) => maybe_load_more(app, tui),
        None => Effect::None,
    }
}

fn plant_id_at(app: &App, index: usize) -> Option<PlantId> {
    app.view.rendered().get(index).map(|plant| plant.id)
}

/// Append the next batch once the viewport nears the bottom of the grid.
///
/// The grid is resynced right away so later events in the same burst see
/// the taller content instead of the last frame's measurements.
fn maybe_load_more(app: &mut App, tui: &mut TuiState) -> Effect {
    if !(tui.grid.is_near_bottom() && app.can_load_more()) {
        return Effect::None;
    }
    let effect = update(app, Action::LoadMore);
    tui.grid.sync(app.view.generation(), app.view.loaded());
    effect
}
