//! # PlantGrid Component
//!
//! Scrollable three-column grid of plant cards.
//!
//! ## Responsibilities
//!
//! - Lay out the rendered batch of plants as cards
//! - Feed each card's visible fraction to the reveal tracker every frame
//! - Report when the viewport is close enough to the bottom to load more
//! - Keyboard selection and mouse hit testing
//!
//! ## Architecture
//!
//! `PlantGrid` is a transient component (created each frame) that wraps
//! `&'a mut PlantGridState` (persistent state) and the rendered plants
//! (props). When the list generation changes, i.e. the filter changed, the
//! state drops its reveal progress, selection and scroll offset.

use std::time::Duration;

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect, Size};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::catalog::Plant;
use crate::core::reveal::{GRID_COLUMNS, RevealTracker};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::plant_card::{BUTTON_ROW, CARD_HEIGHT, NAME_ROW, PlantCard};
use crate::tui::event::TuiEvent;

/// Rows from the bottom of the grid at which another batch is requested.
pub const LOAD_MORE_MARGIN: u16 = 3;

const COLUMNS: u16 = GRID_COLUMNS as u16;

/// Which part of a card a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPart {
    Name,
    AddButton,
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardHit {
    pub index: usize,
    pub part: CardPart,
}

/// Events emitted by the grid, carrying indices into the rendered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridEvent {
    OpenDetail(usize),
    AddToCart(usize),
    /// Scroll position or selection changed.
    Moved,
}

/// Fraction of a card spanning `top..top + height` inside the viewport
/// `offset..offset + viewport`.
pub fn visible_fraction(top: u16, height: u16, offset: u16, viewport: u16) -> f32 {
    if height == 0 {
        return 0.0;
    }
    let start = top.max(offset);
    let end = top.saturating_add(height).min(offset.saturating_add(viewport));
    end.saturating_sub(start) as f32 / height as f32
}

/// Map a screen position to a card. `area` is the grid's scroll viewport.
pub fn hit_test_card(
    col: u16,
    row: u16,
    area: Rect,
    scroll_offset_y: u16,
    card_width: u16,
    count: usize,
) -> Option<CardHit> {
    if card_width == 0 || !area.contains(Position { x: col, y: row }) {
        return None;
    }
    let column = (col - area.x) / card_width;
    if column >= COLUMNS {
        return None;
    }
    let content_y = (row - area.y) + scroll_offset_y;
    let card_row = content_y / CARD_HEIGHT;
    let index = card_row as usize * GRID_COLUMNS + column as usize;
    if index >= count {
        return None;
    }
    let part = match content_y % CARD_HEIGHT {
        NAME_ROW => CardPart::Name,
        BUTTON_ROW => CardPart::AddButton,
        _ => CardPart::Body,
    };
    Some(CardHit { index, part })
}

/// Content row where the card at `index` starts.
pub fn card_top(index: usize) -> u16 {
    let row = u16::try_from(index / GRID_COLUMNS).unwrap_or(u16::MAX);
    row.saturating_mul(CARD_HEIGHT)
}

fn content_height(count: usize) -> u16 {
    let rows = u16::try_from(count.div_ceil(GRID_COLUMNS)).unwrap_or(u16::MAX);
    rows.saturating_mul(CARD_HEIGHT)
}

/// Persistent grid state. Must live in the parent TuiState.
pub struct PlantGridState {
    pub scroll_state: ScrollViewState,
    pub reveal: RevealTracker,
    /// Selected card (keyboard navigation)
    pub selected: usize,
    /// List generation the state was last synced to
    generation: Option<u64>,
    /// Measurements from the last render, for events between frames
    pub viewport: Rect,
    pub card_width: u16,
    pub count: usize,
}

impl Default for PlantGridState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlantGridState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            reveal: RevealTracker::new(),
            selected: 0,
            generation: None,
            viewport: Rect::default(),
            card_width: 0,
            count: 0,
        }
    }

    /// Drop per-card state when the displayed list was replaced.
    pub fn sync(&mut self, generation: u64, count: usize) {
        if self.generation != Some(generation) {
            self.generation = Some(generation);
            self.reveal.clear();
            self.selected = 0;
            self.scroll_state.scroll_to_top();
        }
        self.count = count;
        self.reveal.register_up_to(count);
        if self.selected >= count {
            self.selected = count.saturating_sub(1);
        }
    }

    pub fn content_height(&self) -> u16 {
        content_height(self.count)
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.content_height().saturating_sub(self.viewport.height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// True when the bottom of the grid is within `LOAD_MORE_MARGIN` rows of
    /// the bottom of the viewport.
    pub fn is_near_bottom(&self) -> bool {
        let visible_end = self
            .scroll_state
            .offset()
            .y
            .saturating_add(self.viewport.height)
            .saturating_add(LOAD_MORE_MARGIN);
        visible_end >= self.content_height()
    }

    /// Scroll so the selected card is fully visible.
    pub fn scroll_to_selected(&mut self) {
        if self.count == 0 {
            return;
        }
        let top = card_top(self.selected);
        let bottom = top.saturating_add(CARD_HEIGHT);
        let offset_y = self.scroll_state.offset().y;

        if top < offset_y {
            self.scroll_state.set_offset(Position { x: 0, y: top });
        } else if bottom > offset_y.saturating_add(self.viewport.height) {
            let new_y = bottom.saturating_sub(self.viewport.height);
            self.scroll_state.set_offset(Position { x: 0, y: new_y });
        }
    }

    pub fn hit_test(&self, col: u16, row: u16) -> Option<CardHit> {
        hit_test_card(
            col,
            row,
            self.viewport,
            self.scroll_state.offset().y,
            self.card_width,
            self.count,
        )
    }

    fn move_selection(&mut self, delta: isize) {
        if self.count == 0 {
            return;
        }
        let target = self.selected as isize + delta;
        if (0..self.count as isize).contains(&target) {
            self.selected = target as usize;
            self.scroll_to_selected();
        }
    }
}

impl EventHandler for PlantGridState {
    type Event = GridEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                Some(GridEvent::Moved)
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.clamp_scroll();
                Some(GridEvent::Moved)
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                Some(GridEvent::Moved)
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.clamp_scroll();
                Some(GridEvent::Moved)
            }
            TuiEvent::CursorLeft => {
                self.move_selection(-1);
                Some(GridEvent::Moved)
            }
            TuiEvent::CursorRight => {
                self.move_selection(1);
                Some(GridEvent::Moved)
            }
            TuiEvent::CursorUp => {
                self.move_selection(-(GRID_COLUMNS as isize));
                Some(GridEvent::Moved)
            }
            TuiEvent::CursorDown => {
                self.move_selection(GRID_COLUMNS as isize);
                Some(GridEvent::Moved)
            }
            TuiEvent::Submit if self.count > 0 => Some(GridEvent::OpenDetail(self.selected)),
            TuiEvent::AddToCart if self.count > 0 => Some(GridEvent::AddToCart(self.selected)),
            _ => None,
        }
    }
}

/// Scrollable card grid, created fresh each frame.
pub struct PlantGrid<'a> {
    pub state: &'a mut PlantGridState,
    pub plants: &'a [Plant],
    /// Length of the whole displayed list, rendered or not.
    pub total: usize,
    pub generation: u64,
    pub currency: &'a str,
    pub is_loading: bool,
    pub is_focused: bool,
    /// Time since startup, drives reveal animation.
    pub now: Duration,
}

impl Component for PlantGrid<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = format!(" Plants ({} of {}) ", self.plants.len(), self.total);
        let border_color = if self.is_focused {
            Color::Green
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(title);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        self.state.sync(self.generation, self.plants.len());
        self.state.viewport = inner;

        if self.plants.is_empty() {
            let message = if self.is_loading {
                "Loading plants..."
            } else {
                "No plants to show."
            };
            let paragraph = Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(paragraph, inner);
            return;
        }

        // -1 for the scrollbar
        let content_width = inner.width.saturating_sub(1);
        let card_width = content_width / COLUMNS;
        self.state.card_width = card_width;
        self.state.clamp_scroll();

        let canvas_height = self.state.content_height();
        let offset_y = self.state.scroll_state.offset().y;

        let mut scroll_view = ScrollView::new(Size::new(content_width, canvas_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (index, plant) in self.plants.iter().enumerate() {
            let column = (index % GRID_COLUMNS) as u16;
            let top = card_top(index);

            let fraction = visible_fraction(top, CARD_HEIGHT, offset_y, inner.height);
            if self.state.reveal.observe(index, fraction, self.now) {
                log::debug!("Revealing card {} ({})", index, plant.name);
            }
            if fraction == 0.0 {
                continue;
            }

            let card = PlantCard::new(
                plant,
                self.currency,
                self.state.reveal.phase(index, self.now),
                self.is_focused && index == self.state.selected,
            );
            let card_rect = Rect::new(column * card_width, top, card_width, CARD_HEIGHT);
            scroll_view.render_widget(card, card_rect);
        }

        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reveal::RevealState;
    use crate::test_support::numbered_plants;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_visible_fraction() {
        assert_eq!(visible_fraction(0, 7, 0, 20), 1.0);
        assert_eq!(visible_fraction(21, 7, 0, 20), 0.0);
        // Two of seven rows peeking in at the bottom
        let peek = visible_fraction(18, 7, 0, 20);
        assert!((peek - 2.0 / 7.0).abs() < f32::EPSILON);
        // Scrolled past the top
        assert_eq!(visible_fraction(0, 7, 7, 20), 0.0);
    }

    #[test]
    fn test_hit_test_card_parts() {
        let area = Rect::new(2, 5, 61, 20);
        // card_width 20, six cards
        assert_eq!(
            hit_test_card(3, 5 + NAME_ROW, area, 0, 20, 6),
            Some(CardHit {
                index: 0,
                part: CardPart::Name
            })
        );
        assert_eq!(
            hit_test_card(25, 5 + BUTTON_ROW, area, 0, 20, 6),
            Some(CardHit {
                index: 1,
                part: CardPart::AddButton
            })
        );
        // Second row, third column, body
        assert_eq!(
            hit_test_card(45, 5 + CARD_HEIGHT + 3, area, 0, 20, 6),
            Some(CardHit {
                index: 5,
                part: CardPart::Body
            })
        );
    }

    #[test]
    fn test_hit_test_card_accounts_for_scroll_and_bounds() {
        let area = Rect::new(0, 0, 61, 10);
        // Scrolled by one card: top screen row is card row 1
        assert_eq!(
            hit_test_card(1, NAME_ROW, area, CARD_HEIGHT, 20, 6).map(|h| h.index),
            Some(3)
        );
        // Past the last card
        assert_eq!(hit_test_card(1, NAME_ROW, area, CARD_HEIGHT, 20, 3), None);
        // Scrollbar column
        assert_eq!(hit_test_card(60, 1, area, 0, 20, 6), None);
        // Outside the viewport
        assert_eq!(hit_test_card(1, 11, area, 0, 20, 6), None);
    }

    #[test]
    fn test_card_top_saturates_for_huge_lists() {
        assert_eq!(card_top(0), 0);
        assert_eq!(card_top(2), 0);
        assert_eq!(card_top(3), CARD_HEIGHT);
        assert_eq!(card_top(usize::MAX), u16::MAX);
        assert_eq!(content_height(usize::MAX), u16::MAX);
        assert_eq!(visible_fraction(u16::MAX - 2, CARD_HEIGHT, 0, 20), 0.0);
    }

    #[test]
    fn test_near_bottom() {
        let mut state = PlantGridState::new();
        state.sync(1, 12); // 4 rows = 28 lines
        state.viewport = Rect::new(0, 0, 60, 20);
        assert!(!state.is_near_bottom());

        state.scroll_state.set_offset(Position { x: 0, y: 5 });
        assert!(state.is_near_bottom());
    }

    #[test]
    fn test_short_content_is_near_bottom() {
        let mut state = PlantGridState::new();
        state.sync(1, 6);
        state.viewport = Rect::new(0, 0, 60, 30);
        assert!(state.is_near_bottom());
    }

    #[test]
    fn test_generation_change_resets_state() {
        let mut state = PlantGridState::new();
        state.sync(1, 6);
        state.selected = 4;
        state.reveal.observe(0, 1.0, Duration::ZERO);

        // Same generation, more cards: progress kept
        state.sync(1, 12);
        assert_eq!(state.selected, 4);
        assert!(matches!(state.reveal.state(0), Some(RevealState::Revealed { .. })));
        assert_eq!(state.reveal.len(), 12);

        state.sync(2, 3);
        assert_eq!(state.selected, 0);
        assert_eq!(state.reveal.state(0), Some(RevealState::Pending));
        assert_eq!(state.reveal.len(), 3);
    }

    #[test]
    fn test_keyboard_selection_moves_by_row() {
        let mut state = PlantGridState::new();
        state.sync(1, 8);
        state.viewport = Rect::new(0, 0, 60, 14);

        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, 3);
        state.handle_event(&TuiEvent::CursorRight);
        assert_eq!(state.selected, 4);
        state.handle_event(&TuiEvent::CursorDown);
        // Row below is too short
        assert_eq!(state.selected, 7);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, 7);

        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(GridEvent::OpenDetail(7))
        );
        assert_eq!(
            state.handle_event(&TuiEvent::AddToCart),
            Some(GridEvent::AddToCart(7))
        );
    }

    #[test]
    fn test_render_reveals_visible_cards_only() {
        let plants = numbered_plants(12);
        let backend = TestBackend::new(63, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = PlantGridState::new();

        terminal
            .draw(|f| {
                PlantGrid {
                    state: &mut state,
                    plants: &plants,
                    total: 20,
                    generation: 1,
                    currency: "৳",
                    is_loading: false,
                    is_focused: true,
                    now: Duration::from_secs(1),
                }
                .render(f, f.area());
            })
            .unwrap();

        // Viewport is 14 rows: card rows 0 and 1 fully visible, rows 2+ not
        assert_eq!(state.viewport.height, 14);
        assert!(matches!(state.reveal.state(0), Some(RevealState::Revealed { .. })));
        assert!(matches!(state.reveal.state(5), Some(RevealState::Revealed { .. })));
        assert_eq!(state.reveal.state(6), Some(RevealState::Pending));
        assert_eq!(state.card_width, 20);

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Plants (12 of 20)"));
    }

    #[test]
    fn test_render_empty_grid_message() {
        let backend = TestBackend::new(40, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = PlantGridState::new();

        terminal
            .draw(|f| {
                PlantGrid {
                    state: &mut state,
                    plants: &[],
                    total: 0,
                    generation: 1,
                    currency: "৳",
                    is_loading: true,
                    is_focused: false,
                    now: Duration::ZERO,
                }
                .render(f, f.area());
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Loading plants..."));
    }
}
