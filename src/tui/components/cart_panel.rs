//! # Cart Panel Component
//!
//! Right-hand panel listing cart lines and the running total.
//!
//! Each line reads `Mango (x2) - ৳1000` with a `✕` remove control at the
//! right edge. The panel never computes anything itself; it paints the
//! [`CartView`] handed to it. When there are more lines than rows the list
//! scrolls to keep the selected line visible and the title shows which
//! lines are on screen.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CartPanelState` lives in `TuiState` (selection, click targets)
//! - `CartPanel` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::catalog::PlantId;
use crate::core::cart::{CartRow, CartView, format_price};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const REMOVE_GLYPH: &str = "✕";

/// Text for one cart line, without the remove control.
pub fn cart_line_text(row: &CartRow, currency: &str) -> String {
    format!(
        "{} (x{}) - {}",
        row.name,
        row.quantity,
        format_price(currency, row.subtotal)
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartPanelEvent {
    Remove(PlantId),
}

#[derive(Debug, Default)]
pub struct CartPanelState {
    pub selected: usize,
    /// On-screen remove controls from the last render.
    remove_targets: Vec<(Rect, PlantId)>,
    /// Plant ids of the lines from the last render, in order.
    line_ids: Vec<PlantId>,
    /// Index of the first line on screen.
    offset: usize,
}

impl CartPanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plant whose remove control is under a screen position.
    pub fn hit_test_remove(&self, col: u16, row: u16) -> Option<PlantId> {
        self.remove_targets
            .iter()
            .find(|(rect, _)| rect.contains(Position { x: col, y: row }))
            .map(|(_, id)| *id)
    }

    fn sync(&mut self, line_ids: Vec<PlantId>) {
        self.line_ids = line_ids;
        if self.selected >= self.line_ids.len() {
            self.selected = self.line_ids.len().saturating_sub(1);
        }
    }

    /// Move the window of `visible` rows so the selected line is inside it.
    fn scroll_to_selected(&mut self, visible: usize) {
        let len = self.line_ids.len();
        if visible == 0 || len <= visible {
            self.offset = 0;
            return;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + visible {
            self.offset = self.selected + 1 - visible;
        }
        self.offset = self.offset.min(len - visible);
    }

    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl EventHandler for CartPanelState {
    type Event = CartPanelEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                if self.selected + 1 < self.line_ids.len() {
                    self.selected += 1;
                }
                None
            }
            TuiEvent::RemoveLine => self
                .line_ids
                .get(self.selected)
                .map(|id| CartPanelEvent::Remove(*id)),
            _ => None,
        }
    }
}

pub struct CartPanel<'a> {
    pub state: &'a mut CartPanelState,
    pub view: &'a CartView,
    pub currency: &'a str,
    pub is_focused: bool,
}

impl Component for CartPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.is_focused {
            Color::Green
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(area);

        let [lines_area, _, total_area] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);
        let visible = usize::from(lines_area.height);

        self.state.remove_targets.clear();

        let title = match self.view {
            CartView::Empty { message } => {
                self.state.sync(Vec::new());
                self.state.scroll_to_selected(visible);
                frame.render_widget(
                    Paragraph::new(*message).style(Style::default().fg(Color::DarkGray)),
                    lines_area,
                );
                String::from(" Your Cart ")
            }
            CartView::Lines { rows, .. } => {
                self.state.sync(rows.iter().map(|row| row.plant_id).collect());
                self.state.scroll_to_selected(visible);
                let offset = self.state.offset;
                let glyph_width = 1;
                let on_screen = rows.iter().enumerate().skip(offset).take(visible);
                for (slot, (index, row)) in on_screen.enumerate() {
                    let y = lines_area.y + slot as u16;
                    let selected = self.is_focused && index == self.state.selected;
                    let text_style = if selected {
                        Style::default().fg(Color::Black).bg(Color::Green)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    let text_width = lines_area.width.saturating_sub(glyph_width + 1);
                    let text_rect = Rect::new(lines_area.x, y, text_width, 1);
                    frame.render_widget(
                        Span::styled(cart_line_text(row, self.currency), text_style),
                        text_rect,
                    );

                    let remove_rect = Rect::new(
                        lines_area.right().saturating_sub(glyph_width),
                        y,
                        glyph_width,
                        1,
                    );
                    frame.render_widget(
                        Span::styled(REMOVE_GLYPH, Style::default().fg(Color::Red)),
                        remove_rect,
                    );
                    self.state.remove_targets.push((remove_rect, row.plant_id));
                }

                if rows.len() > visible {
                    let last = (offset + visible).min(rows.len());
                    format!(" Your Cart ({}-{} of {}) ", offset + 1, last, rows.len())
                } else {
                    String::from(" Your Cart ")
                }
            }
        };
        frame.render_widget(block.title(title), area);

        let total = Line::from(vec![
            Span::raw("Total: "),
            Span::styled(
                format_price(self.currency, self.view.total()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(total, total_area);
    }
}
