//! # Detail Modal
//!
//! Centered overlay with everything known about one plant. Closed by the
//! `[x]` control, a click on the backdrop, or Esc.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::catalog::Plant;
use crate::core::cart::format_price;
use crate::tui::component::Component;

const CLOSE_LABEL: &str = "[x]";

/// Where the modal landed on screen, kept for mouse hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalLayout {
    pub panel: Rect,
    pub close: Rect,
}

impl ModalLayout {
    pub fn for_area(area: Rect) -> Self {
        let panel = centered_rect(60, 70, area);
        let close_width = CLOSE_LABEL.len() as u16;
        let close = Rect::new(
            panel.right().saturating_sub(close_width + 1),
            panel.y,
            close_width.min(panel.width),
            1,
        );
        Self { panel, close }
    }

    /// True if a click at this position should close the modal.
    pub fn closes_on_click(&self, col: u16, row: u16) -> bool {
        let pos = Position { x: col, y: row };
        self.close.contains(pos) || !self.panel.contains(pos)
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

fn label(text: &str) -> Span<'_> {
    Span::styled(text, Style::default().fg(Color::DarkGray))
}

pub struct DetailModal<'a> {
    pub plant: &'a Plant,
    pub currency: &'a str,
}

impl DetailModal<'_> {
    /// Body lines, description wrapped to `width` columns.
    fn lines(&self, width: u16) -> Vec<Line<'_>> {
        let mut lines = vec![
            Line::from(vec![label("Image: "), Span::raw(self.plant.image.as_str())]),
            Line::default(),
        ];
        let wrap_width = usize::from(width.max(1));
        lines.extend(
            textwrap::wrap(self.plant.description(), wrap_width)
                .into_iter()
                .map(|segment| Line::from(segment.into_owned())),
        );
        lines.push(Line::default());
        lines.push(Line::from(vec![
            label("Category: "),
            Span::styled(
                self.plant.display_category().to_string(),
                Style::default().fg(Color::Green),
            ),
        ]));
        lines.push(Line::from(vec![
            label("Price: "),
            Span::styled(
                format_price(self.currency, self.plant.price),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        lines
    }
}

impl Component for DetailModal<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let layout = ModalLayout::for_area(area);
        frame.render_widget(Clear, layout.panel);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .title(Span::styled(
                format!(" {} ", self.plant.name),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .padding(Padding::horizontal(1));
        let inner = block.inner(layout.panel);
        frame.render_widget(block, layout.panel);
        frame.render_widget(
            Span::styled(CLOSE_LABEL, Style::default().fg(Color::Red)),
            layout.close,
        );

        frame.render_widget(Paragraph::new(self.lines(inner.width)), inner);
    }
}
