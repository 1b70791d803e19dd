//! # Category Bar Component
//!
//! One `[ label ]` control per filter, laid out left to right and wrapped
//! onto extra rows when the terminal is narrow. The active control is drawn
//! reversed.
//!
//! The control rectangles from the last render are handed back to the
//! parent for mouse hit testing.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

/// Blank columns between controls.
const GAP: u16 = 1;
/// `"[ "` + `" ]"` around each label.
const DECORATION: u16 = 4;

fn control_width(label: &str, max: u16) -> u16 {
    (label.width() as u16).saturating_add(DECORATION).min(max)
}

/// Place controls inside `inner`, wrapping to a new row when a control
/// doesn't fit. Only controls that land inside `inner` are returned, so the
/// result is always a prefix of `labels`.
pub fn layout_controls(labels: &[&str], inner: Rect) -> Vec<Rect> {
    let mut rects = Vec::with_capacity(labels.len());
    if inner.width == 0 || inner.height == 0 {
        return rects;
    }
    let mut x = inner.x;
    let mut y = inner.y;
    for label in labels {
        let width = control_width(label, inner.width);
        if x > inner.x && x + width > inner.right() {
            x = inner.x;
            y += 1;
        }
        if y >= inner.bottom() {
            break;
        }
        rects.push(Rect::new(x, y, width, 1));
        x = x.saturating_add(width + GAP);
    }
    rects
}

/// Rows needed to show every control at `inner_width`.
pub fn rows_needed(labels: &[&str], inner_width: u16) -> u16 {
    let probe = Rect {
        x: 0,
        y: 0,
        width: inner_width,
        height: 1000,
    };
    layout_controls(labels, probe)
        .last()
        .map_or(1, |last| last.y + 1)
}

/// Index of the control under a screen position.
pub fn hit_test_control(targets: &[Rect], col: u16, row: u16) -> Option<usize> {
    targets
        .iter()
        .position(|rect| rect.contains(Position { x: col, y: row }))
}

pub struct CategoryBar<'a> {
    pub labels: Vec<&'a str>,
    pub active: usize,
    /// Filled during render with the on-screen rectangle of each control.
    pub targets: &'a mut Vec<Rect>,
}

impl<'a> CategoryBar<'a> {
    pub fn new(labels: Vec<&'a str>, active: usize, targets: &'a mut Vec<Rect>) -> Self {
        Self {
            labels,
            active,
            targets,
        }
    }
}

impl Component for CategoryBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Categories ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        *self.targets = layout_controls(&self.labels, inner);

        for (index, rect) in self.targets.iter().enumerate() {
            let style = if index == self.active {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Green)
            };
            let text = format!("[ {} ]", self.labels[index]);
            frame.render_widget(Span::styled(text, style), *rect);
        }
    }
}
