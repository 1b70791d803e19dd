//! # TitleBar Component
//!
//! Top status bar: shop name, status message, cart size and a spinner while
//! a catalog fetch is in flight.
//!
//! ## Conditional Formatting
//!
//! 1. **Loading**: `"Greenleaf Nursery | Loading plants... ⠹ | Cart: 3"`
//! 2. **Status message**: `"Greenleaf Nursery | 42 plants | Cart: 3"`
//! 3. **Default**: `"Greenleaf Nursery | Cart: 0"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Top status bar component.
///
/// All fields are props from the parent.
pub struct TitleBar {
    pub status_message: String,
    pub is_loading: bool,
    pub spinner_frame: usize,
    /// Total units in the cart.
    pub cart_units: u32,
}

impl TitleBar {
    pub fn new(
        status_message: String,
        is_loading: bool,
        spinner_frame: usize,
        cart_units: u32,
    ) -> Self {
        Self {
            status_message,
            is_loading,
            spinner_frame,
            cart_units,
        }
    }

    fn text(&self) -> String {
        let mut text = String::from("Greenleaf Nursery");
        if !self.status_message.is_empty() {
            text.push_str(" | ");
            text.push_str(&self.status_message);
        }
        if self.is_loading {
            text.push(' ');
            text.push(SPINNER[self.spinner_frame % SPINNER.len()]);
        }
        text.push_str(&format!(" | Cart: {}", self.cart_units));
        text
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}
