use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::catalog::Plant;
use crate::core::cart::format_price;
use crate::core::reveal::CardPhase;

/// Rows per card, borders included.
pub const CARD_HEIGHT: u16 = 7;
/// Card-relative row holding the clickable plant name.
pub const NAME_ROW: u16 = 1;
/// Card-relative row holding the add-to-cart button.
pub const BUTTON_ROW: u16 = 5;
/// Characters of description shown on a card.
pub const SUMMARY_CHARS: usize = 50;

/// Below this reveal progress the card is still drawn dim.
const ENTERING_DIM_UNTIL: f32 = 0.5;

/// A stateless card for one plant.
///
/// `Hidden` cards draw nothing; the space is kept so the grid geometry
/// doesn't jump when they appear.
pub struct PlantCard<'a> {
    pub plant: &'a Plant,
    pub currency: &'a str,
    pub phase: CardPhase,
    pub is_selected: bool,
}

impl<'a> PlantCard<'a> {
    pub fn new(plant: &'a Plant, currency: &'a str, phase: CardPhase, is_selected: bool) -> Self {
        Self {
            plant,
            currency,
            phase,
            is_selected,
        }
    }

    fn base_style(&self) -> Style {
        match self.phase {
            CardPhase::Entering(progress) if progress < ENTERING_DIM_UNTIL => {
                Style::default().add_modifier(Modifier::DIM)
            }
            _ => Style::default(),
        }
    }
}

impl Widget for PlantCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.phase == CardPhase::Hidden {
            return;
        }

        let base = self.base_style();
        let border_style = if self.is_selected {
            base.fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            base.fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let [name_area, summary_area, meta_area, button_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Line::from(Span::styled(
            self.plant.name.as_str(),
            base.fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        ))
        .render(name_area, buf);

        Paragraph::new(self.plant.summary(SUMMARY_CHARS))
            .style(base.fg(Color::Gray))
            .wrap(Wrap { trim: true })
            .render(summary_area, buf);

        let price = format_price(self.currency, self.plant.price);
        let [tag_area, price_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(price.width() as u16),
        ])
        .areas(meta_area);
        Span::styled(
            self.plant.display_category(),
            base.fg(Color::Green).bg(Color::Rgb(220, 252, 231)),
        )
        .render(tag_area, buf);
        Span::styled(price, base.fg(Color::White).add_modifier(Modifier::BOLD))
            .render(price_area, buf);

        Paragraph::new("[ Add to Cart ]")
            .style(base.fg(Color::Green))
            .alignment(Alignment::Center)
            .render(button_area, buf);
    }
}
