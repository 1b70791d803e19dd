//! Frame layout and top-level drawing.
//!
//! ```text
//! ┌ title bar (1 row) ─────────────────────────────────────┐
//! │ Categories (wraps as needed)                           │
//! ├──────────────────────────────────────┬─────────────────┤
//! │ Plants grid                          │ Your Cart       │
//! ├──────────────────────────────────────┴─────────────────┤
//! └ footer: notice or key hints (1 row) ───────────────────┘
//! ```

use std::time::Duration;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::category_bar::rows_needed;
use crate::tui::components::{
    CartPanel, CategoryBar, DetailModal, ModalLayout, PlantGrid, TitleBar,
};
use crate::tui::{Focus, TuiState};

/// Width of the cart panel, borders included.
const CART_WIDTH: u16 = 34;

const KEY_HINTS: &str =
    "Tab filter | arrows move | Enter details | a add | c cart | d remove | q quit";

pub struct ScreenLayout {
    pub title: Rect,
    pub categories: Rect,
    pub grid: Rect,
    pub cart: Rect,
    pub footer: Rect,
}

pub fn screen_layout(area: Rect, filter_labels: &[&str]) -> ScreenLayout {
    use Constraint::{Length, Min};
    let category_rows = rows_needed(filter_labels, area.width.saturating_sub(2));
    let [title, categories, main, footer] = Layout::vertical([
        Length(1),
        Length(category_rows + 2),
        Min(0),
        Length(1),
    ])
    .areas(area);
    let [grid, cart] = Layout::horizontal([Min(0), Length(CART_WIDTH)]).areas(main);
    ScreenLayout {
        title,
        categories,
        grid,
        cart,
        footer,
    }
}

pub fn draw_ui(
    frame: &mut Frame,
    app: &App,
    tui: &mut TuiState,
    now: Duration,
    spinner_frame: usize,
) {
    let labels: Vec<&str> = app
        .filters
        .controls()
        .iter()
        .map(|control| control.label.as_str())
        .collect();
    let layout = screen_layout(frame.area(), &labels);

    TitleBar::new(
        app.status_message.clone(),
        app.is_loading,
        spinner_frame,
        app.cart.units(),
    )
    .render(frame, layout.title);

    CategoryBar::new(labels, app.filters.active_index(), &mut tui.category_targets)
        .render(frame, layout.categories);

    PlantGrid {
        state: &mut tui.grid,
        plants: app.view.rendered(),
        total: app.view.total(),
        generation: app.view.generation(),
        currency: app.currency(),
        is_loading: app.is_loading,
        is_focused: tui.focus == Focus::Grid,
        now,
    }
    .render(frame, layout.grid);

    let cart_view = app.cart.view();
    CartPanel {
        state: &mut tui.cart,
        view: &cart_view,
        currency: app.currency(),
        is_focused: tui.focus == Focus::Cart,
    }
    .render(frame, layout.cart);

    draw_footer(frame, app, layout.footer);

    tui.modal = match &app.detail {
        Some(plant) => {
            let area = frame.area();
            DetailModal {
                plant,
                currency: app.currency(),
            }
            .render(frame, area);
            Some(ModalLayout::for_area(area))
        }
        None => None,
    };
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let line = match &app.notice {
        Some(notice) => Line::from(Span::styled(
            notice.as_str(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        None => Line::from(vec![
            Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray)),
            Span::raw(format!(
                " | Showing {} of {}",
                app.view.loaded(),
                app.view.total()
            )),
        ]),
    };
    frame.render_widget(line, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::{loaded_app, numbered_plants, plant};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen_text(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| draw_ui(f, app, tui, Duration::from_secs(5), 0))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_layout_grows_with_wrapped_categories() {
        let area = Rect::new(0, 0, 30, 40);
        let one_row = screen_layout(area, &["All Trees"]);
        let many = screen_layout(area, &["All Trees", "Fruit Tree", "Flowering", "Herb"]);
        assert_eq!(one_row.categories.height, 3);
        assert!(many.categories.height > one_row.categories.height);
        assert!(many.grid.height < one_row.grid.height);
    }

    #[test]
    fn test_full_screen_renders() {
        let mut app = loaded_app(numbered_plants(10));
        update(&mut app, Action::AddToCart(1));
        let mut tui = TuiState::new();

        let text = screen_text(&app, &mut tui);
        assert!(text.contains("Greenleaf Nursery"));
        assert!(text.contains("[ All Trees ]"));
        assert!(text.contains("Plants (6 of 10)"));
        assert!(text.contains("Plant 1 (x1) - ৳101"));
        assert!(text.contains("Showing 6 of 10"));
        assert_eq!(tui.category_targets.len(), 1);
        assert!(tui.modal.is_none());
    }

    #[test]
    fn test_notice_replaces_hints() {
        let mut app = loaded_app(Vec::new());
        app.notice = Some("Could not load plants: network error".to_string());
        let mut tui = TuiState::new();

        let text = screen_text(&app, &mut tui);
        assert!(text.contains("Could not load plants"));
        assert!(!text.contains("Showing"));
    }

    #[test]
    fn test_open_detail_records_modal_layout() {
        let mut app = loaded_app(vec![plant(1, "Mango", Some("Fruit Tree"), 500)]);
        update(&mut app, Action::OpenDetail(1));
        let mut tui = TuiState::new();

        let text = screen_text(&app, &mut tui);
        assert!(text.contains("[x]"));
        assert!(tui.modal.is_some());
    }
}
