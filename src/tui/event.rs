use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,
    ForceQuit, // Ctrl+C, quits even with the modal open
    NextFilter,
    PrevFilter,
    AddToCart,
    RemoveLine,

    // TUI-local events (handled directly in TUI)
    Submit,
    Escape,
    ToggleFocus,
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,
    MouseClick(u16, u16),
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(Duration::ZERO)
}

pub fn poll_event_timeout(timeout: Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            log::warn!("Event poll failed: {}", e);
            return None;
        }
    }
    match event::read() {
        Ok(event) => translate(event),
        Err(e) => {
            log::warn!("Event read failed: {}", e);
            None
        }
    }
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            // Some terminals report releases and repeats too
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
                (_, KeyCode::Char('a')) => Some(TuiEvent::AddToCart),
                (_, KeyCode::Char('c')) => Some(TuiEvent::ToggleFocus),
                (_, KeyCode::Char('d')) | (_, KeyCode::Delete) => Some(TuiEvent::RemoveLine),
                (_, KeyCode::Tab) => Some(TuiEvent::NextFilter),
                (_, KeyCode::BackTab) => Some(TuiEvent::PrevFilter),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
                (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
                (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
                (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
                (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
                (_, KeyCode::PageDown) => Some(TuiEvent::ScrollPageDown),
                _ => None,
            }
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, MouseEvent};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_ctrl_c_is_force_quit_and_c_toggles_focus() {
        assert_eq!(
            translate(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(TuiEvent::ForceQuit)
        );
        assert_eq!(
            translate(key(KeyCode::Char('c'), KeyModifiers::NONE)),
            Some(TuiEvent::ToggleFocus)
        );
    }

    #[test]
    fn test_tab_cycles_filters() {
        assert_eq!(
            translate(key(KeyCode::Tab, KeyModifiers::NONE)),
            Some(TuiEvent::NextFilter)
        );
        assert_eq!(
            translate(key(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(TuiEvent::PrevFilter)
        );
    }

    #[test]
    fn test_key_release_ignored() {
        let mut release = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(translate(Event::Key(release)), None);
    }

    #[test]
    fn test_left_click_and_wheel() {
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 4,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(translate(click), Some(TuiEvent::MouseClick(12, 4)));

        let wheel = Event::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(translate(wheel), Some(TuiEvent::ScrollDown));
    }
}
