//! Event handling for the Emojistory TUI

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

use emojistory_core::{LookupTrigger, PendingLookup};

use crate::app::{App, InputMode};

/// Result of handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
    NeedsRedraw,
    /// Words that completed and should be looked up
    Lookup(Vec<PendingLookup>),
}

impl EventResult {
    fn from_pending(pending: Vec<PendingLookup>) -> Self {
        if pending.is_empty() {
            EventResult::NeedsRedraw
        } else {
            EventResult::Lookup(pending)
        }
    }
}

/// Handle a terminal event
pub fn handle_event(app: &mut App, event: Event) -> EventResult {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Paste(text) if app.input_mode == InputMode::Insert && !app.has_overlay() => {
            EventResult::from_pending(app.paste(&text))
        }
        Event::Resize(_, _) => EventResult::NeedsRedraw,
        _ => EventResult::Continue,
    }
}

/// Handle a mouse event
fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> EventResult {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            app.scroll_up(3);
            EventResult::NeedsRedraw
        }
        MouseEventKind::ScrollDown => {
            app.scroll_down(3);
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    // Global shortcuts (always work)
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        return EventResult::Quit;
    }

    if app.has_overlay() {
        return handle_overlay_key(app, key);
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Insert => handle_insert_mode(app, key),
    }
}

/// Handle keys in NORMAL mode
fn handle_normal_mode(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('i') => {
            app.input_mode = InputMode::Insert;
            EventResult::NeedsRedraw
        }
        KeyCode::Char('a') => {
            app.input_mode = InputMode::Insert;
            app.cursor_end();
            EventResult::NeedsRedraw
        }

        KeyCode::Char('?') | KeyCode::F(1) => {
            app.toggle_help();
            EventResult::NeedsRedraw
        }

        KeyCode::Char('n') | KeyCode::Tab => {
            app.toggle_names();
            EventResult::NeedsRedraw
        }

        KeyCode::Char('q') => EventResult::Quit,

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => {
            app.scroll_down(1);
            EventResult::NeedsRedraw
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.scroll_up(1);
            EventResult::NeedsRedraw
        }
        KeyCode::Char('G') => {
            app.scroll_to_bottom();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('g') => {
            app.story_scroll = 0;
            EventResult::NeedsRedraw
        }

        _ => EventResult::Continue,
    }
}

/// Handle keys in INSERT mode (typing the story)
fn handle_insert_mode(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            EventResult::NeedsRedraw
        }

        KeyCode::Tab => {
            app.toggle_names();
            EventResult::NeedsRedraw
        }

        KeyCode::Enter => match app.trigger() {
            LookupTrigger::Explicit => match app.submit_input() {
                Ok(pending) => EventResult::Lookup(vec![pending]),
                // The session state carries the validation message
                Err(_) => EventResult::NeedsRedraw,
            },
            // Enter finishes the current word like a space
            LookupTrigger::Implicit => EventResult::from_pending(app.type_char(' ')),
        },

        // Input editing
        KeyCode::Left => {
            app.cursor_left();
            EventResult::NeedsRedraw
        }
        KeyCode::Right => {
            app.cursor_right();
            EventResult::NeedsRedraw
        }
        KeyCode::Home => {
            app.cursor_home();
            EventResult::NeedsRedraw
        }
        KeyCode::End => {
            app.cursor_end();
            EventResult::NeedsRedraw
        }
        KeyCode::Backspace => EventResult::from_pending(app.backspace()),
        KeyCode::Delete => EventResult::from_pending(app.delete()),

        KeyCode::Char(c) => EventResult::from_pending(app.type_char(c)),

        _ => EventResult::Continue,
    }
}

/// Handle key when overlay is open
fn handle_overlay_key(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.close_overlay();
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}
